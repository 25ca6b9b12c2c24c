//! Request executor: every network call goes through [`OpenAlexClient::execute`].

use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use super::OpenAlexClient;
use crate::error::{ClientError, ClientResult, classify_transport};
use crate::models::ListResponse;

const FORBIDDEN_HINT: &str = "are you using OpenAlex ids? Namespaced or malformed ids are not \
                              accepted in openalex_id filters";

/// Outcome of a single GET after retries.
///
/// Timeouts and connection failures never show up here: the retry middleware
/// absorbs them and reports `TransientNetwork` once it gives up. A timeout
/// while reading the body is reported as `TransientNetwork` without a retry.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// 2xx with a JSON body.
    Success(Value),
    /// 404.
    NotFound,
    /// Any other status.
    HardFailure { status: u16, message: String },
}

impl FetchOutcome {
    async fn from_response(response: reqwest::Response) -> ClientResult<Self> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await.map_err(classify_transport)?;
            return Ok(Self::Success(serde_json::from_slice(&body)?));
        }

        if status == StatusCode::NOT_FOUND {
            return Ok(Self::NotFound);
        }

        let message = response.text().await.unwrap_or_default();
        Ok(Self::HardFailure { status: status.as_u16(), message })
    }

    /// Payload of a lookup where 404 means "no such entity".
    pub fn into_optional(self) -> ClientResult<Option<Value>> {
        match self {
            Self::Success(value) => Ok(Some(value)),
            Self::NotFound => Ok(None),
            Self::HardFailure { status, message } => Err(failure(status, message)),
        }
    }

    /// Payload of a list request, where 404 is as fatal as any other status.
    pub fn into_required(self) -> ClientResult<Value> {
        match self {
            Self::Success(value) => Ok(value),
            Self::NotFound => Err(ClientError::remote(404, "list endpoint not found")),
            Self::HardFailure { status, message } => Err(failure(status, message)),
        }
    }
}

fn failure(status: u16, message: String) -> ClientError {
    if status == StatusCode::FORBIDDEN.as_u16() {
        ClientError::rejected(FORBIDDEN_HINT)
    } else {
        ClientError::remote(status, message)
    }
}

impl OpenAlexClient {
    /// Issue one GET, racing the cancellation token when one is bound.
    pub(crate) async fn execute(&self, url: Url) -> ClientResult<FetchOutcome> {
        tracing::debug!(%url, "GET");

        // The body read is part of the exchange, so cancellation covers it too.
        let exchange = self.exchange(url);
        match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                () = token.cancelled() => Err(ClientError::Cancelled),
                outcome = exchange => outcome,
            },
            None => exchange.await,
        }
    }

    async fn exchange(&self, url: Url) -> ClientResult<FetchOutcome> {
        let response = self.http.get(url).send().await?;
        FetchOutcome::from_response(response).await
    }

    /// GET a list endpoint and decode its envelope.
    pub(crate) async fn fetch_list(&self, url: Url) -> ClientResult<ListResponse<Value>> {
        let value = self.execute(url).await?.into_required()?;
        Ok(serde_json::from_value(value)?)
    }
}

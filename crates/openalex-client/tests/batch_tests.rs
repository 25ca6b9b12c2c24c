//! Batched lookups through `openalex_id` filters.

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use openalex_client::models::EntityType;
use openalex_client::{ClientError, Config, OpenAlexClient};

fn entity(prefix: char, n: u32) -> Value {
    json!({"id": format!("https://openalex.org/{prefix}{n}"), "display_name": format!("{prefix}{n}")})
}

fn page(results: Vec<Value>) -> Value {
    json!({
        "meta": {"count": results.len(), "db_response_time_ms": 3, "page": 1, "per_page": 2},
        "results": results,
    })
}

fn client_with_limit(server: &MockServer, page_limit: usize) -> OpenAlexClient {
    let config = Config::for_testing(&server.uri()).with_page_limit(page_limit).unwrap();
    OpenAlexClient::new(config).unwrap()
}

#[tokio::test]
async fn test_batch_chunks_by_page_limit_and_keeps_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("filter", "openalex_id:W1|W2"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![entity('W', 1), entity('W', 2)])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("filter", "openalex_id:W3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![entity('W', 3)])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_limit(&server, 2);
    let works = client.get_works(&["W1", "https://openalex.org/W2", "W3"]).await.unwrap();

    let ids: Vec<&str> = works.iter().map(|w| w.short_id()).collect();
    assert_eq!(ids, vec!["W1", "W2", "W3"]);
}

#[tokio::test]
async fn test_get_entities_classifies_from_first_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/authors"))
        .and(query_param("filter", "openalex_id:A1|A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![entity('A', 1), entity('A', 2)])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_limit(&server, 50);
    let authors = client.get_entities(&["A1", "A2"]).await.unwrap();

    assert_eq!(authors.len(), 2);
    assert!(authors.iter().all(|a| a.entity_type() == EntityType::Author));
}

#[tokio::test]
async fn test_concurrent_chunks_keep_submission_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("filter", "openalex_id:C1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![entity('C', 1)]))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("filter", "openalex_id:C2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![entity('C', 2)])))
        .mount(&server)
        .await;

    let config = Config::for_testing(&server.uri())
        .with_page_limit(1)
        .unwrap()
        .with_batch_concurrency(2);
    let client = OpenAlexClient::new(config).unwrap();

    let concepts = client.get_concepts(&["C1", "C2"]).await.unwrap();
    let ids: Vec<&str> = concepts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["https://openalex.org/C1", "https://openalex.org/C2"]);
}

#[tokio::test]
async fn test_batch_upper_cases_ids_like_single_lookups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("filter", "openalex_id:W1|W2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![entity('W', 1), entity('W', 2)])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_limit(&server, 50);
    let works = client.get_works(&["w1", "https://openalex.org/w2"]).await.unwrap();

    assert_eq!(works.len(), 2);
}

#[tokio::test]
async fn test_forbidden_is_rejected_with_hint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let client = client_with_limit(&server, 50);
    let err = client.get_works(&["doi:10.1/abc"]).await.unwrap_err();

    assert!(matches!(err, ClientError::RemoteRejected { .. }));
    assert!(err.to_string().contains("OpenAlex ids"));
}

#[tokio::test]
async fn test_failed_chunk_discards_earlier_chunks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("filter", "openalex_id:W1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![entity('W', 1)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("filter", "openalex_id:W2"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_with_limit(&server, 1);
    let err = client.get_works(&["W1", "W2"]).await.unwrap_err();
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn test_mixed_types_in_response_are_inconsistent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![entity('W', 1), entity('A', 2)])))
        .mount(&server)
        .await;

    let client = client_with_limit(&server, 50);
    let err = client.get_entities(&["W1", "A2"]).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::InconsistentBatch { expected: EntityType::Work, ref found } if found == "A2"
    ));
}

#[tokio::test]
async fn test_empty_batch_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let client = client_with_limit(&server, 50);
    let ids: [&str; 0] = [];
    let err = client.get_entities(&ids).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_referenced_works_batches_the_reference_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("filter", "openalex_id:W1560783210|W1966878097"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            json!({"id": "https://openalex.org/W1560783210"}),
            json!({"id": "https://openalex.org/W1966878097"}),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let work: openalex_client::models::Work =
        serde_json::from_str(include_str!("fixtures/work_W2741809807.json")).unwrap();
    let client = client_with_limit(&server, 50);

    let references = client.referenced_works(&work).await.unwrap();
    assert_eq!(references.len(), 2);
}

#[tokio::test]
async fn test_related_works_empty_list_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let work: openalex_client::models::Work =
        serde_json::from_value(json!({"id": "https://openalex.org/W1", "related_works": []})).unwrap();
    let client = client_with_limit(&server, 50);

    assert!(client.related_works(&work).await.unwrap().is_empty());
}

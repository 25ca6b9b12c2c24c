//! Single-entity lookups against a mock server.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use openalex_client::models::{EntityType, Reference};
use openalex_client::{ClientError, Config, OpenAlexClient};

fn work_fixture() -> Value {
    serde_json::from_str(include_str!("fixtures/work_W2741809807.json")).unwrap()
}

fn client(server: &MockServer) -> OpenAlexClient {
    OpenAlexClient::new(Config::for_testing(&server.uri())).unwrap()
}

#[tokio::test]
async fn test_get_entity_classifies_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works/W2741809807"))
        .respond_with(ResponseTemplate::new(200).set_body_json(work_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let entity = client(&server).get_entity("W2741809807").await.unwrap().unwrap();

    assert_eq!(entity.entity_type(), EntityType::Work);
    assert_eq!(entity.short_id(), Some("W2741809807"));
    let work = entity.into_work().unwrap();
    assert_eq!(work.publication_year, Some(2018));
    assert_eq!(work.author_names(), vec!["Heather Piwowar", "Stefanie Haustein"]);
}

#[tokio::test]
async fn test_canonical_url_and_short_code_hit_same_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works/W2741809807"))
        .respond_with(ResponseTemplate::new(200).set_body_json(work_fixture()))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    let a = client.get_entity("https://openalex.org/W2741809807").await.unwrap().unwrap();
    let b = client.get_entity("w2741809807").await.unwrap().unwrap();
    assert_eq!(a.id(), b.id());
}

#[tokio::test]
async fn test_not_found_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/authors/A404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let result = client(&server).get_author("A404").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_server_error_is_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/concepts/C1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).get_entity("C1").await.unwrap_err();
    assert!(
        matches!(err, ClientError::RemoteError { status: 500, ref message } if message.contains("Internal")),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_unrecognized_prefix_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let err = client(&server).get_entity("Z999").await.unwrap_err();
    assert!(matches!(err, ClientError::UnrecognizedIdentifier { ref id } if id == "Z999"));
}

#[tokio::test]
async fn test_empty_id_is_invalid_argument() {
    let server = MockServer::start().await;
    let err = client(&server).get_entity("  ").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_doi_lookup_passes_namespace_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works/doi:10.7717/peerj.4375"))
        .respond_with(ResponseTemplate::new(200).set_body_json(work_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let work = client(&server).get_work("doi:10.7717/peerj.4375").await.unwrap().unwrap();
    assert_eq!(work.doi_id(), Some("10.7717/peerj.4375"));
}

#[tokio::test]
async fn test_namespaced_id_cannot_be_classified() {
    let server = MockServer::start().await;
    let err = client(&server).get_entity("pmid:29456894").await.unwrap_err();
    assert!(matches!(err, ClientError::UnrecognizedIdentifier { .. }));
}

#[tokio::test]
async fn test_typed_getter_rejects_other_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let err = client(&server).get_institution("A1969205032").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_hydrate_dehydrated_institution() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/institutions/I4200000001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "https://openalex.org/I4200000001",
            "display_name": "Impactstory",
            "country_code": "US",
            "type": "nonprofit",
            "geo": {"city": "Sanford", "country_code": "US"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let work: openalex_client::models::Work = serde_json::from_value(work_fixture()).unwrap();
    let reference = &work.authorships[0].institutions[0];

    let full = client(&server).hydrate(reference).await.unwrap().unwrap();
    let institution = full.into_institution().unwrap();
    assert_eq!(institution.display_name.as_deref(), Some("Impactstory"));
    assert_eq!(institution.geo.unwrap().city.as_deref(), Some("Sanford"));
}

#[tokio::test]
async fn test_hydrate_reference_without_id() {
    let server = MockServer::start().await;
    let work: openalex_client::models::Work = serde_json::from_value(json!({
        "id": "https://openalex.org/W1",
        "authorships": [{"author": {"display_name": "Anonymous"}}],
    }))
    .unwrap();

    let author = work.authorships[0].author.as_ref().unwrap();
    let err = client(&server).hydrate(author).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));
}

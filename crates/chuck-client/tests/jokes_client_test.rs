//! Contract tests for the jokes client against a mocked `/jokes/random`.
//!
//! | Case | Expected |
//! |------|----------|
//! | 200 with full payload | `Joke` with passthrough fields |
//! | non-2xx | `ApiError` (network class) |
//! | closed port | `Http` (network class) |
//! | non-JSON body | `Deserialization` |
//! | JSON without `id`/`value` | `Validation` |

use chuck_client::{ChuckApiConfig, ChuckApiError, ChuckClient, JokeSource};
use chuck_core::ValidationError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(uri: &str) -> ChuckClient {
    ChuckClient::new(ChuckApiConfig::local_mock(uri).unwrap()).unwrap()
}

#[tokio::test]
async fn random_returns_joke_with_passthrough_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jokes/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "categories": [],
            "created_at": "2020-01-05 13:42:19.576875",
            "icon_url": "https://api.chucknorris.io/img/avatar/chuck-norris.png",
            "id": "a1",
            "updated_at": "2020-01-05 13:42:19.576875",
            "url": "https://api.chucknorris.io/jokes/a1",
            "value": "Chuck can divide by zero."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let joke = client.jokes().random().await.unwrap();

    assert_eq!(joke.id.as_str(), "a1");
    assert_eq!(joke.value, "Chuck can divide by zero.");
    assert_eq!(
        joke.extra.get("url").and_then(|v| v.as_str()),
        Some("https://api.chucknorris.io/jokes/a1")
    );
}

#[tokio::test]
async fn fetch_random_via_trait_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jokes/random"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "b2", "value": "Roundhouse."})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let source: Box<dyn JokeSource> = Box::new(test_client(&mock_server.uri()));
    let joke = source.fetch_random().await.unwrap();
    assert_eq!(joke.id.as_str(), "b2");
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proxy/jokes/random"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "c3", "value": "x"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&format!("{}/proxy", mock_server.uri()));
    let joke = client.jokes().random().await.unwrap();
    assert_eq!(joke.id.as_str(), "c3");
}

#[tokio::test]
async fn non_success_status_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jokes/random"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.jokes().random().await.unwrap_err();

    assert!(err.is_network());
    match err {
        ChuckApiError::ApiError { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_is_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server.uri())
        .jokes()
        .random()
        .await
        .unwrap_err();
    assert!(matches!(err, ChuckApiError::ApiError { status: 404, .. }));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    // Port 1 is closed; the connection is refused.
    let err = test_client("http://127.0.0.1:1")
        .jokes()
        .random()
        .await
        .unwrap_err();
    assert!(matches!(err, ChuckApiError::Http { .. }));
    assert!(err.is_network());
}

#[tokio::test]
async fn non_json_body_is_deserialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jokes/random"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server.uri())
        .jokes()
        .random()
        .await
        .unwrap_err();
    assert!(matches!(err, ChuckApiError::Deserialization { .. }));
    assert!(!err.is_network());
}

#[tokio::test]
async fn missing_value_is_validation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jokes/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "a1"})))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server.uri())
        .jokes()
        .random()
        .await
        .unwrap_err();
    match err {
        ChuckApiError::Validation { source, .. } => {
            assert_eq!(source, ValidationError::MissingField("value"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_id_is_validation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jokes/random"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "", "value": "x"})),
        )
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server.uri())
        .jokes()
        .random()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ChuckApiError::Validation {
            source: ValidationError::EmptyId,
            ..
        }
    ));
}

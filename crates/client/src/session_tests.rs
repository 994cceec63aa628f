use std::time::Duration;

use authorsearch_core::{SearchError, SearchField, SearchQuery};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::AuthorSearchClient;
use crate::session::{SearchSession, SubmitOutcome};

const AUTHORS_PATH: &str = "/resources/authors";

async fn setup() -> (MockServer, SearchSession) {
    let server = MockServer::start().await;
    let client = AuthorSearchClient::builder()
        .base_url(format!("{}{AUTHORS_PATH}", server.uri()))
        .build()
        .unwrap();
    (server, SearchSession::new(client))
}

fn query(fragment: &str) -> SearchQuery {
    SearchQuery::new(fragment, SearchField::FirstName).unwrap()
}

async fn mount_author(server: &MockServer, fragment: &str, id: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(AUTHORS_PATH))
        .and(query_param("firstName", fragment))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"author": [{"authorid": id, "authorfirst": fragment}]}))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_starts_empty() {
    let (_server, session) = setup().await;
    assert!(session.results().await.is_empty());
    assert_eq!(session.generation(), 0);
}

#[tokio::test]
async fn test_submit_applies_results() {
    let (server, session) = setup().await;
    mount_author(&server, "Anne", "1", Duration::ZERO).await;

    let outcome = session.submit(&query("Anne")).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Applied(1));
    assert_eq!(session.generation(), 1);

    let results = session.results().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), 1);
}

#[tokio::test]
async fn test_stale_response_discarded() {
    let (server, session) = setup().await;
    mount_author(&server, "Slow", "1", Duration::from_millis(500)).await;
    mount_author(&server, "Fast", "2", Duration::ZERO).await;

    let slow_query = query("Slow");
    let fast_query = query("Fast");
    let (slow, fast) = tokio::join!(session.submit(&slow_query), session.submit(&fast_query));

    assert_eq!(slow.unwrap(), SubmitOutcome::Stale);
    assert_eq!(fast.unwrap(), SubmitOutcome::Applied(1));

    let results = session.results().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].summary.first_name, "Fast");
    assert_eq!(session.generation(), 2);
}

#[tokio::test]
async fn test_stale_failure_leaves_results_untouched() {
    let (server, session) = setup().await;
    Mock::given(method("GET"))
        .and(path(AUTHORS_PATH))
        .and(query_param("firstName", "Broken"))
        .respond_with(ResponseTemplate::new(500).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;
    mount_author(&server, "Fast", "2", Duration::ZERO).await;

    let broken_query = query("Broken");
    let fast_query = query("Fast");
    let (broken, fast) = tokio::join!(session.submit(&broken_query), session.submit(&fast_query));

    assert_eq!(broken.unwrap(), SubmitOutcome::Stale);
    assert_eq!(fast.unwrap(), SubmitOutcome::Applied(1));

    let results = session.results().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), 2);
}

#[tokio::test]
async fn test_failed_latest_search_clears_results() {
    let (server, session) = setup().await;
    mount_author(&server, "Anne", "1", Duration::ZERO).await;
    Mock::given(method("GET"))
        .and(path(AUTHORS_PATH))
        .and(query_param("firstName", "Nobody"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"author": []})))
        .mount(&server)
        .await;

    session.submit(&query("Anne")).await.unwrap();
    assert_eq!(session.results().await.len(), 1);

    let err = session.submit(&query("Nobody")).await.unwrap_err();
    assert!(matches!(err, SearchError::NotFound));
    assert!(session.results().await.is_empty());
}

#[tokio::test]
async fn test_snapshot_survives_replacement() {
    let (server, session) = setup().await;
    mount_author(&server, "Anne", "1", Duration::ZERO).await;
    mount_author(&server, "Mark", "2", Duration::ZERO).await;

    session.submit(&query("Anne")).await.unwrap();
    let before = session.results().await;
    session.submit(&query("Mark")).await.unwrap();

    assert_eq!(before[0].id(), 1);
    assert_eq!(session.results().await[0].id(), 2);
}

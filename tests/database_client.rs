use admin_console::client::database::parse_content_range;
use admin_console::{AdminError, DatabaseClient, DatabaseCredentials, RecordStore, StatsSource, Team, User};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> DatabaseClient {
    DatabaseClient::new(&DatabaseCredentials {
        url: format!("{}/", server.uri()),
        key: "anon-key".to_string(),
    })
    .expect("valid credentials")
}

#[tokio::test]
async fn test_select_sends_projection_order_and_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("select", "*"))
        .and(query_param("order", "updated_at.desc"))
        .and(header("apikey", "anon-key"))
        .and(header("authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "full_name": "Ada", "email": "ada@example.com", "status": null},
            {"id": "8", "full_name": "Grace", "updated_at": "2024-05-01T10:00:00Z", "avatar_url": null, "last_seen": "2024-05-01T09:58:00Z"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let users: Vec<User> = client(&server).select().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, "7");
    assert!(users[0].is_active());
    assert_eq!(users[1].email, None);
}

#[tokio::test]
async fn test_null_body_reads_as_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let teams = RecordStore::<Team>::list(&client(&server)).await.unwrap();
    assert!(teams.is_empty());
}

#[tokio::test]
async fn test_error_body_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})),
        )
        .mount(&server)
        .await;

    let err = RecordStore::<User>::list(&client(&server)).await.unwrap_err();
    match err {
        AdminError::HttpStatus { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_payload_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = RecordStore::<User>::list(&client(&server)).await.unwrap_err();
    assert!(matches!(err, AdminError::JsonError(_)));
}

#[tokio::test]
async fn test_remove_filters_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/teams"))
        .and(query_param("id", "eq.42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    RecordStore::<Team>::remove(&client(&server), "42").await.unwrap();
}

#[tokio::test]
async fn test_remove_with_empty_id_never_calls_out() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).delete_by_id("teams", "  ").await.unwrap_err();
    assert!(matches!(err, AdminError::MissingKey(_)));
}

#[tokio::test]
async fn test_count_reads_content_range() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/rest/v1/teams"))
        .and(header("prefer", "count=exact"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-range", "0-24/31"))
        .mount(&server)
        .await;

    assert_eq!(client(&server).count("teams", None).await.unwrap(), 31);
}

#[tokio::test]
async fn test_overview_keeps_counts_that_succeed() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/rest/v1/teams"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-range", "*/4"))
        .mount(&server)
        .await;

    let stats = client(&server).overview().await;
    assert_eq!(stats.total_users, None);
    assert_eq!(stats.active_users, None);
    assert_eq!(stats.total_teams, Some(4));
}

#[test]
fn test_content_range_star_total_is_missing() {
    assert_eq!(parse_content_range("0-9/*"), None);
}

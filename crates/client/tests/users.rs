mod common;

use recs_client::{ApiError, User, UserQuery, ValidationError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, BASIC_AUTH};

#[tokio::test]
async fn add_user_posts_encoded_payload_with_data_dict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/users/"))
        .and(header("authorization", BASIC_AUTH))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({
            "email": "a%40b.com",
            "user_id": "1",
            "data_dict": {"favorite_color": "red"},
            "async": 1,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let user = User::new("a@b.com", "1").with_attribute("favorite_color", "red");
    let response = client.add_user(user).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn batch_add_users_wraps_entries_under_batch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/users/"))
        .and(body_json(json!({
            "batch": [
                {"email": "a%40b.com", "user_id": "1"},
                {"email": "c%40d.com", "user_id": "2", "data_dict": {"first_name": "Cee"}},
            ],
            "async": 1,
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let users = vec![
        User::new("a@b.com", "1"),
        User {
            first_name: Some("Cee".into()),
            ..User::new("c@d.com", "2")
        },
    ];
    client.batch_add_users(users).await.unwrap();
}

#[tokio::test]
async fn batch_with_a_bad_entry_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let users = vec![User::new("a@b.com", "1"), User::new("", "2")];
    let err = client.batch_add_users(users).await.unwrap_err();

    match err {
        ApiError::Validation(ValidationError::BatchEntry { index, field }) => {
            assert_eq!(index, 1);
            assert_eq!(field, "email");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn get_user_sends_query_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/users"))
        .and(header("authorization", BASIC_AUTH))
        .and(query_param("email", "a@b.com"))
        .and(query_param("async", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get_user(UserQuery::by_email("a@b.com")).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn add_user_without_email_never_hits_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.add_user(User::new("", "1")).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::MissingField("email"))
    ));
    assert_eq!(
        err.to_string(),
        "validation error: missing required field `email`"
    );
}

#[tokio::test]
async fn empty_batch_is_still_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v3/users/"))
        .and(body_json(json!({"batch": [], "async": 1})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.batch_add_users(Vec::new()).await.unwrap();
    assert_eq!(response.status(), 200);
}

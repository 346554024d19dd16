//! Integration tests for the `Resources` facade.
//!
//! Every facade call must produce exactly the request the equivalent direct
//! client call produces.

use rest_api::rest::Resources;
use rest_api::{ApiConfig, HttpError, RestClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> RestClient {
    let address = server.address();
    let config = ApiConfig::builder()
        .protocol("http")
        .host(address.ip().to_string())
        .port(address.port())
        .base_path("/api")
        .version(2)
        .build()
        .unwrap();
    RestClient::new(config).unwrap()
}

#[tokio::test]
async fn test_get_matches_direct_client_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2,
            "username": "bulbasaur"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let users = Resources::new(client.clone(), "/users");

    let via_facade = users.get(2).await.unwrap();
    let via_client = client.get("/users/2").await.unwrap();

    assert_eq!(via_facade, via_client);
    assert_eq!(via_facade["username"], "bulbasaur");
}

#[tokio::test]
async fn test_ids_with_reserved_characters_match_direct_client_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(4)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let users = Resources::new(client.clone(), "/users");

    users.get("3/comments").await.unwrap();
    client.get("/users/3/comments").await.unwrap();
    users.get("x?expand=1").await.unwrap();
    client.get("/users/x?expand=1").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);

    assert_eq!(requests[0].url, requests[1].url);
    assert_eq!(requests[0].url.path(), "/api/v2/users/3/comments");

    assert_eq!(requests[2].url, requests[3].url);
    assert_eq!(requests[2].url.path(), "/api/v2/users/x");
    assert_eq!(requests[2].url.query(), Some("expand=1"));
}

#[tokio::test]
async fn test_list_fetches_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1},
            {"id": 2}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let users = Resources::new(create_client(&server), "/users");
    let all = users.list().await.unwrap();

    assert_eq!(all.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_post_targets_collection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/users"))
        .and(body_json(json!({"username": "pikachu"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 25})))
        .expect(1)
        .mount(&server)
        .await;

    let users = Resources::new(create_client(&server), "/users");
    let created = users.post(&json!({"username": "pikachu"})).await.unwrap();

    assert_eq!(created["id"], 25);
}

#[tokio::test]
async fn test_put_and_delete_target_item() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v2/users/3"))
        .and(body_json(json!({"email": "x@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v2/users/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let users = Resources::new(create_client(&server), "/users");

    let updated = users.put(3, &json!({"email": "x@example.com"})).await.unwrap();
    assert_eq!(updated["id"], 3);

    let deleted = users.delete("3").await.unwrap();
    assert!(deleted.is_null());
}

#[tokio::test]
async fn test_get_as_deserializes_item() {
    #[derive(serde::Deserialize)]
    struct User {
        username: String,
    }

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "eevee"})))
        .mount(&server)
        .await;

    let users = Resources::new(create_client(&server), "/users");
    let user: User = users.get_as(7).await.unwrap();

    assert_eq!(user.username, "eevee");
}

#[tokio::test]
async fn test_errors_pass_through_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users/666"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"code": 1401})))
        .mount(&server)
        .await;

    let users = Resources::new(create_client(&server), "/users");
    let error = users.get(666).await.unwrap_err();

    assert!(matches!(error, HttpError::Client(_)));
    assert_eq!(error.data(), Some(&json!({"code": 1401})));
}

#[tokio::test]
async fn test_client_mut_settings_apply_to_facade_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/users/1"))
        .and(header("Authorization", "Bearer abc"))
        .and(header("myHeader", "myValue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let mut users = Resources::new(create_client(&server), "/users");
    users.client_mut().set_auth_token(|| "abc".to_string());
    users.client_mut().add_request_mutator(|_url, options| {
        options.set_header("myHeader", "myValue");
    });

    users.get(1).await.unwrap();
}

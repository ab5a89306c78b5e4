#![allow(dead_code)]

use recs_client::{ApiClient, AsyncMode, ClientConfig};
use serde_json::Value;
use wiremock::MockServer;

pub const USERNAME: &str = "user";
pub const API_KEY: &str = "key";
// base64("user:key")
pub const BASIC_AUTH: &str = "Basic dXNlcjprZXk=";

pub fn client_for(server: &MockServer) -> ApiClient {
    client_with_mode(server, AsyncMode::default())
}

pub fn client_with_mode(server: &MockServer, async_mode: AsyncMode) -> ApiClient {
    let config = ClientConfig::new(USERNAME, API_KEY)
        .with_async_mode(async_mode)
        .with_base_url(&format!("{}/api/v3", server.uri()))
        .unwrap();
    ApiClient::new(config).unwrap()
}

/// Bodies of every request the server has seen, parsed as JSON.
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).unwrap())
        .collect()
}

/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for uqpay-sdk integration tests

use serde_json::{Value, json};
use uqpay_sdk::{Configuration, Environment, UqpayClient};
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

pub const TEST_CLIENT_ID: &str = "test-client-id";
pub const TEST_API_KEY: &str = "test-api-key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client with both the API and files hosts pointed at `server`
pub fn client_for(server: &MockServer) -> UqpayClient {
    let configuration = Configuration::new(
        TEST_CLIENT_ID,
        TEST_API_KEY,
        Environment::custom(server.uri(), server.uri()),
    );
    UqpayClient::new(configuration).expect("client init")
}

/// Replies 200 with the request body, as JSON
pub struct EchoBody;

impl Respond for EchoBody {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_raw(request.body.clone(), "application/json")
    }
}

#[allow(dead_code)]
pub fn transfer_json(id: &str) -> Value {
    json!({
        "transfer_id": id,
        "short_reference_id": format!("REF-{id}"),
        "source_account_id": "acc_src",
        "target_account_id": "acc_dst",
        "currency": "USD",
        "amount": "10.00",
        "transfer_status": "COMPLETED",
        "create_time": "2024-01-01T00:00:00Z"
    })
}

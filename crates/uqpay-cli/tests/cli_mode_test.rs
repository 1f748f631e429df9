use std::process::Command;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn cli_mode_with_config_and_dry_run_works() {
    let binary_path = env!("CARGO_BIN_EXE_uqpay");
    let config_path = format!("{}/examples/sandbox.yaml", env!("CARGO_MANIFEST_DIR"));

    let output = Command::new(binary_path)
        .arg("--config")
        .arg(config_path)
        .arg("--dry-run")
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to start uqpay binary");

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn cli_mode_without_credentials_fails() {
    let binary_path = env!("CARGO_BIN_EXE_uqpay");

    let output = Command::new(binary_path)
        .arg("--dry-run")
        .env_remove("UQPAY_CLIENT_ID")
        .env_remove("UQPAY_API_KEY")
        .output()
        .expect("Failed to start uqpay binary");

    assert!(!output.status.success());
}

#[tokio::test]
async fn cli_mode_prints_balance_from_env_configured_host() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/balances/USD"))
        .and(header("x-client-id", "env-client"))
        .and(header("x-api-key", "env-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "balance_id": "bal_1",
            "currency": "USD",
            "available_balance": "42.00",
            "balance_status": "ACTIVE",
            "create_time": "2024-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_uqpay"))
        .args(["balances", "get", "USD"])
        .env("UQPAY_CLIENT_ID", "env-client")
        .env("UQPAY_API_KEY", "env-key")
        .env("UQPAY_BASE_URL", server.uri())
        .env("UQPAY_FILES_BASE_URL", server.uri())
        .output()
        .await
        .expect("Failed to start uqpay binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "Stdout: {stdout}\nStderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(value["available_balance"], "42.00");
    assert_eq!(value["balance_status"], "ACTIVE");
}

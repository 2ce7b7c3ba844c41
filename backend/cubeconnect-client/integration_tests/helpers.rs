//! Test helpers for MessagingClient integration tests.
//!
//! Every test gets its own wiremock server; the client under test points at it.

use cubeconnect_client::{CubeConnectConfig, MessagingClient};

use wiremock::MockServer;

pub const TEST_API_KEY: &str = "cc_test_key_12345";
pub const TEST_PHONE: &str = "+15550001111";

/// Config pointing at the mock server, with a short timeout.
pub fn test_config(server: &MockServer) -> CubeConnectConfig {
    CubeConnectConfig::new(TEST_API_KEY)
        .with_base_url(server.uri())
        .with_timeout_seconds(2)
}

pub fn client_for(config: &CubeConnectConfig) -> MessagingClient {
    MessagingClient::new(config).expect("Failed to build client")
}

/// An address nothing listens on.
pub fn unreachable_config() -> CubeConnectConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);

    CubeConnectConfig::new(TEST_API_KEY)
        .with_base_url(format!("http://127.0.0.1:{port}"))
        .with_timeout_seconds(2)
}

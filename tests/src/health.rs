use proxylist_core::network::health;

use crate::support::{HEALTH, MockGateway, Reply};

#[tokio::test]
async fn probe_reads_gateway_status() {
    let gateway = MockGateway::start().await.unwrap();
    gateway.route(HEALTH, Reply::json(r#"{"status": "Gateway is healthy"}"#));
    let client = gateway.client();

    let report = health::probe(&client).await.unwrap();

    assert_eq!(report.status, "Gateway is healthy");
    assert_eq!(gateway.hits(), vec![HEALTH]);
}

#[tokio::test]
async fn probe_fails_on_error_status() {
    let gateway = MockGateway::start().await.unwrap();
    gateway.route(HEALTH, Reply::status(502, "Bad Gateway", ""));
    let client = gateway.client();

    let err = health::probe(&client).await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP error! status: 502 - Bad Gateway");
}

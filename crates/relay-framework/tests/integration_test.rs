use async_trait::async_trait;
use relay_framework::{DownstreamClient, DownstreamRequest, HttpTransport, Transport, TransportError};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// --- Test Adapter ---

#[derive(Debug, Deserialize, PartialEq)]
struct Inventory {
    sku: String,
    count: u32,
}

#[derive(Debug, thiserror::Error)]
enum InventoryError {
    #[error("Inventory service call failed: {0}")]
    Unavailable(TransportError),
}

struct InventoryClient {
    transport: Arc<dyn Transport>,
    timeout: Duration,
}

impl InventoryClient {
    fn new(transport: Arc<dyn Transport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    async fn lookup(&self, sku: &str) -> Result<Inventory, InventoryError> {
        self.dispatch_as(DownstreamRequest::get(
            "/inventory",
            vec![("sku".into(), sku.into())],
        ))
        .await
    }

    async fn reserve(&self, sku: &str, count: u32) -> Result<Inventory, InventoryError> {
        self.dispatch_as(DownstreamRequest::post(
            "/inventory/reserve",
            json!({"sku": sku, "count": count}),
        ))
        .await
    }
}

#[async_trait]
impl DownstreamClient for InventoryClient {
    type Error = InventoryError;

    fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn map_error(e: TransportError) -> Self::Error {
        InventoryError::Unavailable(e)
    }
}

async fn client_for(server: &MockServer, timeout: Duration) -> InventoryClient {
    let transport = HttpTransport::new(server.uri()).expect("Failed to build transport");
    InventoryClient::new(Arc::new(transport), timeout)
}

// --- Tests ---

#[tokio::test]
async fn test_adapter_over_http_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inventory"))
        .and(query_param("sku", "A-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sku": "A-1", "count": 7})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/inventory/reserve"))
        .and(body_json(json!({"sku": "A-1", "count": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sku": "A-1", "count": 5})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5)).await;

    let stock = client.lookup("A-1").await.unwrap();
    assert_eq!(stock, Inventory { sku: "A-1".into(), count: 7 });

    let after = client.reserve("A-1", 2).await.unwrap();
    assert_eq!(after.count, 5);
}

#[tokio::test]
async fn test_slow_server_hits_adapter_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inventory"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"sku": "A-1", "count": 7}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_millis(200)).await;

    let started = Instant::now();
    let result = client.lookup("A-1").await;
    let elapsed = started.elapsed();

    match result {
        Err(InventoryError::Unavailable(e)) => {
            assert_eq!(e, TransportError::Timeout(Duration::from_millis(200)));
            assert!(e.is_timeout());
        }
        other => panic!("expected timeout, got {other:?}"),
    }
    assert!(elapsed < Duration::from_secs(2));
}

#[tokio::test]
async fn test_error_status_and_bad_shape_are_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/inventory"))
        .and(query_param("sku", "gone"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/inventory"))
        .and(query_param("sku", "odd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sku": "odd"})))
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5)).await;

    let unavailable = client.lookup("gone").await.unwrap_err();
    assert!(matches!(
        unavailable,
        InventoryError::Unavailable(TransportError::Status { status: 503, .. })
    ));

    let malformed = client.lookup("odd").await.unwrap_err();
    assert!(matches!(
        malformed,
        InventoryError::Unavailable(TransportError::Decode(_))
    ));
}

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use futures::StreamExt;
use http_gateway::{
    core::{AdapterContext, GatewayError, TransportMethod, TransportRequest, TransportResponse},
    transport::{middleware::GatewayMiddleware, TransportReqwest},
    GatewayConfigBuilder, HttpGateway, HttpGatewayBuilder,
};
use wiremock::{
    matchers::{body_bytes, body_json, header, header_exists, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct User {
    id: u64,
    name: String,
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn gateway(server: &MockServer) -> HttpGateway<GatewayMiddleware<TransportReqwest>> {
    HttpGatewayBuilder::with_reqwest_transport()
        .with_config(
            GatewayConfigBuilder::default()
                .with_url(format!("{}/v1", server.uri()))
                .with_header("Authorization", "Bearer secret")
                .build()
                .unwrap(),
        )
        .with_request_id(true)
        .build()
        .unwrap()
}

#[tokio::test]
async fn execute_json_call_against_base_url() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/1"))
        .and(query_param("fields", "id,name"))
        .and(header("Authorization", "Bearer secret"))
        .and(header_exists("X-Request-Id"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(User {
            id: 1,
            name: "John".into(),
        }))
        .expect(1)
        .mount(&server)
        .await;

    let user: User = gateway(&server)
        .get("users/1")
        .query_parameter("fields", "id,name")
        .execute_json()
        .await
        .unwrap();

    assert_eq!(
        user,
        User {
            id: 1,
            name: "John".into()
        }
    );
}

#[tokio::test]
async fn send_serialized_body() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/users"))
        .and(body_json(serde_json::json!({"id": 2, "name": "Jane"})))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":2,"name":"Jane"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&server)
        .post("/users")
        .body(User {
            id: 2,
            name: "Jane".into(),
        })
        .execute()
        .await
        .unwrap();

    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn run_request_and_response_adapters_around_exchange() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/users/3"))
        .and(header("X-Tenant", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":3,"name":"old"}"#))
        .mount(&server)
        .await;

    let tenant = |mut request: TransportRequest| -> Result<TransportRequest, GatewayError> {
        request.headers.insert("X-Tenant".into(), "acme".into());
        Ok(request)
    };
    let rename = |mut response: TransportResponse, _: AdapterContext| async move {
        response.body = Some(br#"{"id":3,"name":"renamed"}"#.to_vec());
        Ok::<_, GatewayError>(response)
    };

    let user: User = gateway(&server)
        .request(TransportMethod::Put, "users/3")
        .request_adapter(tenant)
        .response_adapter(rename)
        .execute_json()
        .await
        .unwrap();

    assert_eq!(user.name, "renamed");
}

#[tokio::test]
async fn report_failed_status_with_response_attached() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(409).set_body_string("conflict"))
        .mount(&server)
        .await;
    let adapter_calls = Arc::new(AtomicUsize::new(0));
    let calls = adapter_calls.clone();
    let counting = move |response: TransportResponse, _: AdapterContext| {
        calls.fetch_add(1, Ordering::SeqCst);
        futures::future::ready(Ok::<_, GatewayError>(response))
    };

    let error = gateway(&server)
        .delete("users/4")
        .response_adapter(counting)
        .execute()
        .await
        .unwrap_err();

    assert_eq!(
        error.transport_response().map(|response| response.status),
        Some(409)
    );
    assert_eq!(adapter_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn mock_call_without_touching_network() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let user: User = gateway(&server)
        .get("users/5")
        .mock(|request: &TransportRequest| -> Result<Vec<u8>, GatewayError> {
            assert!(request.url.ends_with("/v1/users/5"));
            Ok(br#"{"id":5,"name":"Mocked"}"#.to_vec())
        })
        .mock_delay(Duration::from_millis(20))
        .execute_json()
        .await
        .unwrap();

    assert_eq!(user.id, 5);
}

#[tokio::test]
async fn cancel_call_by_dropping_stream() {
    init_logger();
    let server = MockServer::start().await;
    let generated = Arc::new(AtomicUsize::new(0));
    let counter = generated.clone();

    let builder = gateway(&server)
        .get("users/6")
        .mock(move |_: &TransportRequest| -> Result<Vec<u8>, GatewayError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        })
        .mock_delay(Duration::from_secs(60));

    drop(builder.stream());
    assert_eq!(generated.load(Ordering::SeqCst), 0);

    let mut stream = builder.stream();
    let first = tokio::time::timeout(Duration::from_millis(50), stream.next()).await;
    drop(stream);

    assert!(first.is_err());
    assert_eq!(generated.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn send_raw_body_untouched() {
    init_logger();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/upload"))
        .and(body_bytes(b"\x00raw".to_vec()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&server)
        .post("upload")
        .raw_body(b"\x00raw".to_vec())
        .execute()
        .await
        .unwrap();

    assert_eq!(response.status, 204);
}

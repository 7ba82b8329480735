//! End-to-end runs of the process against a local mock backend.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use process_service::json::JsonHandler;
use process_service::service::ProcessRequest;
use process_service::{ProcessService, ReqwestClient, SerdeJson, Service, ServiceConfig, ServiceError};

mod common;

fn service_for(url: String) -> ProcessService<ReqwestClient, SerdeJson> {
    let mut config = ServiceConfig::default();
    config.infrastructure.config_name = "integration".into();
    config.endpoint.url = url;

    let client = Arc::new(ReqwestClient::with_builder(|| {
        reqwest::Client::builder().no_proxy()
    }));
    ProcessService::new(client, SerdeJson, &config)
}

#[tokio::test]
async fn test_created_returns_body() {
    let (addr, mut requests) = common::start_mock_backend(201, r#"{"key":"value"}"#).await;
    let service = service_for(format!("http://{}", addr));

    let body = service.start_process().await.unwrap();
    assert_eq!(body, r#"{"key":"value"}"#);

    let request = requests.recv().await.unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.headers.get("content-type").unwrap(), "application/json");
    let sent: ProcessRequest = SerdeJson.unmarshal(&request.body).unwrap();
    assert_eq!(sent, ProcessRequest::fixed());
}

#[tokio::test]
async fn test_server_error_is_rejected() {
    let (addr, _requests) = common::start_mock_backend(500, "Internal Server Error").await;
    let service = service_for(format!("http://{}", addr));

    let err = service.start_process().await.unwrap_err();
    assert!(matches!(err, ServiceError::UnexpectedStatus { status: 500 }));
    assert_eq!(err.to_string(), "unexpected status code from server");
}

#[tokio::test]
async fn test_ok_is_not_created() {
    let (addr, _requests) = common::start_mock_backend(200, r#"{"key":"value"}"#).await;
    let service = service_for(format!("http://{}", addr));

    let err = service.start_process().await.unwrap_err();
    assert!(matches!(err, ServiceError::UnexpectedStatus { status: 200 }));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let addr = common::unused_addr().await;
    let service = service_for(format!("http://{}", addr));

    let err = service.start_process().await.unwrap_err();
    assert!(matches!(err, ServiceError::Transport(_)));
}

#[tokio::test]
async fn test_repeated_runs_are_independent() {
    let call_count = Arc::new(AtomicU32::new(0));
    let cc = call_count.clone();
    let (addr, _requests) = common::start_programmable_backend(move || {
        cc.fetch_add(1, Ordering::SeqCst);
        (201, r#"{"key":"value"}"#.to_string())
    })
    .await;
    let service = service_for(format!("http://{}", addr));

    for _ in 0..5 {
        assert_eq!(service.start_process().await.unwrap(), r#"{"key":"value"}"#);
    }
    assert_eq!(call_count.load(Ordering::SeqCst), 5);
}

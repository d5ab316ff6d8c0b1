//! HTTP surface tests, driven through the router without a socket.

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use hashchain::{Block, Chain, Node, NodeConfig};
use hashchain_server::router;
use tower::ServiceExt;

fn app() -> (Node<hashchain::MemoryChainStore>, Router) {
    let node = Node::in_memory(NodeConfig::default());
    let app = router(node.clone(), Duration::from_secs(5));
    (node, app)
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

fn post(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn get_returns_genesis_chain() {
    let (_node, app) = app();

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let chain: Chain = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(chain.len(), 1);
    assert_eq!(chain.tip().unwrap().index, 0);
    assert_eq!(chain.tip().unwrap().prev_hash, "");
}

#[tokio::test]
async fn post_appends_block() {
    let (node, app) = app();
    let genesis = node.tip();

    let response = app.oneshot(post(r#"{"Data": 42}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let block: Block = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(block.index, 1);
    assert_eq!(block.payload, 42);
    assert_eq!(block.prev_hash, genesis.hash);
    assert_eq!(node.get_chain().len(), 2);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (node, app) = app();

    let response = app.oneshot(post(r#"{"Data": "forty-two"}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("malformed request"));
    assert_eq!(node.get_chain().len(), 1);
}

#[tokio::test]
async fn post_without_json_content_type_appends() {
    let (node, app) = app();

    for content_type in [Some("application/x-www-form-urlencoded"), Some("text/plain"), None] {
        let mut request = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        let response = app
            .clone()
            .oneshot(request.body(Body::from(r#"{"Data": 7}"#)).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED, "content type {content_type:?}");
    }

    let chain = node.get_chain();
    assert_eq!(chain.len(), 4);
    assert!(chain.iter().skip(1).all(|b| b.payload == 7));
}

#[tokio::test]
async fn empty_body_is_bad_request() {
    let (node, app) = app();

    let response = app.oneshot(post("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(node.get_chain().len(), 1);
}

#[tokio::test]
async fn chain_grows_across_requests() {
    let (node, app) = app();

    for data in [1, 2, 3] {
        let body = format!(r#"{{"Data": {data}}}"#);
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let chain: Chain = serde_json::from_slice(&body_bytes(response).await).unwrap();

    assert_eq!(chain.len(), 4);
    assert!(chain.validate().is_ok());
    assert_eq!(chain, *node.get_chain());
}

#[tokio::test]
async fn health_is_ok() {
    let (_node, app) = app();

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["status"], "ok");
}

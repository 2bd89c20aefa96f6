//! Routing misses, preflight, and CORS headers.

use reqwest::Method;
use serde_json::json;

use crate::support::TestServer;

fn assert_cors(resp: &reqwest::Response) {
    let headers = resp.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
}

async fn assert_plain_not_found(resp: reqwest::Response) {
    assert_eq!(resp.status(), 404);
    assert_cors(&resp);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"), "{content_type}");
    assert_eq!(resp.text().await.unwrap(), "Not Found");
}

#[tokio::test]
async fn preflight_is_empty_no_content() {
    let server = TestServer::start().await;

    for path in ["/students", "/students/s-1", "/anything/else"] {
        let resp = server
            .client
            .request(Method::OPTIONS, server.url(path))
            .header("origin", "http://example.com")
            .header("access-control-request-method", "PUT")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 204);
        assert_cors(&resp);
        assert!(resp.text().await.unwrap().is_empty());
    }

    // Preflight never touches the data file.
    assert!(!server.data_file().exists());
}

#[tokio::test]
async fn api_responses_carry_cors_headers() {
    let server = TestServer::start().await;

    let resp = server.client.get(server.url("/students")).send().await.unwrap();
    assert_cors(&resp);

    let resp = server.create(json!({ "id": "x" })).await;
    assert_eq!(resp.status(), 400);
    assert_cors(&resp);
}

#[tokio::test]
async fn unknown_paths_are_plain_not_found() {
    let server = TestServer::start().await;

    for path in ["/nope", "/students/a/b", "/api/students"] {
        let resp = server.client.get(server.url(path)).send().await.unwrap();
        assert_plain_not_found(resp).await;
    }
}

#[tokio::test]
async fn unsupported_methods_are_plain_not_found() {
    let server = TestServer::start().await;

    let resp = server.client.get(server.url("/students/s-1")).send().await.unwrap();
    assert_plain_not_found(resp).await;

    let resp = server
        .client
        .patch(server.url("/students"))
        .send()
        .await
        .unwrap();
    assert_plain_not_found(resp).await;

    let resp = server
        .client
        .post(server.url("/students/s-1"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_plain_not_found(resp).await;
}

#[tokio::test]
async fn ids_outside_the_pattern_are_plain_not_found() {
    let server = TestServer::start().await;
    server
        .create(json!({ "id": "a.b", "name": "Dot", "department": "CS", "marks": 5 }))
        .await;

    let resp = server
        .client
        .put(server.url("/students/a.b"))
        .json(&json!({ "marks": 6 }))
        .send()
        .await
        .unwrap();
    assert_plain_not_found(resp).await;

    let resp = server
        .client
        .delete(server.url("/students/a%20b"))
        .send()
        .await
        .unwrap();
    assert_plain_not_found(resp).await;

    assert_eq!(server.list().await[0]["marks"], 5);
}

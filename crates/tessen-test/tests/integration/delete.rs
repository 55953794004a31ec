#![allow(clippy::unused_async)]
//! Integration tests for DELETE over the in-memory bridge.
//!
//! Tests:
//! - Files and collections deleted with 204
//! - 404 for missing targets
//! - Bridge statuses surfaced for failed deletions
//! - 207 Multi-Status listing failed collection members

use std::sync::Arc;

use salvo::http::StatusCode;

use super::helpers::*;

fn tree() -> MemoryBridge {
    MemoryBridge::new()
        .with_file("/dav/report.txt")
        .with_file("/dav/docs/a.txt")
        .with_file("/dav/docs/sub/b.txt")
        .with_file("/dav/docs/sub/c.txt")
        .with_collection("/dav/docs/empty")
}

#[test_log::test(tokio::test)]
async fn delete_file_returns_no_content() {
    let bridge = Arc::new(tree());
    let service = create_test_service(&test_settings(), bridge.clone());

    TestRequest::delete("/dav/report.txt")
        .as_test_user()
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT)
        .assert_body_empty();

    assert!(!bridge.contains("/dav/report.txt").await);
    assert!(bridge.contains("/dav/docs/a.txt").await);
}

#[test_log::test(tokio::test)]
async fn delete_missing_returns_not_found() {
    let bridge = Arc::new(tree());
    let before = bridge.resource_count().await;
    let service = create_test_service(&test_settings(), bridge.clone());

    TestRequest::delete("/dav/missing.txt")
        .as_test_user()
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(bridge.resource_count().await, before);
}

#[test_log::test(tokio::test)]
async fn delete_collection_removes_subtree() {
    let bridge = Arc::new(tree());
    let service = create_test_service(&test_settings(), bridge.clone());

    TestRequest::delete("/dav/docs/")
        .as_test_user()
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT)
        .assert_body_empty();

    assert!(!bridge.contains("/dav/docs").await);
    assert!(!bridge.contains("/dav/docs/sub/b.txt").await);
    assert!(bridge.contains("/dav/report.txt").await);
}

#[test_log::test(tokio::test)]
async fn failed_file_delete_reports_bridge_status() {
    let bridge = Arc::new(
        tree().with_failure("/dav/report.txt", BridgeError::with_status(423, "locked")),
    );
    let service = create_test_service(&test_settings(), bridge.clone());

    let response = TestRequest::delete("/dav/report.txt")
        .as_test_user()
        .send(&service)
        .await;

    assert_eq!(response.status.as_u16(), 423);
    let _response = response.assert_body("No files deleted.");
    assert!(bridge.contains("/dav/report.txt").await);
}

#[test_log::test(tokio::test)]
async fn failed_file_delete_without_status_is_500() {
    let bridge = Arc::new(tree().with_failure("/dav/report.txt", BridgeError::new("io error")));
    let service = create_test_service(&test_settings(), bridge);

    TestRequest::delete("/dav/report.txt")
        .as_test_user()
        .send(&service)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_body("No files deleted.");
}

#[test_log::test(tokio::test)]
async fn partial_collection_delete_is_multistatus() {
    let bridge = Arc::new(
        tree()
            .with_failure("/dav/docs/sub/b.txt", BridgeError::with_status(403, "read-only"))
            .with_failure("/dav/docs/a.txt", BridgeError::with_status(423, "locked")),
    );
    let service = create_test_service(&test_settings(), bridge.clone());

    let response = TestRequest::delete("/dav/docs/")
        .as_test_user()
        .send(&service)
        .await
        .assert_status(StatusCode::MULTI_STATUS)
        .assert_header("Content-Type", "application/xml; charset=utf-8")
        .assert_valid_xml()
        .assert_body_contains("<D:multistatus xmlns:D=\"DAV:\">")
        .assert_body_contains("<D:href>/dav/docs/a.txt</D:href>")
        .assert_body_contains("<D:status>HTTP/1.1 423 Locked</D:status>")
        .assert_body_contains("<D:href>/dav/docs/sub/b.txt</D:href>")
        .assert_body_contains("<D:status>HTTP/1.1 403 Forbidden</D:status>");

    assert_eq!(response.count_multistatus_responses(), 2);

    let body = response.body_string();
    let first = body.find("/dav/docs/a.txt").expect("first href");
    let second = body.find("/dav/docs/sub/b.txt").expect("second href");
    assert!(first < second, "responses keep bridge order");

    assert!(bridge.contains("/dav/docs").await);
    assert!(bridge.contains("/dav/docs/sub/b.txt").await);
    assert!(!bridge.contains("/dav/docs/sub/c.txt").await);
    assert!(!bridge.contains("/dav/docs/empty").await);
}

#[test_log::test(tokio::test)]
async fn collection_hard_failure_is_never_multistatus() {
    let bridge = Arc::new(
        tree().with_failure("/dav/docs", BridgeError::with_status(507, "storage full")),
    );
    let service = create_test_service(&test_settings(), bridge);

    let response = TestRequest::delete("/dav/docs/")
        .as_test_user()
        .send(&service)
        .await
        .assert_body_empty();

    assert_eq!(response.status.as_u16(), 507);
}

#![allow(clippy::unused_async)]
//! Integration tests for DELETE over the filesystem bridge.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn delete_file_from_disk() {
    let storage = TempStorage::new().file("notes.txt").file("keep.txt");
    let service = create_test_service(&test_settings(), storage.bridge());

    TestRequest::delete("/dav/notes.txt")
        .as_test_user()
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert!(!storage.exists("notes.txt"));
    assert!(storage.exists("keep.txt"));
}

#[test_log::test(tokio::test)]
async fn delete_directory_tree_from_disk() {
    let storage = TempStorage::new()
        .file("projects/one/readme.md")
        .file("projects/two/main.rs")
        .dir("projects/empty")
        .file("keep.txt");
    let service = create_test_service(&test_settings(), storage.bridge());

    TestRequest::delete("/dav/projects/")
        .as_test_user()
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert!(!storage.exists("projects"));
    assert!(storage.exists("keep.txt"));
}

#[test_log::test(tokio::test)]
async fn percent_encoded_names_are_resolved() {
    let storage = TempStorage::new().file("my report.txt");
    let service = create_test_service(&test_settings(), storage.bridge());

    TestRequest::delete("/dav/my%20report.txt")
        .as_test_user()
        .send(&service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert!(!storage.exists("my report.txt"));
}

#[test_log::test(tokio::test)]
async fn missing_path_on_disk_is_not_found() {
    let storage = TempStorage::new();
    let service = create_test_service(&test_settings(), storage.bridge());

    TestRequest::delete("/dav/nothing/here.txt")
        .as_test_user()
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn storage_root_is_not_deletable() {
    let storage = TempStorage::new().file("a.txt");
    let service = create_test_service(&test_settings(), storage.bridge());

    TestRequest::delete("/dav/")
        .as_test_user()
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    assert!(storage.exists("a.txt"));
    assert!(storage.root().exists());
}

#[test_log::test(tokio::test)]
async fn unauthenticated_delete_leaves_disk_untouched() {
    let storage = TempStorage::new().file("a.txt");
    let service = create_test_service(&test_settings(), storage.bridge());

    TestRequest::delete("/dav/a.txt")
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    assert!(storage.exists("a.txt"));
}

//! Integration tests for the HTTP user source.
//!
//! Each test binds a throwaway TCP listener on localhost that answers one
//! request with a canned HTTP response.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use userpick::cache::{CachedUserSource, FileStore};
use userpick::models::{UserId, UserRecord};
use userpick::picker::widgets::{Avatar, Dropdown, Indicator};
use userpick::picker::{PickerError, UserPicker};
use userpick::providers::avatar::AvatarBaseSource;
use userpick::providers::http::HttpUserSource;
use userpick::providers::{SourceError, UserSource};

/// Serve `responses` in order, one per connection, and return the base URL.
async fn serve(responses: Vec<(u16, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        for (status, body) in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}")
}

fn source() -> HttpUserSource {
    HttpUserSource::new(Duration::from_secs(5)).unwrap()
}

const ODD_IDS_JSON: &str = r#"[
    {"user_id": 1.0, "name": "Float id"},
    {"user_id": 18446744073709551615, "name": "Wide id"}
]"#;

const USERS_JSON: &str = r#"[
    {"user_id": 141, "name": "Adam P.", "avatar": "/api/images/141"},
    {"user_id": "176", "name": "Adrian K.", "avatar": null},
    {"user_id": 26, "name": "Anna K."}
]"#;

#[tokio::test]
async fn fetches_users_in_order() {
    let base = serve(vec![(200, USERS_JSON)]).await;
    let users = source()
        .fetch_users(&format!("{base}/api/v1/users"))
        .await
        .unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(users[0].user_id, UserId::from(141));
    assert_eq!(users[1].user_id, UserId::Text("176".into()));
    assert_eq!(users[0].avatar.as_deref(), Some("/api/images/141"));
    assert_eq!(users[1].avatar, None);
    assert_eq!(users[2].avatar, None);
}

#[tokio::test]
async fn relative_avatars_are_resolved_against_base() {
    let base = serve(vec![(200, USERS_JSON)]).await;
    let source = AvatarBaseSource::new(source(), "https://intranet.example.com:443").unwrap();
    let users = source
        .fetch_users(&format!("{base}/api/v1/users"))
        .await
        .unwrap();

    assert_eq!(
        users[0].avatar.as_deref(),
        Some("https://intranet.example.com/api/images/141")
    );
    assert_eq!(users[1].avatar, None);
}

#[tokio::test]
async fn empty_array_is_success() {
    let base = serve(vec![(200, "[]")]).await;
    let users = source().fetch_users(&base).await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn error_status_is_reported() {
    let base = serve(vec![(503, "{}")]).await;
    let err = source().fetch_users(&base).await.unwrap_err();
    assert!(
        matches!(err, SourceError::Status { status: 503, .. }),
        "got: {err}"
    );
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let base = serve(vec![(200, r#"{"users": "nope"}"#)]).await;
    let err = source().fetch_users(&base).await.unwrap_err();
    assert!(matches!(err, SourceError::Decode { .. }), "got: {err}");
}

#[tokio::test]
async fn picker_over_http_ends_populated() {
    let base = serve(vec![(200, USERS_JSON)]).await;
    let mut picker = UserPicker::new(
        Arc::new(source()),
        Indicator::new(),
        Dropdown::new(),
        Avatar::new(),
    );
    picker.initialize(&base).await.unwrap();
    let option = picker.select("176").unwrap();
    assert_eq!(option.label, "Adrian K.");
    assert!(picker.view().avatar.is_none());
}

#[tokio::test]
async fn picker_over_failing_http_reports_load_error() {
    let base = serve(vec![(500, "oops")]).await;
    let loading = Indicator::new();
    let mut picker = UserPicker::new(
        Arc::new(source()),
        loading.clone(),
        Dropdown::new(),
        Avatar::new(),
    );
    let err = picker.initialize(&base).await.unwrap_err();
    assert!(matches!(err, PickerError::Load(SourceError::Status { status: 500, .. })));
    assert!(loading.error().is_some_and(|m| m.contains("500")));
}

#[tokio::test]
async fn cached_source_serves_second_call_without_network() {
    // Only one response is served; a second network call would fail.
    let base = serve(vec![(200, USERS_JSON)]).await;
    let dir = tempfile::tempdir().unwrap();
    let cached = CachedUserSource::new(
        source(),
        FileStore::new_with_dir(dir.path().to_path_buf()),
        Duration::from_secs(600),
    );

    let first: Vec<UserRecord> = cached.fetch_users(&base).await.unwrap();
    let second = cached.fetch_users(&base).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn float_and_wide_ids_load_as_options() {
    let base = serve(vec![(200, ODD_IDS_JSON)]).await;
    let mut picker = UserPicker::new(
        Arc::new(source()),
        Indicator::new(),
        Dropdown::new(),
        Avatar::new(),
    );
    assert_eq!(picker.initialize(&base).await.unwrap(), 2);
    let values: Vec<_> = picker.view().options.into_iter().map(|o| o.value).collect();
    assert_eq!(values, ["1.0", "18446744073709551615"]);
}

#[tokio::test]
async fn changed_avatar_base_applies_to_cached_users() {
    // One response only: the second chain must be served from the cache.
    let base = serve(vec![(200, r#"[{"user_id": 1, "name": "A", "avatar": "/img/1"}]"#)]).await;
    let dir = tempfile::tempdir().unwrap();
    let chain = |avatar_base: &str| {
        let cached = CachedUserSource::new(
            source(),
            FileStore::new_with_dir(dir.path().to_path_buf()),
            Duration::from_secs(600),
        );
        AvatarBaseSource::new(cached, avatar_base).unwrap()
    };

    let old = chain("http://old.example").fetch_users(&base).await.unwrap();
    assert_eq!(old[0].avatar.as_deref(), Some("http://old.example/img/1"));

    let new = chain("http://new.example").fetch_users(&base).await.unwrap();
    assert_eq!(new[0].avatar.as_deref(), Some("http://new.example/img/1"));
}

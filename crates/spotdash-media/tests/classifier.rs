//! Integration tests for `MediaClassifier` using wiremock HTTP mocks.

use spotdash_media::{MediaClassifier, MediaKind};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_classifier(base_url: &str) -> MediaClassifier {
    MediaClassifier::new(base_url, Some("test-key"), 30)
        .expect("classifier construction should not fail")
}

/// A PNG header with the given dimensions; enough for the sniffer.
fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    bytes
}

#[test]
fn asset_url_includes_key_only_when_configured() {
    let with_key = test_classifier("https://media.example.com/");
    assert_eq!(
        with_key.asset_url("u-1"),
        "https://media.example.com/file/spot/u-1?key=test-key"
    );

    let without_key = MediaClassifier::new("https://media.example.com", None, 30)
        .expect("classifier construction should not fail");
    assert_eq!(
        without_key.asset_url("u-1"),
        "https://media.example.com/file/spot/u-1"
    );
}

#[tokio::test]
async fn video_content_type_classifies_as_video() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/file/spot/u-video"))
        .and(query_param("key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "video/mp4")
                .set_body_bytes(vec![0u8; 64]),
        )
        .mount(&server)
        .await;

    let kind = test_classifier(&server.uri()).classify("u-video").await;
    assert_eq!(kind, MediaKind::Video);
}

#[tokio::test]
async fn one_by_one_placeholder_classifies_as_video() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/file/spot/u-placeholder"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(png_bytes(1, 1)),
        )
        .mount(&server)
        .await;

    let kind = test_classifier(&server.uri())
        .classify("u-placeholder")
        .await;
    assert_eq!(kind, MediaKind::Video);
}

#[tokio::test]
async fn regular_image_classifies_as_image() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/file/spot/u-image"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(png_bytes(640, 480)),
        )
        .mount(&server)
        .await;

    let kind = test_classifier(&server.uri()).classify("u-image").await;
    assert_eq!(kind, MediaKind::Image);
}

#[tokio::test]
async fn image_content_type_with_unparseable_body_is_still_an_image() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/file/spot/u-jpeg"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/jpeg")
                .set_body_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0, 0, 0, 0, 0]),
        )
        .mount(&server)
        .await;

    let kind = test_classifier(&server.uri()).classify("u-jpeg").await;
    assert_eq!(kind, MediaKind::Image);
}

#[tokio::test]
async fn server_error_classifies_as_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/file/spot/u-broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let kind = test_classifier(&server.uri()).classify("u-broken").await;
    assert_eq!(kind, MediaKind::Unknown);
}

#[tokio::test]
async fn unreachable_server_classifies_as_unknown() {
    // Port 1 on localhost should refuse the connection immediately.
    let kind = test_classifier("http://127.0.0.1:1").classify("u-x").await;
    assert_eq!(kind, MediaKind::Unknown);
}

//! Integration tests against a mocked archive server.
//!
//! Every operation is exercised end-to-end over HTTP: endpoint keywords,
//! cookie authentication, filename derivation, error statuses, and the
//! no-network guarantee for rejected options.

use assert_json_diff::assert_json_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use goa_client::{ArchiveClient, Credential, Error, FetchKind, ListFormat};

const QUERY: &str = "/canonical/GN-2010B-Q-22/GMOS-N/20101231";

#[tokio::test]
async fn test_file_list_round_trips_records() {
    let server = MockServer::start().await;
    let records = json!([
        {"filename": "f1.fits", "file_size": 100, "data_size": 90}
    ]);
    Mock::given(method("GET"))
        .and(path("/jsonfilelist/canonical/GN-2010B-Q-22/GMOS-N/20101231"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records.clone()))
        .mount(&server)
        .await;

    let client = ArchiveClient::with_base(server.uri());
    let result = client
        .query_file_list(QUERY, ListFormat::FileList)
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_json_eq!(json!(result), records);
}

#[tokio::test]
async fn test_file_summary_uses_the_summary_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jsonsummary/canonical/OBJECT/GMOS-N/20101231"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "N20101231S0123.fits", "data_label": "GN-2010B-Q-22-67-001",
             "observation_class": "science", "qa_state": "Pass",
             "object": "M101", "data_size": 57600}
        ])))
        .mount(&server)
        .await;

    let client = ArchiveClient::with_base(server.uri());
    let result = client
        .query_file_list("/canonical/OBJECT/GMOS-N/20101231", ListFormat::FileSummary)
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(
        result[0].get("data_label").and_then(|v| v.as_str()),
        Some("GN-2010B-Q-22-67-001")
    );
}

#[tokio::test]
async fn test_file_list_surfaces_error_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("No such search"))
        .mount(&server)
        .await;

    let client = ArchiveClient::with_base(server.uri());
    let err = client
        .query_file_list(QUERY, ListFormat::FileList)
        .await
        .unwrap_err();

    match err {
        Error::Request { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "No such search");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_file_list_rejects_non_array_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = ArchiveClient::with_base(server.uri());
    let err = client
        .query_file_list(QUERY, ListFormat::FileList)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_calibration_manifest_returns_raw_xml() {
    let xml = br#"<?xml version="1.0"?><associations><dataset/></associations>"#;
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/calmgr/canonical/GN-2010B-Q-22/GMOS-N/20101231/photometric_standard",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(xml.to_vec()))
        .mount(&server)
        .await;

    let client = ArchiveClient::with_base(server.uri());
    let body = client
        .query_calibration_manifest(&format!("{QUERY}/photometric_standard"))
        .await
        .unwrap();

    assert_eq!(body, xml);
}

#[tokio::test]
async fn test_fetch_streams_file_and_sends_session_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/file/N20101231S0123.fits"))
        .and(header("Cookie", "gemini_archive_session=sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"SIMPLE  =          T".to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = ArchiveClient::with_base(server.uri());
    let credential = Credential::new("sekrit");

    let name = client
        .fetch_file(
            "N20101231S0123.fits.bz2",
            dir.path(),
            FetchKind::File,
            None,
            Some(&credential),
        )
        .await
        .unwrap();

    assert_eq!(name, "N20101231S0123.fits");
    let written = std::fs::read(dir.path().join(&name)).unwrap();
    assert_eq!(written, b"SIMPLE  =          T");
}

#[tokio::test]
async fn test_fetch_without_credential_sends_empty_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/file/N20101231S0123.fits"))
        .and(header("Cookie", "gemini_archive_session="))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"data".to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = ArchiveClient::with_base(server.uri());

    let name = client
        .fetch_file(
            "N20101231S0123.fits",
            dir.path(),
            FetchKind::File,
            None,
            None,
        )
        .await
        .unwrap();

    assert_eq!(name, "N20101231S0123.fits");
}

#[tokio::test]
async fn test_preview_fetch_appends_jpeg_to_the_filename() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/preview/N20101231S0123.fits"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xd8, 0xff]))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = ArchiveClient::with_base(server.uri());

    let name = client
        .fetch_file(
            "N20101231S0123.fits.bz2",
            dir.path(),
            FetchKind::Preview,
            None,
            None,
        )
        .await
        .unwrap();

    assert_eq!(name, "N20101231S0123.fits.jpeg");
    assert!(dir.path().join(&name).exists());
}

#[tokio::test]
async fn test_download_names_the_tar_after_the_caller() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/canonical/GN-2010B-Q-22/GMOS-N/20101231"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"tar bytes".to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = ArchiveClient::with_base(server.uri());

    let name = client
        .fetch_file(
            QUERY,
            dir.path(),
            FetchKind::Download,
            Some("gnQ22_20101231.tar"),
            None,
        )
        .await
        .unwrap();

    assert_eq!(name, "gnQ22_20101231.tar");
    assert!(dir.path().join("gnQ22_20101231.tar").exists());
}

#[tokio::test]
async fn test_download_falls_back_to_the_default_tar_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"tar bytes".to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = ArchiveClient::with_base(server.uri());

    let name = client
        .fetch_file(QUERY, dir.path(), FetchKind::Download, Some("   "), None)
        .await
        .unwrap();

    assert_eq!(name, "gemini_data.tar");
    assert!(dir.path().join("gemini_data.tar").exists());
}

#[tokio::test]
async fn test_fetch_error_status_creates_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = ArchiveClient::with_base(server.uri());

    let err = client
        .fetch_file(
            "N20101231S0123.fits.bz2",
            dir.path(),
            FetchKind::File,
            None,
            None,
        )
        .await
        .unwrap_err();

    match err {
        Error::Request { status, .. } => assert_eq!(status, 404),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!dir.path().join("N20101231S0123.fits").exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_rejected_options_never_touch_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    assert!(matches!(
        "jsonfilesummary".parse::<ListFormat>(),
        Err(Error::InvalidOption { .. })
    ));
    assert!(matches!(
        "tar".parse::<FetchKind>(),
        Err(Error::InvalidOption { .. })
    ));

    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

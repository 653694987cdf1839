//! Integration coverage for [`HttpMediaService`] against a local mock server.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use media_client::{
    ApiError, ApiRoutes, HttpMediaService, MediaService, MediaUpdate, RequestOptions,
    UploadRequest,
};
use media_domain::MediaId;

fn service_for(server: &MockServer) -> HttpMediaService {
    HttpMediaService::new(ApiRoutes::new(format!("{}/api", server.uri())))
}

#[tokio::test]
async fn fetch_all_decodes_camel_case_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "beach.png",
                "mimeType": "image/png",
                "downloadUrl": "2024/beach.png",
                "size": 52000,
                "uploadDate": "2024-05-01T08:30:00",
                "uploadedBy": "avery"
            },
            { "id": 2, "name": "clip.mp4", "mimeType": "video/mp4" }
        ])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let records = service
        .fetch_all(RequestOptions::default())
        .await
        .expect("fetch succeeds")
        .expect("value not suppressed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].mime_type.as_deref(), Some("image/png"));
    assert_eq!(records[0].download_url.as_deref(), Some("2024/beach.png"));

    let item = records[0].clone().into_item();
    assert_eq!(item.id, Some(MediaId(1)));
    assert!(item.upload_date.is_some());
}

#[tokio::test]
async fn error_status_carries_parsed_body_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data/files"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "storage offline" })),
        )
        .mount(&server)
        .await;

    let service = service_for(&server);
    let err = service
        .fetch_all(RequestOptions::default())
        .await
        .expect_err("status error propagates");

    match err {
        ApiError::Status {
            status,
            body,
            raw_body,
            headers,
        } => {
            assert_eq!(status, 500);
            assert_eq!(body, Some(json!({ "message": "storage offline" })));
            assert!(raw_body.contains("storage offline"));
            assert!(headers.iter().any(|(name, _)| name == "content-type"));
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn suppressed_http_errors_resolve_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data/files"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let reported = Rc::new(RefCell::new(None));
    let sink = reported.clone();
    let options = RequestOptions::default()
        .on_error(move |err: &ApiError| *sink.borrow_mut() = err.status())
        .throw_on_error(|_| false);

    let service = service_for(&server);
    let outcome = service.fetch_all(options).await.expect("error suppressed");

    assert_eq!(outcome, None);
    assert_eq!(*reported.borrow(), Some(404));
}

#[tokio::test]
async fn delete_posts_the_exact_id_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/data/files/delete"))
        .and(body_json(json!([3, 7])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let outcome = service
        .delete_by_ids(vec![MediaId(3), MediaId(7)], RequestOptions::default())
        .await
        .expect("delete succeeds");

    assert_eq!(outcome, Some(()));
}

#[tokio::test]
async fn update_posts_camel_case_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/data/files/update"))
        .and(body_json(json!({
            "id": 4,
            "name": "renamed.png",
            "altText": "after dark",
            "title": "",
            "description": ""
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 4, "name": "renamed.png", "altText": "after dark" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let record = service
        .update(
            MediaUpdate {
                id: MediaId(4),
                name: "renamed.png".to_string(),
                alt_text: "after dark".to_string(),
                title: String::new(),
                description: String::new(),
            },
            RequestOptions::default(),
        )
        .await
        .expect("update succeeds")
        .expect("value not suppressed");

    assert_eq!(record.name.as_deref(), Some("renamed.png"));
    assert_eq!(record.alt_text.as_deref(), Some("after dark"));
}

#[tokio::test]
async fn upload_sends_a_multipart_form_with_metadata_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/data/files/upload"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 11, "name": "beach.png" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let record = service
        .upload(
            UploadRequest {
                file_name: "beach.png".to_string(),
                bytes: b"fake png bytes".to_vec(),
                mime_type: Some("image/png".to_string()),
                uploaded_by: "avery".to_string(),
                name: "Beach".to_string(),
                title: "Beach at dusk".to_string(),
                description: String::new(),
                alt_text: "Sand and waves".to_string(),
            },
            RequestOptions::default(),
        )
        .await
        .expect("upload succeeds")
        .expect("value not suppressed");

    assert_eq!(record.id, Some(11));

    let requests = server.received_requests().await.expect("recording enabled");
    let request = requests.first().expect("upload request recorded");
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    for field in ["file", "uploadedBy", "name", "title", "description", "altText"] {
        assert!(body.contains(&format!("name=\"{field}\"")), "missing field {field}");
    }
    assert!(body.contains("filename=\"beach.png\""));
    assert!(body.contains("fake png bytes"));
}

#[tokio::test]
async fn hooks_fire_in_order_around_a_live_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/data/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
        .mount(&server)
        .await;

    let log = Rc::new(RefCell::new(Vec::new()));
    let loading_log = log.clone();
    let response_log = log.clone();
    let options = RequestOptions::default()
        .on_loading(move || loading_log.borrow_mut().push("loading".to_string()))
        .on_response(move |records: &Vec<media_domain::MediaRecord>| {
            response_log.borrow_mut().push(format!("{} records", records.len()));
        });

    let service = service_for(&server);
    service.fetch_all(options).await.expect("fetch succeeds");

    assert_eq!(*log.borrow(), ["loading", "1 records"]);
}

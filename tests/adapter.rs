//! End-to-end tests of the adapter against a mock backend: token
//! injection, the 401 session policy, error passthrough, and the wire
//! shape of representative catalog requests.

use campuslink_client::common::HTTPError;
use campuslink_client::http_client::HTTPClient;
use campuslink_client::http_request::request_common::{
    JSONBodyHTTPRequestType, MultipartBodyHTTPRequestType, NoBodyHTTPRequestType, QueryParams,
    RequestError,
};
use campuslink_client::http_request::{
    admin::ToggleJobRequest,
    auth::{CurrentUserRequest, LoginRequest, RegisterRequest},
    jobs::{CreateJobRequest, DeleteJobRequest, MyPostingsRequest},
    messages::ConversationRequest,
    referrals::MarkReferralReadRequest,
    upload::UploadFileRequest,
    users::{SearchUsersRequest, UploadVerificationDocumentRequest},
};
use campuslink_client::http_response::response_common::ResponseError;
use campuslink_client::session::SessionEvent;
use campuslink_client::util;
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use serde_json::{Value, json};

#[tokio::test]
async fn bearer_token_attached_when_session_holds_one() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/auth/me").header("authorization", "Bearer t0k3n");
        then.status(200).json_body(json!({"user": {"id": "u1", "role": "student"}}));
    });

    let (client, _events) = HTTPClient::new(&server.base_url());
    client.session().set("t0k3n").await;

    let envelope = CurrentUserRequest {}.send_request(&client).await.unwrap();
    mock.assert();
    assert_eq!(envelope.status(), 200);
    assert_eq!(envelope.data()["user"]["id"], "u1");
}

#[tokio::test]
async fn no_auth_header_without_a_token() {
    let server = MockServer::start();
    let with_auth = server.mock(|when, then| {
        when.method(GET).path("/api/jobs/my-postings").header_exists("authorization");
        then.status(200).json_body(json!([]));
    });
    let without_auth = server.mock(|when, then| {
        when.method(GET).path("/api/jobs/my-postings");
        then.status(200).json_body(json!([]));
    });

    let (client, _events) = HTTPClient::new(&server.base_url());
    MyPostingsRequest {}.send_request(&client).await.unwrap();

    with_auth.assert_hits(0);
    without_auth.assert_hits(1);
}

#[tokio::test]
async fn login_is_anonymous_even_with_a_token_present() {
    let server = MockServer::start();
    let with_auth = server.mock(|when, then| {
        when.method(POST).path("/api/auth/login").header_exists("authorization");
        then.status(200).json_body(json!({"token": "fresh"}));
    });
    let without_auth = server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(200).json_body(json!({"token": "fresh"}));
    });

    let (client, _events) = HTTPClient::new(&server.base_url());
    client.session().set("stale").await;

    let body = json!({"email": "a@b.edu", "password": "pw"});
    let envelope = LoginRequest { body }.send_request(&client).await.unwrap();
    assert_eq!(envelope.data()["token"], "fresh");

    with_auth.assert_hits(0);
    without_auth.assert_hits(1);
}

#[tokio::test]
async fn expired_session_is_torn_down_once() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(401).json_body(json!({"message": "jwt expired"}));
    });

    let (client, mut events) = HTTPClient::new(&server.base_url());
    client.session().set("stale").await;

    let err = CurrentUserRequest {}.send_request(&client).await.unwrap_err();
    assert!(matches!(
        err,
        HTTPError::HTTPResponseError(ResponseError::Unauthorized)
    ));
    assert_eq!(client.session().get().await, None);
    assert_eq!(events.try_recv().ok(), Some(SessionEvent::Expired));
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn unauthorized_login_is_an_ordinary_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401).json_body(json!({"message": "Invalid credentials"}));
    });

    let (client, mut events) = HTTPClient::new(&server.base_url());
    client.session().set("t0k3n").await;

    let body = json!({"email": "a@b.edu", "password": "wrong"});
    let err = LoginRequest { body }.send_request(&client).await.unwrap_err();
    assert!(matches!(
        err,
        HTTPError::HTTPResponseError(ResponseError::Api { status: 401, .. })
    ));
    // a failed login does not end the session
    assert_eq!(client.session().get().await, Some("t0k3n".to_string()));
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn non_401_errors_pass_through_untouched() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/jobs");
        then.status(422).json_body(json!({"message": "Invalid input"}));
    });

    let (client, mut events) = HTTPClient::new(&server.base_url());
    client.session().set("t0k3n").await;

    let request = CreateJobRequest { body: json!({"title": ""}) };
    let err = request.send_request(&client).await.unwrap_err();
    match &err {
        HTTPError::HTTPResponseError(ResponseError::Api { status, message }) => {
            assert_eq!(*status, 422);
            assert_eq!(message.as_deref(), Some("Invalid input"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(util::error_message(&err), "Invalid input");
    assert_eq!(client.session().get().await, Some("t0k3n".to_string()));
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn connection_failure_surfaces_as_network_error() {
    // nothing listens here
    let (client, _events) = HTTPClient::new("http://127.0.0.1:65534");
    let err = MyPostingsRequest {}.send_request(&client).await.unwrap_err();
    assert!(matches!(
        err,
        HTTPError::HTTPRequestError(RequestError::NoConnection)
    ));
    assert_eq!(util::error_message(&err), "Network error. Please check your connection.");
}

#[tokio::test]
async fn search_params_reach_the_wire() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/users/search")
            .query_param("q", "rust")
            .query_param("limit", "5");
        then.status(200).json_body(json!([]));
    });

    let (client, _events) = HTTPClient::new(&server.base_url());
    let request = SearchUsersRequest { q: "rust".to_string(), limit: Some(5) };
    request.send_request(&client).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn upload_returns_the_bare_payload() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/upload")
            .header("authorization", "Bearer t0k3n")
            .body_contains("name=\"resume\"");
        then.status(200).json_body(json!({"url": "/uploads/cv.pdf"}));
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cv.pdf");
    std::fs::write(&path, b"pdf bytes").unwrap();

    let (client, _events) = HTTPClient::new(&server.base_url());
    client.session().set("t0k3n").await;

    let payload = UploadFileRequest::new(&path, "resume")
        .unwrap()
        .send_request(&client)
        .await
        .unwrap();
    mock.assert();
    // bare payload, not an envelope
    assert_eq!(payload, json!({"url": "/uploads/cv.pdf"}));
}

#[tokio::test]
async fn registration_posts_multipart_fields_and_document() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/register")
            .body_contains("name=\"email\"")
            .body_contains("name=\"idCard\"");
        then.status(201).json_body(json!({"message": "registered"}));
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("id.png");
    std::fs::write(&path, b"png bytes").unwrap();

    let (client, _events) = HTTPClient::new(&server.base_url());
    let request = RegisterRequest::new(vec![
        ("email".to_string(), "a@b.edu".to_string()),
        ("role".to_string(), "student".to_string()),
    ])
    .with_document("idCard", &path)
    .unwrap();

    let envelope = request.send_request(&client).await.unwrap();
    mock.assert();
    assert_eq!(envelope.status(), 201);
}

#[tokio::test]
async fn verification_document_goes_to_the_user_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/users/u42/upload-verification")
            .header("authorization", "Bearer t0k3n")
            .body_contains("name=\"documentType\"")
            .body_contains("name=\"idCard\"");
        then.status(200).json_body(json!({"message": "received"}));
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.pdf");
    std::fs::write(&path, b"pdf bytes").unwrap();

    let (client, _events) = HTTPClient::new(&server.base_url());
    client.session().set("t0k3n").await;

    let request = UploadVerificationDocumentRequest::new("u42", "transcript", &path).unwrap();
    let envelope = request.send_request(&client).await.unwrap();
    mock.assert();
    assert_eq!(envelope.data()["message"], "received");
}

#[tokio::test]
async fn empty_delete_response_decodes_to_null() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/api/jobs/j1");
        then.status(204);
    });

    let (client, _events) = HTTPClient::new(&server.base_url());
    client.session().set("t0k3n").await;

    let envelope = DeleteJobRequest { id: "j1".to_string() }.send_request(&client).await.unwrap();
    assert_eq!(envelope.status(), 204);
    assert_eq!(*envelope.data(), Value::Null);
}

#[tokio::test]
async fn catalog_requests_hit_their_fixed_paths() {
    let server = MockServer::start();
    let mark_read = server.mock(|when, then| {
        when.method(PATCH).path("/api/referrals/r5/mark-read");
        then.status(200).json_body(json!({"read": true}));
    });
    let toggle = server.mock(|when, then| {
        when.method(PATCH).path("/api/admin/toggle-job/j2");
        then.status(200).json_body(json!({"active": false}));
    });
    let conversation = server.mock(|when, then| {
        when.method(GET).path("/api/messages/conversation/u12");
        then.status(200).json_body(json!([]));
    });

    let (client, _events) = HTTPClient::new(&server.base_url());
    client.session().set("t0k3n").await;

    MarkReferralReadRequest { id: "r5".to_string() }.send_request(&client).await.unwrap();
    ToggleJobRequest { id: "j2".to_string() }.send_request(&client).await.unwrap();
    ConversationRequest { user_id: "u12".to_string() }.send_request(&client).await.unwrap();

    mark_read.assert();
    toggle.assert();
    conversation.assert();
}

#[tokio::test]
async fn list_requests_drop_empty_filter_values() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/jobs").query_param("role", "student");
        then.status(200).json_body(json!([]));
    });

    let (client, _events) = HTTPClient::new(&server.base_url());
    let params: QueryParams = vec![
        ("role".to_string(), Some("student".to_string())),
        ("location".to_string(), Some(String::new())),
        ("company".to_string(), None),
    ];
    campuslink_client::http_request::jobs::ListJobsRequest { params }
        .send_request(&client)
        .await
        .unwrap();
    mock.assert();
}

//! User profile, moderation, and verification endpoints.

use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType, MultipartBodyHTTPRequestType,
    NoBodyHTTPRequestType, QueryParams, RequestError,
};
use crate::http_response::response_common::ResponseEnvelope;
use reqwest::multipart;
use serde::Serialize;
use std::io;
use std::path::Path;

/// Request type for `GET /api/users/profile/{id}`.
#[derive(Debug)]
pub struct GetProfileRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for GetProfileRequest {}

impl HTTPRequestType for GetProfileRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/users/profile/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `PUT /api/users/profile/{id}`.
#[derive(Debug)]
pub struct UpdateProfileRequest<B: Serialize> {
    pub id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for UpdateProfileRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for UpdateProfileRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/users/profile/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}

/// Request type for `POST /api/users/{id}/upload-verification`: a
/// `documentType` text field plus the document under `idCard`.
#[derive(Debug)]
pub struct UploadVerificationDocumentRequest {
    user_id: String,
    document_type: String,
    file_path: String,
}

impl UploadVerificationDocumentRequest {
    pub fn new<P: AsRef<Path>>(
        user_id: &str,
        document_type: &str,
        file_path: P,
    ) -> Result<Self, io::Error> {
        let path = file_path.as_ref();
        if !path.exists() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "File path does not exist"));
        }
        if !path.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "Path is not a valid file"));
        }
        Ok(Self {
            user_id: user_id.to_string(),
            document_type: document_type.to_string(),
            file_path: path.to_string_lossy().to_string(),
        })
    }
}

impl MultipartBodyHTTPRequestType for UploadVerificationDocumentRequest {
    async fn multipart_body(&self) -> Result<multipart::Form, RequestError> {
        let file_part = multipart::Part::file(&self.file_path).await?;
        Ok(multipart::Form::new()
            .text("documentType", self.document_type.clone())
            .part("idCard", file_part))
    }
}

impl HTTPRequestType for UploadVerificationDocumentRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/users/{}/upload-verification", self.user_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `GET /api/users/student/application-history`.
#[derive(Debug)]
pub struct StudentApplicationHistoryRequest {}

impl NoBodyHTTPRequestType for StudentApplicationHistoryRequest {}

impl HTTPRequestType for StudentApplicationHistoryRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/users/student/application-history".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/users/verify-requests`.
#[derive(Debug)]
pub struct VerifyRequestsRequest {}

impl NoBodyHTTPRequestType for VerifyRequestsRequest {}

impl HTTPRequestType for VerifyRequestsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/users/verify-requests".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `POST /api/users/verify/{id}`.
#[derive(Debug)]
pub struct VerifyUserRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for VerifyUserRequest {}

impl HTTPRequestType for VerifyUserRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/users/verify/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `GET /api/users/alumni`.
#[derive(Debug)]
pub struct AlumniListRequest {}

impl NoBodyHTTPRequestType for AlumniListRequest {}

impl HTTPRequestType for AlumniListRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/users/alumni".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/users/students`.
#[derive(Debug)]
pub struct StudentListRequest {}

impl NoBodyHTTPRequestType for StudentListRequest {}

impl HTTPRequestType for StudentListRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/users/students".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/users/recruiters`.
#[derive(Debug)]
pub struct RecruiterListRequest {}

impl NoBodyHTTPRequestType for RecruiterListRequest {}

impl HTTPRequestType for RecruiterListRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/users/recruiters".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `PATCH /api/users/block/{id}`.
#[derive(Debug)]
pub struct BlockUserRequest<B: Serialize> {
    pub id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for BlockUserRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for BlockUserRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/users/block/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

/// Request type for `DELETE /api/users/{id}`.
#[derive(Debug)]
pub struct DeleteUserRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for DeleteUserRequest {}

impl HTTPRequestType for DeleteUserRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/users/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}

/// Request type for `GET /api/users/search?q&limit`.
#[derive(Debug)]
pub struct SearchUsersRequest {
    pub q: String,
    pub limit: Option<u32>,
}

impl NoBodyHTTPRequestType for SearchUsersRequest {}

impl HTTPRequestType for SearchUsersRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/users/search".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> QueryParams {
        vec![
            ("q".to_string(), Some(self.q.clone())),
            ("limit".to_string(), self.limit.map(|limit| limit.to_string())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_request::request_common::AuthPolicy;
    use crate::util;
    use serde_json::json;

    #[test]
    fn profile_paths_substitute_the_id() {
        let get = GetProfileRequest { id: "u42".to_string() };
        assert_eq!(get.endpoint(), "/api/users/profile/u42");
        let update = UpdateProfileRequest { id: "u42".to_string(), body: json!({"bio": "hi"}) };
        assert_eq!(update.endpoint(), "/api/users/profile/u42");
        assert_eq!(update.request_method(), HTTPRequestMethod::Put);
    }

    #[test]
    fn moderation_requests_use_fixed_shapes() {
        let block = BlockUserRequest { id: "u7".to_string(), body: json!({"blocked": true}) };
        assert_eq!(block.endpoint(), "/api/users/block/u7");
        assert_eq!(block.request_method(), HTTPRequestMethod::Patch);
        let delete = DeleteUserRequest { id: "u7".to_string() };
        assert_eq!(delete.endpoint(), "/api/users/u7");
        assert_eq!(delete.request_method(), HTTPRequestMethod::Delete);
        assert_eq!(delete.auth(), AuthPolicy::Session);
    }

    #[test]
    fn search_drops_the_missing_limit() {
        let request = SearchUsersRequest { q: "rust".to_string(), limit: None };
        assert_eq!(util::build_query_string(&request.query_params()), "q=rust");
        let request = SearchUsersRequest { q: "rust".to_string(), limit: Some(5) };
        assert_eq!(util::build_query_string(&request.query_params()), "q=rust&limit=5");
    }

    #[test]
    fn verification_upload_requires_an_existing_file() {
        let err = UploadVerificationDocumentRequest::new("u1", "transcript", "/no/such/file")
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}

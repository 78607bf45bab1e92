//! Authentication endpoints. Credential-bearing calls (login,
//! registration, password reset, email verification) are anonymous by
//! contract; only the current-user lookup runs on the session.

use super::request_common::{
    AuthPolicy, HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType,
    MultipartBodyHTTPRequestType, NoBodyHTTPRequestType, QueryParams, RequestError,
};
use crate::http_response::response_common::ResponseEnvelope;
use reqwest::multipart;
use serde::Serialize;
use std::io;
use std::path::Path;

/// Request type for `POST /api/auth/login`.
#[derive(Debug)]
pub struct LoginRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for LoginRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for LoginRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/auth/login".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn auth(&self) -> AuthPolicy { AuthPolicy::Anonymous }
}

/// Request type for `POST /api/register`: multipart registration with
/// scalar profile fields and an optional verification document.
#[derive(Debug)]
pub struct RegisterRequest {
    fields: Vec<(String, String)>,
    /// Form field name and source path of the attached document.
    document: Option<(String, String)>,
}

impl RegisterRequest {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields, document: None }
    }

    /// Attaches a verification document under `field`.
    pub fn with_document<P: AsRef<Path>>(mut self, field: &str, path: P) -> Result<Self, io::Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "File path does not exist"));
        }
        if !path.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "Path is not a valid file"));
        }
        self.document = Some((field.to_string(), path.to_string_lossy().to_string()));
        Ok(self)
    }
}

impl MultipartBodyHTTPRequestType for RegisterRequest {
    async fn multipart_body(&self) -> Result<multipart::Form, RequestError> {
        let mut form = multipart::Form::new();
        for (key, value) in &self.fields {
            form = form.text(key.clone(), value.clone());
        }
        if let Some((field, path)) = &self.document {
            form = form.part(field.clone(), multipart::Part::file(path).await?);
        }
        Ok(form)
    }
}

impl HTTPRequestType for RegisterRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/register".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn auth(&self) -> AuthPolicy { AuthPolicy::Anonymous }
}

/// Request type for `POST /api/forgot-password`.
#[derive(Debug)]
pub struct ForgotPasswordRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for ForgotPasswordRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for ForgotPasswordRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/forgot-password".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn auth(&self) -> AuthPolicy { AuthPolicy::Anonymous }
}

/// Request type for `POST /api/reset-password`.
#[derive(Debug)]
pub struct ResetPasswordRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for ResetPasswordRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for ResetPasswordRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/reset-password".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn auth(&self) -> AuthPolicy { AuthPolicy::Anonymous }
}

/// Request type for `GET /api/verify-email`.
#[derive(Debug)]
pub struct VerifyEmailRequest {
    pub params: QueryParams,
}

impl NoBodyHTTPRequestType for VerifyEmailRequest {}

impl HTTPRequestType for VerifyEmailRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/verify-email".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn auth(&self) -> AuthPolicy { AuthPolicy::Anonymous }
    fn query_params(&self) -> QueryParams { self.params.clone() }
}

/// Request type for `GET /api/auth/me`.
#[derive(Debug)]
pub struct CurrentUserRequest {}

impl NoBodyHTTPRequestType for CurrentUserRequest {}

impl HTTPRequestType for CurrentUserRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/auth/me".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

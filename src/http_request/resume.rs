//! Résumé generation endpoint.

use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_response::response_common::ResponseEnvelope;

/// Request type for `POST /api/resume/generate`.
#[derive(Debug)]
pub struct GenerateResumeRequest {}

impl NoBodyHTTPRequestType for GenerateResumeRequest {}

impl HTTPRequestType for GenerateResumeRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/resume/generate".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

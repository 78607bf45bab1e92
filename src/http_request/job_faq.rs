//! Job FAQ endpoints.

use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
    QueryParams,
};
use crate::http_response::response_common::ResponseEnvelope;
use serde::Serialize;

/// Request type for `POST /api/job-faq`.
#[derive(Debug)]
pub struct CreateJobFaqRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for CreateJobFaqRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for CreateJobFaqRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/job-faq".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `GET /api/job-faq`.
#[derive(Debug)]
pub struct ListJobFaqsRequest {
    pub params: QueryParams,
}

impl NoBodyHTTPRequestType for ListJobFaqsRequest {}

impl HTTPRequestType for ListJobFaqsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/job-faq".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> QueryParams { self.params.clone() }
}

/// Request type for `GET /api/job-faq/{id}`.
#[derive(Debug)]
pub struct GetJobFaqRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for GetJobFaqRequest {}

impl HTTPRequestType for GetJobFaqRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/job-faq/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `PUT /api/job-faq/{id}`.
#[derive(Debug)]
pub struct UpdateJobFaqRequest<B: Serialize> {
    pub id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for UpdateJobFaqRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for UpdateJobFaqRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/job-faq/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}

/// Request type for `DELETE /api/job-faq/{id}`.
#[derive(Debug)]
pub struct DeleteJobFaqRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for DeleteJobFaqRequest {}

impl HTTPRequestType for DeleteJobFaqRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/job-faq/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}

/// Request type for `POST /api/job-faq/{id}/helpful`.
#[derive(Debug)]
pub struct MarkFaqHelpfulRequest<B: Serialize> {
    pub id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for MarkFaqHelpfulRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for MarkFaqHelpfulRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/job-faq/{}/helpful", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `GET /api/job-faq/categories`.
#[derive(Debug)]
pub struct FaqCategoriesRequest {}

impl NoBodyHTTPRequestType for FaqCategoriesRequest {}

impl HTTPRequestType for FaqCategoriesRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/job-faq/categories".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/job-faq/recruiter/my-faqs`.
#[derive(Debug)]
pub struct RecruiterFaqsRequest {}

impl NoBodyHTTPRequestType for RecruiterFaqsRequest {}

impl HTTPRequestType for RecruiterFaqsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/job-faq/recruiter/my-faqs".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

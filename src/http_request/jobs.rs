//! Job posting and application endpoints.

use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
    QueryParams,
};
use crate::http_response::response_common::ResponseEnvelope;
use serde::Serialize;

/// Request type for `GET /api/jobs` with caller-supplied filters.
#[derive(Debug)]
pub struct ListJobsRequest {
    pub params: QueryParams,
}

impl NoBodyHTTPRequestType for ListJobsRequest {}

impl HTTPRequestType for ListJobsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/jobs".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> QueryParams { self.params.clone() }
}

/// Request type for `GET /api/jobs/{id}`.
#[derive(Debug)]
pub struct GetJobRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for GetJobRequest {}

impl HTTPRequestType for GetJobRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/jobs/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `POST /api/jobs`.
#[derive(Debug)]
pub struct CreateJobRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for CreateJobRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for CreateJobRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/jobs".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `PUT /api/jobs/{id}`.
#[derive(Debug)]
pub struct UpdateJobRequest<B: Serialize> {
    pub id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for UpdateJobRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for UpdateJobRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/jobs/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Put }
}

/// Request type for `DELETE /api/jobs/{id}`.
#[derive(Debug)]
pub struct DeleteJobRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for DeleteJobRequest {}

impl HTTPRequestType for DeleteJobRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/jobs/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}

/// Request type for `POST /api/jobs/{id}/apply`.
#[derive(Debug)]
pub struct ApplyForJobRequest<B: Serialize> {
    pub id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for ApplyForJobRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for ApplyForJobRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/jobs/{}/apply", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `GET /api/jobs/my-postings`.
#[derive(Debug)]
pub struct MyPostingsRequest {}

impl NoBodyHTTPRequestType for MyPostingsRequest {}

impl HTTPRequestType for MyPostingsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/jobs/my-postings".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/jobs/my-applications`.
#[derive(Debug)]
pub struct MyApplicationsRequest {}

impl NoBodyHTTPRequestType for MyApplicationsRequest {}

impl HTTPRequestType for MyApplicationsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/jobs/my-applications".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/jobs/{id}/my-application`.
#[derive(Debug)]
pub struct MyApplicationStatusRequest {
    pub job_id: String,
}

impl NoBodyHTTPRequestType for MyApplicationStatusRequest {}

impl HTTPRequestType for MyApplicationStatusRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/jobs/{}/my-application", self.job_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for
/// `PATCH /api/jobs/{job_id}/applicant-status/{applicant_id}`.
#[derive(Debug)]
pub struct UpdateApplicantStatusRequest<B: Serialize> {
    pub job_id: String,
    pub applicant_id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for UpdateApplicantStatusRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for UpdateApplicantStatusRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String {
        format!("/api/jobs/{}/applicant-status/{}", self.job_id, self.applicant_id)
    }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

/// Request type for `GET /api/jobs/recruiter/summary`.
#[derive(Debug)]
pub struct RecruiterStatsRequest {}

impl NoBodyHTTPRequestType for RecruiterStatsRequest {}

impl HTTPRequestType for RecruiterStatsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/jobs/recruiter/summary".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

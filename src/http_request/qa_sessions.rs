//! Q&A session endpoints used by recruiters to screen applicants.

use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
};
use crate::http_response::response_common::ResponseEnvelope;
use serde::Serialize;

/// Request type for `POST /api/qa-sessions/create`.
#[derive(Debug)]
pub struct CreateQaSessionRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for CreateQaSessionRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for CreateQaSessionRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/qa-sessions/create".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `GET /api/qa-sessions/{id}`.
#[derive(Debug)]
pub struct GetQaSessionRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for GetQaSessionRequest {}

impl HTTPRequestType for GetQaSessionRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/qa-sessions/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `PATCH /api/qa-sessions/{id}/mark-completed`.
#[derive(Debug)]
pub struct MarkQaSessionCompletedRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for MarkQaSessionCompletedRequest {}

impl HTTPRequestType for MarkQaSessionCompletedRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/qa-sessions/{}/mark-completed", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

/// Request type for `GET /api/qa-sessions/student/{id}`.
#[derive(Debug)]
pub struct StudentQaStatusRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for StudentQaStatusRequest {}

impl HTTPRequestType for StudentQaStatusRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/qa-sessions/student/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/qa-sessions`.
#[derive(Debug)]
pub struct ListQaSessionsRequest {}

impl NoBodyHTTPRequestType for ListQaSessionsRequest {}

impl HTTPRequestType for ListQaSessionsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/qa-sessions".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `POST /api/qa-sessions/{id}/answers`.
#[derive(Debug)]
pub struct SubmitQaAnswersRequest<B: Serialize> {
    pub id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for SubmitQaAnswersRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for SubmitQaAnswersRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/qa-sessions/{}/answers", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `GET /api/qa-sessions/job/{job_id}`.
#[derive(Debug)]
pub struct JobQaSessionsRequest {
    pub job_id: String,
}

impl NoBodyHTTPRequestType for JobQaSessionsRequest {}

impl HTTPRequestType for JobQaSessionsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/qa-sessions/job/{}", self.job_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/qa-sessions/recruiter/sessions`.
#[derive(Debug)]
pub struct RecruiterQaSessionsRequest {}

impl NoBodyHTTPRequestType for RecruiterQaSessionsRequest {}

impl HTTPRequestType for RecruiterQaSessionsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/qa-sessions/recruiter/sessions".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn answers_are_posted_under_the_session_id() {
        let request = SubmitQaAnswersRequest {
            id: "q7".to_string(),
            body: json!({"answers": ["a", "b"]}),
        };
        assert_eq!(request.endpoint(), "/api/qa-sessions/q7/answers");
        assert_eq!(request.request_method(), HTTPRequestMethod::Post);
    }

    #[test]
    fn completion_is_a_bodyless_patch() {
        let request = MarkQaSessionCompletedRequest { id: "q7".to_string() };
        assert_eq!(request.endpoint(), "/api/qa-sessions/q7/mark-completed");
        assert_eq!(request.request_method(), HTTPRequestMethod::Patch);
    }
}

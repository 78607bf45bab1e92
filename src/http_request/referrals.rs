//! Referral request endpoints: students ask, alumni approve or reject.

use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
};
use crate::http_response::response_common::ResponseEnvelope;
use serde::Serialize;

/// Request type for `POST /api/referrals/request`.
#[derive(Debug)]
pub struct RequestReferralRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for RequestReferralRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for RequestReferralRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/referrals/request".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `GET /api/referrals/my-requests`.
#[derive(Debug)]
pub struct MyReferralRequestsRequest {}

impl NoBodyHTTPRequestType for MyReferralRequestsRequest {}

impl HTTPRequestType for MyReferralRequestsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/referrals/my-requests".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/referrals/alumni`.
#[derive(Debug)]
pub struct AlumniReferralsRequest {}

impl NoBodyHTTPRequestType for AlumniReferralsRequest {}

impl HTTPRequestType for AlumniReferralsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/referrals/alumni".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/referrals/alumni/pending`.
#[derive(Debug)]
pub struct PendingReferralsRequest {}

impl NoBodyHTTPRequestType for PendingReferralsRequest {}

impl HTTPRequestType for PendingReferralsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/referrals/alumni/pending".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `PATCH /api/referrals/{id}/approve`.
#[derive(Debug)]
pub struct ApproveReferralRequest<B: Serialize> {
    pub id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for ApproveReferralRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for ApproveReferralRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/referrals/{}/approve", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

/// Request type for `PATCH /api/referrals/{id}/reject`.
#[derive(Debug)]
pub struct RejectReferralRequest<B: Serialize> {
    pub id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for RejectReferralRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for RejectReferralRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/referrals/{}/reject", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

/// Request type for `GET /api/referrals/{id}`.
#[derive(Debug)]
pub struct GetReferralRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for GetReferralRequest {}

impl HTTPRequestType for GetReferralRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/referrals/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/referrals/job/{job_id}`.
#[derive(Debug)]
pub struct JobReferralsRequest {
    pub job_id: String,
}

impl NoBodyHTTPRequestType for JobReferralsRequest {}

impl HTTPRequestType for JobReferralsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/referrals/job/{}", self.job_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `PATCH /api/referrals/{id}/mark-read`.
#[derive(Debug)]
pub struct MarkReferralReadRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for MarkReferralReadRequest {}

impl HTTPRequestType for MarkReferralReadRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/referrals/{}/mark-read", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

/// Request type for `DELETE /api/referrals/{id}`.
#[derive(Debug)]
pub struct DeleteReferralRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for DeleteReferralRequest {}

impl HTTPRequestType for DeleteReferralRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/referrals/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn review_paths_substitute_the_id() {
        let approve = ApproveReferralRequest { id: "r5".to_string(), body: json!({}) };
        assert_eq!(approve.endpoint(), "/api/referrals/r5/approve");
        let reject = RejectReferralRequest { id: "r5".to_string(), body: json!({"reason": "n/a"}) };
        assert_eq!(reject.endpoint(), "/api/referrals/r5/reject");
        assert_eq!(reject.request_method(), HTTPRequestMethod::Patch);
    }

    #[test]
    fn mark_read_is_a_bodyless_patch() {
        let request = MarkReferralReadRequest { id: "r5".to_string() };
        assert_eq!(request.endpoint(), "/api/referrals/r5/mark-read");
        assert_eq!(request.request_method(), HTTPRequestMethod::Patch);
    }
}

//! Admin dashboard, moderation, and account-verification endpoints.

use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
    QueryParams,
};
use crate::http_response::response_common::ResponseEnvelope;
use serde::Serialize;

/// Request type for `GET /api/admin/dashboard`.
#[derive(Debug)]
pub struct DashboardRequest {}

impl NoBodyHTTPRequestType for DashboardRequest {}

impl HTTPRequestType for DashboardRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/admin/dashboard".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/admin/users`.
#[derive(Debug)]
pub struct AdminUsersRequest {
    pub params: QueryParams,
}

impl NoBodyHTTPRequestType for AdminUsersRequest {}

impl HTTPRequestType for AdminUsersRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/admin/users".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> QueryParams { self.params.clone() }
}

/// Request type for `GET /api/admin/spam-monitor`.
#[derive(Debug)]
pub struct SpamMonitorRequest {
    pub params: QueryParams,
}

impl NoBodyHTTPRequestType for SpamMonitorRequest {}

impl HTTPRequestType for SpamMonitorRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/admin/spam-monitor".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> QueryParams { self.params.clone() }
}

/// Request type for `PATCH /api/admin/block-user/{id}`.
#[derive(Debug)]
pub struct AdminBlockUserRequest<B: Serialize> {
    pub id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for AdminBlockUserRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for AdminBlockUserRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/admin/block-user/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

/// Request type for `PATCH /api/admin/update-spam-score/{id}`.
#[derive(Debug)]
pub struct UpdateSpamScoreRequest<B: Serialize> {
    pub id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for UpdateSpamScoreRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for UpdateSpamScoreRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/admin/update-spam-score/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

/// Request type for `GET /api/admin/jobs`.
#[derive(Debug)]
pub struct AdminJobsRequest {
    pub params: QueryParams,
}

impl NoBodyHTTPRequestType for AdminJobsRequest {}

impl HTTPRequestType for AdminJobsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/admin/jobs".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> QueryParams { self.params.clone() }
}

/// Request type for `PATCH /api/admin/toggle-job/{id}`.
#[derive(Debug)]
pub struct ToggleJobRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for ToggleJobRequest {}

impl HTTPRequestType for ToggleJobRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/admin/toggle-job/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

/// Request type for `GET /api/admin/referrals`.
#[derive(Debug)]
pub struct AdminReferralsRequest {
    pub params: QueryParams,
}

impl NoBodyHTTPRequestType for AdminReferralsRequest {}

impl HTTPRequestType for AdminReferralsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/admin/referrals".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> QueryParams { self.params.clone() }
}

/// Request type for `DELETE /api/admin/delete-job/{id}`.
#[derive(Debug)]
pub struct AdminDeleteJobRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for AdminDeleteJobRequest {}

impl HTTPRequestType for AdminDeleteJobRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/admin/delete-job/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}

/// Request type for `DELETE /api/admin/delete-referral/{id}`.
#[derive(Debug)]
pub struct AdminDeleteReferralRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for AdminDeleteReferralRequest {}

impl HTTPRequestType for AdminDeleteReferralRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/admin/delete-referral/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}

/// Request type for `GET /api/admin/alumni-verifications`.
#[derive(Debug)]
pub struct PendingAlumniVerificationsRequest {
    pub params: QueryParams,
}

impl NoBodyHTTPRequestType for PendingAlumniVerificationsRequest {}

impl HTTPRequestType for PendingAlumniVerificationsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/admin/alumni-verifications".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> QueryParams { self.params.clone() }
}

/// Request type for `PATCH /api/admin/verify-alumni/{id}`.
#[derive(Debug)]
pub struct VerifyAlumniAccountRequest<B: Serialize> {
    pub alumni_id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for VerifyAlumniAccountRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for VerifyAlumniAccountRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/admin/verify-alumni/{}", self.alumni_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

/// Request type for `GET /api/admin/student-verifications`.
#[derive(Debug)]
pub struct PendingStudentVerificationsRequest {
    pub params: QueryParams,
}

impl NoBodyHTTPRequestType for PendingStudentVerificationsRequest {}

impl HTTPRequestType for PendingStudentVerificationsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/admin/student-verifications".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> QueryParams { self.params.clone() }
}

/// Request type for `PATCH /api/admin/verify-student/{id}`.
#[derive(Debug)]
pub struct VerifyStudentAccountRequest<B: Serialize> {
    pub student_id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for VerifyStudentAccountRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for VerifyStudentAccountRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/admin/verify-student/{}", self.student_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

/// Request type for `GET /api/admin/recruiter-verifications`.
#[derive(Debug)]
pub struct PendingRecruiterVerificationsRequest {
    pub params: QueryParams,
}

impl NoBodyHTTPRequestType for PendingRecruiterVerificationsRequest {}

impl HTTPRequestType for PendingRecruiterVerificationsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/admin/recruiter-verifications".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> QueryParams { self.params.clone() }
}

/// Request type for `PATCH /api/admin/verify-recruiter/{id}`.
#[derive(Debug)]
pub struct VerifyRecruiterAccountRequest<B: Serialize> {
    pub recruiter_id: String,
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for VerifyRecruiterAccountRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for VerifyRecruiterAccountRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/admin/verify-recruiter/{}", self.recruiter_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verification_paths_substitute_the_account_id() {
        let alumni = VerifyAlumniAccountRequest {
            alumni_id: "a1".to_string(),
            body: json!({"approved": true}),
        };
        assert_eq!(alumni.endpoint(), "/api/admin/verify-alumni/a1");
        let student = VerifyStudentAccountRequest {
            student_id: "s2".to_string(),
            body: json!({"approved": false}),
        };
        assert_eq!(student.endpoint(), "/api/admin/verify-student/s2");
        let recruiter = VerifyRecruiterAccountRequest {
            recruiter_id: "r3".to_string(),
            body: json!({"approved": true}),
        };
        assert_eq!(recruiter.endpoint(), "/api/admin/verify-recruiter/r3");
        assert_eq!(recruiter.request_method(), HTTPRequestMethod::Patch);
    }

    #[test]
    fn toggle_job_is_a_bodyless_patch() {
        let request = ToggleJobRequest { id: "j4".to_string() };
        assert_eq!(request.endpoint(), "/api/admin/toggle-job/j4");
        assert_eq!(request.request_method(), HTTPRequestMethod::Patch);
    }

    #[test]
    fn admin_deletes_use_dedicated_paths() {
        let job = AdminDeleteJobRequest { id: "j4".to_string() };
        assert_eq!(job.endpoint(), "/api/admin/delete-job/j4");
        let referral = AdminDeleteReferralRequest { id: "r4".to_string() };
        assert_eq!(referral.endpoint(), "/api/admin/delete-referral/r4");
    }
}

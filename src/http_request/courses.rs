//! Course catalog and progress endpoints.

use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
    QueryParams,
};
use crate::http_response::response_common::ResponseEnvelope;
use serde::Serialize;

/// Request type for `GET /api/courses`.
#[derive(Debug)]
pub struct ListCoursesRequest {
    pub params: QueryParams,
}

impl NoBodyHTTPRequestType for ListCoursesRequest {}

impl HTTPRequestType for ListCoursesRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/courses".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> QueryParams { self.params.clone() }
}

/// Request type for `GET /api/courses/{id}`.
#[derive(Debug)]
pub struct GetCourseRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for GetCourseRequest {}

impl HTTPRequestType for GetCourseRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/courses/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `POST /api/courses/enroll`.
#[derive(Debug)]
pub struct EnrollCourseRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for EnrollCourseRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for EnrollCourseRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/courses/enroll".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `POST /api/courses`.
#[derive(Debug)]
pub struct CreateCourseRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for CreateCourseRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for CreateCourseRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/courses".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `DELETE /api/courses/{id}`.
#[derive(Debug)]
pub struct DeleteCourseRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for DeleteCourseRequest {}

impl HTTPRequestType for DeleteCourseRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/courses/{}", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
}

/// Request type for `GET /api/courses/{course_id}/progress`.
#[derive(Debug)]
pub struct CourseProgressRequest {
    pub course_id: String,
}

impl NoBodyHTTPRequestType for CourseProgressRequest {}

impl HTTPRequestType for CourseProgressRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/courses/{}/progress", self.course_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `POST /api/courses/complete-checkpoint`.
#[derive(Debug)]
pub struct CompleteCheckpointRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for CompleteCheckpointRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for CompleteCheckpointRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/courses/complete-checkpoint".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_path_substitutes_the_course_id() {
        let request = CourseProgressRequest { course_id: "c3".to_string() };
        assert_eq!(request.endpoint(), "/api/courses/c3/progress");
        assert_eq!(request.request_method(), HTTPRequestMethod::Get);
    }
}

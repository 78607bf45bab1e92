//! Platform alert endpoints.

use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
};
use crate::http_response::response_common::ResponseEnvelope;
use serde::Serialize;

/// Request type for `POST /api/alerts/create`.
#[derive(Debug)]
pub struct CreateAlertRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for CreateAlertRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for CreateAlertRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/alerts/create".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `GET /api/alerts`.
#[derive(Debug)]
pub struct ListAlertsRequest {}

impl NoBodyHTTPRequestType for ListAlertsRequest {}

impl HTTPRequestType for ListAlertsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/alerts".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `PATCH /api/alerts/{id}/mark-seen`.
#[derive(Debug)]
pub struct MarkAlertSeenRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for MarkAlertSeenRequest {}

impl HTTPRequestType for MarkAlertSeenRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/alerts/{}/mark-seen", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_seen_substitutes_the_id() {
        let request = MarkAlertSeenRequest { id: "n8".to_string() };
        assert_eq!(request.endpoint(), "/api/alerts/n8/mark-seen");
        assert_eq!(request.request_method(), HTTPRequestMethod::Patch);
    }
}

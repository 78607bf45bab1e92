//! Connection (networking) endpoints.

use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
    QueryParams,
};
use crate::http_response::response_common::ResponseEnvelope;
use serde::Serialize;

/// Request type for `POST /api/connections/request`.
#[derive(Debug)]
pub struct RequestConnectionRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for RequestConnectionRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for RequestConnectionRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/connections/request".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `PATCH /api/connections/{id}/approve`.
#[derive(Debug)]
pub struct ApproveConnectionRequest {
    pub id: String,
}

impl NoBodyHTTPRequestType for ApproveConnectionRequest {}

impl HTTPRequestType for ApproveConnectionRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/connections/{}/approve", self.id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Patch }
}

/// Request type for `GET /api/connections`.
#[derive(Debug)]
pub struct ListConnectionsRequest {}

impl NoBodyHTTPRequestType for ListConnectionsRequest {}

impl HTTPRequestType for ListConnectionsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/connections".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/connections/incoming`.
#[derive(Debug)]
pub struct IncomingConnectionsRequest {}

impl NoBodyHTTPRequestType for IncomingConnectionsRequest {}

impl HTTPRequestType for IncomingConnectionsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/connections/incoming".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/connections/outgoing`.
#[derive(Debug)]
pub struct OutgoingConnectionsRequest {}

impl NoBodyHTTPRequestType for OutgoingConnectionsRequest {}

impl HTTPRequestType for OutgoingConnectionsRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/connections/outgoing".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/connections/status?targetId`.
#[derive(Debug)]
pub struct ConnectionStatusRequest {
    pub target_id: String,
}

impl NoBodyHTTPRequestType for ConnectionStatusRequest {}

impl HTTPRequestType for ConnectionStatusRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/connections/status".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> QueryParams {
        vec![("targetId".to_string(), Some(self.target_id.clone()))]
    }
}

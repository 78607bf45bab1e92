//! Direct messaging endpoints.

use super::request_common::{
    HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
};
use crate::http_response::response_common::ResponseEnvelope;
use serde::Serialize;

/// Request type for `POST /api/messages/send`.
#[derive(Debug)]
pub struct SendMessageRequest<B: Serialize> {
    pub body: B,
}

impl<B: Serialize> JSONBodyHTTPRequestType for SendMessageRequest<B> {
    type Body = B;
    fn body(&self) -> &B { &self.body }
}

impl<B: Serialize> HTTPRequestType for SendMessageRequest<B> {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/messages/send".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Request type for `GET /api/messages/inbox`.
#[derive(Debug)]
pub struct InboxRequest {}

impl NoBodyHTTPRequestType for InboxRequest {}

impl HTTPRequestType for InboxRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { "/api/messages/inbox".to_string() }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

/// Request type for `GET /api/messages/conversation/{user_id}`.
#[derive(Debug)]
pub struct ConversationRequest {
    pub user_id: String,
}

impl NoBodyHTTPRequestType for ConversationRequest {}

impl HTTPRequestType for ConversationRequest {
    type Response = ResponseEnvelope;
    fn endpoint(&self) -> String { format!("/api/messages/conversation/{}", self.user_id) }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

use serde_json::Value;
use strum_macros::Display;

/// Decodes a `reqwest::Response` into the value an endpoint call
/// resolves to.
#[allow(async_fn_in_trait)]
pub trait HTTPResponseType {
    type ParsedResponseType;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    /// Passes success statuses through; any other status becomes an
    /// [`ResponseError::Api`] carrying the server message when one was
    /// sent. The 401 session policy has already run in the client.
    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let bytes = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<ErrorBody>(&bytes).ok().and_then(|body| body.message);
        Err(ResponseError::Api { status, message })
    }
}

/// The decoded JSON payload of a successful call plus its status code.
///
/// Every catalog request resolves to this envelope; unwrapping the
/// payload is the caller's business
/// ([`util::unwrap_payload`](crate::util::unwrap_payload)).
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    status: u16,
    data: Value,
}

impl ResponseEnvelope {
    pub fn status(&self) -> u16 { self.status }
    pub fn data(&self) -> &Value { &self.data }
    pub fn into_data(self) -> Value { self.data }
}

impl HTTPResponseType for ResponseEnvelope {
    type ParsedResponseType = Self;

    async fn read_response(response: reqwest::Response) -> Result<Self, ResponseError> {
        let response = Self::unwrap_return_code(response).await?;
        let status = response.status().as_u16();
        let data = decode_body(response).await?;
        Ok(Self { status, data })
    }
}

/// Response shape of the standalone upload helper, which resolves to the
/// bare payload instead of the envelope. Kept for compatibility with the
/// historical contract of that one endpoint.
#[derive(Debug)]
pub struct UnwrappedPayload;

impl HTTPResponseType for UnwrappedPayload {
    type ParsedResponseType = Value;

    async fn read_response(response: reqwest::Response) -> Result<Value, ResponseError> {
        let response = Self::unwrap_return_code(response).await?;
        decode_body(response).await
    }
}

async fn decode_body(response: reqwest::Response) -> Result<Value, ResponseError> {
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        // 204-style responses carry no body
        return Ok(Value::Null);
    }
    serde_json::from_slice(&bytes).map_err(|e| ResponseError::Decode(e.to_string()))
}

/// Error payload shape shared by the backend's error responses.
#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

#[derive(Debug, Display)]
pub enum ResponseError {
    /// The session was rejected; the client has already cleared the
    /// token and emitted the expiry event.
    Unauthorized,
    /// Any non-401 error status, with the server message when present.
    #[strum(to_string = "server returned status {status}")]
    Api { status: u16, message: Option<String> },
    /// The response body could not be decoded as JSON.
    #[strum(to_string = "{0}")]
    Decode(String),
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        ResponseError::Decode(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_unwraps_to_its_payload() {
        let envelope = ResponseEnvelope { status: 200, data: json!({"id": "u1"}) };
        assert_eq!(envelope.status(), 200);
        assert_eq!(envelope.data()["id"], "u1");
        assert_eq!(crate::util::unwrap_payload(envelope), json!({"id": "u1"}));
    }

    #[test]
    fn error_body_tolerates_a_missing_message() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message, None);
        let body: ErrorBody = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("nope"));
    }
}

//! Stateless helpers shared by callers of the endpoint catalog. None of
//! these touch the network or the session.

use crate::common::HTTPError;
use crate::http_request::request_common::{QueryParams, RequestError};
use crate::http_response::response_common::{ResponseEnvelope, ResponseError};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Reduces a failed call to a user-presentable message, in priority
/// order: the server-supplied message, a fixed network-error string when
/// the request reached no server, the failure's own message, and a fixed
/// fallback.
pub fn error_message(error: &HTTPError) -> String {
    match error {
        HTTPError::HTTPResponseError(ResponseError::Api { message: Some(message), .. }) => {
            message.clone()
        }
        HTTPError::HTTPResponseError(
            ResponseError::Api { .. } | ResponseError::Unauthorized,
        ) => "An error occurred".to_string(),
        HTTPError::HTTPRequestError(RequestError::NoConnection | RequestError::Timeout) => {
            "Network error. Please check your connection.".to_string()
        }
        HTTPError::HTTPRequestError(
            RequestError::File(message) | RequestError::Other(message),
        )
        | HTTPError::HTTPResponseError(ResponseError::Decode(message))
            if !message.is_empty() =>
        {
            message.clone()
        }
        _ => "An unexpected error occurred".to_string(),
    }
}

/// URL-encodes `params` into a query string, omitting every key whose
/// value is `None` or the empty string.
pub fn build_query_string(params: &QueryParams) -> String {
    let mut url = reqwest::Url::parse("http://localhost/").unwrap();
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            match value {
                Some(value) if !value.is_empty() => {
                    pairs.append_pair(key, value);
                }
                _ => {}
            }
        }
    }
    url.query().unwrap_or_default().to_string()
}

/// ISO-8601 form of `date` (millisecond precision, `Z` suffix), or
/// `None` when no value was supplied.
pub fn format_timestamp(date: Option<DateTime<Utc>>) -> Option<String> {
    date.map(|date| date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Reduces a full response envelope to just its payload.
pub fn unwrap_payload(response: ResponseEnvelope) -> Value {
    response.into_data()
}

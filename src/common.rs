use crate::http_request::request_common::RequestError;
use crate::http_response::response_common::ResponseError;
use strum_macros::Display;

/// Top-level error for every endpoint call: either the request never
/// reached the server, or the server answered with a failure.
#[derive(Debug, Display)]
pub enum HTTPError {
    #[strum(to_string = "{0}")]
    HTTPRequestError(RequestError),
    #[strum(to_string = "{0}")]
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}

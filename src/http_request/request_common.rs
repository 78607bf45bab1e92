use crate::common::HTTPError;
use crate::http_client::HTTPClient;
use crate::http_response::response_common::HTTPResponseType;
use reqwest::multipart;
use strum_macros::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Patch => reqwest::Method::PATCH,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Whether the client attaches the session bearer token and applies the
/// 401 expiry policy. Fixed per endpoint, never caller-chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Token attached when present; 401 tears the session down.
    Session,
    /// No token, no session handling (login, registration, resets).
    Anonymous,
}

/// Query parameters as ordered key/value pairs. `None` and empty-string
/// values are dropped during encoding.
pub type QueryParams = Vec<(String, Option<String>)>;

/// Declarative description of one endpoint: method, path, query, auth.
/// The marker traits below pick the content handling and supply the one
/// generic dispatch routine.
pub trait HTTPRequestType {
    type Response: HTTPResponseType;
    fn endpoint(&self) -> String;
    fn request_method(&self) -> HTTPRequestMethod;
    fn auth(&self) -> AuthPolicy {
        AuthPolicy::Session
    }
    fn query_params(&self) -> QueryParams {
        QueryParams::new()
    }
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::new()
    }
}

/// Requests carrying no body, issued through the JSON profile.
#[allow(async_fn_in_trait)]
pub trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let builder = client.json_request(self);
        let response = client.execute(self.auth(), builder).await?;
        <Self::Response as HTTPResponseType>::read_response(response)
            .await
            .map_err(HTTPError::HTTPResponseError)
    }
}

/// Requests carrying a JSON body, issued through the JSON profile. The
/// body is serialized as supplied; this layer validates nothing.
#[allow(async_fn_in_trait)]
pub trait JSONBodyHTTPRequestType: HTTPRequestType {
    type Body: serde::Serialize;
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let builder = client.json_request(self).json(self.body());
        let response = client.execute(self.auth(), builder).await?;
        <Self::Response as HTTPResponseType>::read_response(response)
            .await
            .map_err(HTTPError::HTTPResponseError)
    }
}

/// Requests carrying a multipart form, issued through the multipart
/// profile.
#[allow(async_fn_in_trait)]
pub trait MultipartBodyHTTPRequestType: HTTPRequestType {
    async fn multipart_body(&self) -> Result<multipart::Form, RequestError>;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let form = self.multipart_body().await.map_err(HTTPError::HTTPRequestError)?;
        let builder = client.form_request(self).multipart(form);
        let response = client.execute(self.auth(), builder).await?;
        <Self::Response as HTTPResponseType>::read_response(response)
            .await
            .map_err(HTTPError::HTTPResponseError)
    }
}

#[derive(Debug, Display)]
pub enum RequestError {
    /// No connection to the server could be established.
    NoConnection,
    /// The transport gave up waiting for the server.
    Timeout,
    /// A multipart source file could not be read.
    #[strum(to_string = "{0}")]
    File(String),
    #[strum(to_string = "{0}")]
    Other(String),
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_connect() {
            RequestError::NoConnection
        } else if value.is_timeout() {
            RequestError::Timeout
        } else {
            RequestError::Other(value.to_string())
        }
    }
}

impl From<std::io::Error> for RequestError {
    fn from(value: std::io::Error) -> Self {
        RequestError::File(value.to_string())
    }
}

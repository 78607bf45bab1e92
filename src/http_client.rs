use crate::common::HTTPError;
use crate::http_request::request_common::{AuthPolicy, HTTPRequestType, RequestError};
use crate::http_response::response_common::ResponseError;
use crate::session::{SessionContext, SessionEvent};
use crate::util;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::env;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Base address used when [`BASE_URL_ENV`] is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
/// Environment variable overriding the backend base address.
pub const BASE_URL_ENV: &str = "CAMPUSLINK_API_URL";

/// A wrapper around `reqwest::Client` used to manage HTTP requests
/// against the CampusLink backend.
///
/// Two transport profiles share the configured base URL: a JSON profile
/// carrying a default `Content-Type: application/json` header, and a
/// multipart profile whose content type is set per request by the form
/// body. Requests with [`AuthPolicy::Session`] get the bearer token from
/// the [`SessionContext`] attached before dispatch; a 401 on such a
/// request clears the token and emits a single [`SessionEvent::Expired`].
///
/// No request timeout is configured; callers needing cancellation layer
/// it externally.
#[derive(Debug)]
pub struct HTTPClient {
    /// Transport for JSON and body-less requests.
    json: reqwest::Client,
    /// Transport for multipart form requests.
    form: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
    /// The injected session token holder.
    session: Arc<SessionContext>,
    /// Delivery side of the session-expiry channel.
    expiry_tx: mpsc::UnboundedSender<SessionEvent>,
}

impl HTTPClient {
    /// Constructs a client with a fresh anonymous [`SessionContext`].
    ///
    /// Returns the client together with the receiving end of the
    /// session-event channel.
    pub fn new(base_url: &str) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        Self::with_session(base_url, Arc::new(SessionContext::new()))
    }

    /// Constructs a client around an existing session context, e.g. one
    /// restored by the host from durable storage.
    pub fn with_session(
        base_url: &str,
        session: Arc<SessionContext>,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (expiry_tx, expiry_rx) = mpsc::unbounded_channel();
        let mut json_headers = HeaderMap::new();
        json_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Self {
            json: reqwest::Client::builder().default_headers(json_headers).build().unwrap(),
            form: reqwest::Client::builder().build().unwrap(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            expiry_tx,
        };
        (client, expiry_rx)
    }

    /// Constructs a client from [`BASE_URL_ENV`], falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let base_url_var = env::var(BASE_URL_ENV);
        let base_url = base_url_var.as_ref().map_or(DEFAULT_BASE_URL, |v| v.as_str());
        Self::new(base_url)
    }

    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }

    /// Provides a cloned reference to the session context.
    pub fn session(&self) -> Arc<SessionContext> { Arc::clone(&self.session) }

    pub(crate) fn json_request<R: HTTPRequestType + ?Sized>(
        &self,
        request: &R,
    ) -> reqwest::RequestBuilder {
        self.builder(&self.json, request)
    }

    pub(crate) fn form_request<R: HTTPRequestType + ?Sized>(
        &self,
        request: &R,
    ) -> reqwest::RequestBuilder {
        self.builder(&self.form, request)
    }

    fn builder<R: HTTPRequestType + ?Sized>(
        &self,
        transport: &reqwest::Client,
        request: &R,
    ) -> reqwest::RequestBuilder {
        let mut url = format!("{}{}", self.base_url, request.endpoint());
        let query = util::build_query_string(&request.query_params());
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        tracing::debug!("dispatching {} {url}", request.request_method());
        transport
            .request(request.request_method().into(), url)
            .headers(request.header_params())
    }

    /// Single dispatch point: attaches the bearer token for
    /// session-authenticated requests, sends, and applies the 401 policy.
    /// Everything else passes through untouched — no retries, no backoff.
    pub(crate) async fn execute(
        &self,
        auth: AuthPolicy,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, HTTPError> {
        let builder = match auth {
            AuthPolicy::Session => match self.session.get().await {
                Some(token) => builder.bearer_auth(token),
                None => builder,
            },
            AuthPolicy::Anonymous => builder,
        };
        let response = builder
            .send()
            .await
            .map_err(|e| HTTPError::HTTPRequestError(RequestError::from(e)))?;
        if auth == AuthPolicy::Session && response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.session.clear().await;
            tracing::warn!("session rejected by the server, token cleared");
            let _ = self.expiry_tx.send(SessionEvent::Expired);
            return Err(HTTPError::HTTPResponseError(ResponseError::Unauthorized));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let (client, _rx) = HTTPClient::new("http://localhost:5000/");
        assert_eq!(client.url(), "http://localhost:5000");
    }

    #[test]
    fn fresh_client_has_no_token() {
        let (client, _rx) = HTTPClient::new(DEFAULT_BASE_URL);
        let session = client.session();
        let token = tokio::runtime::Runtime::new().unwrap().block_on(session.get());
        assert!(token.is_none());
    }
}

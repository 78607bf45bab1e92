use tokio::sync::RwLock;

/// Holder for the opaque bearer credential, injected into the
/// [`HTTPClient`](crate::http_client::HTTPClient) at construction.
///
/// The login flow calls [`set`](Self::set) after a successful
/// authentication; the client reads the token on every
/// session-authenticated request and clears it when the server reports
/// the session as unauthorized. Logout is an explicit
/// [`clear`](Self::clear) by the caller.
#[derive(Debug, Default)]
pub struct SessionContext {
    token: RwLock<Option<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self { token: RwLock::new(None) }
    }

    /// Returns a copy of the current token, if any.
    pub async fn get(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn set(&self, token: &str) {
        *self.token.write().await = Some(token.to_owned());
    }

    pub async fn clear(&self) {
        *self.token.write().await = None;
    }
}

/// Session lifecycle notifications delivered on the channel returned by
/// [`HTTPClient::new`](crate::http_client::HTTPClient::new). The hosting
/// application decides what to do on expiry (e.g. navigate to its login
/// screen); the client itself only tears the session down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The server rejected the session token; it has been cleared.
    Expired,
}

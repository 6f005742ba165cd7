//! Token endpoint client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native targets (SSR host, tests): the same contract over `reqwest`.
//!
//! ERROR HANDLING
//! ==============
//! Every call settles into an `AuthOutcome`; nothing here panics or returns
//! early without telling the caller. The HTTP status is not consulted: the
//! endpoint answers rejections with 403 and a JSON body, so the body alone
//! decides between success and rejection.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;

use super::types::{Credentials, SessionToken, TokenData, TokenResponse};

/// Path of the JWT token endpoint relative to the API domain.
pub const TOKEN_PATH: &str = "/wp-json/jwt-auth/v1/token";

/// Failures that keep a login attempt from producing a verdict.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Transport(String),
    #[error("token response could not be decoded: {0}")]
    Decode(String),
    #[error("token response reported success without a token")]
    MissingToken,
}

/// Settled result of one token request.
#[derive(Debug)]
pub enum AuthOutcome {
    Authenticated(SessionToken),
    /// The server refused the credentials; carries its `message`, if any.
    Rejected(Option<String>),
    Transport(AuthError),
}

/// Capability that exchanges credentials for a session token.
#[async_trait(?Send)]
pub trait AuthClient: Send + Sync {
    async fn request_token(&self, creds: &Credentials) -> AuthOutcome;
}

/// Resolve the base origin of the account API.
///
/// `ACCOUNT_API_DOMAIN` at build time wins; otherwise the page's own origin
/// in the browser, and an empty string (relative URLs) everywhere else.
pub fn api_domain() -> String {
    if let Some(domain) = option_env!("ACCOUNT_API_DOMAIN") {
        return domain.trim_end_matches('/').to_owned();
    }
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Full URL of the token endpoint under `api_domain`.
pub fn token_endpoint(api_domain: &str) -> String {
    format!("{}{TOKEN_PATH}", api_domain.trim_end_matches('/'))
}

/// Decode a raw response body and classify it.
pub fn decode_token_response(raw: &str) -> AuthOutcome {
    match serde_json::from_str::<TokenResponse>(raw) {
        Ok(body) => interpret_token_response(body),
        Err(e) => AuthOutcome::Transport(AuthError::Decode(e.to_string())),
    }
}

/// Classify a decoded token response.
pub fn interpret_token_response(body: TokenResponse) -> AuthOutcome {
    if !body.success {
        return AuthOutcome::Rejected(body.message);
    }
    match body.data {
        Some(TokenData { id: Some(user_id), token: Some(token) }) => {
            AuthOutcome::Authenticated(SessionToken { user_id, token })
        }
        _ => AuthOutcome::Transport(AuthError::MissingToken),
    }
}

/// Client for the platform this build targets, pointed at `api_domain`.
pub fn default_auth_client(api_domain: &str) -> Arc<dyn AuthClient> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserAuthClient::new(api_domain))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(HttpAuthClient::new(api_domain))
    }
}

/// Browser `fetch` client backed by `gloo-net`.
#[cfg(feature = "hydrate")]
pub struct BrowserAuthClient {
    endpoint: String,
}

#[cfg(feature = "hydrate")]
impl BrowserAuthClient {
    pub fn new(api_domain: &str) -> Self {
        Self { endpoint: token_endpoint(api_domain) }
    }

    async fn post_credentials(&self, creds: &Credentials) -> Result<String, AuthError> {
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(creds)
            .map_err(|e| AuthError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))
    }
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl AuthClient for BrowserAuthClient {
    async fn request_token(&self, creds: &Credentials) -> AuthOutcome {
        match self.post_credentials(creds).await {
            Ok(raw) => decode_token_response(&raw),
            Err(e) => AuthOutcome::Transport(e),
        }
    }
}

/// Native client backed by `reqwest`.
#[cfg(not(target_arch = "wasm32"))]
pub struct HttpAuthClient {
    http: reqwest::Client,
    endpoint: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpAuthClient {
    pub fn new(api_domain: &str) -> Self {
        Self { http: reqwest::Client::new(), endpoint: token_endpoint(api_domain) }
    }

    async fn post_credentials(&self, creds: &Credentials) -> Result<String, AuthError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(creds)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl AuthClient for HttpAuthClient {
    async fn request_token(&self, creds: &Credentials) -> AuthOutcome {
        match self.post_credentials(creds).await {
            Ok(raw) => decode_token_response(&raw),
            Err(e) => AuthOutcome::Transport(e),
        }
    }
}

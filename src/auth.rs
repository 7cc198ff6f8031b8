use crate::error::{GtmError, GtmResult};
use base64::{Engine, engine::general_purpose};
use reqwest::header::{HeaderValue, AUTHORIZATION};

/// Authentication hook for GTM API requests.
///
/// Called with the fully built request (method, URL, headers and body) right
/// before it is sent, so request signing schemes such as EdgeGrid can be
/// implemented outside this crate.
#[async_trait::async_trait]
pub trait Authentication: Send + Sync {
    /// Authenticate or sign the outgoing request in place
    async fn authenticate(&self, request: &mut reqwest::Request) -> GtmResult<()>;
}

fn authorization_value(value: String) -> GtmResult<HeaderValue> {
    value
        .parse()
        .map_err(|e| GtmError::auth_error(format!("Invalid auth header: {}", e)))
}

/// Basic authentication using username/password, for gateways and test
/// endpoints that front the API
#[derive(Debug, Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[async_trait::async_trait]
impl Authentication for BasicAuth {
    async fn authenticate(&self, request: &mut reqwest::Request) -> GtmResult<()> {
        let credentials = format!("{}:{}", self.username, self.password);
        let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
        let value = authorization_value(format!("Basic {}", encoded))?;

        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// Bearer token authentication
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl Authentication for BearerAuth {
    async fn authenticate(&self, request: &mut reqwest::Request) -> GtmResult<()> {
        let value = authorization_value(format!("Bearer {}", self.token))?;
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// No authentication
#[derive(Debug, Clone)]
pub struct NoAuth;

#[async_trait::async_trait]
impl Authentication for NoAuth {
    async fn authenticate(&self, _request: &mut reqwest::Request) -> GtmResult<()> {
        Ok(())
    }
}

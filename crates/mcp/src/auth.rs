//! Auth context resolution.
//!
//! Two interchangeable strategies produce the bearer token presented to
//! the upstream API: pass-through (read the inbound Authorization
//! header) and managed (ask a credential broker for the current user's
//! grant). The strategy is picked once at process configuration time;
//! nothing downstream branches on the mode.

use async_trait::async_trait;
use lingate_core::{GatewayError, GatewayResult};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Per-request inbound context the auth strategies read from.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Raw `Authorization` header value, if the caller sent one.
    pub authorization: Option<String>,
}

impl RequestContext {
    pub fn with_authorization(value: impl Into<String>) -> Self {
        Self { authorization: Some(value.into()) }
    }
}

/// How the token for the current request was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    PassThrough,
    Managed,
}

/// An opaque bearer credential, resolved fresh at the start of each
/// request and discarded at request end. Never cached across requests.
#[derive(Clone)]
pub struct AuthToken {
    secret: String,
    mode: AuthMode,
}

impl AuthToken {
    pub fn new(secret: impl Into<String>, mode: AuthMode) -> Self {
        Self { secret: secret.into(), mode }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }
}

// Keep the credential out of logs.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("mode", &self.mode)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Failure reported by a credential broker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrokerError {
    #[error("no valid grant for this user")]
    NoGrant,
    #[error("grant has expired")]
    Expired,
    #[error("grant was revoked")]
    Revoked,
    #[error("credential broker unreachable: {0}")]
    Unavailable(String),
}

/// External credential broker: "fetch the current access token for this
/// request". The broker's own OAuth exchange is outside this system.
#[async_trait]
pub trait CredentialBroker: Send + Sync {
    async fn access_token(&self, ctx: &RequestContext) -> Result<String, BrokerError>;
}

/// Auth context provider. Exactly two variants; selected once at startup.
#[derive(Clone)]
pub enum AuthProvider {
    /// Read a bearer credential directly from the inbound request.
    PassThrough,
    /// Ask the configured broker for the current user's access token.
    /// The handle is process-wide, read-only after initialization.
    Managed(Arc<dyn CredentialBroker>),
}

impl AuthProvider {
    /// Resolve the token to present upstream for this request.
    pub async fn resolve(&self, ctx: &RequestContext) -> GatewayResult<AuthToken> {
        match self {
            Self::PassThrough => {
                let secret = parse_bearer(ctx.authorization.as_deref())?;
                Ok(AuthToken::new(secret, AuthMode::PassThrough))
            }
            Self::Managed(broker) => match broker.access_token(ctx).await {
                Ok(secret) => Ok(AuthToken::new(secret, AuthMode::Managed)),
                Err(err @ (BrokerError::Expired | BrokerError::Revoked)) => {
                    Err(GatewayError::AuthenticationExpired { message: err.to_string() })
                }
                Err(err) => {
                    Err(GatewayError::AuthenticationUnavailable { message: err.to_string() })
                }
            },
        }
    }
}

impl fmt::Debug for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PassThrough => write!(f, "AuthProvider::PassThrough"),
            Self::Managed(_) => write!(f, "AuthProvider::Managed"),
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
/// The scheme match is case-insensitive.
fn parse_bearer(header: Option<&str>) -> GatewayResult<String> {
    let header = header.unwrap_or("");
    if header.is_empty() {
        return Err(GatewayError::missing_credential("Missing Authorization header"));
    }

    let mut parts = header.splitn(2, ' ');
    match (parts.next(), parts.next()) {
        (Some(scheme), Some(token))
            if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() =>
        {
            Ok(token.to_string())
        }
        _ => Err(GatewayError::missing_credential(
            "Invalid Authorization header format - expected 'Bearer <token>'",
        )),
    }
}

/// Broker client speaking the credential broker's HTTP token endpoint.
#[derive(Debug, Clone)]
pub struct HttpBroker {
    http: reqwest::Client,
    endpoint: Url,
}

#[derive(Debug, Deserialize)]
struct BrokerResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpBroker {
    pub fn new(endpoint: Url) -> Result<Self, BrokerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| BrokerError::Unavailable(e.to_string()))?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl CredentialBroker for HttpBroker {
    async fn access_token(&self, ctx: &RequestContext) -> Result<String, BrokerError> {
        let mut request = self.http.post(self.endpoint.clone());
        // The caller's inbound credential identifies the user to the broker.
        if let Some(auth) = &ctx.authorization {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BrokerError::Unavailable(e.to_string()))?;
        if !response.status().is_success() {
            return Err(BrokerError::Unavailable(format!(
                "HTTP {}",
                response.status().as_u16()
            )));
        }

        let body: BrokerResponse = response
            .json()
            .await
            .map_err(|e| BrokerError::Unavailable(e.to_string()))?;
        match (body.access_token, body.error.as_deref()) {
            (Some(token), _) => Ok(token),
            (None, Some("no_grant")) => Err(BrokerError::NoGrant),
            (None, Some("expired")) => Err(BrokerError::Expired),
            (None, Some("revoked")) => Err(BrokerError::Revoked),
            (None, other) => Err(BrokerError::Unavailable(format!(
                "unrecognized broker response: {}",
                other.unwrap_or("empty body")
            ))),
        }
    }
}

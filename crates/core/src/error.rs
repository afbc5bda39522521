//! The closed error taxonomy for the gateway.
//!
//! Every failure a tool call can hit is one of these kinds, and every
//! kind is rendered into the tool-error envelope at the dispatcher
//! boundary. The `Display` output is the human-readable envelope message.

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Error kinds surfaced through the tool-error envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// No or malformed bearer header (pass-through auth mode).
    #[error("{message}")]
    MissingCredential { message: String },

    /// Credential broker reports no valid grant (managed auth mode).
    #[error("Authentication unavailable: {message}")]
    AuthenticationUnavailable { message: String },

    /// Credential broker reports an expired or revoked grant.
    #[error("Authentication expired: {message}")]
    AuthenticationExpired { message: String },

    /// Tool parameter schema validation failed.
    #[error("Invalid parameters: {message}")]
    InvalidParameters { message: String },

    /// Upstream rejected the token (HTTP 401).
    #[error("Linear API rejected the credential (HTTP 401)")]
    UpstreamUnauthorized,

    /// Upstream returned a GraphQL `errors` array for a well-formed request.
    #[error("{message}")]
    UpstreamValidation { message: String },

    /// Inferred from a null node where a result was expected.
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Transport failure or timeout reaching upstream.
    #[error("{message}")]
    NetworkError { message: String },

    /// No registered tool matches the requested name.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },
}

impl GatewayError {
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::MissingCredential { message: message.into() }
    }

    /// A required parameter was absent from the call arguments.
    pub fn missing_param(field: &str, expected: &str) -> Self {
        Self::InvalidParameters {
            message: format!("missing required field '{field}' ({expected})"),
        }
    }

    /// A parameter was present but had the wrong primitive type.
    pub fn wrong_param_type(field: &str, expected: &str) -> Self {
        Self::InvalidParameters {
            message: format!("field '{field}' expected {expected}"),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamValidation { message: message.into() }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError { message: message.into() }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        // A payload we cannot decode is an upstream contract violation,
        // reported through the same kind as other transport failures.
        Self::NetworkError { message: format!("unexpected response shape: {err}") }
    }
}

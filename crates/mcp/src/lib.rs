// MCP (Model Context Protocol) gateway for the Linear API.
//
// JSON-RPC requests arrive over a single HTTP endpoint; each tool call
// resolves an auth token, validates parameters against the tool's
// schema, performs exactly one upstream operation, and answers with the
// uniform success/error envelope.

pub mod auth;
pub mod dispatch;
pub mod protocol;
pub mod server;
pub mod tools;

pub use auth::{AuthProvider, AuthToken, CredentialBroker, RequestContext};
pub use dispatch::Dispatcher;

// Upstream client for the Linear GraphQL API.
//
// Each logical operation becomes exactly one bearer-authenticated POST;
// results are flattened into the entity shapes in lingate-core before
// they leave this crate.

pub mod client;
pub mod config;
pub mod graphql;

pub use client::{CreateIssueInput, CreateProjectInput, LinearClient, UpdateIssueInput};
pub use config::ClientConfig;

// Shared types for the Linear tool gateway: entity shapes flattened out
// of the upstream GraphQL API, and the closed error taxonomy every layer
// reports through.

pub mod entities;
pub mod error;

pub use entities::{
    Comment, Issue, IssueSummary, Label, MutatedIssue, Project, ProjectRef, ProjectUpdate,
    ProjectUpdatesPage, StateRef, TeamRef, TeamStates, UserRef, WorkflowState, WorkflowStates,
};
pub use error::{GatewayError, GatewayResult};

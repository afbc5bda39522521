//! GraphQL request/response framing and the operation documents.
//!
//! Connection wrappers (`{ nodes: [...] }`) are a wire detail of the
//! upstream API; the raw shapes here unwrap them so only plain ordered
//! sequences reach the entity types.

use lingate_core::{
    Comment, Issue, Label, MutatedIssue, Project, ProjectRef, ProjectUpdate, StateRef, TeamRef,
    TeamStates, UserRef, WorkflowState,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Query documents

pub const MY_ISSUES_QUERY: &str = r#"
query {
    viewer {
        assignedIssues(first: 50) {
            nodes {
                id
                identifier
                title
                description
                state { name }
                priority
                project { name }
            }
        }
    }
}
"#;

pub const ISSUE_QUERY: &str = r#"
query($identifier: String!) {
    issue(id: $identifier) {
        id
        identifier
        title
        description
        state { id name }
        priority
        labels { nodes { name } }
        assignee { name email }
        project { name }
        team { id name }
        comments { nodes { body user { name } createdAt } }
    }
}
"#;

pub const SEARCH_ISSUES_QUERY: &str = r#"
query($query: String!) {
    issues(filter: {
        or: [
            { title: { containsIgnoreCase: $query } },
            { description: { containsIgnoreCase: $query } }
        ]
    }, first: 50) {
        nodes {
            id
            identifier
            title
            description
            state { name }
            priority
            project { name }
        }
    }
}
"#;

pub const TEAM_STATES_QUERY: &str = r#"
query($teamId: String!) {
    team(id: $teamId) {
        id
        name
        states {
            nodes {
                id
                name
                type
            }
        }
    }
}
"#;

pub const ALL_TEAMS_STATES_QUERY: &str = r#"
query {
    teams {
        nodes {
            id
            name
            states {
                nodes {
                    id
                    name
                    type
                }
            }
        }
    }
}
"#;

pub const LIST_PROJECTS_QUERY: &str = r#"
query {
    projects(first: 50) {
        nodes {
            id
            name
            slugId
            state
            url
            teams { nodes { id name } }
        }
    }
}
"#;

pub const TEAM_PROJECTS_QUERY: &str = r#"
query($teamId: String!) {
    team(id: $teamId) {
        id
        name
        projects(first: 50) {
            nodes {
                id
                name
                slugId
                state
                url
                teams { nodes { id name } }
            }
        }
    }
}
"#;

pub const PROJECT_UPDATES_QUERY: &str = r#"
query($projectId: String!, $limit: Int!) {
    project(id: $projectId) {
        id
        name
        projectUpdates(first: $limit) {
            nodes {
                id
                body
                health
                createdAt
                user { name email }
            }
        }
    }
}
"#;

// Mutation documents

pub const CREATE_ISSUE_MUTATION: &str = r#"
mutation($teamId: String!, $title: String!, $description: String, $priority: Int, $stateId: String, $assigneeId: String, $projectId: String) {
    issueCreate(input: {
        teamId: $teamId
        title: $title
        description: $description
        priority: $priority
        stateId: $stateId
        assigneeId: $assigneeId
        projectId: $projectId
    }) {
        success
        issue {
            id
            identifier
            title
            url
            state { name }
            assignee { name }
            project { id name }
        }
    }
}
"#;

pub const UPDATE_ISSUE_MUTATION: &str = r#"
mutation($id: String!, $title: String, $description: String, $priority: Int, $stateId: String, $assigneeId: String) {
    issueUpdate(id: $id, input: {
        title: $title
        description: $description
        priority: $priority
        stateId: $stateId
        assigneeId: $assigneeId
    }) {
        success
        issue {
            id
            identifier
            title
            url
            state { name }
            assignee { name }
        }
    }
}
"#;

pub const UPDATE_STATUS_MUTATION: &str = r#"
mutation($id: String!, $stateId: String!) {
    issueUpdate(id: $id, input: { stateId: $stateId }) {
        success
        issue {
            id
            identifier
            state { name }
        }
    }
}
"#;

pub const CREATE_PROJECT_MUTATION: &str = r#"
mutation($name: String!, $teamIds: [String!]!, $description: String, $state: String) {
    projectCreate(input: {
        name: $name
        teamIds: $teamIds
        description: $description
        state: $state
    }) {
        success
        project {
            id
            name
            slugId
            url
        }
    }
}
"#;

pub const CREATE_PROJECT_UPDATE_MUTATION: &str = r#"
mutation($projectId: String!, $body: String!, $health: ProjectUpdateHealthType) {
    projectUpdateCreate(input: {
        projectId: $projectId
        body: $body
        health: $health
    }) {
        success
        projectUpdate {
            id
            body
            health
            createdAt
            user { name email }
            project { id name }
        }
    }
}
"#;

/// Outbound GraphQL request body.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

/// Inbound GraphQL response body: `{data, errors?}`.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

/// One entry of the top-level GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    #[serde(default)]
    pub message: Option<String>,
}

impl GraphqlError {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("unknown GraphQL error")
    }
}

/// Upstream connection wrapper: `{ nodes: [...] }`.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Connection<T> {
    pub fn into_nodes(self) -> Vec<T> {
        self.nodes
    }
}

/// Remove null entries from a variables object.
///
/// The Linear API rejects explicit nulls for optional input fields, so
/// absent and null must mean the same thing on the wire.
pub fn prune_nulls(variables: Value) -> Value {
    match variables {
        Value::Object(map) => {
            Value::Object(map.into_iter().filter(|(_, v)| !v.is_null()).collect())
        }
        other => other,
    }
}

// Raw shapes still carrying connection wrappers. Deserialized from the
// `data` payload and immediately converted into entity shapes.

#[derive(Debug, Deserialize)]
pub(crate) struct RawIssue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<StateRef>,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub labels: Option<Connection<Label>>,
    #[serde(default)]
    pub assignee: Option<UserRef>,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub comments: Option<Connection<Comment>>,
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        Issue {
            id: raw.id,
            identifier: raw.identifier,
            title: raw.title,
            description: raw.description,
            state: raw.state,
            priority: raw.priority,
            labels: raw.labels.map(Connection::into_nodes).unwrap_or_default(),
            assignee: raw.assignee,
            project: raw.project,
            team: raw.team,
            comments: raw.comments.map(Connection::into_nodes).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTeamStates {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub states: Option<Connection<WorkflowState>>,
}

impl From<RawTeamStates> for TeamStates {
    fn from(raw: RawTeamStates) -> Self {
        TeamStates {
            id: raw.id,
            name: raw.name,
            states: raw.states.map(Connection::into_nodes).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug_id: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub teams: Option<Connection<TeamRef>>,
}

impl From<RawProject> for Project {
    fn from(raw: RawProject) -> Self {
        Project {
            id: raw.id,
            name: raw.name,
            slug_id: raw.slug_id,
            state: raw.state,
            url: raw.url,
            teams: raw.teams.map(Connection::into_nodes).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProjectWithUpdates {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub project_updates: Option<Connection<ProjectUpdate>>,
}

/// Payload of `issueCreate` / `issueUpdate`.
#[derive(Debug, Deserialize)]
pub(crate) struct IssuePayload {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub issue: Option<MutatedIssue>,
}

/// Payload of `projectCreate`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProjectPayload {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub project: Option<RawProject>,
}

/// Payload of `projectUpdateCreate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectUpdatePayload {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub project_update: Option<ProjectUpdate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prune_nulls_removes_null_entries() {
        let pruned = prune_nulls(json!({
            "teamId": "team-123",
            "title": "Test",
            "description": null,
            "priority": null,
        }));
        assert_eq!(pruned, json!({"teamId": "team-123", "title": "Test"}));
    }

    #[test]
    fn prune_nulls_keeps_falsy_values() {
        let pruned = prune_nulls(json!({
            "teamId": "team-123",
            "priority": 0,
            "title": "",
            "enabled": false,
        }));
        assert_eq!(
            pruned,
            json!({"teamId": "team-123", "priority": 0, "title": "", "enabled": false})
        );
    }

    #[test]
    fn prune_nulls_handles_empty_and_all_null_objects() {
        assert_eq!(prune_nulls(json!({})), json!({}));
        assert_eq!(prune_nulls(json!({"a": null, "b": null})), json!({}));
    }

    #[test]
    fn request_omits_absent_variables() {
        let request = GraphqlRequest { query: "query { viewer { id } }", variables: None };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("variables").is_none());
    }

    #[test]
    fn raw_issue_unwraps_connections() {
        let raw: RawIssue = serde_json::from_value(json!({
            "id": "i1",
            "identifier": "ENG-1",
            "title": "T",
            "labels": {"nodes": [{"name": "bug"}, {"name": "infra"}]},
            "comments": {"nodes": []}
        }))
        .unwrap();

        let issue = Issue::from(raw);
        assert_eq!(issue.labels.len(), 2);
        assert_eq!(issue.labels[1].name, "infra");
        assert!(issue.comments.is_empty());
    }

    #[test]
    fn graphql_error_falls_back_to_generic_message() {
        let err: GraphqlError = serde_json::from_value(json!({"extensions": {}})).unwrap();
        assert_eq!(err.message(), "unknown GraphQL error");
    }
}

//! The Linear GraphQL client.
//!
//! One authenticated POST per logical operation, no retries, no caching.
//! Transport failures, upstream 401s, GraphQL `errors` arrays, and null
//! expected nodes each map to their own [`GatewayError`] kind.

use crate::config::ClientConfig;
use crate::graphql::{
    self, Connection, GraphqlRequest, GraphqlResponse, IssuePayload, ProjectPayload,
    ProjectUpdatePayload, RawIssue, RawProject, RawProjectWithUpdates, RawTeamStates,
};
use lingate_core::{
    GatewayError, GatewayResult, Issue, IssueSummary, MutatedIssue, Project, ProjectRef,
    ProjectUpdate, ProjectUpdatesPage, TeamStates, WorkflowStates,
};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

/// Input for the create-issue operation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueInput {
    pub team_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Input for the update-issue operation. `issue_id` must be the opaque
/// upstream id, never the display identifier.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueInput {
    #[serde(rename = "id")]
    pub issue_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

/// Input for the create-project operation.
#[derive(Debug, Clone, Default)]
pub struct CreateProjectInput {
    pub name: String,
    pub team_id: String,
    pub description: Option<String>,
    pub state: Option<String>,
}

/// Client for the upstream Linear GraphQL API.
///
/// Stateless aside from the configured endpoint and timeout; safe to
/// share across concurrent requests.
#[derive(Debug, Clone)]
pub struct LinearClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl LinearClient {
    pub fn new(config: ClientConfig) -> GatewayResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    /// Execute one GraphQL operation with the given bearer token and
    /// return the `data` payload.
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<Value>,
        token: &str,
    ) -> GatewayResult<Value> {
        let request = GraphqlRequest {
            query,
            variables: variables.map(graphql::prune_nulls),
        };

        debug!(endpoint = %self.config.endpoint, "POST GraphQL operation");
        let response = self
            .http
            .post(self.config.endpoint.clone())
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(GatewayError::UpstreamUnauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::network(format!(
                "Linear API returned HTTP {}: {body}",
                status.as_u16()
            )));
        }

        let parsed: GraphqlResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::network(format!("invalid response body: {e}")))?;

        if let Some(errors) = parsed.errors.filter(|errs| !errs.is_empty()) {
            let joined = errors
                .iter()
                .map(|e| e.message().to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GatewayError::upstream(format!("GraphQL errors: {joined}")));
        }

        Ok(parsed.data.unwrap_or_else(|| json!({})))
    }

    /// Issues assigned to the viewer identified by the token.
    pub async fn my_issues(&self, token: &str) -> GatewayResult<Vec<IssueSummary>> {
        let data = self.execute(graphql::MY_ISSUES_QUERY, None, token).await?;
        match data.pointer("/viewer/assignedIssues") {
            Some(v) if !v.is_null() => {
                let conn: Connection<IssueSummary> = serde_json::from_value(v.clone())?;
                Ok(conn.into_nodes())
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Fetch one issue by its display identifier (e.g. "ENG-123").
    pub async fn issue(&self, token: &str, identifier: &str) -> GatewayResult<Issue> {
        let data = self
            .execute(graphql::ISSUE_QUERY, Some(json!({ "identifier": identifier })), token)
            .await?;
        match node(&data, "issue") {
            Some(v) => {
                let raw: RawIssue = serde_json::from_value(v.clone())?;
                Ok(raw.into())
            }
            None => Err(GatewayError::not_found(format!("Issue {identifier}"))),
        }
    }

    /// Case-insensitive text match over issue titles and descriptions.
    pub async fn search(&self, token: &str, query: &str) -> GatewayResult<Vec<IssueSummary>> {
        let data = self
            .execute(graphql::SEARCH_ISSUES_QUERY, Some(json!({ "query": query })), token)
            .await?;
        match node(&data, "issues") {
            Some(v) => {
                let conn: Connection<IssueSummary> = serde_json::from_value(v.clone())?;
                Ok(conn.into_nodes())
            }
            None => Ok(Vec::new()),
        }
    }

    pub async fn create_issue(
        &self,
        token: &str,
        input: &CreateIssueInput,
    ) -> GatewayResult<MutatedIssue> {
        let variables = serde_json::to_value(input)?;
        let data = self
            .execute(graphql::CREATE_ISSUE_MUTATION, Some(variables), token)
            .await?;
        mutation_issue(&data, "issueCreate", "Issue creation failed")
    }

    pub async fn update_issue(
        &self,
        token: &str,
        input: &UpdateIssueInput,
    ) -> GatewayResult<MutatedIssue> {
        let variables = serde_json::to_value(input)?;
        let data = self
            .execute(graphql::UPDATE_ISSUE_MUTATION, Some(variables), token)
            .await?;
        mutation_issue(&data, "issueUpdate", "Issue update failed")
    }

    /// Narrowed update: move an issue to another workflow state, leaving
    /// every other field untouched.
    pub async fn update_status(
        &self,
        token: &str,
        issue_id: &str,
        state_id: &str,
    ) -> GatewayResult<MutatedIssue> {
        let data = self
            .execute(
                graphql::UPDATE_STATUS_MUTATION,
                Some(json!({ "id": issue_id, "stateId": state_id })),
                token,
            )
            .await?;
        mutation_issue(&data, "issueUpdate", "Status update failed")
    }

    /// Workflow states for one team, or for every team grouped per team.
    pub async fn workflow_states(
        &self,
        token: &str,
        team_id: Option<&str>,
    ) -> GatewayResult<WorkflowStates> {
        match team_id {
            Some(id) => {
                let data = self
                    .execute(graphql::TEAM_STATES_QUERY, Some(json!({ "teamId": id })), token)
                    .await?;
                match node(&data, "team") {
                    Some(v) => {
                        let raw: RawTeamStates = serde_json::from_value(v.clone())?;
                        Ok(WorkflowStates::Team(raw.into()))
                    }
                    None => Err(GatewayError::not_found(format!("Team {id}"))),
                }
            }
            None => {
                let data = self.execute(graphql::ALL_TEAMS_STATES_QUERY, None, token).await?;
                let teams = match node(&data, "teams") {
                    Some(v) => {
                        let conn: Connection<RawTeamStates> = serde_json::from_value(v.clone())?;
                        conn.into_nodes().into_iter().map(TeamStates::from).collect()
                    }
                    None => Vec::new(),
                };
                Ok(WorkflowStates::AllTeams(teams))
            }
        }
    }

    /// Projects, optionally narrowed to one team.
    pub async fn list_projects(
        &self,
        token: &str,
        team_id: Option<&str>,
    ) -> GatewayResult<Vec<Project>> {
        let projects_node = match team_id {
            Some(id) => {
                let data = self
                    .execute(graphql::TEAM_PROJECTS_QUERY, Some(json!({ "teamId": id })), token)
                    .await?;
                match node(&data, "team") {
                    Some(team) => team.get("projects").filter(|v| !v.is_null()).cloned(),
                    None => return Err(GatewayError::not_found(format!("Team {id}"))),
                }
            }
            None => {
                let data = self.execute(graphql::LIST_PROJECTS_QUERY, None, token).await?;
                node(&data, "projects").cloned()
            }
        };

        match projects_node {
            Some(v) => {
                let conn: Connection<RawProject> = serde_json::from_value(v)?;
                Ok(conn.into_nodes().into_iter().map(Project::from).collect())
            }
            None => Ok(Vec::new()),
        }
    }

    /// Most recent status updates for a project.
    pub async fn list_project_updates(
        &self,
        token: &str,
        project_id: &str,
        limit: i64,
    ) -> GatewayResult<ProjectUpdatesPage> {
        let data = self
            .execute(
                graphql::PROJECT_UPDATES_QUERY,
                Some(json!({ "projectId": project_id, "limit": limit })),
                token,
            )
            .await?;
        match node(&data, "project") {
            Some(v) => {
                let raw: RawProjectWithUpdates = serde_json::from_value(v.clone())?;
                Ok(ProjectUpdatesPage {
                    project: ProjectRef { id: Some(raw.id), name: raw.name },
                    updates: raw.project_updates.map(Connection::into_nodes).unwrap_or_default(),
                })
            }
            None => Err(GatewayError::not_found(format!("Project {project_id}"))),
        }
    }

    pub async fn create_project(
        &self,
        token: &str,
        input: &CreateProjectInput,
    ) -> GatewayResult<Project> {
        // The API takes an array of team ids; the tool surface exposes one.
        let variables = json!({
            "name": input.name,
            "teamIds": [input.team_id],
            "description": input.description,
            "state": input.state,
        });
        let data = self
            .execute(graphql::CREATE_PROJECT_MUTATION, Some(variables), token)
            .await?;
        let payload: ProjectPayload = match node(&data, "projectCreate") {
            Some(v) => serde_json::from_value(v.clone())?,
            None => return Err(GatewayError::upstream("Project creation failed")),
        };
        match payload {
            ProjectPayload { success: true, project: Some(raw) } => Ok(raw.into()),
            _ => Err(GatewayError::upstream("Project creation failed")),
        }
    }

    pub async fn create_project_update(
        &self,
        token: &str,
        project_id: &str,
        body: &str,
        health: Option<&str>,
    ) -> GatewayResult<ProjectUpdate> {
        let variables = json!({
            "projectId": project_id,
            "body": body,
            "health": health,
        });
        let data = self
            .execute(graphql::CREATE_PROJECT_UPDATE_MUTATION, Some(variables), token)
            .await?;
        let payload: ProjectUpdatePayload = match node(&data, "projectUpdateCreate") {
            Some(v) => serde_json::from_value(v.clone())?,
            None => return Err(GatewayError::upstream("Project update failed")),
        };
        match payload {
            ProjectUpdatePayload { success: true, project_update: Some(update) } => Ok(update),
            _ => Err(GatewayError::upstream("Project update failed")),
        }
    }
}

/// Non-null lookup into the `data` payload.
fn node<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|v| !v.is_null())
}

fn mutation_issue(data: &Value, key: &str, failure: &str) -> GatewayResult<MutatedIssue> {
    let payload: IssuePayload = match node(data, key) {
        Some(v) => serde_json::from_value(v.clone())?,
        None => return Err(GatewayError::upstream(failure)),
    };
    match payload {
        IssuePayload { success: true, issue: Some(issue) } => Ok(issue),
        _ => Err(GatewayError::upstream(failure)),
    }
}

fn transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::network("request to Linear API timed out")
    } else {
        GatewayError::network(format!("request to Linear API failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingate_core::GatewayError;
    use url::Url;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LinearClient {
        let endpoint = Url::parse(&format!("{}/graphql", server.uri())).unwrap();
        LinearClient::new(ClientConfig::new(endpoint)).unwrap()
    }

    fn graphql_ok(data: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": data }))
    }

    #[tokio::test]
    async fn my_issues_flattens_connection_and_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("Authorization", "Bearer lin_api_token"))
            .respond_with(graphql_ok(serde_json::json!({
                "viewer": {
                    "assignedIssues": {
                        "nodes": [
                            {"id": "i1", "identifier": "ENG-1", "title": "First"},
                            {"id": "i2", "identifier": "ENG-2", "title": "Second"}
                        ]
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let issues = client_for(&server).my_issues("lin_api_token").await.unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[1].identifier, "ENG-2");
    }

    #[tokio::test]
    async fn issue_null_node_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(graphql_ok(serde_json::json!({ "issue": null })))
            .mount(&server)
            .await;

        let err = client_for(&server).issue("tok", "ENG-999").await.unwrap_err();
        assert_eq!(err, GatewayError::not_found("Issue ENG-999"));
        assert_eq!(err.to_string(), "Issue ENG-999 not found");
    }

    #[tokio::test]
    async fn issue_unwraps_labels_and_comments() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(
                serde_json::json!({"variables": {"identifier": "ENG-123"}}),
            ))
            .respond_with(graphql_ok(serde_json::json!({
                "issue": {
                    "id": "i1",
                    "identifier": "ENG-123",
                    "title": "Fix bug",
                    "state": {"id": "s1", "name": "In Progress"},
                    "labels": {"nodes": [{"name": "bug"}]},
                    "comments": {"nodes": [{"body": "on it", "user": {"name": "Ada"}}]}
                }
            })))
            .mount(&server)
            .await;

        let issue = client_for(&server).issue("tok", "ENG-123").await.unwrap();
        assert_eq!(issue.labels[0].name, "bug");
        assert_eq!(issue.comments[0].body, "on it");
        assert_eq!(issue.team, None);
    }

    #[tokio::test]
    async fn http_401_maps_to_upstream_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let err = client_for(&server).my_issues("bad").await.unwrap_err();
        assert_eq!(err, GatewayError::UpstreamUnauthorized);
    }

    #[tokio::test]
    async fn http_500_maps_to_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).my_issues("tok").await.unwrap_err();
        match err {
            GatewayError::NetworkError { message } => {
                assert!(message.contains("HTTP 500"), "message: {message}");
            }
            other => panic!("expected NetworkError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn graphql_errors_map_to_upstream_validation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "errors": [
                    {"message": "Invalid team id"},
                    {"message": "Field required"}
                ]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).search("tok", "bug").await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::upstream("GraphQL errors: Invalid team id; Field required")
        );
    }

    #[tokio::test]
    async fn create_issue_maps_unsuccessful_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(graphql_ok(serde_json::json!({
                "issueCreate": { "success": false }
            })))
            .mount(&server)
            .await;

        let input = CreateIssueInput {
            team_id: "t1".into(),
            title: "New".into(),
            ..Default::default()
        };
        let err = client_for(&server).create_issue("tok", &input).await.unwrap_err();
        assert_eq!(err, GatewayError::upstream("Issue creation failed"));
    }

    #[tokio::test]
    async fn create_issue_round_trips_identifier() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "variables": {"teamId": "t1", "title": "Fix bug", "priority": 2}
            })))
            .respond_with(graphql_ok(serde_json::json!({
                "issueCreate": {
                    "success": true,
                    "issue": {
                        "id": "new-123",
                        "identifier": "ENG-456",
                        "title": "Fix bug",
                        "url": "https://linear.app/x/issue/ENG-456"
                    }
                }
            })))
            .mount(&server)
            .await;

        let input = CreateIssueInput {
            team_id: "t1".into(),
            title: "Fix bug".into(),
            priority: Some(2),
            ..Default::default()
        };
        let issue = client_for(&server).create_issue("tok", &input).await.unwrap();
        assert_eq!(issue.id, "new-123");
        assert_eq!(issue.identifier, "ENG-456");
        assert_eq!(issue.title.as_deref(), Some("Fix bug"));
    }

    #[tokio::test]
    async fn update_status_returns_new_state_only() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "variables": {"id": "i1", "stateId": "s2"}
            })))
            .respond_with(graphql_ok(serde_json::json!({
                "issueUpdate": {
                    "success": true,
                    "issue": {
                        "id": "i1",
                        "identifier": "ENG-123",
                        "state": {"name": "Done"}
                    }
                }
            })))
            .mount(&server)
            .await;

        let issue = client_for(&server).update_status("tok", "i1", "s2").await.unwrap();
        assert_eq!(issue.state.unwrap().name, "Done");
        assert!(issue.title.is_none());
    }

    #[tokio::test]
    async fn workflow_states_scoped_returns_team() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({"variables": {"teamId": "t1"}})))
            .respond_with(graphql_ok(serde_json::json!({
                "team": {
                    "id": "t1",
                    "name": "Engineering",
                    "states": {"nodes": [
                        {"id": "s1", "name": "Backlog", "type": "backlog"},
                        {"id": "s2", "name": "Done", "type": "completed"}
                    ]}
                }
            })))
            .mount(&server)
            .await;

        let states = client_for(&server).workflow_states("tok", Some("t1")).await.unwrap();
        match states {
            WorkflowStates::Team(team) => {
                assert_eq!(team.name, "Engineering");
                assert_eq!(team.states.len(), 2);
                assert_eq!(team.states[1].state_type, "completed");
            }
            other => panic!("expected scoped result, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn workflow_states_scoped_null_team_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(graphql_ok(serde_json::json!({ "team": null })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .workflow_states("tok", Some("bad-team"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Team bad-team not found");
    }

    #[tokio::test]
    async fn workflow_states_unscoped_groups_per_team() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(graphql_ok(serde_json::json!({
                "teams": {"nodes": [
                    {"id": "t1", "name": "Engineering",
                     "states": {"nodes": [{"id": "s1", "name": "Backlog", "type": "backlog"}]}},
                    {"id": "t2", "name": "Design",
                     "states": {"nodes": [{"id": "s2", "name": "Todo", "type": "unstarted"}]}}
                ]}
            })))
            .mount(&server)
            .await;

        let states = client_for(&server).workflow_states("tok", None).await.unwrap();
        match states {
            WorkflowStates::AllTeams(teams) => {
                assert_eq!(teams.len(), 2);
                assert_eq!(teams[1].states[0].state_type, "unstarted");
            }
            other => panic!("expected unscoped result, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_project_updates_passes_limit_and_flattens() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "variables": {"projectId": "p1", "limit": 5}
            })))
            .respond_with(graphql_ok(serde_json::json!({
                "project": {
                    "id": "p1",
                    "name": "Apollo",
                    "projectUpdates": {"nodes": [
                        {"id": "u1", "body": "on track", "health": "onTrack",
                         "createdAt": "2024-06-01T00:00:00Z", "user": {"name": "Ada"}}
                    ]}
                }
            })))
            .mount(&server)
            .await;

        let page = client_for(&server)
            .list_project_updates("tok", "p1", 5)
            .await
            .unwrap();
        assert_eq!(page.project.name, "Apollo");
        assert_eq!(page.updates.len(), 1);
        assert_eq!(page.updates[0].health.as_deref(), Some("onTrack"));
    }

    #[tokio::test]
    async fn list_project_updates_null_project_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(graphql_ok(serde_json::json!({ "project": null })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_project_updates("tok", "missing", 10)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Project missing not found");
    }

    #[tokio::test]
    async fn create_project_sends_team_ids_array() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "variables": {"name": "Apollo", "teamIds": ["t1"]}
            })))
            .respond_with(graphql_ok(serde_json::json!({
                "projectCreate": {
                    "success": true,
                    "project": {"id": "p1", "name": "Apollo", "slugId": "apollo-1"}
                }
            })))
            .mount(&server)
            .await;

        let input = CreateProjectInput {
            name: "Apollo".into(),
            team_id: "t1".into(),
            ..Default::default()
        };
        let project = client_for(&server).create_project("tok", &input).await.unwrap();
        assert_eq!(project.slug_id.as_deref(), Some("apollo-1"));
    }

    #[tokio::test]
    async fn list_projects_scoped_to_unknown_team_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(graphql_ok(serde_json::json!({ "team": null })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_projects("tok", Some("t9"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Team t9 not found");
    }

    #[tokio::test]
    async fn list_projects_unscoped_flattens_teams() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(graphql_ok(serde_json::json!({
                "projects": {"nodes": [
                    {"id": "p1", "name": "Apollo", "slugId": "apollo-1", "state": "started",
                     "teams": {"nodes": [{"id": "t1", "name": "Engineering"}]}}
                ]}
            })))
            .mount(&server)
            .await;

        let projects = client_for(&server).list_projects("tok", None).await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].teams[0].name, "Engineering");
    }

    #[test]
    fn create_issue_input_skips_absent_fields() {
        let input = CreateIssueInput {
            team_id: "t1".into(),
            title: "T".into(),
            priority: Some(0),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["teamId"], "t1");
        assert_eq!(value["priority"], 0);
        assert!(value.get("description").is_none());
        assert!(value.get("assigneeId").is_none());
    }

    #[test]
    fn update_issue_input_renames_id() {
        let input = UpdateIssueInput {
            issue_id: "i1".into(),
            title: Some("New title".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["id"], "i1");
        assert!(value.get("issueId").is_none());
    }
}

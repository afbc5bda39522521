// Mutation tools: create_issue, update_issue, update_status,
// create_project, create_project_update.

use crate::auth::AuthToken;
use crate::tools::registry::{
    optional_int, optional_str, required_str, ParamKind, ParamSpec, Tool, ToolSpec,
};
use lingate_client::{CreateIssueInput, CreateProjectInput, LinearClient, UpdateIssueInput};
use lingate_core::GatewayResult;
use serde_json::{json, Value};
use std::sync::Arc;

/// Create a new issue in a team.
pub struct CreateIssueTool {
    client: Arc<LinearClient>,
}

impl CreateIssueTool {
    pub fn new(client: Arc<LinearClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CreateIssueTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "create_issue",
            description: "Create a new Linear issue. Requires team_id and title. Optional: description, priority (0=none, 1=urgent, 2=high, 3=medium, 4=low), state_id, assignee_id, project_id.",
            params: vec![
                ParamSpec::required("team_id", ParamKind::String, "The team ID to create the issue in"),
                ParamSpec::required("title", ParamKind::String, "Issue title"),
                ParamSpec::optional("description", ParamKind::String, "Issue description (markdown supported)"),
                ParamSpec::optional("priority", ParamKind::Integer, "Priority (0=none, 1=urgent, 2=high, 3=medium, 4=low)"),
                ParamSpec::optional("state_id", ParamKind::String, "Workflow state ID (get from states tool)"),
                ParamSpec::optional("assignee_id", ParamKind::String, "Assignee user ID"),
                ParamSpec::optional("project_id", ParamKind::String, "Project ID to assign issue to (get from list_projects tool)"),
            ],
        }
    }

    async fn call(&self, token: &AuthToken, args: &Value) -> GatewayResult<Value> {
        let input = CreateIssueInput {
            team_id: required_str(args, "team_id")?.to_string(),
            title: required_str(args, "title")?.to_string(),
            description: optional_str(args, "description").map(str::to_string),
            priority: optional_int(args, "priority"),
            state_id: optional_str(args, "state_id").map(str::to_string),
            assignee_id: optional_str(args, "assignee_id").map(str::to_string),
            project_id: optional_str(args, "project_id").map(str::to_string),
        };
        let issue = self.client.create_issue(token.secret(), &input).await?;
        Ok(json!({
            "success": true,
            "issue": issue,
        }))
    }
}

/// Update fields of an existing issue.
pub struct UpdateIssueTool {
    client: Arc<LinearClient>,
}

impl UpdateIssueTool {
    pub fn new(client: Arc<LinearClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for UpdateIssueTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "update_issue",
            description: "Update an existing Linear issue. Requires issue_id (internal UUID from issue query). Optional: title, description, priority, state_id, assignee_id.",
            params: vec![
                ParamSpec::required("issue_id", ParamKind::String, "The issue's internal UUID (get from issue query, not the identifier)"),
                ParamSpec::optional("title", ParamKind::String, "New title"),
                ParamSpec::optional("description", ParamKind::String, "New description (markdown supported)"),
                ParamSpec::optional("priority", ParamKind::Integer, "New priority (0=none, 1=urgent, 2=high, 3=medium, 4=low)"),
                ParamSpec::optional("state_id", ParamKind::String, "New workflow state ID"),
                ParamSpec::optional("assignee_id", ParamKind::String, "New assignee user ID"),
            ],
        }
    }

    async fn call(&self, token: &AuthToken, args: &Value) -> GatewayResult<Value> {
        let input = UpdateIssueInput {
            issue_id: required_str(args, "issue_id")?.to_string(),
            title: optional_str(args, "title").map(str::to_string),
            description: optional_str(args, "description").map(str::to_string),
            priority: optional_int(args, "priority"),
            state_id: optional_str(args, "state_id").map(str::to_string),
            assignee_id: optional_str(args, "assignee_id").map(str::to_string),
        };
        let issue = self.client.update_issue(token.secret(), &input).await?;
        Ok(json!({
            "success": true,
            "issue": issue,
        }))
    }
}

/// Narrowed issue update: workflow state only.
pub struct UpdateStatusTool {
    client: Arc<LinearClient>,
}

impl UpdateStatusTool {
    pub fn new(client: Arc<LinearClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for UpdateStatusTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "update_status",
            description: "Update the workflow status of a Linear issue. Requires issue_id and state_id (get state_id from states tool).",
            params: vec![
                ParamSpec::required("issue_id", ParamKind::String, "The issue's internal UUID (get from issue query)"),
                ParamSpec::required("state_id", ParamKind::String, "The target workflow state ID (get from states tool)"),
            ],
        }
    }

    async fn call(&self, token: &AuthToken, args: &Value) -> GatewayResult<Value> {
        let issue_id = required_str(args, "issue_id")?;
        let state_id = required_str(args, "state_id")?;
        let issue = self.client.update_status(token.secret(), issue_id, state_id).await?;
        Ok(json!({
            "success": true,
            "issue": issue,
        }))
    }
}

/// Create a new project for a team.
pub struct CreateProjectTool {
    client: Arc<LinearClient>,
}

impl CreateProjectTool {
    pub fn new(client: Arc<LinearClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CreateProjectTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "create_project",
            description: "Create a new Linear project. Requires name and team_id. Optional: description, state (planned, started, paused, completed, canceled).",
            params: vec![
                ParamSpec::required("name", ParamKind::String, "Project name"),
                ParamSpec::required("team_id", ParamKind::String, "Team UUID to associate with project"),
                ParamSpec::optional("description", ParamKind::String, "Project description"),
                ParamSpec::optional("state", ParamKind::String, "Project state (planned, started, paused, completed, canceled)"),
            ],
        }
    }

    async fn call(&self, token: &AuthToken, args: &Value) -> GatewayResult<Value> {
        let input = CreateProjectInput {
            name: required_str(args, "name")?.to_string(),
            team_id: required_str(args, "team_id")?.to_string(),
            description: optional_str(args, "description").map(str::to_string),
            state: optional_str(args, "state").map(str::to_string),
        };
        let project = self.client.create_project(token.secret(), &input).await?;
        Ok(json!({
            "success": true,
            "project": project,
        }))
    }
}

/// Post a status update for a project.
pub struct CreateProjectUpdateTool {
    client: Arc<LinearClient>,
}

impl CreateProjectUpdateTool {
    pub fn new(client: Arc<LinearClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CreateProjectUpdateTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "create_project_update",
            description: "Post a status update for a Linear project. Requires project_id (UUID from list_projects) and body. Optional: health (onTrack, atRisk, offTrack).",
            params: vec![
                ParamSpec::required("project_id", ParamKind::String, "The project's internal UUID (get from list_projects)"),
                ParamSpec::required("body", ParamKind::String, "The update content (markdown supported)"),
                ParamSpec::optional("health", ParamKind::String, "Health status (onTrack, atRisk, offTrack)"),
            ],
        }
    }

    async fn call(&self, token: &AuthToken, args: &Value) -> GatewayResult<Value> {
        let project_id = required_str(args, "project_id")?;
        let body = required_str(args, "body")?;
        let health = optional_str(args, "health");
        let update = self
            .client
            .create_project_update(token.secret(), project_id, body, health)
            .await?;
        Ok(json!({
            "success": true,
            "projectUpdate": update,
        }))
    }
}

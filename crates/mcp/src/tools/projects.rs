// Project query tools: list_projects, list_project_updates.

use crate::auth::AuthToken;
use crate::tools::registry::{optional_int, optional_str, required_str, ParamKind, ParamSpec, Tool, ToolSpec};
use lingate_client::LinearClient;
use lingate_core::GatewayResult;
use serde_json::{json, Value};
use std::sync::Arc;

const DEFAULT_UPDATES_LIMIT: i64 = 10;

/// Projects, optionally narrowed to one team.
pub struct ListProjectsTool {
    client: Arc<LinearClient>,
}

impl ListProjectsTool {
    pub fn new(client: Arc<LinearClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListProjectsTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "list_projects",
            description: "List Linear projects. If team_id is provided, returns only that team's projects. Returns project id, name, slug, state, and team summaries.",
            params: vec![ParamSpec::optional(
                "team_id",
                ParamKind::String,
                "Optional team ID to narrow the listing",
            )],
        }
    }

    async fn call(&self, token: &AuthToken, args: &Value) -> GatewayResult<Value> {
        let team_id = optional_str(args, "team_id");
        let projects = self.client.list_projects(token.secret(), team_id).await?;
        Ok(json!({
            "success": true,
            "projects": projects,
            "count": projects.len(),
        }))
    }
}

/// Recent status updates for a project.
pub struct ListProjectUpdatesTool {
    client: Arc<LinearClient>,
}

impl ListProjectUpdatesTool {
    pub fn new(client: Arc<LinearClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListProjectUpdatesTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "list_project_updates",
            description: "List recent status updates for a Linear project. Requires project_id (UUID from list_projects). Optional: limit (default 10).",
            params: vec![
                ParamSpec::required(
                    "project_id",
                    ParamKind::String,
                    "The project's internal UUID (get from list_projects)",
                ),
                ParamSpec::optional(
                    "limit",
                    ParamKind::Integer,
                    "Maximum number of updates to return (default: 10)",
                ),
            ],
        }
    }

    async fn call(&self, token: &AuthToken, args: &Value) -> GatewayResult<Value> {
        let project_id = required_str(args, "project_id")?;
        let limit = optional_int(args, "limit").unwrap_or(DEFAULT_UPDATES_LIMIT);
        let page = self
            .client
            .list_project_updates(token.secret(), project_id, limit)
            .await?;
        Ok(json!({
            "success": true,
            "project": page.project,
            "updates": page.updates,
            "count": page.updates.len(),
        }))
    }
}

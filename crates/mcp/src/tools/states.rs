// Workflow state tool.

use crate::auth::AuthToken;
use crate::tools::registry::{optional_str, ParamKind, ParamSpec, Tool, ToolSpec};
use lingate_client::LinearClient;
use lingate_core::{GatewayResult, WorkflowStates};
use serde_json::{json, Value};
use std::sync::Arc;

/// Workflow states for one team, or grouped per team across all teams.
pub struct StatesTool {
    client: Arc<LinearClient>,
}

impl StatesTool {
    pub fn new(client: Arc<LinearClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for StatesTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "states",
            description: "Get available workflow states for a Linear team. If team_id is not provided, returns states for all teams. Use this to get state_id values for update_status tool. State types: backlog, unstarted, started, completed, canceled.",
            params: vec![ParamSpec::optional(
                "team_id",
                ParamKind::String,
                "Optional team ID. If not provided, returns states for all teams",
            )],
        }
    }

    async fn call(&self, token: &AuthToken, args: &Value) -> GatewayResult<Value> {
        let team_id = optional_str(args, "team_id");
        match self.client.workflow_states(token.secret(), team_id).await? {
            WorkflowStates::Team(team) => Ok(json!({
                "success": true,
                "team": { "id": team.id, "name": team.name },
                "states": team.states,
            })),
            WorkflowStates::AllTeams(teams) => Ok(json!({
                "success": true,
                "teams": teams,
            })),
        }
    }
}

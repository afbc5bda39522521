// Issue query tools: my_issues, issue, search.

use crate::auth::AuthToken;
use crate::tools::registry::{required_str, ParamKind, ParamSpec, Tool, ToolSpec};
use lingate_client::LinearClient;
use lingate_core::GatewayResult;
use serde_json::{json, Value};
use std::sync::Arc;

/// Issues assigned to the authenticated user.
pub struct MyIssuesTool {
    client: Arc<LinearClient>,
}

impl MyIssuesTool {
    pub fn new(client: Arc<LinearClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for MyIssuesTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "my_issues",
            description: "Get Linear issues assigned to the authenticated user. Returns list of issues with id, identifier, title, description, state, priority, and project.",
            params: vec![],
        }
    }

    async fn call(&self, token: &AuthToken, _args: &Value) -> GatewayResult<Value> {
        let issues = self.client.my_issues(token.secret()).await?;
        Ok(json!({
            "success": true,
            "issues": issues,
            "count": issues.len(),
        }))
    }
}

/// One issue by its display identifier.
pub struct IssueTool {
    client: Arc<LinearClient>,
}

impl IssueTool {
    pub fn new(client: Arc<LinearClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for IssueTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "issue",
            description: "Get details of a specific Linear issue by its identifier (e.g., 'ENG-123'). Returns full issue details including comments, labels, assignee, and team.",
            params: vec![ParamSpec::required(
                "identifier",
                ParamKind::String,
                "The issue identifier (e.g., 'ENG-123')",
            )],
        }
    }

    async fn call(&self, token: &AuthToken, args: &Value) -> GatewayResult<Value> {
        let identifier = required_str(args, "identifier")?;
        let issue = self.client.issue(token.secret(), identifier).await?;
        Ok(json!({
            "success": true,
            "issue": issue,
        }))
    }
}

/// Text search over issue titles and descriptions.
pub struct SearchTool {
    client: Arc<LinearClient>,
}

impl SearchTool {
    pub fn new(client: Arc<LinearClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for SearchTool {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "search",
            description: "Search Linear issues by text query. Searches in issue title and description (case-insensitive). Returns matching issues with basic details.",
            params: vec![ParamSpec::required(
                "query",
                ParamKind::String,
                "Search text to match in title or description",
            )],
        }
    }

    async fn call(&self, token: &AuthToken, args: &Value) -> GatewayResult<Value> {
        let query = required_str(args, "query")?;
        let issues = self.client.search(token.secret(), query).await?;
        Ok(json!({
            "success": true,
            "query": query,
            "issues": issues,
            "count": issues.len(),
        }))
    }
}

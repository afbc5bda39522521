pub mod issues;
pub mod mutations;
pub mod projects;
pub mod states;
mod registry;

pub use issues::{IssueTool, MyIssuesTool, SearchTool};
pub use mutations::{
    CreateIssueTool, CreateProjectTool, CreateProjectUpdateTool, UpdateIssueTool, UpdateStatusTool,
};
pub use projects::{ListProjectUpdatesTool, ListProjectsTool};
pub use registry::{ParamKind, ParamSpec, Tool, ToolRegistry, ToolSpec};
pub use states::StatesTool;

use lingate_client::LinearClient;
use std::sync::Arc;

/// Build the full tool catalog backed by one shared upstream client.
pub fn default_registry(client: Arc<LinearClient>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // Issue queries
    registry.register(Arc::new(MyIssuesTool::new(client.clone())));
    registry.register(Arc::new(IssueTool::new(client.clone())));
    registry.register(Arc::new(SearchTool::new(client.clone())));

    // Mutations
    registry.register(Arc::new(CreateIssueTool::new(client.clone())));
    registry.register(Arc::new(UpdateIssueTool::new(client.clone())));
    registry.register(Arc::new(UpdateStatusTool::new(client.clone())));
    registry.register(Arc::new(CreateProjectTool::new(client.clone())));
    registry.register(Arc::new(CreateProjectUpdateTool::new(client.clone())));

    // Workflow states and projects
    registry.register(Arc::new(StatesTool::new(client.clone())));
    registry.register(Arc::new(ListProjectsTool::new(client.clone())));
    registry.register(Arc::new(ListProjectUpdatesTool::new(client)));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingate_client::ClientConfig;

    #[test]
    fn default_registry_holds_all_eleven_tools() {
        let client = Arc::new(LinearClient::new(ClientConfig::default()).unwrap());
        let registry = default_registry(client);
        assert_eq!(registry.len(), 11);
        for name in [
            "my_issues",
            "issue",
            "search",
            "create_issue",
            "update_issue",
            "update_status",
            "states",
            "list_projects",
            "list_project_updates",
            "create_project",
            "create_project_update",
        ] {
            assert!(registry.contains(name), "missing tool {name}");
        }
    }

    #[test]
    fn schemas_are_listed_in_stable_order() {
        let client = Arc::new(LinearClient::new(ClientConfig::default()).unwrap());
        let registry = default_registry(client);
        let names: Vec<String> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}

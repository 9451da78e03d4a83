use serde::Deserialize;

use super::{Connection, Field, ProjectItem};

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
}

// Project items query shapes (by organization and by user)

#[derive(Debug, Deserialize)]
pub struct OrganizationProjectData {
    pub organization: ProjectOwnerNode,
}

#[derive(Debug, Deserialize)]
pub struct UserProjectData {
    pub user: ProjectOwnerNode,
}

#[derive(Debug, Deserialize)]
pub struct ProjectOwnerNode {
    #[serde(rename = "projectV2")]
    pub project: Option<ProjectNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectNode {
    pub fields: Connection<Field>,
    pub items: ItemConnection,
}

#[derive(Debug, Deserialize)]
pub struct ItemConnection {
    pub nodes: Vec<ProjectItem>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

/// One fetched page, as handed to the pagination walker.
#[derive(Debug)]
pub struct ItemsPage {
    pub fields: Vec<Field>,
    pub items: Vec<ProjectItem>,
    pub page_info: PageInfo,
}

impl From<ProjectNode> for ItemsPage {
    fn from(node: ProjectNode) -> Self {
        ItemsPage {
            fields: node.fields.nodes,
            items: node.items.nodes,
            page_info: node.items.page_info,
        }
    }
}

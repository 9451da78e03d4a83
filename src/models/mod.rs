pub mod field;
pub mod graphql;
pub mod item;

// Re-export commonly used types
pub use field::{ColumnType, Field, FieldDataType};
pub use graphql::{GraphQLError, GraphQLResponse, ItemsPage, PageInfo};
pub use item::{Actor, Content, FieldValue, Label, Milestone, ProjectItem, RepositoryRef, Reviewer};

// Connection type used by GraphQL pagination
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Connection { nodes: Vec::new() }
    }
}

pub mod catalog;
pub mod content;
pub mod dates;
pub mod filter;
pub mod pager;
pub mod rows;
pub mod values;

pub use catalog::{CatalogColumn, FieldCatalog};
pub use content::{resolve_content, ResolvedContent};
pub use filter::{filter, FilterClause, FilterOp};
pub use pager::{PageWalker, ProjectOwner, ProjectQuery, ProjectsTransport, WalkedProject};
pub use rows::{project_items, CellValue, Column, Row, Table};
pub use values::resolve_field_value;

use crate::error::GitHubResult;

/// Walk every page of a project and project the merged items into a table,
/// applying the filter clauses along the way.
pub async fn query_project_items<T: ProjectsTransport>(
    transport: &T,
    query: &ProjectQuery,
    clauses: &[FilterClause],
    max_pages: usize,
) -> GitHubResult<Table> {
    let walked = PageWalker::new(transport, max_pages).walk(query).await?;
    let mut table = project_items(&walked.fields, &walked.items, clauses);
    table.truncated = walked.truncated;
    Ok(table)
}

use clap::ArgMatches;

use super::items::project_query;
use crate::client::GitHubClient;
use crate::config::get_api_token;
use crate::formatting::print_columns;
use crate::projection::{project_items, ProjectsTransport};

/// Show the column set a project's field definitions would produce.
pub async fn handle_fields(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let api_token = get_api_token()?;
    let client = GitHubClient::new(api_token);

    let query = project_query(matches)?;
    let page = client.fetch_items_page(&query, None).await?;

    let table = project_items(&page.fields, &[], &[]);
    print_columns(&table.columns);

    Ok(())
}

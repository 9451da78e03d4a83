use clap::ArgMatches;

use crate::client::GitHubClient;
use crate::config::get_api_token;
use crate::constants::DEFAULT_MAX_PAGES;
use crate::formatting::print_table;
use crate::projection::{query_project_items, FilterClause, ProjectOwner, ProjectQuery};

pub async fn handle_items(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let api_token = get_api_token()?;
    let client = GitHubClient::new(api_token);

    let query = project_query(matches)?;
    let clauses = parse_clauses(matches)?;
    let max_pages = parse_max_pages(matches)?;
    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("table");

    let table = query_project_items(&client, &query, &clauses, max_pages).await?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&table)?),
        _ => print_table(&table),
    }

    Ok(())
}

pub fn project_query(matches: &ArgMatches) -> Result<ProjectQuery, Box<dyn std::error::Error>> {
    let owner = matches
        .get_one::<String>("owner")
        .ok_or("Project owner is required")?;
    let number = matches
        .get_one::<String>("number")
        .ok_or("Project number is required")?
        .parse::<i64>()
        .map_err(|_| "Project number must be an integer")?;

    let kind = if matches.get_flag("user") {
        ProjectOwner::User
    } else {
        ProjectOwner::Organization
    };

    Ok(ProjectQuery {
        owner: owner.clone(),
        number,
        kind,
    })
}

fn parse_max_pages(matches: &ArgMatches) -> Result<usize, Box<dyn std::error::Error>> {
    match matches.get_one::<String>("max-pages") {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| format!("Max pages must be an integer, got '{}'", raw).into()),
        None => Ok(DEFAULT_MAX_PAGES),
    }
}

fn parse_clauses(matches: &ArgMatches) -> Result<Vec<FilterClause>, Box<dyn std::error::Error>> {
    let mut clauses = Vec::new();

    if let Some(raw_filters) = matches.get_many::<String>("filter") {
        for raw in raw_filters {
            clauses.push(FilterClause::parse(raw)?);
        }
    }

    // the evaluator reads the conjunction off the first clause only
    if let Some(conjunction) = matches.get_one::<String>("conjunction") {
        if let Some(first) = clauses.first_mut() {
            first.conjunction = conjunction.clone();
        }
    }

    Ok(clauses)
}

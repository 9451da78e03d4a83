use std::sync::Mutex;

use github_projects_cli::error::GitHubResult;
use github_projects_cli::models::graphql::OrganizationProjectData;
use github_projects_cli::models::ItemsPage;
use github_projects_cli::projection::{
    query_project_items, CellValue, FilterClause, FilterOp, ProjectOwner, ProjectQuery,
    ProjectsTransport,
};

/// Replays wire-shaped GraphQL responses, one per fetch.
struct ReplayTransport {
    payloads: Mutex<Vec<&'static str>>,
}

impl ReplayTransport {
    fn new(payloads: Vec<&'static str>) -> Self {
        ReplayTransport {
            payloads: Mutex::new(payloads),
        }
    }
}

impl ProjectsTransport for ReplayTransport {
    async fn fetch_items_page(
        &self,
        _query: &ProjectQuery,
        _cursor: Option<&str>,
    ) -> GitHubResult<ItemsPage> {
        let raw = self.payloads.lock().unwrap().remove(0);
        let data: OrganizationProjectData = serde_json::from_str(raw).expect("valid payload");
        let project = data.organization.project.expect("project present");
        Ok(project.into())
    }
}

const PAGE_ONE: &str = r#"{
  "organization": {
    "projectV2": {
      "fields": {
        "nodes": [
          { "name": "Title", "dataType": "TITLE" },
          { "name": "Status", "dataType": "SINGLE_SELECT" },
          { "name": "Due", "dataType": "DATE" },
          { "name": "Points", "dataType": "NUMBER" },
          { "name": "Tracked by", "dataType": "TRACKED_BY" },
          { "name": "Shiny", "dataType": "HOLOGRAM" }
        ]
      },
      "items": {
        "nodes": [
          {
            "id": "item-1",
            "isArchived": false,
            "type": "ISSUE",
            "createdAt": "2024-01-05T08:00:00Z",
            "updatedAt": "2024-01-20T08:00:00Z",
            "content": {
              "__typename": "Issue",
              "title": "Fix login flow",
              "closedAt": null,
              "assignees": { "nodes": [ { "login": "alice", "name": "Alice A" } ] },
              "milestone": { "title": "v1.0" }
            },
            "fieldValues": {
              "nodes": [
                {
                  "__typename": "ProjectV2ItemFieldTextValue",
                  "field": { "name": "Title", "dataType": "TITLE" },
                  "text": "Fix login flow"
                },
                {
                  "__typename": "ProjectV2ItemFieldSingleSelectValue",
                  "field": { "name": "Status", "dataType": "SINGLE_SELECT" },
                  "name": "Done"
                },
                {
                  "__typename": "ProjectV2ItemFieldDateValue",
                  "field": { "name": "Due", "dataType": "DATE" },
                  "date": "2024-01-10"
                },
                {
                  "__typename": "ProjectV2ItemFieldNumberValue",
                  "field": { "name": "Points", "dataType": "NUMBER" },
                  "number": 5
                }
              ]
            }
          }
        ],
        "pageInfo": { "hasNextPage": true, "endCursor": "cursor-1" }
      }
    }
  }
}"#;

const PAGE_TWO: &str = r#"{
  "organization": {
    "projectV2": {
      "fields": { "nodes": [] },
      "items": {
        "nodes": [
          {
            "id": "item-2",
            "isArchived": true,
            "type": "DRAFT_ISSUE",
            "createdAt": "2024-02-01T08:00:00Z",
            "updatedAt": "2024-02-02T08:00:00Z",
            "content": { "__typename": "DraftIssue", "title": "rough idea" },
            "fieldValues": {
              "nodes": [
                {
                  "__typename": "ProjectV2ItemFieldSingleSelectValue",
                  "field": { "name": "Status", "dataType": "SINGLE_SELECT" },
                  "name": "Todo"
                }
              ]
            }
          }
        ],
        "pageInfo": { "hasNextPage": false, "endCursor": null }
      }
    }
  }
}"#;

fn query() -> ProjectQuery {
    ProjectQuery {
        owner: "acme".to_string(),
        number: 7,
        kind: ProjectOwner::Organization,
    }
}

fn clause(key: &str, op: FilterOp, value: &str, conjunction: &str) -> FilterClause {
    FilterClause {
        key: key.to_string(),
        value: value.to_string(),
        op,
        conjunction: conjunction.to_string(),
    }
}

#[tokio::test]
async fn test_two_page_walk_projects_all_items() {
    let transport = ReplayTransport::new(vec![PAGE_ONE, PAGE_TWO]);
    let table = query_project_items(&transport, &query(), &[], 10).await.unwrap();

    // fixed prefix plus the four mappable fields; TRACKED_BY is excluded and
    // the unknown HOLOGRAM type is skipped
    let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "id",
            "archived",
            "type",
            "updated_at",
            "created_at",
            "closed_at",
            "Title",
            "Status",
            "Due",
            "Points"
        ]
    );

    assert_eq!(table.rows.len(), 2);
    assert!(!table.truncated);

    let first = &table.rows[0];
    assert_eq!(first[0], Some(CellValue::Text("item-1".to_string())));
    assert_eq!(first[1], Some(CellValue::Bool(false)));
    assert_eq!(first[7], Some(CellValue::Text("Done".to_string())));
    assert_eq!(first[9], Some(CellValue::Number(5.0)));

    let second = &table.rows[1];
    assert_eq!(second[0], Some(CellValue::Text("item-2".to_string())));
    assert_eq!(second[1], Some(CellValue::Bool(true)));
    // draft issues have no Title field value, no due date, no points
    assert_eq!(second[6], None);
    assert_eq!(second[8], None);
    assert_eq!(second[9], None);
}

#[tokio::test]
async fn test_and_filter_drops_partial_matches() {
    let transport = ReplayTransport::new(vec![PAGE_ONE, PAGE_TWO]);
    let clauses = vec![
        clause("Status", FilterOp::Eq, "Done", ""),
        clause("Points", FilterOp::Gt, "3", ""),
    ];
    let table = query_project_items(&transport, &query(), &clauses, 10).await.unwrap();

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][0], Some(CellValue::Text("item-1".to_string())));
}

#[tokio::test]
async fn test_or_filter_keeps_any_match() {
    let transport = ReplayTransport::new(vec![PAGE_ONE, PAGE_TWO]);
    let clauses = vec![
        clause("Status", FilterOp::Eq, "Done", "or"),
        clause("Status", FilterOp::Eq, "Todo", ""),
    ];
    let table = query_project_items(&transport, &query(), &clauses, 10).await.unwrap();

    assert_eq!(table.rows.len(), 2);
}

#[tokio::test]
async fn test_date_filter_on_custom_field() {
    let transport = ReplayTransport::new(vec![PAGE_ONE, PAGE_TWO]);
    let clauses = vec![clause("Due", FilterOp::Lt, "2024-06-01", "")];
    let table = query_project_items(&transport, &query(), &clauses, 10).await.unwrap();

    // only item-1 carries a due date, and it sorts before the pattern
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][0], Some(CellValue::Text("item-1".to_string())));
}

#[tokio::test]
async fn test_page_cap_marks_table_truncated() {
    // PAGE_ONE claims another page exists; cap the walk at one page
    let transport = ReplayTransport::new(vec![PAGE_ONE, PAGE_TWO]);
    let table = query_project_items(&transport, &query(), &[], 1).await.unwrap();

    assert_eq!(table.rows.len(), 1);
    assert!(table.truncated);
}

#[tokio::test]
async fn test_assignees_and_milestone_reachable_by_filter() {
    let transport = ReplayTransport::new(vec![PAGE_ONE, PAGE_TWO]);
    let clauses = vec![clause("Assignees", FilterOp::Contains, "Alice", "")];
    let table = query_project_items(&transport, &query(), &clauses, 10).await.unwrap();

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][0], Some(CellValue::Text("item-1".to_string())));
}

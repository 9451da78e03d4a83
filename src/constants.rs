pub const GITHUB_API_URL: &str = "https://api.github.com/graphql";
pub const CONFIG_FILE: &str = ".ghp-config.json";
pub const USER_AGENT: &str = "github-projects-cli";

/// Items fetched per pagination request.
pub const PAGE_SIZE: u32 = 100;

/// Default safety cap on pagination requests per walk.
pub const DEFAULT_MAX_PAGES: usize = 100;

/// Delimiter used when joining assignee names into one cell.
pub const ASSIGNEE_DELIMITER: &str = ",";

// Common GraphQL field selections
pub const FIELD_DEFINITION_FIELDS: &str = r#"
    ... on ProjectV2FieldCommon {
        name
        dataType
    }
"#;

pub const PROJECT_ITEM_FIELDS: &str = r#"
    id
    isArchived
    type
    createdAt
    updatedAt
    content {
        __typename
        ... on DraftIssue {
            title
        }
        ... on Issue {
            title
            closedAt
            assignees(first: 20) {
                nodes {
                    login
                    name
                }
            }
            milestone {
                title
            }
        }
        ... on PullRequest {
            title
            closedAt
            assignees(first: 20) {
                nodes {
                    login
                    name
                }
            }
            milestone {
                title
            }
        }
    }
    fieldValues(first: 50) {
        nodes {
            __typename
            ... on ProjectV2ItemFieldDateValue {
                field { ... on ProjectV2FieldCommon { name dataType } }
                date
            }
            ... on ProjectV2ItemFieldTextValue {
                field { ... on ProjectV2FieldCommon { name dataType } }
                text
            }
            ... on ProjectV2ItemFieldSingleSelectValue {
                field { ... on ProjectV2FieldCommon { name dataType } }
                name
            }
            ... on ProjectV2ItemFieldIterationValue {
                field { ... on ProjectV2FieldCommon { name dataType } }
                title
            }
            ... on ProjectV2ItemFieldLabelValue {
                field { ... on ProjectV2FieldCommon { name dataType } }
                labels(first: 20) {
                    nodes {
                        name
                    }
                }
            }
            ... on ProjectV2ItemFieldNumberValue {
                field { ... on ProjectV2FieldCommon { name dataType } }
                number
            }
            ... on ProjectV2ItemFieldReviewerValue {
                field { ... on ProjectV2FieldCommon { name dataType } }
                reviewers(first: 20) {
                    nodes {
                        ... on User { login name }
                        ... on Team { name }
                    }
                }
            }
            ... on ProjectV2ItemFieldRepositoryValue {
                field { ... on ProjectV2FieldCommon { name dataType } }
                repository {
                    name
                }
            }
        }
    }
"#;

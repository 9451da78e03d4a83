use serde::{Deserialize, Serialize};

use super::{Connection, Field};

/// One row-candidate of a project board. Owned by the request that fetched it
/// and discarded once the row set has been returned.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectItem {
    pub id: String,
    #[serde(rename = "isArchived")]
    pub is_archived: bool,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    pub content: Option<Content>,
    #[serde(rename = "fieldValues")]
    pub field_values: Connection<FieldValue>,
}

/// The underlying work item an entry wraps. Draft issues carry no assignees,
/// milestone, or closed time.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "__typename")]
pub enum Content {
    DraftIssue {
        title: Option<String>,
    },
    Issue {
        title: Option<String>,
        #[serde(rename = "closedAt")]
        closed_at: Option<String>,
        #[serde(default)]
        assignees: Connection<Actor>,
        milestone: Option<Milestone>,
    },
    PullRequest {
        title: Option<String>,
        #[serde(rename = "closedAt")]
        closed_at: Option<String>,
        #[serde(default)]
        assignees: Connection<Actor>,
        milestone: Option<Milestone>,
    },
    #[serde(other)]
    Unknown,
}

/// Per-item value of one project field. The wire format distinguishes variants
/// by `__typename`; each variant carries its owning field definition exactly
/// once, so the resolver never has to read metadata out of a sibling branch.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "__typename")]
pub enum FieldValue {
    #[serde(rename = "ProjectV2ItemFieldDateValue")]
    Date { field: Field, date: Option<String> },

    #[serde(rename = "ProjectV2ItemFieldTextValue")]
    Text { field: Field, text: Option<String> },

    #[serde(rename = "ProjectV2ItemFieldSingleSelectValue")]
    SingleSelect { field: Field, name: Option<String> },

    #[serde(rename = "ProjectV2ItemFieldIterationValue")]
    Iteration { field: Field, title: Option<String> },

    #[serde(rename = "ProjectV2ItemFieldLabelValue")]
    Labels {
        field: Field,
        #[serde(default)]
        labels: Connection<Label>,
    },

    #[serde(rename = "ProjectV2ItemFieldNumberValue")]
    Number { field: Field, number: Option<f64> },

    #[serde(rename = "ProjectV2ItemFieldReviewerValue")]
    Reviewers {
        field: Field,
        #[serde(default)]
        reviewers: Connection<Reviewer>,
    },

    #[serde(rename = "ProjectV2ItemFieldRepositoryValue")]
    Repository {
        field: Field,
        repository: Option<RepositoryRef>,
    },

    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Actor {
    pub login: String,
    pub name: Option<String>,
}

impl Actor {
    /// Display name, falling back to the login when the profile has none.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Milestone {
    pub title: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Label {
    pub name: String,
}

/// Review requests can point at users or teams; teams have no login.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Reviewer {
    pub login: Option<String>,
    pub name: Option<String>,
}

impl Reviewer {
    /// Display name, falling back to the login when the profile has none.
    pub fn display_name(&self) -> Option<&str> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Some(name),
            _ => self.login.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RepositoryRef {
    pub name: String,
}

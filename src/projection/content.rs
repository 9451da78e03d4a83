use chrono::{DateTime, Utc};

use super::dates;
use crate::constants::ASSIGNEE_DELIMITER;
use crate::models::Content;

/// Fixed, non-custom attributes extracted from an item's content union.
/// Absent data is simply `None`; resolution never fails.
#[derive(Debug, Default)]
pub struct ResolvedContent {
    pub closed_at: Option<DateTime<Utc>>,
    pub assignees: Option<String>,
    pub milestone: Option<String>,
}

pub fn resolve_content(content: Option<&Content>) -> ResolvedContent {
    match content {
        Some(Content::Issue {
            closed_at,
            assignees,
            milestone,
            ..
        })
        | Some(Content::PullRequest {
            closed_at,
            assignees,
            milestone,
            ..
        }) => {
            let names: Vec<&str> = assignees
                .nodes
                .iter()
                .map(|actor| actor.display_name())
                .collect();

            ResolvedContent {
                closed_at: closed_at.as_deref().and_then(dates::parse_flexible),
                assignees: if names.is_empty() {
                    None
                } else {
                    Some(names.join(ASSIGNEE_DELIMITER))
                },
                milestone: milestone.as_ref().map(|m| m.title.clone()),
            }
        }
        // Draft issues carry none of the fixed attributes
        _ => ResolvedContent::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Actor, Connection, Milestone};

    fn actor(login: &str, name: Option<&str>) -> Actor {
        Actor {
            login: login.to_string(),
            name: name.map(|n| n.to_string()),
        }
    }

    #[test]
    fn test_issue_with_everything() {
        let content = Content::Issue {
            title: Some("Fix login".to_string()),
            closed_at: Some("2024-03-01T09:00:00Z".to_string()),
            assignees: Connection {
                nodes: vec![actor("alice", Some("Alice A")), actor("bob", None)],
            },
            milestone: Some(Milestone {
                title: "v1.0".to_string(),
            }),
        };

        let resolved = resolve_content(Some(&content));
        assert!(resolved.closed_at.is_some());
        assert_eq!(resolved.assignees.as_deref(), Some("Alice A,bob"));
        assert_eq!(resolved.milestone.as_deref(), Some("v1.0"));
    }

    #[test]
    fn test_open_pull_request_has_no_closed_time() {
        let content = Content::PullRequest {
            title: None,
            closed_at: None,
            assignees: Connection::default(),
            milestone: None,
        };

        let resolved = resolve_content(Some(&content));
        assert!(resolved.closed_at.is_none());
        assert!(resolved.assignees.is_none());
        assert!(resolved.milestone.is_none());
    }

    #[test]
    fn test_draft_issue_resolves_to_nothing() {
        let content = Content::DraftIssue {
            title: Some("scratchpad".to_string()),
        };

        let resolved = resolve_content(Some(&content));
        assert!(resolved.closed_at.is_none());
        assert!(resolved.assignees.is_none());
        assert!(resolved.milestone.is_none());
    }

    #[test]
    fn test_missing_content() {
        let resolved = resolve_content(None);
        assert!(resolved.closed_at.is_none());
    }

    #[test]
    fn test_unparsable_closed_time_is_none() {
        let content = Content::Issue {
            title: None,
            closed_at: Some("soonish".to_string()),
            assignees: Connection::default(),
            milestone: None,
        };

        let resolved = resolve_content(Some(&content));
        assert!(resolved.closed_at.is_none());
    }
}

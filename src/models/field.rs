use serde::{Deserialize, Serialize};

/// One custom column definition of a project: a name plus a declared data type.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    #[serde(rename = "dataType")]
    pub data_type: FieldDataType,
}

/// Declared data types for project fields. GitHub adds new ones over time, so
/// anything unrecognized lands in `Unknown` instead of failing deserialization.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldDataType {
    Assignees,
    Date,
    Iteration,
    Labels,
    LinkedPullRequests,
    Milestone,
    Number,
    Repository,
    Reviewers,
    SingleSelect,
    Text,
    Title,
    TrackedBy,
    Tracks,
    #[serde(other)]
    Unknown,
}

impl FieldDataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldDataType::Assignees => "ASSIGNEES",
            FieldDataType::Date => "DATE",
            FieldDataType::Iteration => "ITERATION",
            FieldDataType::Labels => "LABELS",
            FieldDataType::LinkedPullRequests => "LINKED_PULL_REQUESTS",
            FieldDataType::Milestone => "MILESTONE",
            FieldDataType::Number => "NUMBER",
            FieldDataType::Repository => "REPOSITORY",
            FieldDataType::Reviewers => "REVIEWERS",
            FieldDataType::SingleSelect => "SINGLE_SELECT",
            FieldDataType::Text => "TEXT",
            FieldDataType::Title => "TITLE",
            FieldDataType::TrackedBy => "TRACKED_BY",
            FieldDataType::Tracks => "TRACKS",
            FieldDataType::Unknown => "UNKNOWN",
        }
    }
}

/// Storage type of an output column.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Number,
    Timestamp,
    Bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_deserializes_wire_shape() {
        let field: Field =
            serde_json::from_str(r#"{"name": "Due", "dataType": "DATE"}"#).unwrap();
        assert_eq!(field.name, "Due");
        assert_eq!(field.data_type, FieldDataType::Date);
    }

    #[test]
    fn test_unrecognized_data_type_maps_to_unknown() {
        let field: Field =
            serde_json::from_str(r#"{"name": "Novel", "dataType": "SOME_FUTURE_TYPE"}"#).unwrap();
        assert_eq!(field.data_type, FieldDataType::Unknown);
    }
}

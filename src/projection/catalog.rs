use crate::logging;
use crate::models::{ColumnType, Field, FieldDataType};

/// Data types that are declared by the API but deliberately not projected:
/// cross-reference and roll-up fields.
const EXCLUDED_DATA_TYPES: &[FieldDataType] = &[
    FieldDataType::LinkedPullRequests,
    FieldDataType::TrackedBy,
    FieldDataType::Tracks,
];

#[derive(Debug, Clone)]
pub struct CatalogColumn {
    pub field: Field,
    pub column_type: ColumnType,
}

/// The dynamic column set of one request, derived from the field definitions
/// returned with page 1. Built fresh per invocation; never cached across
/// requests since every project declares its own fields.
#[derive(Debug, Default)]
pub struct FieldCatalog {
    columns: Vec<CatalogColumn>,
}

impl FieldCatalog {
    pub fn from_fields(fields: &[Field]) -> Self {
        let mut columns = Vec::with_capacity(fields.len());

        for field in fields {
            if EXCLUDED_DATA_TYPES.contains(&field.data_type) {
                continue;
            }

            match column_type_for(field.data_type) {
                Some(column_type) => columns.push(CatalogColumn {
                    field: field.clone(),
                    column_type,
                }),
                None => logging::log_debug(&format!(
                    "skipping field '{}': no column mapping for data type {}",
                    field.name,
                    field.data_type.as_str()
                )),
            }
        }

        FieldCatalog { columns }
    }

    pub fn columns(&self) -> &[CatalogColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn column_type_for(data_type: FieldDataType) -> Option<ColumnType> {
    match data_type {
        FieldDataType::Date => Some(ColumnType::Timestamp),
        FieldDataType::Number => Some(ColumnType::Number),
        FieldDataType::Assignees
        | FieldDataType::Iteration
        | FieldDataType::Labels
        | FieldDataType::Milestone
        | FieldDataType::Repository
        | FieldDataType::Reviewers
        | FieldDataType::SingleSelect
        | FieldDataType::Text
        | FieldDataType::Title => Some(ColumnType::Text),
        FieldDataType::LinkedPullRequests
        | FieldDataType::TrackedBy
        | FieldDataType::Tracks
        | FieldDataType::Unknown => None,
    }
}

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::catalog::FieldCatalog;
use super::content::resolve_content;
use super::dates;
use super::filter::{filter, FilterClause};
use super::values::resolve_field_value;
use crate::models::{ColumnType, Field, ProjectItem};

/// One typed cell of an output row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Time(DateTime<Utc>),
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => write!(f, "{}", text),
            CellValue::Number(number) => write!(f, "{}", number),
            CellValue::Time(time) => write!(f, "{}", time.to_rfc3339()),
            CellValue::Bool(flag) => write!(f, "{}", flag),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(text) => serializer.serialize_str(text),
            CellValue::Number(number) => serializer.serialize_f64(*number),
            CellValue::Time(time) => serializer.serialize_str(&time.to_rfc3339()),
            CellValue::Bool(flag) => serializer.serialize_bool(*flag),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColumnType,
}

pub type Row = Vec<Option<CellValue>>;

/// The uniform tabular result of one projection: an ordered column list and
/// rows aligned to it. `truncated` is set when pagination hit its safety cap
/// rather than running out of pages.
#[derive(Debug, Serialize)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub truncated: bool,
}

// Fixed column prefix shared by every projection; dynamic catalog columns
// follow in declaration order.
fn fixed_columns() -> Vec<Column> {
    vec![
        Column {
            name: "id".to_string(),
            kind: ColumnType::Text,
        },
        Column {
            name: "archived".to_string(),
            kind: ColumnType::Bool,
        },
        Column {
            name: "type".to_string(),
            kind: ColumnType::Text,
        },
        Column {
            name: "updated_at".to_string(),
            kind: ColumnType::Timestamp,
        },
        Column {
            name: "created_at".to_string(),
            kind: ColumnType::Timestamp,
        },
        Column {
            name: "closed_at".to_string(),
            kind: ColumnType::Timestamp,
        },
    ]
}

/// Project a fetched item set into a table: derive the column set from the
/// field definitions, resolve each item into a name→value map, gate it through
/// the filter clauses, and emit one aligned row per surviving item.
pub fn project_items(fields: &[Field], items: &[ProjectItem], clauses: &[FilterClause]) -> Table {
    let catalog = FieldCatalog::from_fields(fields);

    let mut columns = fixed_columns();
    columns.extend(catalog.columns().iter().map(|column| Column {
        name: column.field.name.clone(),
        kind: column.column_type,
    }));

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let values = value_map(item);
        if !clauses.is_empty() && !filter(&values, clauses) {
            continue;
        }
        rows.push(assemble_row(item, &catalog, &values));
    }

    Table {
        columns,
        rows,
        truncated: false,
    }
}

/// Merge the fixed content attributes and every resolved custom field value
/// into one map, keyed the way filters address them.
pub fn value_map(item: &ProjectItem) -> HashMap<String, CellValue> {
    let mut values = HashMap::new();

    values.insert("type".to_string(), CellValue::Text(item.item_type.clone()));
    if let Some(created) = dates::parse_flexible(&item.created_at) {
        values.insert("created_at".to_string(), CellValue::Time(created));
    }

    let content = resolve_content(item.content.as_ref());
    if let Some(closed) = content.closed_at {
        values.insert("closed_at".to_string(), CellValue::Time(closed));
    }
    if let Some(assignees) = content.assignees {
        values.insert("Assignees".to_string(), CellValue::Text(assignees));
    }
    if let Some(milestone) = content.milestone {
        values.insert("Milestone".to_string(), CellValue::Text(milestone));
    }

    for field_value in &item.field_values.nodes {
        if let Some((name, value)) = resolve_field_value(field_value) {
            values.insert(name.to_string(), value);
        }
    }

    values
}

fn assemble_row(item: &ProjectItem, catalog: &FieldCatalog, values: &HashMap<String, CellValue>) -> Row {
    let mut row = Vec::with_capacity(6 + catalog.len());

    row.push(Some(CellValue::Text(item.id.clone())));
    row.push(Some(CellValue::Bool(item.is_archived)));
    row.push(values.get("type").cloned());
    row.push(dates::parse_flexible(&item.updated_at).map(CellValue::Time));
    row.push(values.get("created_at").cloned());
    row.push(values.get("closed_at").cloned());

    for column in catalog.columns() {
        row.push(values.get(&column.field.name).cloned());
    }

    row
}

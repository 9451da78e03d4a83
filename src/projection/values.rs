use super::dates;
use super::rows::CellValue;
use crate::models::FieldValue;

/// Extract the display value of one custom field entry. The enum tag already
/// names the active payload, so this is a straight dispatch; empty payloads
/// and unrecognized variants resolve to `None`.
pub fn resolve_field_value(value: &FieldValue) -> Option<(&str, CellValue)> {
    match value {
        FieldValue::Date { field, date } => {
            let parsed = date.as_deref().and_then(dates::parse_flexible)?;
            Some((field.name.as_str(), CellValue::Time(parsed)))
        }

        FieldValue::Text { field, text } => text
            .as_ref()
            .map(|t| (field.name.as_str(), CellValue::Text(t.clone()))),

        FieldValue::SingleSelect { field, name } => name
            .as_ref()
            .map(|n| (field.name.as_str(), CellValue::Text(n.clone()))),

        FieldValue::Iteration { field, title } => title
            .as_ref()
            .map(|t| (field.name.as_str(), CellValue::Text(t.clone()))),

        FieldValue::Labels { field, labels } => {
            if labels.nodes.is_empty() {
                return None;
            }
            let joined = labels
                .nodes
                .iter()
                .map(|l| l.name.as_str())
                .collect::<Vec<_>>()
                .join(",");
            Some((field.name.as_str(), CellValue::Text(joined)))
        }

        FieldValue::Number { field, number } => {
            number.map(|n| (field.name.as_str(), CellValue::Number(n)))
        }

        FieldValue::Reviewers { field, reviewers } => {
            let names: Vec<&str> = reviewers
                .nodes
                .iter()
                .filter_map(|r| r.display_name())
                .collect();
            if names.is_empty() {
                return None;
            }
            Some((field.name.as_str(), CellValue::Text(names.join(","))))
        }

        FieldValue::Repository { field, repository } => repository
            .as_ref()
            .map(|r| (field.name.as_str(), CellValue::Text(r.name.clone()))),

        FieldValue::Unknown => None,
    }
}

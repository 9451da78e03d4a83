use std::collections::HashMap;

use serde::Deserialize;

use super::dates;
use super::rows::CellValue;
use crate::error::{GitHubError, GitHubResult};
use crate::github_error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum FilterOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "~")]
    Contains,
}

/// One comparison against a row's value map. A request carries zero or more
/// clauses; only the first clause's conjunction is consulted.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterClause {
    pub key: String,
    pub value: String,
    pub op: FilterOp,
    #[serde(default)]
    pub conjunction: String,
}

impl FilterClause {
    /// Parse a CLI-style clause like "status=Done" or "due<=2024-06-01".
    pub fn parse(input: &str) -> GitHubResult<FilterClause> {
        const OPERATORS: &[(&str, FilterOp)] = &[
            (">=", FilterOp::Ge),
            ("<=", FilterOp::Le),
            ("!=", FilterOp::Ne),
            ("=", FilterOp::Eq),
            (">", FilterOp::Gt),
            ("<", FilterOp::Lt),
            ("~", FilterOp::Contains),
        ];

        for (token, op) in OPERATORS {
            if let Some(pos) = input.find(token) {
                let key = input[..pos].trim();
                let value = input[pos + token.len()..].trim();
                if key.is_empty() {
                    return Err(github_error!(InvalidInput, "filter '{}' has no key", input));
                }
                return Ok(FilterClause {
                    key: key.to_string(),
                    value: value.to_string(),
                    op: *op,
                    conjunction: String::new(),
                });
            }
        }

        Err(github_error!(
            InvalidInput,
            "filter '{}' has no operator (expected one of =, !=, >, <, >=, <=, ~)",
            input
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conjunction {
    And,
    Or,
}

// "" and "and" mean AND; every other spelling means OR. Existing contract,
// kept as-is.
fn conjunction_of(clauses: &[FilterClause]) -> Conjunction {
    match clauses[0].conjunction.trim() {
        "" | "and" => Conjunction::And,
        _ => Conjunction::Or,
    }
}

/// Decide whether a row's value map survives the clause list. An empty list
/// keeps everything.
pub fn filter(values: &HashMap<String, CellValue>, clauses: &[FilterClause]) -> bool {
    match clauses.len() {
        0 => true,
        1 => matches_clause(values, &clauses[0]),
        _ => match conjunction_of(clauses) {
            Conjunction::And => clauses.iter().all(|c| matches_clause(values, c)),
            Conjunction::Or => clauses.iter().any(|c| matches_clause(values, c)),
        },
    }
}

fn matches_clause(values: &HashMap<String, CellValue>, clause: &FilterClause) -> bool {
    match_value(&clause.value, values.get(&clause.key), clause.op)
}

/// Compare one resolved value against a clause pattern. A missing value only
/// ever satisfies `!=`; an unparsable date pattern satisfies nothing.
pub fn match_value(pattern: &str, value: Option<&CellValue>, op: FilterOp) -> bool {
    let Some(value) = value else {
        return op == FilterOp::Ne;
    };

    match value {
        CellValue::Text(text) => match_text(pattern, text, op),
        CellValue::Number(number) => match_number(pattern, *number, op),
        CellValue::Time(time) => match_time(pattern, *time, op),
        CellValue::Bool(flag) => match_text(pattern, if *flag { "true" } else { "false" }, op),
    }
}

fn match_text(pattern: &str, value: &str, op: FilterOp) -> bool {
    match op {
        FilterOp::Eq => value == pattern,
        FilterOp::Ne => value != pattern,
        FilterOp::Gt => value > pattern,
        FilterOp::Lt => value < pattern,
        FilterOp::Ge => value >= pattern,
        FilterOp::Le => value <= pattern,
        FilterOp::Contains => value.contains(pattern),
    }
}

fn match_number(pattern: &str, value: f64, op: FilterOp) -> bool {
    if op == FilterOp::Contains {
        return value.to_string().contains(pattern.trim());
    }

    let Ok(pattern) = pattern.trim().parse::<f64>() else {
        return false;
    };

    match op {
        FilterOp::Eq => value == pattern,
        FilterOp::Ne => value != pattern,
        FilterOp::Gt => value > pattern,
        FilterOp::Lt => value < pattern,
        FilterOp::Ge => value >= pattern,
        FilterOp::Le => value <= pattern,
        FilterOp::Contains => unreachable!(),
    }
}

fn match_time(pattern: &str, value: chrono::DateTime<chrono::Utc>, op: FilterOp) -> bool {
    let Some(pattern) = dates::parse_pattern(pattern) else {
        return false;
    };

    match op {
        FilterOp::Eq => value == pattern,
        FilterOp::Ne => value != pattern,
        FilterOp::Gt => value > pattern,
        FilterOp::Lt => value < pattern,
        FilterOp::Ge => value >= pattern,
        FilterOp::Le => value <= pattern,
        FilterOp::Contains => false,
    }
}

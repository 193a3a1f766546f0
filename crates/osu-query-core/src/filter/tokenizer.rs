//! Splits filter strings into clauses

use serde::Serialize;

use crate::error::{Error, Result};

use super::operator::{Grammar, Operator};

/// One `field<op>value` unit of a filter string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterClause {
    pub field: String,
    pub op: Operator,
    pub value: String,
}

/// Split a filter string into clauses.
///
/// The string is lower-cased and split on whitespace. Each token is cut at its
/// first run of operator characters. Any token that doesn't yield a field, a
/// known operator and a value fails the whole string.
pub fn tokenize(filters: &str, grammar: Grammar) -> Result<Vec<FilterClause>> {
    filters
        .to_lowercase()
        .split_whitespace()
        .map(|token| parse_clause(token, grammar))
        .collect()
}

fn parse_clause(token: &str, grammar: Grammar) -> Result<FilterClause> {
    let operator_run = grammar.operator_run();

    let found = operator_run
        .find(token)
        .ok_or_else(|| Error::malformed(token, "no comparison operator"))?;

    let field = &token[..found.start()];
    let value = &token[found.end()..];

    if field.is_empty() {
        return Err(Error::malformed(token, "missing field name"));
    }
    if value.is_empty() {
        return Err(Error::malformed(token, "missing value"));
    }
    if operator_run.is_match(value) {
        return Err(Error::malformed(token, "more than one operator"));
    }

    let op = Operator::from_token(found.as_str())
        .filter(|op| grammar.allows(*op))
        .ok_or_else(|| {
            Error::malformed(token, format!("unrecognized operator '{}'", found.as_str()))
        })?;

    tracing::trace!(field, op = %op, value, "parsed filter clause");

    Ok(FilterClause {
        field: field.to_string(),
        op,
        value: value.to_string(),
    })
}

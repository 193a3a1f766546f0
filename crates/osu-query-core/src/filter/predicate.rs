//! Resolved predicates handed to the query executor

use std::fmt;

use serde::Serialize;

use super::fields::FieldHandle;
use super::operator::Operator;

/// Comparison value of a predicate. Values are passed through as text; typing
/// them is up to the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PredicateValue {
    Single(String),
    List(Vec<String>),
}

impl PredicateValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            PredicateValue::Single(value) => Some(value),
            PredicateValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PredicateValue::Single(_) => None,
            PredicateValue::List(values) => Some(values),
        }
    }
}

impl fmt::Display for PredicateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredicateValue::Single(value) => f.write_str(value),
            PredicateValue::List(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

/// A single filter condition. A list of predicates is a conjunction, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predicate {
    pub field: FieldHandle,
    pub op: Operator,
    pub value: PredicateValue,
}

impl Predicate {
    /// Direct comparison against a single value
    pub fn compare(field: FieldHandle, op: Operator, value: impl Into<String>) -> Self {
        Self {
            field,
            op,
            value: PredicateValue::Single(value.into()),
        }
    }

    /// Membership in a list of values
    pub fn one_of(field: FieldHandle, values: Vec<String>) -> Self {
        Self {
            field,
            op: Operator::ContainsList,
            value: PredicateValue::List(values),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.value)
    }
}

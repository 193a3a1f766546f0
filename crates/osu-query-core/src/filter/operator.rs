//! Comparison operators and the per-entity operator alphabets

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Comparison applied by a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    /// Value is one of a list
    ContainsList,
}

impl Operator {
    /// Resolve an operator token (`=`, `!=`, `>`, `<`, `>=`, `<=`, `/`)
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            ">" => Some(Operator::Gt),
            "<" => Some(Operator::Lt),
            ">=" => Some(Operator::Ge),
            "<=" => Some(Operator::Le),
            "/" => Some(Operator::ContainsList),
            _ => None,
        }
    }

    /// The token this operator is written as
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::ContainsList => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

static LIST_OPERATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[<>=!/]+").expect("valid operator pattern"));

static COMPARISON_OPERATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[<>=!]+").expect("valid operator pattern"));

/// Which filter grammar a string is parsed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Score,
    Beatmap,
    BeatmapSet,
}

impl Grammar {
    /// Pattern matching a run of operator characters
    pub(crate) fn operator_run(&self) -> &'static Regex {
        match self {
            Grammar::Score | Grammar::BeatmapSet => &*LIST_OPERATOR_RUN,
            Grammar::Beatmap => &*COMPARISON_OPERATOR_RUN,
        }
    }

    /// Whether the grammar accepts an operator
    pub fn allows(&self, op: Operator) -> bool {
        match self {
            Grammar::Score | Grammar::BeatmapSet => true,
            Grammar::Beatmap => op != Operator::ContainsList,
        }
    }
}

//! Mod filters
//!
//! Two grammars, chosen by the first character:
//!
//! - `!HDDT` matches scores whose mods are exactly HD and DT.
//! - `+HD-NF` matches scores with HD and without NF. Runs can repeat and each
//!   run may hold several acronyms (`+HDHR-EZNF`).
//!
//! Acronyms are two characters and are checked against the mode's mod table.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::mode::{resolve_mode, GameMode, ModeId};
use crate::mods::{is_valid, sort_mods};

static MOD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]\w+").expect("valid mod run pattern"));

static MOD_RUNS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[+-]\w+)+$").expect("valid mod run pattern"));

/// A single include/exclude condition on a score's mod string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "acronym", rename_all = "snake_case")]
pub enum ModConstraint {
    Include(String),
    Exclude(String),
}

impl ModConstraint {
    pub fn acronym(&self) -> &str {
        match self {
            ModConstraint::Include(acronym) | ModConstraint::Exclude(acronym) => acronym,
        }
    }

    /// Case-insensitive substring test against a stored mod string
    pub fn matches(&self, enabled_mods: &str) -> bool {
        let present = enabled_mods.to_uppercase().contains(self.acronym());
        match self {
            ModConstraint::Include(_) => present,
            ModConstraint::Exclude(_) => !present,
        }
    }
}

/// Parsed mod filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "mods", rename_all = "snake_case")]
pub enum ModFilterExpr {
    /// Mods must equal this canonically ordered set
    Exact(Vec<String>),
    /// Every constraint must hold
    Constraints(Vec<ModConstraint>),
}

impl Default for ModFilterExpr {
    fn default() -> Self {
        ModFilterExpr::Constraints(Vec::new())
    }
}

impl ModFilterExpr {
    /// Whether the filter constrains nothing
    pub fn is_empty(&self) -> bool {
        matches!(self, ModFilterExpr::Constraints(c) if c.is_empty())
    }

    /// The mod string an exact filter compares against (`"DT HD"`)
    pub fn exact_string(&self) -> Option<String> {
        match self {
            ModFilterExpr::Exact(mods) => Some(mods.join(" ")),
            ModFilterExpr::Constraints(_) => None,
        }
    }

    /// Evaluate the filter against a stored, canonically ordered mod string
    pub fn matches(&self, enabled_mods: &str) -> bool {
        match self {
            ModFilterExpr::Exact(mods) => enabled_mods == mods.join(" "),
            ModFilterExpr::Constraints(constraints) => {
                constraints.iter().all(|c| c.matches(enabled_mods))
            }
        }
    }
}

/// Parse a mod filter string for a mode.
///
/// ```
/// use osu_query_core::filter::{parse_mod_filters, ModConstraint, ModFilterExpr};
///
/// let expr = parse_mod_filters("osu", Some("+HD-NF")).unwrap();
/// assert_eq!(
///     expr,
///     ModFilterExpr::Constraints(vec![
///         ModConstraint::Include("HD".into()),
///         ModConstraint::Exclude("NF".into()),
///     ])
/// );
/// ```
pub fn parse_mod_filters<'a>(
    mode: impl Into<ModeId<'a>>,
    modstring: Option<&str>,
) -> Result<ModFilterExpr> {
    let mode = resolve_mode(mode)?;

    let Some(modstring) = modstring else {
        return Ok(ModFilterExpr::default());
    };

    let normalized: String = modstring
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let expr = if normalized.is_empty() {
        ModFilterExpr::default()
    } else if let Some(exact) = normalized.strip_prefix('!') {
        parse_exact(mode, &normalized, exact)?
    } else {
        parse_constraints(mode, &normalized)?
    };

    tracing::debug!(%mode, ?expr, "built mod filter");
    Ok(expr)
}

fn parse_exact(mode: GameMode, token: &str, mods: &str) -> Result<ModFilterExpr> {
    if mods.contains(['+', '-', '!']) {
        return Err(Error::malformed(token, "exact mod filters cannot be combined with +/- runs"));
    }

    let acronyms = split_acronyms(token, mods)?;
    Ok(ModFilterExpr::Exact(sort_mods(mode, &acronyms)?))
}

fn parse_constraints(mode: GameMode, token: &str) -> Result<ModFilterExpr> {
    if !MOD_RUNS_ONLY.is_match(token) {
        return Err(Error::malformed(token, "expected runs of +MODS or -MODS"));
    }

    let mut constraints = Vec::new();
    for run in MOD_RUN.find_iter(token) {
        let (sign, mods) = run.as_str().split_at(1);

        for acronym in split_acronyms(token, mods)? {
            if !is_valid(mode, &acronym) {
                return Err(Error::UnknownAcronym {
                    mode: mode.to_string(),
                    acronym,
                });
            }

            constraints.push(if sign == "+" {
                ModConstraint::Include(acronym)
            } else {
                ModConstraint::Exclude(acronym)
            });
        }
    }

    Ok(ModFilterExpr::Constraints(constraints))
}

/// Cut a run of mods into two-character acronyms
fn split_acronyms(token: &str, mods: &str) -> Result<Vec<String>> {
    let chars: Vec<char> = mods.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(Error::malformed(
            token,
            format!("'{}' is not a sequence of two-letter acronyms", mods),
        ));
    }

    Ok(chars.chunks(2).map(|pair| pair.iter().collect()).collect())
}

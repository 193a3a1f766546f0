//! Score filters

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::mode::{resolve_mode, GameMode, ModeId};

use super::fields::{Field, FieldHandle, ScoreField};
use super::operator::{Grammar, Operator};
use super::predicate::Predicate;
use super::tokenizer::{tokenize, FilterClause};

/// Rank letters, longest first so `XH` wins over `X`
static RANK_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"XH|SH|X|S|A|B|C|D").expect("valid rank pattern"));

/// Build predicates over a mode's scores.
///
/// Fields: `user_id`, `date`, `accuracy`, `pp`, `rank`, `perfect`, `max_combo`,
/// `replay`, `stable_score`, `lazer_score`, `classic_score`, `count_50`,
/// `count_100`, `count_300`, `count_miss`.
///
/// `rank/<letters>` matches any of the listed ranks, e.g. `rank/XHSHX`.
///
/// ```
/// use osu_query_core::filter::{parse_score_filters, Operator};
///
/// let predicates = parse_score_filters("osu", Some("date<2010-12-12 pp>100 replay=1")).unwrap();
/// assert_eq!(predicates.len(), 3);
/// assert_eq!(predicates[1].op, Operator::Gt);
/// ```
pub fn parse_score_filters<'a>(
    mode: impl Into<ModeId<'a>>,
    filters: Option<&str>,
) -> Result<Vec<Predicate>> {
    let mode = resolve_mode(mode)?;

    let Some(filters) = filters else {
        return Ok(Vec::new());
    };

    let predicates = tokenize(filters, Grammar::Score)?
        .into_iter()
        .map(|clause| score_predicate(mode, clause))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(%mode, count = predicates.len(), "built score predicates");
    Ok(predicates)
}

fn score_predicate(mode: GameMode, clause: FilterClause) -> Result<Predicate> {
    let field = ScoreField::from_name(&clause.field)?;
    let handle = FieldHandle::Score { mode, field };

    if clause.op != Operator::ContainsList {
        return Ok(Predicate::compare(handle, clause.op, clause.value));
    }

    if field != ScoreField::Rank {
        return Err(Error::malformed(
            format!("{}/{}", clause.field, clause.value),
            "list filters only apply to rank",
        ));
    }

    let ranks = rank_letters(&clause.value);
    if ranks.is_empty() {
        return Err(Error::malformed(
            format!("{}/{}", clause.field, clause.value),
            "no rank letters (XH, SH, X, S, A, B, C, D)",
        ));
    }

    Ok(Predicate::one_of(handle, ranks))
}

/// Pull rank letters out of a value like `ASXBCD` or `a,s,x`, keeping first
/// occurrences in order
fn rank_letters(value: &str) -> Vec<String> {
    let upper = value.to_uppercase();
    let mut ranks: Vec<String> = Vec::new();
    for found in RANK_LETTER.find_iter(&upper) {
        if !ranks.iter().any(|rank| rank == found.as_str()) {
            ranks.push(found.as_str().to_string());
        }
    }
    ranks
}

/// Restrict a mode's scores to a set of users. An empty id list adds no
/// predicate.
pub fn parse_user_filters<'a>(
    mode: impl Into<ModeId<'a>>,
    user_ids: &[i64],
) -> Result<Vec<Predicate>> {
    let mode = resolve_mode(mode)?;

    if user_ids.is_empty() {
        return Ok(Vec::new());
    }

    let handle = FieldHandle::Score {
        mode,
        field: ScoreField::UserId,
    };
    let ids = user_ids.iter().map(|id| id.to_string()).collect();

    Ok(vec![Predicate::one_of(handle, ids)])
}

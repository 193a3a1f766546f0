//! Beatmap (difficulty) filters

use crate::error::Result;

use super::fields::{BeatmapField, Field, FieldHandle};
use super::operator::Grammar;
use super::predicate::Predicate;
use super::tokenizer::tokenize;

/// Build predicates over beatmaps, e.g. `count_total<1900 ar<=8 stars>5`.
///
/// Only comparison operators are accepted; there is no list form for beatmaps.
pub fn parse_beatmap_filters(filters: Option<&str>) -> Result<Vec<Predicate>> {
    let Some(filters) = filters else {
        return Ok(Vec::new());
    };

    let predicates = tokenize(filters, Grammar::Beatmap)?
        .into_iter()
        .map(|clause| {
            let field = BeatmapField::from_name(&clause.field)?;
            Ok(Predicate::compare(FieldHandle::Beatmap(field), clause.op, clause.value))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = predicates.len(), "built beatmap predicates");
    Ok(predicates)
}

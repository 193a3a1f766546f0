//! Beatmap set filters

use crate::error::{Error, Result};

use super::fields::{BeatmapSetField, Field, FieldHandle};
use super::operator::{Grammar, Operator};
use super::predicate::Predicate;
use super::tokenizer::{tokenize, FilterClause};

/// Build predicates over beatmap sets, e.g. `tags/miku,hatsune language_id=2`.
///
/// The list form splits its value on commas and yields one membership predicate
/// holding every entry, not one `contains` predicate per entry.
pub fn parse_beatmapset_filters(filters: Option<&str>) -> Result<Vec<Predicate>> {
    let Some(filters) = filters else {
        return Ok(Vec::new());
    };

    let predicates = tokenize(filters, Grammar::BeatmapSet)?
        .into_iter()
        .map(beatmapset_predicate)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = predicates.len(), "built beatmapset predicates");
    Ok(predicates)
}

fn beatmapset_predicate(clause: FilterClause) -> Result<Predicate> {
    let handle = FieldHandle::BeatmapSet(BeatmapSetField::from_name(&clause.field)?);

    if clause.op != Operator::ContainsList {
        return Ok(Predicate::compare(handle, clause.op, clause.value));
    }

    let values: Vec<String> = clause
        .value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect();

    if values.is_empty() {
        return Err(Error::malformed(
            format!("{}/{}", clause.field, clause.value),
            "empty value list",
        ));
    }

    Ok(Predicate::one_of(handle, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_and_language() {
        let predicates =
            parse_beatmapset_filters(Some("tags/Miku,hatsune,goth language_id=2")).unwrap();
        assert_eq!(predicates.len(), 2);

        assert_eq!(
            predicates[0].field,
            FieldHandle::BeatmapSet(BeatmapSetField::Tags)
        );
        assert_eq!(predicates[0].op, Operator::ContainsList);
        assert_eq!(
            predicates[0].value.as_list().unwrap(),
            ["miku", "hatsune", "goth"]
        );

        assert_eq!(predicates[1].field.column(), "language_id");
        assert_eq!(predicates[1].op, Operator::Eq);
        assert_eq!(predicates[1].value.as_single(), Some("2"));
    }

    #[test]
    fn test_empty_list_entries_dropped() {
        let predicates = parse_beatmapset_filters(Some("tags/a,,b,")).unwrap();
        assert_eq!(predicates[0].value.as_list().unwrap(), ["a", "b"]);

        let result = parse_beatmapset_filters(Some("tags/,,"));
        assert!(matches!(result, Err(Error::MalformedFilter { .. })));
    }

    #[test]
    fn test_date_comparison() {
        let predicates = parse_beatmapset_filters(Some("approved_date>=2020-01-01")).unwrap();
        assert_eq!(predicates[0].field.table(), "beatmapsets");
        assert_eq!(predicates[0].op, Operator::Ge);
        assert_eq!(predicates[0].value.as_single(), Some("2020-01-01"));
    }

    #[test]
    fn test_absent_filters() {
        assert!(parse_beatmapset_filters(None).unwrap().is_empty());
        assert!(parse_beatmapset_filters(Some("   ")).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_field() {
        let result = parse_beatmapset_filters(Some("stars>5"));
        assert!(matches!(result, Err(Error::UnknownField { .. })));
    }
}

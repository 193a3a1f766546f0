//! End-to-end checks of the public parsing API.
//!
//! These mirror how a query layer uses the crate: resolve a mode, normalize
//! stored mod lists, then turn user input into predicates.

use osu_query_core::filter::{BeatmapSetField, ScoreField};
use osu_query_core::{
    order_for, parse_beatmap_filters, parse_beatmapset_filters, parse_mod_filters,
    parse_mod_list, parse_score_filters, sort_mods, Error, FieldHandle, GameMode, ModConstraint,
    ModFilterExpr, ModRecord, Operator, Predicate, PredicateValue,
};
use serde_json::json;

#[test]
fn sort_is_idempotent_for_every_mode() {
    for mode in GameMode::ALL {
        let scrambled: Vec<&str> = order_for(mode)
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 3 != 1)
            .map(|(_, acronym)| *acronym)
            .rev()
            .collect();

        let sorted = sort_mods(mode, &scrambled).unwrap();
        assert_eq!(sort_mods(mode, &sorted).unwrap(), sorted, "mode {}", mode);
    }
}

#[test]
fn mod_list_without_settings() {
    let parsed = parse_mod_list(&[ModRecord::new("HD"), ModRecord::new("DT")]);
    assert_eq!(parsed.mods, "HD DT");
    assert_eq!(parsed.settings, None);
}

#[test]
fn mod_list_with_settings() {
    let mods: Vec<ModRecord> = serde_json::from_value(json!([
        { "acronym": "HD" },
        { "acronym": "DT", "settings": { "rate": 1.5 } }
    ]))
    .unwrap();

    let parsed = parse_mod_list(&mods);
    assert_eq!(parsed.mods, "HD DT");

    let settings = parsed.settings.expect("DT carries settings");
    assert_eq!(settings.len(), 1);
    assert_eq!(settings[0].0, "DT");
    assert_eq!(
        serde_json::Value::Object(settings[0].1.clone()),
        json!({ "rate": 1.5 })
    );
}

#[test]
fn stored_mod_string_matches_exact_filter() {
    let stored = parse_mod_list(&[ModRecord::new("HD"), ModRecord::new("DT")])
        .canonicalize(GameMode::Osu)
        .unwrap();

    let filter = parse_mod_filters("osu", Some("!HDDT")).unwrap();
    assert!(filter.matches(&stored.mods));
}

#[test]
fn rank_membership() {
    let predicates = parse_score_filters("osu", Some("rank/ASXBCD")).unwrap();
    assert_eq!(predicates.len(), 1);
    assert_eq!(predicates[0].op, Operator::ContainsList);
    assert_eq!(
        predicates[0].field,
        FieldHandle::Score {
            mode: GameMode::Osu,
            field: ScoreField::Rank
        }
    );

    let mut ranks = predicates[0].value.as_list().unwrap().to_vec();
    ranks.sort();
    assert_eq!(ranks, ["A", "B", "C", "D", "S", "X"]);
}

#[test]
fn score_clauses_keep_order() {
    let predicates = parse_score_filters("osu", Some("date<2010-12-12 pp>100 replay=1")).unwrap();
    let score = |field| FieldHandle::Score {
        mode: GameMode::Osu,
        field,
    };

    assert_eq!(
        predicates,
        vec![
            Predicate::compare(score(ScoreField::Date), Operator::Lt, "2010-12-12"),
            Predicate::compare(score(ScoreField::Pp), Operator::Gt, "100"),
            Predicate::compare(score(ScoreField::Replay), Operator::Eq, "1"),
        ]
    );
}

#[test]
fn exact_mod_filter_is_canonical() {
    let a = parse_mod_filters("osu", Some("!HDDT")).unwrap();
    let b = parse_mod_filters("osu", Some("!DTHD")).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, ModFilterExpr::Exact(vec!["DT".into(), "HD".into()]));
    assert_eq!(a.exact_string().as_deref(), Some("DT HD"));
}

#[test]
fn include_exclude_mod_filter() {
    let expr = parse_mod_filters("osu", Some("+HD-NF")).unwrap();
    assert_eq!(
        expr,
        ModFilterExpr::Constraints(vec![
            ModConstraint::Include("HD".into()),
            ModConstraint::Exclude("NF".into()),
        ])
    );
}

#[test]
fn errors_are_distinguishable() {
    let unknown_field = parse_score_filters("osu", Some("foo=1")).unwrap_err();
    assert!(matches!(unknown_field, Error::UnknownField { .. }));

    let unknown_mode = parse_score_filters("invalid", Some("pp>1")).unwrap_err();
    assert!(matches!(unknown_mode, Error::UnknownMode(_)));

    let malformed = parse_beatmap_filters(Some("stars")).unwrap_err();
    assert!(matches!(malformed, Error::MalformedFilter { .. }));

    let unknown_acronym = parse_mod_filters("taiko", Some("!FI")).unwrap_err();
    assert!(matches!(unknown_acronym, Error::UnknownAcronym { .. }));

    let kinds = [
        unknown_field.kind(),
        unknown_mode.kind(),
        malformed.kind(),
        unknown_acronym.kind(),
    ];
    for (i, a) in kinds.iter().enumerate() {
        for b in &kinds[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn beatmapset_predicates_serialize_for_executor() {
    let predicates = parse_beatmapset_filters(Some("tags/miku,hatsune nsfw=0")).unwrap();
    assert_eq!(
        predicates[0].field,
        FieldHandle::BeatmapSet(BeatmapSetField::Tags)
    );
    assert_eq!(
        predicates[0].value,
        PredicateValue::List(vec!["miku".into(), "hatsune".into()])
    );

    let json = serde_json::to_value(&predicates).unwrap();
    assert_eq!(
        json,
        json!([
            {
                "field": { "table": "beatmapsets", "column": "tags" },
                "op": "contains_list",
                "value": ["miku", "hatsune"]
            },
            {
                "field": { "table": "beatmapsets", "column": "nsfw" },
                "op": "eq",
                "value": "0"
            }
        ])
    );
}

//! Filter string parsing
//!
//! Filter strings are whitespace-separated `field<op>value` clauses, for
//! example `date<2010-12-12 pp>100 replay=1`. Each entity (scores, beatmaps,
//! beatmap sets) has its own field vocabulary; the parsers here resolve
//! clauses against it and return predicates in clause order. Clauses are
//! always ANDed.
//!
//! Mod filters (`!HDDT`, `+HD-NF`) have their own grammar, see
//! [`parse_mod_filters`].

mod beatmap;
mod beatmapset;
mod fields;
mod mod_filter;
mod operator;
mod predicate;
mod score;
mod tokenizer;

pub use beatmap::parse_beatmap_filters;
pub use beatmapset::parse_beatmapset_filters;
pub use fields::{BeatmapField, BeatmapSetField, Entity, Field, FieldHandle, ScoreField};
pub use mod_filter::{parse_mod_filters, ModConstraint, ModFilterExpr};
pub use operator::{Grammar, Operator};
pub use predicate::{Predicate, PredicateValue};
pub use score::{parse_score_filters, parse_user_filters};
pub use tokenizer::{tokenize, FilterClause};

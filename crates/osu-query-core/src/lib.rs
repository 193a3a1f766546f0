//! # osu-query-core
//!
//! Filter language and mod canonicalization for querying osu! scores and
//! beatmaps.
//!
//! This crate turns compact query strings into structured predicates that a
//! storage layer can apply:
//! - Score, beatmap and beatmap set filters (`date<2010-12-12 pp>100 replay=1`)
//! - Mod filters, exact (`!HDDT`) or include/exclude (`+HD-NF`)
//! - Canonical per-mode mod ordering
//! - Normalizing API mod lists into a stored mod string plus settings
//!
//! Nothing here executes queries. Every function is pure and returns either a
//! complete result or an error naming the offending input.
//!
//! ## Modules
//!
//! - [`config`] - User configuration
//! - [`error`] - Error types and Result alias
//! - [`filter`] - Filter string parsing and predicates
//! - [`mode`] - Game modes and mode resolution
//! - [`mods`] - Mod ordering and mod list normalization
//!
//! ## Example
//!
//! ```
//! use osu_query_core::filter::{parse_mod_filters, parse_score_filters};
//!
//! let predicates = parse_score_filters("osu", Some("pp>100 rank/XHSH")).unwrap();
//! for predicate in &predicates {
//!     println!("{}", predicate);
//! }
//!
//! let mods = parse_mod_filters("osu", Some("!HDDT")).unwrap();
//! assert_eq!(mods.exact_string().as_deref(), Some("DT HD"));
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod mode;
pub mod mods;

// Error types
pub use error::{Error, Result};

// Configuration
pub use config::Config;

// Modes
pub use mode::{resolve_mode, GameMode, ModeId};

// Mods
pub use mods::{order_for, parse_mod_list, sort_mods, ModRecord, ModSettings, ParsedModList};

// Filtering
pub use filter::{
    parse_beatmap_filters, parse_beatmapset_filters, parse_mod_filters, parse_score_filters,
    parse_user_filters, FieldHandle, ModConstraint, ModFilterExpr, Operator, Predicate,
    PredicateValue,
};

//! Mod ordering and mod list normalization
//!
//! Every ruleset defines its own set of mods and a fixed display order. Mod
//! strings are stored in that order so that two scores with the same mods
//! always compare equal.

mod list;
mod order;

pub use list::{parse_mod_list, ModRecord, ModSettings, ParsedModList};
pub use order::{is_valid, order_for, position, sort_mods};

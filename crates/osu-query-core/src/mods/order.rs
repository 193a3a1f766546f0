//! Canonical per-mode mod ordering

use crate::error::{Error, Result};
use crate::mode::GameMode;

const OSU_ORDER: &[&str] = &[
    "EZ", "NF", "HT", "DC", "HR", "SD", "PF", "DT", "NC", "HD", "FL", "BL", "ST", "AC", "TP", "DA",
    "CL", "RD", "MR", "AL", "SG", "AT", "CN", "RX", "AP", "SO", "TR", "WG", "SI", "GR", "DF", "WU",
    "WD", "TC", "BR", "AD", "MU", "NS", "MG", "RP", "AS", "FR", "BU", "SY", "DP", "BM", "TD", "SV2",
];

const TAIKO_ORDER: &[&str] = &[
    "EZ", "NF", "HT", "DC", "HR", "SD", "PF", "DT", "NC", "HD", "FL", "AC", "RD", "DA", "CL", "SW",
    "SG", "CS", "AT", "CN", "RX", "WU", "WD", "MU", "AS", "SV2",
];

const FRUITS_ORDER: &[&str] = &[
    "EZ", "NF", "HT", "DC", "HR", "SD", "PF", "DT", "NC", "HD", "FL", "AC", "DA", "CL", "MR", "AT",
    "CN", "RX", "WU", "WD", "FF", "MU", "NS", "SV2",
];

const MANIA_ORDER: &[&str] = &[
    "EZ", "NF", "HT", "DC", "NR", "HR", "SD", "PF", "DT", "NC", "FI", "HD", "CO", "FL", "AC", "RD",
    "DS", "MR", "DA", "CL", "IN", "CS", "HO", "1K", "2K", "3K", "4K", "5K", "6K", "7K", "8K", "9K",
    "10K", "AT", "CN", "WU", "WD", "MU", "AS", "SV2",
];

/// The canonical acronym order for a mode
pub fn order_for(mode: GameMode) -> &'static [&'static str] {
    match mode {
        GameMode::Osu => OSU_ORDER,
        GameMode::Taiko => TAIKO_ORDER,
        GameMode::Fruits => FRUITS_ORDER,
        GameMode::Mania => MANIA_ORDER,
    }
}

/// Index of an acronym in the mode's canonical order
pub fn position(mode: GameMode, acronym: &str) -> Result<usize> {
    order_for(mode)
        .iter()
        .position(|known| *known == acronym)
        .ok_or_else(|| Error::UnknownAcronym {
            mode: mode.to_string(),
            acronym: acronym.to_string(),
        })
}

/// Check whether an acronym exists for the given mode
pub fn is_valid(mode: GameMode, acronym: &str) -> bool {
    order_for(mode).contains(&acronym)
}

/// Sort acronyms into the mode's canonical order.
///
/// The sort is stable, so duplicates keep their relative order. Any acronym the
/// mode doesn't know fails the whole sort.
///
/// ```
/// use osu_query_core::{sort_mods, GameMode};
///
/// let sorted = sort_mods(GameMode::Osu, &["HD", "DT", "HR"]).unwrap();
/// assert_eq!(sorted, vec!["HR", "DT", "HD"]);
/// ```
pub fn sort_mods<S: AsRef<str>>(mode: GameMode, acronyms: &[S]) -> Result<Vec<String>> {
    let mut keyed = acronyms
        .iter()
        .map(|acronym| {
            let acronym = acronym.as_ref();
            position(mode, acronym).map(|index| (index, acronym.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by_key(|(index, _)| *index);

    Ok(keyed.into_iter().map(|(_, acronym)| acronym).collect())
}

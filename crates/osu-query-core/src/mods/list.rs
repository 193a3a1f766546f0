//! Mod lists as delivered by the osu! API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::mode::GameMode;

use super::order::sort_mods;

/// Settings payload of a single mod instance (e.g. `{"speed_change": 1.5}`)
pub type ModSettings = Map<String, Value>;

/// A mod as it appears on a score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModRecord {
    pub acronym: String,
    /// Only present when the mod was configured away from its defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<ModSettings>,
}

impl ModRecord {
    /// Create a mod without settings
    pub fn new(acronym: impl Into<String>) -> Self {
        Self {
            acronym: acronym.into(),
            settings: None,
        }
    }

    /// Attach a settings payload
    pub fn with_settings(mut self, settings: ModSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// Normalized form of a score's mod list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedModList {
    /// Acronyms joined by single spaces, in the order they were given
    pub mods: String,
    /// `(acronym, settings)` for every mod that carries settings
    pub settings: Option<Vec<(String, ModSettings)>>,
}

impl ParsedModList {
    /// Acronyms in stored order
    pub fn acronyms(&self) -> impl Iterator<Item = &str> {
        self.mods.split_whitespace()
    }

    /// Check if the list contains no mods (nomod)
    pub fn is_nomod(&self) -> bool {
        self.mods.is_empty()
    }

    /// Reorder the acronym string into the mode's canonical order
    pub fn canonicalize(mut self, mode: GameMode) -> Result<Self> {
        let acronyms: Vec<&str> = self.acronyms().collect();
        self.mods = sort_mods(mode, &acronyms)?.join(" ");
        Ok(self)
    }
}

/// Flatten a mod list into its acronym string and per-mod settings.
///
/// ```
/// use osu_query_core::mods::{parse_mod_list, ModRecord};
///
/// let parsed = parse_mod_list(&[ModRecord::new("HD"), ModRecord::new("DT")]);
/// assert_eq!(parsed.mods, "HD DT");
/// assert!(parsed.settings.is_none());
/// ```
pub fn parse_mod_list(mods: &[ModRecord]) -> ParsedModList {
    if mods.is_empty() {
        return ParsedModList::default();
    }

    let joined = mods
        .iter()
        .map(|m| m.acronym.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let settings: Vec<(String, ModSettings)> = mods
        .iter()
        .filter_map(|m| m.settings.as_ref().map(|s| (m.acronym.clone(), s.clone())))
        .collect();

    ParsedModList {
        mods: joined.trim().to_string(),
        settings: if settings.is_empty() {
            None
        } else {
            Some(settings)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(value: Value) -> ModSettings {
        match value {
            Value::Object(map) => map,
            _ => panic!("settings must be an object"),
        }
    }

    #[test]
    fn test_empty_list() {
        let parsed = parse_mod_list(&[]);
        assert_eq!(parsed.mods, "");
        assert!(parsed.settings.is_none());
        assert!(parsed.is_nomod());
    }

    #[test]
    fn test_no_settings() {
        let parsed = parse_mod_list(&[ModRecord::new("HD"), ModRecord::new("DT")]);
        assert_eq!(parsed.mods, "HD DT");
        assert!(parsed.settings.is_none());
    }

    #[test]
    fn test_settings_are_kept_per_mod() {
        let rate = settings(json!({ "rate": 1.5 }));
        let parsed = parse_mod_list(&[
            ModRecord::new("HD"),
            ModRecord::new("DT").with_settings(rate.clone()),
        ]);

        assert_eq!(parsed.mods, "HD DT");
        assert_eq!(parsed.settings, Some(vec![("DT".to_string(), rate)]));
    }

    #[test]
    fn test_encounter_order_is_preserved() {
        let parsed = parse_mod_list(&[
            ModRecord::new("HD"),
            ModRecord::new("HR"),
            ModRecord::new("CL"),
        ]);
        assert_eq!(parsed.mods, "HD HR CL");
    }

    #[test]
    fn test_empty_settings_object_counts_as_present() {
        let parsed = parse_mod_list(&[ModRecord::new("DA").with_settings(ModSettings::new())]);
        assert_eq!(parsed.settings.map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_canonicalize() {
        let parsed = parse_mod_list(&[ModRecord::new("HD"), ModRecord::new("DT")])
            .canonicalize(GameMode::Osu)
            .unwrap();
        assert_eq!(parsed.mods, "DT HD");

        let nomod = ParsedModList::default().canonicalize(GameMode::Taiko).unwrap();
        assert_eq!(nomod.mods, "");

        let unknown = parse_mod_list(&[ModRecord::new("FI")]).canonicalize(GameMode::Osu);
        assert!(unknown.is_err());
    }

    #[test]
    fn test_deserialize_api_shape() {
        let mods: Vec<ModRecord> = serde_json::from_value(json!([
            { "acronym": "HD" },
            { "acronym": "DT", "settings": { "speed_change": 1.3 } }
        ]))
        .unwrap();

        let parsed = parse_mod_list(&mods);
        assert_eq!(parsed.mods, "HD DT");
        let settings = parsed.settings.unwrap();
        assert_eq!(settings[0].0, "DT");
        assert_eq!(settings[0].1["speed_change"], json!(1.3));
    }
}

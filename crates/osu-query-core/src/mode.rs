//! Game modes and mode identifier resolution

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Represents a game mode (ruleset) in osu!
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Osu = 0,
    Taiko = 1,
    Fruits = 2,
    Mania = 3,
}

impl GameMode {
    /// All modes in ordinal order
    pub const ALL: [GameMode; 4] = [
        GameMode::Osu,
        GameMode::Taiko,
        GameMode::Fruits,
        GameMode::Mania,
    ];

    /// Canonical ruleset name as used by the osu! API
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Osu => "osu",
            GameMode::Taiko => "taiko",
            GameMode::Fruits => "fruits",
            GameMode::Mania => "mania",
        }
    }

    /// Ruleset ordinal (0-3)
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Name of the score table holding this mode's scores
    pub fn score_table(&self) -> &'static str {
        match self {
            GameMode::Osu => "osu_scores",
            GameMode::Taiko => "taiko_scores",
            GameMode::Fruits => "catch_scores",
            GameMode::Mania => "mania_scores",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            GameMode::Osu => "osu!",
            GameMode::Taiko => "osu!taiko",
            GameMode::Fruits => "osu!catch",
            GameMode::Mania => "osu!mania",
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self::Osu
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for GameMode {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Self::Osu),
            1 => Ok(Self::Taiko),
            2 => Ok(Self::Fruits),
            3 => Ok(Self::Mania),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

impl FromStr for GameMode {
    type Err = Error;

    /// Parses a canonical name or a bare ordinal ("0".."3")
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "osu" | "0" => Ok(Self::Osu),
            "taiko" | "1" => Ok(Self::Taiko),
            "fruits" | "2" => Ok(Self::Fruits),
            "mania" | "3" => Ok(Self::Mania),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

/// A mode as supplied by a caller: either a ruleset name or an ordinal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeId<'a> {
    Name(&'a str),
    Ordinal(i64),
}

impl<'a> From<&'a str> for ModeId<'a> {
    fn from(name: &'a str) -> Self {
        ModeId::Name(name)
    }
}

impl<'a> From<&'a String> for ModeId<'a> {
    fn from(name: &'a String) -> Self {
        ModeId::Name(name.as_str())
    }
}

impl From<i64> for ModeId<'_> {
    fn from(ordinal: i64) -> Self {
        ModeId::Ordinal(ordinal)
    }
}

impl From<i32> for ModeId<'_> {
    fn from(ordinal: i32) -> Self {
        ModeId::Ordinal(i64::from(ordinal))
    }
}

impl From<u8> for ModeId<'_> {
    fn from(ordinal: u8) -> Self {
        ModeId::Ordinal(i64::from(ordinal))
    }
}

impl From<GameMode> for ModeId<'_> {
    fn from(mode: GameMode) -> Self {
        ModeId::Ordinal(i64::from(mode.ordinal()))
    }
}

/// Resolve a mode name or ordinal to a [`GameMode`]
///
/// ```
/// use osu_query_core::{resolve_mode, GameMode};
///
/// assert_eq!(resolve_mode("fruits").unwrap(), GameMode::Fruits);
/// assert_eq!(resolve_mode(3).unwrap(), GameMode::Mania);
/// assert!(resolve_mode("catch").is_err());
/// ```
pub fn resolve_mode<'a>(id: impl Into<ModeId<'a>>) -> Result<GameMode> {
    match id.into() {
        ModeId::Name(name) => name.parse(),
        ModeId::Ordinal(ordinal) => GameMode::try_from(ordinal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_name() {
        assert_eq!(resolve_mode("osu").unwrap(), GameMode::Osu);
        assert_eq!(resolve_mode("taiko").unwrap(), GameMode::Taiko);
        assert_eq!(resolve_mode("fruits").unwrap(), GameMode::Fruits);
        assert_eq!(resolve_mode("mania").unwrap(), GameMode::Mania);
    }

    #[test]
    fn test_resolve_by_ordinal() {
        assert_eq!(resolve_mode(0).unwrap(), GameMode::Osu);
        assert_eq!(resolve_mode(1).unwrap(), GameMode::Taiko);
        assert_eq!(resolve_mode(2u8).unwrap(), GameMode::Fruits);
        assert_eq!(resolve_mode(3i64).unwrap(), GameMode::Mania);
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(matches!(resolve_mode("invalid"), Err(Error::UnknownMode(_))));
        assert!(matches!(resolve_mode("catch"), Err(Error::UnknownMode(_))));
        assert!(matches!(resolve_mode("OSU"), Err(Error::UnknownMode(_))));
        assert!(matches!(resolve_mode(4), Err(Error::UnknownMode(_))));
        assert!(matches!(resolve_mode(-1), Err(Error::UnknownMode(_))));
    }

    #[test]
    fn test_name_ordinal_bijection() {
        for mode in GameMode::ALL {
            assert_eq!(resolve_mode(mode.as_str()).unwrap(), mode);
            assert_eq!(resolve_mode(i64::from(mode.ordinal())).unwrap(), mode);
        }
    }

    #[test]
    fn test_ordinal_as_text() {
        assert_eq!("2".parse::<GameMode>().unwrap(), GameMode::Fruits);
        assert!("7".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_ordinal_text_must_be_bare_digit() {
        for text in ["+2", "02", " 2", "2.0", "-0"] {
            assert!(matches!(text.parse::<GameMode>(), Err(Error::UnknownMode(_))));
        }
        assert!(resolve_mode("+2").is_err());
    }

    #[test]
    fn test_serde_uses_api_names() {
        let json = serde_json::to_string(&GameMode::Fruits).unwrap();
        assert_eq!(json, "\"fruits\"");
        let mode: GameMode = serde_json::from_str("\"mania\"").unwrap();
        assert_eq!(mode, GameMode::Mania);
    }
}

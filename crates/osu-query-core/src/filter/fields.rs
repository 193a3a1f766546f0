//! Field tables for each filterable entity
//!
//! Filter strings name fields by their public name (`count_miss`); the storage
//! layer knows them by column (`countmiss`). Each entity has a closed table
//! mapping one to the other.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{Error, Result};
use crate::mode::GameMode;

/// Kind of record a filter applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Score,
    Beatmap,
    BeatmapSet,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Score => "score",
            Entity::Beatmap => "beatmap",
            Entity::BeatmapSet => "beatmapset",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filterable field of one entity
pub trait Field: Copy + Sized + 'static {
    const ENTITY: Entity;

    /// Every field in the table
    fn all() -> &'static [Self];

    /// Name used in filter strings
    fn name(&self) -> &'static str;

    /// Storage column
    fn column(&self) -> &'static str;

    /// Look up a field by its public name
    fn from_name(name: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| Error::UnknownField {
                entity: Self::ENTITY.to_string(),
                field: name.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreField {
    UserId,
    Date,
    Accuracy,
    Pp,
    Rank,
    Perfect,
    MaxCombo,
    Replay,
    StableScore,
    LazerScore,
    ClassicScore,
    Count50,
    Count100,
    Count300,
    CountMiss,
}

impl Field for ScoreField {
    const ENTITY: Entity = Entity::Score;

    fn all() -> &'static [Self] {
        use ScoreField::*;
        &[
            UserId,
            Date,
            Accuracy,
            Pp,
            Rank,
            Perfect,
            MaxCombo,
            Replay,
            StableScore,
            LazerScore,
            ClassicScore,
            Count50,
            Count100,
            Count300,
            CountMiss,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            ScoreField::UserId => "user_id",
            ScoreField::Date => "date",
            ScoreField::Accuracy => "accuracy",
            ScoreField::Pp => "pp",
            ScoreField::Rank => "rank",
            ScoreField::Perfect => "perfect",
            ScoreField::MaxCombo => "max_combo",
            ScoreField::Replay => "replay",
            ScoreField::StableScore => "stable_score",
            ScoreField::LazerScore => "lazer_score",
            ScoreField::ClassicScore => "classic_score",
            ScoreField::Count50 => "count_50",
            ScoreField::Count100 => "count_100",
            ScoreField::Count300 => "count_300",
            ScoreField::CountMiss => "count_miss",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            ScoreField::MaxCombo => "maxcombo",
            ScoreField::Count50 => "count50",
            ScoreField::Count100 => "count100",
            ScoreField::Count300 => "count300",
            ScoreField::CountMiss => "countmiss",
            other => other.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeatmapField {
    BeatmapId,
    BeatmapSetId,
    MapperId,
    TotalLength,
    HitLength,
    CountTotal,
    CountNormal,
    CountSlider,
    CountSpinner,
    Hp,
    Cs,
    Od,
    Ar,
    Status,
    Stars,
    Bpm,
    MaxCombo,
}

impl Field for BeatmapField {
    const ENTITY: Entity = Entity::Beatmap;

    fn all() -> &'static [Self] {
        use BeatmapField::*;
        &[
            BeatmapId,
            BeatmapSetId,
            MapperId,
            TotalLength,
            HitLength,
            CountTotal,
            CountNormal,
            CountSlider,
            CountSpinner,
            Hp,
            Cs,
            Od,
            Ar,
            Status,
            Stars,
            Bpm,
            MaxCombo,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            BeatmapField::BeatmapId => "beatmap_id",
            BeatmapField::BeatmapSetId => "beatmapset_id",
            BeatmapField::MapperId => "mapper_id",
            BeatmapField::TotalLength => "total_length",
            BeatmapField::HitLength => "hit_length",
            BeatmapField::CountTotal => "count_total",
            BeatmapField::CountNormal => "count_normal",
            BeatmapField::CountSlider => "count_slider",
            BeatmapField::CountSpinner => "count_spinner",
            BeatmapField::Hp => "hp",
            BeatmapField::Cs => "cs",
            BeatmapField::Od => "od",
            BeatmapField::Ar => "ar",
            BeatmapField::Status => "status",
            BeatmapField::Stars => "stars",
            BeatmapField::Bpm => "bpm",
            BeatmapField::MaxCombo => "max_combo",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            // ranked status is stored under its legacy API name
            BeatmapField::Status => "approved",
            other => other.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeatmapSetField {
    BeatmapSetId,
    OwnerId,
    Artist,
    ArtistUnicode,
    Title,
    TitleUnicode,
    Tags,
    Bpm,
    VersionsAvailable,
    ApprovedDate,
    SubmitDate,
    LastUpdate,
    GenreId,
    LanguageId,
    Nsfw,
}

impl Field for BeatmapSetField {
    const ENTITY: Entity = Entity::BeatmapSet;

    fn all() -> &'static [Self] {
        use BeatmapSetField::*;
        &[
            BeatmapSetId,
            OwnerId,
            Artist,
            ArtistUnicode,
            Title,
            TitleUnicode,
            Tags,
            Bpm,
            VersionsAvailable,
            ApprovedDate,
            SubmitDate,
            LastUpdate,
            GenreId,
            LanguageId,
            Nsfw,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            BeatmapSetField::BeatmapSetId => "beatmapset_id",
            BeatmapSetField::OwnerId => "owner_id",
            BeatmapSetField::Artist => "artist",
            BeatmapSetField::ArtistUnicode => "artist_unicode",
            BeatmapSetField::Title => "title",
            BeatmapSetField::TitleUnicode => "title_unicode",
            BeatmapSetField::Tags => "tags",
            BeatmapSetField::Bpm => "bpm",
            BeatmapSetField::VersionsAvailable => "versions_available",
            BeatmapSetField::ApprovedDate => "approved_date",
            BeatmapSetField::SubmitDate => "submit_date",
            BeatmapSetField::LastUpdate => "last_update",
            BeatmapSetField::GenreId => "genre_id",
            BeatmapSetField::LanguageId => "language_id",
            BeatmapSetField::Nsfw => "nsfw",
        }
    }

    fn column(&self) -> &'static str {
        self.name()
    }
}

/// A resolved field, ready for the storage layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldHandle {
    /// Score fields live in one table per mode
    Score {
        mode: GameMode,
        field: ScoreField,
    },
    Beatmap(BeatmapField),
    BeatmapSet(BeatmapSetField),
}

impl FieldHandle {
    /// Table the field belongs to
    pub fn table(&self) -> &'static str {
        match self {
            FieldHandle::Score { mode, .. } => mode.score_table(),
            FieldHandle::Beatmap(_) => "beatmaps",
            FieldHandle::BeatmapSet(_) => "beatmapsets",
        }
    }

    /// Column within the table
    pub fn column(&self) -> &'static str {
        match self {
            FieldHandle::Score { field, .. } => field.column(),
            FieldHandle::Beatmap(field) => field.column(),
            FieldHandle::BeatmapSet(field) => field.column(),
        }
    }
}

impl fmt::Display for FieldHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table(), self.column())
    }
}

impl Serialize for FieldHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldHandle", 2)?;
        state.serialize_field("table", self.table())?;
        state.serialize_field("column", self.column())?;
        state.end()
    }
}

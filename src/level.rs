use serde::Serialize;

use crate::config::Labels;

pub const COLOR_GREEN: &str = "rgb(0,128,0)";
pub const COLOR_DARK_GREEN: &str = "rgb(0,100,0)";
pub const COLOR_GREEN_YELLOW: &str = "rgb(173,255,47)";
pub const COLOR_GOLD: &str = "rgb(255,215,0)";
pub const COLOR_ORANGE_RED: &str = "rgb(255,69,0)";
pub const COLOR_RED: &str = "rgb(255,0,0)";

/// Discrete reading-level bucket for a reading-ease score.
///
/// Thresholds are inclusive lower bounds, checked descending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ReadingBand {
    VeryEasy,        // score >= 90
    Easy,            // score >= 80
    FairlyEasy,      // score >= 70
    Standard,        // score >= 60
    FairlyDifficult, // score >= 50
    Difficult,       // score >= 30
    VeryConfusing,   // everything below
}

impl ReadingBand {
    pub const COUNT: usize = 7;

    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryConfusing
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::VeryEasy),
            1 => Some(Self::Easy),
            2 => Some(Self::FairlyEasy),
            3 => Some(Self::Standard),
            4 => Some(Self::FairlyDifficult),
            5 => Some(Self::Difficult),
            6 => Some(Self::VeryConfusing),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Self::VeryEasy => 0,
            Self::Easy => 1,
            Self::FairlyEasy => 2,
            Self::Standard => 3,
            Self::FairlyDifficult => 4,
            Self::Difficult => 5,
            Self::VeryConfusing => 6,
        }
    }

    /// Easy and FairlyEasy share dark green.
    pub fn color(self) -> &'static str {
        match self {
            Self::VeryEasy => COLOR_GREEN,
            Self::Easy | Self::FairlyEasy => COLOR_DARK_GREEN,
            Self::Standard => COLOR_GREEN_YELLOW,
            Self::FairlyDifficult => COLOR_GOLD,
            Self::Difficult => COLOR_ORANGE_RED,
            Self::VeryConfusing => COLOR_RED,
        }
    }

    pub fn label(self, labels: &Labels) -> &str {
        match self {
            Self::VeryEasy => &labels.very_easy,
            Self::Easy => &labels.easy,
            Self::FairlyEasy => &labels.fairly_easy,
            Self::Standard => &labels.standard,
            Self::FairlyDifficult => &labels.fairly_difficult,
            Self::Difficult => &labels.difficult,
            Self::VeryConfusing => &labels.very_confusing,
        }
    }
}

/// A classified score: localized label, display color, bucket ordinal.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReadingLevel {
    pub label: String,
    pub color: &'static str,
    pub id: u8,
}

/// Classify a score using the host's labels.
pub fn reading_level_from_score(score: f64, labels: &Labels) -> ReadingLevel {
    let band = ReadingBand::from_score(score);
    ReadingLevel {
        label: band.label(labels).to_string(),
        color: band.color(),
        id: band.id(),
    }
}

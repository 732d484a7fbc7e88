//! Data model for rudiment notation.
//!
//! These structures describe what is played (hands, subdivisions, hits)
//! independently of how it is laid out or drawn.

use serde::{Deserialize, Serialize};

/// The hand that strikes a note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Hand {
    L,
    #[default]
    R,
}

impl Hand {
    /// Read a hand letter. Anything that is not `L` counts as the right hand.
    pub fn from_char(c: char) -> Self {
        match c {
            'L' | 'l' => Hand::L,
            _ => Hand::R,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Hand::L => 'L',
            Hand::R => 'R',
        }
    }

    /// Nominal staff key for the hand's vertical position.
    /// Right hand sits above the line, left hand below it.
    pub fn staff_key(self) -> &'static str {
        match self {
            Hand::R => "c/5",
            Hand::L => "a/4",
        }
    }
}

impl From<&str> for Hand {
    fn from(s: &str) -> Self {
        s.trim().chars().next().map_or(Hand::R, Hand::from_char)
    }
}

impl From<String> for Hand {
    fn from(s: String) -> Self {
        Hand::from(s.as_str())
    }
}

impl From<Hand> for String {
    fn from(h: Hand) -> Self {
        h.as_char().to_string()
    }
}

/// Rhythmic value of a single hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteDuration {
    Eighth,
    Sixteenth,
}

/// Time subdivision requested by the caller: one hit per eighth or per sixteenth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Subdivision {
    Eighth,
    #[default]
    Sixteenth,
}

impl Subdivision {
    /// Length of one hit in beats.
    pub fn beat_value(self) -> f64 {
        match self {
            Subdivision::Eighth => 0.5,
            Subdivision::Sixteenth => 0.25,
        }
    }

    /// Hits per beat; the exact reciprocal of `beat_value`.
    pub fn slots_per_beat(self) -> usize {
        match self {
            Subdivision::Eighth => 2,
            Subdivision::Sixteenth => 4,
        }
    }

    pub fn duration(self) -> NoteDuration {
        match self {
            Subdivision::Eighth => NoteDuration::Eighth,
            Subdivision::Sixteenth => NoteDuration::Sixteenth,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Subdivision::Eighth => "8",
            Subdivision::Sixteenth => "16",
        }
    }
}

/// `"8"` selects eighths; every other value falls back to sixteenths.
impl From<&str> for Subdivision {
    fn from(s: &str) -> Self {
        match s.trim() {
            "8" => Subdivision::Eighth,
            _ => Subdivision::Sixteenth,
        }
    }
}

impl From<String> for Subdivision {
    fn from(s: String) -> Self {
        Subdivision::from(s.as_str())
    }
}

impl From<Subdivision> for String {
    fn from(s: Subdivision) -> Self {
        s.as_str().to_string()
    }
}

/// A named sticking pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RudimentDefinition {
    /// Display name (e.g., "Single paradiddle")
    pub name: String,
    /// Sticking over {L, R}; repeats cyclically across the bar
    pub sticking: String,
    /// Accent every N hits, starting at hit 0. Zero means no accents.
    #[serde(default, alias = "accentEvery")]
    pub accent_every: u32,
}

impl RudimentDefinition {
    pub fn paradiddle() -> Self {
        Self {
            name: "Single paradiddle".to_string(),
            sticking: "LRLLRLRRLRLLRLRR".to_string(),
            accent_every: 8,
        }
    }
}

/// One timed stroke produced by the hit sequence generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub hand: Hand,
    pub duration: NoteDuration,
    pub accent: bool,
}

//! Lie and shot category enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a lie or category name fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseVariantError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl ParseVariantError {
    fn new(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Surface the ball rests on before a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LieType {
    /// Teeing ground.
    Tee,
    /// Closely mown fairway.
    Fairway,
    /// Longer grass off the fairway.
    Rough,
    /// Sand hazard.
    Bunker,
    /// Putting surface. Scored with the putting baseline.
    Green,
    /// Collar of slightly longer grass around the green.
    Fringe,
    /// Trees, obstructions or other shots requiring a punch-out.
    Recovery,
}

impl LieType {
    /// Every lie, in canonical order.
    pub const ALL: [LieType; 7] = [
        LieType::Tee,
        LieType::Fairway,
        LieType::Rough,
        LieType::Bunker,
        LieType::Green,
        LieType::Fringe,
        LieType::Recovery,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LieType::Tee => "tee",
            LieType::Fairway => "fairway",
            LieType::Rough => "rough",
            LieType::Bunker => "bunker",
            LieType::Green => "green",
            LieType::Fringe => "fringe",
            LieType::Recovery => "recovery",
        }
    }
}

impl fmt::Display for LieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LieType {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        LieType::ALL
            .into_iter()
            .find(|lie| lie.as_str() == needle)
            .ok_or_else(|| {
                let names: Vec<&str> = LieType::ALL.iter().map(LieType::as_str).collect();
                ParseVariantError::new("lie", s, &names)
            })
    }
}

/// Statistical bucket a shot is reported under.
///
/// Always derived from the start of a shot, never supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotCategory {
    /// Shots played from the tee.
    Tee,
    /// Full shots from beyond the around-green radius.
    Approach,
    /// Short game shots near the green but not on it.
    AroundGreen,
    /// Shots played from the green.
    Putting,
}

impl ShotCategory {
    /// Every category, in reporting order.
    pub const ALL: [ShotCategory; 4] = [
        ShotCategory::Tee,
        ShotCategory::Approach,
        ShotCategory::AroundGreen,
        ShotCategory::Putting,
    ];

    /// Canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotCategory::Tee => "tee",
            ShotCategory::Approach => "approach",
            ShotCategory::AroundGreen => "around_green",
            ShotCategory::Putting => "putting",
        }
    }

    /// Human-readable label for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            ShotCategory::Tee => "Off the Tee",
            ShotCategory::Approach => "Approach",
            ShotCategory::AroundGreen => "Around Green",
            ShotCategory::Putting => "Putting",
        }
    }
}

impl fmt::Display for ShotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShotCategory {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ShotCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| {
                let names: Vec<&str> = ShotCategory::ALL.iter().map(ShotCategory::as_str).collect();
                ParseVariantError::new("shot category", s, &names)
            })
    }
}

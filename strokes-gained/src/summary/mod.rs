//! Aggregation of scored shots into per-category and total strokes gained.

use std::ops::Index;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::serialize_rounded;
use crate::error::ScoringError;
use crate::scoring::Scorer;
use crate::shot::{ShotCategory, ShotRecord, ShotResult};

/// Strokes gained per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    #[serde(serialize_with = "serialize_rounded")]
    pub tee: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub approach: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub around_green: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub putting: f64,
}

impl CategoryTotals {
    /// Add a value to a category's bucket.
    pub fn add(&mut self, category: ShotCategory, value: f64) {
        match category {
            ShotCategory::Tee => self.tee += value,
            ShotCategory::Approach => self.approach += value,
            ShotCategory::AroundGreen => self.around_green += value,
            ShotCategory::Putting => self.putting += value,
        }
    }

    /// Value of a category's bucket.
    pub fn get(&self, category: ShotCategory) -> f64 {
        match category {
            ShotCategory::Tee => self.tee,
            ShotCategory::Approach => self.approach,
            ShotCategory::AroundGreen => self.around_green,
            ShotCategory::Putting => self.putting,
        }
    }

    /// Sum over all four buckets.
    pub fn sum(&self) -> f64 {
        self.tee + self.approach + self.around_green + self.putting
    }

    /// `(category, value)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (ShotCategory, f64)> + '_ {
        ShotCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

impl Index<ShotCategory> for CategoryTotals {
    type Output = f64;

    fn index(&self, category: ShotCategory) -> &f64 {
        match category {
            ShotCategory::Tee => &self.tee,
            ShotCategory::Approach => &self.approach,
            ShotCategory::AroundGreen => &self.around_green,
            ShotCategory::Putting => &self.putting,
        }
    }
}

/// Strokes-gained evaluation of a hole or round.
///
/// Created once per evaluation and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokesGainedSummary {
    /// Scored shots in input order.
    pub shots: Vec<ShotResult>,

    /// Strokes gained per category.
    pub by_category: CategoryTotals,

    /// Strokes gained over every shot.
    #[serde(serialize_with = "serialize_rounded")]
    pub total: f64,
}

impl StrokesGainedSummary {
    /// Build a summary from already-scored shots, preserving their order.
    pub fn from_results(shots: Vec<ShotResult>) -> Self {
        let mut by_category = CategoryTotals::default();
        let mut total = 0.0;
        for shot in &shots {
            by_category.add(shot.category, shot.strokes_gained);
            total += shot.strokes_gained;
        }
        Self {
            shots,
            by_category,
            total,
        }
    }

    /// Total strokes charged, penalties included.
    pub fn strokes_taken(&self) -> u64 {
        self.shots.iter().map(|s| s.record.strokes_taken()).sum()
    }

    /// Whether no shots were evaluated.
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }
}

impl Scorer {
    /// Score every shot and aggregate the results.
    ///
    /// All shots are validated before any is scored, so an invalid shot
    /// anywhere in the list fails the whole call. An empty list produces an
    /// empty summary with every total at zero.
    pub fn summarize(&self, shots: &[ShotRecord]) -> Result<StrokesGainedSummary, ScoringError> {
        for shot in shots {
            self.validate(shot)?;
        }

        let results = shots
            .iter()
            .map(|shot| self.score_shot(shot))
            .collect::<Result<Vec<_>, _>>()?;
        let summary = StrokesGainedSummary::from_results(results);

        debug!(
            shots = summary.shots.len(),
            total = summary.total,
            tee = summary.by_category.tee,
            approach = summary.by_category.approach,
            around_green = summary.by_category.around_green,
            putting = summary.by_category.putting,
            "Summarized strokes gained"
        );
        Ok(summary)
    }

    /// Summarize independent shot lists in parallel, preserving their order.
    ///
    /// Fails if any shot in any list is invalid.
    pub fn summarize_many<S>(&self, rounds: &[S]) -> Result<Vec<StrokesGainedSummary>, ScoringError>
    where
        S: AsRef<[ShotRecord]> + Sync,
    {
        rounds
            .par_iter()
            .map(|round| self.summarize(round.as_ref()))
            .collect()
    }
}

/// Summarize a shot list with the standard thresholds.
pub fn summarize(shots: &[ShotRecord]) -> Result<StrokesGainedSummary, ScoringError> {
    Scorer::with_defaults().summarize(shots)
}

/// Summarize independent shot lists in parallel with the standard thresholds.
pub fn summarize_many<S>(rounds: &[S]) -> Result<Vec<StrokesGainedSummary>, ScoringError>
where
    S: AsRef<[ShotRecord]> + Sync,
{
    Scorer::with_defaults().summarize_many(rounds)
}

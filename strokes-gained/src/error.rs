//! Scoring error types.

use thiserror::Error;

/// Errors raised while evaluating expected strokes or scoring shots.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    /// A distance that is negative or not a finite number.
    ///
    /// This points at bad geometry upstream of the engine, so it is rejected
    /// instead of being clamped to zero.
    #[error("{}", describe_invalid_distance(*shot_number, *distance))]
    InvalidDistance {
        /// Shot the distance belongs to, when known.
        shot_number: Option<u32>,
        /// The offending value.
        distance: f64,
    },
}

impl ScoringError {
    /// Create an invalid distance error that is not tied to a shot.
    pub fn invalid_distance(distance: f64) -> Self {
        ScoringError::InvalidDistance {
            shot_number: None,
            distance,
        }
    }

    /// Attach the shot number to this error.
    pub fn for_shot(self, number: u32) -> Self {
        match self {
            ScoringError::InvalidDistance { distance, .. } => ScoringError::InvalidDistance {
                shot_number: Some(number),
                distance,
            },
        }
    }
}

fn describe_invalid_distance(shot_number: Option<u32>, distance: f64) -> String {
    match shot_number {
        Some(number) => format!(
            "Invalid distance on shot {}: {} (must be a finite, non-negative number of yards)",
            number, distance
        ),
        None => format!(
            "Invalid distance: {} (must be a finite, non-negative number of yards)",
            distance
        ),
    }
}

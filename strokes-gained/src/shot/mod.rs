//! Shot data model.
//!
//! Provides the lie and category enumerations plus the input record
//! ([`ShotRecord`]) and derived result ([`ShotResult`]) for a single stroke.
//!
//! # Wire Format
//!
//! All types derive `serde` traits with field names matching the canonical
//! data model used by surrounding systems:
//!
//! ```json
//! {
//!   "shotNumber": 2,
//!   "startPosition": { "x": 41.0, "y": 62.5 },
//!   "endPosition": { "x": 48.2, "y": 20.1 },
//!   "startLie": "fairway",
//!   "endLie": "green",
//!   "startDistanceYards": 152.0,
//!   "endDistanceYards": 6.3,
//!   "club": "7 Iron",
//!   "isPenalty": false,
//!   "penaltyStrokes": 0
//! }
//! ```

mod record;
mod types;

pub use record::{ShotRecord, ShotResult};
pub use types::{LieType, ParseVariantError, ShotCategory};

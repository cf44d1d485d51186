//! Subcommand implementations.

pub mod calibrate;
pub mod common;
pub mod config;
pub mod expected;
pub mod plot;
pub mod score;

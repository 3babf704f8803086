//! # Config Crate
//!
//! Centralized configuration constants and level settings for the maze
//! generator. All magic numbers and tunable parameters are defined here to
//! ensure consistency across crates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_CURVE_SUBDIVISIONS};
//! use config::level::LevelConfig;
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1e-12;
//! assert!(value.abs() < EPSILON);
//!
//! // Level settings start from validated defaults
//! let level = LevelConfig::new(10, 10, 4, 42).expect("valid config");
//! assert_eq!(level.curve_subdivisions, DEFAULT_CURVE_SUBDIVISIONS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Inputs**: Level settings are checked before any allocation
//! - **Deterministic**: Every random choice downstream is driven by `seed`

pub mod constants;
pub mod level;

pub use level::{ConfigError, LevelConfig, SpawnWeights};

#[cfg(test)]
mod tests;

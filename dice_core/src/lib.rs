//! dice_core - Die rolling and dice pool resolution
//!
//! This library provides:
//! - DieGroup / DieFace: the dice side of a roll request and its result
//! - RandomSource: injectable randomness (thread, seeded, scripted)
//! - roll_one: a single uniform die roll
//! - resolve_pool: whole-pool rolling with advantage/disadvantage
//! - classify: per-die critical detection
//!
//! # Quick Start
//!
//! ```rust
//! use dice_core::{resolve_pool, AdvMode, DieGroup, SeededSource};
//!
//! let mut rng = SeededSource::seeded(7);
//! let outcome = resolve_pool(&[DieGroup::new(6, 2)], AdvMode::Advantage, &mut rng).unwrap();
//!
//! // Two full sets were rolled, one was kept whole
//! assert_eq!(outcome.kept.len(), 2);
//! assert_eq!(outcome.all_rolled.len(), 4);
//! ```

pub mod critical;
pub mod pool;
pub mod random;
pub mod roller;
pub mod types;

pub use critical::{classify, Critical};
pub use pool::{dropped_set, keeps_first_set, resolve_pool, PoolOutcome};
pub use random::{thread_source, RandomSource, RngSource, ScriptedSource, SeededSource};
pub use roller::{roll_face, roll_one};
pub use types::{total_dice, AdvMode, DieFace, DieGroup};

use thiserror::Error;

/// Error rolling dice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("Invalid die size: d{0}")]
    InvalidDie(u32),
    #[error("Cannot roll an empty dice pool")]
    EmptyPool,
}

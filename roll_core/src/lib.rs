//! roll_core - Roll resolution for character sheets
//!
//! This library provides:
//! - RollBinding: structured roll requests (attack, check, save, damage, healing)
//! - compile: binding + ability modifiers into die groups and formula text
//! - RollEngine: the single path both bindings and free-form pools roll through
//! - RollResult / LogEntry: display and dice-log output
//! - RollQueue: caller-side gate keeping one roll in flight
//!
//! # Quick Start
//!
//! ```rust
//! use roll_core::prelude::*;
//!
//! let engine = RollEngine::default();
//! let modifiers = CharacterModifiers::new().with("STR", 3);
//! let binding = RollBinding::new(RollKind::Check).with_ability("STR");
//!
//! let mut rng = SeededSource::seeded(99);
//! let result = engine
//!     .roll_binding(&binding, &modifiers, 0, AdvMode::Normal, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(result.formula, "d20 +3");
//! assert_eq!(result.total, result.raw_result as i64 + 3);
//! println!("{}", format_roll("Athletics", &binding, &result));
//! ```

pub mod binding;
pub mod config;
pub mod engine;
pub mod format;
pub mod formula;
pub mod modifiers;
pub mod notation;
pub mod pool;
pub mod prelude;
pub mod queue;
pub mod result;

// Core API
pub use binding::{BindingConfig, Dc, RollBinding, RollKind};
pub use engine::{roll_binding, roll_pool, RollEngine};
pub use formula::{compile, render_formula, CompiledRoll};
pub use modifiers::CharacterModifiers;
pub use pool::PoolRequest;
pub use result::RollResult;

// Output
pub use format::{format_pool, format_roll, pool_log_entry, to_log_entry, LogEntry};

// Configuration
pub use config::{ConfigError, DiceLimits, LogConstants, RollConstants};

// Caller-side helpers
pub use notation::parse_notation;
pub use queue::RollQueue;

// Re-export commonly needed dice_core types
pub use dice_core::{
    AdvMode, Critical, DiceError, DieFace, DieGroup, RandomSource, ScriptedSource, SeededSource,
};

use thiserror::Error;

/// Error compiling or resolving a roll
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    #[error(transparent)]
    Dice(#[from] DiceError),
    #[error("Invalid dice notation '{token}' in '{notation}'")]
    FormulaParse { token: String, notation: String },
    #[error("Unsupported roll kind: {0}")]
    UnsupportedRollKind(String),
    #[error("A {0} roll needs a die expression")]
    MissingDie(RollKind),
    #[error("Pool of {count} dice exceeds the limit of {max}")]
    PoolTooLarge { count: u64, max: u32 },
    #[error("d{sides} exceeds the largest allowed die (d{max})")]
    DieTooLarge { sides: u32, max: u32 },
}

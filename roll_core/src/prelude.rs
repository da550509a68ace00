//! Prelude module for convenient imports
//!
//! ```rust
//! use roll_core::prelude::*;
//! ```

// Requests
pub use crate::binding::{Dc, RollBinding, RollKind};
pub use crate::modifiers::CharacterModifiers;
pub use crate::pool::PoolRequest;

// Resolution
pub use crate::engine::RollEngine;
pub use crate::result::RollResult;
pub use crate::RollError;

// Output
pub use crate::format::{format_pool, format_roll, LogEntry};

// Config
pub use crate::config::RollConstants;

// Re-exports from dice_core
pub use dice_core::{AdvMode, Critical, DieFace, DieGroup, RandomSource, SeededSource};

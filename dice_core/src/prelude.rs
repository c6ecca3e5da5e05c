//! Prelude module for convenient imports
//!
//! ```rust
//! use dice_core::prelude::*;
//! ```

// Core types
pub use crate::dice::Dice;
pub use crate::error::DiceError;
pub use crate::math::DiceMath;

// Simulation
pub use crate::simulation::RollSimulation;

// Config
pub use crate::config::{default_presets, DicePreset, PresetRoll};

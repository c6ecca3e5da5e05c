//! dice_core - Dice rolling and dice statistics library
//!
//! This library provides:
//! - Dice: A group of identical die that remembers its most recent roll
//! - DiceMath: Closed-form statistics and the drop-lowest roll
//! - Presets: Named dice loaded from TOML configuration
//! - RollSimulation: Repeated-roll statistics for checking expectations

pub mod config;
pub mod dice;
pub mod error;
pub mod math;
pub mod prelude;
pub mod simulation;

// Re-export core types for convenience
pub use config::{default_presets, ConfigError, DicePreset, PresetRoll};
pub use dice::{Dice, DiceSpec};
pub use error::DiceError;
pub use math::DiceMath;
pub use simulation::RollSimulation;

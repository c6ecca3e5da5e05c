//! Dice preset configuration loading

use super::ConfigError;
use crate::dice::{Dice, DEFAULT_COUNT, DEFAULT_SIDES};
use crate::error::DiceError;
use crate::math::DiceMath;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A named dice configuration, optionally dropping its lowest results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePreset {
    /// Unique preset identifier
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default = "default_sides")]
    pub sides: i64,
    #[serde(default = "default_count")]
    pub count: i64,
    /// How many of the lowest die to discard (0 = keep all)
    #[serde(default)]
    pub drop_lowest: u32,
}

fn default_sides() -> i64 {
    DEFAULT_SIDES
}

fn default_count() -> i64 {
    DEFAULT_COUNT
}

/// Outcome of rolling a preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetRoll {
    /// Preset identifier
    pub id: String,
    /// Dice notation of what was rolled, e.g. "4d6"
    pub dice: String,
    /// Every die as rolled
    pub rolls: Vec<u32>,
    /// Die remaining after the drop rule
    pub kept: Vec<u32>,
    /// Sum of the kept die
    pub total: u64,
}

impl DicePreset {
    /// Build the validated Dice for this preset
    pub fn to_dice(&self) -> Result<Dice, DiceError> {
        Dice::new(self.sides, self.count)
    }

    /// Roll the preset, applying its drop rule
    pub fn roll_with(&self, rng: &mut impl Rng) -> Result<PresetRoll, DiceError> {
        let mut dice = self.to_dice()?;
        let kept = if self.drop_lowest > 0 {
            DiceMath::roll_dropping(&mut dice, self.drop_lowest, rng)
        } else {
            dice.roll_with(rng).to_vec()
        };
        let total = kept.iter().map(|&v| u64::from(v)).sum();

        Ok(PresetRoll {
            id: self.id.clone(),
            dice: dice.to_string(),
            rolls: dice.previous().to_vec(),
            kept,
            total,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let dice = self.to_dice()?;
        if self.drop_lowest > 0 && self.drop_lowest >= dice.count() {
            return Err(ConfigError::ValidationError(format!(
                "preset '{}' drops {} of {} dice",
                self.id,
                self.drop_lowest,
                dice.count()
            )));
        }
        Ok(())
    }
}

/// Container for preset configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetsConfig {
    #[serde(rename = "presets")]
    pub presets: Vec<DicePreset>,
}

impl PresetsConfig {
    fn into_map(self) -> Result<HashMap<String, DicePreset>, ConfigError> {
        let mut map = HashMap::new();
        for preset in self.presets {
            preset.validate()?;
            if map.contains_key(&preset.id) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate preset id '{}'",
                    preset.id
                )));
            }
            map.insert(preset.id.clone(), preset);
        }

        tracing::debug!(count = map.len(), "loaded dice presets");
        Ok(map)
    }
}

/// Load preset configurations from a TOML file
pub fn load_presets(path: &Path) -> Result<HashMap<String, DicePreset>, ConfigError> {
    let config: PresetsConfig = super::load_toml(path)?;
    config.into_map()
}

/// Load preset configurations from a TOML string
pub fn parse_presets(content: &str) -> Result<HashMap<String, DicePreset>, ConfigError> {
    let config: PresetsConfig = super::parse_toml(content)?;
    config.into_map()
}

/// Get default preset configurations
pub fn default_presets() -> HashMap<String, DicePreset> {
    let toml = include_str!("../../config/presets.toml");
    parse_presets(toml).unwrap_or_else(|err| {
        tracing::warn!("built-in presets failed to load: {}", err);
        let mut map = HashMap::new();
        map.insert(
            "d20".to_string(),
            DicePreset {
                id: "d20".to_string(),
                name: "Twenty-sided die".to_string(),
                sides: 20,
                count: 1,
                drop_lowest: 0,
            },
        );
        map
    })
}

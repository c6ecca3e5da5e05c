//! Dice - A group of identical die rolled together
//!
//! A `Dice` is configured once with a side count and a die count and then
//! remembers only the result of its most recent roll. Every roll replaces
//! that result; there is no roll history.

mod roll;

use crate::error::{DiceError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Default number of sides (a standard six-sided die)
pub const DEFAULT_SIDES: i64 = 6;
/// Default number of die in a group
pub const DEFAULT_COUNT: i64 = 1;

/// A group of `count` die, each with faces `1..=sides`
///
/// A die with 0 sides is degenerate and always rolls 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DiceSpec", into = "DiceSpec")]
pub struct Dice {
    sides: u32,
    count: u32,
    /// Per-die results of the last roll, in draw order
    previous: Vec<u32>,
}

/// Unvalidated dice parameters as they appear in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSpec {
    #[serde(default = "default_sides")]
    pub sides: i64,
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_sides() -> i64 {
    DEFAULT_SIDES
}

fn default_count() -> i64 {
    DEFAULT_COUNT
}

impl Default for DiceSpec {
    fn default() -> Self {
        DiceSpec {
            sides: DEFAULT_SIDES,
            count: DEFAULT_COUNT,
        }
    }
}

impl Dice {
    /// Create a new Dice, validating both parameters
    ///
    /// Fails with `InvalidArgument` if either `sides` or `count` is negative
    /// or too large to represent.
    pub fn new(sides: i64, count: i64) -> Result<Self> {
        let sides = non_negative("sides", sides)?;
        let count = non_negative("count", count)?;
        Ok(Dice {
            sides,
            count,
            previous: Vec::new(),
        })
    }

    /// Maximum face value of one die
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Number of die rolled together
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Per-die results of the most recent roll (empty if never rolled)
    pub fn previous(&self) -> &[u32] {
        &self.previous
    }

    /// Sum of the most recent roll (0 if never rolled)
    pub fn previous_sum(&self) -> u64 {
        self.previous.iter().map(|&v| u64::from(v)).sum()
    }
}

fn non_negative(name: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        DiceError::invalid(format!(
            "{} must be 0 or a positive integer. Received value: {}",
            name, value
        ))
    })
}

impl Default for Dice {
    fn default() -> Self {
        Dice {
            sides: DEFAULT_SIDES as u32,
            count: DEFAULT_COUNT as u32,
            previous: Vec::new(),
        }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl TryFrom<DiceSpec> for Dice {
    type Error = DiceError;

    fn try_from(spec: DiceSpec) -> Result<Self> {
        Dice::new(spec.sides, spec.count)
    }
}

impl From<Dice> for DiceSpec {
    fn from(dice: Dice) -> Self {
        DiceSpec {
            sides: i64::from(dice.sides),
            count: i64::from(dice.count),
        }
    }
}

/// Build a Dice from an arbitrary JSON value
///
/// Only objects of the form `{"sides": n, "count": n}` are accepted (either
/// key may be omitted). Anything else is rejected with the received value
/// and its JSON type in the message.
impl TryFrom<&Value> for Dice {
    type Error = DiceError;

    fn try_from(value: &Value) -> Result<Self> {
        let Value::Object(fields) = value else {
            return Err(DiceError::invalid(format!(
                "expected a Dice. Received value: {} of type {}",
                value,
                json_type_name(value)
            )));
        };

        let sides = integer_field(fields, "sides", DEFAULT_SIDES)?;
        let count = integer_field(fields, "count", DEFAULT_COUNT)?;
        Dice::new(sides, count)
    }
}

fn integer_field(fields: &Map<String, Value>, name: &str, default: i64) -> Result<i64> {
    match fields.get(name) {
        None => Ok(default),
        Some(field) => field.as_i64().ok_or_else(|| {
            DiceError::invalid(format!(
                "{} must be 0 or a positive integer. Received value: {} of type {}",
                name,
                field,
                json_type_name(field)
            ))
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_one_d_six() {
        let dice = Dice::default();
        assert_eq!(dice.sides(), 6);
        assert_eq!(dice.count(), 1);
        assert!(dice.previous().is_empty());
        assert_eq!(dice.previous_sum(), 0);
    }

    #[test]
    fn test_new_valid() {
        let dice = Dice::new(20, 3).unwrap();
        assert_eq!(dice.sides(), 20);
        assert_eq!(dice.count(), 3);
        assert!(dice.previous().is_empty());
    }

    #[test]
    fn test_zero_sides_and_count_are_valid() {
        assert!(Dice::new(0, 5).is_ok());
        assert!(Dice::new(6, 0).is_ok());
        assert!(Dice::new(0, 0).is_ok());
    }

    #[test]
    fn test_negative_sides_rejected() {
        let err = Dice::new(-1, 1).unwrap_err();
        let DiceError::InvalidArgument(message) = err;
        assert!(message.contains("sides"));
        assert!(message.contains("-1"));
    }

    #[test]
    fn test_negative_count_rejected() {
        // Count is validated on its own, with valid sides
        let err = Dice::new(6, -1).unwrap_err();
        let DiceError::InvalidArgument(message) = err;
        assert!(message.contains("count"));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Dice::new(i64::from(u32::MAX) + 1, 1).is_err());
        assert!(Dice::new(6, i64::MAX).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dice::new(6, 3).unwrap().to_string(), "3d6");
        assert_eq!(Dice::new(20, 1).unwrap().to_string(), "1d20");
        assert_eq!(Dice::new(0, 0).unwrap().to_string(), "0d0");
    }

    #[test]
    fn test_try_from_json_object() {
        let dice = Dice::try_from(&json!({ "sides": 8, "count": 2 })).unwrap();
        assert_eq!(dice.to_string(), "2d8");

        let dice = Dice::try_from(&json!({ "sides": 12 })).unwrap();
        assert_eq!(dice.to_string(), "1d12");

        let dice = Dice::try_from(&json!({})).unwrap();
        assert_eq!(dice, Dice::default());
    }

    #[test]
    fn test_try_from_json_not_a_dice() {
        let err = Dice::try_from(&json!("not a dice")).unwrap_err();
        let DiceError::InvalidArgument(message) = err;
        assert!(message.contains("not a dice"));
        assert!(message.contains("string"));

        let err = Dice::try_from(&json!([6, 2])).unwrap_err();
        let DiceError::InvalidArgument(message) = err;
        assert!(message.contains("array"));
    }

    #[test]
    fn test_try_from_json_bad_fields() {
        assert!(Dice::try_from(&json!({ "sides": 6.5 })).is_err());
        assert!(Dice::try_from(&json!({ "sides": "six" })).is_err());
        assert!(Dice::try_from(&json!({ "count": -2 })).is_err());
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let dice: Dice = serde_json::from_str(r#"{"sides": 10, "count": 2}"#).unwrap();
        assert_eq!(dice.to_string(), "2d10");

        let result: std::result::Result<Dice, _> =
            serde_json::from_str(r#"{"sides": -4, "count": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_omits_previous() {
        let mut dice = Dice::new(6, 2).unwrap();
        dice.roll();
        let value = serde_json::to_value(&dice).unwrap();
        assert_eq!(value, json!({ "sides": 6, "count": 2 }));
    }
}

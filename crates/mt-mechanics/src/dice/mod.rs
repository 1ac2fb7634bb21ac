//! Dice types, dice commands, and face sources.
//!
//! The engine only knows two dice: the d6 used for damage and effects, and
//! the d20 used for success tests. A [`DiceRequest`] is parsed from command
//! tokens such as `d6`, `3d6` or `2d20`.

pub mod roll;
pub mod source;

pub use roll::{format_faces, roll_faces};
pub use source::{DieSource, ScriptedDice};

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A die type supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Six-sided effect/damage die.
    D6,
    /// Twenty-sided success die.
    D20,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D20 => 20,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D6 => write!(f, "d6"),
            Self::D20 => write!(f, "d20"),
        }
    }
}

/// A request to roll `count` dice of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceRequest {
    /// Which die to roll.
    pub die: Die,
    /// How many dice to roll (always at least 1).
    pub count: u32,
}

impl DiceRequest {
    /// Parse a dice command token such as `d20` or `4d6`.
    ///
    /// Returns `None` when the token is not a dice command at all, and an
    /// error when it is one but the count prefix is not a positive integer.
    /// An empty prefix means one die.
    pub fn parse(token: &str) -> Option<MechResult<Self>> {
        let lower = token.trim().to_lowercase();
        let (prefix, die) = if let Some(prefix) = lower.strip_suffix("d20") {
            (prefix, Die::D20)
        } else if let Some(prefix) = lower.strip_suffix("d6") {
            (prefix, Die::D6)
        } else {
            return None;
        };

        Some(parse_count(prefix).map(|count| Self { die, count }))
    }
}

fn parse_count(prefix: &str) -> MechResult<u32> {
    if prefix.is_empty() {
        return Ok(1);
    }
    match prefix.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(MechError::InvalidCount(prefix.to_string())),
    }
}

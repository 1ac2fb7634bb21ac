//! Effect dice resolution (d6 damage).
//!
//! Every face adds to the damage total. A face showing the die's maximum
//! triggers an effect.

use serde::{Deserialize, Serialize};

use crate::dice::{Die, DieSource, format_faces, roll_faces};
use crate::error::MechResult;

/// The result of rolling a handful of effect dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectRoll {
    /// Individual faces in roll order.
    pub raw: Vec<u32>,
    /// Sum of all faces.
    pub damage: u32,
    /// Number of faces showing 6.
    pub effects: u32,
}

impl EffectRoll {
    /// Score a set of already-rolled d6 faces.
    pub fn from_faces(raw: Vec<u32>) -> Self {
        let max = Die::D6.sides();
        let damage = raw.iter().sum();
        let effects = raw.iter().filter(|&&face| face == max).count() as u32;
        Self {
            raw,
            damage,
            effects,
        }
    }
}

impl std::fmt::Display for EffectRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}) = {} with {} fx",
            format_faces(&self.raw),
            self.damage,
            self.effects
        )
    }
}

/// Roll `count` d6 and score them.
pub fn roll_d6(count: u32, source: &mut impl DieSource) -> MechResult<EffectRoll> {
    let raw = roll_faces(Die::D6, count, source)?;
    Ok(EffectRoll::from_faces(raw))
}

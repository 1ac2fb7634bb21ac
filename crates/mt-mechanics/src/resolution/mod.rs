//! Resolution of raw faces into game results.
//!
//! - **Effect dice** (d6): sum the faces as damage and count sixes as effects
//! - **Success dice** (d20): count faces at or below a target, with a
//!   critical range scoring double and a complication range counted apart
//! - **Custom tables**: pick one outcome from a game-specific list

pub mod custom;
pub mod effect;
pub mod success;

pub use custom::{CustomRoll, roll_custom};
pub use effect::{EffectRoll, roll_d6};
pub use success::{SuccessParams, SuccessRoll, roll_d20};

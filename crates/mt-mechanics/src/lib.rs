//! Dice mechanics for 2d20 tabletop games.
//!
//! Provides d6 effect dice, d20 success dice with critical and complication
//! ranges, per-system custom dice tables, and the catalog of supported
//! game systems. Everything here is synchronous and free of I/O apart from
//! loading a catalog file; randomness comes in through [`DieSource`].

pub mod catalog;
pub mod dice;
pub mod error;
pub mod resolution;

pub use catalog::{CustomDieTable, GameCatalog, GameSystem, SystemImages};
pub use dice::{DiceRequest, Die, DieSource, ScriptedDice};
pub use error::{MechError, MechResult};
pub use resolution::{
    CustomRoll, EffectRoll, SuccessParams, SuccessRoll, roll_custom, roll_d6, roll_d20,
};

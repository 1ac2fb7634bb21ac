//! Success dice resolution (2d20-style).
//!
//! Roll d20s. Each die at or below the target number scores one success.
//! A die at or below the critical range scores two successes instead.
//! Independently, each die at or above the complication range adds a
//! complication, so one die can both succeed and complicate.

use serde::{Deserialize, Serialize};

use crate::dice::{Die, DieSource, format_faces, roll_faces};
use crate::error::MechResult;

/// Thresholds for a d20 test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessParams {
    /// Roll at or below this value to score a success.
    pub target: i64,
    /// Roll at or below this value to score two successes.
    pub critical_range: i64,
    /// Roll at or above this value to suffer a complication.
    pub complication_range: i64,
}

impl Default for SuccessParams {
    fn default() -> Self {
        Self {
            target: 20,
            critical_range: 1,
            complication_range: 20,
        }
    }
}

impl SuccessParams {
    /// Build parameters from up to three positional arguments:
    /// `target`, `critical range`, `complication range`.
    ///
    /// A missing or non-numeric argument falls back to the default for
    /// that slot only. Any integer is kept as given, so a negative target
    /// never succeeds. Extra arguments are ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let defaults = Self::default();
        let slot = |i: usize, fallback: i64| {
            args.get(i)
                .and_then(|a| a.as_ref().trim().parse::<i64>().ok())
                .unwrap_or(fallback)
        };
        Self {
            target: slot(0, defaults.target),
            critical_range: slot(1, defaults.critical_range),
            complication_range: slot(2, defaults.complication_range),
        }
    }

    /// Successes scored by a single face.
    pub fn successes_for(&self, face: u32) -> u32 {
        let face = i64::from(face);
        if face <= self.critical_range {
            2
        } else if face <= self.target {
            1
        } else {
            0
        }
    }

    /// Whether a single face is a complication.
    pub fn is_complication(&self, face: u32) -> bool {
        i64::from(face) >= self.complication_range
    }
}

/// The result of a d20 test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessRoll {
    /// The thresholds the faces were scored against.
    pub params: SuccessParams,
    /// Individual faces in roll order.
    pub raw: Vec<u32>,
    /// Total successes, criticals counting twice.
    pub successes: u32,
    /// Number of faces in the complication range.
    pub complications: u32,
}

impl SuccessRoll {
    /// Score a set of already-rolled d20 faces.
    pub fn from_faces(params: SuccessParams, raw: Vec<u32>) -> Self {
        let successes = raw.iter().map(|&face| params.successes_for(face)).sum();
        let complications = raw
            .iter()
            .filter(|&&face| params.is_complication(face))
            .count() as u32;
        Self {
            params,
            raw,
            successes,
            complications,
        }
    }
}

impl std::fmt::Display for SuccessRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}) = {} success / {} complication",
            format_faces(&self.raw),
            self.successes,
            self.complications
        )
    }
}

/// Roll `count` d20 and score them against `params`.
pub fn roll_d20(
    count: u32,
    params: SuccessParams,
    source: &mut impl DieSource,
) -> MechResult<SuccessRoll> {
    let raw = roll_faces(Die::D20, count, source)?;
    Ok(SuccessRoll::from_faces(params, raw))
}

//! Rolling raw faces.

use super::{Die, DieSource};
use crate::error::{MechError, MechResult};

/// Roll `count` dice of type `die`, returning the faces in roll order.
///
/// A count of zero is rejected; no faces are drawn in that case.
pub fn roll_faces(die: Die, count: u32, source: &mut impl DieSource) -> MechResult<Vec<u32>> {
    if count == 0 {
        return Err(MechError::InvalidCount(count.to_string()));
    }
    Ok((0..count).map(|_| source.roll(die.sides())).collect())
}

/// Render faces as a comma-separated list, e.g. `2, 4, 4`.
pub fn format_faces(faces: &[u32]) -> String {
    let values: Vec<String> = faces.iter().map(|v| v.to_string()).collect();
    values.join(", ")
}

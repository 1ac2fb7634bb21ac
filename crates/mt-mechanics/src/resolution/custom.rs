//! Custom table resolution.

use serde::{Deserialize, Serialize};

use crate::catalog::CustomDieTable;
use crate::dice::DieSource;
use crate::error::{MechError, MechResult};

/// One outcome drawn from a custom dice table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRoll {
    /// The table's display label.
    pub label: String,
    /// The selected outcome.
    pub value: String,
}

impl std::fmt::Display for CustomRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Draw one outcome uniformly from `table`.
///
/// `name` is the command the table is registered under and is only used
/// for the error when the table has no outcomes.
pub fn roll_custom(
    name: &str,
    table: &CustomDieTable,
    source: &mut impl DieSource,
) -> MechResult<CustomRoll> {
    if table.values.is_empty() {
        return Err(MechError::EmptyTable(name.to_string()));
    }
    let index = source.pick(table.values.len());
    Ok(CustomRoll {
        label: table.display.clone(),
        value: table.values[index].clone(),
    })
}

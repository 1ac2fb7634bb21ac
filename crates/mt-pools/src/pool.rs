//! A single momentum/threat pool and the fields it tracks.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One scope's counters.
///
/// The global pool has no `name`; channel pools carry the channel's display
/// name. Fields this type does not know about are kept in `extra` and
/// written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcePool {
    /// Banked momentum.
    #[serde(default, deserialize_with = "lenient_counter")]
    pub momentum: i64,
    /// Threat held by the opposition.
    #[serde(default, deserialize_with = "lenient_counter")]
    pub threat: i64,
    /// Channel display name (absent for the global pool).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unrecognised fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourcePool {
    /// An empty, unnamed pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty pool labelled with a channel name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Read one field.
    pub fn get(&self, field: PoolField) -> i64 {
        match field {
            PoolField::Momentum => self.momentum,
            PoolField::Threat => self.threat,
        }
    }

    /// Mutable access to one field.
    pub fn get_mut(&mut self, field: PoolField) -> &mut i64 {
        match field {
            PoolField::Momentum => &mut self.momentum,
            PoolField::Threat => &mut self.threat,
        }
    }

    /// Zero both counters.
    pub fn clear(&mut self) {
        self.momentum = 0;
        self.threat = 0;
    }

    /// The `Momentum: M. Threat: T` summary used in status reports.
    pub fn summary(&self) -> String {
        format!("Momentum: {}. Threat: {}", self.momentum, self.threat)
    }
}

/// Read a stored counter without failing the document.
///
/// Older writers left `null`, fractional, or out-of-range numbers behind.
/// Fractions truncate and out-of-range values saturate; anything that is
/// not a number reads as 0.
fn lenient_counter<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i,
            (None, Some(_), _) => i64::MAX,
            // `as` saturates and maps NaN to 0
            (None, None, Some(f)) => f as i64,
            (None, None, None) => 0,
        },
        _ => 0,
    })
}

/// Which counter an adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolField {
    /// Player-side momentum, capped on the global pool.
    Momentum,
    /// Opposition threat, floored at zero on the global pool.
    Threat,
}

impl PoolField {
    /// Apply this field's global clamp policy.
    pub fn clamp_global(self, value: i64, momentum_max: i64) -> i64 {
        match self {
            Self::Momentum => value.clamp(0, momentum_max.max(0)),
            Self::Threat => value.max(0),
        }
    }

    /// Title of the report produced after an adjustment.
    pub fn report_title(self) -> &'static str {
        match self {
            Self::Momentum => "Momentum Pools",
            Self::Threat => "Threat Pools",
        }
    }

    /// Accent colour of the adjustment report.
    pub fn report_color(self) -> u32 {
        match self {
            Self::Momentum => 3_447_003,
            Self::Threat => 15_158_332,
        }
    }
}

impl std::fmt::Display for PoolField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Momentum => write!(f, "momentum"),
            Self::Threat => write!(f, "threat"),
        }
    }
}

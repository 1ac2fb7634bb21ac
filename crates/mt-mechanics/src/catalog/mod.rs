//! The game catalog: which 2d20 systems exist and what they ship with.
//!
//! A [`GameCatalog`] is loaded once at startup, either from the built-in
//! [`preset`] systems or from a JSON file, and is read-only afterwards.
//!
//! JSON shape, keyed by system identifier:
//!
//! ```json
//! {
//!   "conan": {
//!     "display": "Conan: Adventures in an Age Undreamed Of",
//!     "images": { "d6": "https://…/d6.png", "d20": "https://…/d20.png" },
//!     "dice": { "hit": { "display": "Hit Location", "values": ["Head", "Torso"] } }
//!   }
//! }
//! ```

pub mod preset;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A game-specific table of outcomes rolled with a custom command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDieTable {
    /// Label shown next to the drawn outcome.
    pub display: String,
    /// Outcomes, each equally likely. Repeat an entry to weight it.
    #[serde(default)]
    pub values: Vec<String>,
}

/// Image references used when presenting dice results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemImages {
    /// Thumbnail for d6 results.
    #[serde(default)]
    pub d6: String,
    /// Thumbnail for d20 and custom table results.
    #[serde(default)]
    pub d20: String,
}

/// A supported game system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSystem {
    /// Catalog key, e.g. "conan". Taken from the map key when loading.
    #[serde(skip)]
    pub id: String,
    /// Human-readable name.
    pub display: String,
    /// Dice thumbnails.
    #[serde(default)]
    pub images: SystemImages,
    /// Custom dice tables keyed by command name.
    #[serde(default)]
    pub dice: BTreeMap<String, CustomDieTable>,
}

impl GameSystem {
    /// Look up a custom dice table by command name (case-insensitive).
    pub fn table(&self, command: &str) -> MechResult<&CustomDieTable> {
        self.dice
            .get(&command.to_lowercase())
            .ok_or_else(|| MechError::UnknownTable(command.to_string()))
    }

    /// Names of this system's custom dice commands, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        self.dice.keys().map(String::as_str).collect()
    }
}

/// All known game systems, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    systems: BTreeMap<String, GameSystem>,
}

impl GameCatalog {
    /// The catalog of built-in systems.
    pub fn builtin() -> Self {
        Self::from_systems(preset::all())
    }

    /// Build a catalog from a list of systems. Later duplicates win.
    pub fn from_systems(systems: impl IntoIterator<Item = GameSystem>) -> Self {
        let systems = systems
            .into_iter()
            .map(|s| (s.id.to_lowercase(), s))
            .collect();
        Self { systems }
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(source: &str) -> MechResult<Self> {
        let raw: BTreeMap<String, GameSystem> =
            serde_json::from_str(source).map_err(|e| MechError::InvalidCatalog(e.to_string()))?;
        let systems = raw.into_iter().map(|(id, mut system)| {
            system.dice = system
                .dice
                .into_iter()
                .map(|(cmd, table)| (cmd.to_lowercase(), table))
                .collect();
            system.id = id.to_lowercase();
            system
        });
        Ok(Self::from_systems(systems))
    }

    /// Read and parse a JSON catalog file.
    pub fn from_path(path: &Path) -> MechResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Look up a system by identifier (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&GameSystem> {
        self.systems.get(&id.to_lowercase())
    }

    /// Look up a system, failing with [`MechError::UnknownGame`].
    pub fn require(&self, id: &str) -> MechResult<&GameSystem> {
        self.get(id)
            .ok_or_else(|| MechError::UnknownGame(id.to_string()))
    }

    /// Iterate systems in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &GameSystem> {
        self.systems.values()
    }

    /// Number of systems in the catalog.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Returns true if the catalog has no systems.
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// One `id - display` line per system.
    pub fn listing(&self) -> String {
        self.iter()
            .map(|s| format!("{} - {}", s.id, s.display))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "Conan": {
            "display": "Conan",
            "images": { "d6": "d6.png", "d20": "d20.png" },
            "dice": {
                "Hit": { "display": "Hit Location", "values": ["Head", "Torso"] },
                "empty": { "display": "Nothing" }
            }
        },
        "sta": { "display": "Star Trek Adventures" }
    }"#;

    #[test]
    fn parses_json_catalog() {
        let catalog = GameCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);

        let conan = catalog.get("conan").unwrap();
        assert_eq!(conan.id, "conan");
        assert_eq!(conan.images.d20, "d20.png");
        assert_eq!(conan.table("HIT").unwrap().values.len(), 2);
        assert!(conan.table("empty").unwrap().values.is_empty());

        let sta = catalog.get("STA").unwrap();
        assert!(sta.dice.is_empty());
        assert_eq!(sta.images, SystemImages::default());
    }

    #[test]
    fn unknown_lookups() {
        let catalog = GameCatalog::from_json(CATALOG).unwrap();
        assert!(matches!(
            catalog.require("dune"),
            Err(MechError::UnknownGame(_))
        ));
        let sta = catalog.require("sta").unwrap();
        assert!(matches!(sta.table("hit"), Err(MechError::UnknownTable(_))));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            GameCatalog::from_json("{ not json"),
            Err(MechError::InvalidCatalog(_))
        ));
        assert!(matches!(
            GameCatalog::from_json(r#"{ "x": { "images": {} } }"#),
            Err(MechError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn listing_is_sorted_by_id() {
        let catalog = GameCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.listing(), "conan - Conan\nsta - Star Trek Adventures");
    }

    #[test]
    fn builtin_is_not_empty() {
        let catalog = GameCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.get("conan").is_some());
    }
}

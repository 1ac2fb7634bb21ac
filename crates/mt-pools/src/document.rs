//! The per-server pool document.
//!
//! One JSON object per server holds everything: the reserved `"global"`
//! pool, the active game under `"game"`, and one pool per channel keyed by
//! channel id. The whole object is loaded and saved as a unit.
//!
//! Keys that are neither reserved nor pool-shaped (an object with a
//! `momentum` or `threat` member) are kept verbatim in `extra` so that a
//! newer or older writer's data survives a round trip through this one.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::pool::ResourcePool;

/// Reserved key of the server-wide pool.
pub const GLOBAL_KEY: &str = "global";

/// Reserved key of the active game system identifier.
pub const GAME_KEY: &str = "game";

/// All pools and settings stored for one server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuildDocument {
    global: Option<ResourcePool>,
    game: Option<String>,
    channels: BTreeMap<String, ResourcePool>,
    extra: Map<String, Value>,
}

impl GuildDocument {
    /// An empty document, as seen for a server with nothing persisted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted document.
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    /// Serialise for persistence.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// The global pool, if it has been created.
    pub fn global(&self) -> Option<&ResourcePool> {
        self.global.as_ref()
    }

    /// The global pool, created empty on first access.
    pub fn global_mut(&mut self) -> &mut ResourcePool {
        self.global.get_or_insert_with(ResourcePool::new)
    }

    /// The pool for `channel_id`, if it exists.
    pub fn channel(&self, channel_id: &str) -> Option<&ResourcePool> {
        self.channels.get(channel_id)
    }

    /// The pool for `channel_id`, created empty and labelled `name` on
    /// first access. An existing pool keeps its stored name.
    ///
    /// Creating a pool replaces any opaque value kept under the same key.
    pub fn channel_mut(&mut self, channel_id: &str, name: &str) -> &mut ResourcePool {
        // a key lives in either `channels` or `extra`, never both
        if let Some(previous) = self.extra.remove(channel_id) {
            tracing::warn!(scope = %channel_id, %previous, "replacing unreadable scope");
        }
        self.channels
            .entry(channel_id.to_string())
            .or_insert_with(|| ResourcePool::named(name))
    }

    /// Iterate channel pools in channel id order.
    pub fn channels(&self) -> impl Iterator<Item = (&str, &ResourcePool)> {
        self.channels.iter().map(|(id, pool)| (id.as_str(), pool))
    }

    /// Number of channel pools.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Delete one channel's pool.
    pub fn remove_channel(&mut self, channel_id: &str) -> Option<ResourcePool> {
        self.channels.remove(channel_id)
    }

    /// Zero the global pool and delete every channel pool.
    ///
    /// The active game and unrecognised keys are not pools and stay.
    pub fn reset_all(&mut self) {
        self.global_mut().clear();
        self.channels.clear();
    }

    /// The active game system identifier.
    pub fn game(&self) -> Option<&str> {
        self.game.as_deref()
    }

    /// Set the active game system identifier.
    pub fn set_game(&mut self, game: impl Into<String>) {
        self.game = Some(game.into());
    }

    /// Keys this version does not interpret.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    fn from_map(map: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut doc = Self::new();
        for (key, value) in map {
            match key.as_str() {
                GLOBAL_KEY => {
                    if !value.is_null() {
                        doc.global = Some(serde_json::from_value(value)?);
                    }
                }
                GAME_KEY => match value {
                    Value::String(game) => doc.game = Some(game),
                    Value::Null => {}
                    other => {
                        return Err(serde_json::Error::custom(format!(
                            "\"{GAME_KEY}\" must be a string, found {other}"
                        )));
                    }
                },
                _ if value.is_null() => {
                    tracing::debug!(scope = %key, "dropping null scope");
                }
                _ if is_pool_shaped(&value) => {
                    match serde_json::from_value::<ResourcePool>(value.clone()) {
                        Ok(pool) => {
                            doc.channels.insert(key, pool);
                        }
                        Err(e) => {
                            tracing::warn!(scope = %key, error = %e, "keeping unreadable scope as opaque data");
                            doc.extra.insert(key, value);
                        }
                    }
                }
                _ => {
                    tracing::warn!(key = %key, "keeping non-pool key as opaque data");
                    doc.extra.insert(key, value);
                }
            }
        }
        Ok(doc)
    }
}

fn is_pool_shaped(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.contains_key("momentum") || obj.contains_key("threat"))
}

impl Serialize for GuildDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = usize::from(self.global.is_some())
            + usize::from(self.game.is_some())
            + self.channels.len()
            + self.extra.len();
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(global) = &self.global {
            map.serialize_entry(GLOBAL_KEY, global)?;
        }
        if let Some(game) = &self.game {
            map.serialize_entry(GAME_KEY, game)?;
        }
        for (id, pool) in &self.channels {
            map.serialize_entry(id, pool)?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GuildDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_map(map).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORED: &str = r#"{
        "global": {"momentum": 4, "threat": 2},
        "game": "conan",
        "c1": {"momentum": 1, "threat": 1, "name": "general"},
        "c2": {"momentum": 0, "threat": 3, "name": "combat"},
        "schema": 2,
        "notes": {"pinned": true}
    }"#;

    #[test]
    fn empty_document() {
        let doc = GuildDocument::new();
        assert!(doc.global().is_none());
        assert!(doc.game().is_none());
        assert_eq!(doc.channel_count(), 0);
        assert_eq!(doc.to_json().unwrap(), "{}");
    }

    #[test]
    fn parses_scopes_and_reserved_keys() {
        let doc = GuildDocument::from_json(STORED).unwrap();
        assert_eq!(doc.global().unwrap().momentum, 4);
        assert_eq!(doc.game(), Some("conan"));
        assert_eq!(doc.channel_count(), 2);
        assert_eq!(doc.channel("c2").unwrap().threat, 3);
        assert_eq!(doc.channel("c1").unwrap().name.as_deref(), Some("general"));
        assert_eq!(doc.extra().len(), 2);
    }

    #[test]
    fn round_trips_every_key() {
        let doc = GuildDocument::from_json(STORED).unwrap();
        let back: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        let original: Value = serde_json::from_str(STORED).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn global_created_lazily() {
        let mut doc = GuildDocument::new();
        doc.global_mut().momentum = 2;
        assert_eq!(doc.global().unwrap().momentum, 2);
        assert!(doc.global().unwrap().name.is_none());
    }

    #[test]
    fn channel_created_lazily_with_name() {
        let mut doc = GuildDocument::new();
        doc.channel_mut("c9", "tavern").threat = 1;
        let pool = doc.channel("c9").unwrap();
        assert_eq!(pool.name.as_deref(), Some("tavern"));
        assert_eq!(pool.threat, 1);

        // existing pool keeps its name
        doc.channel_mut("c9", "renamed");
        assert_eq!(doc.channel("c9").unwrap().name.as_deref(), Some("tavern"));
    }

    #[test]
    fn reset_all_keeps_game_and_extras() {
        let mut doc = GuildDocument::from_json(STORED).unwrap();
        doc.reset_all();
        let global = doc.global().unwrap();
        assert_eq!((global.momentum, global.threat), (0, 0));
        assert_eq!(doc.channel_count(), 0);
        assert_eq!(doc.game(), Some("conan"));
        assert_eq!(doc.extra().len(), 2);
    }

    #[test]
    fn remove_single_channel() {
        let mut doc = GuildDocument::from_json(STORED).unwrap();
        assert!(doc.remove_channel("c1").is_some());
        assert!(doc.remove_channel("c1").is_none());
        assert!(doc.channel("c2").is_some());
        assert_eq!(doc.global().unwrap().momentum, 4);
    }

    #[test]
    fn null_global_is_treated_as_missing() {
        let doc = GuildDocument::from_json(r#"{"global": null}"#).unwrap();
        assert!(doc.global().is_none());
    }

    #[test]
    fn malformed_reserved_keys_are_errors() {
        assert!(GuildDocument::from_json(r#"{"global": "full"}"#).is_err());
        assert!(GuildDocument::from_json(r#"{"game": 7}"#).is_err());
        assert!(GuildDocument::from_json("[]").is_err());
    }

    #[test]
    fn unreadable_scope_is_preserved() {
        let source = r#"{"c1": {"momentum": 2, "name": 7}}"#;
        let doc = GuildDocument::from_json(source).unwrap();
        assert_eq!(doc.channel_count(), 0);
        assert!(doc.extra().contains_key("c1"));
        let back: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(source).unwrap());
    }

    #[test]
    fn null_scope_is_absent() {
        let doc = GuildDocument::from_json(r#"{"c1": null, "global": {"momentum": 1}}"#).unwrap();
        assert!(doc.channel("c1").is_none());
        assert!(doc.extra().is_empty());
        assert_eq!(doc.to_json().unwrap(), r#"{"global":{"momentum":1,"threat":0}}"#);
    }

    #[test]
    fn recreated_scope_replaces_opaque_value() {
        let mut doc = GuildDocument::from_json(r#"{"c1": {"momentum": 2, "name": 7}}"#).unwrap();
        doc.channel_mut("c1", "general").momentum = 3;
        assert!(doc.extra().is_empty());

        let text = doc.to_json().unwrap();
        assert_eq!(text.matches("\"c1\"").count(), 1);
        let back = GuildDocument::from_json(&text).unwrap();
        assert_eq!(back.channel("c1").unwrap().momentum, 3);
        assert_eq!(back.channel("c1").unwrap().name.as_deref(), Some("general"));
    }

    #[test]
    fn fractional_and_huge_counters_load() {
        let doc = GuildDocument::from_json(
            r#"{"global": {"momentum": 0, "threat": 100000000000000000000},
                "c1": {"momentum": 1.5, "threat": 0, "name": "general"}}"#,
        )
        .unwrap();
        assert_eq!(doc.global().unwrap().threat, i64::MAX);
        assert_eq!(doc.channel("c1").unwrap().momentum, 1);
        assert!(doc.extra().is_empty());
    }
}

//! Momentum and threat pools for 2d20 game tables.
//!
//! Each server keeps one document holding a global pool, one pool per
//! channel, and the active game system. [`PoolManager`] reads, changes, and
//! writes that document through a [`PoolStore`]; [`GameTable`] routes user
//! commands to the pools or to the dice engine in `mt_mechanics`.

pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod manager;
pub mod pool;
pub mod report;
pub mod store;
pub mod table;

pub use command::{AdjustCommand, AdjustOp, PoolTarget, StatusOption};
pub use config::TableConfig;
pub use document::GuildDocument;
pub use error::{PoolError, PoolResult, StoreError};
pub use manager::{ChannelContext, PoolManager};
pub use pool::{PoolField, ResourcePool};
pub use report::{Report, ReportField};
pub use store::{FileStore, MemoryStore, PoolStore};
pub use table::{GameTable, Response};

pub mod exec;
pub mod games;
pub mod repl;

use std::sync::Arc;

use mt_mechanics::GameCatalog;
use mt_pools::{ChannelContext, FileStore, GameTable, TableConfig};

use crate::TableArgs;

/// Load the catalog named by `--catalog`, or the built-in one.
fn load_catalog(args: &TableArgs) -> Result<GameCatalog, String> {
    match &args.catalog {
        Some(path) => GameCatalog::from_path(path)
            .map_err(|e| format!("failed to load catalog {}: {e}", path.display())),
        None => Ok(GameCatalog::builtin()),
    }
}

/// Open a game table over the file store in `--store`.
fn open_table(args: &TableArgs) -> Result<GameTable<FileStore>, String> {
    let catalog = load_catalog(args)?;
    let mut config = TableConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    tracing::debug!(store = %args.store.display(), systems = catalog.len(), "opening table");
    Ok(GameTable::new(
        Arc::new(catalog),
        FileStore::new(&args.store),
        config,
    ))
}

/// The caller's server, channel and identity.
fn context(args: &TableArgs) -> ChannelContext {
    let name = args.channel_name.as_deref().unwrap_or(&args.channel);
    ChannelContext::new(&args.server, &args.channel)
        .with_channel_name(name)
        .with_user(&args.user)
        .with_admin(args.admin)
}

//! The pool manager: read-modify-write over one document per server.
//!
//! Every public operation is one load, an in-memory change, and one save.
//! Nothing is held between the load and the save, so two operations on the
//! same server that overlap can lose one update (the later save wins). Each
//! save still writes a complete, well-formed document. Deployments that
//! need stronger guarantees must serialise calls per server id.
//!
//! A failed load or save aborts the operation; nothing partial is written.

use std::sync::Arc;

use crate::command::{AdjustCommand, PoolTarget, StatusOption};
use crate::config::TableConfig;
use crate::document::GuildDocument;
use crate::error::{PoolError, PoolResult};
use crate::pool::PoolField;
use crate::report::Report;
use crate::store::PoolStore;

/// Who is asking, and from where.
#[derive(Debug, Clone, Default)]
pub struct ChannelContext {
    /// Server (guild) identifier; the document key.
    pub server_id: String,
    /// Channel identifier; the channel scope key.
    pub channel_id: String,
    /// Channel display name, used to label new channel pools.
    pub channel_name: String,
    /// Display name of the invoking user.
    pub user_name: String,
    /// Whether the invoking user administers the server.
    pub is_admin: bool,
}

impl ChannelContext {
    /// A context for `server_id`/`channel_id` with the channel id doubling
    /// as its name.
    pub fn new(server_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        let channel_id = channel_id.into();
        Self {
            server_id: server_id.into(),
            channel_name: channel_id.clone(),
            channel_id,
            ..Self::default()
        }
    }

    /// Set the channel display name.
    pub fn with_channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = name.into();
        self
    }

    /// Set the invoking user's name.
    pub fn with_user(mut self, name: impl Into<String>) -> Self {
        self.user_name = name.into();
        self
    }

    /// Mark the invoking user as an administrator.
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}

/// Owns the load/mutate/save protocol over a [`PoolStore`].
pub struct PoolManager<S> {
    store: Arc<S>,
    momentum_max: i64,
}

impl<S> Clone for PoolManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            momentum_max: self.momentum_max,
        }
    }
}

impl<S: PoolStore> PoolManager<S> {
    /// A manager with the default momentum cap.
    pub fn new(store: S) -> Self {
        Self::with_config(store, &TableConfig::default())
    }

    /// A manager using the limits from `config`.
    pub fn with_config(store: S, config: &TableConfig) -> Self {
        Self {
            store: Arc::new(store),
            momentum_max: config.momentum_max,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load a server's document; an absent document loads as empty.
    pub async fn load(&self, server_id: &str) -> PoolResult<GuildDocument> {
        let Some(text) = self.store.get(server_id).await? else {
            tracing::debug!(server = %server_id, "no stored document");
            return Ok(GuildDocument::new());
        };
        tracing::debug!(server = %server_id, bytes = text.len(), "loaded document");
        GuildDocument::from_json(&text).map_err(|source| PoolError::CorruptDocument {
            server: server_id.to_string(),
            source,
        })
    }

    /// Persist a server's whole document.
    pub async fn save(&self, server_id: &str, doc: &GuildDocument) -> PoolResult<()> {
        let text = doc.to_json().map_err(|source| PoolError::EncodeDocument {
            server: server_id.to_string(),
            source,
        })?;
        tracing::debug!(server = %server_id, bytes = text.len(), "saving document");
        self.store.set(server_id, text).await?;
        Ok(())
    }

    /// Report all pools, optionally resetting first.
    ///
    /// - `reset`: zero the global pool and delete every channel pool.
    /// - `reset here`: delete only the invoking channel's pool.
    /// - `here`: report only the invoking channel's pool next to global.
    ///
    /// Reset is not restricted to administrators; `is_admin` is only logged.
    pub async fn status(&self, ctx: &ChannelContext, option: StatusOption) -> PoolResult<Report> {
        let mut doc = self.load(&ctx.server_id).await?;
        doc.global_mut();

        if option.reset {
            if option.here {
                doc.remove_channel(&ctx.channel_id);
            } else {
                doc.reset_all();
            }
            tracing::info!(
                server = %ctx.server_id,
                channel = %ctx.channel_id,
                here = option.here,
                is_admin = ctx.is_admin,
                "pools reset"
            );
        }

        let global = doc.global_mut().summary();
        let mut report = Report::new("Momentum and Threat Pools").field("Global", global);
        for (id, pool) in doc.channels() {
            if option.here && !option.reset && id != ctx.channel_id {
                continue;
            }
            let label = pool.name.as_deref().unwrap_or(id);
            report = report.field(format!("#{label}"), pool.summary());
        }

        self.save(&ctx.server_id, &doc).await?;
        Ok(report)
    }

    /// Apply `command` to one field and report the global and channel values.
    ///
    /// The invoking channel's pool is created if missing even when the
    /// command targets the global pool. Only the global pool is clamped.
    pub async fn adjust(
        &self,
        ctx: &ChannelContext,
        field: PoolField,
        command: &AdjustCommand,
    ) -> PoolResult<Report> {
        let mut doc = self.load(&ctx.server_id).await?;
        doc.global_mut();
        doc.channel_mut(&ctx.channel_id, &ctx.channel_name);

        let pool = match command.target {
            PoolTarget::Global => doc.global_mut(),
            PoolTarget::Channel => doc.channel_mut(&ctx.channel_id, &ctx.channel_name),
        };
        let value = pool.get_mut(field);
        *value = command.apply(*value);

        let global = doc.global_mut();
        let clamped = field.clamp_global(global.get(field), self.momentum_max);
        *global.get_mut(field) = clamped;

        let channel_value = doc
            .channel_mut(&ctx.channel_id, &ctx.channel_name)
            .get(field);

        if command.is_mutation() {
            tracing::info!(
                server = %ctx.server_id,
                channel = %ctx.channel_id,
                %field,
                op = ?command.op,
                target = ?command.target,
                global = clamped,
                channel_value,
                "pool adjusted"
            );
        }

        let report = Report::new(field.report_title())
            .with_color(field.report_color())
            .inline_field("Global", clamped)
            .inline_field(format!("#{}", ctx.channel_name), channel_value);

        self.save(&ctx.server_id, &doc).await?;
        Ok(report)
    }

    /// Adjust momentum.
    pub async fn adjust_momentum(
        &self,
        ctx: &ChannelContext,
        command: &AdjustCommand,
    ) -> PoolResult<Report> {
        self.adjust(ctx, PoolField::Momentum, command).await
    }

    /// Adjust threat.
    pub async fn adjust_threat(
        &self,
        ctx: &ChannelContext,
        command: &AdjustCommand,
    ) -> PoolResult<Report> {
        self.adjust(ctx, PoolField::Threat, command).await
    }

    /// The game system identifier stored for a server.
    pub async fn active_game(&self, server_id: &str) -> PoolResult<Option<String>> {
        let doc = self.load(server_id).await?;
        Ok(doc.game().map(str::to_string))
    }

    /// Store the game system identifier for a server.
    pub async fn set_game(&self, server_id: &str, game: &str) -> PoolResult<()> {
        let mut doc = self.load(server_id).await?;
        doc.set_game(game);
        self.save(server_id, &doc).await?;
        tracing::info!(server = %server_id, %game, "game set");
        Ok(())
    }
}

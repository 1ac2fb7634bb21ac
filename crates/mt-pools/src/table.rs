//! Command routing for one game table.
//!
//! `GameTable` takes a line of user input (`!4d6`, `!m add 2 here`,
//! `!game dune`, ...) and dispatches it to the dice engine, the pool
//! manager, or the active system's custom tables.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use mt_mechanics::{
    DiceRequest, Die, GameCatalog, GameSystem, MechError, SuccessParams, roll_custom, roll_d6,
    roll_d20,
};

use crate::command::{AdjustCommand, StatusOption};
use crate::config::TableConfig;
use crate::error::PoolResult;
use crate::manager::{ChannelContext, PoolManager};
use crate::pool::PoolField;
use crate::report::Report;
use crate::store::PoolStore;

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    /// A plain text reply.
    Text(String),
    /// A structured report.
    Report(Report),
}

impl Response {
    /// The report, if this is one.
    pub fn as_report(&self) -> Option<&Report> {
        match self {
            Self::Report(report) => Some(report),
            Self::Text(_) => None,
        }
    }

    /// The text, if this is plain text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Report(_) => None,
        }
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Report(report) => write!(f, "{report}"),
        }
    }
}

/// A command router over a catalog, a pool manager, and a dice RNG.
pub struct GameTable<S> {
    catalog: Arc<GameCatalog>,
    pools: PoolManager<S>,
    rng: StdRng,
    config: TableConfig,
}

impl<S: PoolStore> GameTable<S> {
    /// Create a table. Dice are seeded from `config.seed` when set.
    pub fn new(catalog: Arc<GameCatalog>, store: S, config: TableConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let pools = PoolManager::with_config(store, &config);
        Self {
            catalog,
            pools,
            rng,
            config,
        }
    }

    /// The game catalog.
    pub fn catalog(&self) -> &GameCatalog {
        &self.catalog
    }

    /// The pool manager.
    pub fn pools(&self) -> &PoolManager<S> {
        &self.pools
    }

    /// Process one line of input. A leading `!` is optional.
    pub async fn process(&mut self, ctx: &ChannelContext, input: &str) -> PoolResult<Response> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_prefix('!').unwrap_or(trimmed).trim_start();
        let mut tokens = trimmed.split_whitespace();
        let Some(head) = tokens.next() else {
            return Ok(Response::Text(String::new()));
        };
        let args: Vec<&str> = tokens.collect();
        let option = args.join(" ").to_lowercase();
        let cmd = head.to_lowercase();

        if let Some(request) = DiceRequest::parse(&cmd) {
            return self.do_dice(ctx, request?, &args).await;
        }

        match cmd.as_str() {
            "pool" => {
                let report = self.pools.status(ctx, StatusOption::parse(&option)).await?;
                Ok(Response::Report(report))
            }
            "m" => self.do_adjust(ctx, PoolField::Momentum, &option).await,
            "t" => self.do_adjust(ctx, PoolField::Threat, &option).await,
            "game" => self.do_game(ctx, &option).await,
            _ => self.do_custom(ctx, &cmd).await,
        }
    }

    async fn do_dice(
        &mut self,
        ctx: &ChannelContext,
        request: DiceRequest,
        args: &[&str],
    ) -> PoolResult<Response> {
        if request.count > self.config.max_dice {
            return Err(MechError::TooManyDice {
                count: request.count,
                max: self.config.max_dice,
            }
            .into());
        }
        let Some(id) = self.pools.active_game(&ctx.server_id).await? else {
            return Ok(Response::Report(Report::game_not_set()));
        };
        let system = self.catalog.require(&id)?;

        let report = match request.die {
            Die::D6 => {
                let roll = roll_d6(request.count, &mut self.rng)?;
                tracing::debug!(server = %ctx.server_id, %roll, "d6 rolled");
                Report::effect_roll(&ctx.user_name, system, &roll)
            }
            Die::D20 => {
                let params = SuccessParams::from_args(args);
                let roll = roll_d20(request.count, params, &mut self.rng)?;
                tracing::debug!(server = %ctx.server_id, %roll, "d20 rolled");
                Report::success_roll(&ctx.user_name, system, &roll)
            }
        };
        Ok(Response::Report(report))
    }

    async fn do_adjust(
        &self,
        ctx: &ChannelContext,
        field: PoolField,
        option: &str,
    ) -> PoolResult<Response> {
        let command = AdjustCommand::parse(option);
        let report = self.pools.adjust(ctx, field, &command).await?;
        Ok(Response::Report(report))
    }

    async fn do_game(&self, ctx: &ChannelContext, option: &str) -> PoolResult<Response> {
        let current = self.pools.active_game(&ctx.server_id).await?;
        let current = current.as_deref().and_then(|id| self.catalog.get(id));

        let text = match (option, current) {
            ("", Some(system)) => format!("Game is set to {}", system.display),
            ("", None) => format!("Game not set!\nSupported Games\n{}", self.catalog.listing()),
            ("list", _) => self.catalog.listing(),
            ("help", Some(system)) => custom_commands(system),
            (id, _) => match self.catalog.get(id) {
                Some(system) => {
                    self.pools.set_game(&ctx.server_id, &system.id).await?;
                    format!("Game is now set to {}", system.display)
                }
                None => format!("'{id}' not supported!\n{}", self.catalog.listing()),
            },
        };
        Ok(Response::Text(text))
    }

    async fn do_custom(&mut self, ctx: &ChannelContext, cmd: &str) -> PoolResult<Response> {
        let Some(id) = self.pools.active_game(&ctx.server_id).await? else {
            return Ok(Response::Report(Report::game_not_set()));
        };
        let system = self.catalog.require(&id)?;
        let Ok(table) = system.table(cmd) else {
            return Ok(Response::Report(Report::unknown_custom_command(cmd, system)));
        };
        let roll = roll_custom(cmd, table, &mut self.rng)?;
        tracing::debug!(server = %ctx.server_id, %roll, "custom table drawn");
        Ok(Response::Report(Report::custom_roll(
            &ctx.user_name,
            system,
            &roll,
        )))
    }
}

fn custom_commands(system: &GameSystem) -> String {
    if system.dice.is_empty() {
        return format!("No custom commands available for {}", system.display);
    }
    system
        .dice
        .iter()
        .map(|(cmd, table)| format!("!{cmd} - {}", table.display))
        .collect::<Vec<_>>()
        .join("\n")
}

//! Configuration for a game table.

/// Configuration for a [`GameTable`](crate::GameTable) and its pools.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// RNG seed for reproducible dice. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Largest number of dice accepted in one roll.
    pub max_dice: u32,
    /// Upper bound of the global momentum pool.
    pub momentum_max: i64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_dice: 100,
            momentum_max: 6,
        }
    }
}

impl TableConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the dice limit (at least 1).
    pub fn with_max_dice(mut self, max_dice: u32) -> Self {
        self.max_dice = max_dice.max(1);
        self
    }

    /// Set the global momentum cap (at least 0).
    pub fn with_momentum_max(mut self, momentum_max: i64) -> Self {
        self.momentum_max = momentum_max.max(0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = TableConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.max_dice, 100);
        assert_eq!(cfg.momentum_max, 6);
    }

    #[test]
    fn builder_methods() {
        let cfg = TableConfig::default()
            .with_seed(123)
            .with_max_dice(10)
            .with_momentum_max(8);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.max_dice, 10);
        assert_eq!(cfg.momentum_max, 8);
    }

    #[test]
    fn limits_clamped() {
        let cfg = TableConfig::default()
            .with_max_dice(0)
            .with_momentum_max(-3);
        assert_eq!(cfg.max_dice, 1);
        assert_eq!(cfg.momentum_max, 0);
    }
}

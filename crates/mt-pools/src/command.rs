//! Typed pool options parsed from free-form trailing text.
//!
//! Parsing never fails: unknown words are ignored and a missing or
//! non-numeric amount simply means "no change".

/// Options of a status request: `[reset] [here]`, any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusOption {
    /// Clear pools before reporting.
    pub reset: bool,
    /// Limit the request to the invoking channel.
    pub here: bool,
}

impl StatusOption {
    /// Parse up to two case-insensitive tokens.
    pub fn parse(option: &str) -> Self {
        let mut parsed = Self::default();
        for token in option.split_whitespace().take(2) {
            match token.to_lowercase().as_str() {
                "reset" => parsed.reset = true,
                "here" => parsed.here = true,
                _ => {}
            }
        }
        parsed
    }
}

/// The arithmetic of an adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjustOp {
    /// Add the amount.
    Add,
    /// Subtract the amount.
    Sub,
    /// Replace the value with the amount.
    Set,
    /// Anything else; applying it changes nothing.
    Unrecognized(String),
}

impl AdjustOp {
    /// Parse an operation word (case-insensitive).
    pub fn parse(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "add" => Self::Add,
            "sub" => Self::Sub,
            "set" => Self::Set,
            _ => Self::Unrecognized(token.to_string()),
        }
    }
}

/// Which pool an adjustment writes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PoolTarget {
    /// The server-wide pool.
    #[default]
    Global,
    /// The invoking channel's pool.
    Channel,
}

/// An adjustment request: `<add|sub|set> <amount> [here]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustCommand {
    /// What to do.
    pub op: AdjustOp,
    /// By how much; `None` when absent or not a number.
    pub amount: Option<i64>,
    /// Which pool to change.
    pub target: PoolTarget,
}

impl AdjustCommand {
    /// Parse the positional tokens. Only a third token of `here` selects
    /// the channel pool.
    pub fn parse(option: &str) -> Self {
        let tokens: Vec<&str> = option.split_whitespace().collect();
        let op = AdjustOp::parse(tokens.first().copied().unwrap_or(""));
        let amount = tokens.get(1).and_then(|t| parse_amount(t));
        let target = match tokens.get(2) {
            Some(t) if t.eq_ignore_ascii_case("here") => PoolTarget::Channel,
            _ => PoolTarget::Global,
        };
        Self { op, amount, target }
    }

    /// The value after applying this command to `current`.
    pub fn apply(&self, current: i64) -> i64 {
        let Some(amount) = self.amount else {
            return current;
        };
        match self.op {
            AdjustOp::Add => current.saturating_add(amount),
            AdjustOp::Sub => current.saturating_sub(amount),
            AdjustOp::Set => amount,
            AdjustOp::Unrecognized(_) => current,
        }
    }

    /// Whether applying this command can change a value.
    pub fn is_mutation(&self) -> bool {
        self.amount.is_some() && !matches!(self.op, AdjustOp::Unrecognized(_))
    }
}

/// Parse a leading integer: optional sign, then digits, trailing junk
/// ignored (`"4abc"` is 4). Returns `None` without a leading digit or on
/// overflow.
pub fn parse_amount(token: &str) -> Option<i64> {
    let token = token.trim();
    let (sign_len, negative) = match token.as_bytes().first() {
        Some(b'-') => (1, true),
        Some(b'+') => (1, false),
        _ => (0, false),
    };
    let digits: &str = {
        let rest = &token[sign_len..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

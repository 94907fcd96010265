use crate::COOLDOWN_MAX;
use crate::COOLDOWN_MIN;
use crate::OFFSET_MAX;
use crate::OFFSET_MIN;

/// A configuration value outside its allowed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    Cooldown(u64),
    Offset(u64),
    Position(u8),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cooldown(s) => write!(
                f,
                "cooldown {}s outside {}..={}s",
                s, COOLDOWN_MIN, COOLDOWN_MAX
            ),
            Self::Offset(n) => write!(f, "offset {} outside {}..={}", n, OFFSET_MIN, OFFSET_MAX),
            Self::Position(p) => write!(f, "position {} is neither 1 nor 2", p),
        }
    }
}

impl std::error::Error for ConfigError {}

use super::error::ConfigError;
use crate::COOLDOWN_DEFAULT;
use crate::COOLDOWN_MAX;
use crate::COOLDOWN_MIN;
use crate::ChatId;
use crate::OFFSET_DEFAULT;
use crate::OFFSET_MAX;
use crate::OFFSET_MIN;
use crate::Position;
use crate::RoundNo;
use crate::UserId;
use crate::predict::Policy;
use std::collections::BTreeMap;
use std::path::Path;

/// Operator-tunable parameters of the tracker.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds between two opened predictions.
    pub cooldown: u64,
    /// Rounds ahead for the first-suit policy.
    pub offset: RoundNo,
    pub policy: Policy,
    /// Card of the first group read by the first-suit policy.
    pub position: Position,
    /// Fallback chat for announcements.
    pub destination: ChatId,
    /// Source chat → destination chat overrides.
    pub redirects: BTreeMap<ChatId, ChatId>,
    /// Tag a message must carry to open a prediction.
    pub trigger: Option<String>,
    /// Whether rounds without any marker may open predictions.
    pub eager: bool,
    /// Senders allowed to run administrative commands.
    pub admins: Vec<UserId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cooldown: COOLDOWN_DEFAULT,
            offset: OFFSET_DEFAULT,
            policy: Policy::default(),
            position: 1,
            destination: 0,
            redirects: BTreeMap::new(),
            trigger: None,
            eager: true,
            admins: Vec::new(),
        }
    }
}

impl Config {
    /// Reads a JSON file and validates it.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str::<Self>(&text)?;
        config.validate()?;
        Ok(config)
    }
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_cooldown(self.cooldown)?;
        Self::check_offset(self.offset)?;
        Self::check_position(self.position)?;
        Ok(())
    }
    pub fn check_cooldown(seconds: u64) -> Result<u64, ConfigError> {
        (COOLDOWN_MIN..=COOLDOWN_MAX)
            .contains(&seconds)
            .then_some(seconds)
            .ok_or(ConfigError::Cooldown(seconds))
    }
    pub fn check_offset(offset: RoundNo) -> Result<RoundNo, ConfigError> {
        (OFFSET_MIN..=OFFSET_MAX)
            .contains(&offset)
            .then_some(offset)
            .ok_or(ConfigError::Offset(offset))
    }
    pub fn check_position(position: Position) -> Result<Position, ConfigError> {
        matches!(position, 1 | 2)
            .then_some(position)
            .ok_or(ConfigError::Position(position))
    }
    pub fn is_admin(&self, user: UserId) -> bool {
        self.admins.contains(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cooldown, 30);
        assert_eq!(config.offset, 2);
        assert_eq!(config.policy, Policy::MissingSuit);
    }

    #[test]
    fn ranges() {
        assert_eq!(Config::check_cooldown(29), Err(ConfigError::Cooldown(29)));
        assert_eq!(Config::check_cooldown(600), Ok(600));
        assert_eq!(Config::check_cooldown(601), Err(ConfigError::Cooldown(601)));
        assert_eq!(Config::check_offset(0), Err(ConfigError::Offset(0)));
        assert_eq!(Config::check_offset(50), Ok(50));
        assert_eq!(Config::check_position(3), Err(ConfigError::Position(3)));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"policy":"first-suit","redirects":{"-100":-200}}"#).unwrap();
        assert_eq!(config.policy, Policy::FirstSuit);
        assert_eq!(config.redirects.get(&-100), Some(&-200));
        assert_eq!(config.cooldown, 30);
    }

    #[test]
    fn load_rejects_out_of_range() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cooldown": 5}}"#).unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{"cooldown": 90, "admins": [7], "trigger": "#R"}}"##).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.cooldown, 90);
        assert!(config.is_admin(7));
        assert!(!config.is_admin(8));
        assert_eq!(config.trigger.as_deref(), Some("#R"));
    }
}

use crate::ChatId;
use crate::Position;
use crate::RoundNo;
use crate::predict::Policy;
use crate::tracker::Tracker;
use clap::Parser;

/// Operator commands typed in chat as `/name[@bot] args...`.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(about = "tracker administration", disable_help_subcommand = true)]
pub enum Command {
    #[command(about = "Forget all predictions, digests, drafts and redirects")]
    Reset,
    #[command(about = "Show or set the seconds between predictions")]
    Cooldown { seconds: Option<u64> },
    #[command(about = "Show or set the first-suit offset")]
    Offset { rounds: Option<RoundNo> },
    #[command(about = "Set the card position read by the first-suit policy")]
    Cos {
        #[arg(required = true)]
        position: Position,
    },
    #[command(about = "Show or set the suit policy")]
    Policy { policy: Option<Policy> },
    #[command(about = "Route announcements triggered from one chat to another")]
    Redirect {
        #[arg(required = true, allow_negative_numbers = true)]
        source: ChatId,
        #[arg(required = true, allow_negative_numbers = true)]
        target: ChatId,
    },
    #[command(about = "Summarize configuration and pending predictions")]
    Status,
}

impl Command {
    /// `None` when `text` is not a slash command at all.
    pub fn read(text: &str) -> Option<Result<Self, clap::Error>> {
        let body = text.trim().strip_prefix('/')?;
        let mut words = body.split_whitespace();
        let head = words.next()?;
        let name = head.split_once('@').map_or(head, |(name, _)| name);
        let args = std::iter::once(String::from("/"))
            .chain(std::iter::once(name.to_lowercase()))
            .chain(words.map(String::from));
        Some(Self::try_parse_from(args))
    }

    /// Runs the command and returns the reply for the operator.
    pub fn apply(self, tracker: &mut Tracker) -> String {
        match self {
            Self::Reset => {
                tracker.reset();
                String::from("reset: predictions, digests and cooldown cleared")
            }
            Self::Cooldown { seconds: None } => {
                format!("cooldown: {}s", tracker.config().cooldown)
            }
            Self::Cooldown {
                seconds: Some(seconds),
            } => match tracker.set_cooldown(seconds) {
                Ok(s) => format!("cooldown set to {}s", s),
                Err(e) => e.to_string(),
            },
            Self::Offset { rounds: None } => format!("offset: {}", tracker.config().offset),
            Self::Offset {
                rounds: Some(rounds),
            } => match tracker.set_offset(rounds) {
                Ok(n) => format!("offset set to {}", n),
                Err(e) => e.to_string(),
            },
            Self::Cos { position } => match tracker.set_position(position) {
                Ok(p) => format!("position set to {}", p),
                Err(e) => e.to_string(),
            },
            Self::Policy { policy: None } => format!("policy: {}", tracker.config().policy),
            Self::Policy {
                policy: Some(policy),
            } => {
                tracker.set_policy(policy);
                format!("policy set to {}", policy)
            }
            Self::Redirect { source, target } => {
                tracker.redirect(source, target);
                format!("redirect {} → {}", source, target)
            }
            Self::Status => Self::status(tracker),
        }
    }

    fn status(tracker: &Tracker) -> String {
        let config = tracker.config();
        let mut lines = vec![
            format!("policy: {}", config.policy),
            format!("offset: {}", config.offset),
            format!("position: {}", config.position),
            format!("cooldown: {}s", config.cooldown),
            format!("destination: {}", config.destination),
        ];
        lines.extend(
            config
                .redirects
                .iter()
                .map(|(source, target)| format!("redirect: {} → {}", source, target)),
        );
        lines.push(format!("drafts: {}", tracker.drafts()));
        lines.push(format!("pending: {}", tracker.pending().count()));
        lines.extend(tracker.pending().map(|p| p.text()));
        lines.join("\n")
    }
}

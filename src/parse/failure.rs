/// Reasons a message does not describe an actionable round.
///
/// Neither is an error worth surfacing: the message is dropped and the
/// tracker moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    NoRoundNumber,
    NoGroups,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRoundNumber => write!(f, "no round number tag"),
            Self::NoGroups => write!(f, "no parenthesized card groups"),
        }
    }
}

impl std::error::Error for ParseFailure {}

use crate::RoundNo;

/// Lifecycle of a prediction. Leaves `Pending` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "status", content = "offset", rename_all = "lowercase")]
pub enum Status {
    Pending,
    /// Won at the given offset past the target round.
    Won(RoundNo),
    Lost,
}

impl Status {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
    /// Marker shown at the end of the announcement line.
    pub fn marker(&self) -> String {
        match self {
            Self::Pending => String::from("⏳"),
            Self::Won(offset) => format!("✅{}\u{FE0F}\u{20E3}", offset),
            Self::Lost => String::from("❌"),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Won(offset) => write!(f, "won at +{}", offset),
            Self::Lost => write!(f, "lost"),
        }
    }
}

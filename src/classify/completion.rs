/// Void or tie rounds. Never predicted on, never verified against.
const EXCLUSION: &[&str] = &["#X"];
/// The round is still being dealt; the channel will edit this message.
const PENDING: &[&str] = &["⏰", "▶", "🕐", "➡"];
/// The round is settled. Both markers mean the same thing.
const COMPLETE: &[&str] = &["✅", "🔰"];

/// How far along a round message is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Completion {
    /// Carries the exclusion tag.
    Excluded,
    /// Carries a progress marker and no completion marker.
    Provisional,
    /// Carries a completion marker, whatever else it carries.
    Finalized,
    /// Carries no marker at all.
    Unmarked,
}

impl Completion {
    pub fn is_finalized(&self) -> bool {
        matches!(self, Self::Finalized)
    }
    /// Whether a prediction may be opened from this round. Unmarked rounds
    /// qualify only when `eager` is on.
    pub fn can_open(&self, eager: bool) -> bool {
        match self {
            Self::Finalized => true,
            Self::Unmarked => eager,
            Self::Excluded | Self::Provisional => false,
        }
    }
    /// Only finalized rounds settle predictions.
    pub fn can_verify(&self) -> bool {
        self.is_finalized()
    }
}

impl From<&str> for Completion {
    fn from(text: &str) -> Self {
        let has = |markers: &[&str]| markers.iter().any(|m| text.contains(m));
        if has(EXCLUSION) {
            Self::Excluded
        } else if has(COMPLETE) {
            Self::Finalized
        } else if has(PENDING) {
            Self::Provisional
        } else {
            Self::Unmarked
        }
    }
}

impl std::fmt::Display for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Excluded => write!(f, "excluded"),
            Self::Provisional => write!(f, "provisional"),
            Self::Finalized => write!(f, "finalized"),
            Self::Unmarked => write!(f, "unmarked"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_markers_are_interchangeable() {
        assert_eq!(Completion::from("#N1 ✅(♠️)"), Completion::Finalized);
        assert_eq!(Completion::from("#N1 (♠️) 🔰"), Completion::Finalized);
    }

    #[test]
    fn completion_beats_progress() {
        assert_eq!(Completion::from("#N1 ⏰ (♠️) ✅"), Completion::Finalized);
        assert_eq!(Completion::from("#N1 ▶️ (♠️) 🔰"), Completion::Finalized);
    }

    #[test]
    fn progress_without_completion_is_provisional() {
        assert_eq!(Completion::from("#N1 ⏰(♠️)"), Completion::Provisional);
        assert_eq!(Completion::from("#N1 ▶️ (♠️)"), Completion::Provisional);
        assert_eq!(Completion::from("#N1 🕐 (♠️)"), Completion::Provisional);
        assert_eq!(Completion::from("#N1 ➡️ (♠️)"), Completion::Provisional);
    }

    #[test]
    fn exclusion_wins_over_everything() {
        assert_eq!(Completion::from("#N1 ✅ (♠️) #X"), Completion::Excluded);
        assert_eq!(Completion::from("#N1 ⏰ (♠️) #X"), Completion::Excluded);
    }

    #[test]
    fn no_markers_is_unmarked() {
        let completion = Completion::from("#N100 (♠️♥️) (♠️♣️)");
        assert_eq!(completion, Completion::Unmarked);
        assert!(completion.can_open(true));
        assert!(!completion.can_open(false));
        assert!(!completion.can_verify());
    }

    #[test]
    fn only_finalized_verifies() {
        assert!(Completion::Finalized.can_verify());
        assert!(!Completion::Provisional.can_verify());
        assert!(!Completion::Excluded.can_verify());
        assert!(!Completion::Excluded.can_open(true));
        assert!(!Completion::Provisional.can_open(true));
    }
}

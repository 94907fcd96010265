use crate::ChatId;
use crate::MessageId;
use crate::RoundNo;

/// A new announcement to send.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Post {
    pub channel: ChatId,
    pub target: RoundNo,
    pub text: String,
}

/// A replacement for an announcement already sent.
///
/// `message` is `None` when the announcement delivery never reported an id; the
/// transport then has nothing to edit and may post `text` instead.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Edit {
    pub channel: ChatId,
    pub message: Option<MessageId>,
    pub target: RoundNo,
    pub text: String,
}

/// Everything one message caused.
///
/// `expired` holds predictions whose window closed without a deciding
/// round; they are settled as lost and edited like any resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Decision {
    pub opened: Option<Post>,
    pub resolved: Option<Edit>,
    pub expired: Vec<Edit>,
}

impl Decision {
    pub fn is_empty(&self) -> bool {
        self.opened.is_none() && self.resolved.is_none() && self.expired.is_empty()
    }
    /// Every edit this message calls for, resolution first.
    pub fn edits(&self) -> impl Iterator<Item = &Edit> {
        self.resolved.iter().chain(self.expired.iter())
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let parts = self
            .opened
            .iter()
            .map(|post| format!("post {} → {}", post.text, post.channel))
            .chain(
                self.edits()
                    .map(|edit| format!("edit {} → {}", edit.text, edit.channel)),
            )
            .collect::<Vec<_>>();
        match parts.is_empty() {
            true => write!(f, "-"),
            false => write!(f, "{}", parts.join("; ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(target: RoundNo, text: &str) -> Edit {
        Edit {
            channel: -1,
            message: None,
            target,
            text: text.to_string(),
        }
    }

    #[test]
    fn expired_edits_count() {
        let decision = Decision {
            expired: vec![edit(7, "🔵7🔵:♠️ statut :❌")],
            ..Decision::default()
        };
        assert!(!decision.is_empty());
        assert_eq!(decision.edits().count(), 1);
        assert_eq!(decision.to_string(), "edit 🔵7🔵:♠️ statut :❌ → -1");
    }

    #[test]
    fn resolution_comes_first() {
        let decision = Decision {
            opened: None,
            resolved: Some(edit(9, "won")),
            expired: vec![edit(4, "lost")],
        };
        let order = decision.edits().map(|e| e.target).collect::<Vec<_>>();
        assert_eq!(order, vec![9, 4]);
        assert_eq!(Decision::default().to_string(), "-");
    }
}

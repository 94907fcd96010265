use super::status::Status;
use crate::ChatId;
use crate::MessageId;
use crate::RoundNo;
use crate::cards::Suit;
use std::time::SystemTime;

/// A call that `suit` will dominate round `target`.
///
/// Keyed by `target` in the [`Store`](super::Store). `checked` records how far
/// past the target verification has already looked and never decreases.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Prediction {
    target: RoundNo,
    suit: Suit,
    source: RoundNo,
    status: Status,
    checked: RoundNo,
    created: SystemTime,
    channel: ChatId,
    receipt: Option<MessageId>,
}

impl Prediction {
    pub fn new(
        target: RoundNo,
        suit: Suit,
        source: RoundNo,
        channel: ChatId,
        created: SystemTime,
    ) -> Self {
        Self {
            target,
            suit,
            source,
            status: Status::Pending,
            checked: 0,
            created,
            channel,
            receipt: None,
        }
    }
    pub fn target(&self) -> RoundNo {
        self.target
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn source(&self) -> RoundNo {
        self.source
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn checked(&self) -> RoundNo {
        self.checked
    }
    pub fn created(&self) -> SystemTime {
        self.created
    }
    /// Destination chat the announcement was routed to.
    pub fn channel(&self) -> ChatId {
        self.channel
    }
    /// Message id of the delivered announcement, once known.
    pub fn receipt(&self) -> Option<MessageId> {
        self.receipt
    }
    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }
    /// Announcement line for the current status.
    pub fn text(&self) -> String {
        format!(
            "🔵{}🔵:{} statut :{}",
            self.target,
            self.suit.glyph(),
            self.status.marker()
        )
    }
}

impl Prediction {
    pub(crate) fn bind(&mut self, message: MessageId) {
        self.receipt = Some(message);
    }
    /// Records a non-decisive look at `offset` rounds past the target.
    pub(crate) fn advance(&mut self, offset: RoundNo) {
        debug_assert!(self.is_pending());
        self.checked = self.checked.max(offset);
    }
    /// Leaves `Pending` for good.
    pub(crate) fn settle(mut self, status: Status, offset: RoundNo) -> Self {
        debug_assert!(self.is_pending());
        debug_assert!(!status.is_pending());
        self.advance(offset);
        self.status = status;
        self
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "#{} {} from #{} ({})",
            self.target, self.suit, self.source, self.status
        )
    }
}

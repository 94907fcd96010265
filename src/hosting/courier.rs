use crate::ChatId;
use crate::MessageId;

/// Outbound delivery of announcements and replies.
#[async_trait::async_trait]
pub trait Courier: Send + Sync {
    /// Sends `text` to `channel`, returning the id of the new message.
    async fn post(&self, channel: ChatId, text: &str) -> anyhow::Result<MessageId>;
    /// Replaces the text of a message sent earlier.
    async fn edit(&self, channel: ChatId, message: MessageId, text: &str) -> anyhow::Result<()>;
}

use crate::ChatId;
use crate::MessageId;
use crate::UserId;
use crate::tracker::Update;

/// Telegram Bot API update, reduced to the fields the tracker reads.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Webhook {
    #[serde(default)]
    pub update_id: i64,
    pub message: Option<Message>,
    pub edited_message: Option<Message>,
    pub channel_post: Option<Message>,
    pub edited_channel_post: Option<Message>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Message {
    pub message_id: MessageId,
    pub chat: Chat,
    pub from: Option<Sender>,
    pub text: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Chat {
    pub id: ChatId,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Sender {
    pub id: UserId,
}

/// A text-bearing message lifted out of a webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    pub update: Update,
    pub sender: Option<UserId>,
}

impl Webhook {
    /// `None` for update kinds without text (joins, polls, reactions...).
    pub fn inbound(self) -> Option<Inbound> {
        let (message, edited) = match self {
            Self { message: Some(m), .. } => (m, false),
            Self { channel_post: Some(m), .. } => (m, false),
            Self { edited_message: Some(m), .. } => (m, true),
            Self { edited_channel_post: Some(m), .. } => (m, true),
            _ => return None,
        };
        let text = message.text.or(message.caption)?;
        Some(Inbound {
            update: Update {
                text,
                source: message.chat.id,
                edited,
            },
            sender: message.from.map(|s| s.id),
        })
    }
}

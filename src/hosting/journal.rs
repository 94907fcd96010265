use super::courier::Courier;
use crate::ChatId;
use crate::MessageId;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

/// Courier that only logs. Hands out sequential ids so receipts and edits
/// still line up in dry runs.
#[derive(Debug)]
pub struct Journal {
    count: AtomicI64,
}

impl Default for Journal {
    fn default() -> Self {
        Self {
            count: AtomicI64::new(1),
        }
    }
}

#[async_trait::async_trait]
impl Courier for Journal {
    async fn post(&self, channel: ChatId, text: &str) -> anyhow::Result<MessageId> {
        let id = self.count.fetch_add(1, Ordering::Relaxed);
        log::info!("[journal] post {} to {}: {}", id, channel, text);
        Ok(id)
    }
    async fn edit(&self, channel: ChatId, message: MessageId, text: &str) -> anyhow::Result<()> {
        log::info!("[journal] edit {} in {}: {}", message, channel, text);
        Ok(())
    }
}

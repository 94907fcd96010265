use super::courier::Courier;
use crate::ChatId;
use crate::MessageId;
use std::time::Duration;

const API: &str = "https://api.telegram.org";

/// Courier speaking the Telegram Bot API.
#[derive(Clone)]
pub struct Telegram {
    http: reqwest::Client,
    base: String,
}

impl std::fmt::Debug for Telegram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Telegram").finish_non_exhaustive()
    }
}

/// Envelope of every Bot API response.
#[derive(Debug, serde::Deserialize)]
struct Reply<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct Sent {
    message_id: MessageId,
}

impl Telegram {
    pub fn new(token: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base: format!("{}/bot{}", API, token),
        })
    }

    async fn call<T>(&self, method: &str, body: serde_json::Value) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let reply = self
            .http
            .post(format!("{}/{}", self.base, method))
            .json(&body)
            .send()
            .await?
            .json::<Reply<T>>()
            .await?;
        match reply {
            Reply {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            Reply { description, .. } => Err(anyhow::anyhow!(
                "{} failed: {}",
                method,
                description.unwrap_or_else(|| String::from("no description"))
            )),
        }
    }
}

#[async_trait::async_trait]
impl Courier for Telegram {
    async fn post(&self, channel: ChatId, text: &str) -> anyhow::Result<MessageId> {
        let body = serde_json::json!({ "chat_id": channel, "text": text });
        let sent = self.call::<Sent>("sendMessage", body).await?;
        Ok(sent.message_id)
    }
    async fn edit(&self, channel: ChatId, message: MessageId, text: &str) -> anyhow::Result<()> {
        let body = serde_json::json!({ "chat_id": channel, "message_id": message, "text": text });
        self.call::<serde_json::Value>("editMessageText", body)
            .await
            .map(|_| ())
    }
}

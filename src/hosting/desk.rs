use super::admin::Command;
use super::courier::Courier;
use super::webhook::Inbound;
use crate::tracker::Decision;
use crate::tracker::Snapshot;
use crate::tracker::Tracker;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::SystemTime;
use tokio::sync::Mutex;

/// Front desk between the webhook and the tracker.
///
/// The tracker sits behind one lock so messages are applied strictly one at
/// a time. Delivery runs after the lock is released; a failed delivery is
/// logged and never undoes the state change that produced it.
pub struct Desk {
    tracker: Mutex<Tracker>,
    courier: Box<dyn Courier>,
    handled: AtomicU64,
}

impl Desk {
    pub fn new(tracker: Tracker, courier: Box<dyn Courier>) -> Self {
        Self {
            tracker: Mutex::new(tracker),
            courier,
            handled: AtomicU64::new(0),
        }
    }

    pub async fn handle(&self, inbound: Inbound, now: SystemTime) -> Decision {
        self.handled.fetch_add(1, Ordering::Relaxed);
        if let Some(command) = Command::read(&inbound.update.text) {
            self.command(inbound, command).await;
            return Decision::default();
        }
        let decision = self.tracker.lock().await.ingest(&inbound.update, now);
        if !decision.is_empty() {
            log::info!("[desk] {}", decision);
            self.deliver(&decision).await;
        }
        decision
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.tracker.lock().await.snapshot()
    }

    pub fn handled(&self) -> u64 {
        self.handled.load(Ordering::Relaxed)
    }

    async fn command(&self, inbound: Inbound, command: Result<Command, clap::Error>) {
        let Some(sender) = inbound.sender else {
            log::debug!("[desk] command without sender in {}", inbound.update.source);
            return;
        };
        let reply = {
            let mut tracker = self.tracker.lock().await;
            if !tracker.config().is_admin(sender) {
                log::warn!("[desk] {} is not allowed to run commands", sender);
                return;
            }
            match command {
                Ok(command) => {
                    log::info!("[desk] {} runs {:?}", sender, command);
                    command.apply(&mut tracker)
                }
                Err(e) => e.render().to_string(),
            }
        };
        if let Err(e) = self.courier.post(inbound.update.source, &reply).await {
            log::error!("[desk] reply to {} failed: {}", inbound.update.source, e);
        }
    }

    async fn deliver(&self, decision: &Decision) {
        if let Some(post) = &decision.opened {
            match self.courier.post(post.channel, &post.text).await {
                // The lock is retaken here. A message handled while the post
                // was in flight may already have settled the prediction; its
                // edit then carried no receipt and was sent as a fresh post.
                Ok(id) => {
                    self.tracker.lock().await.bind(post.target, id);
                }
                Err(e) => log::error!("[desk] announcing #{} failed: {}", post.target, e),
            }
        }
        for edit in decision.edits() {
            let delivered = match edit.message {
                Some(message) => self.courier.edit(edit.channel, message, &edit.text).await,
                None => self.courier.post(edit.channel, &edit.text).await.map(|_| ()),
            };
            if let Err(e) = delivered {
                log::error!("[desk] resolving #{} failed: {}", edit.target, e);
            }
        }
    }
}

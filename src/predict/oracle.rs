use super::cooldown::Cooldown;
use super::policy::Policy;
use super::prediction::Prediction;
use super::store::Store;
use crate::ChatId;
use crate::Position;
use crate::RoundNo;
use crate::classify::Completion;
use crate::config::Config;
use crate::parse::Round;
use std::time::Duration;
use std::time::SystemTime;

/// Decides when a round opens a new prediction.
///
/// Gates, in order: completion, trigger tag, cooldown, suit policy, target
/// uniqueness. The first gate that fails drops the round.
#[derive(Debug, Clone)]
pub struct Oracle {
    policy: Policy,
    offset: RoundNo,
    position: Position,
    eager: bool,
    trigger: Option<String>,
    cooldown: Cooldown,
}

impl Oracle {
    pub fn new(config: &Config, last: Option<SystemTime>) -> Self {
        Self {
            policy: config.policy,
            offset: config.offset,
            position: config.position,
            eager: config.eager,
            trigger: config.trigger.clone(),
            cooldown: Cooldown::new(Duration::from_secs(config.cooldown), last),
        }
    }

    /// Opens a prediction from `round` when every gate passes, storing it
    /// and stamping the cooldown.
    pub fn open(
        &mut self,
        round: &Round,
        completion: Completion,
        text: &str,
        store: &mut Store,
        channel: ChatId,
        now: SystemTime,
    ) -> Option<Prediction> {
        let number = round.number();
        if !completion.can_open(self.eager) {
            log::debug!("[oracle] #{} is {}, no prediction", number, completion);
            return None;
        }
        if let Some(tag) = self.trigger.as_deref().filter(|tag| !text.contains(tag)) {
            log::debug!("[oracle] #{} lacks trigger {}, no prediction", number, tag);
            return None;
        }
        if let Some(wait) = self.cooldown.remaining(now) {
            log::info!("[oracle] #{} during cooldown, {:.1}s left", number, wait.as_secs_f32());
            return None;
        }
        let pick = match self.policy.select(round.groups(), self.offset, self.position) {
            Ok(pick) => pick,
            Err(rejection) => {
                log::info!("[oracle] #{} rejected by {}: {}", number, self.policy, rejection);
                return None;
            }
        };
        let Some(target) = number.checked_add(pick.offset) else {
            log::info!("[oracle] #{} +{} overflows the round counter", number, pick.offset);
            return None;
        };
        if store.is_pending(target) {
            log::info!("[oracle] #{} would duplicate pending #{}", number, target);
            return None;
        }
        let prediction = Prediction::new(target, pick.suit, number, channel, now);
        if let Err(occupied) = store.put(prediction.clone()) {
            log::warn!("[oracle] {}", occupied);
            return None;
        }
        self.cooldown.stamp(now);
        log::info!("[oracle] opened {} (+{})", prediction, pick.offset);
        Some(prediction)
    }
}

impl Oracle {
    pub fn policy(&self) -> Policy {
        self.policy
    }
    pub fn offset(&self) -> RoundNo {
        self.offset
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn cooldown(&self) -> &Cooldown {
        &self.cooldown
    }
    pub fn set_policy(&mut self, policy: Policy) {
        self.policy = policy;
    }
    pub fn set_offset(&mut self, offset: RoundNo) {
        self.offset = offset;
    }
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
    pub fn set_cooldown(&mut self, seconds: u64) {
        self.cooldown.set_window(Duration::from_secs(seconds));
    }
    pub fn clear(&mut self) {
        self.cooldown.clear();
    }
}

use super::decision::Decision;
use super::decision::Edit;
use super::decision::Post;
use super::drafts::Drafts;
use super::ledger::Ledger;
use super::routes::Routes;
use super::seen::Seen;
use super::update::Update;
use crate::ChatId;
use crate::DRAFT_CAPACITY;
use crate::MessageId;
use crate::Position;
use crate::RoundNo;
use crate::SEEN_CAPACITY;
use crate::classify::Completion;
use crate::config::Config;
use crate::config::ConfigError;
use crate::parse::Round;
use crate::predict::Oracle;
use crate::predict::Policy;
use crate::predict::Prediction;
use crate::predict::Store;
use crate::verify::Outcome;
use crate::verify::Referee;
use std::time::SystemTime;

/// Sole owner of all prediction state.
///
/// Every message goes through [`Tracker::ingest`] one at a time:
/// parse, replay guard, classify, open, verify, expire. Nothing it is fed can leave
/// it unusable; bad input only produces an empty [`Decision`].
#[derive(Debug)]
pub struct Tracker {
    config: Config,
    oracle: Oracle,
    referee: Referee,
    store: Store,
    seen: Seen,
    drafts: Drafts,
    routes: Routes,
    ledger: Ledger,
}

impl Tracker {
    pub fn new(config: Config, ledger: Ledger) -> Self {
        let last = ledger.load();
        if let Some(last) = last {
            log::info!("[tracker] last prediction restored from {:?}", last);
        }
        Self {
            oracle: Oracle::new(&config, last),
            referee: Referee::default(),
            store: Store::default(),
            seen: Seen::new(SEEN_CAPACITY),
            drafts: Drafts::new(DRAFT_CAPACITY),
            routes: Routes::new(config.destination, config.redirects.clone()),
            ledger,
            config,
        }
    }

    pub fn ingest(&mut self, update: &Update, now: SystemTime) -> Decision {
        let text = update.text.as_str();
        let round = match Round::try_from(text) {
            Ok(round) => round,
            Err(failure) => {
                log::debug!("[tracker] ignoring message from {}: {}", update.source, failure);
                return Decision::default();
            }
        };
        let number = round.number();
        let digest = Seen::digest(text);
        if self.seen.contains(&digest) {
            log::debug!("[tracker] #{} already processed", number);
            return Decision::default();
        }
        let completion = Completion::from(text);
        match completion {
            Completion::Excluded => {
                log::debug!("[tracker] #{} excluded", number);
                return Decision::default();
            }
            Completion::Provisional => {
                log::debug!("[tracker] #{} provisional, waiting for edit", number);
                self.drafts.remember(number, now);
                return Decision::default();
            }
            Completion::Finalized => {
                if let Some(first) = self.drafts.settle(number) {
                    let waited = now.duration_since(first).unwrap_or_default();
                    log::info!(
                        "[tracker] #{} finalized {}after {:.0}s",
                        number,
                        if update.edited { "by edit " } else { "" },
                        waited.as_secs_f32()
                    );
                }
            }
            Completion::Unmarked => {}
        }

        let mut decision = Decision::default();
        let channel = self.routes.resolve(update.source);
        if let Some(prediction) =
            self.oracle
                .open(&round, completion, text, &mut self.store, channel, now)
        {
            if let Err(e) = self.ledger.save(Some(now)) {
                log::warn!("[tracker] failed to persist last prediction time: {}", e);
            }
            decision.opened = Some(Post {
                channel: prediction.channel(),
                target: prediction.target(),
                text: prediction.text(),
            });
        }
        if let Some(outcome) = self.referee.verify(&round, completion, &mut self.store) {
            decision.resolved = Some(Self::amend(&outcome));
        }
        decision.expired = self
            .referee
            .expire(number, &mut self.store)
            .iter()
            .map(Self::amend)
            .collect();
        if decision.opened.is_some() || completion.is_finalized() {
            self.seen.insert(digest);
        }
        decision
    }

    fn amend(outcome: &Outcome) -> Edit {
        let prediction = outcome.prediction();
        Edit {
            channel: prediction.channel(),
            message: prediction.receipt(),
            target: prediction.target(),
            text: outcome.text(),
        }
    }

    /// Attaches the delivered message id to a pending prediction.
    pub fn bind(&mut self, target: RoundNo, message: MessageId) -> bool {
        match self.store.get_mut(target) {
            Some(prediction) if prediction.is_pending() => {
                prediction.bind(message);
                true
            }
            _ => {
                log::debug!("[tracker] receipt {} for #{} has no pending prediction", message, target);
                false
            }
        }
    }

    /// Forgets every prediction, digest, draft, redirect and the cooldown
    /// stamp, and persists the cleared stamp.
    pub fn reset(&mut self) {
        log::info!("[tracker] reset, dropping {} pending prediction(s)", self.store.len());
        self.store.clear();
        self.seen.clear();
        self.drafts.clear();
        self.routes.clear();
        self.oracle.clear();
        self.config.redirects.clear();
        if let Err(e) = self.ledger.save(None) {
            log::warn!("[tracker] failed to persist cleared time: {}", e);
        }
    }
}

impl Tracker {
    pub fn set_cooldown(&mut self, seconds: u64) -> Result<u64, ConfigError> {
        let seconds = Config::check_cooldown(seconds)?;
        self.oracle.set_cooldown(seconds);
        self.config.cooldown = seconds;
        log::info!("[tracker] cooldown set to {}s", seconds);
        Ok(seconds)
    }
    pub fn set_offset(&mut self, offset: RoundNo) -> Result<RoundNo, ConfigError> {
        let offset = Config::check_offset(offset)?;
        self.oracle.set_offset(offset);
        self.config.offset = offset;
        log::info!("[tracker] offset set to {}", offset);
        Ok(offset)
    }
    pub fn set_position(&mut self, position: Position) -> Result<Position, ConfigError> {
        let position = Config::check_position(position)?;
        self.oracle.set_position(position);
        self.config.position = position;
        log::info!("[tracker] position set to {}", position);
        Ok(position)
    }
    pub fn set_policy(&mut self, policy: Policy) {
        self.oracle.set_policy(policy);
        self.config.policy = policy;
        log::info!("[tracker] policy set to {}", policy);
    }
    pub fn redirect(&mut self, source: ChatId, target: ChatId) {
        self.routes.redirect(source, target);
        self.config.redirects.insert(source, target);
    }
}

impl Tracker {
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn store(&self) -> &Store {
        &self.store
    }
    pub fn pending(&self) -> impl Iterator<Item = &Prediction> {
        self.store.iter().filter(|p| p.is_pending())
    }
    pub fn last(&self) -> Option<SystemTime> {
        self.oracle.cooldown().last()
    }
    pub fn drafts(&self) -> usize {
        self.drafts.len()
    }
    pub fn route(&self, source: ChatId) -> ChatId {
        self.routes.resolve(source)
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.config.clone(),
            last: self.last(),
            drafts: self.drafts.len(),
            pending: self.pending().cloned().collect(),
        }
    }
}

/// Point-in-time view of the tracker for status reports.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Snapshot {
    pub config: Config,
    pub last: Option<SystemTime>,
    pub drafts: usize,
    pub pending: Vec<Prediction>,
}

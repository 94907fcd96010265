use crate::RoundNo;
use std::collections::BTreeMap;
use std::time::SystemTime;

/// Rounds seen only in provisional form, waiting for their final edit.
/// When full, the lowest round number is evicted.
#[derive(Debug)]
pub struct Drafts {
    capacity: usize,
    rounds: BTreeMap<RoundNo, SystemTime>,
}

impl Drafts {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            rounds: BTreeMap::new(),
        }
    }
    /// Keeps the first sighting time of a round.
    pub fn remember(&mut self, round: RoundNo, now: SystemTime) {
        if !self.rounds.contains_key(&round) && self.rounds.len() >= self.capacity {
            self.rounds.pop_first();
        }
        self.rounds.entry(round).or_insert(now);
    }
    /// Forgets a round, returning when it was first seen provisional.
    pub fn settle(&mut self, round: RoundNo) -> Option<SystemTime> {
        self.rounds.remove(&round)
    }
    pub fn contains(&self, round: RoundNo) -> bool {
        self.rounds.contains_key(&round)
    }
    pub fn len(&self) -> usize {
        self.rounds.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
    pub fn clear(&mut self) {
        self.rounds.clear();
    }
}

use super::prediction::Prediction;
use crate::RoundNo;
use std::collections::BTreeMap;

/// A pending prediction already holds the target round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupied(pub RoundNo);

impl std::fmt::Display for Occupied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "round {} already has a pending prediction", self.0)
    }
}

impl std::error::Error for Occupied {}

/// Live predictions keyed by target round, in ascending order.
///
/// At most one pending prediction exists per target. Resolved predictions
/// leave the store through [`Store::remove`], so a settled key can never be
/// matched again.
#[derive(Debug, Default)]
pub struct Store(BTreeMap<RoundNo, Prediction>);

impl Store {
    pub fn put(&mut self, prediction: Prediction) -> Result<(), Occupied> {
        let target = prediction.target();
        match self.0.get(&target) {
            Some(held) if held.is_pending() => Err(Occupied(target)),
            _ => {
                self.0.insert(target, prediction);
                Ok(())
            }
        }
    }
    pub fn get(&self, target: RoundNo) -> Option<&Prediction> {
        self.0.get(&target)
    }
    pub fn remove(&mut self, target: RoundNo) -> Option<Prediction> {
        self.0.remove(&target)
    }
    pub fn is_pending(&self, target: RoundNo) -> bool {
        self.get(target).is_some_and(Prediction::is_pending)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Read-only view in ascending target order.
    pub fn iter(&self) -> impl Iterator<Item = &Prediction> {
        self.0.values()
    }
}

impl Store {
    pub(crate) fn get_mut(&mut self, target: RoundNo) -> Option<&mut Prediction> {
        self.0.get_mut(&target)
    }
    /// Targets of pending predictions, ascending.
    pub(crate) fn pending(&self) -> Vec<RoundNo> {
        self.0
            .values()
            .filter(|p| p.is_pending())
            .map(Prediction::target)
            .collect()
    }
    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use std::time::SystemTime;

    fn prediction(target: RoundNo, suit: Suit) -> Prediction {
        Prediction::new(target, suit, target - 2, 0, SystemTime::UNIX_EPOCH)
    }

    #[test]
    fn put_rejects_pending_duplicate() {
        let mut store = Store::default();
        assert!(store.put(prediction(10, Suit::Heart)).is_ok());
        assert_eq!(store.put(prediction(10, Suit::Spade)), Err(Occupied(10)));
        assert_eq!(store.get(10).map(Prediction::suit), Some(Suit::Heart));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_frees_the_key() {
        let mut store = Store::default();
        store.put(prediction(10, Suit::Heart)).unwrap();
        assert!(store.remove(10).is_some());
        assert!(store.remove(10).is_none());
        assert!(!store.is_pending(10));
        assert!(store.put(prediction(10, Suit::Club)).is_ok());
    }

    #[test]
    fn pending_is_ascending() {
        let mut store = Store::default();
        store.put(prediction(14, Suit::Heart)).unwrap();
        store.put(prediction(11, Suit::Club)).unwrap();
        store.put(prediction(12, Suit::Spade)).unwrap();
        assert_eq!(store.pending(), vec![11, 12, 14]);
    }
}

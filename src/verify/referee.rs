use super::outcome::Outcome;
use crate::EXPIRY_MARGIN;
use crate::LOOKAHEAD;
use crate::RoundNo;
use crate::WIN_THRESHOLD;
use crate::classify::Completion;
use crate::parse::Round;
use crate::predict::Status;
use crate::predict::Store;

/// Settles pending predictions against finalized rounds.
///
/// A prediction for round `t` is due on rounds `t..=t + lookahead`. Pending
/// predictions are scanned in ascending target order; the first decisive
/// result (a win, or a miss on the last due round) ends the scan, so one
/// incoming round settles at most one prediction. Misses before the last due
/// round only advance `checked` and the scan goes on.
///
/// A prediction still pending `margin` rounds after its window closed (its
/// last due round excluded, never finalized, or never sent) expires as lost.
#[derive(Debug, Clone, Copy)]
pub struct Referee {
    lookahead: RoundNo,
    threshold: usize,
    margin: RoundNo,
}

impl Default for Referee {
    fn default() -> Self {
        Self {
            lookahead: LOOKAHEAD,
            threshold: WIN_THRESHOLD,
            margin: EXPIRY_MARGIN,
        }
    }
}

impl Referee {
    pub fn verify(&self, round: &Round, completion: Completion, store: &mut Store) -> Option<Outcome> {
        if !completion.can_verify() {
            return None;
        }
        let number = round.number();
        for target in store.pending() {
            let Some(delta) = number.checked_sub(target).filter(|d| *d <= self.lookahead) else {
                continue;
            };
            let Some(prediction) = store.get_mut(target) else {
                continue;
            };
            let hits = round.first().count(prediction.suit());
            log::debug!(
                "[referee] #{} vs {} at +{}: {} hit(s)",
                number,
                prediction,
                delta,
                hits
            );
            let status = if hits >= self.threshold {
                Status::Won(delta)
            } else if delta == self.lookahead {
                Status::Lost
            } else {
                prediction.advance(delta);
                continue;
            };
            let Some(prediction) = store.remove(target) else {
                continue;
            };
            let previous = prediction.text();
            let settled = prediction.settle(status, delta);
            log::info!("[referee] #{} settled {}", number, settled);
            return Some(Outcome::new(settled, number, previous));
        }
        None
    }

    /// Settles as lost every pending prediction whose window, plus the
    /// margin, closed before round `number`.
    pub fn expire(&self, number: RoundNo, store: &mut Store) -> Vec<Outcome> {
        let reach = self.lookahead.saturating_add(self.margin);
        store
            .pending()
            .into_iter()
            .take_while(|target| target.saturating_add(reach) < number)
            .filter_map(|target| store.remove(target))
            .map(|prediction| {
                let previous = prediction.text();
                let checked = prediction.checked();
                let settled = prediction.settle(Status::Lost, checked);
                log::info!("[referee] #{} expired {}", number, settled);
                Outcome::new(settled, number, previous)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::predict::Prediction;
    use std::time::SystemTime;

    fn store(predictions: &[(RoundNo, Suit)]) -> Store {
        let mut store = Store::default();
        for (target, suit) in predictions {
            store
                .put(Prediction::new(*target, *suit, target - 4, 0, SystemTime::UNIX_EPOCH))
                .unwrap();
        }
        store
    }

    fn judge(store: &mut Store, text: &str) -> Option<Outcome> {
        let round = Round::try_from(text).unwrap();
        Referee::default().verify(&round, Completion::from(text), store)
    }

    #[test]
    fn wins_on_target() {
        let mut store = store(&[(104, Suit::Diamond)]);
        let outcome = judge(&mut store, "#N104 ✅ (♦️♦️♦️) (♠️)").unwrap();
        assert_eq!(outcome.status(), Status::Won(0));
        assert_eq!(outcome.prediction().checked(), 0);
        assert_eq!(outcome.previous(), "🔵104🔵:♦️ statut :⏳");
        assert_eq!(outcome.text(), "🔵104🔵:♦️ statut :✅0️⃣");
        assert!(store.get(104).is_none());
    }

    #[test]
    fn walks_window_then_loses() {
        let mut store = store(&[(104, Suit::Diamond)]);
        assert!(judge(&mut store, "#N104 ✅ (♦️♠️♠️)").is_none());
        assert_eq!(store.get(104).map(Prediction::checked), Some(0));
        assert!(judge(&mut store, "#N105 ✅ (♦️♦️♠️)").is_none());
        assert_eq!(store.get(104).map(Prediction::checked), Some(1));
        assert!(judge(&mut store, "#N106 ✅ (♠️♠️♠️)").is_none());
        assert_eq!(store.get(104).map(Prediction::checked), Some(2));
        assert!(store.is_pending(104));
        let outcome = judge(&mut store, "#N107 ✅ (♦️♦️♣️)").unwrap();
        assert_eq!(outcome.status(), Status::Lost);
        assert_eq!(outcome.prediction().checked(), 3);
        assert_eq!(outcome.text(), "🔵104🔵:♦️ statut :❌");
        assert!(store.is_empty());
    }

    #[test]
    fn wins_late_in_window() {
        let mut store = store(&[(50, Suit::Heart)]);
        assert!(judge(&mut store, "#N50 🔰 (♥️)").is_none());
        let outcome = judge(&mut store, "#N52 🔰 (❤️♥️❤️)").unwrap();
        assert_eq!(outcome.status(), Status::Won(2));
        assert_eq!(outcome.round(), 52);
    }

    #[test]
    fn only_first_group_counts() {
        let mut store = store(&[(10, Suit::Club)]);
        assert!(judge(&mut store, "#N10 ✅ (♠️) (♣️♣️♣️)").is_none());
        assert!(store.is_pending(10));
    }

    #[test]
    fn unfinalized_rounds_never_settle() {
        let mut store = store(&[(10, Suit::Club)]);
        assert!(judge(&mut store, "#N10 (♣️♣️♣️)").is_none());
        assert!(judge(&mut store, "#N10 ⏰ (♣️♣️♣️)").is_none());
        assert!(judge(&mut store, "#N10 ✅ (♣️♣️♣️) #X").is_none());
        assert_eq!(store.get(10).map(Prediction::checked), Some(0));
        assert!(store.is_pending(10));
    }

    #[test]
    fn outside_window_is_skipped() {
        let mut store = store(&[(10, Suit::Club)]);
        assert!(judge(&mut store, "#N9 ✅ (♣️♣️♣️)").is_none());
        assert!(judge(&mut store, "#N14 ✅ (♣️♣️♣️)").is_none());
        assert!(store.is_pending(10));
        assert_eq!(store.get(10).map(Prediction::checked), Some(0));
    }

    #[test]
    fn one_decision_per_round() {
        let mut store = store(&[(20, Suit::Spade), (21, Suit::Spade)]);
        let outcome = judge(&mut store, "#N21 ✅ (♠️♠️♠️)").unwrap();
        assert_eq!(outcome.prediction().target(), 20);
        assert_eq!(outcome.status(), Status::Won(1));
        assert!(store.is_pending(21));
        assert_eq!(store.get(21).map(Prediction::checked), Some(0));
    }

    #[test]
    fn non_decisive_miss_lets_scan_continue() {
        let mut store = store(&[(30, Suit::Heart), (31, Suit::Club)]);
        let outcome = judge(&mut store, "#N31 ✅ (♣️♣️♣️)").unwrap();
        assert_eq!(outcome.prediction().target(), 31);
        assert_eq!(outcome.status(), Status::Won(0));
        assert_eq!(store.get(30).map(Prediction::checked), Some(1));
    }

    #[test]
    fn closed_windows_expire() {
        let mut store = store(&[(104, Suit::Diamond), (106, Suit::Heart), (120, Suit::Club)]);
        store.get_mut(104).unwrap().advance(2);
        assert!(Referee::default().expire(108, &mut store).is_empty());
        assert!(Referee::default().expire(109, &mut store).is_empty());
        let expired = Referee::default().expire(112, &mut store);
        assert_eq!(expired.len(), 2);
        assert_eq!(expired[0].prediction().target(), 104);
        assert_eq!(expired[0].status(), Status::Lost);
        assert_eq!(expired[0].prediction().checked(), 2);
        assert_eq!(expired[0].round(), 112);
        assert_eq!(expired[1].text(), "🔵106🔵:♥️ statut :❌");
        assert!(store.get(104).is_none());
        assert!(store.get(106).is_none());
        assert!(store.is_pending(120));
    }

    #[test]
    fn expiry_near_counter_limit() {
        let mut store = store(&[(RoundNo::MAX - 1, Suit::Spade)]);
        assert!(Referee::default().expire(RoundNo::MAX, &mut store).is_empty());
        assert!(store.is_pending(RoundNo::MAX - 1));
    }

    #[test]
    fn decisive_loss_stops_scan() {
        let mut store = store(&[(40, Suit::Heart), (43, Suit::Club)]);
        let outcome = judge(&mut store, "#N43 ✅ (♣️♣️♣️)").unwrap();
        assert_eq!(outcome.prediction().target(), 40);
        assert_eq!(outcome.status(), Status::Lost);
        assert!(store.is_pending(43));
    }
}

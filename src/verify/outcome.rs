use crate::RoundNo;
use crate::predict::Prediction;
use crate::predict::Status;

/// A prediction that just left `Pending`, with the text to swap in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    prediction: Prediction,
    round: RoundNo,
    previous: String,
}

impl Outcome {
    pub(crate) fn new(prediction: Prediction, round: RoundNo, previous: String) -> Self {
        Self {
            prediction,
            round,
            previous,
        }
    }
    /// The settled record, no longer in the store.
    pub fn prediction(&self) -> &Prediction {
        &self.prediction
    }
    pub fn status(&self) -> Status {
        self.prediction.status()
    }
    /// Round whose result settled the prediction.
    pub fn round(&self) -> RoundNo {
        self.round
    }
    /// Announcement text as it was while pending.
    pub fn previous(&self) -> &str {
        &self.previous
    }
    /// Replacement announcement text.
    pub fn text(&self) -> String {
        self.prediction.text()
    }
}

use crate::ChatId;

/// One incoming message, as handed over by whatever transport received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub text: String,
    pub source: ChatId,
    pub edited: bool,
}

impl Update {
    pub fn new(text: impl Into<String>, source: ChatId) -> Self {
        Self {
            text: text.into(),
            source,
            edited: false,
        }
    }
    pub fn edit(text: impl Into<String>, source: ChatId) -> Self {
        Self {
            text: text.into(),
            source,
            edited: true,
        }
    }
}

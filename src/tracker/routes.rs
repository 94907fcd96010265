use crate::ChatId;
use std::collections::BTreeMap;

/// Where announcements triggered from a source chat are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    fallback: ChatId,
    overrides: BTreeMap<ChatId, ChatId>,
}

impl Routes {
    pub fn new(fallback: ChatId, overrides: BTreeMap<ChatId, ChatId>) -> Self {
        Self {
            fallback,
            overrides,
        }
    }
    pub fn resolve(&self, source: ChatId) -> ChatId {
        self.overrides
            .get(&source)
            .copied()
            .unwrap_or(self.fallback)
    }
    pub fn redirect(&mut self, source: ChatId, target: ChatId) {
        log::info!("[routes] {} → {}", source, target);
        self.overrides.insert(source, target);
    }
    pub fn fallback(&self) -> ChatId {
        self.fallback
    }
    pub fn overrides(&self) -> &BTreeMap<ChatId, ChatId> {
        &self.overrides
    }
    pub fn clear(&mut self) {
        self.overrides.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_without_override() {
        let mut routes = Routes::new(-1, BTreeMap::new());
        assert_eq!(routes.resolve(-50), -1);
        routes.redirect(-50, -60);
        assert_eq!(routes.resolve(-50), -60);
        assert_eq!(routes.resolve(-51), -1);
        routes.clear();
        assert_eq!(routes.resolve(-50), -1);
    }
}

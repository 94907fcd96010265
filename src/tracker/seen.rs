use crate::cards::Suit;
use std::collections::HashSet;

/// blake3 digest of a message's normalized text.
pub type Digest = [u8; 32];

/// Digests of messages that already had an effect.
///
/// Bounded: once `capacity` digests are held the whole set is wiped before
/// the next insert. Forgetting only risks reprocessing an old message, never
/// dropping a new one.
#[derive(Debug)]
pub struct Seen {
    capacity: usize,
    digests: HashSet<Digest>,
}

impl Seen {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            digests: HashSet::with_capacity(capacity),
        }
    }
    /// Hashes the full text with suit glyph variants folded and variation
    /// selectors dropped, so cosmetic re-renders of one message collide.
    pub fn digest(text: &str) -> Digest {
        let normalized = text
            .trim()
            .chars()
            .filter(|c| *c != '\u{FE0F}')
            .map(|c| match Suit::from_glyph(c) {
                Some(Suit::Club) => '♣',
                Some(Suit::Diamond) => '♦',
                Some(Suit::Heart) => '♥',
                Some(Suit::Spade) => '♠',
                None => c,
            })
            .collect::<String>();
        *blake3::hash(normalized.as_bytes()).as_bytes()
    }
    pub fn contains(&self, digest: &Digest) -> bool {
        self.digests.contains(digest)
    }
    pub fn insert(&mut self, digest: Digest) {
        if self.digests.len() >= self.capacity {
            log::debug!("[seen] {} digests held, wiping", self.digests.len());
            self.digests.clear();
        }
        self.digests.insert(digest);
    }
    pub fn len(&self) -> usize {
        self.digests.len()
    }
    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
    pub fn clear(&mut self) {
        self.digests.clear();
    }
}

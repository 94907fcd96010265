use super::suit::Suit;
use super::suits::Suits;

/// The cards of one parenthesized span, as suits in order of appearance.
///
/// Repeats are kept: the missing-suit rule counts card occurrences and the
/// win rule counts how often the predicted suit shows up. Ranks and any other
/// characters inside the span are not part of the group.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Group(Vec<Suit>);

impl Group {
    pub fn cards(&self) -> &[Suit] {
        &self.0
    }
    /// Card occurrences, counting repeats.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Occurrences of one suit.
    pub fn count(&self, suit: Suit) -> usize {
        self.0.iter().filter(|s| **s == suit).count()
    }
    /// Distinct suits present.
    pub fn suits(&self) -> Suits {
        self.0.iter().copied().collect()
    }
    pub fn first(&self) -> Option<Suit> {
        self.0.first().copied()
    }
    /// Suit of the card at a 1-based position.
    pub fn at(&self, position: usize) -> Option<Suit> {
        position
            .checked_sub(1)
            .and_then(|i| self.0.get(i))
            .copied()
    }
}

/// Reads suit glyphs out of the inner text of a span. Glyph variants fold
/// through [`Suit::from_glyph`]; everything else is skipped.
impl From<&str> for Group {
    fn from(s: &str) -> Self {
        Self(s.chars().filter_map(Suit::from_glyph).collect())
    }
}

impl From<Vec<Suit>> for Group {
    fn from(cards: Vec<Suit>) -> Self {
        Self(cards)
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "(")?;
        for suit in self.0.iter() {
            write!(f, "{}", suit)?;
        }
        write!(f, ")")
    }
}

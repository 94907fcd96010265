use super::suit::Suit;

/// Unordered set of suits as a 4-bit mask.
///
/// cdhs
/// 0101 = {diamond, spade}
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Suits(u8);

impl Suits {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn full() -> Self {
        Self(0b1111)
    }
    pub fn insert(&mut self, suit: Suit) {
        self.0 |= suit.bit();
    }
    pub fn contains(&self, suit: Suit) -> bool {
        self.0 & suit.bit() != 0
    }
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
    /// Suits absent from this set.
    pub fn complement(self) -> Self {
        Self(!self.0 & 0b1111)
    }
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// Members in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Suit> + '_ {
        Suit::all().into_iter().filter(|s| self.contains(*s))
    }
    /// The only member, if the set holds exactly one suit.
    pub fn single(&self) -> Option<Suit> {
        match self.len() {
            1 => self.iter().next(),
            _ => None,
        }
    }
}

impl FromIterator<Suit> for Suits {
    fn from_iter<I: IntoIterator<Item = Suit>>(iter: I) -> Self {
        let mut suits = Self::empty();
        iter.into_iter().for_each(|s| suits.insert(s));
        suits
    }
}

impl std::fmt::Display for Suits {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        for suit in self.iter() {
            write!(f, "{}", suit)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_of_three_is_single() {
        let suits = [Suit::Spade, Suit::Heart, Suit::Club]
            .into_iter()
            .collect::<Suits>();
        assert_eq!(suits.len(), 3);
        assert_eq!(suits.complement().single(), Some(Suit::Diamond));
    }

    #[test]
    fn full_has_empty_complement() {
        assert!(Suits::full().complement().is_empty());
        assert_eq!(Suits::full().complement().single(), None);
    }

    #[test]
    fn duplicates_collapse() {
        let suits = [Suit::Heart, Suit::Heart, Suit::Heart]
            .into_iter()
            .collect::<Suits>();
        assert_eq!(suits.len(), 1);
        assert!(suits.contains(Suit::Heart));
        assert!(!suits.contains(Suit::Spade));
    }
}

/// Card suit: clubs, diamonds, hearts, spades.
///
/// The broadcast channel writes suits as emoji glyphs, sometimes in several
/// visual variants (a heart can arrive as `♥️`, `❤️` or `♡`). Every variant
/// folds to one value here, so nothing downstream ever compares glyphs.
///
/// The ordering (C < D < H < S) is arbitrary but consistent.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
    /// Emoji glyph as the channel renders it, variation selector included.
    pub fn glyph(&self) -> &'static str {
        match self {
            Suit::Club => "♣️",
            Suit::Diamond => "♦️",
            Suit::Heart => "♥️",
            Suit::Spade => "♠️",
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Club => "club",
            Suit::Diamond => "diamond",
            Suit::Heart => "heart",
            Suit::Spade => "spade",
        }
    }
    /// Single-bit mask used by [`Suits`](super::Suits).
    pub fn bit(&self) -> u8 {
        1 << u8::from(*self)
    }
    /// Maps one glyph character to its suit. Variation selectors and every
    /// other character yield `None`.
    pub fn from_glyph(c: char) -> Option<Suit> {
        match c {
            '♣' | '♧' => Some(Suit::Club),
            '♦' | '♢' => Some(Suit::Diamond),
            '♥' | '❤' | '♡' => Some(Suit::Heart),
            '♠' | '♤' => Some(Suit::Spade),
            _ => None,
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "c" | "club" | "clubs" => return Ok(Suit::Club),
            "d" | "diamond" | "diamonds" => return Ok(Suit::Diamond),
            "h" | "heart" | "hearts" => return Ok(Suit::Heart),
            "s" | "spade" | "spades" => return Ok(Suit::Spade),
            _ => {}
        }
        let mut glyphs = s.chars().filter(|c| *c != '\u{FE0F}');
        match (glyphs.next().and_then(Suit::from_glyph), glyphs.next()) {
            (Some(suit), None) => Ok(suit),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let suit = Suit::Diamond;
        assert!(suit == Suit::from(u8::from(suit)));
    }

    #[test]
    fn heart_variants_fold() {
        assert_eq!(Suit::from_glyph('♥'), Some(Suit::Heart));
        assert_eq!(Suit::from_glyph('❤'), Some(Suit::Heart));
        assert_eq!(Suit::from_glyph('♡'), Some(Suit::Heart));
        assert_eq!(Suit::try_from("❤️"), Ok(Suit::Heart));
        assert_eq!(Suit::try_from("♥️"), Ok(Suit::Heart));
    }

    #[test]
    fn selector_is_not_a_suit() {
        assert_eq!(Suit::from_glyph('\u{FE0F}'), None);
        assert_eq!(Suit::from_glyph('K'), None);
    }

    #[test]
    fn parses_names_and_letters() {
        assert_eq!(Suit::try_from("spade"), Ok(Suit::Spade));
        assert_eq!(Suit::try_from(" D "), Ok(Suit::Diamond));
        assert!(Suit::try_from("♠️♠️").is_err());
        assert!(Suit::try_from("joker").is_err());
    }

    #[test]
    fn distinct_bits() {
        let mask = Suit::all().iter().fold(0u8, |m, s| m | s.bit());
        assert_eq!(mask, 0b1111);
    }
}

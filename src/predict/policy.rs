use crate::MISSING_GROUP_CARDS;
use crate::OFFSET_MISSING_MAJOR;
use crate::OFFSET_MISSING_MINOR;
use crate::Position;
use crate::RoundNo;
use crate::cards::Group;
use crate::cards::Suit;
use crate::cards::Suits;

/// Rule that turns a round's card groups into a predicted suit and the
/// distance to the round it is predicted for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// The one suit absent from the first two groups of two cards each.
    #[default]
    MissingSuit,
    /// The suit of a chosen card in the first group, at a fixed offset.
    FirstSuit,
}

/// Outcome of a successful selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub suit: Suit,
    pub offset: RoundNo,
}

/// Why a policy declined to pick. Logged, never surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooFewGroups(usize),
    CardCount { group: usize, cards: usize },
    MissingCount(usize),
    NoCardAt(Position),
}

impl Policy {
    /// Applies the rule. `offset` and `position` only matter to
    /// [`Policy::FirstSuit`]; the missing-suit rule derives its own offset.
    pub fn select(
        &self,
        groups: &[Group],
        offset: RoundNo,
        position: Position,
    ) -> Result<Pick, Rejection> {
        match self {
            Self::MissingSuit => Self::missing(groups),
            Self::FirstSuit => Self::leading(groups, position).map(|suit| Pick { suit, offset }),
        }
    }

    fn missing(groups: &[Group]) -> Result<Pick, Rejection> {
        let pair = groups.get(..2).ok_or(Rejection::TooFewGroups(groups.len()))?;
        for (i, group) in pair.iter().enumerate() {
            if group.len() != MISSING_GROUP_CARDS {
                return Err(Rejection::CardCount {
                    group: i + 1,
                    cards: group.len(),
                });
            }
        }
        let absent = pair
            .iter()
            .map(Group::suits)
            .fold(Suits::empty(), Suits::union)
            .complement();
        let suit = absent.single().ok_or(Rejection::MissingCount(absent.len()))?;
        let offset = match suit {
            Suit::Club | Suit::Diamond => OFFSET_MISSING_MINOR,
            Suit::Spade | Suit::Heart => OFFSET_MISSING_MAJOR,
        };
        Ok(Pick { suit, offset })
    }

    /// Position 2 falls through to the third card when the first two share
    /// a suit.
    fn leading(groups: &[Group], position: Position) -> Result<Suit, Rejection> {
        let first = groups.first().ok_or(Rejection::TooFewGroups(0))?;
        let fallback = match position {
            2 if first.at(1).is_some() && first.at(1) == first.at(2) => 3,
            p => p as usize,
        };
        first.at(fallback).ok_or(Rejection::NoCardAt(position))
    }
}

impl std::str::FromStr for Policy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "missing-suit" | "missing" => Ok(Self::MissingSuit),
            "first-suit" | "first" => Ok(Self::FirstSuit),
            _ => Err(format!("unknown policy: {} (missing-suit | first-suit)", s)),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MissingSuit => write!(f, "missing-suit"),
            Self::FirstSuit => write!(f, "first-suit"),
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::TooFewGroups(n) => write!(f, "only {} group(s)", n),
            Self::CardCount { group, cards } => {
                write!(f, "group {} holds {} card(s), needs {}", group, cards, MISSING_GROUP_CARDS)
            }
            Self::MissingCount(n) => write!(f, "{} suit(s) missing, needs exactly 1", n),
            Self::NoCardAt(p) => write!(f, "no card at position {}", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(spans: &[&str]) -> Vec<Group> {
        spans.iter().map(|s| Group::from(*s)).collect()
    }

    #[test]
    fn all_four_present_is_rejected() {
        let result = Policy::MissingSuit.select(&groups(&["♠️♥️", "♦️♣️"]), 2, 1);
        assert_eq!(result, Err(Rejection::MissingCount(0)));
    }

    #[test]
    fn missing_diamond_goes_four_ahead() {
        let pick = Policy::MissingSuit
            .select(&groups(&["♠️♥️", "♠️♣️"]), 2, 1)
            .unwrap();
        assert_eq!(pick, Pick { suit: Suit::Diamond, offset: 4 });
    }

    #[test]
    fn missing_club_goes_four_ahead() {
        let pick = Policy::MissingSuit
            .select(&groups(&["♠️♥️", "♦️♥️"]), 2, 1)
            .unwrap();
        assert_eq!(pick, Pick { suit: Suit::Club, offset: 4 });
    }

    #[test]
    fn missing_major_goes_two_ahead() {
        let spade = Policy::MissingSuit.select(&groups(&["♦️♥️", "♣️♥️"]), 9, 1);
        assert_eq!(spade, Ok(Pick { suit: Suit::Spade, offset: 2 }));
        let heart = Policy::MissingSuit.select(&groups(&["♦️♠️", "♣️♠️"]), 9, 1);
        assert_eq!(heart, Ok(Pick { suit: Suit::Heart, offset: 2 }));
    }

    #[test]
    fn card_count_counts_repeats() {
        let result = Policy::MissingSuit.select(&groups(&["♠️♠️♥️", "♠️♣️"]), 2, 1);
        assert_eq!(result, Err(Rejection::CardCount { group: 1, cards: 3 }));
        let result = Policy::MissingSuit.select(&groups(&["♠️♥️", "♣️"]), 2, 1);
        assert_eq!(result, Err(Rejection::CardCount { group: 2, cards: 1 }));
    }

    #[test]
    fn two_missing_is_ambiguous() {
        let result = Policy::MissingSuit.select(&groups(&["♠️♠️", "♥️♥️"]), 2, 1);
        assert_eq!(result, Err(Rejection::MissingCount(2)));
    }

    #[test]
    fn later_groups_are_ignored() {
        let pick = Policy::MissingSuit.select(&groups(&["♠️♥️", "♠️♣️", "♦️♦️♦️"]), 2, 1);
        assert_eq!(pick, Ok(Pick { suit: Suit::Diamond, offset: 4 }));
    }

    #[test]
    fn single_group_is_too_few() {
        let result = Policy::MissingSuit.select(&groups(&["♠️♥️"]), 2, 1);
        assert_eq!(result, Err(Rejection::TooFewGroups(1)));
    }

    #[test]
    fn first_suit_uses_configured_offset() {
        let pick = Policy::FirstSuit.select(&groups(&["♣️♠️♥️"]), 5, 1);
        assert_eq!(pick, Ok(Pick { suit: Suit::Club, offset: 5 }));
    }

    #[test]
    fn first_suit_second_position() {
        let pick = Policy::FirstSuit.select(&groups(&["♣️♠️♥️"]), 2, 2);
        assert_eq!(pick, Ok(Pick { suit: Suit::Spade, offset: 2 }));
    }

    #[test]
    fn second_position_skips_twin() {
        let pick = Policy::FirstSuit.select(&groups(&["♣️♣️♥️"]), 2, 2);
        assert_eq!(pick, Ok(Pick { suit: Suit::Heart, offset: 2 }));
        let short = Policy::FirstSuit.select(&groups(&["♣️♣️"]), 2, 2);
        assert_eq!(short, Err(Rejection::NoCardAt(2)));
    }

    #[test]
    fn first_suit_on_empty_group() {
        let result = Policy::FirstSuit.select(&groups(&["10 K"]), 2, 1);
        assert_eq!(result, Err(Rejection::NoCardAt(1)));
    }

    #[test]
    fn parses_names() {
        assert_eq!("missing-suit".parse::<Policy>(), Ok(Policy::MissingSuit));
        assert_eq!("FIRST_SUIT".parse::<Policy>(), Ok(Policy::FirstSuit));
        assert!("random".parse::<Policy>().is_err());
    }
}

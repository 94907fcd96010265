use super::failure::ParseFailure;
use crate::RoundNo;
use crate::cards::Group;
use regex::Regex;
use std::sync::LazyLock;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)#N\s*(\d+)").expect("round number pattern"));
static GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)").expect("card group pattern"));

/// One round as announced by the channel: its number and the card groups,
/// in the order they appear in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    number: RoundNo,
    groups: Vec<Group>,
}

impl Round {
    pub fn number(&self) -> RoundNo {
        self.number
    }
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
    /// The first group. Always present on a parsed round.
    pub fn first(&self) -> &Group {
        &self.groups[0]
    }
}

impl TryFrom<&str> for Round {
    type Error = ParseFailure;
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let number = NUMBER
            .captures(text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<RoundNo>().ok())
            .ok_or(ParseFailure::NoRoundNumber)?;
        let groups = GROUP
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| Group::from(m.as_str()))
            .collect::<Vec<_>>();
        match groups.is_empty() {
            true => Err(ParseFailure::NoGroups),
            false => Ok(Self { number, groups }),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#N{}", self.number)?;
        for group in self.groups.iter() {
            write!(f, " {}", group)?;
        }
        Ok(())
    }
}

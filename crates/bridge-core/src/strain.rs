use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The denomination named by a contract bid.
///
/// Variants are declared lowest-ranking first, so `a > b` means `a` outranks `b`
/// at the same level: No-Trump, Spades, Hearts, Diamonds, Clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strain {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

impl Strain {
    pub const ALL: [Strain; 5] = [
        Strain::Clubs,
        Strain::Diamonds,
        Strain::Hearts,
        Strain::Spades,
        Strain::NoTrump,
    ];

    /// Short form used in compact call notation (`1NT`, `2H`).
    pub fn symbol(self) -> &'static str {
        match self {
            Strain::Clubs => "C",
            Strain::Diamonds => "D",
            Strain::Hearts => "H",
            Strain::Spades => "S",
            Strain::NoTrump => "NT",
        }
    }

    pub fn name(self) -> &'static str {
        match self.to_suit() {
            Some(suit) => suit.name(),
            None => "NT",
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Strain::NoTrump),
            other => Suit::from_char(other).map(Strain::from_suit),
        }
    }

    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Strain::Clubs,
            Suit::Diamonds => Strain::Diamonds,
            Suit::Hearts => Strain::Hearts,
            Suit::Spades => Strain::Spades,
        }
    }

    pub fn to_suit(self) -> Option<Suit> {
        match self {
            Strain::Clubs => Some(Suit::Clubs),
            Strain::Diamonds => Some(Suit::Diamonds),
            Strain::Hearts => Some(Suit::Hearts),
            Strain::Spades => Some(Suit::Spades),
            Strain::NoTrump => None,
        }
    }

    /// Strictly higher in the fixed bidding order.
    pub fn outranks(self, other: Strain) -> bool {
        self > other
    }

    pub fn is_major(self) -> bool {
        matches!(self, Strain::Hearts | Strain::Spades)
    }

    pub fn is_minor(self) -> bool {
        matches!(self, Strain::Clubs | Strain::Diamonds)
    }
}

impl From<Suit> for Strain {
    fn from(suit: Suit) -> Self {
        Strain::from_suit(suit)
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strain_parsing() {
        assert_eq!(Strain::from_char('S'), Some(Strain::Spades));
        assert_eq!(Strain::from_char('n'), Some(Strain::NoTrump));
        assert_eq!(Strain::from_char('q'), None);
    }

    #[test]
    fn test_strain_ranking() {
        assert!(Strain::NoTrump.outranks(Strain::Spades));
        assert!(Strain::Spades.outranks(Strain::Hearts));
        assert!(Strain::Diamonds.outranks(Strain::Clubs));
        assert!(!Strain::Hearts.outranks(Strain::Hearts));
        assert!(!Strain::Clubs.outranks(Strain::Spades));
    }

    #[test]
    fn test_strain_names() {
        assert_eq!(Strain::NoTrump.name(), "NT");
        assert_eq!(Strain::Hearts.name(), "Hearts");
        assert_eq!(Strain::Hearts.to_string(), "H");
    }
}

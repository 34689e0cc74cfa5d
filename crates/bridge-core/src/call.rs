use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("bid level {0} is outside 1-7")]
    LevelOutOfRange(u8),
}

/// A single call in the auction. Only `Bid` carries bidding weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Call {
    Pass,
    Bid { level: u8, strain: Strain },
    Double,
    Redouble,
}

impl Call {
    /// Checked constructor for a contract bid.
    pub fn bid(level: u8, strain: Strain) -> Result<Self, CallError> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            Ok(Call::Bid { level, strain })
        } else {
            Err(CallError::LevelOutOfRange(level))
        }
    }

    pub fn is_bid(self) -> bool {
        matches!(self, Call::Bid { .. })
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Call::Pass)
    }

    pub fn level(self) -> Option<u8> {
        match self {
            Call::Bid { level, .. } => Some(level),
            _ => None,
        }
    }

    pub fn strain(self) -> Option<Strain> {
        match self {
            Call::Bid { strain, .. } => Some(strain),
            _ => None,
        }
    }

    /// True when `self` is a bid that may legally follow `other`.
    pub fn outranks(self, other: Call) -> bool {
        match (self, other) {
            (
                Call::Bid { level, strain },
                Call::Bid {
                    level: other_level,
                    strain: other_strain,
                },
            ) => level > other_level || (level == other_level && strain.outranks(other_strain)),
            _ => false,
        }
    }

    pub fn render(self) -> String {
        match self {
            Call::Pass => "P".to_string(),
            Call::Double => "X".to_string(),
            Call::Redouble => "XX".to_string(),
            Call::Bid { level, strain } => format!("{}{}", level, strain),
        }
    }

    /// Long form for prompts and advice, e.g. `2 Hearts` or `1 NT`.
    pub fn spoken(self) -> String {
        match self {
            Call::Pass => "Pass".to_string(),
            Call::Double => "Double".to_string(),
            Call::Redouble => "Redouble".to_string(),
            Call::Bid { level, strain } => format!("{} {}", level, strain.name()),
        }
    }
}

/// How many bidding levels separate two contract bids.
///
/// The raw difference of the numeric levels, plus one when `higher` names a
/// strictly higher-ranking strain than `lower`. Two identical bids are 0 apart.
/// Returns `None` unless both calls are contract bids.
pub fn level_difference(higher: Call, lower: Call) -> Option<i8> {
    match (higher, lower) {
        (
            Call::Bid {
                level: high_level,
                strain: high_strain,
            },
            Call::Bid {
                level: low_level,
                strain: low_strain,
            },
        ) => {
            let base = high_level as i8 - low_level as i8;
            if high_strain.outranks(low_strain) {
                Some(base + 1)
            } else {
                Some(base)
            }
        }
        _ => None,
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(level: u8, strain: Strain) -> Call {
        Call::bid(level, strain).unwrap()
    }

    #[test]
    fn test_checked_constructor() {
        assert!(Call::bid(1, Strain::Clubs).is_ok());
        assert!(Call::bid(7, Strain::NoTrump).is_ok());
        assert_eq!(
            Call::bid(0, Strain::Clubs),
            Err(CallError::LevelOutOfRange(0))
        );
        assert_eq!(
            Call::bid(8, Strain::Spades),
            Err(CallError::LevelOutOfRange(8))
        );
    }

    #[test]
    fn test_level_difference_same_level_higher_strain() {
        assert_eq!(
            level_difference(bid(1, Strain::Spades), bid(1, Strain::Hearts)),
            Some(1)
        );
    }

    #[test]
    fn test_level_difference_lower_strain_next_level() {
        assert_eq!(
            level_difference(bid(2, Strain::Clubs), bid(1, Strain::Spades)),
            Some(1)
        );
    }

    #[test]
    fn test_level_difference_identical_bids_is_zero() {
        assert_eq!(
            level_difference(bid(2, Strain::Hearts), bid(2, Strain::Hearts)),
            Some(0)
        );
    }

    #[test]
    fn test_level_difference_requires_bids() {
        assert_eq!(level_difference(Call::Pass, bid(1, Strain::Clubs)), None);
        assert_eq!(level_difference(bid(1, Strain::Clubs), Call::Double), None);
    }

    #[test]
    fn test_outranks() {
        assert!(bid(1, Strain::NoTrump).outranks(bid(1, Strain::Spades)));
        assert!(bid(2, Strain::Clubs).outranks(bid(1, Strain::NoTrump)));
        assert!(!bid(2, Strain::Hearts).outranks(bid(2, Strain::Spades)));
        assert!(!bid(2, Strain::Hearts).outranks(bid(2, Strain::Hearts)));
        assert!(!Call::Double.outranks(bid(1, Strain::Clubs)));
    }

    #[test]
    fn test_render() {
        assert_eq!(bid(1, Strain::NoTrump).render(), "1NT");
        assert_eq!(bid(4, Strain::Spades).to_string(), "4S");
        assert_eq!(Call::Redouble.render(), "XX");
        assert_eq!(bid(2, Strain::Hearts).spoken(), "2 Hearts");
        assert_eq!(bid(3, Strain::NoTrump).spoken(), "3 NT");
        assert_eq!(Call::Pass.spoken(), "Pass");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&bid(2, Strain::Hearts)).unwrap();
        assert_eq!(json, r#"{"Bid":{"level":2,"strain":"Hearts"}}"#);
        assert_eq!(serde_json::to_string(&Call::Pass).unwrap(), r#""Pass""#);
    }
}

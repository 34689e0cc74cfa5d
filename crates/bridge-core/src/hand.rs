use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const CARDS_IN_HAND: u8 = 13;
/// Four aces, four kings, four queens and one jack.
pub const MAX_HCP: u8 = 37;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("hand holds {total} cards, expected 13")]
    WrongCardCount { total: u32 },
    #[error("{0} HCP is more than a hand can hold (max 37)")]
    TooManyPoints(u8),
}

/// How many cards of one suit a hand holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitQuality {
    pub suit: Suit,
    pub cards: u8,
}

/// A hand as the player declares it: high-card points plus suit lengths.
///
/// The lengths always sum to 13; [`Hand::new`] is the only way to build one,
/// deserialization included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HandRepr", into = "HandRepr")]
pub struct Hand {
    hcp: u8,
    lengths: [u8; 4],
}

/// Serialized form of a [`Hand`], named the way a player reads it out.
#[derive(Serialize, Deserialize)]
struct HandRepr {
    hcp: u8,
    spades: u8,
    hearts: u8,
    diamonds: u8,
    clubs: u8,
}

impl TryFrom<HandRepr> for Hand {
    type Error = HandError;

    fn try_from(repr: HandRepr) -> Result<Self, Self::Error> {
        Hand::new(repr.hcp, repr.spades, repr.hearts, repr.diamonds, repr.clubs)
    }
}

impl From<Hand> for HandRepr {
    fn from(hand: Hand) -> Self {
        Self {
            hcp: hand.hcp,
            spades: hand.length(Suit::Spades),
            hearts: hand.length(Suit::Hearts),
            diamonds: hand.length(Suit::Diamonds),
            clubs: hand.length(Suit::Clubs),
        }
    }
}

impl Hand {
    pub fn new(
        hcp: u8,
        spades: u8,
        hearts: u8,
        diamonds: u8,
        clubs: u8,
    ) -> Result<Self, HandError> {
        let total = [spades, hearts, diamonds, clubs]
            .iter()
            .map(|&n| u32::from(n))
            .sum::<u32>();
        if total != u32::from(CARDS_IN_HAND) {
            return Err(HandError::WrongCardCount { total });
        }
        if hcp > MAX_HCP {
            return Err(HandError::TooManyPoints(hcp));
        }

        let mut lengths = [0; 4];
        lengths[Suit::Spades.idx()] = spades;
        lengths[Suit::Hearts.idx()] = hearts;
        lengths[Suit::Diamonds.idx()] = diamonds;
        lengths[Suit::Clubs.idx()] = clubs;
        Ok(Self { hcp, lengths })
    }

    pub fn hcp(&self) -> u8 {
        self.hcp
    }

    pub fn length(&self, suit: Suit) -> u8 {
        self.lengths[suit.idx()]
    }

    pub fn quality(&self, suit: Suit) -> SuitQuality {
        SuitQuality {
            suit,
            cards: self.length(suit),
        }
    }

    /// Spades, hearts, diamonds, clubs.
    pub fn suit_qualities(&self) -> [SuitQuality; 4] {
        Suit::DESCENDING.map(|suit| self.quality(suit))
    }

    pub fn max_length(&self) -> u8 {
        self.lengths.iter().copied().max().unwrap_or(0)
    }

    pub fn min_length(&self) -> u8 {
        self.lengths.iter().copied().min().unwrap_or(0)
    }

    pub fn longest_major_length(&self) -> u8 {
        self.length(Suit::Spades).max(self.length(Suit::Hearts))
    }

    pub fn longest_minor_length(&self) -> u8 {
        self.length(Suit::Diamonds).max(self.length(Suit::Clubs))
    }

    /// 4-3-3-3, 4-4-3-2 or 5-3-3-2.
    pub fn is_balanced(&self) -> bool {
        let longest = self.max_length();
        if longest > 5 || self.min_length() < 2 {
            return false;
        }
        if longest == 5 {
            // 5-4-2-2
            return !self.lengths.contains(&4);
        }
        true
    }

    /// Every suit tied for the maximum length, highest-ranking first.
    pub fn longest_suits(&self) -> Vec<Suit> {
        let longest = self.max_length();
        Suit::DESCENDING
            .into_iter()
            .filter(|&suit| self.length(suit) == longest)
            .collect()
    }

    /// True when every suit tied for longest is `suit` (i.e. it is the single longest).
    pub fn only_longest_is(&self, suit: Suit) -> bool {
        self.longest_suits() == [suit]
    }

    pub fn lowest_ranking_longest_suit(&self) -> SuitQuality {
        self.lowest_ranking_longest_among(Suit::ALL)
    }

    pub fn lowest_ranking_longest_major(&self) -> SuitQuality {
        self.lowest_ranking_longest_among(Suit::MAJORS)
    }

    pub fn lowest_ranking_longest_non_club(&self) -> SuitQuality {
        self.lowest_ranking_longest_among([Suit::Diamonds, Suit::Hearts, Suit::Spades])
    }

    pub fn highest_ranking_longest_suit(&self) -> SuitQuality {
        let best = Suit::ALL
            .into_iter()
            .max_by(|&a, &b| self.length(a).cmp(&self.length(b)).then(a.cmp(&b)))
            .unwrap_or(Suit::Spades);
        self.quality(best)
    }

    /// Longest of the candidates; equal lengths go to the lower-ranking suit,
    /// which leaves partner the most room to reply.
    pub fn lowest_ranking_longest_among(
        &self,
        candidates: impl IntoIterator<Item = Suit>,
    ) -> SuitQuality {
        let best = candidates
            .into_iter()
            .max_by(|&a, &b| self.length(a).cmp(&self.length(b)).then(b.cmp(&a)))
            .unwrap_or(Suit::Clubs);
        self.quality(best)
    }

    /// One point for every card beyond the fourth in each suit.
    pub fn long_suit_points(&self) -> u8 {
        self.lengths.iter().map(|&len| len.saturating_sub(4)).sum()
    }

    /// Void 5, singleton 3, doubleton 1.
    pub fn short_suit_points(&self) -> u8 {
        self.lengths
            .iter()
            .map(|&len| match len {
                0 => 5,
                1 => 3,
                2 => 1,
                _ => 0,
            })
            .sum()
    }

    pub fn points_with_length(&self) -> u8 {
        self.hcp + self.long_suit_points()
    }

    pub fn points_with_shortness(&self) -> u8 {
        self.hcp + self.short_suit_points()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} HCP, {}-{}-{}-{}",
            self.hcp,
            self.length(Suit::Spades),
            self.length(Suit::Hearts),
            self.length(Suit::Diamonds),
            self.length(Suit::Clubs)
        )
    }
}

use crate::auction::{Auction, AuctionError};
use crate::call::{Call, CallError};
use crate::hand::{Hand, HandError};
use crate::position::Position;
use crate::strain::Strain;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected '{{HCP}} {{#S}} {{#H}} {{#D}} {{#C}}', e.g. '10 5 3 3 2'")]
    HandFormat,
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error("expected 'p', 'dbl', 'rdbl' or a level and strain such as '1nt' or '4s'")]
    CallFormat,
    #[error(transparent)]
    Call(#[from] CallError),
    #[error("expected one of n/e/s/w")]
    Position,
    #[error(transparent)]
    Auction(#[from] AuctionError),
}

static HAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{1,2})\s+(\d{1,2})\s+(\d{1,2})\s+(\d{1,2})\s+(\d{1,2})\s*$")
        .expect("hand pattern is valid")
});

static BID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)(\d)(nt|n|s|h|d|c)$").expect("bid pattern is valid"));

/// Parses `"{HCP} {#S} {#H} {#D} {#C}"`, e.g. `"10 5 3 3 2"`.
pub fn parse_hand(s: &str) -> Result<Hand, ParseError> {
    let caps = HAND_RE.captures(s).ok_or(ParseError::HandFormat)?;
    let mut numbers = [0u8; 5];
    for (slot, group) in numbers.iter_mut().zip(1..=5) {
        *slot = caps[group].parse().map_err(|_| ParseError::HandFormat)?;
    }
    let [hcp, spades, hearts, diamonds, clubs] = numbers;
    Ok(Hand::new(hcp, spades, hearts, diamonds, clubs)?)
}

/// Parses `p`, `dbl`, `rdbl` (and their long forms) or a bid such as `1nt`, `4s`.
pub fn parse_call(s: &str) -> Result<Call, ParseError> {
    let s = s.trim();
    match s.to_ascii_lowercase().as_str() {
        "p" | "pass" => return Ok(Call::Pass),
        "x" | "dbl" | "double" => return Ok(Call::Double),
        "xx" | "rdbl" | "redouble" => return Ok(Call::Redouble),
        _ => {}
    }

    let caps = BID_RE.captures(s).ok_or(ParseError::CallFormat)?;
    let level: u8 = caps[1].parse().map_err(|_| ParseError::CallFormat)?;
    let strain = caps[2]
        .chars()
        .next()
        .and_then(Strain::from_char)
        .ok_or(ParseError::CallFormat)?;
    Ok(Call::bid(level, strain)?)
}

/// Parses `n`/`e`/`s`/`w` or a full seat name.
pub fn parse_position(s: &str) -> Result<Position, ParseError> {
    let s = s.trim();
    let lower = s.to_ascii_lowercase();
    Position::ALL
        .into_iter()
        .find(|p| lower == p.name().to_ascii_lowercase())
        .or_else(|| {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Position::from_char(c),
                _ => None,
            }
        })
        .ok_or(ParseError::Position)
}

/// Replays space-separated calls such as `"P 1C P 2C"` into a fresh auction,
/// stopping at the first call that does not parse or is not legal.
pub fn parse_auction(
    user: Position,
    dealer: Position,
    calls: &str,
) -> Result<Auction, ParseError> {
    let mut auction = Auction::new(user, dealer);
    for token in calls.split_whitespace() {
        auction.add_call(parse_call(token)?)?;
    }
    Ok(auction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hand_counts_in_descending_suit_order() {
        let hand = parse_hand("10 5 3 3 2").unwrap();
        assert_eq!(hand.hcp(), 10);
        assert_eq!(hand.length(crate::Suit::Spades), 5);
        assert_eq!(hand.length(crate::Suit::Clubs), 2);
    }

    #[test]
    fn test_parse_call_levels() {
        assert_eq!(
            parse_call("7nt"),
            Ok(Call::Bid {
                level: 7,
                strain: Strain::NoTrump
            })
        );
        assert_eq!(parse_call("8c"), Err(ParseError::Call(CallError::LevelOutOfRange(8))));
        assert_eq!(parse_call("0d"), Err(ParseError::Call(CallError::LevelOutOfRange(0))));
    }

    #[test]
    fn test_parse_auction_replays_calls() {
        let auction = parse_auction(Position::South, Position::North, "1H P 2H").unwrap();
        assert_eq!(auction.history().len(), 3);
        assert_eq!(auction.turn(), Position::West);

        assert_eq!(
            parse_auction(Position::South, Position::North, "1H 1C").unwrap_err(),
            ParseError::Auction(AuctionError::InsufficientBid {
                call: Call::bid(1, Strain::Clubs).unwrap(),
                current: Call::bid(1, Strain::Hearts).unwrap(),
            })
        );
        assert_eq!(
            parse_auction(Position::South, Position::North, "1H zz").unwrap_err(),
            ParseError::CallFormat
        );
        assert_eq!(
            parse_auction(Position::South, Position::North, "X").unwrap_err(),
            ParseError::Auction(AuctionError::IllegalDouble)
        );
    }
}

//! Text notation read from the terminal.

pub mod notation;

pub use notation::{parse_auction, parse_call, parse_hand, parse_position, ParseError};

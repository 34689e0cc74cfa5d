pub mod suit;
pub mod strain;
pub mod position;
pub mod hand;
pub mod call;
pub mod auction;
pub mod io;

pub use suit::Suit;
pub use strain::Strain;
pub use position::Position;
pub use hand::{Hand, HandError, SuitQuality};
pub use call::{level_difference, Call, CallError, MAX_LEVEL, MIN_LEVEL};
pub use auction::{Auction, AuctionCall, AuctionError, BiddingMode, Player, Relation};

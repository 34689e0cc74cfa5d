use crate::call::Call;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuctionError {
    #[error("the auction is already over")]
    Finished,
    #[error("{call} is not higher than {current}")]
    InsufficientBid { call: Call, current: Call },
    #[error("there is no opposing bid to double")]
    IllegalDouble,
    #[error("there is no opposing double to redouble")]
    IllegalRedouble,
}

/// Which phase of the convention system the user's next call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BiddingMode {
    #[default]
    Opening,
    Responding,
    OpenersRebid,
    Overcall,
    OvercallResponse,
    /// No programmed assistance applies for the rest of the hand.
    Improvise,
}

/// Seat of a caller as seen from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    User,
    Partner,
    Opponent,
}

impl BiddingMode {
    /// The mode after a contract bid by `raiser`.
    pub fn after_bid_by(self, raiser: Relation) -> BiddingMode {
        use BiddingMode::*;

        match (self, raiser) {
            (Opening, Relation::User) => OpenersRebid,
            (Opening, Relation::Partner) => Responding,
            (Opening, Relation::Opponent) => Improvise,

            (OpenersRebid, Relation::User) => Improvise,
            (OpenersRebid, Relation::Partner | Relation::Opponent) => OpenersRebid,

            (Responding, Relation::User | Relation::Partner) => Improvise,
            (Responding, Relation::Opponent) => Responding,

            (Overcall, Relation::Partner) => OvercallResponse,
            (Overcall, Relation::User | Relation::Opponent) => Improvise,

            (OvercallResponse | Improvise, _) => Improvise,
        }
    }

    /// Whether the rule engine has anything to say in this mode.
    pub fn is_assisted(self) -> bool {
        matches!(
            self,
            BiddingMode::Opening | BiddingMode::Responding | BiddingMode::OpenersRebid
        )
    }
}

impl fmt::Display for BiddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BiddingMode::Opening => "opening",
            BiddingMode::Responding => "responding",
            BiddingMode::OpenersRebid => "opener's rebid",
            BiddingMode::Overcall => "overcall",
            BiddingMode::OvercallResponse => "overcall response",
            BiddingMode::Improvise => "improvise",
        };
        f.write_str(name)
    }
}

/// A call as entered into the history, stamped with who made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionCall {
    pub position: Position,
    pub call: Call,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub position: Position,
    pub calls: Vec<Call>,
}

impl Player {
    fn new(position: Position) -> Self {
        Self {
            position,
            calls: Vec::new(),
        }
    }

    /// The contract bids this player has made, in order.
    pub fn raises(&self) -> impl Iterator<Item = Call> + '_ {
        self.calls.iter().copied().filter(|call| call.is_bid())
    }

    pub fn latest_call(&self) -> Option<Call> {
        self.calls.last().copied()
    }
}

/// One hand's auction, seen from the user's seat.
///
/// The bidding mode is updated every time a contract bid is entered; turn order
/// is strictly clockwise from the dealer. Serialize-only: an auction can only
/// be rebuilt by replaying its calls through [`Auction::add_call`].
#[derive(Debug, Clone, Serialize)]
pub struct Auction {
    dealer: Position,
    user: Position,
    turn: Position,
    mode: BiddingMode,
    players: [Player; 4],
    history: Vec<AuctionCall>,
}

impl Auction {
    pub fn new(user: Position, dealer: Position) -> Self {
        Self {
            dealer,
            user,
            turn: dealer,
            mode: BiddingMode::Opening,
            players: Position::ALL.map(Player::new),
            history: Vec::new(),
        }
    }

    pub fn dealer(&self) -> Position {
        self.dealer
    }

    pub fn user(&self) -> Position {
        self.user
    }

    pub fn partner(&self) -> Position {
        self.user.partner()
    }

    /// The player on turn.
    pub fn turn(&self) -> Position {
        self.turn
    }

    pub fn is_users_turn(&self) -> bool {
        self.turn == self.user
    }

    pub fn mode(&self) -> BiddingMode {
        self.mode
    }

    pub fn history(&self) -> &[AuctionCall] {
        &self.history
    }

    pub fn player(&self, position: Position) -> &Player {
        &self.players[position.idx()]
    }

    pub fn relation(&self, position: Position) -> Relation {
        if position == self.user {
            Relation::User
        } else if position == self.user.partner() {
            Relation::Partner
        } else {
            Relation::Opponent
        }
    }

    /// Record the call of the player on turn and pass the turn clockwise.
    pub fn add_call(&mut self, call: Call) -> Result<(), AuctionError> {
        self.check_legal(call)?;

        let position = self.turn;
        self.players[position.idx()].calls.push(call);
        self.history.push(AuctionCall { position, call });
        debug!(%position, %call, "call entered");

        if call.is_bid() {
            let raiser = self.relation(position);
            let next = self.mode.after_bid_by(raiser);
            if next != self.mode {
                debug!(from = %self.mode, to = %next, ?raiser, "bidding mode changed");
            }
            self.mode = next;
        }

        self.turn = position.next();
        trace!(turn = %self.turn, "turn advanced");
        Ok(())
    }

    /// Four passes, or three passes after any other call.
    pub fn is_finished(&self) -> bool {
        let len = self.history.len();
        len >= 4 && self.history[len - 3..].iter().all(|c| c.call.is_pass())
    }

    fn check_legal(&self, call: Call) -> Result<(), AuctionError> {
        if self.is_finished() {
            return Err(AuctionError::Finished);
        }
        let bidder = self.turn;
        match call {
            Call::Pass => Ok(()),
            Call::Bid { .. } => match self.latest_bid() {
                Some(current) if !call.outranks(current.call) => Err(AuctionError::InsufficientBid {
                    call,
                    current: current.call,
                }),
                _ => Ok(()),
            },
            Call::Double => match self.latest_non_pass() {
                Some(last) if last.call.is_bid() && !last.position.is_same_side(bidder) => Ok(()),
                _ => Err(AuctionError::IllegalDouble),
            },
            Call::Redouble => match self.latest_non_pass() {
                Some(last)
                    if last.call == Call::Double && !last.position.is_same_side(bidder) =>
                {
                    Ok(())
                }
                _ => Err(AuctionError::IllegalRedouble),
            },
        }
    }

    /// The first contract bid of the auction.
    pub fn opening_bid(&self) -> Option<AuctionCall> {
        self.bids().next()
    }

    pub fn opener(&self) -> Option<Position> {
        self.opening_bid().map(|c| c.position)
    }

    pub fn latest_non_pass(&self) -> Option<AuctionCall> {
        self.history.iter().rev().find(|c| !c.call.is_pass()).copied()
    }

    pub fn latest_bid(&self) -> Option<AuctionCall> {
        self.history.iter().rev().find(|c| c.call.is_bid()).copied()
    }

    /// Every contract bid, oldest first.
    pub fn bids(&self) -> impl Iterator<Item = AuctionCall> + '_ {
        self.history.iter().copied().filter(|c| c.call.is_bid())
    }

    pub fn latest_partner_call(&self) -> Option<Call> {
        self.player(self.partner()).latest_call()
    }

    pub fn latest_opponent_call(&self) -> Option<AuctionCall> {
        self.history
            .iter()
            .rev()
            .find(|c| self.relation(c.position) == Relation::Opponent)
            .copied()
    }

    fn latest_partner_index(&self) -> Option<usize> {
        let partner = self.partner();
        self.history.iter().rposition(|c| c.position == partner)
    }

    /// The call made just before partner's latest call (by the user's left-hand opponent).
    pub fn call_before_latest_partner_call(&self) -> Option<AuctionCall> {
        let index = self.latest_partner_index()?;
        index.checked_sub(1).map(|i| self.history[i])
    }

    /// The contract bid that preceded partner's most recent contract bid.
    pub fn bid_before_latest_partner_bid(&self) -> Option<AuctionCall> {
        let partner = self.partner();
        let index = self
            .history
            .iter()
            .rposition(|c| c.position == partner && c.call.is_bid())?;
        self.history[..index]
            .iter()
            .rev()
            .find(|c| c.call.is_bid())
            .copied()
    }
}

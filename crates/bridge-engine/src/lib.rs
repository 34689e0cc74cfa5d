//! Bidding advice for one seat of a contract bridge auction.
//!
//! The engine is a set of ordered decision tables, one per phase of the
//! bidding system. [`advise`] picks the table from the auction's bidding mode
//! and returns its feedback; phases without programmed help return `None`.

pub mod dsl;
pub mod feedback;
pub mod rules;
pub mod trace;

pub use feedback::{Feedback, FeedbackKind, Interference};
pub use trace::{Advice, RuleStep};

use bridge_core::{Auction, BiddingMode, Hand};
use rules::{competition, opening, rebid, responding};
use tracing::debug;

/// Advice for the user's next call, or `None` when the bidding mode has no
/// programmed assistance.
pub fn advise(auction: &Auction, hand: &Hand) -> Option<Feedback> {
    advise_with_trace(auction, hand).map(|advice| advice.feedback)
}

/// Like [`advise`], also returning every rule consulted on the way.
pub fn advise_with_trace(auction: &Auction, hand: &Hand) -> Option<Advice> {
    let mut steps = Vec::new();
    let mode = auction.mode();
    let feedback = match mode {
        BiddingMode::Opening => opening::OPENING.evaluate(hand, &mut steps),
        BiddingMode::Responding => {
            let partner = auction.latest_partner_call()?;
            match responding::Responding::new(*hand, partner) {
                Some(ctx) => {
                    let feedback = responding::respond(&ctx, &mut steps);
                    competition::raise_over_opponent(auction, feedback, &mut steps)
                }
                None => Feedback::improvise(),
            }
        }
        BiddingMode::OpenersRebid => rebid::rebid(auction, &mut steps),
        BiddingMode::Overcall | BiddingMode::OvercallResponse | BiddingMode::Improvise => {
            return None
        }
    };
    debug!(%mode, call = %feedback.call, rule = %feedback.rule, "advice");
    Some(Advice { feedback, steps })
}

use crate::feedback::Feedback;
use crate::trace::RuleStep;
use bridge_core::{level_difference, Auction, Call, Relation, MAX_LEVEL};
use tracing::debug;

pub const WITHIN_REASON: &str = "only bid this if it's within reason";

/// Raises a suggested bid that no longer outranks an opponent's contract.
///
/// The raise is the level difference between the opponent's bid and the
/// suggestion, and at least one level. The resulting feedback is flagged
/// because the bid now says something different to partner.
pub fn raise_over_opponent(
    auction: &Auction,
    feedback: Feedback,
    steps: &mut Vec<RuleStep>,
) -> Feedback {
    let Call::Bid { level, strain } = feedback.call else {
        return feedback;
    };
    let Some(latest) = auction.latest_bid() else {
        return feedback;
    };
    let overbid = feedback.is_recommendation()
        && auction.relation(latest.position) == Relation::Opponent
        && !feedback.call.outranks(latest.call);
    steps.push(RuleStep::new("competition", "raise over opponent", overbid));
    if !overbid {
        return feedback;
    }

    let gap = level_difference(latest.call, feedback.call).unwrap_or(0);
    let raised = level as i16 + i16::from(gap.max(1));
    if raised > i16::from(MAX_LEVEL) {
        debug!(opponent = %latest.call, suggestion = %feedback.call, "no room to raise");
        return Feedback {
            partner_info: feedback.partner_info,
            ..Feedback::improvise()
        };
    }

    let call = Call::Bid {
        level: raised as u8,
        strain,
    };
    debug!(opponent = %latest.call, from = %feedback.call, to = %call, "raised over opponent");
    Feedback {
        call,
        ..feedback
    }
    .only(WITHIN_REASON)
}

//! The opener's second call. Only partner's response is interpreted; the
//! suggested call is always a placeholder pass.

use crate::dsl::{Rule, RuleTable};
use crate::feedback::{Feedback, Interference};
use crate::trace::RuleStep;
use bridge_core::{level_difference, Auction, Call, Strain, MAX_LEVEL, MIN_LEVEL};
use once_cell::sync::Lazy;

const NOT_IMPLEMENTED: &str =
    "Opener's rebids are not implemented yet. Use the information about partner's hand and the cheat sheet.";

/// Our opening and partner's response, read as if nobody interfered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rebid {
    pub opening: Call,
    pub response: Call,
}

impl Rebid {
    pub fn new(opening: Call, response: Call) -> Self {
        Self { opening, response }
    }

    /// Reads the auction from the opener's seat. `None` before partner has responded.
    pub fn from_auction(auction: &Auction) -> Option<(Self, Option<Interference>)> {
        let opening = auction.opening_bid()?.call;
        let partner = auction.latest_partner_call()?;
        let overcall = auction
            .call_before_latest_partner_call()
            .map(|c| c.call)
            .filter(|call| !call.is_pass());
        let (response, interference) = read_interference(opening, partner, overcall);
        Some((Self::new(opening, response), interference))
    }

    fn opened(&self, level: u8, strain: Strain) -> bool {
        self.opening == Call::Bid { level, strain }
    }

    fn opening_level(&self) -> u8 {
        self.opening.level().unwrap_or(0)
    }

    fn opened_suit(&self, level: u8) -> bool {
        self.opening_level() == level && self.opening.strain() != Some(Strain::NoTrump)
    }

    fn opening_name(&self) -> &'static str {
        self.opening.strain().map_or("", Strain::name)
    }

    fn passed(&self) -> bool {
        self.response.is_pass()
    }

    fn level(&self) -> u8 {
        self.response.level().unwrap_or(0)
    }

    fn strain(&self) -> Option<Strain> {
        self.response.strain()
    }

    fn name(&self) -> &'static str {
        self.strain().map_or("", Strain::name)
    }

    fn raised_our_suit(&self) -> bool {
        self.response.is_bid() && self.strain() == self.opening.strain()
    }
}

/// Partner's response with the levels an overcall pushed it up taken back off.
///
/// A double or redouble between our opening and partner's response takes no
/// bidding space, so it never shifts levels.
pub fn read_interference(
    opening: Call,
    partner: Call,
    overcall: Option<Call>,
) -> (Call, Option<Interference>) {
    let Some(overcall) = overcall else {
        return (partner, None);
    };
    match partner {
        Call::Pass => (partner, Some(Interference::PartnerPassedOverInterference)),
        Call::Bid { level, strain } => {
            let diff = match (
                level_difference(partner, opening),
                level_difference(overcall, opening),
            ) {
                (Some(response), Some(intervening)) => response - intervening,
                _ => 0,
            };
            if diff == 0 {
                return (partner, Some(Interference::DidNotAffectResponse));
            }
            let adjusted =
                (level as i8 - diff).clamp(MIN_LEVEL as i8, MAX_LEVEL as i8) as u8;
            (
                Call::Bid {
                    level: adjusted,
                    strain,
                },
                Some(Interference::ResponseAdjusted { levels: diff }),
            )
        }
        Call::Double | Call::Redouble => (partner, None),
    }
}

fn placeholder(info: String) -> Feedback {
    Feedback::pass()
        .information_only()
        .partner_has(info)
        .because(NOT_IMPLEMENTED)
}

fn rule(
    name: &'static str,
    applies: fn(&Rebid) -> bool,
    respond: fn(&Rebid) -> Feedback,
) -> Rule<Rebid> {
    Rule::new(name, applies, respond)
}

fn after_one_no_trump(r: &Rebid) -> String {
    if r.passed() {
        return "0-7 HCP and a balanced hand".to_string();
    }
    let name = r.name();
    match (r.level(), r.strain()) {
        (2, Some(Strain::NoTrump)) => "8-9 HCP and a balanced hand".to_string(),
        (3, Some(Strain::NoTrump)) => "10-15 HCP and a balanced hand".to_string(),
        (_, Some(Strain::NoTrump)) => "16-17 HCP and a balanced hand".to_string(),
        (4, _) => format!("16+ HCP and a long suit of {}", name),
        (_, Some(Strain::Clubs)) => {
            "8+ HCP and at least one 4-card major suit. Partner bid according to Stayman convention".to_string()
        }
        (_, Some(Strain::Diamonds)) => "0+ HCP and 5+ Hearts. Transferring".to_string(),
        (_, Some(Strain::Hearts)) => "0+ HCP and 5+ Spades. Transferring".to_string(),
        _ => "0+ HCP and a 6+ card minor. Transferring".to_string(),
    }
}

fn after_two_no_trump(r: &Rebid) -> String {
    if r.passed() {
        return "0-3 HCP".to_string();
    }
    let name = r.name();
    match (r.level(), r.strain()) {
        (3, Some(Strain::NoTrump)) => "4-11 HCP and a balanced hand or long minor".to_string(),
        (3, Some(Strain::Clubs)) => {
            "4-11 HCP and at least one 4-card major suit. Partner bid according to Stayman convention".to_string()
        }
        (3, Some(Strain::Diamonds)) => "4-11 HCP and 5+ Hearts. Transferring".to_string(),
        (3, Some(Strain::Hearts)) => "4-11 HCP and 5+ Spades. Transferring".to_string(),
        (3, _) => format!("4-11 HCP and a long suit of {}", name),
        (_, Some(Strain::NoTrump)) => "12+ HCP and a balanced hand".to_string(),
        _ => format!("12+ HCP and a long suit of {}", name),
    }
}

fn after_one_of_a_suit(r: &Rebid) -> String {
    if r.passed() {
        return "0-5 points".to_string();
    }
    let name = r.name();
    if r.raised_our_suit() {
        let (weak, strong, fit) = match r.strain() {
            Some(Strain::Clubs) => ("6-9 points", "10+ points", 5),
            Some(Strain::Diamonds) => ("6-9 points", "10+ points", 4),
            _ => ("6-9 points", "10-12 points", 3),
        };
        let range = if r.level() == 2 { weak } else { strong };
        return format!("{} and {}+ {}", range, fit, name);
    }
    if r.strain() == Some(Strain::NoTrump) {
        return match r.level() {
            1 => "6-11 HCP".to_string(),
            2 => "12-15 HCP".to_string(),
            _ => "16+ HCP".to_string(),
        };
    }
    match level_difference(r.response, r.opening) {
        Some(1) if r.level() == 1 => format!("6+ points and 4+ {}", name),
        Some(1) => format!("11+ points and 4+ {}", name),
        _ => format!("19+ points and 5+ {}", name),
    }
}

fn after_strong_two_clubs(r: &Rebid) -> String {
    if r.passed() {
        return "0-6 HCP, although 2 Clubs asked for a response".to_string();
    }
    match (r.level(), r.strain()) {
        (2, Some(Strain::Diamonds)) => "0-6 HCP".to_string(),
        (_, Some(Strain::NoTrump)) => "7+ HCP and a balanced hand".to_string(),
        _ => format!("7+ HCP and 5+ {}", r.name()),
    }
}

fn after_weak_two(r: &Rebid) -> String {
    let ours = r.opening_name();
    if r.passed() {
        return format!("0-14 HCP and not enough {} support", ours);
    }
    if r.raised_our_suit() {
        let support = if r.level() == 3 { 3 } else { 4 };
        return format!("0-14 HCP and {} {}", support, ours);
    }
    match r.strain() {
        Some(Strain::NoTrump) => "15+ HCP and a balanced hand".to_string(),
        _ => format!("15+ HCP and 5+ {}", r.name()),
    }
}

fn after_three_level_preempt(r: &Rebid) -> String {
    let ours = r.opening_name();
    if r.passed() {
        return format!("0-15 HCP and not enough {} support", ours);
    }
    if r.raised_our_suit() {
        let major = r.opening.strain().is_some_and(Strain::is_major);
        return match (r.level(), major) {
            (4, false) => format!("0-15 HCP and 3+ {}", ours),
            (4, true) => format!("3+ {}", ours),
            _ => format!("16+ HCP and 3+ {}", ours),
        };
    }
    match r.strain() {
        Some(Strain::NoTrump) => "16+ HCP and thinks game is certain".to_string(),
        _ => format!("16+ HCP and 6+ {}", r.name()),
    }
}

fn after_four_level_preempt(r: &Rebid) -> String {
    let ours = r.opening_name();
    if r.raised_our_suit() {
        format!("3+ {}", ours)
    } else {
        format!("less than 3 {}", ours)
    }
}

pub static OPENERS_REBID: Lazy<RuleTable<Rebid>> = Lazy::new(|| {
    RuleTable::new(
        "opener's rebid",
        vec![
            rule(
                "partner doubled",
                |r| matches!(r.response, Call::Double | Call::Redouble),
                |r| {
                    placeholder(format!(
                        "chosen to {} rather than describe their hand",
                        r.response.spoken().to_lowercase()
                    ))
                },
            ),
            rule(
                "after 1NT",
                |r| r.opened(1, Strain::NoTrump),
                |r| placeholder(after_one_no_trump(r)),
            ),
            rule(
                "after 2NT",
                |r| r.opened(2, Strain::NoTrump),
                |r| placeholder(after_two_no_trump(r)),
            ),
            rule(
                "after one of a suit",
                |r| r.opened_suit(1),
                |r| placeholder(after_one_of_a_suit(r)),
            ),
            rule(
                "after 2C",
                |r| r.opened(2, Strain::Clubs),
                |r| placeholder(after_strong_two_clubs(r)),
            ),
            rule(
                "after a weak two",
                |r| r.opened_suit(2),
                |r| placeholder(after_weak_two(r)),
            ),
            rule(
                "after a three-level pre-empt",
                |r| r.opened_suit(3),
                |r| placeholder(after_three_level_preempt(r)),
            ),
            rule(
                "after a four-level pre-empt",
                |r| r.opened_suit(4),
                |r| placeholder(after_four_level_preempt(r)),
            ),
            rule(
                "opening outside the system",
                |_| true,
                |_| {
                    placeholder(
                        "an unknown hand; our opening is outside the bidding system".to_string(),
                    )
                },
            ),
        ],
    )
});

/// Interprets partner's response to our opening.
pub fn rebid(auction: &Auction, steps: &mut Vec<RuleStep>) -> Feedback {
    match Rebid::from_auction(auction) {
        Some((ctx, interference)) => OPENERS_REBID
            .evaluate(&ctx, steps)
            .with_interference(interference),
        None => Feedback::improvise(),
    }
}

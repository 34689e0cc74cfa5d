//! Responses to partner's opening bid.

use crate::dsl::{Route, RouteTable, Rule, RuleTable};
use crate::feedback::{Feedback, FeedbackKind};
use crate::trace::RuleStep;
use bridge_core::{Call, Hand, Strain, Suit, SuitQuality};
use once_cell::sync::Lazy;

/// The user's hand facing partner's opening contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Responding {
    pub hand: Hand,
    pub level: u8,
    pub strain: Strain,
}

impl Responding {
    /// `None` unless partner's call is a contract bid.
    pub fn new(hand: Hand, partner: Call) -> Option<Self> {
        match partner {
            Call::Bid { level, strain } => Some(Self {
                hand,
                level,
                strain,
            }),
            _ => None,
        }
    }

    fn hcp(&self) -> u8 {
        self.hand.hcp()
    }

    /// Cards held in partner's suit; zero facing no-trump.
    fn support(&self) -> u8 {
        self.strain.to_suit().map_or(0, |suit| self.hand.length(suit))
    }

    fn has_major_fit(&self) -> bool {
        self.strain.is_major() && self.support() >= 3
    }

    fn opened(&self, level: u8, strain: Strain) -> bool {
        self.level == level && self.strain == strain
    }

    fn opened_suit(&self, level: u8) -> bool {
        self.level == level && self.strain != Strain::NoTrump
    }

    /// `2 Hearts` style name of partner's opening, used in rationales.
    fn opening(&self) -> String {
        format!("{} {}", self.level, self.strain.name())
    }

    fn raise(&self, level: u8) -> Feedback {
        Feedback::bid(level, self.strain)
    }
}

fn rule(
    name: &'static str,
    applies: fn(&Responding) -> bool,
    respond: fn(&Responding) -> Feedback,
) -> Rule<Responding> {
    Rule::new(name, applies, respond)
}

/// Bid the suit below `major` to ask partner to bid it.
fn transfer(level: u8, major: Suit) -> Feedback {
    let relay = match major {
        Suit::Hearts => Strain::Diamonds,
        _ => Strain::Hearts,
    };
    Feedback::bid(level, relay)
}

fn transfer_reason(opening: &str, range: &str, major: Suit) -> String {
    let relay = match major {
        Suit::Hearts => Suit::Diamonds,
        _ => Suit::Hearts,
    };
    format!(
        "Response to {}. {}, 5+ {}. Transfer bid: we bid {} to show partner we have {}.",
        opening, range, major, relay, major
    )
}

/// What partner's opening shows, for every opening the tables know.
pub fn describe_opening(level: u8, strain: Strain) -> Option<String> {
    let name = strain.name();
    let info = match (level, strain) {
        (1, Strain::NoTrump) => "15-17 HCP and a balanced hand".to_string(),
        (1, Strain::Clubs) => {
            "12-21 total points and either 5+ Clubs or 3 Clubs and 3 Diamonds".to_string()
        }
        (1, Strain::Diamonds) => {
            "12-21 total points and either 5+ Diamonds or 4 Clubs and 4 Diamonds".to_string()
        }
        (1, _) => format!("12-21 total points and 5+ {}", name),
        (2, Strain::NoTrump) => "20-21 HCP and a balanced hand".to_string(),
        (2, Strain::Clubs) => {
            "22+ HCP with a balanced hand, or 22+ total points with an unbalanced hand".to_string()
        }
        (2, _) => format!("5-10 HCP but 6 {} with good suit quality", name),
        (3, Strain::NoTrump) => return None,
        (3, _) => format!("5-10 HCP but 7 {} with good suit quality", name),
        (4, Strain::NoTrump) => return None,
        (4, _) => format!("5-10 HCP but 8+ {} with good suit quality", name),
        _ => return None,
    };
    Some(info)
}

static ONE_NO_TRUMP: Lazy<RuleTable<Responding>> = Lazy::new(|| {
    RuleTable::new(
        "response to 1NT",
        vec![
            rule(
                "weak and flat",
                |r| r.hcp() <= 7 && (r.hand.is_balanced() || r.hand.max_length() < 5),
                |_| {
                    Feedback::pass()
                        .because("Response to 1 NT. 0-7 HCP and a balanced hand or no 5-card suit.")
                },
            ),
            rule(
                "weak major transfer",
                |r| {
                    r.hcp() <= 7
                        && r.hand.longest_major_length() >= 5
                        && r.hand.longest_minor_length() <= 6
                },
                |r| {
                    let major = r.hand.lowest_ranking_longest_major().suit;
                    transfer(2, major)
                        .then("Pass")
                        .because(transfer_reason("1 NT", "0-7 HCP", major))
                },
            ),
            rule(
                "weak minor transfer",
                |r| r.hcp() <= 7 && r.hand.longest_minor_length() >= 6,
                |_| {
                    Feedback::bid(2, Strain::Spades).then("Pass").because(
                        "Response to 1 NT. 0-7 HCP, 6+ card minor. Partner must bid 3 Clubs, which we then pass or correct to 3 Diamonds. A fit is guaranteed because partner has at least 2 cards in each suit.",
                    )
                },
            ),
            rule(
                "weak with nothing to show",
                |r| r.hcp() <= 7,
                |_| Feedback::pass().because("Response to 1 NT. 0-7 HCP and no suit to transfer to."),
            ),
            rule(
                "invitational no-trump raise",
                |r| (8..=9).contains(&r.hcp()) && no_trump_shape(&r.hand),
                |_| {
                    Feedback::bid(2, Strain::NoTrump).because(
                        "Response to 1 NT. 8-9 HCP, balanced hand or 5+ minor and no 4-card major.",
                    )
                },
            ),
            rule(
                "game no-trump raise",
                |r| (10..=15).contains(&r.hcp()) && no_trump_shape(&r.hand),
                |_| {
                    Feedback::bid(3, Strain::NoTrump).because(
                        "Response to 1 NT. 10-15 HCP, balanced hand or 5+ minor and no 4-card major.",
                    )
                },
            ),
            rule(
                "stayman",
                |r| (8..=15).contains(&r.hcp()) && r.hand.longest_major_length() == 4,
                |_| {
                    Feedback::bid(2, Strain::Clubs).because(
                        "Response to 1 NT. Stayman convention. Partner bids 2 Diamonds without a 4-card major; that says nothing about Diamonds.",
                    )
                },
            ),
            rule(
                "major transfer",
                |r| (8..=15).contains(&r.hcp()),
                |r| {
                    let major = r.hand.lowest_ranking_longest_major();
                    let game = r.hcp() >= 10;
                    // Only an exact six-card major is rebid; game strength otherwise
                    // continues with 2 NT.
                    let hint = match (major.cards == 6, game) {
                        (true, true) => format!("4 {}", major.suit),
                        (true, false) => format!("3 {}", major.suit),
                        (false, true) => "2 NT".to_string(),
                        (false, false) => "3 NT".to_string(),
                    };
                    transfer(2, major.suit)
                        .then(hint)
                        .because(transfer_reason("1 NT", "8+ HCP", major.suit))
                },
            ),
            rule(
                "balanced slam invitation",
                |r| r.hand.is_balanced(),
                |_| {
                    Feedback::bid(4, Strain::NoTrump)
                        .because("Response to 1 NT. 16+ HCP, balanced hand. We are inviting 6 NT.")
                },
            ),
            rule(
                "strong long suit",
                |_| true,
                |r| {
                    Feedback::bid(4, r.hand.lowest_ranking_longest_suit().suit).because(
                        "Response to 1 NT. 16+ HCP, unbalanced hand. We bid our longest, lowest ranking suit. 11-12 tricks should be possible.",
                    )
                },
            ),
        ],
    )
});

fn no_trump_shape(hand: &Hand) -> bool {
    hand.is_balanced() || (hand.longest_minor_length() >= 5 && hand.longest_major_length() <= 3)
}

/// The first suit, spades down, that can be shown at the one level.
fn one_level_suit(r: &Responding) -> Option<SuitQuality> {
    r.hand
        .suit_qualities()
        .into_iter()
        .find(|q| q.cards >= 4 && Strain::from(q.suit).outranks(r.strain))
}

fn new_suit_reason(r: &Responding, plain: String, jump: bool) -> String {
    if !r.has_major_fit() {
        return plain;
    }
    let mut reason = format!(
        "Response to {}. 13+ total points, major suit fit. We bid a new suit to check no-trump compatibility, but can still come back to the original suit.",
        r.opening()
    );
    if jump {
        reason.push_str(" We jump a level because we have 19+ points and a 5+ card suit.");
    }
    reason
}

static ONE_OF_A_SUIT: Lazy<RuleTable<Responding>> = Lazy::new(|| {
    RuleTable::new(
        "response to one of a suit",
        vec![
            rule(
                "too weak to respond",
                |r| r.hand.points_with_shortness() <= 5,
                |_| Feedback::pass().because("0-5 total points."),
            ),
            rule(
                "simple major raise",
                |r| r.has_major_fit() && r.hand.points_with_shortness() <= 9,
                |r| {
                    r.raise(2).because(format!(
                        "Response to {}. 6-9 total points. Confirming the fit.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "invitational major raise",
                |r| r.has_major_fit() && r.hand.points_with_shortness() <= 12,
                |r| {
                    r.raise(3).because(format!(
                        "Response to {}. 10-12 total points. Confirming the fit and inviting game.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "new suit at the one level",
                |r| one_level_suit(r).is_some(),
                |r| {
                    let Some(quality) = one_level_suit(r) else {
                        return Feedback::improvise();
                    };
                    if r.hand.points_with_length() >= 19 && quality.cards >= 5 {
                        let plain = format!(
                            "Response to {}. 19+ total points. We jump bid a new 5+ card suit.",
                            r.opening()
                        );
                        let jump = r.hand.lowest_ranking_longest_suit().suit;
                        Feedback::bid(2, jump).because(new_suit_reason(r, plain, true))
                    } else {
                        let plain = format!(
                            "Response to {}. 6+ total points. We bid a new 4+ card suit.",
                            r.opening()
                        );
                        Feedback::bid(1, quality.suit).because(new_suit_reason(r, plain, false))
                    }
                },
            ),
            rule(
                "new suit at the two level",
                |r| {
                    r.hand.points_with_length() >= 11
                        && r.hand.lowest_ranking_longest_suit().cards >= 4
                },
                |r| {
                    let quality = r.hand.lowest_ranking_longest_suit();
                    if r.hcp() >= 19 && quality.cards >= 5 {
                        let plain = format!(
                            "Response to {}. 19+ total points. We jump bid a new 5+ card suit.",
                            r.opening()
                        );
                        Feedback::bid(3, quality.suit).because(new_suit_reason(r, plain, true))
                    } else {
                        let plain = format!(
                            "Response to {}. 11+ total points. We bid a new suit at the 2 level.",
                            r.opening()
                        );
                        Feedback::bid(2, quality.suit).because(new_suit_reason(r, plain, false))
                    }
                },
            ),
            rule(
                "major fit game raise",
                |r| r.support() >= 3 && r.hand.points_with_shortness() >= 16,
                |r| {
                    r.raise(4).because(format!(
                        "Response to {}. 16+ total points and a major suit fit, but no new 4+ card suit. Confirm the fit and bid game.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "major fit invitation",
                |r| r.support() >= 3 && r.hand.points_with_shortness() >= 13,
                |r| {
                    r.raise(3).because(format!(
                        "Response to {}. 13+ total points and a major suit fit, but no new 4+ card suit. Confirm the fit and invite game.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "minor suit raise",
                |r| match r.strain {
                    Strain::Clubs => r.support() >= 5,
                    Strain::Diamonds => r.support() >= 4,
                    _ => false,
                },
                |r| {
                    let level = if r.hand.points_with_shortness() >= 10 { 3 } else { 2 };
                    r.raise(level).because(format!(
                        "Response to {}. {} fit.",
                        r.opening(),
                        r.strain.name()
                    ))
                },
            ),
            rule(
                "one no-trump response",
                |r| r.hcp() <= 11,
                |r| {
                    Feedback::bid(1, Strain::NoTrump).because(format!(
                        "Response to {}. 6-11 HCP. No fit and no new suit to bid.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "two no-trump response",
                |r| r.hcp() <= 15,
                |r| {
                    Feedback::bid(2, Strain::NoTrump).because(format!(
                        "Response to {}. 12-15 HCP. No fit and no new suit to bid.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "three no-trump response",
                |_| true,
                |r| {
                    Feedback::bid(3, Strain::NoTrump).because(format!(
                        "Response to {}. 16+ HCP. No fit and no new suit to bid, so we bid game in no-trump.",
                        r.opening()
                    ))
                },
            ),
        ],
    )
});

static TWO_NO_TRUMP: Lazy<RuleTable<Responding>> = Lazy::new(|| {
    RuleTable::new(
        "response to 2NT",
        vec![
            rule(
                "too weak to respond",
                |r| r.hcp() <= 3,
                |_| Feedback::pass().because("Response to 2 NT. 0-3 HCP."),
            ),
            rule(
                "no-trump game",
                |r| {
                    r.hcp() < 12
                        && (r.hand.is_balanced()
                            || r.hand.longest_suits().iter().all(|suit| suit.is_minor()))
                },
                |_| {
                    Feedback::bid(3, Strain::NoTrump)
                        .because("Response to 2 NT. 4-11 HCP, balanced hand or long minor.")
                },
            ),
            rule(
                "major transfer",
                |r| r.hcp() < 12 && r.hand.longest_major_length() >= 5,
                |r| {
                    let major = r.hand.lowest_ranking_longest_major();
                    let hint = if major.cards >= 6 {
                        format!("4 {}", major.suit)
                    } else {
                        "3 NT".to_string()
                    };
                    transfer(3, major.suit)
                        .then(hint)
                        .because(transfer_reason("2 NT", "4-11 HCP", major.suit))
                },
            ),
            rule(
                "stayman",
                |r| r.hcp() < 12 && r.hand.longest_major_length() == 4,
                |_| {
                    Feedback::bid(3, Strain::Clubs).because(
                        "Response to 2 NT. Stayman convention. Partner bids 3 Diamonds without a 4-card major; that says nothing about Diamonds.",
                    )
                },
            ),
            rule(
                "balanced slam invitation",
                |r| r.hand.is_balanced(),
                |_| {
                    Feedback::bid(4, Strain::NoTrump)
                        .because("Response to 2 NT. 12+ HCP, balanced hand. We are inviting 6 NT.")
                },
            ),
            rule(
                "strong long suit",
                |_| true,
                |r| {
                    Feedback::bid(4, r.hand.highest_ranking_longest_suit().suit).because(
                        "Response to 2 NT. 12+ HCP, unbalanced hand. We bid a long suit and skip a level so partner doesn't misread it.",
                    )
                },
            ),
        ],
    )
});

const ACE_AND_KING: &str = "only if you have an Ace and a King";

static STRONG_TWO_CLUBS: Lazy<RuleTable<Responding>> = Lazy::new(|| {
    RuleTable::new(
        "response to 2C",
        vec![
            rule(
                "balanced positive",
                |r| r.hcp() >= 7 && r.hand.is_balanced(),
                |r| {
                    Feedback::bid(2, Strain::NoTrump)
                        .only_if(r.hcp() == 7, ACE_AND_KING)
                        .because("Response to 2 Clubs. 7+ HCP, balanced hand.")
                },
            ),
            rule(
                "positive in diamonds",
                |r| r.hcp() >= 7 && r.hand.only_longest_is(Suit::Diamonds),
                |r| {
                    Feedback::bid(3, Strain::Diamonds)
                        .only_if(r.hcp() == 7, ACE_AND_KING)
                        .because("Response to 2 Clubs. 7+ HCP, long Diamonds. We jump a level because 2 Diamonds is the negative response.")
                },
            ),
            rule(
                "positive in clubs",
                |r| r.hcp() >= 7 && r.hand.lowest_ranking_longest_suit().suit == Suit::Clubs,
                |r| {
                    Feedback::bid(3, Strain::Clubs)
                        .only_if(r.hcp() == 7, ACE_AND_KING)
                        .because("Response to 2 Clubs. 7+ HCP, long Clubs.")
                },
            ),
            rule(
                "positive in the longest suit",
                |r| r.hcp() >= 7,
                |r| {
                    Feedback::bid(2, r.hand.lowest_ranking_longest_suit().suit)
                        .only_if(r.hcp() == 7, ACE_AND_KING)
                        .because("Response to 2 Clubs. 7+ HCP, unbalanced hand. We bid our longest suit.")
                },
            ),
            rule(
                "negative",
                |_| true,
                |_| {
                    Feedback::bid(2, Strain::Diamonds)
                        .because("Response to 2 Clubs. 0-6 HCP. Negative response.")
                },
            ),
        ],
    )
});

static WEAK_TWO: Lazy<RuleTable<Responding>> = Lazy::new(|| {
    RuleTable::new(
        "response to a weak two",
        vec![
            rule(
                "raise with three-card support",
                |r| r.hand.points_with_shortness() < 15 && r.support() == 3,
                |r| {
                    r.raise(3).because(format!(
                        "Response to {}. 0-14 points and 3-card support.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "game raise with four-card support",
                |r| r.hand.points_with_shortness() < 15 && r.support() >= 4,
                |r| {
                    r.raise(4).because(format!(
                        "Response to {}. 0-14 points and 4+ card support.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "no support",
                |r| r.hand.points_with_shortness() < 15,
                |r| {
                    Feedback::pass().because(format!(
                        "Response to {}. 0-14 points and not enough support.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "strong balanced",
                |r| r.hand.is_balanced(),
                |r| {
                    Feedback::bid(2, Strain::NoTrump).because(format!(
                        "Response to {}. 15+ points and a balanced hand.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "strong in partner's suit",
                |r| Strain::from(r.hand.lowest_ranking_longest_suit().suit) == r.strain,
                |r| {
                    r.raise(4).because(format!(
                        "Response to {}. 15+ points and our longest suit is partner's.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "strong long suit",
                |_| true,
                |r| {
                    let suit = r.hand.lowest_ranking_longest_suit().suit;
                    let level = if r.strain.outranks(Strain::from(suit)) { 3 } else { 2 };
                    Feedback::bid(level, suit).because(format!(
                        "Response to {}. 15+ points and a long suit of {}.",
                        r.opening(),
                        suit
                    ))
                },
            ),
        ],
    )
});

static THREE_LEVEL_PREEMPT: Lazy<RuleTable<Responding>> = Lazy::new(|| {
    RuleTable::new(
        "response to a three-level pre-empt",
        vec![
            rule(
                "raise with support",
                |r| r.support() >= 3,
                |r| {
                    r.raise(4).because(format!(
                        "Response to {}. 3+ card support.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "strong balanced",
                |r| r.hcp() >= 16 && r.hand.is_balanced(),
                |r| {
                    Feedback::bid(3, Strain::NoTrump)
                        .only("only if game is certain")
                        .because(format!(
                            "Response to {}. 16+ points and a balanced hand.",
                            r.opening()
                        ))
                },
            ),
            rule(
                "long suit of our own",
                |r| r.hand.lowest_ranking_longest_suit().cards >= 6,
                |r| {
                    let suit = r.hand.lowest_ranking_longest_suit().suit;
                    let level = if r.strain.outranks(Strain::from(suit)) { 4 } else { 3 };
                    Feedback::bid(level, suit).because(format!(
                        "Response to {}. 16+ points and 6+ {}.",
                        r.opening(),
                        suit
                    ))
                },
            ),
            rule(
                "no support",
                |_| true,
                |r| {
                    Feedback::pass().because(format!(
                        "Response to {}. Not enough support.",
                        r.opening()
                    ))
                },
            ),
        ],
    )
});

static FOUR_LEVEL_PREEMPT: Lazy<RuleTable<Responding>> = Lazy::new(|| {
    RuleTable::new(
        "response to a four-level pre-empt",
        vec![
            rule(
                "raise with support",
                |r| r.support() >= 3,
                |r| {
                    r.raise(5).because(format!(
                        "Response to {}. 3+ card support.",
                        r.opening()
                    ))
                },
            ),
            rule(
                "no support",
                |_| true,
                |r| {
                    Feedback::pass().because(format!(
                        "Response to {}. Not enough support.",
                        r.opening()
                    ))
                },
            ),
        ],
    )
});

pub static RESPONDING: Lazy<RouteTable<Responding>> = Lazy::new(|| {
    RouteTable::new(
        "responding",
        vec![
            Route {
                name: "partner opened 1NT",
                applies: |r: &Responding| r.opened(1, Strain::NoTrump),
                table: || &*ONE_NO_TRUMP,
            },
            Route {
                name: "partner opened one of a suit",
                applies: |r: &Responding| r.opened_suit(1),
                table: || &*ONE_OF_A_SUIT,
            },
            Route {
                name: "partner opened 2NT",
                applies: |r: &Responding| r.opened(2, Strain::NoTrump),
                table: || &*TWO_NO_TRUMP,
            },
            Route {
                name: "partner opened 2C",
                applies: |r: &Responding| r.opened(2, Strain::Clubs),
                table: || &*STRONG_TWO_CLUBS,
            },
            Route {
                name: "partner opened a weak two",
                applies: |r: &Responding| r.opened_suit(2),
                table: || &*WEAK_TWO,
            },
            Route {
                name: "partner pre-empted at the three level",
                applies: |r: &Responding| r.opened_suit(3),
                table: || &*THREE_LEVEL_PREEMPT,
            },
            Route {
                name: "partner pre-empted at the four level",
                applies: |r: &Responding| r.opened_suit(4),
                table: || &*FOUR_LEVEL_PREEMPT,
            },
        ],
    )
});

/// Runs the responding tables and attaches what partner's opening shows.
pub fn respond(ctx: &Responding, steps: &mut Vec<RuleStep>) -> Feedback {
    let feedback = RESPONDING.evaluate(ctx, steps);
    match describe_opening(ctx.level, ctx.strain) {
        Some(info) if feedback.kind != FeedbackKind::Improvise => feedback.partner_has(info),
        _ => feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(level: u8, strain: Strain) -> Call {
        Call::Bid { level, strain }
    }

    fn respond_to(
        partner: Call,
        hcp: u8,
        spades: u8,
        hearts: u8,
        diamonds: u8,
        clubs: u8,
    ) -> Feedback {
        let hand = Hand::new(hcp, spades, hearts, diamonds, clubs).unwrap();
        respond(&Responding::new(hand, partner).unwrap(), &mut Vec::new())
    }

    #[test]
    fn test_non_contract_has_no_context() {
        let hand = Hand::new(10, 4, 3, 3, 3).unwrap();
        assert!(Responding::new(hand, Call::Double).is_none());
    }

    #[test]
    fn test_weak_transfer_over_one_no_trump() {
        let feedback = respond_to(bid(1, Strain::NoTrump), 5, 6, 3, 2, 2);
        assert_eq!(feedback.call, bid(2, Strain::Hearts));
        assert_eq!(feedback.next_call_hint.as_deref(), Some("Pass"));
        assert_eq!(
            feedback.partner_info.as_deref(),
            Some("15-17 HCP and a balanced hand")
        );
        assert!(feedback.rationale.unwrap().contains("Transfer"));
    }

    #[test]
    fn test_weak_responses_to_one_no_trump() {
        let one_nt = bid(1, Strain::NoTrump);
        assert_eq!(respond_to(one_nt, 6, 4, 3, 3, 3).call, Call::Pass);
        assert_eq!(respond_to(one_nt, 3, 2, 5, 4, 2).call, bid(2, Strain::Diamonds));
        assert_eq!(respond_to(one_nt, 4, 3, 1, 6, 3).call, bid(2, Strain::Spades));
        assert_eq!(respond_to(one_nt, 4, 1, 3, 4, 5).call, Call::Pass);
    }

    #[test]
    fn test_invitational_responses_to_one_no_trump() {
        let one_nt = bid(1, Strain::NoTrump);
        assert_eq!(respond_to(one_nt, 9, 3, 3, 4, 3).call, bid(2, Strain::NoTrump));
        assert_eq!(respond_to(one_nt, 11, 3, 3, 4, 3).call, bid(3, Strain::NoTrump));
        assert_eq!(respond_to(one_nt, 10, 4, 4, 4, 1).call, bid(2, Strain::Clubs));
        assert_eq!(respond_to(one_nt, 17, 4, 3, 3, 3).call, bid(4, Strain::NoTrump));
        assert_eq!(respond_to(one_nt, 17, 1, 2, 5, 5).call, bid(4, Strain::Clubs));
    }

    #[test]
    fn test_transfer_hints() {
        let one_nt = bid(1, Strain::NoTrump);
        let hint = |hcp, spades, hearts, diamonds, clubs| {
            respond_to(one_nt, hcp, spades, hearts, diamonds, clubs)
                .next_call_hint
                .unwrap()
        };
        assert_eq!(hint(8, 1, 5, 4, 3), "3 NT");
        assert_eq!(hint(12, 1, 5, 4, 3), "2 NT");
        assert_eq!(hint(9, 6, 1, 3, 3), "3 Spades");
        assert_eq!(hint(12, 6, 1, 3, 3), "4 Spades");
        // A seven-card major takes the no-trump continuation.
        assert_eq!(hint(12, 7, 1, 3, 2), "2 NT");
    }

    #[test]
    fn test_major_raises_over_one_of_a_major() {
        let one_heart = bid(1, Strain::Hearts);
        assert_eq!(respond_to(one_heart, 4, 4, 3, 3, 3).call, Call::Pass);
        assert_eq!(respond_to(one_heart, 8, 3, 3, 4, 3).call, bid(2, Strain::Hearts));
        assert_eq!(respond_to(one_heart, 11, 3, 3, 4, 3).call, bid(3, Strain::Hearts));
        let feedback = respond_to(one_heart, 11, 3, 3, 4, 3);
        assert_eq!(
            feedback.partner_info.as_deref(),
            Some("12-21 total points and 5+ Hearts")
        );
    }

    #[test]
    fn test_new_suits_over_one_of_a_suit() {
        let one_diamond = bid(1, Strain::Diamonds);
        assert_eq!(respond_to(one_diamond, 8, 4, 3, 3, 3).call, bid(1, Strain::Spades));
        assert_eq!(respond_to(one_diamond, 18, 6, 3, 2, 2).call, bid(2, Strain::Spades));

        let one_spade = bid(1, Strain::Spades);
        assert_eq!(respond_to(one_spade, 12, 2, 3, 4, 4).call, bid(2, Strain::Clubs));
    }

    #[test]
    fn test_jump_shift_uses_lowest_ranking_longest_suit() {
        // Spades can be shown at the one level, but the jump is in diamonds.
        let one_club = bid(1, Strain::Clubs);
        let feedback = respond_to(one_club, 19, 5, 1, 5, 2);
        assert_eq!(feedback.call, bid(2, Strain::Diamonds));
        assert_eq!(feedback.rule, "new suit at the one level");
    }

    #[test]
    fn test_two_level_suit_may_be_partners() {
        let one_club = bid(1, Strain::Clubs);
        let feedback = respond_to(one_club, 11, 3, 3, 2, 5);
        assert_eq!(feedback.call, bid(2, Strain::Clubs));
        assert_eq!(feedback.rule, "new suit at the two level");

        let one_spade = bid(1, Strain::Spades);
        assert_eq!(respond_to(one_spade, 16, 4, 3, 3, 3).call, bid(2, Strain::Spades));
    }

    #[test]
    fn test_major_fit_without_new_suit() {
        let one_spade = bid(1, Strain::Spades);
        // Nothing outranks spades, so the four diamonds come first.
        assert_eq!(respond_to(one_spade, 14, 3, 3, 4, 3).call, bid(2, Strain::Diamonds));
        let invite = respond_to(one_spade, 8, 3, 5, 5, 0);
        assert_eq!(invite.call, bid(3, Strain::Spades));
        assert_eq!(invite.rule, "major fit invitation");
    }

    #[test]
    fn test_no_trump_fallbacks_over_one_of_a_suit() {
        let one_spade = bid(1, Strain::Spades);
        assert_eq!(respond_to(one_spade, 7, 2, 3, 4, 4).call, bid(1, Strain::NoTrump));
        let one_club = bid(1, Strain::Clubs);
        assert_eq!(respond_to(one_club, 8, 3, 3, 2, 5).call, bid(2, Strain::Clubs));
        assert_eq!(respond_to(one_club, 8, 3, 3, 3, 4).call, bid(1, Strain::NoTrump));
    }

    #[test]
    fn test_responses_to_two_no_trump() {
        let two_nt = bid(2, Strain::NoTrump);
        assert_eq!(respond_to(two_nt, 3, 4, 3, 3, 3).call, Call::Pass);
        assert_eq!(respond_to(two_nt, 6, 4, 3, 3, 3).call, bid(3, Strain::NoTrump));
        let transfer = respond_to(two_nt, 6, 2, 6, 3, 2);
        assert_eq!(transfer.call, bid(3, Strain::Diamonds));
        assert_eq!(transfer.next_call_hint.as_deref(), Some("4 Hearts"));
        assert_eq!(respond_to(two_nt, 6, 4, 4, 4, 1).call, bid(3, Strain::Clubs));
        assert_eq!(respond_to(two_nt, 13, 3, 3, 4, 3).call, bid(4, Strain::NoTrump));
        assert_eq!(respond_to(two_nt, 13, 5, 5, 2, 1).call, bid(4, Strain::Spades));
    }

    #[test]
    fn test_responses_to_strong_two_clubs() {
        let two_clubs = bid(2, Strain::Clubs);
        let balanced = respond_to(two_clubs, 7, 4, 3, 3, 3);
        assert_eq!(balanced.call, bid(2, Strain::NoTrump));
        assert_eq!(balanced.extra_requirement.as_deref(), Some(ACE_AND_KING));
        assert!(respond_to(two_clubs, 9, 4, 3, 3, 3).extra_requirement.is_none());
        assert_eq!(respond_to(two_clubs, 9, 1, 3, 6, 3).call, bid(3, Strain::Diamonds));
        assert_eq!(respond_to(two_clubs, 9, 1, 3, 3, 6).call, bid(3, Strain::Clubs));
        assert_eq!(respond_to(two_clubs, 9, 6, 3, 3, 1).call, bid(2, Strain::Spades));
        // Diamonds tied with hearts is not a diamond positive.
        let tied = respond_to(two_clubs, 9, 1, 5, 5, 2);
        assert_eq!(tied.call, bid(2, Strain::Diamonds));
        assert_eq!(tied.rule, "positive in the longest suit");
        assert_eq!(respond_to(two_clubs, 5, 6, 3, 3, 1).call, bid(2, Strain::Diamonds));
    }

    #[test]
    fn test_responses_to_weak_two() {
        let two_hearts = bid(2, Strain::Hearts);
        assert_eq!(respond_to(two_hearts, 8, 4, 3, 3, 3).call, bid(3, Strain::Hearts));
        assert_eq!(respond_to(two_hearts, 8, 3, 4, 3, 3).call, bid(4, Strain::Hearts));
        assert_eq!(respond_to(two_hearts, 8, 4, 2, 4, 3).call, Call::Pass);
        assert_eq!(respond_to(two_hearts, 15, 4, 2, 4, 3).call, bid(2, Strain::NoTrump));
        assert_eq!(respond_to(two_hearts, 15, 6, 1, 4, 2).call, bid(2, Strain::Spades));
        assert_eq!(respond_to(two_hearts, 15, 1, 1, 6, 5).call, bid(3, Strain::Diamonds));
        // Our longest suit is partner's: raise to game rather than repeat 2 Hearts.
        assert_eq!(respond_to(two_hearts, 15, 1, 6, 4, 2).call, bid(4, Strain::Hearts));
    }

    #[test]
    fn test_responses_to_preempts() {
        let three_spades = bid(3, Strain::Spades);
        assert_eq!(respond_to(three_spades, 5, 3, 4, 3, 3).call, bid(4, Strain::Spades));
        let game = respond_to(three_spades, 17, 2, 4, 4, 3);
        assert_eq!(game.call, bid(3, Strain::NoTrump));
        assert_eq!(game.extra_requirement.as_deref(), Some("only if game is certain"));
        assert_eq!(respond_to(three_spades, 16, 1, 6, 3, 3).call, bid(4, Strain::Hearts));
        assert_eq!(respond_to(three_spades, 10, 1, 6, 3, 3).call, bid(4, Strain::Hearts));
        assert_eq!(respond_to(three_spades, 10, 1, 4, 4, 4).call, Call::Pass);

        let four_hearts = bid(4, Strain::Hearts);
        assert_eq!(respond_to(four_hearts, 5, 3, 3, 4, 3).call, bid(5, Strain::Hearts));
        let pass = respond_to(four_hearts, 5, 4, 2, 4, 3);
        assert_eq!(pass.call, Call::Pass);
        assert_eq!(
            pass.partner_info.as_deref(),
            Some("5-10 HCP but 8+ Hearts with good suit quality")
        );
    }

    #[test]
    fn test_unknown_openings_improvise() {
        for partner in [bid(3, Strain::NoTrump), bid(5, Strain::Clubs)] {
            let feedback = respond_to(partner, 10, 4, 3, 3, 3);
            assert_eq!(feedback.kind, FeedbackKind::Improvise);
            assert!(feedback.partner_info.is_none());
        }
    }
}

use crate::dsl::{Rule, RuleTable};
use crate::feedback::Feedback;
use bridge_core::{Hand, Strain, Suit};
use once_cell::sync::Lazy;

const PREEMPT_HONORS: &str = "only with 2+ honors";

fn rule(
    name: &'static str,
    applies: fn(&Hand) -> bool,
    respond: fn(&Hand) -> Feedback,
) -> Rule<Hand> {
    Rule::new(name, applies, respond)
}

/// Fewer than 12 points even after counting length.
fn is_weak(hand: &Hand) -> bool {
    hand.points_with_length() < 12
}

fn is_minimum_balanced(hand: &Hand) -> bool {
    hand.is_balanced() && hand.hcp() < 15
}

pub static OPENING: Lazy<RuleTable<Hand>> = Lazy::new(|| {
    RuleTable::new(
        "opening",
        vec![
            rule(
                "too few high-card points",
                |h| h.hcp() < 5,
                |_| Feedback::pass().because("Fewer than 5 HCP."),
            ),
            rule(
                "weak without a long suit",
                |h| is_weak(h) && h.max_length() < 6,
                |_| {
                    Feedback::pass()
                        .because("Fewer than 12 points counting length, and no 6-card suit.")
                },
            ),
            rule(
                "three clubs pre-empt",
                |h| {
                    is_weak(h)
                        && h.max_length() == 6
                        && h.only_longest_is(Suit::Clubs)
                        && h.hcp() >= 8
                },
                |_| {
                    Feedback::bid(3, Strain::Clubs).only(PREEMPT_HONORS).because(
                        "8-10 HCP and 6 Clubs. 2 Clubs has a special meaning, so we jump to 3, but only with good quality.",
                    )
                },
            ),
            rule(
                "weak six clubs",
                |h| is_weak(h) && h.max_length() == 6 && h.only_longest_is(Suit::Clubs),
                |_| {
                    Feedback::pass().because(
                        "6 Clubs but fewer than 8 HCP. 2 Clubs is reserved for strong hands.",
                    )
                },
            ),
            rule(
                "weak two",
                |h| is_weak(h) && h.max_length() == 6,
                |h| {
                    let suit = h.lowest_ranking_longest_non_club().suit;
                    let mut reason = String::from(
                        "5-10 HCP but one or more 6-card suits. We bid the lowest ranking one to give partner more space to bid new suits.",
                    );
                    if h.longest_suits().contains(&Suit::Clubs) {
                        reason.push_str(" We don't bid 2 Clubs because that has another, specific meaning.");
                    }
                    Feedback::bid(2, suit).only(PREEMPT_HONORS).because(reason)
                },
            ),
            rule(
                "three-level pre-empt",
                |h| is_weak(h) && h.max_length() == 7,
                |h| {
                    Feedback::bid(3, h.lowest_ranking_longest_suit().suit)
                        .only(PREEMPT_HONORS)
                        .because("5-10 HCP but a 7-card suit.")
                },
            ),
            rule(
                "four-level pre-empt",
                |h| is_weak(h) && h.max_length() >= 8,
                |h| {
                    Feedback::bid(4, h.lowest_ranking_longest_suit().suit)
                        .only(PREEMPT_HONORS)
                        .because("5-10 HCP but an 8+ card suit.")
                },
            ),
            rule(
                "flat twelve count",
                |h| is_minimum_balanced(h) && h.hcp() == 12 && h.min_length() == 3,
                |_| {
                    Feedback::pass()
                        .because("12 HCP and 4-3-3-3 shape don't meet the rule of 20.")
                },
            ),
            rule(
                "balanced with a five-card major",
                |h| {
                    is_minimum_balanced(h)
                        && h.max_length() == 5
                        && h.longest_suits().iter().all(|suit| suit.is_major())
                },
                |h| {
                    let suit = h.lowest_ranking_longest_major().suit;
                    Feedback::bid(1, suit).because(format!(
                        "Balanced hand with 12-14 total points and 5 {}.",
                        suit
                    ))
                },
            ),
            rule(
                "balanced with four-four minors",
                |h| {
                    is_minimum_balanced(h)
                        && h.length(Suit::Clubs) == 4
                        && h.length(Suit::Diamonds) == 4
                },
                |_| {
                    Feedback::bid(1, Strain::Diamonds)
                        .because("Balanced hand, less than 15 HCP, 4 Clubs and 4 Diamonds.")
                },
            ),
            rule(
                "balanced with three-three minors",
                |h| {
                    is_minimum_balanced(h)
                        && h.length(Suit::Clubs) == 3
                        && h.length(Suit::Diamonds) == 3
                },
                |_| {
                    Feedback::bid(1, Strain::Clubs)
                        .because("Balanced hand, less than 15 HCP, 3 Clubs and 3 Diamonds.")
                },
            ),
            rule(
                "balanced longer minor",
                is_minimum_balanced,
                |h| {
                    let suit = h.lowest_ranking_longest_among(Suit::MINORS).suit;
                    Feedback::bid(1, suit).because(format!(
                        "Balanced hand, less than 15 HCP, {} is the longer minor.",
                        suit
                    ))
                },
            ),
            rule(
                "one no-trump",
                |h| h.is_balanced() && h.hcp() <= 18,
                |_| Feedback::bid(1, Strain::NoTrump).because("15-18 HCP, balanced hand."),
            ),
            rule(
                "two no-trump",
                |h| h.is_balanced() && h.hcp() <= 21,
                |_| Feedback::bid(2, Strain::NoTrump).because("19-21 HCP, balanced hand."),
            ),
            rule(
                "strong balanced two clubs",
                |h| h.is_balanced(),
                |_| Feedback::bid(2, Strain::Clubs).because("22+ HCP, balanced hand."),
            ),
            rule(
                "strong two clubs",
                |h| h.points_with_length() >= 22,
                |_| Feedback::bid(2, Strain::Clubs).because("22+ points with a 5+ card suit."),
            ),
            rule(
                "one of a major",
                |h| h.lowest_ranking_longest_major().cards >= 5,
                |h| {
                    Feedback::bid(1, h.lowest_ranking_longest_major().suit).because(
                        "Unbalanced hand with 12-21 total points. With several long majors we bid the lowest ranking one first.",
                    )
                },
            ),
            rule(
                "one of the longest suit",
                |_| true,
                |h| {
                    Feedback::bid(1, h.lowest_ranking_longest_suit().suit).because(
                        "Unbalanced hand with 12-21 total points and no 5+ card major. We bid the longest, lowest ranking suit first.",
                    )
                },
            ),
        ],
    )
});

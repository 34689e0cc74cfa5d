use crate::feedback::Feedback;
use crate::trace::RuleStep;
use tracing::{debug, warn};

/// A single guarded entry of a decision table.
pub struct Rule<C> {
    pub name: &'static str,
    pub applies: fn(&C) -> bool,
    pub respond: fn(&C) -> Feedback,
}

impl<C> Rule<C> {
    pub fn new(
        name: &'static str,
        applies: fn(&C) -> bool,
        respond: fn(&C) -> Feedback,
    ) -> Self {
        Self {
            name,
            applies,
            respond,
        }
    }
}

/// Rules evaluated top to bottom; the first one that applies answers.
pub struct RuleTable<C> {
    name: &'static str,
    rules: Vec<Rule<C>>,
}

impl<C> RuleTable<C> {
    pub fn new(name: &'static str, rules: Vec<Rule<C>>) -> Self {
        Self { name, rules }
    }

    pub fn decide(&self, ctx: &C) -> Feedback {
        self.evaluate(ctx, &mut Vec::new())
    }

    /// Like [`RuleTable::decide`], appending one step per rule consulted.
    pub fn evaluate(&self, ctx: &C, steps: &mut Vec<RuleStep>) -> Feedback {
        for rule in &self.rules {
            let matched = (rule.applies)(ctx);
            steps.push(RuleStep::new(self.name, rule.name, matched));
            if matched {
                debug!(table = self.name, rule = rule.name, "rule matched");
                let mut feedback = (rule.respond)(ctx);
                feedback.rule = rule.name.to_string();
                return feedback;
            }
        }

        warn!(table = self.name, "no rule matched");
        Feedback::improvise()
    }
}

/// Selects which decision table handles a situation.
pub struct Route<C: 'static> {
    pub name: &'static str,
    pub applies: fn(&C) -> bool,
    pub table: fn() -> &'static RuleTable<C>,
}

/// An ordered list of routes to sub-tables, again first match wins.
pub struct RouteTable<C: 'static> {
    name: &'static str,
    routes: Vec<Route<C>>,
}

impl<C: 'static> RouteTable<C> {
    pub fn new(name: &'static str, routes: Vec<Route<C>>) -> Self {
        Self { name, routes }
    }

    pub fn decide(&self, ctx: &C) -> Feedback {
        self.evaluate(ctx, &mut Vec::new())
    }

    pub fn evaluate(&self, ctx: &C, steps: &mut Vec<RuleStep>) -> Feedback {
        for route in &self.routes {
            let matched = (route.applies)(ctx);
            steps.push(RuleStep::new(self.name, route.name, matched));
            if matched {
                return (route.table)().evaluate(ctx, steps);
            }
        }

        warn!(table = self.name, "no route matched");
        Feedback::improvise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::{Call, Strain};

    fn rule(name: &'static str, applies: fn(&u8) -> bool, respond: fn(&u8) -> Feedback) -> Rule<u8> {
        Rule::new(name, applies, respond)
    }

    fn table() -> RuleTable<u8> {
        RuleTable::new(
            "numbers",
            vec![
                rule("small", |n| *n < 5, |_| Feedback::pass()),
                rule("even", |n| n % 2 == 0, |_| Feedback::bid(1, Strain::Clubs)),
                rule("also small", |n| *n < 10, |_| Feedback::bid(1, Strain::Spades)),
            ],
        )
    }

    #[test]
    fn test_first_match_wins() {
        let table = table();
        // 2 is small and even; the earlier rule answers.
        let feedback = table.decide(&2);
        assert_eq!(feedback.call, Call::Pass);
        assert_eq!(feedback.rule, "small");

        let feedback = table.decide(&7);
        assert_eq!(feedback.rule, "also small");
    }

    #[test]
    fn test_steps_stop_at_match() {
        let mut steps = Vec::new();
        let feedback = table().evaluate(&8, &mut steps);
        assert_eq!(feedback.rule, "even");
        let names: Vec<_> = steps.iter().map(|s| (s.rule, s.matched)).collect();
        assert_eq!(names, vec![("small", false), ("even", true)]);
    }

    #[test]
    fn test_fallthrough_improvises() {
        let feedback = table().decide(&11);
        assert_eq!(feedback.kind, crate::FeedbackKind::Improvise);
        assert_eq!(feedback.call, Call::Pass);
    }

    static INNER: once_cell::sync::Lazy<RuleTable<u8>> = once_cell::sync::Lazy::new(table);

    #[test]
    fn test_routes_delegate() {
        let routes = RouteTable::new(
            "router",
            vec![
                Route::<u8> {
                    name: "never",
                    applies: |_: &u8| false,
                    table: || &*INNER,
                },
                Route::<u8> {
                    name: "always",
                    applies: |_: &u8| true,
                    table: || &*INNER,
                },
            ],
        );
        let mut steps = Vec::new();
        let feedback = routes.evaluate(&3, &mut steps);
        assert_eq!(feedback.rule, "small");
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].table, "router");
        assert_eq!(steps[2].table, "numbers");
    }
}

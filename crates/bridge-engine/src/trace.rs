use crate::feedback::Feedback;
use serde::Serialize;

/// One rule consulted while deciding, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleStep {
    pub table: &'static str,
    pub rule: &'static str,
    pub matched: bool,
}

impl RuleStep {
    pub fn new(table: &'static str, rule: &'static str, matched: bool) -> Self {
        Self {
            table,
            rule,
            matched,
        }
    }
}

/// Feedback together with how the engine arrived at it.
#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    pub feedback: Feedback,
    pub steps: Vec<RuleStep>,
}

impl Advice {
    /// The rules that were consulted and declined.
    pub fn skipped(&self) -> impl Iterator<Item = &RuleStep> {
        self.steps.iter().filter(|step| !step.matched)
    }
}

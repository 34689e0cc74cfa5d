use bridge_core::{Call, Strain};
use serde::Serialize;

/// How much weight the suggested call carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedbackKind {
    /// A genuine suggestion for the user's next call.
    Recommendation,
    /// The call is a placeholder; only the description of partner's hand is useful.
    InformationOnly,
    /// No programmed scenario applies.
    Improvise,
}

/// What the opener learned about opponent action between the opening and
/// partner's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Interference {
    /// Partner passed after an overcall and may be slightly stronger than a pass suggests.
    PartnerPassedOverInterference,
    /// We were overcalled, but partner's response is read as if there was no overcall.
    DidNotAffectResponse,
    /// Partner's response is read as if it were `levels` level(s) lower.
    ResponseAdjusted { levels: i8 },
}

impl Interference {
    pub fn describe(self) -> String {
        match self {
            Interference::PartnerPassedOverInterference => {
                "Partner passed after an overcall. This could mean they have a slightly better hand than we think.".to_string()
            }
            Interference::DidNotAffectResponse => {
                "We were overcalled, but this didn't necessarily affect our partner's response. We are interpreting it normally.".to_string()
            }
            Interference::ResponseAdjusted { levels } => format!(
                "We were overcalled, and this affected our partner's response. We are interpreting it as if they bid {} level(s) lower.",
                levels
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub call: Call,
    pub kind: FeedbackKind,
    /// The decision-table rule that produced this feedback.
    pub rule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_call_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_requirement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interference: Option<Interference>,
}

impl Feedback {
    pub fn recommend(call: Call) -> Self {
        Self {
            call,
            kind: FeedbackKind::Recommendation,
            rule: String::new(),
            rationale: None,
            partner_info: None,
            next_call_hint: None,
            extra_requirement: None,
            interference: None,
        }
    }

    pub fn pass() -> Self {
        Self::recommend(Call::Pass)
    }

    /// A contract bid; `level` must already be within 1..=7.
    pub fn bid(level: u8, strain: impl Into<Strain>) -> Self {
        Self::recommend(Call::Bid {
            level,
            strain: strain.into(),
        })
    }

    pub fn improvise() -> Self {
        Self {
            kind: FeedbackKind::Improvise,
            rule: "improvise".to_string(),
            ..Self::pass()
        }
        .because("None of the programmed scenarios occurred. Improvise your bid.")
    }

    pub fn information_only(mut self) -> Self {
        self.kind = FeedbackKind::InformationOnly;
        self
    }

    pub fn because(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    pub fn partner_has(mut self, info: impl Into<String>) -> Self {
        self.partner_info = Some(info.into());
        self
    }

    pub fn then(mut self, hint: impl Into<String>) -> Self {
        self.next_call_hint = Some(hint.into());
        self
    }

    pub fn only(mut self, requirement: impl Into<String>) -> Self {
        self.extra_requirement = Some(requirement.into());
        self
    }

    pub fn only_if(self, condition: bool, requirement: &str) -> Self {
        if condition {
            self.only(requirement)
        } else {
            self
        }
    }

    pub fn with_interference(mut self, interference: Option<Interference>) -> Self {
        self.interference = interference;
        self
    }

    pub fn is_recommendation(&self) -> bool {
        self.kind == FeedbackKind::Recommendation
    }
}

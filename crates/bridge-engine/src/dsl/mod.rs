//! Ordered, first-match-wins decision tables.
//!
//! Every phase of the bidding system is a literal list of named rules. The
//! order of that list is part of the convention: a rule is only consulted
//! when every rule above it declined.

pub mod rule;

pub use rule::{Route, RouteTable, Rule, RuleTable};

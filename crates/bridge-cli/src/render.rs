use crate::config::Config;
use anyhow::Result;
use bridge_engine::{Advice, Feedback, FeedbackKind, RuleStep};
use crossterm::style::{style, Color, Stylize};
use serde_json::json;
use std::fmt::Display;
use std::io::Write;

/// Formats advice and notices for the console.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
    json: bool,
}

impl Renderer {
    pub fn new(color: bool, json: bool) -> Self {
        Self { color, json }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.use_color(), config.json)
    }

    /// In JSON mode stdout carries one JSON object per line and nothing else.
    pub fn is_json(&self) -> bool {
        self.json
    }

    fn json_line(&self, out: &mut impl Write, value: serde_json::Value) -> Result<()> {
        writeln!(out, "{}", value)?;
        Ok(())
    }

    fn paint(&self, text: impl Display, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn advice(&self, out: &mut impl Write, advice: &Advice, trace: bool) -> Result<()> {
        if self.json {
            let line = if trace {
                serde_json::to_string(advice)?
            } else {
                serde_json::to_string(&advice.feedback)?
            };
            writeln!(out, "{}", line)?;
            return Ok(());
        }

        if trace {
            self.steps(out, &advice.steps)?;
        }
        self.feedback(out, &advice.feedback)
    }

    fn steps(&self, out: &mut impl Write, steps: &[RuleStep]) -> Result<()> {
        writeln!(out)?;
        for step in steps {
            let mark = if step.matched { "x" } else { " " };
            let line = format!("  [{}] {}: {}", mark, step.table, step.rule);
            writeln!(out, "{}", self.paint(line, Color::DarkGrey))?;
        }
        Ok(())
    }

    pub fn feedback(&self, out: &mut impl Write, feedback: &Feedback) -> Result<()> {
        if let Some(info) = &feedback.partner_info {
            writeln!(out)?;
            writeln!(out, "{}", self.paint(format!("Partner has {}.", info), Color::DarkMagenta))?;
        }
        if let Some(interference) = feedback.interference {
            writeln!(out, "{}", self.paint(interference.describe(), Color::DarkRed))?;
        }

        writeln!(out)?;
        if feedback.kind == FeedbackKind::Recommendation {
            let mut line = if feedback.call.is_pass() {
                self.paint("Pass", Color::DarkGreen)
            } else {
                let mut text = self.paint(format!("Bid {}", feedback.call.spoken()), Color::DarkGreen);
                if let Some(hint) = &feedback.next_call_hint {
                    text.push_str(&self.paint(format!(" then {}", hint), Color::Cyan));
                }
                text
            };
            if let Some(requirement) = &feedback.extra_requirement {
                line.push_str(&self.paint(format!(" {}", requirement), Color::DarkGreen));
            }
            writeln!(out, "{}", line)?;
        }
        if let Some(reason) = &feedback.rationale {
            writeln!(out, "{}", self.paint(format!("Reason: {}", reason), Color::DarkGreen))?;
        }
        writeln!(out)?;
        Ok(())
    }

    pub fn cant_help(&self, out: &mut impl Write) -> Result<()> {
        let text = "We can't help you anymore. Waiting for next hand.";
        if self.json {
            return self.json_line(out, json!({ "notice": text }));
        }
        writeln!(out)?;
        writeln!(out, "{}", self.paint(text, Color::DarkGreen))?;
        Ok(())
    }

    pub fn new_hand(&self, out: &mut impl Write) -> Result<()> {
        if self.json {
            return self.json_line(out, json!({ "notice": "New hand" }));
        }
        writeln!(out)?;
        writeln!(out, "{}", self.paint("New hand", Color::Red))?;
        writeln!(out)?;
        Ok(())
    }

    pub fn user_error(&self, out: &mut impl Write, title: &str, detail: impl Display) -> Result<()> {
        if self.json {
            return self.json_line(out, json!({ "error": title, "detail": detail.to_string() }));
        }
        writeln!(out)?;
        writeln!(out, "{}", self.paint(title, Color::Red))?;
        writeln!(out, "{}", detail)?;
        writeln!(out)?;
        Ok(())
    }
}

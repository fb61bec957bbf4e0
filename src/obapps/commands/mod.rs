//! Business logic for each editing operation.
//!
//! Each module exposes a `run` function over the mutable [`RuleDocument`].
//! Operations validate everything first and mutate only on success, so a
//! failed call leaves the document exactly as it was. No module here performs
//! I/O; results are returned as data for whatever front end sits above.

use crate::attrspec::ActionValue;
use crate::error::{ObAppsError, Result};
use crate::model::{MatchCriterion, Rule};

pub mod add;
pub mod delete;
pub mod list;
pub mod reorder;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A rule paired with its 1-based position, for presentation layers.
#[derive(Debug, Clone)]
pub struct DisplayRule {
    pub index: usize,
    pub rule: Rule,
}

impl DisplayRule {
    /// Short human-readable summary: criteria, then the fields set.
    pub fn describe(&self) -> String {
        let criteria = if self.rule.criteria.is_empty() {
            "(any window)".to_string()
        } else {
            self.rule
                .criteria
                .iter()
                .map(|c| format!("{}={}", c.field, c.pattern))
                .collect::<Vec<_>>()
                .join(" ")
        };
        let fields: Vec<&str> = self.rule.actions.keys().map(String::as_str).collect();
        if fields.is_empty() {
            criteria
        } else {
            format!("{} -> {}", criteria, fields.join(", "))
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_rules: Vec<Rule>,
    pub listed_rules: Vec<DisplayRule>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_rules(mut self, rules: Vec<Rule>) -> Self {
        self.affected_rules = rules;
        self
    }

    pub fn with_listed_rules(mut self, rules: Vec<DisplayRule>) -> Self {
        self.listed_rules = rules;
        self
    }
}

/// A partial edit for one rule. `None` criteria means "leave criteria
/// alone"; `set` and `unset` apply field by field.
#[derive(Debug, Clone, Default)]
pub struct RuleUpdate {
    pub criteria: Option<Vec<MatchCriterion>>,
    pub set: Vec<(String, ActionValue)>,
    pub unset: Vec<String>,
}

impl RuleUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(mut self, criteria: Vec<MatchCriterion>) -> Self {
        self.criteria = Some(criteria);
        self
    }

    pub fn set(mut self, field: impl Into<String>, value: ActionValue) -> Self {
        self.set.push((field.into(), value));
        self
    }

    pub fn unset(mut self, field: impl Into<String>) -> Self {
        self.unset.push(field.into());
        self
    }
}

/// At most one catch-all, and only in last position.
pub(crate) fn check_catch_all_order<'a, I>(rules: I) -> Result<()>
where
    I: IntoIterator<Item = &'a bool>,
{
    let flags: Vec<bool> = rules.into_iter().copied().collect();
    let catch_alls = flags.iter().filter(|f| **f).count();
    if catch_alls > 1 {
        return Err(ObAppsError::Constraint(
            "only one catch-all rule is allowed".to_string(),
        ));
    }
    if let Some(pos) = flags.iter().position(|f| *f) {
        if pos + 1 != flags.len() {
            return Err(ObAppsError::Constraint(
                "a catch-all rule must be the last rule".to_string(),
            ));
        }
    }
    Ok(())
}

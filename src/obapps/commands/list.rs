use crate::commands::{CmdResult, DisplayRule};
use crate::document::RuleDocument;
use crate::error::Result;

/// Read-only, 1-indexed view of the rules for a presentation layer.
pub fn run(doc: &RuleDocument) -> Result<CmdResult> {
    let listed = doc
        .rules()
        .enumerate()
        .map(|(i, rule)| DisplayRule {
            index: i + 1,
            rule: rule.clone(),
        })
        .collect();
    Ok(CmdResult::default().with_listed_rules(listed))
}

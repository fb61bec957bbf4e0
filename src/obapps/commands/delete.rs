use crate::commands::{CmdMessage, CmdResult};
use crate::document::RuleDocument;
use crate::error::Result;
use uuid::Uuid;

/// Remove a rule. Foreign content around it keeps its relative order.
pub fn run(doc: &mut RuleDocument, id: Uuid) -> Result<CmdResult> {
    let rule = doc.remove_rule(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Rule deleted: {}", id)));
    result.affected_rules.push(rule);
    Ok(result)
}

use crate::commands::{check_catch_all_order, CmdMessage, CmdResult};
use crate::document::RuleDocument;
use crate::error::{ObAppsError, Result};
use uuid::Uuid;

/// Move a rule to a new 0-based ordinal. The catch-all ordering is checked
/// against the prospective order before anything moves; on failure the
/// document is untouched. A moved rule is regenerated at its new position
/// (whitespace around its old slot stays with the neighbors it belonged to).
pub fn run(doc: &mut RuleDocument, id: Uuid, new_position: usize) -> Result<CmdResult> {
    let order: Vec<(Uuid, bool)> = doc.rules().map(|r| (r.id, r.is_catch_all())).collect();
    let current = order
        .iter()
        .position(|(rid, _)| *rid == id)
        .ok_or(ObAppsError::RuleNotFound(id))?;
    let new_position = new_position.min(order.len() - 1);

    if new_position == current {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Rule already at the requested position"));
        return Ok(result);
    }

    let mut flags: Vec<bool> = order.iter().map(|(_, ca)| *ca).collect();
    let moved = flags.remove(current);
    flags.insert(new_position, moved);
    check_catch_all_order(flags.iter())?;

    let mut rule = doc.remove_rule(id)?;
    rule.mark_dirty();
    let mut result = CmdResult::default().with_affected_rules(vec![rule.clone()]);
    doc.insert_rule(new_position, rule);
    result.add_message(CmdMessage::success(format!(
        "Rule moved to position {}",
        new_position + 1
    )));
    Ok(result)
}

use crate::attrspec::{self, ActionValue};
use crate::commands::{CmdMessage, CmdResult, RuleUpdate};
use crate::document::RuleDocument;
use crate::error::{ObAppsError, Result};
use uuid::Uuid;

/// Apply a partial edit to one rule. Only the changed pieces are validated;
/// any failure leaves the rule untouched. A successful update clears the
/// rule's original-text anchor so the serializer regenerates just this node.
pub fn run(doc: &mut RuleDocument, id: Uuid, update: RuleUpdate) -> Result<CmdResult> {
    // Validate everything against the current state before mutating.
    if let Some(criteria) = &update.criteria {
        for criterion in criteria {
            attrspec::validate_criterion(criterion)?;
        }
    }
    let mut validated: Vec<(String, ActionValue)> = Vec::new();
    for (field, value) in &update.set {
        validated.push((field.clone(), attrspec::validate(field, value)?));
    }
    for field in &update.unset {
        if attrspec::action_spec(field).is_none() {
            return Err(ObAppsError::validation(
                field.clone(),
                "",
                "unknown action field",
            ));
        }
    }

    let order: Vec<(Uuid, bool)> = doc.rules().map(|r| (r.id, r.is_catch_all())).collect();
    let ordinal = order
        .iter()
        .position(|(rid, _)| *rid == id)
        .ok_or(ObAppsError::RuleNotFound(id))?;

    if let Some(criteria) = &update.criteria {
        if criteria.is_empty() {
            // The edit turns this rule into a catch-all; it must end up
            // alone and last.
            if ordinal + 1 != order.len() {
                return Err(ObAppsError::Constraint(
                    "a catch-all rule must be the last rule".to_string(),
                ));
            }
            if order.iter().any(|(rid, ca)| *ca && *rid != id) {
                return Err(ObAppsError::Constraint(
                    "only one catch-all rule is allowed".to_string(),
                ));
            }
        }
    }

    let rule = doc.rule_mut(id).ok_or(ObAppsError::RuleNotFound(id))?;
    if let Some(criteria) = update.criteria {
        rule.criteria = criteria;
    }
    for (field, value) in validated {
        rule.actions.insert(field, value);
    }
    for field in &update.unset {
        rule.actions.remove(field);
    }
    rule.mark_dirty();

    let mut result = CmdResult::default().with_affected_rules(vec![rule.clone()]);
    result.add_message(CmdMessage::success(format!("Rule updated: {}", id)));
    Ok(result)
}

use crate::attrspec::{self, ActionValue};
use crate::commands::{check_catch_all_order, CmdMessage, CmdResult, DisplayRule};
use crate::document::RuleDocument;
use crate::error::Result;
use crate::model::{MatchCriterion, Rule};
use std::collections::BTreeMap;

/// Insert a new rule. Every action field is validated before anything is
/// mutated; `position` is a 0-based rule ordinal, defaulting to the end but
/// before an existing catch-all.
pub fn run(
    doc: &mut RuleDocument,
    criteria: Vec<MatchCriterion>,
    actions: Vec<(String, ActionValue)>,
    position: Option<usize>,
) -> Result<CmdResult> {
    for criterion in &criteria {
        attrspec::validate_criterion(criterion)?;
    }
    let mut validated: BTreeMap<String, ActionValue> = BTreeMap::new();
    for (field, value) in &actions {
        validated.insert(field.clone(), attrspec::validate(field, value)?);
    }

    let count = doc.rule_count();
    let has_catch_all = doc.rules().last().map(Rule::is_catch_all).unwrap_or(false);
    let default_pos = if has_catch_all && count > 0 {
        count - 1
    } else {
        count
    };
    let position = position.unwrap_or(default_pos).min(count);

    let rule = Rule::new(criteria, validated);

    let mut flags: Vec<bool> = doc.rules().map(Rule::is_catch_all).collect();
    flags.insert(position, rule.is_catch_all());
    check_catch_all_order(flags.iter())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Rule added ({}): {}",
        position + 1,
        DisplayRule {
            index: position + 1,
            rule: rule.clone(),
        }
        .describe()
    )));
    result.affected_rules.push(rule.clone());
    doc.insert_rule(position, rule);
    Ok(result)
}

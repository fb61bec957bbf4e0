//! Rule matching and precedence.
//!
//! Mirrors the window manager's resolution order: rules are evaluated in
//! document order, a rule matches when every criterion matches, and each
//! matching rule overwrites the accumulated settings for just the fields it
//! sets. Later matches win per field, not per rule.

use crate::attrspec::ActionValue;
use crate::model::{MatchField, Rule, WindowAttributes};
use serde::Serialize;
use std::collections::BTreeMap;

/// The merged action-field values for one window.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EffectiveSettings {
    values: BTreeMap<String, ActionValue>,
}

impl EffectiveSettings {
    pub fn get(&self, field: &str) -> Option<&ActionValue> {
        self.values.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Glob match: `*` matches any sequence, `?` any one character.
fn glob_match(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    let (mut pi, mut ti) = (0usize, 0usize);
    let mut star: Option<usize> = None;
    let mut mark = 0usize;

    while ti < t.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == t[ti]) {
            pi += 1;
            ti += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some(pi);
            mark = ti;
            pi += 1;
        } else if let Some(s) = star {
            // Backtrack: let the last `*` consume one more character.
            pi = s + 1;
            mark += 1;
            ti = mark;
        } else {
            return false;
        }
    }
    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }
    pi == p.len()
}

/// Whether every criterion of `rule` matches `window`. A rule with no
/// criteria matches unconditionally. A window attribute that was never set
/// matches as the empty string.
pub fn rule_matches(rule: &Rule, window: &WindowAttributes) -> bool {
    rule.criteria.iter().all(|c| {
        let observed = window.get(c.field).unwrap_or("");
        if c.field == MatchField::Type {
            // Window type is an exact token, never globbed.
            if c.case_sensitive {
                c.pattern == observed
            } else {
                c.pattern.eq_ignore_ascii_case(observed)
            }
        } else if c.case_sensitive {
            glob_match(&c.pattern, observed)
        } else {
            glob_match(&c.pattern.to_lowercase(), &observed.to_lowercase())
        }
    })
}

/// Fold all matching rules, in order, into the effective settings.
pub fn effective_settings<'a, I>(rules: I, window: &WindowAttributes) -> EffectiveSettings
where
    I: IntoIterator<Item = &'a Rule>,
{
    let mut settings = EffectiveSettings::default();
    for rule in rules {
        if rule_matches(rule, window) {
            for (field, value) in &rule.actions {
                settings.values.insert(field.clone(), value.clone());
            }
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MatchCriterion;

    fn rule(criteria: Vec<MatchCriterion>, actions: &[(&str, ActionValue)]) -> Rule {
        Rule::new(
            criteria,
            actions
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn glob_basics() {
        assert!(glob_match("Firefox", "Firefox"));
        assert!(glob_match("Fire*", "Firefox"));
        assert!(glob_match("*fox", "Firefox"));
        assert!(glob_match("F?refox", "Firefox"));
        assert!(glob_match("*", ""));
        assert!(glob_match("*o*o*", "Firefox-window"));
        assert!(!glob_match("Fire?", "Firefox"));
        assert!(!glob_match("fox*", "Firefox"));
        assert!(!glob_match("?", ""));
    }

    #[test]
    fn specific_then_catch_all_merge() {
        // The worked example: [{class=Firefox -> desktop=2}, {class=* -> decor=no}]
        let rules = vec![
            rule(
                vec![MatchCriterion::new(MatchField::Class, "Firefox")],
                &[("desktop", ActionValue::Number(2))],
            ),
            rule(
                vec![MatchCriterion::new(MatchField::Class, "*")],
                &[("decor", ActionValue::Bool(false))],
            ),
        ];
        let window = WindowAttributes::new().with_class("Firefox");
        let settings = effective_settings(&rules, &window);
        assert_eq!(settings.get("desktop"), Some(&ActionValue::Number(2)));
        assert_eq!(settings.get("decor"), Some(&ActionValue::Bool(false)));
        assert_eq!(settings.len(), 2);
    }

    #[test]
    fn later_match_wins_per_field() {
        let a = rule(
            vec![MatchCriterion::new(MatchField::Class, "Fire*")],
            &[("desktop", ActionValue::Number(1))],
        );
        let b = rule(
            vec![MatchCriterion::new(MatchField::Class, "*fox")],
            &[("desktop", ActionValue::Number(3))],
        );
        let window = WindowAttributes::new().with_class("Firefox");

        let forward = effective_settings(vec![a.clone(), b.clone()].iter(), &window);
        assert_eq!(forward.get("desktop"), Some(&ActionValue::Number(3)));

        // Reversing two rules with overlapping fields flips the winner.
        let reversed = effective_settings(vec![b, a].iter(), &window);
        assert_eq!(reversed.get("desktop"), Some(&ActionValue::Number(1)));
    }

    #[test]
    fn order_of_non_overlapping_rules_is_irrelevant() {
        let a = rule(
            vec![MatchCriterion::new(MatchField::Class, "*")],
            &[("shade", ActionValue::Bool(true))],
        );
        let b = rule(
            vec![MatchCriterion::new(MatchField::Class, "*")],
            &[("layer", ActionValue::Token("below".into()))],
        );
        let window = WindowAttributes::new().with_class("anything");
        let forward = effective_settings(vec![a.clone(), b.clone()].iter(), &window);
        let reversed = effective_settings(vec![b, a].iter(), &window);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn all_criteria_must_match() {
        let r = rule(
            vec![
                MatchCriterion::new(MatchField::Class, "Firefox"),
                MatchCriterion::new(MatchField::Role, "browser"),
            ],
            &[("focus", ActionValue::Bool(true))],
        );
        let without_role = WindowAttributes::new().with_class("Firefox");
        assert!(!rule_matches(&r, &without_role));
        let with_role = without_role.with_role("browser");
        assert!(rule_matches(&r, &with_role));
    }

    #[test]
    fn missing_attribute_matches_star() {
        let r = rule(
            vec![MatchCriterion::new(MatchField::Title, "*")],
            &[("shade", ActionValue::Bool(true))],
        );
        assert!(rule_matches(&r, &WindowAttributes::new()));
    }

    #[test]
    fn case_insensitive_criterion() {
        let r = rule(
            vec![MatchCriterion::new(MatchField::Class, "firefox").case_insensitive()],
            &[("decor", ActionValue::Bool(false))],
        );
        assert!(rule_matches(&r, &WindowAttributes::new().with_class("FIREFOX")));

        let strict = rule(
            vec![MatchCriterion::new(MatchField::Class, "firefox")],
            &[("decor", ActionValue::Bool(false))],
        );
        assert!(!rule_matches(&strict, &WindowAttributes::new().with_class("FIREFOX")));
    }

    #[test]
    fn type_matches_exactly_not_globbed() {
        let r = rule(
            vec![MatchCriterion::new(MatchField::Type, "dialog")],
            &[("skip_taskbar", ActionValue::Bool(true))],
        );
        assert!(rule_matches(&r, &WindowAttributes::new().with_type("dialog")));
        assert!(!rule_matches(&r, &WindowAttributes::new().with_type("dial")));
    }

    #[test]
    fn no_match_yields_empty_settings() {
        let rules = vec![rule(
            vec![MatchCriterion::new(MatchField::Class, "Emacs")],
            &[("desktop", ActionValue::Number(4))],
        )];
        let settings =
            effective_settings(&rules, &WindowAttributes::new().with_class("Firefox"));
        assert!(settings.is_empty());
    }

    #[test]
    fn catch_all_contributes_unconditionally() {
        let rules = vec![rule(vec![], &[("layer", ActionValue::Token("above".into()))])];
        let settings = effective_settings(&rules, &WindowAttributes::new());
        assert_eq!(
            settings.get("layer"),
            Some(&ActionValue::Token("above".into()))
        );
    }
}

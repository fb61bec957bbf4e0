//! Writing the document back out.
//!
//! Untouched rules and all foreign content are re-emitted byte-identically
//! from their original spans. Only rules added or changed since load are
//! generated, with a fixed attribute order (class, name, role, title, type)
//! and action elements in field-table order, so repeated writes of the same
//! document produce the same bytes.

use crate::attrspec::{ActionValue, ACTION_SPECS};
use crate::document::{Node, RuleDocument};
use crate::model::{MatchField, Rule};
use quick_xml::escape::escape;

/// Formatting for generated rules. One level of child indentation; the base
/// indent comes from the document itself.
#[derive(Debug, Clone)]
pub struct Formatting {
    pub indent: String,
}

impl Default for Formatting {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
        }
    }
}

impl Formatting {
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
        }
    }
}

/// Serialize the document. Never fails: content was validated at edit time,
/// and the caller's store owns the actual I/O.
pub fn write(doc: &RuleDocument, fmt: &Formatting) -> String {
    let mut out = String::new();
    let nodes = doc.nodes();
    for (i, node) in nodes.iter().enumerate() {
        match node {
            Node::Foreign(text) => out.push_str(text),
            Node::Rule(rule) => match rule.source() {
                Some(src) => out.push_str(src),
                None => {
                    ensure_indent(&mut out, &doc.base_indent);
                    render_rule(&mut out, rule, &doc.base_indent, &fmt.indent);
                    restore_separator(&mut out, nodes.get(i + 1), &doc.base_indent);
                }
            },
        }
    }
    out
}

/// Make sure a generated rule starts on its own indented line, reusing
/// indentation already present at the end of the output.
fn ensure_indent(out: &mut String, base: &str) {
    let tail_start = out.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let tail = &out[tail_start..];
    if tail.is_empty() && !out.is_empty() {
        out.push_str(base);
    } else if out.is_empty() {
        // Document starts with this rule; no indent needed.
    } else if !tail.chars().all(|c| c == ' ' || c == '\t') {
        out.push('\n');
        out.push_str(base);
    }
}

/// A generated rule consumed no surrounding whitespace of its own, so give
/// the following node back the separator it expects.
fn restore_separator(out: &mut String, next: Option<&Node>, base: &str) {
    match next {
        Some(Node::Rule(_)) => {
            out.push('\n');
            out.push_str(base);
        }
        Some(Node::Foreign(text)) => {
            if !text.starts_with('\n') && !text.starts_with('\r') {
                out.push('\n');
            }
        }
        None => out.push('\n'),
    }
}

fn render_rule(out: &mut String, rule: &Rule, base: &str, unit: &str) {
    out.push_str("<application");
    for field in MatchField::ALL {
        for criterion in rule.criteria.iter().filter(|c| c.field == field) {
            out.push_str(&format!(
                " {}=\"{}\"",
                field.as_str(),
                escape(&criterion.pattern)
            ));
            if !criterion.case_sensitive {
                out.push_str(&format!(" {}-insensitive=\"yes\"", field.as_str()));
            }
        }
    }
    for (key, value) in &rule.extra_attrs {
        out.push_str(&format!(" {}=\"{}\"", key, escape(value)));
    }

    if rule.actions.is_empty() && rule.extra_children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');

    let child_indent = format!("{}{}", base, unit);
    for spec in ACTION_SPECS {
        if let Some(value) = rule.actions.get(spec.name) {
            out.push('\n');
            out.push_str(&child_indent);
            render_action(out, spec.name, value, &child_indent, unit);
        }
    }
    for raw in &rule.extra_children {
        out.push('\n');
        out.push_str(&child_indent);
        out.push_str(raw);
    }

    out.push('\n');
    out.push_str(base);
    out.push_str("</application>");
}

fn render_action(out: &mut String, name: &str, value: &ActionValue, indent: &str, unit: &str) {
    match value {
        ActionValue::Position { x, y, force } => {
            if *force {
                out.push_str("<position force=\"yes\">");
            } else {
                out.push_str("<position>");
            }
            out.push_str(&format!("\n{indent}{unit}<x>{x}</x>"));
            out.push_str(&format!("\n{indent}{unit}<y>{y}</y>"));
            out.push_str(&format!("\n{indent}</position>"));
        }
        ActionValue::Size { width, height } => {
            out.push_str("<size>");
            out.push_str(&format!("\n{indent}{unit}<width>{width}</width>"));
            out.push_str(&format!("\n{indent}{unit}<height>{height}</height>"));
            out.push_str(&format!("\n{indent}</size>"));
        }
        scalar => {
            out.push_str(&format!("<{name}>{}</{name}>", escape(&scalar.to_string())));
        }
    }
}

//! The rule document: an ordered sequence of parsed `<application>` rules
//! interleaved with opaque foreign content.
//!
//! Loading captures the byte span of every rule element and keeps every byte
//! the parser does not claim (XML declaration, wrapper tags, comments,
//! whitespace, unknown elements) as [`Node::Foreign`] text in original order.
//! The serializer re-emits foreign nodes and untouched rules verbatim, which
//! is what makes round-trip editing lossless.

use crate::attrspec::{self, ActionValue, Coord};
use crate::error::{ObAppsError, Result};
use crate::model::{MatchCriterion, MatchField, Rule};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use uuid::Uuid;

/// One entry of the document, in original order.
#[derive(Debug, Clone)]
pub enum Node {
    Rule(Rule),
    /// Verbatim text the editor does not interpret.
    Foreign(String),
}

/// A problem noticed at load time: a recognized element whose value fell
/// outside its declared domain (the element is preserved as foreign content),
/// or a catch-all ordering violation the editor would reject. Nothing is
/// lost, and the caller decides how to report it.
#[derive(Debug, Clone)]
pub struct SchemaIssue {
    pub field: String,
    pub value: String,
    pub reason: String,
    pub position: usize,
}

impl SchemaIssue {
    pub fn to_error(&self) -> ObAppsError {
        ObAppsError::Schema {
            field: self.field.clone(),
            value: self.value.clone(),
            reason: self.reason.clone(),
            position: self.position,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuleDocument {
    nodes: Vec<Node>,
    issues: Vec<SchemaIssue>,
    /// Whether a wrapper element encloses the rules; new rules appended to a
    /// wrapped document go before the wrapper's closing tag.
    wrapped: bool,
    /// Indentation of the first rule, used when generating new rules.
    pub(crate) base_indent: String,
}

enum ParsedElement {
    Rule(Rule),
    Issue(SchemaIssue),
}

/// Tracks catch-all placement while rules stream in, so a document that
/// already violates the ordering constraint gets a warning up front instead
/// of unexplained `ConstraintError`s on later edits.
#[derive(Default)]
struct CatchAllScan {
    first_at: Option<usize>,
    flagged: bool,
}

impl CatchAllScan {
    fn observe(&mut self, rule: &Rule, position: usize, issues: &mut Vec<SchemaIssue>) {
        match self.first_at {
            Some(at) => {
                if rule.is_catch_all() {
                    issues.push(SchemaIssue {
                        field: "application".to_string(),
                        value: String::new(),
                        reason: "only one catch-all rule is allowed".to_string(),
                        position,
                    });
                } else if !self.flagged {
                    issues.push(SchemaIssue {
                        field: "application".to_string(),
                        value: String::new(),
                        reason: "a catch-all rule is not the last rule".to_string(),
                        position: at,
                    });
                    self.flagged = true;
                }
            }
            None => {
                if rule.is_catch_all() {
                    self.first_at = Some(position);
                }
            }
        }
    }
}

impl RuleDocument {
    /// Parse a configuration fragment. Fails only on malformed XML; a
    /// recognized element with an out-of-domain value is recorded in
    /// [`schema_issues`](Self::schema_issues) and kept as foreign content,
    /// and a pre-existing catch-all ordering violation is recorded there too
    /// (the rules still load, so the caller can repair the order).
    pub fn load(source: &str) -> Result<Self> {
        let mut reader = Reader::from_str(source);
        let mut nodes: Vec<Node> = Vec::new();
        let mut issues: Vec<SchemaIssue> = Vec::new();
        let mut foreign_start = 0usize;
        let mut depth = 0usize;
        let mut wrapped = false;
        let mut base_indent: Option<String> = None;
        let mut catch_alls = CatchAllScan::default();

        loop {
            let event_start = reader.buffer_position();
            match reader.read_event().map_err(|e| format_error(&reader, e))? {
                Event::Start(e) => {
                    if e.name().as_ref() == b"application" && depth <= 1 {
                        reader
                            .read_to_end(e.name())
                            .map_err(|e| format_error(&reader, e))?;
                        let end = reader.buffer_position();
                        let raw = &source[event_start..end];
                        match parse_application(raw, event_start)? {
                            ParsedElement::Rule(rule) => {
                                if event_start > foreign_start {
                                    nodes.push(Node::Foreign(
                                        source[foreign_start..event_start].to_string(),
                                    ));
                                }
                                if base_indent.is_none() {
                                    base_indent =
                                        Some(detect_indent(&source[..event_start]));
                                }
                                catch_alls.observe(&rule, event_start, &mut issues);
                                nodes.push(Node::Rule(rule));
                                foreign_start = end;
                            }
                            ParsedElement::Issue(issue) => {
                                // Element stays in the surrounding foreign span.
                                issues.push(issue);
                            }
                        }
                    } else if depth == 0 {
                        // Wrapper element; scan its direct children for rules.
                        depth += 1;
                    } else {
                        // Foreign subtree, skipped wholesale.
                        reader
                            .read_to_end(e.name())
                            .map_err(|e| format_error(&reader, e))?;
                    }
                }
                Event::Empty(e) => {
                    if e.name().as_ref() == b"application" && depth <= 1 {
                        let end = reader.buffer_position();
                        let raw = &source[event_start..end];
                        match parse_application(raw, event_start)? {
                            ParsedElement::Rule(rule) => {
                                if event_start > foreign_start {
                                    nodes.push(Node::Foreign(
                                        source[foreign_start..event_start].to_string(),
                                    ));
                                }
                                if base_indent.is_none() {
                                    base_indent =
                                        Some(detect_indent(&source[..event_start]));
                                }
                                catch_alls.observe(&rule, event_start, &mut issues);
                                nodes.push(Node::Rule(rule));
                                foreign_start = end;
                            }
                            ParsedElement::Issue(issue) => issues.push(issue),
                        }
                    }
                }
                Event::End(_) => {
                    // Only wrapper ends reach here; rule and foreign subtrees
                    // are consumed by read_to_end. Split the foreign span so
                    // appended rules can land before the closing tag.
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        if event_start > foreign_start {
                            nodes.push(Node::Foreign(
                                source[foreign_start..event_start].to_string(),
                            ));
                            foreign_start = event_start;
                        }
                        wrapped = true;
                    }
                }
                Event::Eof => {
                    if source.len() > foreign_start {
                        nodes.push(Node::Foreign(source[foreign_start..].to_string()));
                    }
                    break;
                }
                // Text, comments, CDATA, declarations, PIs: foreign bytes.
                _ => {}
            }
        }

        Ok(RuleDocument {
            nodes,
            issues,
            wrapped,
            base_indent: base_indent.unwrap_or_else(|| {
                if wrapped {
                    "  ".to_string()
                } else {
                    String::new()
                }
            }),
        })
    }

    /// Rules in document order (read-only, restartable).
    pub fn rules(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.nodes.iter().filter_map(|n| match n {
            Node::Rule(r) => Some(r),
            Node::Foreign(_) => None,
        })
    }

    pub fn rule_count(&self) -> usize {
        self.rules().count()
    }

    pub fn rule(&self, id: Uuid) -> Option<&Rule> {
        self.rules().find(|r| r.id == id)
    }

    pub(crate) fn rule_mut(&mut self, id: Uuid) -> Option<&mut Rule> {
        self.nodes.iter_mut().find_map(|n| match n {
            Node::Rule(r) if r.id == id => Some(r),
            _ => None,
        })
    }

    pub fn schema_issues(&self) -> &[SchemaIssue] {
        &self.issues
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node indices of the rules, in order.
    pub(crate) fn rule_node_indices(&self) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| matches!(n, Node::Rule(_)).then_some(i))
            .collect()
    }

    /// Insert a rule at the given rule-ordinal position (clamped to the end).
    pub(crate) fn insert_rule(&mut self, position: usize, rule: Rule) {
        let positions = self.rule_node_indices();
        let node_idx = if position < positions.len() {
            positions[position]
        } else if let Some(last) = positions.last() {
            last + 1
        } else if self.wrapped && !self.nodes.is_empty() {
            // No rules yet: land before the wrapper's closing tag.
            self.nodes.len() - 1
        } else {
            self.nodes.len()
        };
        self.nodes.insert(node_idx, Node::Rule(rule));
    }

    pub(crate) fn remove_rule(&mut self, id: Uuid) -> Result<Rule> {
        let idx = self
            .nodes
            .iter()
            .position(|n| matches!(n, Node::Rule(r) if r.id == id))
            .ok_or(ObAppsError::RuleNotFound(id))?;
        let rule = match self.nodes.remove(idx) {
            Node::Rule(r) => r,
            Node::Foreign(_) => unreachable!(),
        };
        // Take the rule's own leading separator with it when it is pure
        // whitespace; comments and other foreign content always stay.
        if idx > 0 {
            if let Some(Node::Foreign(text)) = self.nodes.get(idx - 1) {
                if !text.is_empty() && text.chars().all(|c| c.is_ascii_whitespace()) {
                    self.nodes.remove(idx - 1);
                }
            }
        }
        Ok(rule)
    }
}

fn format_error(reader: &Reader<&[u8]>, err: quick_xml::Error) -> ObAppsError {
    ObAppsError::Format {
        position: reader.buffer_position(),
        message: err.to_string(),
    }
}

/// Whitespace between the last newline and the element start, if it is all
/// indentation.
fn detect_indent(prefix: &str) -> String {
    let tail = match prefix.rfind('\n') {
        Some(i) => &prefix[i + 1..],
        None => prefix,
    };
    if tail.chars().all(|c| c == ' ' || c == '\t') {
        tail.to_string()
    } else {
        String::new()
    }
}

/// Parse one complete `<application>` element from its raw text. `base` is
/// the element's byte offset in the enclosing document, used for issue
/// positions. Returns an issue instead of a rule when a recognized field is
/// out of domain.
fn parse_application(raw: &str, base: usize) -> Result<ParsedElement> {
    let mut reader = Reader::from_str(raw);
    let first = reader
        .read_event()
        .map_err(|e| inner_format_error(base, &reader, e))?;

    let (start, has_children) = match first {
        Event::Start(ref e) => (e.clone(), true),
        Event::Empty(ref e) => (e.clone(), false),
        _ => {
            return Err(ObAppsError::Format {
                position: base,
                message: "expected an element".to_string(),
            })
        }
    };

    let mut criteria: Vec<MatchCriterion> = Vec::new();
    let mut insensitive: Vec<MatchField> = Vec::new();
    let mut extra_attrs: Vec<(String, String)> = Vec::new();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| ObAppsError::Format {
            position: base,
            message: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| ObAppsError::Format {
                position: base,
                message: e.to_string(),
            })?
            .to_string();
        if let Some(field) = MatchField::from_str(&key) {
            criteria.push(MatchCriterion::new(field, value));
        } else if let Some(stripped) = key.strip_suffix("-insensitive") {
            // Companion attribute marking a criterion case-insensitive.
            match (MatchField::from_str(stripped), value.as_str()) {
                (Some(field), "yes" | "true") => insensitive.push(field),
                _ => extra_attrs.push((key, value)),
            }
        } else {
            extra_attrs.push((key, value));
        }
    }

    for criterion in &mut criteria {
        if insensitive.contains(&criterion.field) {
            criterion.case_sensitive = false;
        }
    }

    for criterion in &criteria {
        if let Err(err) = attrspec::validate_criterion(criterion) {
            return Ok(ParsedElement::Issue(issue_from(err, base)));
        }
    }

    let mut actions: BTreeMap<String, ActionValue> = BTreeMap::new();
    let mut extra_children: Vec<String> = Vec::new();

    if has_children {
        loop {
            let child_start = reader.buffer_position();
            match reader
                .read_event()
                .map_err(|e| inner_format_error(base, &reader, e))?
            {
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    match name.as_str() {
                        "position" => {
                            match parse_position(&mut reader, &e) {
                                Ok(v) => {
                                    actions.insert(name, v);
                                }
                                Err(reason) => {
                                    return Ok(ParsedElement::Issue(SchemaIssue {
                                        field: "position".to_string(),
                                        value: String::new(),
                                        reason,
                                        position: base + child_start,
                                    }))
                                }
                            }
                        }
                        "size" => match parse_size(&mut reader, &e) {
                            Ok(v) => {
                                actions.insert(name, v);
                            }
                            Err(reason) => {
                                return Ok(ParsedElement::Issue(SchemaIssue {
                                    field: "size".to_string(),
                                    value: String::new(),
                                    reason,
                                    position: base + child_start,
                                }))
                            }
                        },
                        _ if attrspec::action_spec(&name).is_some() => {
                            let text = read_text(&mut reader, e.name().as_ref())
                                .map_err(|e| inner_format_error(base, &reader, e))?;
                            match attrspec::parse(&name, &text) {
                                Ok(v) => {
                                    actions.insert(name, v);
                                }
                                Err(err) => {
                                    return Ok(ParsedElement::Issue(issue_from(
                                        err,
                                        base + child_start,
                                    )))
                                }
                            }
                        }
                        _ => {
                            reader
                                .read_to_end(e.name())
                                .map_err(|e| inner_format_error(base, &reader, e))?;
                            let end = reader.buffer_position();
                            extra_children.push(raw[child_start..end].to_string());
                        }
                    }
                }
                Event::Empty(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    if attrspec::action_spec(&name).is_some() {
                        return Ok(ParsedElement::Issue(SchemaIssue {
                            field: name,
                            value: String::new(),
                            reason: "element has no value".to_string(),
                            position: base + child_start,
                        }));
                    }
                    let end = reader.buffer_position();
                    extra_children.push(raw[child_start..end].to_string());
                }
                Event::End(e) if e.name().as_ref() == b"application" => break,
                Event::Eof => break,
                _ => {}
            }
        }
    }

    let mut rule = Rule::new(criteria, actions);
    rule.extra_attrs = extra_attrs;
    rule.extra_children = extra_children;
    rule.source = Some(raw.to_string());
    Ok(ParsedElement::Rule(rule))
}

fn issue_from(err: ObAppsError, position: usize) -> SchemaIssue {
    match err {
        ObAppsError::Validation {
            field,
            value,
            reason,
        } => SchemaIssue {
            field,
            value,
            reason,
            position,
        },
        other => SchemaIssue {
            field: String::new(),
            value: String::new(),
            reason: other.to_string(),
            position,
        },
    }
}

fn inner_format_error(base: usize, reader: &Reader<&[u8]>, err: quick_xml::Error) -> ObAppsError {
    ObAppsError::Format {
        position: base + reader.buffer_position(),
        message: err.to_string(),
    }
}

/// Collect the unescaped text content up to the matching end tag.
fn read_text(
    reader: &mut Reader<&[u8]>,
    end: &[u8],
) -> std::result::Result<String, quick_xml::Error> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::End(e) if e.name().as_ref() == end => break,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}

/// `<position force="..."><x>...</x><y>...</y></position>`
fn parse_position(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
) -> std::result::Result<ActionValue, String> {
    let mut force = false;
    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        if attr.key.as_ref() == b"force" {
            let value = attr.unescape_value().map_err(|e| e.to_string())?;
            force = matches!(value.as_ref(), "yes" | "true" | "on");
        }
    }

    let mut x = None;
    let mut y = None;
    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) => match e.name().as_ref() {
                b"x" => {
                    let text = read_text(reader, b"x").map_err(|e| e.to_string())?;
                    x = Some(Coord::parse(&text)?);
                }
                b"y" => {
                    let text = read_text(reader, b"y").map_err(|e| e.to_string())?;
                    y = Some(Coord::parse(&text)?);
                }
                _ => {
                    reader.read_to_end(e.name()).map_err(|e| e.to_string())?;
                }
            },
            Event::End(e) if e.name().as_ref() == b"position" => break,
            Event::Eof => break,
            _ => {}
        }
    }

    match (x, y) {
        (Some(x), Some(y)) => Ok(ActionValue::Position { x, y, force }),
        _ => Err("position requires both x and y".to_string()),
    }
}

/// `<size><width>...</width><height>...</height></size>`
fn parse_size(
    reader: &mut Reader<&[u8]>,
    _start: &BytesStart,
) -> std::result::Result<ActionValue, String> {
    let mut width = None;
    let mut height = None;
    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) => match e.name().as_ref() {
                b"width" => {
                    let text = read_text(reader, b"width").map_err(|e| e.to_string())?;
                    width = Some(
                        text.trim()
                            .parse::<u32>()
                            .map_err(|_| format!("invalid width: {:?}", text.trim()))?,
                    );
                }
                b"height" => {
                    let text = read_text(reader, b"height").map_err(|e| e.to_string())?;
                    height = Some(
                        text.trim()
                            .parse::<u32>()
                            .map_err(|_| format!("invalid height: {:?}", text.trim()))?,
                    );
                }
                _ => {
                    reader.read_to_end(e.name()).map_err(|e| e.to_string())?;
                }
            },
            Event::End(e) if e.name().as_ref() == b"size" => break,
            Event::Eof => break,
            _ => {}
        }
    }

    match (width, height) {
        (Some(width), Some(height)) if width > 0 && height > 0 => {
            Ok(ActionValue::Size { width, height })
        }
        (Some(_), Some(_)) => Err("width and height must be positive".to_string()),
        _ => Err("size requires both width and height".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<applications>
  <!-- keep firefox on the web desktop -->
  <application class="Firefox*" name="Navigator">
    <desktop>2</desktop>
    <maximized>true</maximized>
  </application>
  <unknown_widget color="red"/>
  <application class="*">
    <decor>no</decor>
  </application>
</applications>
"#;

    #[test]
    fn loads_rules_and_foreign_content_in_order() {
        let doc = RuleDocument::load(SAMPLE).unwrap();
        assert_eq!(doc.rule_count(), 2);
        assert!(doc.schema_issues().is_empty());

        let kinds: Vec<&str> = doc
            .nodes()
            .iter()
            .map(|n| match n {
                Node::Rule(_) => "rule",
                Node::Foreign(_) => "foreign",
            })
            .collect();
        // prologue+comment, rule, widget, rule, separator, closing tag;
        // the trailing span splits so appended rules land before the close.
        assert_eq!(
            kinds,
            vec!["foreign", "rule", "foreign", "rule", "foreign", "foreign"]
        );

        let rules: Vec<&Rule> = doc.rules().collect();
        assert_eq!(rules[0].criteria.len(), 2);
        assert_eq!(rules[0].criteria[0].field, MatchField::Class);
        assert_eq!(rules[0].criteria[0].pattern, "Firefox*");
        assert_eq!(
            rules[0].actions.get("desktop"),
            Some(&ActionValue::Number(2))
        );
        assert_eq!(
            rules[0].actions.get("maximized"),
            Some(&ActionValue::Token("true".into()))
        );
        assert!(!rules[1].is_catch_all());
        assert_eq!(rules[1].criteria[0].pattern, "*");
    }

    #[test]
    fn rule_sources_are_verbatim_spans() {
        let doc = RuleDocument::load(SAMPLE).unwrap();
        let first = doc.rules().next().unwrap();
        let source = first.source().unwrap();
        assert!(source.starts_with("<application class=\"Firefox*\""));
        assert!(source.ends_with("</application>"));
        assert!(SAMPLE.contains(source));
    }

    #[test]
    fn detects_base_indent() {
        let doc = RuleDocument::load(SAMPLE).unwrap();
        assert_eq!(doc.base_indent, "  ");
    }

    #[test]
    fn malformed_input_is_a_format_error() {
        let err = RuleDocument::load("<applications><application class=").unwrap_err();
        assert!(matches!(err, ObAppsError::Format { .. }));
    }

    #[test]
    fn out_of_domain_value_becomes_foreign_with_issue() {
        let text = r#"<applications>
  <application class="X">
    <layer>bottom</layer>
  </application>
</applications>
"#;
        let doc = RuleDocument::load(text).unwrap();
        assert_eq!(doc.rule_count(), 0);
        assert_eq!(doc.schema_issues().len(), 1);
        assert_eq!(doc.schema_issues()[0].field, "layer");
        // The offending element survives inside foreign content.
        let foreign: String = doc
            .nodes()
            .iter()
            .filter_map(|n| match n {
                Node::Foreign(t) => Some(t.as_str()),
                _ => None,
            })
            .collect();
        assert!(foreign.contains("<layer>bottom</layer>"));
    }

    #[test]
    fn unknown_children_and_attributes_are_kept_on_the_rule() {
        let text = r#"<application class="X" custom="1">
  <decor>yes</decor>
  <opacity level="80"/>
</application>"#;
        let doc = RuleDocument::load(text).unwrap();
        let rule = doc.rules().next().unwrap();
        assert_eq!(rule.extra_attrs, vec![("custom".to_string(), "1".to_string())]);
        assert_eq!(rule.extra_children, vec!["<opacity level=\"80\"/>".to_string()]);
    }

    #[test]
    fn bare_fragment_without_wrapper() {
        let text = "<application class=\"A\"><shade>yes</shade></application>\n";
        let doc = RuleDocument::load(text).unwrap();
        assert_eq!(doc.rule_count(), 1);
        assert_eq!(doc.base_indent, "");
    }

    #[test]
    fn empty_application_element_is_a_catch_all() {
        let doc = RuleDocument::load("<applications><application/></applications>").unwrap();
        let rule = doc.rules().next().unwrap();
        assert!(rule.is_catch_all());
        assert!(rule.actions.is_empty());
    }

    #[test]
    fn insensitive_companion_attribute_is_recognized() {
        let text = r#"<application class="firefox" class-insensitive="yes"/>"#;
        let doc = RuleDocument::load(text).unwrap();
        let rule = doc.rules().next().unwrap();
        assert!(!rule.criteria[0].case_sensitive);
        assert!(rule.extra_attrs.is_empty());
    }

    #[test]
    fn position_and_size_elements() {
        let text = r#"<application title="term">
  <position force="yes">
    <x>center</x>
    <y>-30</y>
  </position>
  <size>
    <width>640</width>
    <height>480</height>
  </size>
</application>"#;
        let doc = RuleDocument::load(text).unwrap();
        let rule = doc.rules().next().unwrap();
        assert_eq!(
            rule.actions.get("position"),
            Some(&ActionValue::Position {
                x: Coord::Center,
                y: Coord::Px(-30),
                force: true,
            })
        );
        assert_eq!(
            rule.actions.get("size"),
            Some(&ActionValue::Size {
                width: 640,
                height: 480,
            })
        );
    }

    #[test]
    fn catch_all_before_other_rules_is_flagged_at_load() {
        let text = "<applications>\n  <application>\n    <decor>no</decor>\n  </application>\n  <application class=\"X\"/>\n</applications>\n";
        let doc = RuleDocument::load(text).unwrap();
        // Both rules load; the bad order is surfaced, not rejected.
        assert_eq!(doc.rule_count(), 2);
        assert_eq!(doc.schema_issues().len(), 1);
        assert_eq!(
            doc.schema_issues()[0].reason,
            "a catch-all rule is not the last rule"
        );
    }

    #[test]
    fn second_catch_all_is_flagged_at_load() {
        let text = "<applications>\n  <application/>\n  <application/>\n</applications>\n";
        let doc = RuleDocument::load(text).unwrap();
        assert_eq!(doc.rule_count(), 2);
        assert_eq!(doc.schema_issues().len(), 1);
        assert_eq!(
            doc.schema_issues()[0].reason,
            "only one catch-all rule is allowed"
        );
    }

    #[test]
    fn invalid_window_type_is_a_schema_issue() {
        let text = r#"<applications><application type="dial*"/></applications>"#;
        let doc = RuleDocument::load(text).unwrap();
        assert_eq!(doc.rule_count(), 0);
        assert_eq!(doc.schema_issues()[0].field, "type");
    }

    #[test]
    fn loading_never_mutates_and_is_repeatable() {
        let a = RuleDocument::load(SAMPLE).unwrap();
        let b = RuleDocument::load(SAMPLE).unwrap();
        assert_eq!(a.rule_count(), b.rule_count());
        let spans_a: Vec<_> = a.rules().map(|r| r.source().unwrap().to_string()).collect();
        let spans_b: Vec<_> = b.rules().map(|r| r.source().unwrap().to_string()).collect();
        assert_eq!(spans_a, spans_b);
    }
}

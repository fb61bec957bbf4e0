use crate::attrspec::ActionValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A window attribute a rule can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchField {
    Class,
    Name,
    Role,
    Title,
    Type,
}

impl MatchField {
    pub const ALL: [MatchField; 5] = [
        MatchField::Class,
        MatchField::Name,
        MatchField::Role,
        MatchField::Title,
        MatchField::Type,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchField::Class => "class",
            MatchField::Name => "name",
            MatchField::Role => "role",
            MatchField::Title => "title",
            MatchField::Type => "type",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "class" => Some(MatchField::Class),
            "name" => Some(MatchField::Name),
            "role" => Some(MatchField::Role),
            "title" => Some(MatchField::Title),
            "type" => Some(MatchField::Type),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One matching condition. Criteria within a rule combine with AND.
///
/// Patterns are glob-style (`*` any sequence, `?` any one character) except
/// for [`MatchField::Type`], which compares exactly against the window type
/// token, matching Openbox behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCriterion {
    pub field: MatchField,
    pub pattern: String,
    pub case_sensitive: bool,
}

impl MatchCriterion {
    pub fn new(field: MatchField, pattern: impl Into<String>) -> Self {
        Self {
            field,
            pattern: pattern.into(),
            case_sensitive: true,
        }
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }
}

/// One `<application>` rule: criteria plus the action fields it sets.
///
/// `actions` holds only fields the user explicitly set; absent fields mean
/// "inherit / no-op" for the consuming window manager. `source` is the
/// verbatim text of the element as it appeared in the loaded document, kept
/// so the serializer can re-emit untouched rules byte-identically. Any
/// mutation clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub id: Uuid,
    pub criteria: Vec<MatchCriterion>,
    pub actions: BTreeMap<String, ActionValue>,
    /// Attributes on the element this editor does not recognize, preserved
    /// in order so a regenerated rule keeps forward-compatible content.
    pub extra_attrs: Vec<(String, String)>,
    /// Raw text of unrecognized child elements, re-emitted after the known
    /// actions when the rule is regenerated.
    pub extra_children: Vec<String>,
    pub(crate) source: Option<String>,
}

impl Rule {
    pub fn new(criteria: Vec<MatchCriterion>, actions: BTreeMap<String, ActionValue>) -> Self {
        Self {
            id: Uuid::new_v4(),
            criteria,
            actions,
            extra_attrs: Vec::new(),
            extra_children: Vec::new(),
            source: None,
        }
    }

    /// A rule with no criteria matches every window and may only appear last.
    pub fn is_catch_all(&self) -> bool {
        self.criteria.is_empty()
    }

    /// The original textual span, if the rule is unchanged since load.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.source = None;
    }
}

/// Observed attributes of a (hypothetical) window, used to preview which
/// rules would apply. Unset attributes match as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowAttributes {
    pub class: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub title: Option<String>,
    pub window_type: Option<String>,
}

impl WindowAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_type(mut self, window_type: impl Into<String>) -> Self {
        self.window_type = Some(window_type.into());
        self
    }

    pub fn get(&self, field: MatchField) -> Option<&str> {
        match field {
            MatchField::Class => self.class.as_deref(),
            MatchField::Name => self.name.as_deref(),
            MatchField::Role => self.role.as_deref(),
            MatchField::Title => self.title.as_deref(),
            MatchField::Type => self.window_type.as_deref(),
        }
    }
}

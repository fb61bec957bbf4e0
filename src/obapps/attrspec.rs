//! Declarative field specifications for rule actions and match criteria.
//!
//! Every action field an `<application>` element can set is described by one
//! [`AttributeSpec`] row: its name, value domain, and the default the window
//! manager assumes when the field is absent. Validation is a pure table
//! lookup plus a domain check, so adding a field is a one-row change.

use crate::error::{ObAppsError, Result};
use crate::model::{MatchCriterion, MatchField};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Window type tokens accepted by the `type` criterion (exact match).
pub const WINDOW_TYPES: &[&str] = &[
    "normal", "dialog", "splash", "utility", "menu", "toolbar", "dock", "desktop",
];

/// The value domain of an action field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Enum(&'static [&'static str]),
    /// An integer with a lower bound, or one of a few literal tokens
    /// (`desktop` is a 1-based index or `all`).
    IntOrToken {
        min: i64,
        tokens: &'static [&'static str],
    },
    /// An x/y pair where each axis is a pixel offset or `center`.
    Position,
    /// A positive width/height pair.
    Size,
}

/// One row of the field table.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub kind: ValueKind,
    /// What the window manager assumes when the field is unset.
    pub default: Option<&'static str>,
}

/// Action fields in canonical serialization order.
pub const ACTION_SPECS: &[AttributeSpec] = &[
    AttributeSpec {
        name: "decor",
        kind: ValueKind::Bool,
        default: Some("yes"),
    },
    AttributeSpec {
        name: "shade",
        kind: ValueKind::Bool,
        default: Some("no"),
    },
    AttributeSpec {
        name: "position",
        kind: ValueKind::Position,
        default: None,
    },
    AttributeSpec {
        name: "size",
        kind: ValueKind::Size,
        default: None,
    },
    AttributeSpec {
        name: "focus",
        kind: ValueKind::Bool,
        default: Some("no"),
    },
    AttributeSpec {
        name: "desktop",
        kind: ValueKind::IntOrToken {
            min: 1,
            tokens: &["all"],
        },
        default: None,
    },
    AttributeSpec {
        name: "layer",
        kind: ValueKind::Enum(&["above", "normal", "below"]),
        default: Some("normal"),
    },
    AttributeSpec {
        name: "iconic",
        kind: ValueKind::Bool,
        default: Some("no"),
    },
    AttributeSpec {
        name: "skip_pager",
        kind: ValueKind::Bool,
        default: Some("no"),
    },
    AttributeSpec {
        name: "skip_taskbar",
        kind: ValueKind::Bool,
        default: Some("no"),
    },
    AttributeSpec {
        name: "fullscreen",
        kind: ValueKind::Bool,
        default: Some("no"),
    },
    AttributeSpec {
        name: "maximized",
        kind: ValueKind::Enum(&["true", "false", "horizontal", "vertical"]),
        default: Some("false"),
    },
];

static SPEC_INDEX: Lazy<HashMap<&'static str, &'static AttributeSpec>> =
    Lazy::new(|| ACTION_SPECS.iter().map(|s| (s.name, s)).collect());

/// Look up the spec row for an action field.
pub fn action_spec(field: &str) -> Option<&'static AttributeSpec> {
    SPEC_INDEX.get(field).copied()
}

/// One axis of a position: a pixel offset (may be negative, meaning from the
/// opposite edge) or centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coord {
    Px(i32),
    Center,
}

impl Coord {
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("center") {
            return Ok(Coord::Center);
        }
        s.parse::<i32>()
            .map(Coord::Px)
            .map_err(|_| format!("expected an integer or \"center\", got {:?}", s))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coord::Px(n) => write!(f, "{}", n),
            Coord::Center => f.write_str("center"),
        }
    }
}

/// A validated, typed action value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionValue {
    Bool(bool),
    Number(i64),
    Token(String),
    Position { x: Coord, y: Coord, force: bool },
    Size { width: u32, height: u32 },
}

impl std::fmt::Display for ActionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionValue::Bool(b) => f.write_str(if *b { "yes" } else { "no" }),
            ActionValue::Number(n) => write!(f, "{}", n),
            ActionValue::Token(t) => f.write_str(t),
            ActionValue::Position { x, y, .. } => write!(f, "{},{}", x, y),
            ActionValue::Size { width, height } => write!(f, "{}x{}", width, height),
        }
    }
}

fn parse_bool(raw: &str) -> std::result::Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "on" => Ok(true),
        "no" | "false" | "off" => Ok(false),
        other => Err(format!("expected a boolean (yes/no), got {:?}", other)),
    }
}

/// Check a typed value against a field's domain, returning the normalized
/// value (enum tokens are lowercased). Pure; no side effects.
pub fn validate(field: &str, value: &ActionValue) -> Result<ActionValue> {
    let spec = action_spec(field)
        .ok_or_else(|| ObAppsError::validation(field, value.to_string(), "unknown action field"))?;
    check(spec, value).map_err(|reason| ObAppsError::validation(field, value.to_string(), reason))
}

fn check(spec: &AttributeSpec, value: &ActionValue) -> std::result::Result<ActionValue, String> {
    match (spec.kind, value) {
        (ValueKind::Bool, ActionValue::Bool(b)) => Ok(ActionValue::Bool(*b)),
        (ValueKind::Enum(tokens), ActionValue::Token(t)) => {
            let norm = t.trim().to_ascii_lowercase();
            if tokens.contains(&norm.as_str()) {
                Ok(ActionValue::Token(norm))
            } else {
                Err(format!("expected one of {}", tokens.join("/")))
            }
        }
        // Enum fields with boolean members accept a plain bool.
        (ValueKind::Enum(tokens), ActionValue::Bool(b)) => {
            let norm = if *b { "true" } else { "false" };
            if tokens.contains(&norm) {
                Ok(ActionValue::Token(norm.to_string()))
            } else {
                Err(format!("expected one of {}", tokens.join("/")))
            }
        }
        (ValueKind::IntOrToken { min, .. }, ActionValue::Number(n)) => {
            if *n < min {
                Err(format!("must be >= {}", min))
            } else {
                Ok(ActionValue::Number(*n))
            }
        }
        (ValueKind::IntOrToken { tokens, .. }, ActionValue::Token(t)) => {
            let norm = t.trim().to_ascii_lowercase();
            if tokens.contains(&norm.as_str()) {
                Ok(ActionValue::Token(norm))
            } else {
                Err(format!(
                    "expected an integer or one of {}",
                    tokens.join("/")
                ))
            }
        }
        (ValueKind::Position, ActionValue::Position { x, y, force }) => Ok(ActionValue::Position {
            x: *x,
            y: *y,
            force: *force,
        }),
        (ValueKind::Size, ActionValue::Size { width, height }) => {
            if *width == 0 || *height == 0 {
                Err("width and height must be positive".to_string())
            } else {
                Ok(ActionValue::Size {
                    width: *width,
                    height: *height,
                })
            }
        }
        _ => Err(format!("wrong value shape for {}", spec.name)),
    }
}

/// Parse raw text for a field and validate it in one step. Used by the
/// document loader for scalar fields and offered to callers that work with
/// unparsed user input ("200,300", "640x480", "yes", "all", ...).
pub fn parse(field: &str, raw: &str) -> Result<ActionValue> {
    let spec = action_spec(field)
        .ok_or_else(|| ObAppsError::validation(field, raw, "unknown action field"))?;
    let value = parse_text(spec, raw)
        .map_err(|reason| ObAppsError::validation(field, raw, reason))?;
    validate(field, &value)
}

fn parse_text(spec: &AttributeSpec, raw: &str) -> std::result::Result<ActionValue, String> {
    let raw = raw.trim();
    match spec.kind {
        ValueKind::Bool => parse_bool(raw).map(ActionValue::Bool),
        ValueKind::Enum(_) => Ok(ActionValue::Token(raw.to_string())),
        ValueKind::IntOrToken { .. } => {
            if let Ok(n) = raw.parse::<i64>() {
                Ok(ActionValue::Number(n))
            } else {
                Ok(ActionValue::Token(raw.to_string()))
            }
        }
        ValueKind::Position => {
            let (xs, ys) = raw
                .split_once(',')
                .ok_or_else(|| format!("expected \"x,y\", got {:?}", raw))?;
            Ok(ActionValue::Position {
                x: Coord::parse(xs)?,
                y: Coord::parse(ys)?,
                force: false,
            })
        }
        ValueKind::Size => {
            let (ws, hs) = raw
                .split_once('x')
                .ok_or_else(|| format!("expected \"WIDTHxHEIGHT\", got {:?}", raw))?;
            let width = ws
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid width: {:?}", ws.trim()))?;
            let height = hs
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid height: {:?}", hs.trim()))?;
            Ok(ActionValue::Size { width, height })
        }
    }
}

/// Validate a match criterion. Glob fields accept any pattern; the `type`
/// criterion must name a known window type exactly.
pub fn validate_criterion(criterion: &MatchCriterion) -> Result<()> {
    if criterion.field == MatchField::Type {
        let token = criterion.pattern.trim();
        if !WINDOW_TYPES.contains(&token) {
            return Err(ObAppsError::validation(
                "type",
                criterion.pattern.clone(),
                format!("expected one of {}", WINDOW_TYPES.join("/")),
            ));
        }
    }
    Ok(())
}

//! The API facade: the single entry point for all editing sessions.
//!
//! `ObApps` owns the store and the loaded document and dispatches to the
//! command layer. It performs no terminal I/O and returns structured results,
//! so any front end (a rule-list GUI, a script, a test) drives it the same
//! way. Generic over [`DocumentStore`] to keep tests off the filesystem.

use crate::attrspec::ActionValue;
use crate::commands;
use crate::document::RuleDocument;
use crate::error::Result;
use crate::matcher::{self, EffectiveSettings};
use crate::model::{MatchCriterion, WindowAttributes};
use crate::serializer::{self, Formatting};
use crate::store::DocumentStore;
use uuid::Uuid;

pub struct ObApps<S: DocumentStore> {
    store: S,
    doc: RuleDocument,
    formatting: Formatting,
}

impl<S: DocumentStore> ObApps<S> {
    /// Load the document from the store and start an editing session.
    pub fn open(store: S) -> Result<Self> {
        let text = store.load()?;
        let doc = RuleDocument::load(&text)?;
        Ok(Self {
            store,
            doc,
            formatting: Formatting::default(),
        })
    }

    pub fn with_formatting(mut self, formatting: Formatting) -> Self {
        self.formatting = formatting;
        self
    }

    pub fn document(&self) -> &RuleDocument {
        &self.doc
    }

    /// Warnings for elements that were recognized but out of domain at load
    /// time (kept as foreign content, see [`RuleDocument::schema_issues`]).
    pub fn load_warnings(&self) -> Vec<commands::CmdMessage> {
        self.doc
            .schema_issues()
            .iter()
            .map(|issue| commands::CmdMessage::warning(issue.to_error().to_string()))
            .collect()
    }

    pub fn list_rules(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.doc)
    }

    pub fn add_rule(
        &mut self,
        criteria: Vec<MatchCriterion>,
        actions: Vec<(String, ActionValue)>,
        position: Option<usize>,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.doc, criteria, actions, position)
    }

    pub fn update_rule(
        &mut self,
        id: Uuid,
        update: commands::RuleUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.doc, id, update)
    }

    pub fn delete_rule(&mut self, id: Uuid) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.doc, id)
    }

    pub fn move_rule(&mut self, id: Uuid, new_position: usize) -> Result<commands::CmdResult> {
        commands::reorder::run(&mut self.doc, id, new_position)
    }

    /// Preview the merged settings the window manager would apply to a
    /// window with these attributes. Read-only; independent of editing.
    pub fn preview(&self, window: &WindowAttributes) -> EffectiveSettings {
        matcher::effective_settings(self.doc.rules(), window)
    }

    /// Serialize the current document without persisting it.
    pub fn to_text(&self) -> String {
        serializer::write(&self.doc, &self.formatting)
    }

    /// Serialize and persist through the store.
    pub fn save(&mut self) -> Result<()> {
        let text = serializer::write(&self.doc, &self.formatting);
        self.store.save(&text)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, DisplayRule, MessageLevel, RuleUpdate};

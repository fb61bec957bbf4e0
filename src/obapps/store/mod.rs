//! Persistence boundary for the rule document.
//!
//! The editor core works on text; where that text lives is abstracted behind
//! [`DocumentStore`] so the core can be tested without a filesystem and so
//! other backends stay possible. [`fs::FileStore`] is the production store
//! and owns the duties the format demands of the boundary: atomic
//! write-then-rename replacement and a backup of the previous file.

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait DocumentStore {
    /// Fetch the raw configuration text. A store with no document yet
    /// returns an empty string.
    fn load(&self) -> Result<String>;

    /// Persist the serialized document.
    fn save(&mut self, text: &str) -> Result<()>;
}

use super::DocumentStore;
use crate::error::Result;

/// In-memory store for tests; no persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    text: String,
}

impl InMemoryStore {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            text: initial.into(),
        }
    }

    /// The last saved text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn save(&mut self, text: &str) -> Result<()> {
        self.text = text.to_string();
        Ok(())
    }
}

//! Quick to-do list, persisted under the `todos` record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: Uuid,
    pub text: String,
    pub done: bool,
}

/// Ordered task list, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a task to the front of the list. Whitespace-only input is
    /// ignored. Returns the new item's id when added.
    pub fn add(&mut self, text: &str) -> Option<Uuid> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = Uuid::new_v4();
        self.items.insert(
            0,
            TodoItem {
                id,
                text: text.to_string(),
                done: false,
            },
        );
        Some(id)
    }

    /// Flip a task's done flag. Unknown ids are ignored.
    pub fn toggle(&mut self, id: Uuid) {
        if let Some(item) = self.items.iter_mut().find(|t| t.id == id) {
            item.done = !item.done;
        }
    }

    /// Remove a task. Unknown ids are ignored.
    pub fn remove(&mut self, id: Uuid) {
        self.items.retain(|t| t.id != id);
    }
}

//! Todo List State
//!
//! The list container owns the collection and the id counter. Transitions
//! never touch `self`; they build the next list and hand it back.

use crate::error::StateError;

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

/// Ordered todo collection plus the next id to hand out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
    next_id: u32,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// Id the next successful add will receive
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|todo| todo.completed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    /// Append a new todo. Blank text is rejected.
    pub fn try_add(&self, text: &str) -> Result<Self, StateError> {
        if text.trim().is_empty() {
            return Err(StateError::EmptyText);
        }
        let next_id = self.next_id.checked_add(1).ok_or(StateError::IdsExhausted)?;

        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(Todo {
            id: self.next_id,
            text: text.to_string(),
            completed: false,
        });

        Ok(Self { items, next_id })
    }

    /// Flip `completed` on the todo with `id`.
    pub fn try_toggle(&self, id: u32) -> Result<Self, StateError> {
        if self.get(id).is_none() {
            return Err(StateError::UnknownTodo(id));
        }

        let items = self
            .items
            .iter()
            .map(|todo| {
                if todo.id == id {
                    Todo {
                        completed: !todo.completed,
                        ..todo.clone()
                    }
                } else {
                    todo.clone()
                }
            })
            .collect();

        Ok(Self {
            items,
            next_id: self.next_id,
        })
    }

    /// Drop the todo with `id`.
    pub fn try_remove(&self, id: u32) -> Result<Self, StateError> {
        if self.get(id).is_none() {
            return Err(StateError::UnknownTodo(id));
        }

        let items = self
            .items
            .iter()
            .filter(|todo| todo.id != id)
            .cloned()
            .collect();

        Ok(Self {
            items,
            next_id: self.next_id,
        })
    }

    pub fn add(&self, text: &str) -> Self {
        self.try_add(text).unwrap_or_else(|_| self.clone())
    }

    pub fn toggle(&self, id: u32) -> Self {
        self.try_toggle(id).unwrap_or_else(|_| self.clone())
    }

    pub fn remove(&self, id: u32) -> Self {
        self.try_remove(id).unwrap_or_else(|_| self.clone())
    }

    /// Empty the list. Ids already handed out are not reused.
    pub fn clear(&self) -> Self {
        Self {
            items: Vec::new(),
            next_id: self.next_id,
        }
    }
}

/// Local buffer of the todo input field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    buffer: String,
}

impl TodoDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
    }

    /// Take the trimmed text out of the buffer.
    ///
    /// Returns `None` and keeps the buffer when it only holds whitespace.
    pub fn submit(&mut self) -> Option<String> {
        let text = self.buffer.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        self.buffer.clear();
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn list_of(texts: &[&str]) -> TodoList {
        texts.iter().fold(TodoList::new(), |list, text| list.add(text))
    }

    fn ids(list: &TodoList) -> Vec<u32> {
        list.items().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let list = list_of(&["a", "b", "c", "d"]);
        assert_eq!(list.total(), 4);
        assert_eq!(ids(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.items()[2].text, "c");
        assert!(list.items().iter().all(|t| !t.completed));
        assert_eq!(list.next_id(), 5);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let list = list_of(&["a"]);
        assert_eq!(list.add(""), list);
        assert_eq!(list.add("   "), list);
        assert_eq!(list.try_add("\t\n"), Err(StateError::EmptyText));
        // counter is untouched by rejected adds
        assert_eq!(list.add("  ").add("b").items()[1].id, 2);
    }

    #[test]
    fn test_add_leaves_previous_value_untouched() {
        let before = list_of(&["a"]);
        let after = before.add("b");
        assert_eq!(before.total(), 1);
        assert_eq!(after.total(), 2);
    }

    #[test]
    fn test_toggle_flips_one_item() {
        let list = list_of(&["a", "b", "c"]);
        let toggled = list.toggle(2);

        assert!(toggled.get(2).unwrap().completed);
        assert!(!toggled.get(1).unwrap().completed);
        assert!(!toggled.get(3).unwrap().completed);
        assert_eq!(ids(&toggled), ids(&list));
        assert_eq!(toggled.toggle(2), list);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let list = list_of(&["a"]);
        assert_eq!(list.toggle(42), list);
        assert_eq!(list.try_toggle(42), Err(StateError::UnknownTodo(42)));
    }

    #[test]
    fn test_remove_preserves_order() {
        let list = list_of(&["a", "b", "c", "d"]);
        let removed = list.remove(2);
        assert_eq!(removed.total(), 3);
        assert_eq!(ids(&removed), vec![1, 3, 4]);

        assert_eq!(removed.remove(2), removed);
        assert_eq!(removed.try_remove(2), Err(StateError::UnknownTodo(2)));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let list = list_of(&["a", "b"]).remove(2).add("c");
        assert_eq!(ids(&list), vec![1, 3]);

        let cleared = list.clear();
        assert!(cleared.is_empty());
        assert_eq!(cleared.add("d").items()[0].id, 4);
    }

    #[test]
    fn test_add_stops_when_ids_run_out() {
        let list = TodoList {
            items: Vec::new(),
            next_id: u32::MAX,
        };
        assert_eq!(list.try_add("x"), Err(StateError::IdsExhausted));
        assert_eq!(list.add("x"), list);

        let list = TodoList {
            items: Vec::new(),
            next_id: u32::MAX - 1,
        }
        .add("last");
        assert_eq!(list.items()[0].id, u32::MAX - 1);
        assert_eq!(list.try_add("one more"), Err(StateError::IdsExhausted));
    }

    #[test]
    fn test_random_sequences_match_model() {
        let mut rng = StdRng::seed_from_u64(0x7d0);

        for _ in 0..50 {
            let mut list = TodoList::new();
            // (id, completed) in display order
            let mut model: Vec<(u32, bool)> = Vec::new();
            let mut adds = 0u32;
            let mut seen = HashSet::new();

            for step in 0..rng.gen_range(1..200) {
                let before = list.total();
                match rng.gen_range(0..4) {
                    0 | 1 => {
                        let text = if rng.gen_bool(0.1) {
                            "   ".to_string()
                        } else {
                            format!("todo {}", step)
                        };
                        list = list.add(&text);
                        if !text.trim().is_empty() {
                            adds += 1;
                            model.push((adds, false));
                            assert_eq!(list.total(), before + 1);
                            assert!(seen.insert(adds), "id {} handed out twice", adds);
                        } else {
                            assert_eq!(list.total(), before);
                        }
                    }
                    2 => {
                        let id = rng.gen_range(1..=adds + 2);
                        list = list.toggle(id);
                        if let Some(entry) = model.iter_mut().find(|(m, _)| *m == id) {
                            entry.1 = !entry.1;
                        }
                    }
                    _ => {
                        let id = rng.gen_range(1..=adds + 2);
                        let present = model.iter().any(|(m, _)| *m == id);
                        list = list.remove(id);
                        model.retain(|(m, _)| *m != id);
                        assert_eq!(list.total(), before - usize::from(present));
                    }
                }

                let actual: Vec<(u32, bool)> =
                    list.items().iter().map(|t| (t.id, t.completed)).collect();
                assert_eq!(actual, model);
                let done = model.iter().filter(|(_, done)| *done).count();
                assert_eq!(list.completed_count(), done);
                assert!(list.completed_count() <= list.total());
                assert_eq!(list.next_id(), adds + 1);
            }
        }
    }

    #[test]
    fn test_completed_count() {
        let list = list_of(&["a", "b", "c"]).toggle(1).toggle(3);
        assert_eq!(list.completed_count(), 2);
        assert!(list.completed_count() <= list.total());

        let list = list.remove(1);
        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.total(), 2);
    }

    #[test]
    fn test_walkthrough() {
        let list = TodoList::new().add("Buy milk");
        assert_eq!(
            list.items(),
            &[Todo { id: 1, text: "Buy milk".into(), completed: false }]
        );

        let list = list.toggle(1);
        assert_eq!(list.completed_count(), 1);

        let list = list.add("Learn testing");
        assert_eq!(list.total(), 2);
        assert!(list.items()[0].completed);
        assert_eq!(list.items()[1].id, 2);

        let list = list.remove(1);
        assert_eq!(ids(&list), vec![2]);
        assert_eq!(list.total(), 1);
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn test_draft_submit_trims_and_clears() {
        let mut draft = TodoDraft::new();
        draft.set("  Learn Rust  ");
        assert_eq!(draft.submit().as_deref(), Some("Learn Rust"));
        assert_eq!(draft.value(), "");
    }

    #[test]
    fn test_draft_keeps_blank_buffer() {
        let mut draft = TodoDraft::new();
        assert_eq!(draft.submit(), None);

        draft.set("   ");
        assert_eq!(draft.submit(), None);
        assert_eq!(draft.value(), "   ");
    }
}

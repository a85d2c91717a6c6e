//! Form drafts submitted to a checklist.
//!
//! The UI edits a single draft value while the user types and hands the finished draft
//! to [`ChecklistStore::add`](crate::store::ChecklistStore::add) or
//! [`ChecklistStore::update`](crate::store::ChecklistStore::update). Drafts accept
//! anything; the store validates on submit.

use crate::line_item::{LineItem, DEFAULT_MAX_SETS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub name: String,
    pub sets: u32,
    pub reps: Vec<u32>,
    max_sets: u32,
}

impl Default for ExerciseDraft {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SETS)
    }
}

impl ExerciseDraft {
    pub fn new(max_sets: u32) -> Self {
        Self {
            name: String::new(),
            sets: 0,
            reps: Vec::new(),
            max_sets,
        }
    }

    /// Pre-fills a draft from an existing row so it can be edited.
    ///
    /// Todo rows only contribute their text.
    pub fn from_item(item: &LineItem, max_sets: u32) -> Self {
        match item {
            LineItem::Exercise(e) => Self {
                name: e.name.clone(),
                sets: e.sets,
                reps: e.reps.clone(),
                max_sets,
            },
            LineItem::Todo(t) => Self {
                name: t.text.clone(),
                ..Self::new(max_sets)
            },
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Applies the raw text of the "sets" field.
    ///
    /// Empty text clears the sets. Non-numeric text is ignored. Values above the cap are
    /// clamped to it. Any accepted value resets every rep count to 0.
    pub fn set_sets_text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            self.sets = 0;
            self.reps.clear();
            return;
        }

        if let Ok(value) = text.parse::<u32>() {
            let sets = value.min(self.max_sets);
            self.sets = sets;
            self.reps = vec![0; sets as usize];
        }
    }

    /// Applies the raw text of one rep field. Unparseable text counts as 0.
    pub fn set_rep_text(&mut self, set: usize, text: &str) {
        if let Some(rep) = self.reps.get_mut(set) {
            *rep = text.trim().parse().unwrap_or(0);
        }
    }

    pub fn increment_rep(&mut self, set: usize) {
        if let Some(rep) = self.reps.get_mut(set) {
            *rep = rep.saturating_add(1);
        }
    }

    /// Decrements one rep count, never going below 1.
    pub fn decrement_rep(&mut self, set: usize) {
        if let Some(rep) = self.reps.get_mut(set) {
            *rep = rep.saturating_sub(1).max(1);
        }
    }

    pub fn into_item(self) -> LineItem {
        LineItem::Exercise(crate::line_item::ExerciseItem {
            name: self.name,
            sets: self.sets,
            reps: self.reps,
            checked: false,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub text: String,
}

impl TodoDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn into_item(self) -> LineItem {
        LineItem::todo(self.text)
    }
}

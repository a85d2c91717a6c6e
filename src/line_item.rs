//! Data model for checklist rows.
//!
//! This module defines [`LineItem`], one row of a day's checklist. A row is either an
//! exercise with per-set rep counts or a plain todo entry, and both carry a `checked`
//! flag. The JSON layout matches what the mobile app has always written, so records
//! stored by earlier builds load unchanged.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default cap on the number of sets an exercise may have.
pub const DEFAULT_MAX_SETS: u32 = 5;

/// The variant a checklist holds. Every collection is homogeneous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Exercise,
    Todo,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Exercise => "exercise",
            ItemKind::Todo => "todo",
        }
    }
}

/// One row in a day's checklist.
///
/// Serialized untagged, so the stored form is either
///
/// ```json
/// {"name": "Push-ups", "sets": 3, "reps": [10, 10, 8], "checked": false}
/// ```
///
/// or
///
/// ```json
/// {"text": "Stretch for 10 minutes", "checked": false}
/// ```
///
/// # Examples
///
/// ```rust
/// use workout_checklist_core::line_item::LineItem;
///
/// let item = LineItem::exercise("Push-ups", vec![10, 10, 8]);
/// let json = serde_json::to_string(&item)?;
/// let back: LineItem = serde_json::from_str(&json)?;
/// assert_eq!(item, back);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineItem {
    Exercise(ExerciseItem),
    Todo(TodoItem),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseItem {
    /// Display label, e.g. "Bench Press".
    pub name: String,

    /// Number of sets. Always equal to `reps.len()` once persisted.
    pub sets: u32,

    /// Rep count for each set, in set order.
    pub reps: Vec<u32>,

    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub text: String,

    #[serde(default)]
    pub checked: bool,
}

impl LineItem {
    /// Builds an unchecked exercise whose set count follows `reps`.
    ///
    /// A rep list too long for `u32` saturates, so validation still rejects it.
    pub fn exercise(name: impl Into<String>, reps: Vec<u32>) -> Self {
        LineItem::Exercise(ExerciseItem {
            name: name.into(),
            sets: u32::try_from(reps.len()).unwrap_or(u32::MAX),
            reps,
            checked: false,
        })
    }

    pub fn todo(text: impl Into<String>) -> Self {
        LineItem::Todo(TodoItem {
            text: text.into(),
            checked: false,
        })
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            LineItem::Exercise(_) => ItemKind::Exercise,
            LineItem::Todo(_) => ItemKind::Todo,
        }
    }

    /// The row's text: exercise name or todo text.
    pub fn label(&self) -> &str {
        match self {
            LineItem::Exercise(e) => &e.name,
            LineItem::Todo(t) => &t.text,
        }
    }

    pub fn is_checked(&self) -> bool {
        match self {
            LineItem::Exercise(e) => e.checked,
            LineItem::Todo(t) => t.checked,
        }
    }

    pub fn set_checked(&mut self, checked: bool) {
        match self {
            LineItem::Exercise(e) => e.checked = checked,
            LineItem::Todo(t) => t.checked = checked,
        }
    }

    /// Flips `checked` and leaves every other field alone.
    pub fn toggle(&mut self) {
        let checked = self.is_checked();
        self.set_checked(!checked);
    }

    /// Write-time validation.
    ///
    /// Checks that the label is non-blank and, for exercises, that `sets` lies in
    /// `1..=max_sets`, that there is one rep count per set and that every rep count is
    /// at least 1. Items already in storage are never re-validated.
    pub fn validate(&self, max_sets: u32) -> Result<(), ValidationError> {
        if self.label().trim().is_empty() {
            return Err(ValidationError::EmptyLabel);
        }

        if let LineItem::Exercise(e) = self {
            if e.sets == 0 || e.sets > max_sets {
                return Err(ValidationError::SetsOutOfRange {
                    sets: e.sets,
                    max: max_sets,
                });
            }
            if e.reps.len() != e.sets as usize {
                return Err(ValidationError::RepsCountMismatch {
                    sets: e.sets,
                    reps: e.reps.len(),
                });
            }
            if let Some(set) = e.reps.iter().position(|&r| r == 0) {
                return Err(ValidationError::ZeroReps { set: set + 1 });
            }
        }

        Ok(())
    }
}

//! Weekly schedule and per-day storage keys.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::line_item::ItemKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Sunday is the rest day and keeps a todo list instead of exercises.
    pub fn item_kind(&self) -> ItemKind {
        match self {
            Weekday::Sunday => ItemKind::Todo,
            _ => ItemKind::Exercise,
        }
    }

    /// The record name the app stores this day's checklist under.
    ///
    /// These strings are load-bearing: renaming one orphans data already on devices.
    pub fn storage_key(&self) -> StorageKey {
        let key = match self {
            Weekday::Monday => "MondayExercises",
            Weekday::Tuesday => "TuesdayExercises",
            Weekday::Wednesday => "WednesdayExercises",
            Weekday::Thursday => "ThursdayExercises",
            Weekday::Friday => "FridayExercises",
            Weekday::Saturday => "SaturdayExercises",
            Weekday::Sunday => "sundayTodos",
        };
        StorageKey(key.to_string())
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Weekday::Monday => "Push-ups, Squats, Plank",
            Weekday::Tuesday => "Bench Press, Deadlifts, Lunges",
            Weekday::Wednesday => "Pull-ups, Bicep Curls, Tricep Dips",
            Weekday::Thursday => "Shoulder Press, Squats, Crunches",
            Weekday::Friday => "Leg Press, Calf Raises, Plank",
            Weekday::Saturday => "Cardio, Jumping Jacks, Mountain Climbers",
            Weekday::Sunday => "Rest day or Light Stretching",
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown weekday: {s}"))
    }
}

/// Stable identifier a collection is persisted under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageKey(String);

impl StorageKey {
    /// A key outside the weekly schedule, e.g. a generic `"workout"` bucket.
    pub fn custom(key: impl Into<String>) -> Result<Self, String> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err("Storage key must not be empty".to_string());
        }
        Ok(StorageKey(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: Weekday,
    pub summary: String,
    pub kind: ItemKind,
}

/// The week as shown on the home tab, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub days: Vec<ScheduleEntry>,
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        let days = Weekday::ALL
            .into_iter()
            .map(|day| ScheduleEntry {
                day,
                summary: day.summary().to_string(),
                kind: day.item_kind(),
            })
            .collect();
        Self { days }
    }
}

impl WeeklySchedule {
    pub fn entry(&self, day: Weekday) -> Option<&ScheduleEntry> {
        self.days.iter().find(|e| e.day == day)
    }
}

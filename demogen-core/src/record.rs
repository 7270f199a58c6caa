//! Demo record types.
//!
//! A `Record` is one synthetic task, event, meeting or project. Only the
//! fields that serialize end up in the file header; `category` and `subtype`
//! steer rendering and statistics and are never written.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};

/// One generated demo record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub title: String,
    /// Generation date
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "clock::serialize")]
    pub start_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "clock::serialize")]
    pub end_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    pub status: Status,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
    pub tags: Vec<String>,

    #[serde(skip)]
    pub category: Category,
    #[serde(skip)]
    pub subtype: Option<Subtype>,
}

impl Record {
    /// A record carrying only the fields every category has.
    pub fn new(
        category: Category,
        title: String,
        date: NaiveDate,
        status: Status,
        color: Color,
        tags: Vec<String>,
    ) -> Self {
        Record {
            title,
            date,
            start_date: None,
            due_date: None,
            end_date: None,
            start_time: None,
            end_time: None,
            priority: None,
            status,
            color,
            progress: None,
            location: None,
            attendees: None,
            tags,
            category,
            subtype: None,
        }
    }
}

/// Record category as counted in run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Task,
    Event,
    Meeting,
    Project,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Task,
        Category::Event,
        Category::Meeting,
        Category::Project,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Task => "task",
            Category::Event => "event",
            Category::Meeting => "meeting",
            Category::Project => "project",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category-specific variant of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtype {
    /// Event with start and end time on one day
    Timed,
    AllDay,
    /// Event spanning 2-7 days
    MultiDay,
    /// Task without start or due date
    Undated,
    /// Task whose due date has already passed
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Tasks are colored by priority.
    pub fn color(&self) -> Color {
        match self {
            Priority::High => Color::Red,
            Priority::Medium => Color::Yellow,
            Priority::Low => Color::Green,
        }
    }
}

/// Status values across all categories. Which ones a record may take
/// depends on its category (see `constants`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Inbox,
    Todo,
    InProgress,
    Done,
    Cancelled,
    Scheduled,
    Completed,
    Active,
    Paused,
}

/// Named palette; headers carry the hex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
    Orange,
    Purple,
    Gray,
    Teal,
    Pink,
    Indigo,
}

impl Color {
    pub const PALETTE: [Color; 10] = [
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::Green,
        Color::Orange,
        Color::Purple,
        Color::Gray,
        Color::Teal,
        Color::Pink,
        Color::Indigo,
    ];

    pub fn hex(&self) -> &'static str {
        match self {
            Color::Red => "#ff6b9d",
            Color::Blue => "#4a9eff",
            Color::Yellow => "#ffd93d",
            Color::Green => "#6bcf7f",
            Color::Orange => "#ff8c42",
            Color::Purple => "#b892ff",
            Color::Gray => "#94a3b8",
            Color::Teal => "#2dd4bf",
            Color::Pink => "#f472b6",
            Color::Indigo => "#818cf8",
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// `HH:MM` formatting for optional times of day.
mod clock {
    use chrono::NaiveTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.collect_str(&t.format("%H:%M")),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_record() -> Record {
        Record::new(
            Category::Task,
            "Write docs".to_string(),
            NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            Status::InProgress,
            Color::Yellow,
            vec!["task".to_string(), "todo".to_string()],
        )
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let yaml = serde_yaml::to_string(&Status::InProgress).unwrap();
        assert_eq!(yaml.trim(), "in-progress");
    }

    #[test]
    fn test_color_serializes_as_hex() {
        let value = serde_yaml::to_value(Color::Purple).unwrap();
        assert_eq!(value, serde_yaml::Value::String("#b892ff".to_string()));
    }

    #[test]
    fn test_priority_colors() {
        assert_eq!(Priority::High.color(), Color::Red);
        assert_eq!(Priority::Medium.color(), Color::Yellow);
        assert_eq!(Priority::Low.color(), Color::Green);
    }

    #[test]
    fn test_internal_fields_not_serialized() {
        let mut record = make_test_record();
        record.subtype = Some(Subtype::Undated);
        let value = serde_yaml::to_value(&record).unwrap();
        let mapping = value.as_mapping().unwrap();

        assert!(mapping.get("category").is_none());
        assert!(mapping.get("subtype").is_none());
        assert!(mapping.get("dueDate").is_none());
        assert_eq!(mapping.get("date").and_then(|v| v.as_str()), Some("2025-03-20"));
    }

    #[test]
    fn test_times_serialize_as_hours_and_minutes() {
        let mut record = make_test_record();
        record.start_time = NaiveTime::from_hms_opt(9, 30, 0);
        let value = serde_yaml::to_value(&record).unwrap();
        assert_eq!(value["startTime"].as_str(), Some("09:30"));
        assert!(value.get("endTime").is_none());
    }
}

//! Fixed data tables used by the record generator.

use crate::record::{Priority, Status};

/// Extension of every generated file.
pub const FILE_EXTENSION: &str = "md";

/// Default forward window (in days) for calendar events.
pub const DEFAULT_DATE_RANGE: u32 = 60;

/// Largest accepted event window (about a hundred years).
pub const MAX_DATE_RANGE: u32 = 36_500;

/// Length of non-realistic random titles.
pub const RANDOM_TITLE_LEN: usize = 15;

/// Length of the random filename suffix.
pub const FILENAME_SUFFIX_LEN: usize = 4;

/// Maximum number of title characters kept in a filename.
pub const FILENAME_TITLE_MAX: usize = 40;

pub const PROGRESS_STEPS: &[u8] = &[0, 10, 25, 33, 50, 66, 75, 80, 90, 100];

pub const PRIORITY_WEIGHTS: &[(Priority, f64)] = &[
    (Priority::High, 0.2),
    (Priority::Medium, 0.5),
    (Priority::Low, 0.3),
];

pub const TASK_STATUSES: &[Status] = &[
    Status::Inbox,
    Status::Todo,
    Status::InProgress,
    Status::Done,
    Status::Cancelled,
];

/// Statuses an overdue task can have (never done).
pub const OVERDUE_STATUSES: &[Status] = &[Status::Todo, Status::InProgress];

pub const EVENT_STATUSES: &[Status] = &[Status::Scheduled, Status::Completed, Status::Cancelled];

pub const MEETING_STATUSES: &[Status] = &[Status::Scheduled, Status::Completed];

pub const PROJECT_STATUSES: &[Status] = &[
    Status::Active,
    Status::Paused,
    Status::Completed,
    Status::Cancelled,
];

/// Timed event durations in hours; repeats skew towards short events.
pub const EVENT_DURATIONS_HOURS: &[u32] = &[1, 1, 1, 2, 2, 3, 4, 8];

pub const MEETING_DURATIONS_HOURS: &[u32] = &[1, 1, 2];

/// Start minutes for timed records.
pub const QUARTER_HOURS: &[u32] = &[0, 15, 30, 45];

pub const TASK_TITLES: &[&str] = &[
    "Write documentation",
    "Code review PR #42",
    "Update dependencies",
    "Fix login bug",
    "Set up CI/CD",
    "Refactor billing module",
    "Prepare presentation",
    "Send weekly report",
    "Call with the team",
    "Release testing",
    "Optimize database queries",
    "Add dark theme",
    "API integration",
    "Database migration",
    "Write unit tests",
    "Update README",
    "Fix mobile layout",
    "Performance analysis",
    "Set up monitoring",
    "Back up data",
];

pub const EVENT_TITLES: &[&str] = &[
    "Standup",
    "Sprint planning",
    "Retrospective",
    "Product demo",
    "1-on-1 with manager",
    "Candidate interview",
    "New tech webinar",
    "Developer conference",
    "Team offsite",
    "Colleague's birthday",
    "Client call",
    "Onboarding session",
    "Hackathon",
    "Code review session",
    "Architecture committee",
];

pub const PROJECT_TITLES: &[&str] = &[
    "Homepage redesign",
    "Mobile app v2",
    "API Gateway",
    "Microservices migration",
    "Performance Sprint",
    "Test automation",
    "Project documentation",
    "Onboarding system",
    "Analytics Dashboard",
    "Security audit",
];

pub const MEETING_LOCATIONS: &[&str] = &[
    "Zoom",
    "Google Meet",
    "Meeting room 'Alpha'",
    "Meeting room 'Beta'",
    "Slack Huddle",
    "Teams",
    "Office, 3rd floor",
    "Coffee shop nearby",
];

pub const ATTENDEES: &[&str] = &[
    "Anna", "Boris", "Victor", "Galina", "Dmitry", "Elena", "Jeanne", "Zakhar", "Irina",
    "Konstantin", "Larisa", "Mikhail", "Natalia", "Oleg", "Polina",
];

pub const TASK_TAGS: &[&str] = &["task", "todo", "work", "dev"];
pub const EVENT_TAGS: &[&str] = &["event", "calendar", "meeting"];
pub const MEETING_TAGS: &[&str] = &["meeting", "sync", "call"];
pub const PROJECT_TAGS: &[&str] = &["project", "epic", "milestone"];

/// Cross-cutting tags any record may carry on top of its base tags.
pub const SHARED_TAGS: &[&str] = &["urgent", "important", "low-priority", "blocked", "review"];

/// Tag appended to tasks without dates.
pub const UNDATED_TAG: &str = "undated";

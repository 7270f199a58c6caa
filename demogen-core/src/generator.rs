//! Record generator.
//!
//! Builds one `Record` at a time from a random source and a fixed "today".
//! All randomness flows through the generator's RNG, so a seeded RNG gives
//! a reproducible sequence of records.

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::*;
use crate::date_window::{add_days, DateWindow};
use crate::error::{DemoGenError, DemoGenResult};
use crate::record::{Category, Color, Priority, Record, Status, Subtype};

const TASK_WINDOW: DateWindow = DateWindow::new(7, 30);
const OVERDUE_START_WINDOW: DateWindow = DateWindow::new(30, 0);
const OVERDUE_DUE_WINDOW: DateWindow = DateWindow::new(15, 0);
const MEETING_WINDOW: DateWindow = DateWindow::new(3, 30);
const PROJECT_WINDOW: DateWindow = DateWindow::new(60, 30);

/// Events may start up to a week in the past; the forward side is configurable.
pub const EVENT_DAYS_BACK: u32 = 7;

/// Share of tasks that become overdue when overdue tasks are requested.
const OVERDUE_PROBABILITY: f64 = 0.2;

const MULTI_DAY_PROBABILITY: f64 = 0.2;
const ALL_DAY_PROBABILITY: f64 = 0.3;

/// Options shared by every record of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Use phrase lists for titles, locations and attendees
    pub realistic: bool,
    /// Let some tasks have due dates in the past
    pub with_overdue: bool,
    /// Add undated tasks to the `all` mode distribution
    pub with_undated: bool,
    /// How many days ahead events may start
    pub date_range: u32,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            realistic: false,
            with_overdue: false,
            with_undated: false,
            date_range: DEFAULT_DATE_RANGE,
        }
    }
}

/// What to generate next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Task,
    Event(EventShape),
    Meeting,
    Project,
    UndatedTask,
}

/// Event subtype request: a forced shape or a random one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventShape {
    Random,
    Timed,
    AllDay,
    MultiDay,
}

pub struct Generator<R> {
    rng: R,
    today: NaiveDate,
    options: GeneratorOptions,
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R, today: NaiveDate, options: GeneratorOptions) -> Self {
        Generator {
            rng,
            today,
            options,
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// The RNG records are drawn from, for callers that need to stay on the
    /// same random sequence (category picks, filename suffixes).
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn generate(&mut self, kind: RecordKind) -> DemoGenResult<Record> {
        match kind {
            RecordKind::Task => self.task(),
            RecordKind::Event(shape) => self.event(shape),
            RecordKind::Meeting => self.meeting(),
            RecordKind::Project => self.project(),
            RecordKind::UndatedTask => self.undated_task(),
        }
    }

    /// A dated task for board/table views.
    pub fn task(&mut self) -> DemoGenResult<Record> {
        let today = self.today;
        let overdue = self.options.with_overdue && self.rng.gen_bool(OVERDUE_PROBABILITY);

        let (start_date, due_date, status) = if overdue {
            let start = OVERDUE_START_WINDOW.sample(&mut self.rng, today)?;
            let due = OVERDUE_DUE_WINDOW.sample(&mut self.rng, today)?.max(start);
            (start, due, *pick(&mut self.rng, OVERDUE_STATUSES, "overdue statuses")?)
        } else {
            let start = TASK_WINDOW.sample(&mut self.rng, today)?;
            let due = add_days(start, self.rng.gen_range(1..=14))?;
            (start, due, *pick(&mut self.rng, TASK_STATUSES, "task statuses")?)
        };

        let priority = self.priority()?;
        let title = self.title(Category::Task)?;
        let progress = match status {
            Status::InProgress | Status::Done => self.progress()?,
            _ => 0,
        };
        let tags = self.tags(TASK_TAGS);

        let mut record = Record::new(Category::Task, title, today, status, priority.color(), tags);
        record.start_date = Some(start_date);
        record.due_date = Some(due_date);
        record.priority = Some(priority);
        record.progress = Some(progress);
        if overdue {
            record.subtype = Some(Subtype::Overdue);
        }
        Ok(record)
    }

    /// A calendar event; each subtype fills a disjoint set of date/time fields.
    pub fn event(&mut self, shape: EventShape) -> DemoGenResult<Record> {
        let today = self.today;
        let window = DateWindow::new(EVENT_DAYS_BACK, self.options.date_range);
        let start_date = window.sample(&mut self.rng, today)?;

        let subtype = match shape {
            EventShape::Timed => Subtype::Timed,
            EventShape::AllDay => Subtype::AllDay,
            EventShape::MultiDay => Subtype::MultiDay,
            EventShape::Random => {
                if self.rng.gen_bool(MULTI_DAY_PROBABILITY) {
                    Subtype::MultiDay
                } else if self.rng.gen_bool(ALL_DAY_PROBABILITY) {
                    Subtype::AllDay
                } else {
                    Subtype::Timed
                }
            }
        };

        let title = self.title(Category::Event)?;
        let status = *pick(&mut self.rng, EVENT_STATUSES, "event statuses")?;
        let color = *pick(&mut self.rng, &Color::PALETTE, "palette")?;
        let tags = self.tags(EVENT_TAGS);

        let mut record = Record::new(Category::Event, title, today, status, color, tags);
        record.start_date = Some(start_date);
        record.subtype = Some(subtype);

        match subtype {
            Subtype::MultiDay => {
                let days = self.rng.gen_range(2..=7);
                record.end_date = Some(add_days(start_date, days)?);
            }
            Subtype::Timed => {
                let start = self.time_of_day(8, 18)?;
                let hours = *pick(&mut self.rng, EVENT_DURATIONS_HOURS, "event durations")?;
                record.start_time = Some(start);
                record.end_time = Some(add_hours_clamped(start, hours));
            }
            Subtype::AllDay | Subtype::Undated | Subtype::Overdue => {}
        }

        Ok(record)
    }

    pub fn meeting(&mut self) -> DemoGenResult<Record> {
        let today = self.today;
        let date = MEETING_WINDOW.sample(&mut self.rng, today)?;
        let start = self.time_of_day(9, 17)?;
        let hours = *pick(&mut self.rng, MEETING_DURATIONS_HOURS, "meeting durations")?;

        let title = self.title(Category::Meeting)?;
        let (location, attendees) = if self.options.realistic {
            let location = pick(&mut self.rng, MEETING_LOCATIONS, "meeting locations")?.to_string();
            let count = self.rng.gen_range(1..=5);
            let attendees = ATTENDEES
                .choose_multiple(&mut self.rng, count)
                .map(|name| name.to_string())
                .collect();
            (location, attendees)
        } else {
            (format!("Room {}", self.rng.gen_range(1..=10)), Vec::new())
        };
        let status = *pick(&mut self.rng, MEETING_STATUSES, "meeting statuses")?;
        let tags = self.tags(MEETING_TAGS);

        let mut record = Record::new(Category::Meeting, title, today, status, Color::Blue, tags);
        record.start_date = Some(date);
        record.start_time = Some(start);
        record.end_time = Some(add_hours_clamped(start, hours));
        record.location = Some(location);
        record.attendees = Some(attendees);
        Ok(record)
    }

    pub fn project(&mut self) -> DemoGenResult<Record> {
        let today = self.today;
        let start_date = PROJECT_WINDOW.sample(&mut self.rng, today)?;
        let end_date = add_days(start_date, self.rng.gen_range(14..=90))?;
        let status = *pick(&mut self.rng, PROJECT_STATUSES, "project statuses")?;
        let progress = match status {
            Status::Completed => 100,
            _ => self.progress()?,
        };

        let title = self.title(Category::Project)?;
        let tags = self.tags(PROJECT_TAGS);

        let mut record = Record::new(Category::Project, title, today, status, Color::Purple, tags);
        record.start_date = Some(start_date);
        record.end_date = Some(end_date);
        record.progress = Some(progress);
        Ok(record)
    }

    /// A backlog task with no dates at all.
    pub fn undated_task(&mut self) -> DemoGenResult<Record> {
        let title = self.title(Category::Task)?;
        let priority = self.priority()?;
        let mut tags = self.tags(TASK_TAGS);
        tags.push(UNDATED_TAG.to_string());

        let mut record = Record::new(Category::Task, title, self.today, Status::Inbox, Color::Gray, tags);
        record.priority = Some(priority);
        record.subtype = Some(Subtype::Undated);
        Ok(record)
    }

    // =========================================================================
    // Field helpers
    // =========================================================================

    fn title(&mut self, category: Category) -> DemoGenResult<String> {
        if !self.options.realistic {
            return Ok(random_text(&mut self.rng, RANDOM_TITLE_LEN));
        }

        let titles = match category {
            Category::Task => TASK_TITLES,
            Category::Event | Category::Meeting => EVENT_TITLES,
            Category::Project => PROJECT_TITLES,
        };
        Ok(pick(&mut self.rng, titles, "titles")?.to_string())
    }

    fn priority(&mut self) -> DemoGenResult<Priority> {
        let (priority, _) = PRIORITY_WEIGHTS.choose_weighted(&mut self.rng, |(_, weight)| *weight)?;
        Ok(*priority)
    }

    fn progress(&mut self) -> DemoGenResult<u8> {
        Ok(*pick(&mut self.rng, PROGRESS_STEPS, "progress steps")?)
    }

    /// First two base tags plus up to two distinct shared tags.
    fn tags(&mut self, base: &[&str]) -> Vec<String> {
        let extra = self.rng.gen_range(0..=2);
        let mut tags: Vec<String> = base.iter().take(2).map(|tag| tag.to_string()).collect();
        tags.extend(
            SHARED_TAGS
                .choose_multiple(&mut self.rng, extra)
                .map(|tag| tag.to_string()),
        );
        tags
    }

    /// A quarter-hour time with the hour in `start_hour..=end_hour`.
    fn time_of_day(&mut self, start_hour: u32, end_hour: u32) -> DemoGenResult<NaiveTime> {
        let hour = self.rng.gen_range(start_hour..=end_hour);
        let minute = *pick(&mut self.rng, QUARTER_HOURS, "quarter hours")?;
        Ok(clock(hour, minute))
    }
}

/// Random ASCII letters and digits.
pub fn random_text<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, table: &'a [T], name: &'static str) -> DemoGenResult<&'a T> {
    table.choose(rng).ok_or(DemoGenError::EmptyTable(name))
}

/// Time of day from hour and minute; wraps past midnight instead of failing.
fn clock(hour: u32, minute: u32) -> NaiveTime {
    let offset = Duration::hours(i64::from(hour)) + Duration::minutes(i64::from(minute));
    let (time, _) = NaiveTime::default().overflowing_add_signed(offset);
    time
}

/// Move a time forward by whole hours without leaving the day (stops at 23:MM).
fn add_hours_clamped(time: NaiveTime, hours: u32) -> NaiveTime {
    clock((time.hour() + hours).min(23), time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLES: usize = 1000;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
    }

    fn generator(options: GeneratorOptions) -> Generator<StdRng> {
        Generator::new(StdRng::seed_from_u64(42), today(), options)
    }

    #[test]
    fn test_task_due_after_start() {
        let mut gen = generator(GeneratorOptions::default());
        for _ in 0..SAMPLES {
            let task = gen.task().unwrap();
            let start = task.start_date.unwrap();
            let due = task.due_date.unwrap();
            assert!(due > start, "due {due} before start {start}");
            assert!(due - start <= Duration::days(14));
            assert!(TASK_STATUSES.contains(&task.status));
            assert_eq!(task.color, task.priority.unwrap().color());
        }
    }

    #[test]
    fn test_overdue_tasks() {
        let options = GeneratorOptions {
            with_overdue: true,
            ..Default::default()
        };
        let mut gen = generator(options);
        let mut overdue = 0;
        for _ in 0..SAMPLES {
            let task = gen.task().unwrap();
            let start = task.start_date.unwrap();
            let due = task.due_date.unwrap();
            assert!(due >= start);
            if task.subtype == Some(Subtype::Overdue) {
                overdue += 1;
                assert!(due < today(), "overdue task due {due}");
                assert!(OVERDUE_STATUSES.contains(&task.status), "{:?}", task.status);
            }
        }
        // 20% of tasks
        assert!(overdue > SAMPLES / 10 && overdue < SAMPLES * 3 / 10, "{overdue} overdue tasks");
    }

    #[test]
    fn test_no_overdue_tasks_unless_requested() {
        let mut gen = generator(GeneratorOptions::default());
        for _ in 0..SAMPLES {
            assert_ne!(gen.task().unwrap().subtype, Some(Subtype::Overdue));
        }
    }

    #[test]
    fn test_far_date_range_is_an_error() {
        let mut gen = generator(GeneratorOptions {
            date_range: u32::MAX,
            ..Default::default()
        });
        let err = gen.event(EventShape::AllDay).unwrap_err();
        assert!(matches!(err, DemoGenError::DateOutOfRange { .. }));
    }

    #[test]
    fn test_clock() {
        assert_eq!(clock(9, 30), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(clock(23, 45), NaiveTime::from_hms_opt(23, 45, 0).unwrap());
    }

    #[test]
    fn test_task_progress_depends_on_status() {
        let mut gen = generator(GeneratorOptions::default());
        for _ in 0..SAMPLES {
            let task = gen.task().unwrap();
            let progress = task.progress.unwrap();
            assert!(PROGRESS_STEPS.contains(&progress));
            if !matches!(task.status, Status::InProgress | Status::Done) {
                assert_eq!(progress, 0);
            }
        }
    }

    #[test]
    fn test_multi_day_event_span() {
        let mut gen = generator(GeneratorOptions::default());
        for _ in 0..SAMPLES {
            let event = gen.event(EventShape::MultiDay).unwrap();
            let span = event.end_date.unwrap() - event.start_date.unwrap();
            assert!(span >= Duration::days(2) && span <= Duration::days(7));
            assert!(event.start_time.is_none() && event.end_time.is_none());
        }
    }

    #[test]
    fn test_event_shapes_fill_disjoint_fields() {
        let mut gen = generator(GeneratorOptions::default());

        let timed = gen.event(EventShape::Timed).unwrap();
        assert_eq!(timed.subtype, Some(Subtype::Timed));
        assert!(timed.start_time.is_some() && timed.end_time.is_some());
        assert!(timed.end_date.is_none());
        assert!(timed.end_time >= timed.start_time);

        let all_day = gen.event(EventShape::AllDay).unwrap();
        assert_eq!(all_day.subtype, Some(Subtype::AllDay));
        assert!(all_day.start_date.is_some());
        assert!(all_day.end_date.is_none() && all_day.start_time.is_none());
    }

    #[test]
    fn test_event_start_within_date_range() {
        let options = GeneratorOptions {
            date_range: 90,
            ..Default::default()
        };
        let mut gen = generator(options);
        let earliest = today() - Duration::days(7);
        let latest = today() + Duration::days(90);
        for _ in 0..SAMPLES {
            let start = gen.event(EventShape::Random).unwrap().start_date.unwrap();
            assert!(start >= earliest && start <= latest, "{start} out of range");
        }
    }

    #[test]
    fn test_random_event_shape_distribution() {
        let mut gen = generator(GeneratorOptions::default());
        let mut multi_day = 0;
        let mut all_day = 0;
        for _ in 0..SAMPLES * 5 {
            match gen.event(EventShape::Random).unwrap().subtype {
                Some(Subtype::MultiDay) => multi_day += 1,
                Some(Subtype::AllDay) => all_day += 1,
                _ => {}
            }
        }
        // multi-day 20%, all-day 0.8 * 0.3 = 24%
        assert!((800..1200).contains(&multi_day), "multi-day: {multi_day}");
        assert!((1000..1400).contains(&all_day), "all-day: {all_day}");
    }

    #[test]
    fn test_meeting_fields() {
        let mut gen = generator(GeneratorOptions::default());
        let meeting = gen.meeting().unwrap();
        assert_eq!(meeting.category, Category::Meeting);
        assert_eq!(meeting.color, Color::Blue);
        assert!(meeting.location.as_deref().unwrap().starts_with("Room "));
        assert_eq!(meeting.attendees, Some(Vec::new()));
        assert!(MEETING_STATUSES.contains(&meeting.status));

        let start = meeting.start_time.unwrap();
        assert!((9..=17).contains(&start.hour()));
        assert_eq!(meeting.tags[..2], ["meeting".to_string(), "sync".to_string()]);
    }

    #[test]
    fn test_realistic_meeting_has_distinct_attendees() {
        let options = GeneratorOptions {
            realistic: true,
            ..Default::default()
        };
        let mut gen = generator(options);
        for _ in 0..100 {
            let meeting = gen.meeting().unwrap();
            assert!(EVENT_TITLES.contains(&meeting.title.as_str()));
            assert!(MEETING_LOCATIONS.contains(&meeting.location.as_deref().unwrap()));

            let attendees = meeting.attendees.unwrap();
            assert!((1..=5).contains(&attendees.len()));
            let mut unique = attendees.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), attendees.len());
        }
    }

    #[test]
    fn test_project_fields() {
        let mut gen = generator(GeneratorOptions::default());
        for _ in 0..SAMPLES {
            let project = gen.project().unwrap();
            let span = project.end_date.unwrap() - project.start_date.unwrap();
            assert!(span >= Duration::days(14) && span <= Duration::days(90));
            assert!(PROGRESS_STEPS.contains(&project.progress.unwrap()));
            if project.status == Status::Completed {
                assert_eq!(project.progress, Some(100));
            }
        }
    }

    #[test]
    fn test_undated_task() {
        let mut gen = generator(GeneratorOptions::default());
        let task = gen.undated_task().unwrap();
        assert_eq!(task.category, Category::Task);
        assert_eq!(task.subtype, Some(Subtype::Undated));
        assert_eq!(task.status, Status::Inbox);
        assert_eq!(task.color, Color::Gray);
        assert!(task.start_date.is_none() && task.due_date.is_none());
        assert_eq!(task.tags.last().map(String::as_str), Some(UNDATED_TAG));
    }

    #[test]
    fn test_tags_base_and_shared() {
        let mut gen = generator(GeneratorOptions::default());
        for _ in 0..100 {
            let tags = gen.project().unwrap().tags;
            assert_eq!(tags[..2], ["project".to_string(), "epic".to_string()]);
            assert!(tags.len() <= 4);
            for extra in &tags[2..] {
                assert!(SHARED_TAGS.contains(&extra.as_str()));
            }
            if tags.len() == 4 {
                assert_ne!(tags[2], tags[3]);
            }
        }
    }

    #[test]
    fn test_random_titles() {
        let mut gen = generator(GeneratorOptions::default());
        let title = gen.task().unwrap().title;
        assert_eq!(title.len(), RANDOM_TITLE_LEN);
        assert!(title.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_priority_weights() {
        let mut gen = generator(GeneratorOptions::default());
        let mut medium = 0;
        for _ in 0..SAMPLES * 5 {
            if gen.undated_task().unwrap().priority == Some(Priority::Medium) {
                medium += 1;
            }
        }
        assert!((2200..2800).contains(&medium), "medium: {medium}");
    }

    #[test]
    fn test_add_hours_clamps_to_end_of_day() {
        let start = NaiveTime::from_hms_opt(18, 45, 0).unwrap();
        assert_eq!(add_hours_clamped(start, 8), NaiveTime::from_hms_opt(23, 45, 0).unwrap());
        assert_eq!(add_hours_clamped(start, 2), NaiveTime::from_hms_opt(20, 45, 0).unwrap());
    }

    #[test]
    fn test_same_seed_same_records() {
        let mut a = generator(GeneratorOptions::default());
        let mut b = generator(GeneratorOptions::default());
        for _ in 0..50 {
            assert_eq!(a.meeting().unwrap(), b.meeting().unwrap());
            assert_eq!(a.event(EventShape::Random).unwrap(), b.event(EventShape::Random).unwrap());
        }
    }
}

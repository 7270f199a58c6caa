//! Markdown rendering for demo records.
//!
//! A rendered file is a YAML front-matter header between two `---` lines,
//! followed by a fixed body template for the record's category.

use std::collections::BTreeMap;

use chrono::NaiveTime;

use crate::error::DemoGenResult;
use crate::record::{Category, Record, Subtype};

const DELIMITER: &str = "---\n";

/// Render a record to the full file content.
pub fn render(record: &Record) -> DemoGenResult<String> {
    let mut content = String::from(DELIMITER);
    content.push_str(&header(record)?);
    content.push_str(DELIMITER);
    content.push('\n');
    content.push_str(&body(record));
    Ok(content)
}

/// YAML mapping of the record's persisted fields, keys sorted.
pub fn header(record: &Record) -> DemoGenResult<String> {
    let fields: BTreeMap<String, serde_yaml::Value> =
        serde_yaml::from_value(serde_yaml::to_value(record)?)?;
    Ok(serde_yaml::to_string(&fields)?)
}

/// Body template for the record's category.
pub fn body(record: &Record) -> String {
    match record.category {
        Category::Task => task_body(record),
        Category::Event => event_body(record),
        Category::Meeting => meeting_body(record),
        Category::Project => project_body(record),
    }
}

fn task_body(record: &Record) -> String {
    let mut content = format!("# {}\n\n", record.title);
    content.push_str("## Description\n\n");
    content.push_str("<!-- Task description -->\n\n");
    content.push_str("## Checklist\n");
    content.push_str("- [ ] Prepare\n");
    content.push_str("- [ ] Do\n");
    content.push_str("- [ ] Review\n");
    content
}

fn event_body(record: &Record) -> String {
    let mut content = format!("# 📅 {}\n\n", record.title);
    content.push_str("## Details\n\n");

    match (record.subtype, record.start_time, record.end_time) {
        (Some(Subtype::MultiDay), _, _) => {
            if let (Some(start), Some(end)) = (record.start_date, record.end_date) {
                content.push_str(&format!("**Period**: {} — {}\n\n", start, end));
            }
        }
        (_, Some(start), Some(end)) => {
            content.push_str(&format!("**Time**: {} — {}\n\n", clock(start), clock(end)));
        }
        _ => {}
    }

    content.push_str("## Notes\n\n");
    content
}

fn meeting_body(record: &Record) -> String {
    let mut content = format!("# 📅 {}\n\n", record.title);
    content.push_str("## Attendees\n");
    for attendee in record.attendees.iter().flatten() {
        content.push_str(&format!("- {}\n", attendee));
    }
    content.push_str("\n## Agenda\n1. \n\n");
    content.push_str("## Notes\n\n");
    content.push_str("## Action items\n- [ ] \n");
    content
}

fn project_body(record: &Record) -> String {
    let mut content = format!("# 🎯 {}\n\n", record.title);
    content.push_str("## Description\n\n");
    content.push_str("## Goals\n- \n\n");
    content.push_str("## Milestones\n");
    content.push_str("- [ ] Milestone 1\n");
    content.push_str("- [ ] Milestone 2\n");
    content.push_str("- [ ] Milestone 3\n");
    content
}

fn clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

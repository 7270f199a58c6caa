//! Console rendering for run results.
//!
//! Extension traits that add colored terminal output to demogen-core types
//! using owo_colors.

use std::path::Path;

use demogen_core::record::Category;
use demogen_core::run::RunReport;
use demogen_core::stats::CategoryStats;
use owo_colors::OwoColorize;

const RULE_WIDTH: usize = 50;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

fn label(category: Category) -> &'static str {
    match category {
        Category::Task => "📋 Tasks:",
        Category::Event => "📅 Events:",
        Category::Meeting => "🤝 Meetings:",
        Category::Project => "🎯 Projects:",
    }
}

impl Render for CategoryStats {
    fn render(&self) -> String {
        self.iter()
            .map(|(category, count)| {
                // Pad the label so the counts line up; emoji count as one char here.
                format!("{:<13}{}", label(category), count.bold())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Render for RunReport {
    fn render(&self) -> String {
        let rule = "═".repeat(RULE_WIDTH).dimmed().to_string();
        let headline = format!(
            "✨ Generated {} files in {}",
            self.written.len().green(),
            self.output.display()
        );

        [String::new(), rule.clone(), headline, rule.clone(), self.stats.render(), rule].join("\n")
    }
}

/// One line per written file (verbose mode).
pub fn render_written(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!("{} {}", "✅".green(), name)
}

pub fn render_cleared(path: &Path, count: usize) -> String {
    format!("🗑️  Cleared {} ({} files)", path.display(), count)
        .dimmed()
        .to_string()
}

//! Category selection modes.
//!
//! A mode decides, per record, which kind of record to generate next.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::error::{DemoGenError, DemoGenResult};
use crate::generator::{EventShape, RecordKind};

const ALL_WEIGHTS: &[(RecordKind, f64)] = &[
    (RecordKind::Task, 0.35),
    (RecordKind::Event(EventShape::Random), 0.25),
    (RecordKind::Meeting, 0.15),
    (RecordKind::Project, 0.10),
];

const UNDATED_WEIGHT: (RecordKind, f64) = (RecordKind::UndatedTask, 0.15);

const CALENDAR_WEIGHTS: &[(EventShape, f64)] = &[
    (EventShape::Timed, 0.5),
    (EventShape::AllDay, 0.3),
    (EventShape::MultiDay, 0.2),
];

const TABLE_KINDS: &[RecordKind] = &[
    RecordKind::Task,
    RecordKind::Event(EventShape::Random),
    RecordKind::Project,
];

const MIXED_KINDS: &[RecordKind] = &[
    RecordKind::Task,
    RecordKind::Event(EventShape::Random),
    RecordKind::Meeting,
    RecordKind::Project,
    RecordKind::UndatedTask,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Weighted mix of every category
    #[default]
    All,
    /// Events only, with a fixed timed/all-day/multi-day split
    Calendar,
    /// Tasks only
    Board,
    /// Tasks, events and projects, uniformly
    Table,
    /// Every kind uniformly, undated tasks included
    Mixed,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Calendar => "calendar",
            Mode::Board => "board",
            Mode::Table => "table",
            Mode::Mixed => "mixed",
        }
    }

    /// Pick the kind of the next record. Each call is independent.
    pub fn pick_kind<R: Rng + ?Sized>(&self, rng: &mut R, with_undated: bool) -> DemoGenResult<RecordKind> {
        match self {
            Mode::All => {
                let mut weights = ALL_WEIGHTS.to_vec();
                if with_undated {
                    weights.push(UNDATED_WEIGHT);
                }
                let (kind, _) = weights.choose_weighted(rng, |(_, weight)| *weight)?;
                Ok(*kind)
            }
            Mode::Calendar => {
                let (shape, _) = CALENDAR_WEIGHTS.choose_weighted(rng, |(_, weight)| *weight)?;
                Ok(RecordKind::Event(*shape))
            }
            Mode::Board => Ok(RecordKind::Task),
            Mode::Table => TABLE_KINDS
                .choose(rng)
                .copied()
                .ok_or(DemoGenError::EmptyTable("table kinds")),
            Mode::Mixed => MIXED_KINDS
                .choose(rng)
                .copied()
                .ok_or(DemoGenError::EmptyTable("mixed kinds")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use crate::model::day::Day;
use crate::model::ids::{DayId, WeekId};

/// A mid-level grouping of days.
///
/// `progress` and `is_completed` are derived from the owned days and are
/// refreshed by [`Week::recompute`]; they are never set directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    id: WeekId,
    week_number: u32,
    title: String,
    description: String,
    days: Vec<Day>,
    is_completed: bool,
    progress: f64,
}

impl Week {
    /// Creates a week and immediately derives its progress fields, so a
    /// freshly built week already satisfies the roll-up invariants.
    #[must_use]
    pub fn new(
        id: WeekId,
        week_number: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        days: Vec<Day>,
    ) -> Self {
        let mut week = Self {
            id,
            week_number,
            title: title.into(),
            description: description.into(),
            days,
            is_completed: false,
            progress: 0.0,
        };
        week.recompute();
        week
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &WeekId {
        &self.id
    }

    #[must_use]
    pub fn week_number(&self) -> u32 {
        self.week_number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// True iff the week has at least one day and all of them are completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Percentage of completed days, in `[0, 100]`. Zero for zero-day weeks.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Returns `(completed, total)` day counts for this week.
    #[must_use]
    pub fn day_counts(&self) -> (usize, usize) {
        let completed = self.days.iter().filter(|day| day.is_completed()).count();
        (completed, self.days.len())
    }

    pub(crate) fn find_day_mut(&mut self, day_id: &DayId) -> Option<&mut Day> {
        self.days.iter_mut().find(|day| day.id() == day_id)
    }

    /// Re-derives `progress` and `is_completed` from the current days.
    ///
    /// A zero-day week is incomplete with progress 0 rather than vacuously
    /// complete; empty weeks are not valid seed input but must not panic.
    pub(crate) fn recompute(&mut self) {
        let (completed, total) = self.day_counts();
        self.progress = if total > 0 {
            (completed as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        self.is_completed = total > 0 && completed == total;
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

use crate::model::day::Day;
use crate::model::ids::{DayId, PhaseId};
use crate::model::week::Week;

/// A top-level curriculum unit grouping weeks around a stated goal.
///
/// Phase progress is defined over the phase's flattened day count, not by
/// AND-ing week completion, so a phase with one finished week out of two
/// reports the completed-day fraction rather than 50% of weeks.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    id: PhaseId,
    phase_number: u32,
    title: String,
    description: String,
    goal: String,
    weeks: Vec<Week>,
    is_completed: bool,
    progress: f64,
}

impl Phase {
    /// Creates a phase and immediately derives its progress fields.
    #[must_use]
    pub fn new(
        id: PhaseId,
        phase_number: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        goal: impl Into<String>,
        weeks: Vec<Week>,
    ) -> Self {
        let mut phase = Self {
            id,
            phase_number,
            title: title.into(),
            description: description.into(),
            goal: goal.into(),
            weeks,
            is_completed: false,
            progress: 0.0,
        };
        phase.recompute();
        phase
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &PhaseId {
        &self.id
    }

    #[must_use]
    pub fn phase_number(&self) -> u32 {
        self.phase_number
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
    pub fn goal(&self) -> &str {
        &self.goal
    }

    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// True iff the phase has at least one day and all of them are completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Percentage of completed days across all weeks, in `[0, 100]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Returns `(completed, total)` day counts over all weeks of this phase.
    #[must_use]
    pub fn day_counts(&self) -> (usize, usize) {
        self.weeks
            .iter()
            .map(Week::day_counts)
            .fold((0, 0), |(done, all), (c, t)| (done + c, all + t))
    }

    pub(crate) fn find_day_mut(&mut self, day_id: &DayId) -> Option<&mut Day> {
        self.weeks
            .iter_mut()
            .find_map(|week| week.find_day_mut(day_id))
    }

    /// Re-derives progress for every owned week, then for the phase itself.
    pub(crate) fn recompute(&mut self) {
        for week in &mut self.weeks {
            week.recompute();
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::WeekId;
    use crate::time::fixed_now;

    fn build_phase(days_per_week: &[u32]) -> Phase {
        let weeks = days_per_week
            .iter()
            .enumerate()
            .map(|(w, &day_count)| {
                let week_number = u32::try_from(w).unwrap() + 1;
                let days = (1..=day_count)
                    .map(|n| {
                        Day::new(
                            DayId::new(format!("p1-w{week_number}-d{n}")),
                            n,
                            format!("Day {n}"),
                            "desc",
                        )
                    })
                    .collect();
                Week::new(
                    WeekId::new(format!("p1-w{week_number}")),
                    week_number,
                    format!("Week {week_number}"),
                    "desc",
                    days,
                )
            })
            .collect();
        Phase::new(PhaseId::new("p1"), 1, "Phase 1", "desc", "goal", weeks)
    }

    #[test]
    fn phase_progress_is_over_flattened_days_not_weeks() {
        // Two weeks: 1 day and 3 days. Completing the 1-day week should give
        // 25% phase progress, not 50%.
        let mut phase = build_phase(&[1, 3]);
        phase
            .find_day_mut(&DayId::new("p1-w1-d1"))
            .unwrap()
            .set_completion(true, fixed_now());
        phase.recompute();

        assert!(phase.weeks()[0].is_completed());
        assert!((phase.progress() - 25.0).abs() < f64::EPSILON);
        assert!(!phase.is_completed());
    }

    #[test]
    fn completing_every_day_completes_phase() {
        let mut phase = build_phase(&[2, 2]);
        for week_number in 1..=2 {
            for n in 1..=2 {
                phase
                    .find_day_mut(&DayId::new(format!("p1-w{week_number}-d{n}")))
                    .unwrap()
                    .set_completion(true, fixed_now());
            }
        }
        phase.recompute();

        assert!(phase.is_completed());
        assert!((phase.progress() - 100.0).abs() < f64::EPSILON);
        assert_eq!(phase.day_counts(), (4, 4));
    }

    #[test]
    fn phase_without_days_is_incomplete() {
        let phase = build_phase(&[]);
        assert!(!phase.is_completed());
        assert!((phase.progress() - 0.0).abs() < f64::EPSILON);
    }
}

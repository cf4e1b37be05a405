//! Progress aggregation over the Phase → Week → Day tree.
//!
//! Everything here is total: unknown ids are silent no-ops (ids are fixed at
//! curriculum-authoring time and never user-supplied), and `recompute` is a
//! pure projection that can be applied any number of times.

use chrono::{DateTime, Utc};

use crate::model::{Day, DayId, Phase, PhaseId, Week, WeekId};

/// Derived view of the whole curriculum, useful for UI.
///
/// Owns a fully recomputed tree: every week and phase progress field agrees
/// with its descendant day states.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressData {
    pub phases: Vec<Phase>,
    pub total_days: usize,
    pub completed_days: usize,
    pub overall_progress: f64,
}

/// Walks the tree once and re-derives every roll-up field.
///
/// Week and phase `progress`/`is_completed` are refreshed in place; overall
/// totals are summed over all phases. Idempotent.
#[must_use]
pub fn recompute(mut phases: Vec<Phase>) -> ProgressData {
    for phase in &mut phases {
        phase.recompute();
    }

    let (completed_days, total_days) = phases
        .iter()
        .map(Phase::day_counts)
        .fold((0, 0), |(done, all), (c, t)| (done + c, all + t));

    let overall_progress = if total_days > 0 {
        (completed_days as f64 / total_days as f64) * 100.0
    } else {
        0.0
    };

    ProgressData {
        phases,
        total_days,
        completed_days,
        overall_progress,
    }
}

/// Sets the completion flag of the day matching `day_id` and refreshes every
/// derived field in the tree.
///
/// Transitioning to completed stamps `completed_at = now`; a repeated `true`
/// call restamps it (kept deliberately, matching the historical behavior).
/// Transitioning to incomplete clears it. An unknown id returns the tree
/// unchanged.
#[must_use]
pub fn toggle_day_completion(
    mut phases: Vec<Phase>,
    day_id: &DayId,
    is_completed: bool,
    now: DateTime<Utc>,
) -> Vec<Phase> {
    let found = phases
        .iter_mut()
        .find_map(|phase| phase.find_day_mut(day_id));
    if let Some(day) = found {
        day.set_completion(is_completed, now);
        for phase in &mut phases {
            phase.recompute();
        }
    }
    phases
}

/// Replaces the remarks of the day matching `day_id`.
///
/// No derived field depends on remarks, so nothing else changes. An unknown
/// id returns the tree unchanged.
#[must_use]
pub fn update_day_remarks(mut phases: Vec<Phase>, day_id: &DayId, remarks: &str) -> Vec<Phase> {
    let found = phases
        .iter_mut()
        .find_map(|phase| phase.find_day_mut(day_id));
    if let Some(day) = found {
        day.set_remarks(remarks);
    }
    phases
}

/// Linear-scan lookup of a day anywhere in the tree.
///
/// The tree is small and of fixed depth, so no index is kept.
#[must_use]
pub fn find_day<'a>(phases: &'a [Phase], day_id: &DayId) -> Option<&'a Day> {
    phases
        .iter()
        .flat_map(Phase::weeks)
        .flat_map(Week::days)
        .find(|day| day.id() == day_id)
}

/// Linear-scan lookup of a week anywhere in the tree.
#[must_use]
pub fn find_week<'a>(phases: &'a [Phase], week_id: &WeekId) -> Option<&'a Week> {
    phases
        .iter()
        .flat_map(Phase::weeks)
        .find(|week| week.id() == week_id)
}

/// Linear-scan lookup of a phase.
#[must_use]
pub fn find_phase<'a>(phases: &'a [Phase], phase_id: &PhaseId) -> Option<&'a Phase> {
    phases.iter().find(|phase| phase.id() == phase_id)
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    /// One phase, one week, two days — the smallest tree where week, phase
    /// and overall roll-ups all move independently of each other.
    fn two_day_tree() -> Vec<Phase> {
        let days = vec![
            Day::new(DayId::new("d1"), 1, "Day 1", "desc"),
            Day::new(DayId::new("d2"), 2, "Day 2", "desc"),
        ];
        let week = Week::new(WeekId::new("w1"), 1, "Week 1", "desc", days);
        vec![Phase::new(
            PhaseId::new("p1"),
            1,
            "Phase 1",
            "desc",
            "goal",
            vec![week],
        )]
    }

    #[test]
    fn completing_one_of_two_days_rolls_up_to_fifty_percent() {
        let phases = two_day_tree();
        let phases = toggle_day_completion(phases, &DayId::new("d1"), true, fixed_now());
        let data = recompute(phases);

        let week = &data.phases[0].weeks()[0];
        assert!((week.progress() - 50.0).abs() < f64::EPSILON);
        assert!(!week.is_completed());
        assert!((data.phases[0].progress() - 50.0).abs() < f64::EPSILON);
        assert!((data.overall_progress - 50.0).abs() < f64::EPSILON);
        assert_eq!(data.completed_days, 1);
        assert_eq!(data.total_days, 2);

        let day = find_day(&data.phases, &DayId::new("d1")).unwrap();
        assert_eq!(day.completed_at(), Some(fixed_now()));
    }

    #[test]
    fn completing_both_days_completes_week_and_phase() {
        let phases = two_day_tree();
        let phases = toggle_day_completion(phases, &DayId::new("d1"), true, fixed_now());
        let phases = toggle_day_completion(phases, &DayId::new("d2"), true, fixed_now());
        let data = recompute(phases);

        assert!(data.phases[0].weeks()[0].is_completed());
        assert!(data.phases[0].is_completed());
        assert!((data.overall_progress - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn toggling_back_to_incomplete_clears_timestamp() {
        let phases = two_day_tree();
        let phases = toggle_day_completion(phases, &DayId::new("d1"), true, fixed_now());
        let phases = toggle_day_completion(phases, &DayId::new("d2"), true, fixed_now());
        let phases = toggle_day_completion(phases, &DayId::new("d1"), false, fixed_now());
        let data = recompute(phases);

        assert!((data.overall_progress - 50.0).abs() < f64::EPSILON);
        let day = find_day(&data.phases, &DayId::new("d1")).unwrap();
        assert!(!day.is_completed());
        assert_eq!(day.completed_at(), None);
    }

    #[test]
    fn repeated_true_toggle_restamps_completed_at() {
        let first = fixed_now();
        let second = first + Duration::days(2);

        let phases = two_day_tree();
        let phases = toggle_day_completion(phases, &DayId::new("d1"), true, first);
        let phases = toggle_day_completion(phases, &DayId::new("d1"), true, second);

        let day = find_day(&phases, &DayId::new("d1")).unwrap();
        assert_eq!(day.completed_at(), Some(second));
    }

    #[test]
    fn remarks_update_leaves_progress_untouched() {
        let phases = two_day_tree();
        let phases = toggle_day_completion(phases, &DayId::new("d1"), true, fixed_now());
        let before = recompute(phases.clone());

        let phases = update_day_remarks(phases, &DayId::new("d2"), "done early");
        let after = recompute(phases);

        let day = find_day(&after.phases, &DayId::new("d2")).unwrap();
        assert_eq!(day.remarks(), Some("done early"));
        assert!((after.overall_progress - before.overall_progress).abs() < f64::EPSILON);
        assert_eq!(after.completed_days, before.completed_days);
    }

    #[test]
    fn unknown_day_id_is_a_silent_noop() {
        let phases = two_day_tree();

        let toggled = toggle_day_completion(phases.clone(), &DayId::new("missing-id"), true, fixed_now());
        assert_eq!(toggled, phases);

        let annotated = update_day_remarks(phases.clone(), &DayId::new("missing-id"), "note");
        assert_eq!(annotated, phases);
    }

    #[test]
    fn recompute_is_idempotent() {
        let phases = toggle_day_completion(two_day_tree(), &DayId::new("d2"), true, fixed_now());
        let once = recompute(phases);
        let twice = recompute(once.phases.clone());

        assert_eq!(once.phases, twice.phases);
        assert_eq!(once.total_days, twice.total_days);
        assert_eq!(once.completed_days, twice.completed_days);
        assert!((once.overall_progress - twice.overall_progress).abs() < f64::EPSILON);
    }

    #[test]
    fn recompute_of_empty_tree_reports_zero() {
        let data = recompute(Vec::new());
        assert_eq!(data.total_days, 0);
        assert_eq!(data.completed_days, 0);
        assert!((data.overall_progress - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lookups_find_each_level() {
        let phases = two_day_tree();
        assert!(find_phase(&phases, &PhaseId::new("p1")).is_some());
        assert!(find_week(&phases, &WeekId::new("w1")).is_some());
        assert!(find_day(&phases, &DayId::new("d2")).is_some());

        assert!(find_phase(&phases, &PhaseId::new("p9")).is_none());
        assert!(find_week(&phases, &WeekId::new("w9")).is_none());
        assert!(find_day(&phases, &DayId::new("d9")).is_none());
    }
}

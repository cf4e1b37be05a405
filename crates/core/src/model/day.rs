use chrono::{DateTime, Utc};

use crate::model::ids::DayId;

/// A single unit of work in the curriculum.
///
/// Days are leaves of the Phase → Week → Day tree and the only entities with
/// user-settable state. They are never created or destroyed at runtime, only
/// toggled complete/incomplete and annotated with remarks.
#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    id: DayId,
    day_number: u32,
    title: String,
    description: String,
    math_content: Option<String>,
    code_content: Option<String>,
    is_completed: bool,
    remarks: Option<String>,
    completed_at: Option<DateTime<Utc>>,
}

impl Day {
    /// Creates a fresh, incomplete day for the seed curriculum.
    #[must_use]
    pub fn new(
        id: DayId,
        day_number: u32,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            day_number,
            title: title.into(),
            description: description.into(),
            math_content: None,
            code_content: None,
            is_completed: false,
            remarks: None,
            completed_at: None,
        }
    }

    /// Attaches optional math notes to a seed day.
    #[must_use]
    pub fn with_math_content(mut self, math_content: impl Into<String>) -> Self {
        self.math_content = Some(math_content.into());
        self
    }

    /// Attaches optional code notes to a seed day.
    #[must_use]
    pub fn with_code_content(mut self, code_content: impl Into<String>) -> Self {
        self.code_content = Some(code_content.into());
        self
    }

    /// Rebuilds a day from persisted state.
    ///
    /// A stale `completed_at` on an incomplete day is dropped so the
    /// completion invariant holds after load. A completed day without a
    /// timestamp is accepted as-is; the original timestamp is gone and
    /// nothing here can reconstruct it.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_persisted(
        id: DayId,
        day_number: u32,
        title: String,
        description: String,
        math_content: Option<String>,
        code_content: Option<String>,
        is_completed: bool,
        remarks: Option<String>,
        completed_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            day_number,
            title,
            description,
            math_content,
            code_content,
            is_completed,
            remarks,
            completed_at: if is_completed { completed_at } else { None },
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &DayId {
        &self.id
    }

    #[must_use]
    pub fn day_number(&self) -> u32 {
        self.day_number
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
    pub fn math_content(&self) -> Option<&str> {
        self.math_content.as_deref()
    }

    #[must_use]
    pub fn code_content(&self) -> Option<&str> {
        self.code_content.as_deref()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    #[must_use]
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    /// Timestamp of the most recent transition to completed.
    ///
    /// Present iff the day is currently completed.
    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Sets the completion flag and stamps/clears `completed_at`.
    ///
    /// Every `true` call restamps the timestamp to `now`, even when the day
    /// was already completed. Toggling to `false` always clears it.
    pub(crate) fn set_completion(&mut self, is_completed: bool, now: DateTime<Utc>) {
        self.is_completed = is_completed;
        self.completed_at = if is_completed { Some(now) } else { None };
    }

    pub(crate) fn set_remarks(&mut self, remarks: impl Into<String>) {
        self.remarks = Some(remarks.into());
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn build_day() -> Day {
        Day::new(DayId::new("d1"), 1, "Sampling", "Nyquist and aliasing")
    }

    #[test]
    fn new_day_starts_incomplete() {
        let day = build_day();
        assert!(!day.is_completed());
        assert_eq!(day.completed_at(), None);
        assert_eq!(day.remarks(), None);
    }

    #[test]
    fn completion_stamps_and_clears_timestamp() {
        let mut day = build_day();
        let now = fixed_now();

        day.set_completion(true, now);
        assert!(day.is_completed());
        assert_eq!(day.completed_at(), Some(now));

        day.set_completion(false, now + Duration::hours(1));
        assert!(!day.is_completed());
        assert_eq!(day.completed_at(), None);
    }

    #[test]
    fn repeated_completion_restamps_timestamp() {
        let mut day = build_day();
        let first = fixed_now();
        let second = first + Duration::days(1);

        day.set_completion(true, first);
        day.set_completion(true, second);
        assert_eq!(day.completed_at(), Some(second));
    }

    #[test]
    fn from_persisted_drops_stale_timestamp() {
        let day = Day::from_persisted(
            DayId::new("d1"),
            1,
            "Sampling".into(),
            "Nyquist and aliasing".into(),
            None,
            None,
            false,
            None,
            Some(fixed_now()),
        );
        assert_eq!(day.completed_at(), None);
    }

    #[test]
    fn optional_content_round_trips() {
        let day = build_day()
            .with_math_content("f_s > 2 f_max")
            .with_code_content("let spectrum = fft(&samples);");
        assert_eq!(day.math_content(), Some("f_s > 2 f_max"));
        assert_eq!(day.code_content(), Some("let spectrum = fft(&samples);"));
    }
}

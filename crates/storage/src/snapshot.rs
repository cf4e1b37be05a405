//! Wire shape of the persisted snapshot.
//!
//! The snapshot is a JSON array of phase objects with camelCase keys, exactly
//! the in-memory tree shape serialized as text. There is no schema version
//! field; optional keys (`remarks`, `completedAt`, `mathContent`,
//! `codeContent`) are omitted when absent and tolerated when missing on load.
//!
//! These records mirror the domain types so (de)serialization never leaks
//! serde concerns into `curriculum-core`. Derived fields are written for
//! wire fidelity but re-derived from day state when decoding, so roll-up
//! invariants hold on every load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use curriculum_core::model::{Day, DayId, Phase, PhaseId, Week, WeekId};

use crate::repository::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub id: DayId,
    pub day_number: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub math_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_content: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRecord {
    pub id: WeekId,
    pub week_number: u32,
    pub title: String,
    pub description: String,
    pub days: Vec<DayRecord>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRecord {
    pub id: PhaseId,
    pub phase_number: u32,
    pub title: String,
    pub description: String,
    pub goal: String,
    pub weeks: Vec<WeekRecord>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub progress: f64,
}

impl DayRecord {
    #[must_use]
    pub fn from_day(day: &Day) -> Self {
        Self {
            id: day.id().clone(),
            day_number: day.day_number(),
            title: day.title().to_owned(),
            description: day.description().to_owned(),
            math_content: day.math_content().map(str::to_owned),
            code_content: day.code_content().map(str::to_owned),
            is_completed: day.is_completed(),
            remarks: day.remarks().map(str::to_owned),
            completed_at: day.completed_at(),
        }
    }

    /// Convert the record back into a domain `Day`.
    #[must_use]
    pub fn into_day(self) -> Day {
        Day::from_persisted(
            self.id,
            self.day_number,
            self.title,
            self.description,
            self.math_content,
            self.code_content,
            self.is_completed,
            self.remarks,
            self.completed_at,
        )
    }
}

impl WeekRecord {
    #[must_use]
    pub fn from_week(week: &Week) -> Self {
        Self {
            id: week.id().clone(),
            week_number: week.week_number(),
            title: week.title().to_owned(),
            description: week.description().to_owned(),
            days: week.days().iter().map(DayRecord::from_day).collect(),
            is_completed: week.is_completed(),
            progress: week.progress(),
        }
    }

    /// Convert the record back into a domain `Week`.
    ///
    /// Persisted `progress`/`isCompleted` are ignored; the constructor
    /// re-derives them from the day states.
    #[must_use]
    pub fn into_week(self) -> Week {
        Week::new(
            self.id,
            self.week_number,
            self.title,
            self.description,
            self.days.into_iter().map(DayRecord::into_day).collect(),
        )
    }
}

impl PhaseRecord {
    #[must_use]
    pub fn from_phase(phase: &Phase) -> Self {
        Self {
            id: phase.id().clone(),
            phase_number: phase.phase_number(),
            title: phase.title().to_owned(),
            description: phase.description().to_owned(),
            goal: phase.goal().to_owned(),
            weeks: phase.weeks().iter().map(WeekRecord::from_week).collect(),
            is_completed: phase.is_completed(),
            progress: phase.progress(),
        }
    }

    /// Convert the record back into a domain `Phase`.
    #[must_use]
    pub fn into_phase(self) -> Phase {
        Phase::new(
            self.id,
            self.phase_number,
            self.title,
            self.description,
            self.goal,
            self.weeks.into_iter().map(WeekRecord::into_week).collect(),
        )
    }
}

/// Serializes the full tree to the snapshot text.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_snapshot(phases: &[Phase]) -> Result<String, StorageError> {
    let records: Vec<PhaseRecord> = phases.iter().map(PhaseRecord::from_phase).collect();
    serde_json::to_string(&records).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parses snapshot text back into a domain tree with fresh derived fields.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the text is not a valid snapshot.
/// Callers treat that as "no usable snapshot" and fall back to the seed.
pub fn decode_snapshot(text: &str) -> Result<Vec<Phase>, StorageError> {
    let records: Vec<PhaseRecord> =
        serde_json::from_str(text).map_err(|e| StorageError::Serialization(e.to_string()))?;
    Ok(records.into_iter().map(PhaseRecord::into_phase).collect())
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

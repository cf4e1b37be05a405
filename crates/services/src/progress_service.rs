use std::sync::Arc;

use tracing::warn;

use curriculum_core::aggregate;
use curriculum_core::model::{Day, DayId, Phase, PhaseId, Week, WeekId};
use curriculum_core::seed::seed_curriculum;
use curriculum_core::{Clock, ProgressData};
use storage::repository::{PROGRESS_SNAPSHOT_KEY, SnapshotStore};
use storage::snapshot::{decode_snapshot, encode_snapshot};

/// Single in-memory authority over the curriculum tree.
///
/// Every mutation runs the same pipeline: apply to the tree, refresh all
/// derived fields, then persist the whole snapshot. Readers only ever see a
/// fully recomputed tree. The service itself never fails: storage trouble is
/// logged and the in-memory state stays the source of truth for the session.
pub struct ProgressService {
    clock: Clock,
    store: Arc<dyn SnapshotStore>,
    phases: Vec<Phase>,
}

impl ProgressService {
    /// Builds the service from the persisted snapshot, or from the seed
    /// curriculum when no usable snapshot exists.
    ///
    /// Infallible by design: an unreadable store or an unparseable snapshot
    /// is logged and the seed is used instead.
    pub async fn load(clock: Clock, store: Arc<dyn SnapshotStore>) -> Self {
        let phases = match store.get(PROGRESS_SNAPSHOT_KEY).await {
            Ok(Some(text)) => match decode_snapshot(&text) {
                Ok(phases) => phases,
                Err(err) => {
                    warn!(error = %err, "persisted snapshot failed to parse, using seed curriculum");
                    seed_curriculum()
                }
            },
            Ok(None) => seed_curriculum(),
            Err(err) => {
                warn!(error = %err, "could not read persisted snapshot, using seed curriculum");
                seed_curriculum()
            }
        };

        Self {
            clock,
            store,
            phases,
        }
    }

    /// Current derived view of the whole curriculum.
    #[must_use]
    pub fn progress_data(&self) -> ProgressData {
        aggregate::recompute(self.phases.clone())
    }

    /// Borrow of the current tree, for callers that only need one subtree.
    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Sets a day's completion flag, refreshes every roll-up, and persists.
    ///
    /// An unknown id is a silent no-op. Completing a day stamps
    /// `completed_at` with the service clock's now, restamping on repeated
    /// completion; un-completing clears it.
    pub async fn toggle_day_completion(&mut self, day_id: &DayId, is_completed: bool) {
        let now = self.clock.now();
        self.phases = aggregate::toggle_day_completion(
            std::mem::take(&mut self.phases),
            day_id,
            is_completed,
            now,
        );
        self.persist().await;
    }

    /// Replaces a day's remarks and persists. Unknown ids are silent no-ops.
    pub async fn update_day_remarks(&mut self, day_id: &DayId, remarks: &str) {
        self.phases = aggregate::update_day_remarks(std::mem::take(&mut self.phases), day_id, remarks);
        self.persist().await;
    }

    /// Looks up a day by id. Returns `None` for unknown ids.
    #[must_use]
    pub fn find_day(&self, day_id: &DayId) -> Option<&Day> {
        aggregate::find_day(&self.phases, day_id)
    }

    /// Looks up a week by id. Returns `None` for unknown ids.
    #[must_use]
    pub fn find_week(&self, week_id: &WeekId) -> Option<&Week> {
        aggregate::find_week(&self.phases, week_id)
    }

    /// Looks up a phase by id. Returns `None` for unknown ids.
    #[must_use]
    pub fn find_phase(&self, phase_id: &PhaseId) -> Option<&Phase> {
        aggregate::find_phase(&self.phases, phase_id)
    }

    /// Writes the full current tree over the prior snapshot.
    ///
    /// Failures are logged and swallowed: the in-memory tree remains
    /// authoritative, and the next mutation's write carries the latest state
    /// again.
    async fn persist(&self) {
        let text = match encode_snapshot(&self.phases) {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "could not encode progress snapshot, skipping persist");
                return;
            }
        };
        if let Err(err) = self.store.set(PROGRESS_SNAPSHOT_KEY, &text).await {
            warn!(error = %err, "failed to persist progress snapshot, keeping in-memory state");
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

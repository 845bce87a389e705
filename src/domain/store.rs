use super::activity::{Activity, ActivityId, Draft};
use tracing::debug;

/// In-memory, insertion-ordered collection of activities.
///
/// Every mutation is best-effort: a rejected add or an unknown id is logged and
/// otherwise ignored.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    activities: Vec<Activity>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new activity built from the draft.
    /// Returns the fresh id, or None when name or cost is blank.
    pub fn add(&mut self, draft: &Draft) -> Option<ActivityId> {
        if !draft.is_addable() {
            debug!(name = %draft.name, cost = %draft.cost, "add rejected: name and cost are required");
            return None;
        }

        let id = ActivityId::new();
        let activity = Activity::from_draft(id, draft);
        debug!(%id, name = %activity.name, cost = activity.cost, "activity added");
        self.activities.push(activity);
        Some(id)
    }

    /// Replace every editable field of the activity with the draft's values.
    /// Returns false when the id is unknown.
    pub fn update(&mut self, id: ActivityId, draft: &Draft) -> bool {
        match self.activities.iter_mut().find(|a| a.id == id) {
            Some(activity) => {
                *activity = Activity::from_draft(id, draft);
                debug!(%id, "activity updated");
                true
            }
            None => {
                debug!(%id, "update ignored: unknown activity");
                false
            }
        }
    }

    /// Remove the activity with the given id. Returns false when unknown.
    pub fn remove(&mut self, id: ActivityId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.activities.remove(idx);
                debug!(%id, "activity removed");
                true
            }
            None => {
                debug!(%id, "remove ignored: unknown activity");
                false
            }
        }
    }

    pub fn get(&self, id: ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn position(&self, id: ActivityId) -> Option<usize> {
        self.activities.iter().position(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn as_slice(&self) -> &[Activity] {
        &self.activities
    }
}

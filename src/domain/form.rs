use super::activity::{parse_date, Activity, ActivityId, Draft, DraftField, DATE_FORMAT};
use super::store::ActivityStore;
use super::trip::TripWindow;

/// Where the shared draft currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing in progress, draft empty
    Idle,
    /// Draft being filled for a new activity
    Creating,
    /// Draft pre-populated from an existing activity
    Editing(ActivityId),
}

/// Result of submitting the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(ActivityId),
    Saved(ActivityId),
    /// Nothing committed; draft left untouched
    Rejected,
}

/// Draft plus edit target, reused for both create and edit flows
#[derive(Debug, Clone)]
pub struct ActivityForm {
    pub draft: Draft,
    pub phase: FormPhase,
    pub focus: DraftField,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self {
            draft: Draft::default(),
            phase: FormPhase::Idle,
            focus: DraftField::Name,
        }
    }
}

impl ActivityForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing_id(&self) -> Option<ActivityId> {
        match self.phase {
            FormPhase::Editing(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    /// Any field edit without an edit target moves the form into Creating
    fn touch(&mut self) {
        if self.phase == FormPhase::Idle {
            self.phase = FormPhase::Creating;
        }
    }

    /// Overwrite one field
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
        self.touch();
    }

    /// Append a character to the focused field
    pub fn push_char(&mut self, c: char) {
        self.draft.field_mut(self.focus).push(c);
        self.touch();
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        self.draft.field_mut(self.focus).pop();
        self.touch();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Step the date field one day forward inside the trip window
    pub fn date_forward(&mut self, window: &TripWindow) {
        let next = window.step_forward(parse_date(&self.draft.date));
        self.set_field(DraftField::Date, next.format(DATE_FORMAT).to_string());
    }

    /// Step the date field one day back inside the trip window
    pub fn date_back(&mut self, window: &TripWindow) {
        let prev = window.step_back(parse_date(&self.draft.date));
        self.set_field(DraftField::Date, prev.format(DATE_FORMAT).to_string());
    }

    /// Load an existing activity into the draft and target it for saving
    pub fn begin_edit(&mut self, activity: &Activity) {
        self.draft = Draft::from(activity);
        self.phase = FormPhase::Editing(activity.id);
        self.focus = DraftField::Name;
    }

    /// Commit the draft: add in create mode, update in edit mode.
    /// An invalid add leaves the draft and phase as they were.
    pub fn submit(&mut self, store: &mut ActivityStore) -> SubmitOutcome {
        let outcome = match self.phase {
            FormPhase::Editing(id) => {
                store.update(id, &self.draft);
                SubmitOutcome::Saved(id)
            }
            FormPhase::Idle | FormPhase::Creating => match store.add(&self.draft) {
                Some(id) => SubmitOutcome::Added(id),
                None => return SubmitOutcome::Rejected,
            },
        };
        self.reset();
        outcome
    }

    /// Discard the draft without touching the store
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Drop the edit when its target no longer exists
    pub fn forget(&mut self, id: ActivityId) {
        if self.editing_id() == Some(id) {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.draft = Draft::default();
        self.phase = FormPhase::Idle;
        self.focus = DraftField::Name;
    }
}

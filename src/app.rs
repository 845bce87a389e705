use crate::config::AppConfig;
use crate::domain::{
    average_per_day, total_cost, trip_dates, Activity, ActivityForm, ActivityStore, DraftField,
    SubmitOutcome, Tab, TripWindow, UiMode,
};
use chrono::NaiveDate;
use tracing::info;

/// Main application state
pub struct AppState {
    pub title: String,
    pub trip: TripWindow,
    pub store: ActivityStore,
    pub form: ActivityForm,
    pub tab: Tab,
    pub ui_mode: UiMode,
    /// Highlighted row in the activity list
    pub selected_index: usize,
    /// Highlighted card in the calendar view (index into trip dates)
    pub selected_day: usize,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            title: config.title,
            trip: config.trip,
            store: ActivityStore::new(),
            form: ActivityForm::new(),
            tab: Tab::Activities,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            selected_day: 0,
        }
    }

    pub fn total_cost(&self) -> f64 {
        total_cost(self.store.as_slice())
    }

    pub fn average_per_day(&self) -> Option<f64> {
        average_per_day(self.store.as_slice(), &self.trip)
    }

    pub fn trip_dates(&self) -> Vec<NaiveDate> {
        trip_dates(&self.trip)
    }

    /// Get the currently highlighted activity
    pub fn selected_activity(&self) -> Option<&Activity> {
        self.store.as_slice().get(self.selected_index)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_prev_day(&mut self) {
        self.selected_day = self.selected_day.saturating_sub(1);
    }

    pub fn select_next_day(&mut self) {
        if self.selected_day + 1 < self.trip.len_days() {
            self.selected_day += 1;
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn toggle_tab(&mut self) {
        self.tab = self.tab.toggle();
    }

    /// Start typing into the form (keeps whatever draft is there)
    pub fn focus_form(&mut self) {
        self.tab = Tab::Activities;
        self.ui_mode = UiMode::Form;
    }

    /// Leave the form without discarding the draft
    pub fn blur_form(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Load the highlighted activity into the form for editing
    pub fn start_edit_selected(&mut self) {
        if let Some(activity) = self.store.as_slice().get(self.selected_index) {
            self.form.begin_edit(activity);
            self.tab = Tab::Activities;
            self.ui_mode = UiMode::Form;
        }
    }

    /// Add or save depending on the form phase
    pub fn submit_form(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit(&mut self.store);
        match outcome {
            SubmitOutcome::Added(id) => {
                info!(%id, total = self.total_cost(), "activity added");
                self.selected_index = self.store.len().saturating_sub(1);
                self.ui_mode = UiMode::Normal;
            }
            SubmitOutcome::Saved(id) => {
                let name = self.store.get(id).map(|a| a.name.as_str()).unwrap_or_default();
                info!(%id, name, total = self.total_cost(), "activity saved");
                if let Some(pos) = self.store.position(id) {
                    self.selected_index = pos;
                }
                self.ui_mode = UiMode::Normal;
            }
            SubmitOutcome::Rejected => {}
        }
        outcome
    }

    /// Discard the draft and any edit target
    pub fn cancel_form(&mut self) {
        self.form.cancel();
        self.ui_mode = UiMode::Normal;
    }

    /// Delete the highlighted activity
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_activity().map(|a| a.id) else {
            return;
        };
        if self.store.remove(id) {
            info!(%id, total = self.total_cost(), "activity deleted");
            self.form.forget(id);
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.store.len() {
            self.selected_index = self.store.len().saturating_sub(1);
        }
    }

    /// Replace the notes field of the draft (used by the external editor)
    pub fn set_draft_notes(&mut self, notes: String) {
        let trimmed = notes.trim_end_matches(['\n', '\r']).to_string();
        self.form.set_field(DraftField::Notes, trimmed);
    }
}

pub mod activity;
pub mod enums;
pub mod form;
pub mod store;
pub mod trip;
pub mod views;

pub use activity::{parse_date, Activity, DraftField};
pub use enums::{Tab, UiMode};
pub use form::{ActivityForm, FormPhase, SubmitOutcome};
pub use store::ActivityStore;
pub use trip::TripWindow;
pub use views::{
    activities_for_date, average_per_day, day_total, format_day_label, format_money, total_cost,
    trip_dates,
};

use super::activity::Activity;
use super::trip::TripWindow;
use chrono::NaiveDate;

/// Sum of cost across all activities
pub fn total_cost(activities: &[Activity]) -> f64 {
    activities.iter().map(|a| a.cost).sum()
}

/// Days of the trip, first to last
pub fn trip_dates(window: &TripWindow) -> Vec<NaiveDate> {
    window.dates()
}

/// Activities on the given day, in insertion order
pub fn activities_for_date(activities: &[Activity], date: NaiveDate) -> Vec<&Activity> {
    activities.iter().filter(|a| a.is_on(date)).collect()
}

/// Sum of cost for the activities on the given day
pub fn day_total(activities: &[Activity], date: NaiveDate) -> f64 {
    activities_for_date(activities, date)
        .iter()
        .map(|a| a.cost)
        .sum()
}

/// Total cost spread evenly over every day of the trip.
/// None while there is nothing planned.
pub fn average_per_day(activities: &[Activity], window: &TripWindow) -> Option<f64> {
    if activities.is_empty() {
        return None;
    }
    Some(total_cost(activities) / window.len_days() as f64)
}

/// Currency string with two decimals, e.g. "$85.00"
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Short day label, e.g. "Tue, Sep 17"
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::activity::Draft;
    use crate::domain::store::ActivityStore;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    fn add(store: &mut ActivityStore, name: &str, cost: &str, date: &str) {
        store
            .add(&Draft {
                name: name.to_string(),
                cost: cost.to_string(),
                date: date.to_string(),
                ..Draft::default()
            })
            .unwrap();
    }

    #[test]
    fn test_zip_lining_scenario() {
        let mut store = ActivityStore::new();
        store
            .add(&Draft {
                name: "Zip-lining".to_string(),
                cost: "85".to_string(),
                date: "2024-09-19".to_string(),
                location: "Anfi del Mar".to_string(),
                notes: String::new(),
            })
            .unwrap();

        let activities = store.as_slice();
        assert_eq!(activities.len(), 1);
        assert_eq!(format_money(total_cost(activities)), "$85.00");

        let on_19 = activities_for_date(activities, day(19));
        assert_eq!(on_19.len(), 1);
        assert_eq!(on_19[0].name, "Zip-lining");
        assert!(activities_for_date(activities, day(20)).is_empty());
    }

    #[test]
    fn test_same_day_totals_and_average() {
        let mut store = ActivityStore::new();
        add(&mut store, "Snorkel", "50", "2024-09-18");
        add(&mut store, "Lunch", "30.5", "2024-09-18");

        let activities = store.as_slice();
        let window = TripWindow::default();

        assert_eq!(day_total(activities, day(18)), 80.5);
        assert_eq!(format_money(day_total(activities, day(18))), "$80.50");

        let average = average_per_day(activities, &window).unwrap();
        assert_eq!(average, 80.5 / 8.0);
        assert_eq!(format_money(average), "$10.06");
    }

    #[test]
    fn test_activities_for_date_is_stable_filter() {
        let mut store = ActivityStore::new();
        add(&mut store, "A", "1", "2024-09-20");
        add(&mut store, "B", "2", "2024-09-21");
        add(&mut store, "C", "3", "2024-09-20");
        add(&mut store, "D", "4", "");

        let names: Vec<&str> = activities_for_date(store.as_slice(), day(20))
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(day_total(store.as_slice(), day(20)), 4.0);
        assert_eq!(day_total(store.as_slice(), day(22)), 0.0);
    }

    #[test]
    fn test_trip_dates_independent_of_store() {
        let window = TripWindow::default();
        let mut store = ActivityStore::new();
        let empty = trip_dates(&window);

        add(&mut store, "Far away", "10", "2025-01-01");
        let after = trip_dates(&window);

        assert_eq!(empty, after);
        assert_eq!(after.len(), 8);
        assert_eq!(after[0], day(17));
        assert_eq!(after[7], day(24));
    }

    #[test]
    fn test_average_hidden_when_empty() {
        assert_eq!(average_per_day(&[], &TripWindow::default()), None);
    }

    #[test]
    fn test_format_day_label() {
        assert_eq!(format_day_label(day(17)), "Tue, Sep 17");
        assert_eq!(format_day_label(day(24)), "Tue, Sep 24");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234.5), "$1234.50");
    }
}

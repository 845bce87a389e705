use chrono::{Datelike, Duration, NaiveDate};

/// Closed date range the planner is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TripWindow {
    /// Build a window, returning None when `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Number of calendar days in the window (both ends included)
    pub fn len_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    /// Whether the date falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day from start to end, inclusive
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates = Vec::with_capacity(self.len_days());
        let mut current = self.start;
        while current <= self.end {
            dates.push(current);
            current = current + Duration::days(1);
        }
        dates
    }

    /// Next day inside the window, saturating at the end.
    /// A date outside the window snaps to the nearest boundary.
    pub fn step_forward(&self, date: Option<NaiveDate>) -> NaiveDate {
        match date {
            None => self.start,
            Some(d) if d < self.start => self.start,
            Some(d) if d >= self.end => self.end,
            Some(d) => d + Duration::days(1),
        }
    }

    /// Previous day inside the window, saturating at the start
    pub fn step_back(&self, date: Option<NaiveDate>) -> NaiveDate {
        match date {
            None => self.end,
            Some(d) if d > self.end => self.end,
            Some(d) if d <= self.start => self.start,
            Some(d) => d - Duration::days(1),
        }
    }

    /// Human readable range, e.g. "September 17-24, 2024"
    pub fn range_label(&self) -> String {
        let (start, end) = (self.start, self.end);
        if start.year() == end.year() && start.month() == end.month() {
            if start == end {
                format!("{}", start.format("%B %-d, %Y"))
            } else {
                format!("{}-{}, {}", start.format("%B %-d"), end.day(), end.year())
            }
        } else if start.year() == end.year() {
            format!("{} - {}, {}", start.format("%b %-d"), end.format("%b %-d"), end.year())
        } else {
            format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
        }
    }
}

impl Default for TripWindow {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 9, 17).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2024, 9, 24).unwrap_or_default(),
        }
    }
}

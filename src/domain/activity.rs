use chrono::NaiveDate;
use std::fmt;
use uuid::Uuid;

/// Date format used by the form and for day-bucket comparisons
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unique identifier for an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityId(Uuid);

impl ActivityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActivityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single planned trip event
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub cost: f64,
    pub date: Option<NaiveDate>,
    /// Empty when no location was given
    pub location: String,
    /// Empty when no notes were given
    pub notes: String,
}

impl Activity {
    /// Build an activity from draft field values under the given id
    pub fn from_draft(id: ActivityId, draft: &Draft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            cost: parse_cost(&draft.cost),
            date: parse_date(&draft.date),
            location: draft.location.clone(),
            notes: draft.notes.clone(),
        }
    }

    pub fn location(&self) -> Option<&str> {
        non_blank(&self.location)
    }

    pub fn notes(&self) -> Option<&str> {
        non_blank(&self.notes)
    }

    /// Whether this activity belongs to the given day bucket
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == Some(date)
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Editable field of the draft, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Cost,
    Date,
    Location,
    Notes,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Name,
        DraftField::Cost,
        DraftField::Date,
        DraftField::Location,
        DraftField::Notes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Activity name",
            DraftField::Cost => "Cost ($)",
            DraftField::Date => "Date (YYYY-MM-DD)",
            DraftField::Location => "Location",
            DraftField::Notes => "Notes (optional)",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Transient staging copy of an activity's editable fields, kept as raw text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub cost: String,
    pub date: String,
    pub location: String,
    pub notes: String,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.cost.is_empty()
            && self.date.is_empty()
            && self.location.is_empty()
            && self.notes.is_empty()
    }

    /// Name and cost must both be present for a new activity
    pub fn is_addable(&self) -> bool {
        !self.name.trim().is_empty() && !self.cost.trim().is_empty()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Cost => &self.cost,
            DraftField::Date => &self.date,
            DraftField::Location => &self.location,
            DraftField::Notes => &self.notes,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Cost => &mut self.cost,
            DraftField::Date => &mut self.date,
            DraftField::Location => &mut self.location,
            DraftField::Notes => &mut self.notes,
        }
    }
}

impl From<&Activity> for Draft {
    fn from(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            cost: activity.cost.to_string(),
            date: activity
                .date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            location: activity.location.clone(),
            notes: activity.notes.clone(),
        }
    }
}

/// Parse a cost string leniently.
///
/// Takes the longest numeric prefix (`[+-]digits[.digits][e[+-]digits]`) after
/// trimming whitespace. Anything unparsable yields 0, and negative amounts are
/// clamped to 0.
pub fn parse_cost(input: &str) -> f64 {
    let s = input.trim();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if has_digits || frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        }
    }

    if !has_digits {
        return 0.0;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    match s[..end].parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Parse an ISO calendar date; blank or malformed input means "no date"
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_draft() -> Draft {
        Draft {
            name: "Zip-lining".to_string(),
            cost: "85".to_string(),
            date: "2024-09-19".to_string(),
            location: "Anfi del Mar".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_parse_cost_plain_numbers() {
        assert_eq!(parse_cost("85"), 85.0);
        assert_eq!(parse_cost("30.5"), 30.5);
        assert_eq!(parse_cost(" 30.5 "), 30.5);
        assert_eq!(parse_cost(".5"), 0.5);
        assert_eq!(parse_cost("1e2"), 100.0);
    }

    #[test]
    fn test_parse_cost_takes_numeric_prefix() {
        assert_eq!(parse_cost("12abc"), 12.0);
        assert_eq!(parse_cost("7.25 USD"), 7.25);
        assert_eq!(parse_cost("3e"), 3.0);
        assert_eq!(parse_cost("4."), 4.0);
    }

    #[test]
    fn test_parse_cost_invalid_is_zero() {
        assert_eq!(parse_cost(""), 0.0);
        assert_eq!(parse_cost("abc"), 0.0);
        assert_eq!(parse_cost("NaN"), 0.0);
        assert_eq!(parse_cost("inf"), 0.0);
        assert_eq!(parse_cost("-"), 0.0);
        assert_eq!(parse_cost("."), 0.0);
        assert_eq!(parse_cost("-5"), 0.0);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-09-19"), NaiveDate::from_ymd_opt(2024, 9, 19));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("next tuesday"), None);
        // Out-of-window dates are still valid dates
        assert_eq!(parse_date("2025-01-01"), NaiveDate::from_ymd_opt(2025, 1, 1));
    }

    #[test]
    fn test_activity_from_draft() {
        let id = ActivityId::new();
        let activity = Activity::from_draft(id, &sample_draft());

        assert_eq!(activity.id, id);
        assert_eq!(activity.name, "Zip-lining");
        assert_eq!(activity.cost, 85.0);
        assert_eq!(activity.date, NaiveDate::from_ymd_opt(2024, 9, 19));
        assert_eq!(activity.location(), Some("Anfi del Mar"));
        assert_eq!(activity.notes(), None);
    }

    #[test]
    fn test_draft_from_activity_round_trips_fields() {
        let draft = sample_draft();
        let activity = Activity::from_draft(ActivityId::new(), &draft);
        assert_eq!(Draft::from(&activity), draft);
    }

    #[test]
    fn test_draft_from_activity_fractional_cost() {
        let mut draft = sample_draft();
        draft.cost = "30.5".to_string();
        let activity = Activity::from_draft(ActivityId::new(), &draft);
        assert_eq!(Draft::from(&activity).cost, "30.5");
    }

    #[test]
    fn test_draft_is_addable() {
        let mut draft = sample_draft();
        assert!(draft.is_addable());

        draft.name = "   ".to_string();
        assert!(!draft.is_addable());

        draft.name = "Snorkel".to_string();
        draft.cost.clear();
        assert!(!draft.is_addable());
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(DraftField::Name.next(), DraftField::Cost);
        assert_eq!(DraftField::Notes.next(), DraftField::Name);
        assert_eq!(DraftField::Name.prev(), DraftField::Notes);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ActivityId::new(), ActivityId::new());
    }
}

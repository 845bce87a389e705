use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Number of day cards per calendar row
pub const CALENDAR_COLUMNS: usize = 4;

/// Height of the activity form pane (borders included)
pub const FORM_HEIGHT: u16 = 9;

/// Height of the cost summary pane (borders included)
pub const SUMMARY_HEIGHT: u16 = 4;

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub tabs_area: Rect,
    pub body_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Header: title, dates and total (3 rows)
/// - Tab bar (1 row)
/// - Body: the active tab
/// - Bottom bar: keybindings (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        header_area: chunks[0],
        tabs_area: chunks[1],
        body_area: chunks[2],
        keybindings_area: chunks[3],
    }
}

/// Areas of the Activities tab
pub struct ActivitiesLayout {
    pub form_area: Rect,
    pub list_area: Rect,
    pub summary_area: Option<Rect>,
}

/// Split the Activities tab: form on top, list in the middle and the
/// cost summary at the bottom when there is something to summarize
pub fn create_activities_layout(area: Rect, show_summary: bool) -> ActivitiesLayout {
    if show_summary {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(SUMMARY_HEIGHT),
            ])
            .split(area);
        ActivitiesLayout {
            form_area: chunks[0],
            list_area: chunks[1],
            summary_area: Some(chunks[2]),
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)])
            .split(area);
        ActivitiesLayout {
            form_area: chunks[0],
            list_area: chunks[1],
            summary_area: None,
        }
    }
}

/// One rect per day card, laid out row by row
pub fn create_calendar_grid(area: Rect, days: usize) -> Vec<Rect> {
    if days == 0 {
        return Vec::new();
    }
    let rows = (days + CALENDAR_COLUMNS - 1) / CALENDAR_COLUMNS;

    let row_constraints: Vec<Constraint> = (0..rows)
        .map(|_| Constraint::Ratio(1, rows as u32))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    let col_constraints: Vec<Constraint> = (0..CALENDAR_COLUMNS)
        .map(|_| Constraint::Ratio(1, CALENDAR_COLUMNS as u32))
        .collect();

    let mut cells = Vec::with_capacity(days);
    for row_area in row_areas.iter() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints.clone())
            .split(*row_area);
        for col_area in col_areas.iter() {
            if cells.len() < days {
                cells.push(*col_area);
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.tabs_area.height, 1);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.body_area.height, 45);
    }

    #[test]
    fn test_activities_layout_summary_toggle() {
        let area = Rect::new(0, 0, 100, 40);

        let with_summary = create_activities_layout(area, true);
        assert_eq!(with_summary.form_area.height, FORM_HEIGHT);
        assert_eq!(with_summary.summary_area.map(|r| r.height), Some(SUMMARY_HEIGHT));
        assert!(with_summary.list_area.height > 0);

        let without = create_activities_layout(area, false);
        assert!(without.summary_area.is_none());
        assert_eq!(without.list_area.height, 40 - FORM_HEIGHT);
    }

    #[test]
    fn test_calendar_grid_two_rows_of_four() {
        let area = Rect::new(0, 0, 100, 40);
        let cells = create_calendar_grid(area, 8);

        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0].y, cells[3].y);
        assert!(cells[4].y > cells[0].y);
        assert_eq!(cells[0].x, cells[4].x);
        assert!(cells.iter().all(|c| c.width > 0 && c.height > 0));
    }

    #[test]
    fn test_calendar_grid_partial_row() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(create_calendar_grid(area, 5).len(), 5);
        assert!(create_calendar_grid(area, 0).is_empty());
    }
}

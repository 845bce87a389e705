use crate::app::AppState;
use crate::domain::{activities_for_date, day_total, format_day_label, format_money};
use crate::ui::layout::create_calendar_grid;
use crate::ui::styles::{
    border_style, default_style, detail_style, empty_style, focused_border_style, money_style,
    title_style,
};
use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render one card per trip day
pub fn render_calendar_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let dates = app.trip_dates();
    let cells = create_calendar_grid(area, dates.len());

    for (idx, (date, cell)) in dates.iter().zip(cells).enumerate() {
        render_day_card(f, app, *date, idx == app.selected_day, cell);
    }
}

fn render_day_card(f: &mut Frame, app: &AppState, date: NaiveDate, selected: bool, area: Rect) {
    let lines = create_day_lines(app, date);

    let border = if selected {
        focused_border_style()
    } else {
        border_style()
    };
    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(format!(" {} ", format_day_label(date)), title_style()))
                .title_alignment(Alignment::Center),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(card, area);
}

/// Card body: day total (when non-zero) then each activity's name, location and cost
fn create_day_lines(app: &AppState, date: NaiveDate) -> Vec<Line<'static>> {
    let activities = app.store.as_slice();
    let day_activities = activities_for_date(activities, date);
    let total = day_total(activities, date);
    let mut lines = Vec::new();

    if total > 0.0 {
        lines.push(Line::styled(format_money(total), money_style()).alignment(Alignment::Center));
    }

    if day_activities.is_empty() {
        lines.push(Line::styled("No activities", empty_style()).alignment(Alignment::Center));
        return lines;
    }

    for activity in day_activities {
        lines.push(Line::styled(activity.name.clone(), default_style()));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", activity.location().unwrap_or("")),
                detail_style(),
            ),
            Span::styled(format_money(activity.cost), money_style()),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::activity::{Draft, DraftField};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    #[test]
    fn test_empty_day() {
        let app = AppState::new(AppConfig::default());
        let lines = create_day_lines(&app, day(17));
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "No activities");
    }

    #[test]
    fn test_day_with_activities_shows_total() {
        let mut app = AppState::new(AppConfig::default());
        for (name, cost) in [("Snorkel", "50"), ("Lunch", "30.5")] {
            app.store
                .add(&Draft {
                    name: name.to_string(),
                    cost: cost.to_string(),
                    date: "2024-09-18".to_string(),
                    location: "Bavaro".to_string(),
                    ..Draft::default()
                })
                .unwrap();
        }

        let lines = create_day_lines(&app, day(18));
        assert_eq!(line_text(&lines[0]), "$80.50");
        assert_eq!(line_text(&lines[1]), "Snorkel");
        assert_eq!(line_text(&lines[2]), "  Bavaro $50.00");
        assert_eq!(line_text(&lines[3]), "Lunch");
    }

    #[test]
    fn test_free_day_hides_total() {
        let mut app = AppState::new(AppConfig::default());
        app.form.set_field(DraftField::Name, "Beach");
        app.form.set_field(DraftField::Cost, "0");
        app.form.set_field(DraftField::Date, "2024-09-20");
        app.submit_form();

        let lines = create_day_lines(&app, day(20));
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), "Beach");
    }
}

use crate::app::AppState;
use crate::domain::{format_day_label, format_money, Activity, UiMode};
use crate::ui::styles::{
    border_style, default_style, detail_style, empty_style, money_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub const EMPTY_MESSAGE: &str = "No activities planned yet. Add your first activity above!";

/// Render the list of planned activities
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" Activities ({}) ", app.store.len()),
            title_style(),
        ));

    if app.store.is_empty() {
        let empty = Paragraph::new(Line::styled(EMPTY_MESSAGE, empty_style()))
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let highlight = app.ui_mode == UiMode::Normal;
    let items: Vec<ListItem> = app
        .store
        .iter()
        .enumerate()
        .map(|(idx, activity)| {
            let style = if highlight && idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(create_activity_lines(activity)).style(style)
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    let list = List::new(items).block(block);

    f.render_stateful_widget(list, area, &mut state);
}

/// Lines for one activity
/// Format: Zip-lining
///           $85.00  ·  Thu, Sep 19  ·  Anfi del Mar
///           notes...
fn create_activity_lines(activity: &Activity) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        activity.name.clone(),
        title_style(),
    )));

    let mut details = vec![
        Span::raw("  "),
        Span::styled(format_money(activity.cost), money_style()),
    ];
    if let Some(date) = activity.date {
        details.push(Span::styled(
            format!("  ·  {}", format_day_label(date)),
            detail_style(),
        ));
    }
    if let Some(location) = activity.location() {
        details.push(Span::styled(format!("  ·  {}", location), detail_style()));
    }
    lines.push(Line::from(details));

    if let Some(notes) = activity.notes() {
        for note_line in notes.lines() {
            lines.push(Line::styled(format!("  {}", note_line), detail_style()));
        }
    }

    lines
}

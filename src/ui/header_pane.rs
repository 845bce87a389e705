use crate::app::AppState;
use crate::domain::{format_money, Tab};
use crate::ui::styles::{active_tab_style, border_style, hint_style, money_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Render the title bar with trip dates and the running total
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let line = Line::from(vec![
        Span::raw(format!("{} • Total Budget: ", app.trip.range_label())),
        Span::styled(format_money(app.total_cost()), money_style()),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(format!(" 🏝️ {} ", app.title), title_style())),
    );

    f.render_widget(header, area);
}

/// Render the Activities / Calendar switch
pub fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::raw(format!(" {} {} ", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(hint_style())
        .highlight_style(active_tab_style())
        .divider("│");

    f.render_widget(tabs, area);
}

use crate::app::AppState;
use crate::domain::format_money;
use crate::ui::styles::{border_style, money_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the cost summary. Draws nothing while no activity exists.
pub fn render_summary_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(average) = app.average_per_day() else {
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Total: "),
            Span::styled(format_money(app.total_cost()), money_style()),
        ]),
        Line::from(vec![
            Span::raw("Average per day: "),
            Span::styled(format_money(average), money_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Cost Summary ", title_style())),
    );

    f.render_widget(paragraph, area);
}

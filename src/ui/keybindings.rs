use crate::app::AppState;
use crate::domain::{Tab, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match (app.ui_mode, app.tab) {
        (UiMode::Form, _) => Line::from(vec![
            Span::raw(" type to edit   "),
            Span::raw("Tab/↑/↓ field   "),
            Span::raw("←/→ date   "),
            Span::raw("Enter add/save   "),
            Span::raw("Ctrl+E notes   "),
            Span::raw("Ctrl+X cancel   "),
            Span::raw("Esc leave form"),
        ]),
        (UiMode::Normal, Tab::Activities) => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("a add   "),
            Span::raw("e edit   "),
            Span::raw("x delete   "),
            Span::raw("c cancel   "),
            Span::raw("Tab/1/2 view   "),
            Span::raw("q quit"),
        ]),
        (UiMode::Normal, Tab::Calendar) => Line::from(vec![
            Span::raw(" ←/→ day   "),
            Span::raw("a add   "),
            Span::raw("Tab/1/2 view   "),
            Span::raw("q quit"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

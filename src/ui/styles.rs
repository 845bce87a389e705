use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Border of the pane that currently receives keystrokes
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Form field label style
pub fn label_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Focused form field value style
pub fn field_focus_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Money amounts
pub fn money_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Secondary details (date, location, notes)
pub fn detail_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Placeholder text for empty lists and days
pub fn empty_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Active tab in the tab bar
pub fn active_tab_style() -> Style {
    Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

use crate::app::AppState;
use crate::domain::{parse_date, DraftField, FormPhase, UiMode};
use crate::ui::styles::{
    border_style, default_style, field_focus_style, focused_border_style, hint_style, label_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width reserved for field labels
const LABEL_WIDTH: usize = 20;

/// Pane title for the current form phase
pub fn form_title(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Editing(_) => " Edit Activity ",
        FormPhase::Idle | FormPhase::Creating => " Add New Activity ",
    }
}

/// Render the add/edit activity form
pub fn render_form_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let form = &app.form;
    let active = app.ui_mode == UiMode::Form;
    let mut lines = Vec::new();

    for field in DraftField::ALL {
        let focused = active && form.focus == field;
        let value = form.draft.field(field);

        let mut spans = vec![
            Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), label_style()),
            Span::raw("> "),
        ];
        if focused {
            spans.push(Span::styled(value.to_string(), field_focus_style()));
            spans.push(Span::styled("█", field_focus_style())); // Cursor
            if field == DraftField::Date {
                spans.push(Span::styled("  ←/→ pick a trip day", hint_style()));
            }
        } else {
            spans.push(Span::styled(value.to_string(), default_style()));
        }
        if field == DraftField::Date {
            if let Some(date) = parse_date(value) {
                if !app.trip.contains(date) {
                    spans.push(Span::styled("  (outside trip dates)", hint_style()));
                }
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    let action = if form.is_editing() {
        "Enter save changes  ·  Ctrl+X cancel"
    } else {
        "Enter add activity  ·  Ctrl+X clear"
    };
    let hint = if active {
        format!("{}  ·  Tab next field  ·  Ctrl+E notes in $EDITOR  ·  Esc leave form", action)
    } else if form.draft.is_empty() {
        "a / i to fill in the form".to_string()
    } else {
        "a / i to continue the draft  ·  c discard it".to_string()
    };
    lines.push(Line::styled(hint, hint_style()));

    let block_border = if active {
        focused_border_style()
    } else {
        border_style()
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(block_border)
            .title(Span::styled(form_title(form.phase), title_style())),
    );

    f.render_widget(paragraph, area);
}

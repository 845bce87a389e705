pub mod calendar_pane;
pub mod form_pane;
pub mod header_pane;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;
pub mod summary_pane;

use crate::app::AppState;
use crate::domain::Tab;
use calendar_pane::render_calendar_pane;
use form_pane::render_form_pane;
use header_pane::{render_header, render_tabs};
use keybindings::render_keybindings;
use layout::{create_activities_layout, create_layout};
use list_pane::render_list_pane;
use ratatui::Frame;
use summary_pane::render_summary_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_header(f, app, layout.header_area);
    render_tabs(f, app, layout.tabs_area);
    render_keybindings(f, app, layout.keybindings_area);

    match app.tab {
        Tab::Activities => {
            let body = create_activities_layout(layout.body_area, !app.store.is_empty());
            render_form_pane(f, app, body.form_area);
            render_list_pane(f, app, body.list_area);
            if let Some(summary_area) = body.summary_area {
                render_summary_pane(f, app, summary_area);
            }
        }
        Tab::Calendar => render_calendar_pane(f, app, layout.body_area),
    }
}

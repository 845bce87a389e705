/// Top-level view selected in the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Activities,
    Calendar,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Activities => "Activities",
            Tab::Calendar => "Calendar",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Activities => 0,
            Tab::Calendar => 1,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Tab::Activities => Tab::Calendar,
            Tab::Calendar => Tab::Activities,
        }
    }

    pub fn all() -> &'static [Tab] {
        &[Tab::Activities, Tab::Calendar]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Browsing the list or calendar
    Normal,
    /// Keystrokes go into the activity form
    Form,
}

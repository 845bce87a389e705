pub mod handler;

pub use handler::{edit_notes_external, handle_key, is_external_edit_key};

//! Dialog components for TUI

mod base;
mod notice_dialog;
mod state_picker_dialog;

pub use notice_dialog::render_notice_dialog;
pub use state_picker_dialog::render_state_picker_dialog;

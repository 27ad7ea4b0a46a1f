//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_registration_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Overlays, topmost last
    if let Some(picker) = &app.state.state_picker {
        components::render_state_picker_dialog(frame, picker);
    }
    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::MockPostalLookup;
    use crate::state::{Address, Notice, StateCode};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::with_lookup(Arc::new(MockPostalLookup::new()), Duration::from_secs(1))
    }

    #[test]
    fn test_draws_form_labels() {
        let screen = render(&app());
        for label in ["Name", "E-mail", "Birth date", "Postal code", "Street", "City", "Register"] {
            assert!(screen.contains(label), "missing {label}");
        }
        assert!(screen.contains("State: Select"));
    }

    #[test]
    fn test_draws_filled_address() {
        let mut app = app();
        app.state.form.address = Address::new("Praça da Sé", "Sé", "São Paulo", "SP");
        let screen = render(&app);
        assert!(screen.contains("São Paulo"));
        assert!(screen.contains("State: SP"));
        assert!(screen.contains("address filled"));
    }

    #[test]
    fn test_manual_state_is_not_reported_as_filled() {
        let mut app = app();
        app.state.form.select_state(StateCode::Sp);
        let screen = render(&app);
        assert!(screen.contains("State: SP"));
        assert!(!screen.contains("address filled"));
        assert!(screen.contains("type an 8-digit postal code"));
    }

    #[test]
    fn test_draws_notice_on_top() {
        let mut app = app();
        app.state.push_notice(Notice::postal_code_not_found());
        let screen = render(&app);
        assert!(screen.contains("postal code not found."));
        assert!(screen.contains("to close"));
    }

    #[test]
    fn test_draws_state_picker() {
        let mut app = app();
        app.state.open_state_picker();
        let screen = render(&app);
        assert!(screen.contains("Select State"));
        assert!(screen.contains("Acre"));
    }
}

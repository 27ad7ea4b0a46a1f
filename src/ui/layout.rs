//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::AutofillPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Lookup status
    if let AutofillPhase::LookupInFlight(ticket) = app.state.autofill.phase() {
        spans.push(Span::styled(" ◌ ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!("looking up {}", ticket.postal_code),
            Style::default().fg(Color::Yellow),
        ));
    } else if app.state.form.address.has_locality() {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
        spans.push(Span::styled(
            "address filled",
            Style::default().fg(Color::Green),
        ));
    } else {
        spans.push(Span::styled(" ○ ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            "type an 8-digit postal code",
            Style::default().fg(Color::Gray),
        ));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        hints(app),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever currently has input
fn hints(app: &App) -> &'static str {
    if app.state.has_notices() {
        "Enter/Esc:close"
    } else if app.state.state_picker.is_some() {
        "↑↓:select  Enter:ok  Esc:cancel"
    } else if app.state.form.is_state_selector_active() {
        "Enter:choose state  Tab:next"
    } else {
        "Tab/↓:next  S-Tab/↑:prev"
    }
}

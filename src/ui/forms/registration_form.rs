//! Registration form rendering

use super::field_renderer::{draw_field, draw_help_text, draw_readonly_field, draw_selector};
use crate::app::App;
use crate::state::{
    BIRTH_DATE_FIELD, COMPLEMENT_FIELD, EMAIL_FIELD, NAME_FIELD, NUMBER_FIELD, POSTAL_CODE_FIELD,
    STATE_SELECTOR, SUBMIT_BUTTON,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

fn row(area: Rect, constraints: &[Constraint]) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints.to_vec())
        .split(area)
}

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let active = form.active_field_index;
    let loading = app.state.is_lookup_in_flight();

    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // E-mail, birth date
            Constraint::Length(FIELD_HEIGHT),  // Postal code, street
            Constraint::Length(FIELD_HEIGHT),  // District, city
            Constraint::Length(FIELD_HEIGHT),  // Number, complement, state
            Constraint::Length(BUTTON_HEIGHT), // Register
            Constraint::Min(0),
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    draw_field(frame, rows[0], &form.name, active == NAME_FIELD);

    let contact = row(rows[1], &[Constraint::Percentage(65), Constraint::Percentage(35)]);
    draw_field(frame, contact[0], &form.email, active == EMAIL_FIELD);
    draw_field(frame, contact[1], &form.birth_date, active == BIRTH_DATE_FIELD);

    let postal = row(rows[2], &[Constraint::Length(16), Constraint::Min(0)]);
    draw_field(frame, postal[0], &form.postal_code, active == POSTAL_CODE_FIELD);
    draw_readonly_field(frame, postal[1], "Street", &form.address.street, loading);

    let locality = row(rows[3], &[Constraint::Percentage(50), Constraint::Percentage(50)]);
    draw_readonly_field(frame, locality[0], "District", &form.address.district, loading);
    draw_readonly_field(frame, locality[1], "City", &form.address.city, loading);

    let details = row(
        rows[4],
        &[
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(36),
        ],
    );
    draw_field(frame, details[0], &form.number, active == NUMBER_FIELD);
    draw_field(frame, details[1], &form.complement, active == COMPLEMENT_FIELD);
    draw_selector(
        frame,
        details[2],
        &form.state_label(),
        active == STATE_SELECTOR,
    );

    let button = row(
        rows[5],
        &[
            Constraint::Min(0),
            Constraint::Length(16),
            Constraint::Min(0),
        ],
    );
    render_button(frame, button[1], "Register", active == SUBMIT_BUTTON);

    draw_help_text(
        frame,
        rows[7],
        &[
            ("Tab", "next field"),
            ("Enter", "choose / register"),
            (crate::platform::SUBMIT_SHORTCUT, "register"),
        ],
    );
}

//! State picker dialog - scrolling list of federative units

use super::base::centered_rect;
use crate::state::{StateCode, StatePicker};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rows of the list shown at once
const VISIBLE_ROWS: usize = 12;

/// First visible row so that `selected` stays on screen
fn scroll_start(selected: usize, total: usize, visible: usize) -> usize {
    if total <= visible {
        return 0;
    }
    selected
        .saturating_sub(visible / 2)
        .min(total - visible)
}

/// Render the state picker overlay
pub fn render_state_picker_dialog(frame: &mut Frame, picker: &StatePicker) {
    let dialog_area = centered_rect(frame.area(), 40, VISIBLE_ROWS as u16 + 7);
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            "Select State",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let total = StateCode::ALL.len();
    let start = scroll_start(picker.selected_index, total, VISIBLE_ROWS);

    for (idx, state) in StateCode::ALL
        .iter()
        .enumerate()
        .skip(start)
        .take(VISIBLE_ROWS)
    {
        let is_selected = idx == picker.selected_index;
        let prefix = if is_selected { " ▸ " } else { "   " };
        let style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        content.push(Line::from(vec![
            Span::styled(format!("{prefix}{} ", state.code()), style),
            Span::styled(state.name(), Style::default().fg(Color::DarkGray)),
        ]));
    }

    if total > VISIBLE_ROWS {
        content.push(Line::from(Span::styled(
            format!("   ({}/{})", picker.selected_index + 1, total),
            Style::default().fg(Color::DarkGray),
        )));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("A-Z", Style::default().fg(Color::Cyan)),
        Span::styled(" jump  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" ok  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::new().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}

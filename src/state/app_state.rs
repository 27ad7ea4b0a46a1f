//! Application state definitions

use super::autofill::AutofillController;
use super::forms::RegistrationForm;
use super::notice::Notice;
use super::region::StateCode;
use std::collections::VecDeque;

/// State picker overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePicker {
    /// Index into [`StateCode::ALL`]
    pub selected_index: usize,
}

impl StatePicker {
    /// Open the picker with `current` highlighted, or the first entry
    pub fn new(current: Option<StateCode>) -> Self {
        Self {
            selected_index: current.map(|c| c.index()).unwrap_or(0),
        }
    }

    pub fn selected(&self) -> StateCode {
        StateCode::ALL[self.selected_index.min(StateCode::ALL.len() - 1)]
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < StateCode::ALL.len() {
            self.selected_index += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Jump to the first code starting with `letter`, cycling through
    /// matches on repeated presses
    pub fn jump_to_letter(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        let count = StateCode::ALL.len();
        let next = (1..=count)
            .map(|offset| (self.selected_index + offset) % count)
            .find(|&i| StateCode::ALL[i].code().starts_with(letter));
        if let Some(i) = next {
            self.selected_index = i;
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    pub autofill: AutofillController,
    /// Notices waiting to be dismissed, front is shown
    pub notices: VecDeque<Notice>,
    pub state_picker: Option<StatePicker>,
}

impl AppState {
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    pub fn open_state_picker(&mut self) {
        self.state_picker = Some(StatePicker::new(self.form.selected_state()));
    }

    pub fn close_state_picker(&mut self) {
        self.state_picker = None;
    }

    /// Set the state from the picker's highlight and close it
    pub fn confirm_state_picker(&mut self) {
        if let Some(picker) = self.state_picker.take() {
            self.form.select_state(picker.selected());
        }
    }

    pub fn is_lookup_in_flight(&self) -> bool {
        self.autofill.is_lookup_in_flight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_are_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_notices());
        state.push_notice(Notice::error("first"));
        state.push_notice(Notice::info("second"));
        assert_eq!(state.current_notice().unwrap().message, "first");
        state.dismiss_notice();
        assert_eq!(state.current_notice().unwrap().message, "second");
        state.dismiss_notice();
        assert!(!state.has_notices());
    }

    #[test]
    fn test_dismiss_on_empty_is_noop() {
        let mut state = AppState::default();
        state.dismiss_notice();
        assert!(state.current_notice().is_none());
    }

    #[test]
    fn test_picker_opens_on_current_state() {
        let mut state = AppState::default();
        state.form.select_state(StateCode::Mg);
        state.open_state_picker();
        assert_eq!(state.state_picker.as_ref().unwrap().selected(), StateCode::Mg);
    }

    #[test]
    fn test_picker_opens_on_first_without_state() {
        let mut state = AppState::default();
        state.open_state_picker();
        assert_eq!(state.state_picker.as_ref().unwrap().selected(), StateCode::Ac);
    }

    #[test]
    fn test_confirm_sets_state_and_closes() {
        let mut state = AppState::default();
        state.open_state_picker();
        if let Some(picker) = state.state_picker.as_mut() {
            picker.move_down();
            picker.move_down();
        }
        state.confirm_state_picker();
        assert!(state.state_picker.is_none());
        assert_eq!(state.form.address.state_code, "AP");
    }

    #[test]
    fn test_close_leaves_state_untouched() {
        let mut state = AppState::default();
        state.form.select_state(StateCode::Ba);
        state.open_state_picker();
        if let Some(picker) = state.state_picker.as_mut() {
            picker.move_down();
        }
        state.close_state_picker();
        assert_eq!(state.form.address.state_code, "BA");
    }

    #[test]
    fn test_picker_movement_is_bounded() {
        let mut picker = StatePicker::new(None);
        picker.move_up();
        assert_eq!(picker.selected(), StateCode::Ac);
        for _ in 0..100 {
            picker.move_down();
        }
        assert_eq!(picker.selected(), StateCode::To);
    }

    #[test]
    fn test_jump_to_letter_cycles_matches() {
        let mut picker = StatePicker::new(None);
        picker.jump_to_letter('s');
        assert_eq!(picker.selected(), StateCode::Sc);
        picker.jump_to_letter('S');
        assert_eq!(picker.selected(), StateCode::Sp);
        picker.jump_to_letter('s');
        assert_eq!(picker.selected(), StateCode::Se);
        picker.jump_to_letter('s');
        assert_eq!(picker.selected(), StateCode::Sc);
    }

    #[test]
    fn test_jump_to_unknown_letter_stays() {
        let mut picker = StatePicker::new(Some(StateCode::Rj));
        picker.jump_to_letter('z');
        assert_eq!(picker.selected(), StateCode::Rj);
    }
}

//! Registration form state

use super::field::FormField;
use crate::state::address::{Address, POSTAL_CODE_LEN};
use crate::state::region::StateCode;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Focus indices. Street, district and city are filled by the lookup and
/// never receive focus.
pub const NAME_FIELD: usize = 0;
pub const EMAIL_FIELD: usize = 1;
pub const BIRTH_DATE_FIELD: usize = 2;
pub const POSTAL_CODE_FIELD: usize = 3;
pub const NUMBER_FIELD: usize = 4;
pub const COMPLEMENT_FIELD: usize = 5;
pub const STATE_SELECTOR: usize = 6;
pub const SUBMIT_BUTTON: usize = 7;

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: FormField,
    pub email: FormField,
    pub birth_date: FormField,
    pub postal_code: FormField,
    pub number: FormField,
    pub complement: FormField,
    /// Filled by postal code lookup; `state_code` is also set by the picker
    pub address: Address,
    pub active_field_index: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("Name"),
            email: FormField::text("E-mail"),
            birth_date: FormField::date("Birth date"),
            postal_code: FormField::digits("Postal code", Some(POSTAL_CODE_LEN)),
            number: FormField::digits("Number", None),
            complement: FormField::text("Complement"),
            address: Address::default(),
            active_field_index: NAME_FIELD,
        }
    }

    pub fn is_postal_code_active(&self) -> bool {
        self.active_field_index == POSTAL_CODE_FIELD
    }

    pub fn is_state_selector_active(&self) -> bool {
        self.active_field_index == STATE_SELECTOR
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON
    }

    /// Currently selected state, if it is a known code
    pub fn selected_state(&self) -> Option<StateCode> {
        self.address.state_code.parse().ok()
    }

    pub fn select_state(&mut self, state: StateCode) {
        self.address.state_code = state.code().to_string();
    }

    /// Label for the state selector, e.g. `State: SP` or `State: Select`
    pub fn state_label(&self) -> String {
        if self.address.state_code.is_empty() {
            "State: Select".to_string()
        } else {
            format!("State: {}", self.address.state_code)
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        8 // six text fields, state selector, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            NAME_FIELD => Some(&mut self.name),
            EMAIL_FIELD => Some(&mut self.email),
            BIRTH_DATE_FIELD => Some(&mut self.birth_date),
            POSTAL_CODE_FIELD => Some(&mut self.postal_code),
            NUMBER_FIELD => Some(&mut self.number),
            COMPLEMENT_FIELD => Some(&mut self.complement),
            _ => None,
        }
    }
}

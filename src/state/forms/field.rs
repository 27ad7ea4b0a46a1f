//! Form field value objects

use chrono::NaiveDate;

/// Date format used by the birth date field
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Input rule applied to keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMask {
    /// Any printable character
    #[default]
    Free,
    /// Decimal digits only, optionally capped
    Digits { max_len: Option<usize> },
    /// `DD/MM/YYYY`, slashes inserted automatically
    Date,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub mask: InputMask,
    pub placeholder: Option<String>,
}

impl FormField {
    /// Create a new free text field
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            mask: InputMask::Free,
            placeholder: None,
        }
    }

    /// Create a digits-only field
    pub fn digits(label: &str, max_len: Option<usize>) -> Self {
        Self {
            mask: InputMask::Digits { max_len },
            ..Self::text(label)
        }
    }

    /// Create a `DD/MM/YYYY` date field
    pub fn date(label: &str) -> Self {
        Self {
            mask: InputMask::Date,
            placeholder: Some("DD/MM/YYYY".to_string()),
            ..Self::text(label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character, subject to the field's mask.
    ///
    /// Returns true when the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        match self.mask {
            InputMask::Free => {
                if c.is_control() {
                    return false;
                }
                self.value.push(c);
                true
            }
            InputMask::Digits { max_len } => {
                if !c.is_ascii_digit() || max_len.is_some_and(|max| self.value.len() >= max) {
                    return false;
                }
                self.value.push(c);
                true
            }
            InputMask::Date => {
                if !c.is_ascii_digit() || self.value.len() >= 10 {
                    return false;
                }
                if matches!(self.value.len(), 2 | 5) {
                    self.value.push('/');
                }
                self.value.push(c);
                true
            }
        }
    }

    /// Remove the last character. Returns true when the value changed.
    pub fn pop_char(&mut self) -> bool {
        let removed = self.value.pop().is_some();
        if self.mask == InputMask::Date && self.value.ends_with('/') {
            self.value.pop();
        }
        removed
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Parse the value as a date. Only meaningful for date fields.
    pub fn as_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.value, DATE_FORMAT).ok()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(field: &mut FormField, input: &str) {
        for c in input.chars() {
            field.push_char(c);
        }
    }

    #[test]
    fn test_free_text_accepts_anything_printable() {
        let mut field = FormField::text("Name");
        type_into(&mut field, "Ana Luísa 2");
        assert_eq!(field.as_text(), "Ana Luísa 2");
        assert!(!field.push_char('\n'));
    }

    #[test]
    fn test_digits_rejects_letters() {
        let mut field = FormField::digits("Number", None);
        type_into(&mut field, "12a3-4");
        assert_eq!(field.as_text(), "1234");
    }

    #[test]
    fn test_digits_respects_max_len() {
        let mut field = FormField::digits("Postal code", Some(8));
        type_into(&mut field, "0100100099");
        assert_eq!(field.as_text(), "01001000");
        assert!(!field.push_char('1'));
    }

    #[test]
    fn test_date_inserts_slashes() {
        let mut field = FormField::date("Birth date");
        type_into(&mut field, "31121990");
        assert_eq!(field.as_text(), "31/12/1990");
        assert!(!field.push_char('1'));
    }

    #[test]
    fn test_date_backspace_removes_trailing_slash() {
        let mut field = FormField::date("Birth date");
        type_into(&mut field, "311");
        assert_eq!(field.as_text(), "31/1");
        field.pop_char();
        assert_eq!(field.as_text(), "31");
    }

    #[test]
    fn test_as_date() {
        let mut field = FormField::date("Birth date");
        type_into(&mut field, "29021992");
        assert_eq!(field.as_date(), NaiveDate::from_ymd_opt(1992, 2, 29));

        field.clear();
        type_into(&mut field, "29021993");
        assert!(field.as_date().is_none());
    }

    #[test]
    fn test_pop_on_empty_reports_no_change() {
        let mut field = FormField::text("Name");
        assert!(!field.pop_char());
    }
}

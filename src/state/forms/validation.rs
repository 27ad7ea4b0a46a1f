//! Submission checks for the registration form

use super::form_state::RegistrationForm;
use crate::state::address::is_complete_postal_code;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,
    #[error("E-mail is not valid")]
    InvalidEmail,
    #[error("Birth date must be a valid DD/MM/YYYY date")]
    InvalidBirthDate,
    #[error("Birth date cannot be in the future")]
    BirthDateInFuture,
    #[error("Postal code must have 8 digits")]
    IncompletePostalCode,
    #[error("State must be selected")]
    MissingState,
}

/// Check every field, collecting all failures.
pub fn validate(form: &RegistrationForm, today: NaiveDate) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if form.name.as_text().trim().is_empty() {
        errors.push(ValidationError::MissingName);
    }
    if !is_valid_email(form.email.as_text()) {
        errors.push(ValidationError::InvalidEmail);
    }
    match form.birth_date.as_date() {
        None => errors.push(ValidationError::InvalidBirthDate),
        Some(date) if date > today => errors.push(ValidationError::BirthDateInFuture),
        Some(_) => {}
    }
    if !is_complete_postal_code(form.postal_code.as_text()) {
        errors.push(ValidationError::IncompletePostalCode);
    }
    if form.selected_state().is_none() {
        errors.push(ValidationError::MissingState);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Loose `local@domain.tld` shape check
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Render failures as one notice message, one per line
pub fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("- {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::region::StateCode;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn fill(field: &mut crate::state::FormField, input: &str) {
        for c in input.chars() {
            field.push_char(c);
        }
    }

    fn valid_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        fill(&mut form.name, "Maria Silva");
        fill(&mut form.email, "maria@example.com");
        fill(&mut form.birth_date, "15081990");
        fill(&mut form.postal_code, "01001000");
        form.select_state(StateCode::Sp);
        form
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate(&valid_form(), today()), Ok(()));
    }

    #[test]
    fn test_empty_form_reports_everything() {
        let errors = validate(&RegistrationForm::new(), today()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingName,
                ValidationError::InvalidEmail,
                ValidationError::InvalidBirthDate,
                ValidationError::IncompletePostalCode,
                ValidationError::MissingState,
            ]
        );
    }

    #[test]
    fn test_future_birth_date() {
        let mut form = valid_form();
        form.birth_date.clear();
        fill(&mut form.birth_date, "02062024");
        assert_eq!(
            validate(&form, today()),
            Err(vec![ValidationError::BirthDateInFuture])
        );
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let mut form = valid_form();
        form.name.clear();
        fill(&mut form.name, "   ");
        assert_eq!(
            validate(&form, today()),
            Err(vec![ValidationError::MissingName])
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.com.br"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("a@example"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@example."));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_describe_lists_one_per_line() {
        let message = describe(&[ValidationError::MissingName, ValidationError::MissingState]);
        assert_eq!(message, "- Name is required\n- State must be selected");
    }
}

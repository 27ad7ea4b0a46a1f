//! User-facing notices shown in a modal dialog

/// Message shown when the lookup service does not know a postal code
pub const POSTAL_CODE_NOT_FOUND: &str = "postal code not found.";

/// Message shown when the lookup service could not be reached or parsed
pub const POSTAL_CODE_LOOKUP_FAILED: &str = "error looking up postal code.";

/// Message shown after a successful submission
pub const REGISTRATION_COMPLETE: &str = "Registration complete!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn postal_code_not_found() -> Self {
        Self::error(POSTAL_CODE_NOT_FOUND)
    }

    pub fn postal_code_lookup_failed() -> Self {
        Self::error(POSTAL_CODE_LOOKUP_FAILED)
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Info => "Done",
            NoticeKind::Error => "Error",
        }
    }
}

//! Address record and postal code lookup outcomes

/// Number of digits in a complete postal code
pub const POSTAL_CODE_LEN: usize = 8;

/// Returns true when `code` holds exactly eight decimal digits
pub fn is_complete_postal_code(code: &str) -> bool {
    code.len() == POSTAL_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
}

/// Address filled in from a postal code lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub district: String,
    pub city: String,
    pub state_code: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        district: impl Into<String>,
        city: impl Into<String>,
        state_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            district: district.into(),
            city: city.into(),
            state_code: state_code.into(),
        }
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when the lookup filled street, district or city. The state code
    /// alone may come from the picker.
    pub fn has_locality(&self) -> bool {
        !(self.street.is_empty() && self.district.is_empty() && self.city.is_empty())
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.district.is_empty()
            && self.city.is_empty()
            && self.state_code.is_empty()
    }
}

/// Result of resolving a postal code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Address),
    NotFound,
    /// Network, HTTP, decode or timeout failure. Carries a detail for logs.
    TransportError(String),
}

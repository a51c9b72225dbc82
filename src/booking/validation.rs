use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;

use super::controller::BookingFields;

// Deliberately loose: anything@anything.anything, no RFC compliance.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
    MissingField,
    InvalidEmail,
    InvalidMobile,
}

impl ValidationError {
    pub const fn message(self) -> &'static str {
        match self {
            ValidationError::MissingField => "Please fill in all fields",
            ValidationError::InvalidEmail => "Please enter a valid email address",
            ValidationError::InvalidMobile => "Please enter a valid 10-digit mobile number",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Checks run in a fixed order and report only the first failure.
pub fn validate(fields: &BookingFields) -> Result<(), ValidationError> {
    if fields.name.is_empty()
        || fields.email.is_empty()
        || fields.mobile.is_empty()
        || fields.time.is_empty()
    {
        return Err(ValidationError::MissingField);
    }

    if !EMAIL_PATTERN.is_match(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }

    let digits = fields.mobile.chars().filter(char::is_ascii_digit).count();
    if digits != 10 {
        return Err(ValidationError::InvalidMobile);
    }

    Ok(())
}

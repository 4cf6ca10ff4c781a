//! Field validators shared by both client tiers.
//!
//! # Responsibility
//! - Normalize raw field input (trim, blank optional -> `None`).
//! - Reject values that break a field invariant with `InvalidArgument`.
//!
//! # Invariants
//! - Validators are pure: no instance state, no side effects.
//! - Blank optional strings normalize to `None` and never fail.
//! - String lengths are counted in `char`s, not bytes.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum length of surname and given name after trimming.
pub const MIN_NAME_CHARS: usize = 2;

/// Every input a validator can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Surname,
    GivenName,
    Patronymic,
    Phone,
    Email,
    RegistrationDate,
    /// Free-form "surname given-name [patronymic]" text.
    FullName,
}

impl Field {
    /// Key used by the structured (JSON) form.
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Surname => "surname",
            Self::GivenName => "givenName",
            Self::Patronymic => "patronymic",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::RegistrationDate => "registrationDate",
            Self::FullName => "fullName",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    NotPositive(i64),
    /// Integer too large for an `i64` id.
    OutOfRange,
    Blank,
    TooShort { min: usize, actual: usize },
    MissingAt,
    MissingDomainDot,
    MissingKey,
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    TooFewNameParts { found: usize },
}

impl Reason {
    /// Stable snake_case code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotPositive(_) => "not_positive",
            Self::OutOfRange => "out_of_range",
            Self::Blank => "blank",
            Self::TooShort { .. } => "too_short",
            Self::MissingAt => "missing_at",
            Self::MissingDomainDot => "missing_domain_dot",
            Self::MissingKey => "missing_key",
            Self::WrongType { .. } => "wrong_type",
            Self::TooFewNameParts { .. } => "too_few_name_parts",
        }
    }
}

impl Display for Reason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPositive(value) => write!(f, "must be a positive integer, got {value}"),
            Self::OutOfRange => write!(f, "must not exceed {}", i64::MAX),
            Self::Blank => write!(f, "must not be empty or whitespace"),
            Self::TooShort { min, actual } => {
                write!(f, "must contain at least {min} characters, got {actual}")
            }
            Self::MissingAt => write!(f, "must contain `@`"),
            Self::MissingDomainDot => write!(f, "domain after the last `@` must contain `.`"),
            Self::MissingKey => write!(f, "is required but missing"),
            Self::WrongType { expected, found } => write!(f, "expected {expected}, found {found}"),
            Self::TooFewNameParts { found } => write!(
                f,
                "must contain at least surname and given name, got {found} part(s)"
            ),
        }
    }
}

/// Validation failure for one field. The only error raised while building a
/// client from in-memory values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    pub field: Field,
    pub reason: Reason,
}

impl InvalidArgument {
    pub fn new(field: Field, reason: Reason) -> Self {
        Self { field, reason }
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}`: {}", self.field, self.reason)
    }
}

impl Error for InvalidArgument {}

/// Accepts strictly positive ids.
pub fn validate_positive_int(value: i64, field: Field) -> Result<i64, InvalidArgument> {
    if value <= 0 {
        return Err(InvalidArgument::new(field, Reason::NotPositive(value)));
    }
    Ok(value)
}

/// Returns the trimmed value when it is non-blank and at least `min_chars`
/// characters long.
pub fn validate_required_string(
    value: &str,
    field: Field,
    min_chars: usize,
) -> Result<String, InvalidArgument> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InvalidArgument::new(field, Reason::Blank));
    }
    let actual = trimmed.chars().count();
    if actual < min_chars {
        return Err(InvalidArgument::new(
            field,
            Reason::TooShort {
                min: min_chars,
                actual,
            },
        ));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional value; blank input becomes `None`.
pub fn validate_optional_string(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}

/// Normalizes like [`validate_optional_string`], then requires `@` and a `.`
/// somewhere after the last `@`.
pub fn validate_email(value: Option<&str>) -> Result<Option<String>, InvalidArgument> {
    let Some(email) = validate_optional_string(value) else {
        return Ok(None);
    };
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Err(InvalidArgument::new(Field::Email, Reason::MissingAt));
    };
    if !domain.contains('.') {
        return Err(InvalidArgument::new(Field::Email, Reason::MissingDomainDot));
    }
    Ok(Some(email))
}

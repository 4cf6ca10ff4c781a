//! Identity tier of a salon client.
//!
//! # Responsibility
//! - Hold id and name fields behind read-only accessors.
//! - Derive name formatting (initials, full name) from stored state.
//!
//! # Invariants
//! - `id > 0`; surname and given name are trimmed and at least
//!   `MIN_NAME_CHARS` characters long.
//! - `patronymic` is either `None` or a trimmed non-blank string.
//! - A `ShortClient` only exists fully validated; there are no setters.

use crate::model::client::Client;
use crate::model::validate::{
    validate_optional_string, validate_positive_int, validate_required_string, Field,
    InvalidArgument, Reason, MIN_NAME_CHARS,
};
use std::fmt::{Display, Formatter};

/// Id used by factories when the caller has no id of its own.
pub const DEFAULT_CLIENT_ID: i64 = 1;

/// Id and name of a client, without contact data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortClient {
    id: i64,
    surname: String,
    given_name: String,
    patronymic: Option<String>,
}

impl ShortClient {
    /// Validates and normalizes identity fields.
    ///
    /// Fields are checked in the order id, surname, given name, patronymic;
    /// the first failure is returned.
    pub fn new(
        id: i64,
        surname: &str,
        given_name: &str,
        patronymic: Option<&str>,
    ) -> Result<Self, InvalidArgument> {
        let id = validate_positive_int(id, Field::Id)?;
        let surname = validate_required_string(surname, Field::Surname, MIN_NAME_CHARS)?;
        let given_name = validate_required_string(given_name, Field::GivenName, MIN_NAME_CHARS)?;
        let patronymic = validate_optional_string(patronymic);

        Ok(Self {
            id,
            surname,
            given_name,
            patronymic,
        })
    }

    /// Parses `"<surname> <given name> [<patronymic>]"`.
    ///
    /// Tokens past the third are ignored.
    pub fn from_full_name(text: &str, id: i64) -> Result<Self, InvalidArgument> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        match parts.as_slice() {
            [] => Err(InvalidArgument::new(Field::FullName, Reason::Blank)),
            [surname, given_name, rest @ ..] => {
                Self::new(id, surname, given_name, rest.first().copied())
            }
            [_] => Err(InvalidArgument::new(
                Field::FullName,
                Reason::TooFewNameParts { found: 1 },
            )),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn patronymic(&self) -> Option<&str> {
        self.patronymic.as_deref()
    }

    /// `"И.И."`, or `"И."` without a patronymic.
    pub fn initials(&self) -> String {
        let mut initials = String::new();
        for part in std::iter::once(self.given_name.as_str()).chain(self.patronymic()) {
            if let Some(first) = part.chars().next() {
                initials.push(first);
                initials.push('.');
            }
        }
        initials
    }

    /// `"Иванов И.И."`
    pub fn full_name_with_initials(&self) -> String {
        format!("{} {}", self.surname, self.initials())
    }

    /// `"Иванов Иван Иванович"`, or `"Иванов Иван"` without a patronymic.
    pub fn full_name(&self) -> String {
        match self.patronymic() {
            Some(patronymic) => format!("{} {} {}", self.surname, self.given_name, patronymic),
            None => format!("{} {}", self.surname, self.given_name),
        }
    }
}

impl Display for ShortClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_name_with_initials())
    }
}

impl From<&Client> for ShortClient {
    fn from(client: &Client) -> Self {
        client.identity().clone()
    }
}

/// Read access to the identity tier of any client shape.
///
/// This is the only `identity()` accessor; `Client` has no inherent
/// counterpart, so callers import the trait.
pub trait ClientIdentity {
    fn identity(&self) -> &ShortClient;
}

impl ClientIdentity for ShortClient {
    fn identity(&self) -> &ShortClient {
        self
    }
}

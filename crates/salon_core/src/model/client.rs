//! Full client record: identity plus contact data.
//!
//! # Responsibility
//! - Compose `ShortClient` with validated `ContactInfo`.
//! - Own the structured/JSON serialization contract and the factories that
//!   build clients from other input shapes.
//!
//! # Invariants
//! - Identity is validated before contact data; any failure aborts
//!   construction and no `Client` is produced.
//! - Every factory ends in `Client::new`, so all validators always run.
//! - The structured form always carries all seven keys; absent optional
//!   fields are `null`, never omitted.

use crate::model::short_client::{ClientIdentity, ShortClient};
use crate::model::validate::{
    validate_email, validate_optional_string, Field, InvalidArgument, Reason,
};
use log::debug;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Placeholder rendered for absent optional fields.
pub const NOT_SPECIFIED: &str = "не указано";

/// Structured representation of a client, keyed by `Field::key()`.
pub type ClientMap = Map<String, Value>;

/// Optional contact data owned by a `Client`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContactInfo {
    phone: Option<String>,
    email: Option<String>,
    registration_date: Option<String>,
}

impl ContactInfo {
    /// Validates phone, email and registration date, in that order.
    pub fn new(
        phone: Option<&str>,
        email: Option<&str>,
        registration_date: Option<&str>,
    ) -> Result<Self, InvalidArgument> {
        let phone = validate_optional_string(phone);
        let email = validate_email(email)?;
        let registration_date = validate_optional_string(registration_date);

        Ok(Self {
            phone,
            email,
            registration_date,
        })
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn registration_date(&self) -> Option<&str> {
        self.registration_date.as_deref()
    }
}

/// Salon client with identity and contact data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Client {
    identity: ShortClient,
    contact: ContactInfo,
}

impl Client {
    /// Validates every field and builds a client.
    ///
    /// # Errors
    /// - Returns the first `InvalidArgument` in the order id, surname, given
    ///   name, patronymic, phone, email, registration date.
    pub fn new(
        id: i64,
        surname: &str,
        given_name: &str,
        patronymic: Option<&str>,
        phone: Option<&str>,
        email: Option<&str>,
        registration_date: Option<&str>,
    ) -> Result<Self, InvalidArgument> {
        ShortClient::new(id, surname, given_name, patronymic)
            .and_then(|identity| {
                let contact = ContactInfo::new(phone, email, registration_date)?;
                Ok(Self::from_parts(identity, contact))
            })
            .map_err(|err| log_rejected(err, "fields"))
    }

    /// Assembles a client from already validated parts.
    pub fn from_parts(identity: ShortClient, contact: ContactInfo) -> Self {
        Self { identity, contact }
    }

    /// Parses `"<surname> <given name> [<patronymic>]"` into a client with no
    /// contact data.
    pub fn from_full_name(text: &str, id: i64) -> Result<Self, InvalidArgument> {
        let identity =
            ShortClient::from_full_name(text, id).map_err(|err| log_rejected(err, "full_name"))?;
        Self::new(
            identity.id(),
            identity.surname(),
            identity.given_name(),
            identity.patronymic(),
            None,
            None,
            None,
        )
    }

    /// Builds a client that only has a name and a phone number.
    pub fn from_name_and_phone(
        surname: &str,
        given_name: &str,
        phone: &str,
        id: i64,
    ) -> Result<Self, InvalidArgument> {
        Self::new(id, surname, given_name, None, Some(phone), None, None)
    }

    /// Builds a client from its structured form.
    ///
    /// `id`, `surname` and `givenName` are required; the other keys may be
    /// missing or `null`. Unknown keys are ignored.
    pub fn from_structured(map: &ClientMap) -> Result<Self, InvalidArgument> {
        let read = || -> Result<_, InvalidArgument> {
            Ok((
                required_int(map, Field::Id)?,
                required_str(map, Field::Surname)?,
                required_str(map, Field::GivenName)?,
                optional_str(map, Field::Patronymic)?,
                optional_str(map, Field::Phone)?,
                optional_str(map, Field::Email)?,
                optional_str(map, Field::RegistrationDate)?,
            ))
        };
        let (id, surname, given_name, patronymic, phone, email, registration_date) =
            read().map_err(|err| log_rejected(err, "structured"))?;

        Self::new(
            id,
            surname,
            given_name,
            patronymic,
            phone,
            email,
            registration_date,
        )
    }

    /// Parses JSON text and builds a client from the resulting object.
    ///
    /// # Errors
    /// - `ClientError::Deserialization` when the text is not a JSON object.
    /// - `ClientError::InvalidArgument` when a field fails validation.
    pub fn from_json(text: &str) -> Result<Self, ClientError> {
        let value: Value = serde_json::from_str(text).map_err(|err| {
            debug!(
                "event=client_decode module=model status=error error_code=json_syntax line={} column={}",
                err.line(),
                err.column()
            );
            DeserializationError::Syntax(err)
        })?;
        match value {
            Value::Object(map) => Ok(Self::from_structured(&map)?),
            other => Err(DeserializationError::NotAnObject {
                found: json_kind(&other),
            }
            .into()),
        }
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn id(&self) -> i64 {
        self.identity.id()
    }

    pub fn surname(&self) -> &str {
        self.identity.surname()
    }

    pub fn given_name(&self) -> &str {
        self.identity.given_name()
    }

    pub fn patronymic(&self) -> Option<&str> {
        self.identity.patronymic()
    }

    pub fn phone(&self) -> Option<&str> {
        self.contact.phone()
    }

    pub fn email(&self) -> Option<&str> {
        self.contact.email()
    }

    pub fn registration_date(&self) -> Option<&str> {
        self.contact.registration_date()
    }

    pub fn initials(&self) -> String {
        self.identity.initials()
    }

    pub fn full_name(&self) -> String {
        self.identity.full_name()
    }

    pub fn full_name_with_initials(&self) -> String {
        self.identity.full_name_with_initials()
    }

    /// `"Иванов Иван Иванович (ID: 1)"`
    pub fn short_info(&self) -> String {
        format!("{} (ID: {})", self.full_name(), self.id())
    }

    /// One line per field; absent optional fields show [`NOT_SPECIFIED`].
    pub fn full_info(&self) -> String {
        let or_placeholder = |value: Option<&str>| value.unwrap_or(NOT_SPECIFIED).to_string();
        [
            ("ID", self.id().to_string()),
            ("Фамилия", self.surname().to_string()),
            ("Имя", self.given_name().to_string()),
            ("Отчество", or_placeholder(self.patronymic())),
            ("Телефон", or_placeholder(self.phone())),
            ("Email", or_placeholder(self.email())),
            ("Дата регистрации", or_placeholder(self.registration_date())),
        ]
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
    }

    /// Ordered mapping of all seven fields.
    pub fn to_structured(&self) -> ClientMap {
        let optional = |value: Option<&str>| value.map_or(Value::Null, Value::from);
        let mut map = Map::new();
        map.insert(Field::Id.key().to_string(), Value::from(self.id()));
        map.insert(Field::Surname.key().to_string(), Value::from(self.surname()));
        map.insert(
            Field::GivenName.key().to_string(),
            Value::from(self.given_name()),
        );
        map.insert(
            Field::Patronymic.key().to_string(),
            optional(self.patronymic()),
        );
        map.insert(Field::Phone.key().to_string(), optional(self.phone()));
        map.insert(Field::Email.key().to_string(), optional(self.email()));
        map.insert(
            Field::RegistrationDate.key().to_string(),
            optional(self.registration_date()),
        );
        map
    }

    /// Compact JSON text of [`Client::to_structured`].
    pub fn to_json(&self) -> String {
        Value::Object(self.to_structured()).to_string()
    }

    /// Indented JSON text of [`Client::to_structured`].
    pub fn to_json_pretty(&self) -> String {
        format!("{:#}", Value::Object(self.to_structured()))
    }
}

impl ClientIdentity for Client {
    fn identity(&self) -> &ShortClient {
        &self.identity
    }
}

impl Display for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Клиент {} (ID: {}", self.full_name(), self.id())?;
        if let Some(phone) = self.phone() {
            write!(f, ", тел: {phone}")?;
        }
        f.write_str(")")
    }
}

impl Serialize for Client {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_structured().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Client {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = ClientMap::deserialize(deserializer)?;
        Self::from_structured(&map).map_err(D::Error::custom)
    }
}

/// Emits the metadata-only rejection event and hands the error back.
fn log_rejected(err: InvalidArgument, source: &'static str) -> InvalidArgument {
    debug!(
        "event=client_build module=model status=error source={} field={} reason={}",
        source,
        err.field,
        err.reason.code()
    );
    err
}

fn required_int(map: &ClientMap, field: Field) -> Result<i64, InvalidArgument> {
    let value = map
        .get(field.key())
        .ok_or_else(|| InvalidArgument::new(field, Reason::MissingKey))?;
    match value.as_i64() {
        Some(id) => Ok(id),
        None if value.is_u64() => Err(InvalidArgument::new(field, Reason::OutOfRange)),
        None => Err(wrong_type(field, "integer", value)),
    }
}

fn required_str(map: &ClientMap, field: Field) -> Result<&str, InvalidArgument> {
    let value = map
        .get(field.key())
        .ok_or_else(|| InvalidArgument::new(field, Reason::MissingKey))?;
    value
        .as_str()
        .ok_or_else(|| wrong_type(field, "string", value))
}

fn optional_str(map: &ClientMap, field: Field) -> Result<Option<&str>, InvalidArgument> {
    match map.get(field.key()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(other) => Err(wrong_type(field, "string or null", other)),
    }
}

fn wrong_type(field: Field, expected: &'static str, value: &Value) -> InvalidArgument {
    InvalidArgument::new(
        field,
        Reason::WrongType {
            expected,
            found: json_kind(value),
        },
    )
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_i64() || number.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Malformed text handed to [`Client::from_json`].
#[derive(Debug)]
pub enum DeserializationError {
    /// Text is not valid JSON.
    Syntax(serde_json::Error),
    /// Valid JSON, but not an object.
    NotAnObject { found: &'static str },
}

impl Display for DeserializationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "malformed client JSON: {err}"),
            Self::NotAnObject { found } => {
                write!(f, "client JSON must be an object, found {found}")
            }
        }
    }
}

impl Error for DeserializationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::NotAnObject { .. } => None,
        }
    }
}

/// Error for factories that parse text before validating fields.
#[derive(Debug)]
pub enum ClientError {
    InvalidArgument(InvalidArgument),
    Deserialization(DeserializationError),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "{err}"),
            Self::Deserialization(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::Deserialization(err) => Some(err),
        }
    }
}

impl From<InvalidArgument> for ClientError {
    fn from(value: InvalidArgument) -> Self {
        Self::InvalidArgument(value)
    }
}

impl From<DeserializationError> for ClientError {
    fn from(value: DeserializationError) -> Self {
        Self::Deserialization(value)
    }
}

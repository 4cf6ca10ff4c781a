//! Core domain logic for salon client records.
//! This crate is the single source of truth for client field invariants.

pub mod logging;
pub mod model;

pub use logging::{
    default_log_level, init_logging, logging_status, LogDestination, LoggingError,
};
pub use model::client::{
    Client, ClientError, ClientMap, ContactInfo, DeserializationError, NOT_SPECIFIED,
};
pub use model::short_client::{ClientIdentity, ShortClient, DEFAULT_CLIENT_ID};
pub use model::validate::{
    validate_email, validate_optional_string, validate_positive_int, validate_required_string,
    Field, InvalidArgument, Reason, MIN_NAME_CHARS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

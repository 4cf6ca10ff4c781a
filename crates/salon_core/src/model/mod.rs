//! Salon client domain model.
//!
//! # Responsibility
//! - Define the two client tiers (`ShortClient`, `Client`) and their
//!   validators.
//!
//! # Invariants
//! - Every model value is immutable and exists only fully validated.
//! - `Client` composes `ShortClient`; identity behavior is delegated, not
//!   duplicated.

pub mod client;
pub mod short_client;
pub mod validate;

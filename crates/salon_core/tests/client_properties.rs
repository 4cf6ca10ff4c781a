//! Property-based tests for client construction, equality and round trips.

use proptest::prelude::*;
use salon_core::{Client, ClientIdentity, Field, Reason, ShortClient};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn name_strategy() -> impl Strategy<Value = String> {
    "[А-Яа-яA-Za-z]{2,12}"
}

fn optional_text_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[0-9A-Za-z+ -]{0,16}")
}

fn email_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,3}")
}

#[derive(Debug, Clone)]
struct RawClient {
    id: i64,
    surname: String,
    given_name: String,
    patronymic: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    registration_date: Option<String>,
}

impl RawClient {
    fn build(&self) -> Client {
        Client::new(
            self.id,
            &self.surname,
            &self.given_name,
            self.patronymic.as_deref(),
            self.phone.as_deref(),
            self.email.as_deref(),
            self.registration_date.as_deref(),
        )
        .expect("strategy only produces valid clients")
    }
}

fn raw_client_strategy() -> impl Strategy<Value = RawClient> {
    (
        1i64..10_000,
        name_strategy(),
        name_strategy(),
        prop::option::of(name_strategy()),
        optional_text_strategy(),
        email_strategy(),
        optional_text_strategy(),
    )
        .prop_map(
            |(id, surname, given_name, patronymic, phone, email, registration_date)| RawClient {
                id,
                surname,
                given_name,
                patronymic,
                phone,
                email,
                registration_date,
            },
        )
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Property: valid input always builds, and accessors return trimmed values.
#[test]
fn prop_valid_input_builds_with_trimmed_fields() {
    proptest!(|(raw in raw_client_strategy(), pad in "[ \t]{0,3}")| {
        let padded_surname = format!("{pad}{}{pad}", raw.surname);
        let client = Client::new(
            raw.id,
            &padded_surname,
            &raw.given_name,
            raw.patronymic.as_deref(),
            raw.phone.as_deref(),
            raw.email.as_deref(),
            raw.registration_date.as_deref(),
        );
        prop_assert!(client.is_ok());
        let client = client.unwrap();

        prop_assert_eq!(client.surname(), raw.surname.as_str());
        let expected_phone = raw.phone.as_deref().map(str::trim).filter(|p| !p.is_empty());
        prop_assert_eq!(client.phone(), expected_phone);
    });
}

/// Property: non-positive ids are always rejected on the id field.
#[test]
fn prop_non_positive_id_is_rejected() {
    proptest!(|(id in i64::MIN..=0, raw in raw_client_strategy())| {
        let err = Client::new(
            id,
            &raw.surname,
            &raw.given_name,
            None,
            None,
            None,
            None,
        )
        .unwrap_err();
        prop_assert_eq!(err.field, Field::Id);
        prop_assert_eq!(err.reason, Reason::NotPositive(id));
    });
}

/// Property: names shorter than two characters are rejected.
#[test]
fn prop_short_names_are_rejected() {
    proptest!(|(short in "[ ]{0,2}[А-Яа-я]?[ ]{0,2}")| {
        let err = ShortClient::new(1, &short, "Иван", None).unwrap_err();
        prop_assert_eq!(err.field, Field::Surname);
    });
}

/// Property: emails without `@` never pass validation.
#[test]
fn prop_email_without_at_is_rejected() {
    proptest!(|(email in "[a-z.]{1,20}")| {
        let err = Client::new(1, "Иванов", "Иван", None, None, Some(&email), None).unwrap_err();
        prop_assert_eq!(err.field, Field::Email);
        prop_assert_eq!(err.reason, Reason::MissingAt);
    });
}

/// Property: emails whose domain lacks a `.` never pass validation.
#[test]
fn prop_email_without_domain_dot_is_rejected() {
    proptest!(|(email in "[a-z]{1,8}@[a-z]{1,8}")| {
        let err = Client::new(1, "Иванов", "Иван", None, None, Some(&email), None).unwrap_err();
        prop_assert_eq!(err.field, Field::Email);
        prop_assert_eq!(err.reason, Reason::MissingDomainDot);
    });
}

/// Property: equality is reflexive, symmetric and transitive; equal clients
/// hash equal.
#[test]
fn prop_equal_clients_hash_equal() {
    proptest!(|(raw in raw_client_strategy())| {
        let first = raw.build();
        let second = raw.build();
        let third = Client::from_structured(&second.to_structured()).unwrap();

        prop_assert_eq!(&first, &first);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&second, &first);
        prop_assert_eq!(&second, &third);
        prop_assert_eq!(&first, &third);
        prop_assert_eq!(hash_of(&first), hash_of(&third));
        prop_assert_eq!(hash_of(&first), hash_of(&second));
        prop_assert_eq!(hash_of(first.identity()), hash_of(second.identity()));
    });
}

/// Property: structured and JSON round trips preserve equality.
#[test]
fn prop_round_trips_preserve_equality() {
    proptest!(|(raw in raw_client_strategy())| {
        let client = raw.build();

        let structured = Client::from_structured(&client.to_structured()).unwrap();
        prop_assert_eq!(&structured, &client);

        let decoded = Client::from_json(&client.to_json()).unwrap();
        prop_assert_eq!(&decoded, &client);
    });
}

//! Named validation predicates for order input.
//!
//! Order placement validates the customer name and phone number against
//! fixed character classes. The rules live here as standalone predicate
//! functions so handlers state *which* rule failed and tests can exercise
//! each rule directly.

lazy_static::lazy_static! {
    static ref CUSTOMER_NAME_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Za-z\s]+$").unwrap();
    static ref PHONE_REGEX: regex::Regex =
        regex::Regex::new(r"^\d+$").unwrap();
}

/// A customer name is letters and whitespace only, and non-empty.
pub fn is_valid_customer_name(name: &str) -> bool {
    CUSTOMER_NAME_REGEX.is_match(name)
}

/// A phone number is digits only, and non-empty.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

//! # Form Validation
//!
//! [`Validator`] collects error messages while a handler checks a submitted
//! form. Field errors follow a first-failure-wins policy: once a field has a
//! message, later failed checks for that field are ignored. Non-field errors
//! (such as "Email or password is incorrect") are kept in submission order.
//!
//! The free functions are the predicates used with [`Validator::check_field`].
//! They are pure, so each can be tested on its own.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Accepted shape for email addresses
pub static EMAIL_RX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").expect("email pattern is valid")
});

/// Accumulated validation errors for one form submission
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Validator {
    pub non_field_errors: Vec<String>,
    pub field_errors: HashMap<String, String>,
}

impl Validator {
    /// True when no field or non-field error has been recorded
    pub fn valid(&self) -> bool {
        self.field_errors.is_empty() && self.non_field_errors.is_empty()
    }

    /// Record `message` for `key` unless the field already has one
    pub fn add_field_error(&mut self, key: &str, message: &str) {
        self.field_errors
            .entry(key.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn add_non_field_error(&mut self, message: &str) {
        self.non_field_errors.push(message.to_string());
    }

    /// Record `message` for `key` when `ok` is false
    pub fn check_field(&mut self, ok: bool, key: &str, message: &str) {
        if !ok {
            self.add_field_error(key, message);
        }
    }

    /// Message recorded for `key`, if any
    pub fn field_error(&self, key: &str) -> Option<&str> {
        self.field_errors.get(key).map(String::as_str)
    }
}

/// True if the value contains something other than whitespace
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True if the value has at most `n` characters
pub fn max_chars(value: &str, n: usize) -> bool {
    value.chars().count() <= n
}

/// True if the value has at least `n` characters
pub fn min_chars(value: &str, n: usize) -> bool {
    value.chars().count() >= n
}

/// True if `value` is one of `permitted`
pub fn permitted_value<T: PartialEq>(value: &T, permitted: &[T]) -> bool {
    permitted.contains(value)
}

pub fn matches(value: &str, rx: &Regex) -> bool {
    rx.is_match(value)
}

pub fn is_equal<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

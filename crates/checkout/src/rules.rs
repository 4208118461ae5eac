//! Per-field validation rule table.
//!
//! Each field maps to one check: a plain function from the current value to
//! `None` (valid) or a static message. The same table serves single-field
//! re-validation on every change and the full-form passes run on stage
//! advances, so there is exactly one source of truth for what "valid" means.

use crate::field::Field;

/// A validation check: `None` means the value is acceptable.
pub type Check = fn(&str) -> Option<&'static str>;

/// One row of the rule table.
pub struct Rule {
    pub field: Field,
    pub check: Check,
}

/// The full rule table, one row per form field.
pub const RULES: [Rule; 11] = [
    Rule { field: Field::Receiver, check: receiver },
    Rule { field: Field::Address, check: address },
    Rule { field: Field::City, check: city },
    Rule { field: Field::PostalCode, check: postal_code },
    Rule { field: Field::HouseNumber, check: house_number },
    Rule { field: Field::Complement, check: complement },
    Rule { field: Field::CardholderName, check: cardholder_name },
    Rule { field: Field::CardNumber, check: card_number },
    Rule { field: Field::SecurityCode, check: security_code },
    Rule { field: Field::ExpiryMonth, check: expiry_month },
    Rule { field: Field::ExpiryYear, check: expiry_year },
];

/// Run the rule for `field` against `value`.
#[must_use]
pub fn check(field: Field, value: &str) -> Option<&'static str> {
    RULES
        .iter()
        .find(|rule| rule.field == field)
        .and_then(|rule| (rule.check)(value))
}

const REQUIRED: &str = "this field is required";

fn required(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some(REQUIRED)
}

fn receiver(value: &str) -> Option<&'static str> {
    required(value)
        .or_else(|| (value.chars().count() < 4).then_some("needs at least 4 characters"))
}

fn address(value: &str) -> Option<&'static str> {
    required(value)
        .or_else(|| (value.chars().count() < 5).then_some("needs at least 5 characters"))
}

fn city(value: &str) -> Option<&'static str> {
    required(value)
        .or_else(|| (value.chars().count() < 3).then_some("needs at least 3 characters"))
}

/// Postal code must match `NNNNN-NNN` exactly (9 characters).
fn postal_code(value: &str) -> Option<&'static str> {
    required(value).or_else(|| {
        let ok = value.len() == 9
            && value
                .char_indices()
                .all(|(i, c)| if i == 5 { c == '-' } else { c.is_ascii_digit() });
        (!ok).then_some("must look like 01310-100")
    })
}

/// Digits only, capped at 9 so downstream numeric coercion cannot overflow.
fn house_number(value: &str) -> Option<&'static str> {
    required(value).or_else(|| {
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Some("must be a number");
        }
        (value.len() > 9).then_some("must have at most 9 digits")
    })
}

/// Optional, but at least 3 characters when present.
fn complement(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return None;
    }
    (value.chars().count() < 3).then_some("needs at least 3 characters")
}

fn cardholder_name(value: &str) -> Option<&'static str> {
    required(value)
}

/// Card number must match `NNNN NNNN NNNN NNNN` exactly (19 characters).
fn card_number(value: &str) -> Option<&'static str> {
    required(value).or_else(|| {
        let ok = value.len() == 19
            && value.char_indices().all(|(i, c)| {
                if matches!(i, 4 | 9 | 14) {
                    c == ' '
                } else {
                    c.is_ascii_digit()
                }
            });
        (!ok).then_some("must be 16 digits in groups of 4")
    })
}

fn security_code(value: &str) -> Option<&'static str> {
    required(value).or_else(|| (!exact_digits(value, 3)).then_some("must be 3 digits"))
}

fn expiry_month(value: &str) -> Option<&'static str> {
    required(value).or_else(|| (!exact_digits(value, 2)).then_some("must be 2 digits"))
}

fn expiry_year(value: &str) -> Option<&'static str> {
    required(value).or_else(|| (!exact_digits(value, 2)).then_some("must be 2 digits"))
}

fn exact_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

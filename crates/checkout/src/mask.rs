//! Fixed-pattern input masks.
//!
//! The postal code, card number, security code and expiry inputs accept only
//! digits in a fixed layout. A [`Mask`] takes whatever the user typed, keeps
//! the digits, and re-inserts the pattern's literal characters, emitting the
//! plain string value the form stores. `9` marks a digit slot; anything else
//! in the pattern is a literal.

use crate::field::Field;

/// A fixed character pattern for a masked text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    pattern: &'static str,
}

/// Postal code: `99999-999`.
pub const POSTAL_CODE: Mask = Mask::new("99999-999");
/// Card number: `9999 9999 9999 9999`.
pub const CARD_NUMBER: Mask = Mask::new("9999 9999 9999 9999");
/// Security code: `999`.
pub const SECURITY_CODE: Mask = Mask::new("999");
/// Expiry month or year: `99`.
pub const EXPIRY: Mask = Mask::new("99");

impl Mask {
    /// Create a mask from a pattern.
    #[must_use]
    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    /// Shape `raw` input to the pattern.
    ///
    /// Non-digit input characters are dropped, literals come from the pattern,
    /// and output stops as soon as the digits run out (or the pattern ends, so
    /// extra digits are truncated).
    #[must_use]
    pub fn apply(&self, raw: &str) -> String {
        let mut digits = raw.chars().filter(char::is_ascii_digit);
        let mut next = digits.next();
        let mut out = String::with_capacity(self.pattern.len());

        for slot in self.pattern.chars() {
            let Some(digit) = next else { break };
            if slot == '9' {
                out.push(digit);
                next = digits.next();
            } else {
                out.push(slot);
            }
        }
        out
    }
}

/// The mask for a field, if it has one.
#[must_use]
pub const fn for_field(field: Field) -> Option<Mask> {
    match field {
        Field::PostalCode => Some(POSTAL_CODE),
        Field::CardNumber => Some(CARD_NUMBER),
        Field::SecurityCode => Some(SECURITY_CODE),
        Field::ExpiryMonth | Field::ExpiryYear => Some(EXPIRY),
        _ => None,
    }
}

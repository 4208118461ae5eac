//! Checkout form state: field values plus touched flags.
//!
//! Validation itself lives in [`crate::rules`]; this module tracks what the
//! user has entered and which fields they have visited. A field only *displays*
//! as errored once it is both touched and currently invalid, so untouched
//! fields stay quiet until a full-validation pass force-touches them.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::rules;

/// Values and touched flags for the whole checkout form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutForm {
    values: HashMap<Field, String>,
    touched: HashSet<Field>,
}

impl CheckoutForm {
    /// An empty, untouched form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field` (empty string if never set).
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Store a new value for `field`. Validation is re-evaluated lazily on
    /// every read, so there is nothing else to invalidate here.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Mark `field` as touched (blur, or a force-touch from a full pass).
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Force-touch a set of fields, as a full-validation request does.
    pub fn touch_fields(&mut self, fields: &[Field]) {
        self.touched.extend(fields.iter().copied());
    }

    /// Whether `field` has been touched.
    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// The field's current validation error, touched or not.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&'static str> {
        rules::check(field, self.value(field))
    }

    /// Whether the field should render as errored: touched && invalid.
    #[must_use]
    pub fn shows_error(&self, field: Field) -> bool {
        self.is_touched(field) && self.error(field).is_some()
    }

    /// True when every field in `fields` passes its rule.
    #[must_use]
    pub fn all_valid(&self, fields: &[Field]) -> bool {
        fields.iter().all(|&field| self.error(field).is_none())
    }

    /// Every current violation across `fields`, in field order.
    #[must_use]
    pub fn errors_in(&self, fields: &[Field]) -> Vec<(Field, &'static str)> {
        fields
            .iter()
            .filter_map(|&field| self.error(field).map(|msg| (field, msg)))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_invalid_field_does_not_show_error() {
        let form = CheckoutForm::new();
        assert!(form.error(Field::Receiver).is_some());
        assert!(!form.shows_error(Field::Receiver));
    }

    #[test]
    fn test_touched_invalid_field_shows_error() {
        let mut form = CheckoutForm::new();
        form.set_value(Field::Receiver, "Ana");
        form.touch(Field::Receiver);
        assert!(form.shows_error(Field::Receiver));

        form.set_value(Field::Receiver, "Ana Lima");
        assert!(!form.shows_error(Field::Receiver));
    }

    #[test]
    fn test_touch_fields_marks_whole_group() {
        let mut form = CheckoutForm::new();
        form.touch_fields(&Field::DELIVERY);
        for field in Field::DELIVERY {
            assert!(form.is_touched(field));
        }
        for field in Field::PAYMENT {
            assert!(!form.is_touched(field));
        }
    }

    #[test]
    fn test_all_valid_over_delivery_group() {
        let mut form = CheckoutForm::new();
        form.set_value(Field::Receiver, "Maria Souza");
        form.set_value(Field::Address, "Rua das Flores");
        form.set_value(Field::City, "Sao Paulo");
        form.set_value(Field::PostalCode, "04538-133");
        form.set_value(Field::HouseNumber, "120");
        // complement left empty on purpose: optional
        assert!(form.all_valid(&Field::DELIVERY));
        assert!(!form.all_valid(&Field::ALL));

        form.set_value(Field::PostalCode, "1234-56");
        let errors = form.errors_in(&Field::DELIVERY);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, Field::PostalCode);
    }

    #[test]
    fn test_form_survives_serde_roundtrip() {
        let mut form = CheckoutForm::new();
        form.set_value(Field::City, "Rio");
        form.touch(Field::City);

        let json = serde_json::to_string(&form).unwrap();
        let back: CheckoutForm = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(Field::City), "Rio");
        assert!(back.is_touched(Field::City));
    }
}

//! The checkout form fields.
//!
//! One flat form backs both the delivery and payment stages (the user can go
//! back and forth without losing input), so each field carries its stage
//! grouping: the delivery stage validates only [`Field::DELIVERY`], the final
//! submit validates everything.

use serde::{Deserialize, Serialize};

/// A single input field on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Receiver,
    Address,
    City,
    PostalCode,
    HouseNumber,
    Complement,
    CardholderName,
    CardNumber,
    SecurityCode,
    ExpiryMonth,
    ExpiryYear,
}

impl Field {
    /// Every field, delivery first.
    pub const ALL: [Self; 11] = [
        Self::Receiver,
        Self::Address,
        Self::City,
        Self::PostalCode,
        Self::HouseNumber,
        Self::Complement,
        Self::CardholderName,
        Self::CardNumber,
        Self::SecurityCode,
        Self::ExpiryMonth,
        Self::ExpiryYear,
    ];

    /// Fields validated before advancing from the delivery stage.
    pub const DELIVERY: [Self; 6] = [
        Self::Receiver,
        Self::Address,
        Self::City,
        Self::PostalCode,
        Self::HouseNumber,
        Self::Complement,
    ];

    /// Fields introduced by the payment stage.
    pub const PAYMENT: [Self; 5] = [
        Self::CardholderName,
        Self::CardNumber,
        Self::SecurityCode,
        Self::ExpiryMonth,
        Self::ExpiryYear,
    ];

    /// Stable field name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Receiver => "receiver",
            Self::Address => "address",
            Self::City => "city",
            Self::PostalCode => "postalCode",
            Self::HouseNumber => "houseNumber",
            Self::Complement => "complement",
            Self::CardholderName => "cardholderName",
            Self::CardNumber => "cardNumber",
            Self::SecurityCode => "securityCode",
            Self::ExpiryMonth => "expiryMonth",
            Self::ExpiryYear => "expiryYear",
        }
    }

    /// Whether this field belongs to the delivery stage.
    #[must_use]
    pub fn is_delivery(self) -> bool {
        Self::DELIVERY.contains(&self)
    }
}

//! Order submission wire shapes.
//!
//! These structs serialize to the JSON body the remote order API expects:
//! camelCase keys, numeric house number / security code / expiry, and one
//! `{ id, price }` line per cart item. The API responds with an opaque
//! `orderId`, wrapped here as [`OrderReceipt`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{MenuItemId, OrderId};

/// Complete order payload: delivery info, payment info, and product lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub delivery: DeliveryInfo,
    pub payment: PaymentInfo,
    pub products: Vec<ProductLine>,
}

/// Who receives the order, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    pub receiver: String,
    pub address: DeliveryAddress,
}

/// Delivery address lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    /// Street line (the "address" form field).
    pub description: String,
    pub city: String,
    /// Postal code in `NNNNN-NNN` form, sent as entered.
    pub zip_code: String,
    /// House number, coerced to a number on the wire.
    pub number: u32,
    /// Optional extra line; empty string when not provided.
    pub complement: String,
}

/// Payment section of the order payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub card: CardInfo,
}

/// Card details as the order API expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    pub name: String,
    /// Formatted card number (`NNNN NNNN NNNN NNNN`), sent as entered.
    pub number: String,
    /// Security code, coerced to a number on the wire.
    pub code: u16,
    pub expires: CardExpiry,
}

/// Two-digit card expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardExpiry {
    pub month: u8,
    pub year: u8,
}

/// One cart item on the order: menu item id plus the price it was sold at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
    pub id: MenuItemId,
    pub price: Decimal,
}

/// Successful submission response from the order API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: OrderId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_order_request_wire_shape() {
        let order = OrderRequest {
            delivery: DeliveryInfo {
                receiver: "Maria Souza".to_string(),
                address: DeliveryAddress {
                    description: "Rua das Flores".to_string(),
                    city: "Sao Paulo".to_string(),
                    zip_code: "04538-133".to_string(),
                    number: 120,
                    complement: String::new(),
                },
            },
            payment: PaymentInfo {
                card: CardInfo {
                    name: "MARIA SOUZA".to_string(),
                    number: "4111 1111 1111 1111".to_string(),
                    code: 123,
                    expires: CardExpiry { month: 12, year: 28 },
                },
            },
            products: vec![ProductLine {
                id: MenuItemId::new(1),
                price: dec!(60.9),
            }],
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["delivery"]["address"]["zipCode"], "04538-133");
        assert_eq!(json["delivery"]["address"]["number"], 120);
        assert_eq!(json["payment"]["card"]["code"], 123);
        assert_eq!(json["payment"]["card"]["expires"]["month"], 12);
        assert_eq!(json["products"][0]["id"], 1);
    }

    #[test]
    fn test_order_receipt_parses_remote_response() {
        let receipt: OrderReceipt = serde_json::from_str(r#"{"orderId":"8f1c2d"}"#).unwrap();
        assert_eq!(receipt.order_id, OrderId::new("8f1c2d"));
    }
}

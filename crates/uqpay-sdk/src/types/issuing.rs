/*
[INPUT]:  Card issuing API schema (cardholders, cards, products, transactions)
[OUTPUT]: Typed request/response structs with serde support
[POS]:    Data layer - type definitions for issuing endpoints
[UPDATE]: When issuing API schema changes or new fields are added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{PageRequest, Paginated};
use super::enums::{
    CardMode, CardOrderStatus, CardStatus, CardholderStatus, IssuingTransactionStatus,
    ProductStatus,
};
use super::serde_helpers;

// ### Cardholders

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCardholderRequest {
    pub email: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    /// ISO 3166-1 alpha-2
    pub country_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCardholderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cardholder {
    pub cardholder_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(alias = "cardholder_status")]
    pub status: CardholderStatus,
    pub create_time: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCardholdersRequest {
    pub page: PageRequest,
    pub cardholder_status: Option<CardholderStatus>,
}

pub type ListCardholdersResponse = Paginated<Cardholder>;

// ### Cards

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub card_currency: String,
    pub cardholder_id: String,
    pub card_product_id: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::deserialize_optional_decimal",
        serialize_with = "serde_helpers::serialize_optional_decimal"
    )]
    pub card_limit: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCardResponse {
    pub card_id: String,
    pub card_status: CardStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_order_id: Option<String>,
}

/// Cardholder summary embedded in a card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCardholder {
    pub cardholder_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub card_id: String,
    /// Masked PAN
    #[serde(default)]
    pub card_number: String,
    pub card_currency: String,
    pub card_status: CardStatus,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub available_balance: Decimal,
    pub card_product_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardholder: Option<CardCardholder>,
    pub create_time: String,
}

/// Unmasked card data; never log it
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecureCardInfo {
    pub card_number: String,
    pub cvv: String,
    pub expire_date: String,
}

impl std::fmt::Debug for SecureCardInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let last4 = self
            .card_number
            .get(self.card_number.len().saturating_sub(4)..)
            .unwrap_or_default();
        f.debug_struct("SecureCardInfo")
            .field("card_number", &format_args!("****{last4}"))
            .field("cvv", &"***")
            .field("expire_date", &self.expire_date)
            .finish()
    }
}

/// Recharge/withdraw amount; the endpoint expects a JSON number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardOrderRequest {
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal_as_number"
    )]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardOrder {
    pub card_order_id: String,
    pub card_id: String,
    pub order_status: CardOrderStatus,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount: Decimal,
    pub create_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCardStatusRequest {
    pub card_status: CardStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCardStatusResponse {
    #[serde(default)]
    pub card_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_order_id: Option<String>,
    pub order_status: CardOrderStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCardsRequest {
    pub page: PageRequest,
    pub card_status: Option<CardStatus>,
    pub cardholder_id: Option<String>,
}

pub type ListCardsResponse = Paginated<Card>;

// ### Products

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoPinPaymentLimit {
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardProduct {
    pub product_id: String,
    pub mode_type: CardMode,
    #[serde(default)]
    pub card_bin: String,
    #[serde(default)]
    pub card_form: Vec<String>,
    #[serde(default)]
    pub max_card_quota: u32,
    #[serde(default)]
    pub card_scheme: String,
    #[serde(default)]
    pub card_currency: Vec<String>,
    pub product_status: ProductStatus,
    #[serde(default)]
    pub no_pin_payment_amount: Vec<NoPinPaymentLimit>,
    pub create_time: String,
    #[serde(default)]
    pub update_time: String,
}

impl CardProduct {
    /// Enabled and supports the given card currency
    pub fn issues(&self, currency: &str) -> bool {
        self.product_status == ProductStatus::Enabled
            && self
                .card_currency
                .iter()
                .any(|c| c.eq_ignore_ascii_case(currency))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProductsRequest {
    pub page: PageRequest,
}

pub type ListProductsResponse = Paginated<CardProduct>;

// ### Transactions

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub card_id: String,
    #[serde(default)]
    pub transaction_type: String,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub transaction_amount: Decimal,
    pub transaction_currency: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub billing_amount: Decimal,
    #[serde(default)]
    pub billing_currency: String,
    #[serde(default)]
    pub merchant_name: String,
    pub transaction_status: IssuingTransactionStatus,
    pub transaction_time: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTransactionsRequest {
    pub page: PageRequest,
    pub card_id: Option<String>,
}

pub type ListTransactionsResponse = Paginated<Transaction>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_order_request_amount_is_number() {
        let req = CardOrderRequest {
            amount: Decimal::new(10050, 2),
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "amount": 100.5 }));
    }

    #[test]
    fn test_card_order_accepts_numeric_amount() {
        let order: CardOrder = serde_json::from_value(json!({
            "card_order_id": "co_1",
            "card_id": "card_1",
            "order_status": "PENDING",
            "amount": 50.25,
            "create_time": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(order.amount, Decimal::new(5025, 2));
        assert_eq!(order.order_status, CardOrderStatus::Pending);
    }

    #[test]
    fn test_card_order_amount_keeps_precision() {
        let amount: Decimal = "12345678901234567.89".parse().unwrap();
        let body = serde_json::to_string(&CardOrderRequest { amount }).unwrap();
        assert_eq!(body, r#"{"amount":12345678901234567.89}"#);

        let order: CardOrder = serde_json::from_str(
            r#"{"card_order_id":"co_2","card_id":"card_1","order_status":"SUCCESS","amount":12345678901234567.89,"create_time":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(order.amount, amount);
    }

    #[test]
    fn test_card_without_create_time_is_rejected() {
        let card = json!({
            "card_id": "card_1",
            "card_currency": "USD",
            "card_status": "ACTIVE",
            "card_product_id": "prod_1"
        });
        let err = serde_json::from_value::<Card>(card).unwrap_err();
        assert!(err.to_string().contains("create_time"));

        let order = json!({
            "card_order_id": "co_1",
            "card_id": "card_1",
            "order_status": "PENDING",
            "amount": "1"
        });
        assert!(serde_json::from_value::<CardOrder>(order).is_err());
    }

    #[test]
    fn test_secure_card_debug_masks_pan() {
        let info = SecureCardInfo {
            card_number: "4111111111111111".to_string(),
            cvv: "123".to_string(),
            expire_date: "12/29".to_string(),
        };
        let debug = format!("{info:?}");
        assert!(debug.contains("****1111"));
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("123\""));
    }

    #[test]
    fn test_product_issues_currency() {
        let product: CardProduct = serde_json::from_value(json!({
            "product_id": "prod_1",
            "mode_type": "SINGLE",
            "card_currency": ["USD", "SGD"],
            "product_status": "ENABLED",
            "no_pin_payment_amount": [{ "amount": "100", "currency": "USD" }],
            "create_time": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(product.issues("usd"));
        assert!(!product.issues("EUR"));
        assert_eq!(product.mode_type, CardMode::Single);
    }
}

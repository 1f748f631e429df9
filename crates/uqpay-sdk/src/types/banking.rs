/*
[INPUT]:  Banking API schema (transfers, balances, accounts, payouts, FX)
[OUTPUT]: Typed request/response structs with serde support
[POS]:    Data layer - type definitions for banking endpoints
[UPDATE]: When banking API schema changes or new fields are added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{PageRequest, Paginated};
use super::enums::{
    BalanceStatus, BalanceTransactionStatus, BalanceTransactionType, BeneficiaryStatus,
    ConversionStatus, DepositStatus, EntityType, PayoutStatus, TransferStatus,
    VirtualAccountStatus,
};
use super::serde_helpers;

// ### Transfers

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub transfer_id: String,
    #[serde(default)]
    pub short_reference_id: String,
    pub source_account_id: String,
    pub target_account_id: String,
    pub currency: String,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount: Decimal,
    pub transfer_status: TransferStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub create_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransferRequest {
    pub source_account_id: String,
    pub target_account_id: String,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransferResponse {
    pub transfer_id: String,
    #[serde(default)]
    pub short_reference_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTransfersRequest {
    pub page: PageRequest,
    pub transfer_status: Option<TransferStatus>,
    pub currency: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

pub type ListTransfersResponse = Paginated<Transfer>;

// ### Balances

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub balance_id: String,
    pub currency: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub available_balance: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub prepaid_balance: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub margin_balance: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub frozen_balance: Decimal,
    pub balance_status: BalanceStatus,
    pub create_time: String,
    #[serde(default)]
    pub update_time: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBalancesRequest {
    pub page: PageRequest,
}

pub type ListBalancesResponse = Paginated<Balance>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceTransaction {
    pub transaction_id: String,
    pub transaction_type: BalanceTransactionType,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount: Decimal,
    pub currency: String,
    pub transaction_status: BalanceTransactionStatus,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub balance_before: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub balance_after: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reference_id: String,
    pub create_time: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBalanceTransactionsRequest {
    pub page: PageRequest,
    pub currency: Option<String>,
    pub transaction_type: Option<BalanceTransactionType>,
    pub transaction_status: Option<BalanceTransactionStatus>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

pub type ListBalanceTransactionsResponse = Paginated<BalanceTransaction>;

// ### Virtual accounts

/// Receiving bank coordinates for one currency of a virtual account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyBankDetail {
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ifsc_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualAccount {
    pub virtual_account_id: String,
    pub virtual_account_name: String,
    pub status: VirtualAccountStatus,
    pub create_time: String,
    #[serde(default)]
    pub currency_bank_detail: Vec<CurrencyBankDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateVirtualAccountRequest {
    pub virtual_account_name: String,
    pub currencies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListVirtualAccountsRequest {
    pub page: PageRequest,
    pub currency: Option<String>,
}

pub type ListVirtualAccountsResponse = Paginated<VirtualAccount>;

// ### Deposits

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub deposit_id: String,
    #[serde(default)]
    pub short_reference_id: String,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount: Decimal,
    pub currency: String,
    pub deposit_status: DepositStatus,
    #[serde(default)]
    pub payer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub create_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDepositsRequest {
    pub page: PageRequest,
    pub deposit_status: Option<DepositStatus>,
    pub currency: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

pub type ListDepositsResponse = Paginated<Deposit>;

// ### Beneficiaries

/// Bank coordinates of a beneficiary; which fields apply depends on the rail
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub beneficiary_id: String,
    pub entity_type: EntityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub currency: String,
    pub country: String,
    #[serde(default)]
    pub payment_method: String,
    pub status: BeneficiaryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
    pub create_time: String,
    #[serde(default)]
    pub update_time: String,
}

impl Beneficiary {
    /// Person name for individuals, company name otherwise
    pub fn display_name(&self) -> String {
        match self.entity_type {
            EntityType::Individual => [self.first_name.as_deref(), self.last_name.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" "),
            _ => self.company_name.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBeneficiaryRequest {
    pub entity_type: EntityType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub currency: String,
    pub country: String,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub bank_details: BankDetails,
}

/// Only the fields that are set are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBeneficiaryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBeneficiariesRequest {
    pub page: PageRequest,
    pub currency: Option<String>,
    pub status: Option<BeneficiaryStatus>,
    pub entity_type: Option<EntityType>,
    pub country: Option<String>,
}

pub type ListBeneficiariesResponse = Paginated<Beneficiary>;

/// A payout rail available for a currency/country pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub payment_method_id: String,
    pub payment_method_name: String,
    pub currency: String,
    pub country: String,
    #[serde(default)]
    pub required_fields: Vec<String>,
    #[serde(default)]
    pub optional_fields: Vec<String>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_optional_decimal",
        serialize_with = "serde_helpers::serialize_optional_decimal"
    )]
    pub min_amount: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_optional_decimal",
        serialize_with = "serde_helpers::serialize_optional_decimal"
    )]
    pub max_amount: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryCheckRequest {
    pub currency: String,
    pub country: String,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryCheckResponse {
    pub currency: String,
    pub country: String,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
}

// ### Payouts

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutBankDetails {
    pub account_number: String,
    pub account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutWalletDetails {
    pub wallet_provider: String,
    pub wallet_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutContactDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Beneficiary as embedded in a payout (either by id or inline)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutBeneficiary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_id: Option<String>,
    #[serde(default)]
    pub beneficiary_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<PayoutBankDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_details: Option<PayoutWalletDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<PayoutContactDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutTransactionDetails {
    pub transaction_id: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_optional_decimal",
        serialize_with = "serde_helpers::serialize_optional_decimal"
    )]
    pub exchange_rate: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub payout_id: String,
    #[serde(default)]
    pub short_reference_id: String,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount: Decimal,
    pub currency: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_optional_decimal",
        serialize_with = "serde_helpers::serialize_optional_decimal"
    )]
    pub fee: Option<Decimal>,
    #[serde(default)]
    pub payout_purpose: String,
    pub payout_status: PayoutStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default)]
    pub beneficiary: PayoutBeneficiary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_details: Option<PayoutTransactionDetails>,
    pub create_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<String>,
}

/// Either `beneficiary_id` or an inline `beneficiary` must be set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePayoutRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_id: Option<String>,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub payout_purpose: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<PayoutBeneficiary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePayoutResponse {
    pub payout_id: String,
    #[serde(default)]
    pub short_reference_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_status: Option<PayoutStatus>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPayoutsRequest {
    pub page: PageRequest,
    pub payout_status: Option<PayoutStatus>,
    pub currency: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

pub type ListPayoutsResponse = Paginated<Payout>;

// ### Conversions

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub conversion_id: String,
    #[serde(default)]
    pub short_reference_id: String,
    pub currency_from: String,
    pub currency_to: String,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount_from: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount_to: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub rate: Decimal,
    pub conversion_status: ConversionStatus,
    pub create_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateConversionRequest {
    pub currency_from: String,
    pub currency_to: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_from: Decimal,
    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_date: Option<String>,
    /// Redeem a previously locked quote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateConversionResponse {
    pub conversion_id: String,
    #[serde(default)]
    pub short_reference_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListConversionsRequest {
    pub page: PageRequest,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub conversion_status: Option<ConversionStatus>,
    pub currency_from: Option<String>,
    pub currency_to: Option<String>,
}

pub type ListConversionsResponse = Paginated<Conversion>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateQuoteRequest {
    pub currency_from: String,
    pub currency_to: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_from: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_date: Option<String>,
}

/// Time-limited locked rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub quote_id: String,
    pub currency_from: String,
    pub currency_to: String,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount_from: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub amount_to: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub rate: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_date: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl Quote {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

pub type CreateQuoteResponse = Quote;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionDate {
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub first_cutoff: String,
    #[serde(default)]
    pub second_cutoff: String,
    #[serde(default)]
    pub optimized_date: bool,
}

// ### Exchange rates

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateItem {
    /// e.g. `USD/EUR`
    pub currency_pair: String,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub buy_price: Decimal,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub sell_price: Decimal,
    #[serde(default)]
    pub update_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRatesRequest {
    /// Filter, e.g. `["USD/EUR", "GBP/USD"]`; empty means all pairs
    pub currency_pairs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesData {
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub rates: Vec<RateItem>,
    #[serde(default)]
    pub unavailable_currency_pairs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRatesResponse {
    pub data: RatesData,
}

impl ListRatesResponse {
    /// Look a rate up by pair, accepting both `USD/EUR` and `USDEUR`
    pub fn rate(&self, pair: &str) -> Option<&RateItem> {
        let wanted = pair.replace('/', "");
        self.data
            .rates
            .iter()
            .find(|item| item.currency_pair.replace('/', "").eq_ignore_ascii_case(&wanted))
    }
}

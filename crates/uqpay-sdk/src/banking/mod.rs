/*
[INPUT]:  Shared ApiClient
[OUTPUT]: Banking resource clients grouped under one handle
[POS]:    Banking resource - aggregate of transfers, balances, accounts, payouts and FX
[UPDATE]: When banking resources are added or removed
*/

pub mod balances;
pub mod beneficiaries;
pub mod conversions;
pub mod deposits;
pub mod exchange_rates;
pub mod payouts;
pub mod transfers;
pub mod virtual_accounts;

use std::sync::Arc;

use crate::http::ApiClient;

pub use balances::BalancesClient;
pub use beneficiaries::BeneficiariesClient;
pub use conversions::ConversionsClient;
pub use deposits::DepositsClient;
pub use exchange_rates::ExchangeRatesClient;
pub use payouts::PayoutsClient;
pub use transfers::TransfersClient;
pub use virtual_accounts::VirtualAccountsClient;

#[derive(Debug, Clone)]
pub struct BankingClient {
    pub transfers: TransfersClient,
    pub balances: BalancesClient,
    pub virtual_accounts: VirtualAccountsClient,
    pub deposits: DepositsClient,
    pub beneficiaries: BeneficiariesClient,
    pub payouts: PayoutsClient,
    pub conversions: ConversionsClient,
    pub exchange_rates: ExchangeRatesClient,
}

impl BankingClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            transfers: TransfersClient::new(client.clone()),
            balances: BalancesClient::new(client.clone()),
            virtual_accounts: VirtualAccountsClient::new(client.clone()),
            deposits: DepositsClient::new(client.clone()),
            beneficiaries: BeneficiariesClient::new(client.clone()),
            payouts: PayoutsClient::new(client.clone()),
            conversions: ConversionsClient::new(client.clone()),
            exchange_rates: ExchangeRatesClient::new(client),
        }
    }
}

/*
[INPUT]:  Configuration or a prepared ApiClient
[OUTPUT]: Top-level UQPAY client exposing every resource group
[POS]:    Entry point - wires resource clients onto one shared ApiClient
[UPDATE]: When resource groups are added or removed
*/

use std::sync::Arc;

use crate::banking::BankingClient;
use crate::configuration::Configuration;
use crate::connect::ConnectClient;
use crate::http::{ApiClient, RequestContext, Result};
use crate::issuing::IssuingClient;
use crate::supporting::SupportingClient;

/// UQPAY API client.
///
/// All resource groups share one connection pool. Cloning is cheap.
///
/// ```no_run
/// use uqpay_sdk::{Configuration, Environment, UqpayClient};
/// use uqpay_sdk::types::ListBalancesRequest;
///
/// # async fn run() -> uqpay_sdk::Result<()> {
/// let client = UqpayClient::new(Configuration::new("client-id", "api-key", Environment::sandbox()))?;
/// let balances = client.banking.balances.list(&ListBalancesRequest::default()).await?;
/// println!("{} balances", balances.total_items);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UqpayClient {
    api: Arc<ApiClient>,
    pub banking: BankingClient,
    pub issuing: IssuingClient,
    pub connect: ConnectClient,
    pub supporting: SupportingClient,
}

impl UqpayClient {
    pub fn new(configuration: Configuration) -> Result<Self> {
        Ok(Self::from_api_client(Arc::new(ApiClient::new(configuration)?)))
    }

    pub fn from_api_client(api: Arc<ApiClient>) -> Self {
        Self {
            banking: BankingClient::new(api.clone()),
            issuing: IssuingClient::new(api.clone()),
            connect: ConnectClient::new(api.clone()),
            supporting: SupportingClient::new(api.clone()),
            api,
        }
    }

    /// The shared low-level client, for endpoints without a typed wrapper
    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    /// A client whose every request is bounded by `context` (deadline and/or cancellation)
    pub fn with_context(&self, context: RequestContext) -> Self {
        Self::from_api_client(Arc::new(self.api.with_context(context)))
    }
}

/*
[INPUT]:  Currency codes and balance/transaction filters
[OUTPUT]: Account balances and balance movements
[POS]:    Banking resource - balance endpoints
[UPDATE]: When balance endpoints or filters change
*/

use std::sync::Arc;

use crate::http::query::{QueryBuilder, path_segment};
use crate::http::{ApiClient, Result, ResultExt};
use crate::types::{
    Balance, ListBalanceTransactionsRequest, ListBalanceTransactionsResponse, ListBalancesRequest,
    ListBalancesResponse,
};

#[derive(Debug, Clone)]
pub struct BalancesClient {
    client: Arc<ApiClient>,
}

impl BalancesClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Balance for one currency
    ///
    /// GET /v1/balances/{currency}
    pub async fn get(&self, currency: &str) -> Result<Balance> {
        const OPERATION: &str = "failed to get balance";
        let currency = path_segment(currency).context(OPERATION)?;
        let endpoint = format!("/v1/balances/{currency}");
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// GET /v1/balances
    pub async fn list(&self, req: &ListBalancesRequest) -> Result<ListBalancesResponse> {
        const OPERATION: &str = "failed to list balances";
        let endpoint = QueryBuilder::new("/v1/balances")
            .page(&req.page)
            .context(OPERATION)?
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// GET /v1/balances/transactions
    pub async fn list_transactions(
        &self,
        req: &ListBalanceTransactionsRequest,
    ) -> Result<ListBalanceTransactionsResponse> {
        const OPERATION: &str = "failed to list balance transactions";
        let endpoint = QueryBuilder::new("/v1/balances/transactions")
            .page(&req.page)
            .context(OPERATION)?
            .opt("currency", req.currency.as_deref())
            .opt("transaction_type", req.transaction_type.as_ref())
            .opt("transaction_status", req.transaction_status.as_ref())
            .opt("start_time", req.start_time.as_deref())
            .opt("end_time", req.end_time.as_deref())
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }
}

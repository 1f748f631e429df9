/*
[INPUT]:  Virtual account names, currencies and list filters
[OUTPUT]: Virtual receiving accounts with their bank coordinates
[POS]:    Banking resource - virtual account endpoints
[UPDATE]: When virtual account endpoints change
*/

use std::sync::Arc;

use crate::http::query::QueryBuilder;
use crate::http::{ApiClient, Result, ResultExt};
use crate::types::{
    CreateVirtualAccountRequest, ListVirtualAccountsRequest, ListVirtualAccountsResponse,
    VirtualAccount,
};

#[derive(Debug, Clone)]
pub struct VirtualAccountsClient {
    client: Arc<ApiClient>,
}

impl VirtualAccountsClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// POST /v1/virtual/accounts
    pub async fn create(&self, req: &CreateVirtualAccountRequest) -> Result<VirtualAccount> {
        self.client
            .post("/v1/virtual/accounts", req)
            .await
            .context("failed to create virtual account")
    }

    /// GET /v1/virtual/accounts
    pub async fn list(&self, req: &ListVirtualAccountsRequest) -> Result<ListVirtualAccountsResponse> {
        const OPERATION: &str = "failed to list virtual accounts";
        let endpoint = QueryBuilder::new("/v1/virtual/accounts")
            .page(&req.page)
            .context(OPERATION)?
            .opt("currency", req.currency.as_deref())
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }
}

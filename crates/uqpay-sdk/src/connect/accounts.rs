/*
[INPUT]:  Pagination and connected account ids
[OUTPUT]: Connected accounts and their outstanding onboarding documents
[POS]:    Connect resource - account endpoints (read-only)
[UPDATE]: When connected account endpoints change
*/

use std::sync::Arc;

use crate::http::query::{QueryBuilder, path_segment};
use crate::http::{ApiClient, Result, ResultExt};
use crate::types::{Account, AdditionalDocumentsResponse, ListAccountsRequest, ListAccountsResponse};

#[derive(Debug, Clone)]
pub struct AccountsClient {
    client: Arc<ApiClient>,
}

impl AccountsClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// GET /v1/accounts
    pub async fn list(&self, req: &ListAccountsRequest) -> Result<ListAccountsResponse> {
        const OPERATION: &str = "failed to list accounts";
        let endpoint = QueryBuilder::new("/v1/accounts")
            .page(&req.page)
            .context(OPERATION)?
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// GET /v1/accounts/{account_id}
    pub async fn get(&self, account_id: &str) -> Result<Account> {
        const OPERATION: &str = "failed to get account";
        let account_id = path_segment(account_id).context(OPERATION)?;
        let endpoint = format!("/v1/accounts/{account_id}");
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// GET /v1/accounts/{account_id}/additional_documents
    pub async fn get_additional_documents(
        &self,
        account_id: &str,
    ) -> Result<AdditionalDocumentsResponse> {
        const OPERATION: &str = "failed to get additional documents";
        let account_id = path_segment(account_id).context(OPERATION)?;
        let endpoint = format!("/v1/accounts/{account_id}/additional_documents");
        self.client.get(&endpoint).await.context(OPERATION)
    }
}

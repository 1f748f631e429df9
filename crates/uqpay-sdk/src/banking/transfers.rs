/*
[INPUT]:  Transfer filters, create payloads and transfer ids
[OUTPUT]: Transfers between accounts held on the platform
[POS]:    Banking resource - transfer endpoints
[UPDATE]: When transfer endpoints or filters change
*/

use std::sync::Arc;

use crate::http::query::{QueryBuilder, path_segment};
use crate::http::{ApiClient, Result, ResultExt};
use crate::types::{
    CreateTransferRequest, CreateTransferResponse, ListTransfersRequest, ListTransfersResponse,
    Transfer,
};

#[derive(Debug, Clone)]
pub struct TransfersClient {
    client: Arc<ApiClient>,
}

impl TransfersClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List transfers
    ///
    /// GET /v1/transfer?page_size={size}&page_number={number}&transfer_status=..&currency=..
    pub async fn list(&self, req: &ListTransfersRequest) -> Result<ListTransfersResponse> {
        const OPERATION: &str = "failed to list transfers";
        let endpoint = QueryBuilder::new("/v1/transfer")
            .page(&req.page)
            .context(OPERATION)?
            .opt("transfer_status", req.transfer_status.as_ref())
            .opt("currency", req.currency.as_deref())
            .opt("start_time", req.start_time.as_deref())
            .opt("end_time", req.end_time.as_deref())
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// Create a transfer
    ///
    /// POST /v1/transfer
    pub async fn create(&self, req: &CreateTransferRequest) -> Result<CreateTransferResponse> {
        self.client
            .post("/v1/transfer", req)
            .await
            .context("failed to create transfer")
    }

    /// GET /v1/transfer/{transfer_id}
    pub async fn get(&self, transfer_id: &str) -> Result<Transfer> {
        const OPERATION: &str = "failed to get transfer";
        let transfer_id = path_segment(transfer_id).context(OPERATION)?;
        let endpoint = format!("/v1/transfer/{transfer_id}");
        self.client.get(&endpoint).await.context(OPERATION)
    }
}

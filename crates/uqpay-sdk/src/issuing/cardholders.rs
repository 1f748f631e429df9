/*
[INPUT]:  Cardholder payloads, filters and cardholder ids
[OUTPUT]: Cardholders that cards are issued to
[POS]:    Issuing resource - cardholder endpoints
[UPDATE]: When cardholder endpoints or filters change
*/

use std::sync::Arc;

use crate::http::query::{QueryBuilder, path_segment};
use crate::http::{ApiClient, Result, ResultExt};
use crate::types::{
    Cardholder, CreateCardholderRequest, ListCardholdersRequest, ListCardholdersResponse,
    UpdateCardholderRequest,
};

#[derive(Debug, Clone)]
pub struct CardholdersClient {
    client: Arc<ApiClient>,
}

impl CardholdersClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// POST /v1/issuing/cardholders
    pub async fn create(&self, req: &CreateCardholderRequest) -> Result<Cardholder> {
        self.client
            .post("/v1/issuing/cardholders", req)
            .await
            .context("failed to create cardholder")
    }

    /// GET /v1/issuing/cardholders/{cardholder_id}
    pub async fn get(&self, cardholder_id: &str) -> Result<Cardholder> {
        const OPERATION: &str = "failed to get cardholder";
        let cardholder_id = path_segment(cardholder_id).context(OPERATION)?;
        let endpoint = format!("/v1/issuing/cardholders/{cardholder_id}");
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// GET /v1/issuing/cardholders
    pub async fn list(&self, req: &ListCardholdersRequest) -> Result<ListCardholdersResponse> {
        const OPERATION: &str = "failed to list cardholders";
        let endpoint = QueryBuilder::new("/v1/issuing/cardholders")
            .page(&req.page)
            .context(OPERATION)?
            .opt("cardholder_status", req.cardholder_status.as_ref())
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// POST /v1/issuing/cardholders/{cardholder_id}
    pub async fn update(
        &self,
        cardholder_id: &str,
        req: &UpdateCardholderRequest,
    ) -> Result<Cardholder> {
        const OPERATION: &str = "failed to update cardholder";
        let cardholder_id = path_segment(cardholder_id).context(OPERATION)?;
        let endpoint = format!("/v1/issuing/cardholders/{cardholder_id}");
        self.client.post(&endpoint, req).await.context(OPERATION)
    }
}

/*
[INPUT]:  Payout payloads, filters and payout ids
[OUTPUT]: Outgoing payouts to beneficiaries
[POS]:    Banking resource - payout endpoints
[UPDATE]: When payout endpoints or filters change
*/

use std::sync::Arc;

use crate::http::query::{QueryBuilder, path_segment};
use crate::http::{ApiClient, Result, ResultExt, UqpayError};
use crate::types::{
    CreatePayoutRequest, CreatePayoutResponse, ListPayoutsRequest, ListPayoutsResponse, Payout,
};

#[derive(Debug, Clone)]
pub struct PayoutsClient {
    client: Arc<ApiClient>,
}

impl PayoutsClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// GET /v1/payouts
    pub async fn list(&self, req: &ListPayoutsRequest) -> Result<ListPayoutsResponse> {
        const OPERATION: &str = "failed to list payouts";
        let endpoint = QueryBuilder::new("/v1/payouts")
            .page(&req.page)
            .context(OPERATION)?
            .opt("payout_status", req.payout_status.as_ref())
            .opt("currency", req.currency.as_deref())
            .opt("start_time", req.start_time.as_deref())
            .opt("end_time", req.end_time.as_deref())
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// Create a payout to a saved (`beneficiary_id`) or inline beneficiary
    ///
    /// POST /v1/payouts/create
    pub async fn create(&self, req: &CreatePayoutRequest) -> Result<CreatePayoutResponse> {
        const OPERATION: &str = "failed to create payout";
        if req.beneficiary_id.is_none() && req.beneficiary.is_none() {
            return Err(UqpayError::InvalidRequest(
                "either beneficiary_id or beneficiary is required".to_string(),
            )
            .context(OPERATION));
        }
        self.client
            .post("/v1/payouts/create", req)
            .await
            .context(OPERATION)
    }

    /// GET /v1/payouts/{payout_id}
    pub async fn get(&self, payout_id: &str) -> Result<Payout> {
        const OPERATION: &str = "failed to get payout";
        let payout_id = path_segment(payout_id).context(OPERATION)?;
        let endpoint = format!("/v1/payouts/{payout_id}");
        self.client.get(&endpoint).await.context(OPERATION)
    }
}

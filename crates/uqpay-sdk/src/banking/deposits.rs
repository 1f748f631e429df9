/*
[INPUT]:  Deposit filters and deposit ids
[OUTPUT]: Incoming deposits
[POS]:    Banking resource - deposit endpoints (read-only)
[UPDATE]: When deposit endpoints or filters change
*/

use std::sync::Arc;

use crate::http::query::{QueryBuilder, path_segment};
use crate::http::{ApiClient, Result, ResultExt};
use crate::types::{Deposit, ListDepositsRequest, ListDepositsResponse};

#[derive(Debug, Clone)]
pub struct DepositsClient {
    client: Arc<ApiClient>,
}

impl DepositsClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// GET /v1/deposit
    pub async fn list(&self, req: &ListDepositsRequest) -> Result<ListDepositsResponse> {
        const OPERATION: &str = "failed to list deposits";
        let endpoint = QueryBuilder::new("/v1/deposit")
            .page(&req.page)
            .context(OPERATION)?
            .opt("deposit_status", req.deposit_status.as_ref())
            .opt("currency", req.currency.as_deref())
            .opt("start_time", req.start_time.as_deref())
            .opt("end_time", req.end_time.as_deref())
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// GET /v1/deposit/{deposit_id}
    pub async fn get(&self, deposit_id: &str) -> Result<Deposit> {
        const OPERATION: &str = "failed to get deposit";
        let deposit_id = path_segment(deposit_id).context(OPERATION)?;
        let endpoint = format!("/v1/deposit/{deposit_id}");
        self.client.get(&endpoint).await.context(OPERATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::api_client_for;
    use crate::types::DepositStatus;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_deposits_by_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/deposit"))
            .and(query_param("deposit_status", "COMPLETED"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_pages": 0,
                "total_items": 0,
                "data": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let deposits = DepositsClient::new(api_client_for(&server));
        let response = deposits
            .list(&ListDepositsRequest {
                deposit_status: Some(DepositStatus::Completed),
                ..Default::default()
            })
            .await
            .expect("list deposits");
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_deposit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/deposit/dep_404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "NOT_FOUND",
                "message": "deposit not found"
            })))
            .mount(&server)
            .await;

        let deposits = DepositsClient::new(api_client_for(&server));
        let err = deposits.get("dep_404").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("failed to get deposit: "));
    }
}

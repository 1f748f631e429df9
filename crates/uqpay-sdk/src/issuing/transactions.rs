/*
[INPUT]:  Pagination, optional card id and transaction ids
[OUTPUT]: Card authorisations and settlements
[POS]:    Issuing resource - transaction endpoints (read-only)
[UPDATE]: When issuing transaction endpoints change
*/

use std::sync::Arc;

use crate::http::query::{QueryBuilder, path_segment};
use crate::http::{ApiClient, Result, ResultExt};
use crate::types::{ListTransactionsRequest, ListTransactionsResponse, Transaction};

#[derive(Debug, Clone)]
pub struct TransactionsClient {
    client: Arc<ApiClient>,
}

impl TransactionsClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// GET /v1/issuing/transactions
    pub async fn list(&self, req: &ListTransactionsRequest) -> Result<ListTransactionsResponse> {
        const OPERATION: &str = "failed to list transactions";
        let endpoint = QueryBuilder::new("/v1/issuing/transactions")
            .page(&req.page)
            .context(OPERATION)?
            .opt("card_id", req.card_id.as_deref())
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// GET /v1/issuing/transactions/{transaction_id}
    pub async fn get(&self, transaction_id: &str) -> Result<Transaction> {
        const OPERATION: &str = "failed to get transaction";
        let transaction_id = path_segment(transaction_id).context(OPERATION)?;
        let endpoint = format!("/v1/issuing/transactions/{transaction_id}");
        self.client.get(&endpoint).await.context(OPERATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::api_client_for;
    use crate::types::IssuingTransactionStatus;
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_transactions_for_card() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/issuing/transactions"))
            .and(query_param("card_id", "card_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_pages": 1,
                "total_items": 1,
                "data": [{
                    "transaction_id": "itx_1",
                    "card_id": "card_1",
                    "transaction_type": "AUTHORIZATION",
                    "transaction_amount": "-25.00",
                    "transaction_currency": "EUR",
                    "billing_amount": "-27.10",
                    "billing_currency": "USD",
                    "merchant_name": "Cafe",
                    "transaction_status": "APPROVED",
                    "transaction_time": "2024-01-01T09:00:00Z"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transactions = TransactionsClient::new(api_client_for(&server));
        let response = transactions
            .list(&ListTransactionsRequest {
                card_id: Some("card_1".to_string()),
                ..Default::default()
            })
            .await
            .expect("list transactions");

        let transaction = &response.data[0];
        assert_eq!(transaction.transaction_status, IssuingTransactionStatus::Approved);
        assert_eq!(transaction.billing_amount, Decimal::new(-2710, 2));
    }

    #[tokio::test]
    async fn test_get_transaction_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/issuing/transactions/itx_1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"transaction_id\":"))
            .mount(&server)
            .await;

        let transactions = TransactionsClient::new(api_client_for(&server));
        let err = transactions.get("itx_1").await.unwrap_err();
        assert!(err.is_decode());
        assert!(err.api_error().is_none());
    }
}

/*
[INPUT]:  Conversion/quote payloads, filters and currency pairs
[OUTPUT]: FX conversions, locked quotes and settlement dates
[POS]:    Banking resource - conversion endpoints
[UPDATE]: When conversion endpoints or filters change
*/

use std::sync::Arc;

use crate::http::query::{QueryBuilder, path_segment};
use crate::http::{ApiClient, Result, ResultExt};
use crate::types::{
    Conversion, ConversionDate, CreateConversionRequest, CreateConversionResponse,
    CreateQuoteRequest, CreateQuoteResponse, ListConversionsRequest, ListConversionsResponse,
};

#[derive(Debug, Clone)]
pub struct ConversionsClient {
    client: Arc<ApiClient>,
}

impl ConversionsClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// GET /v1/conversion
    pub async fn list(&self, req: &ListConversionsRequest) -> Result<ListConversionsResponse> {
        const OPERATION: &str = "failed to list conversions";
        let endpoint = QueryBuilder::new("/v1/conversion")
            .page(&req.page)
            .context(OPERATION)?
            .opt("start_time", req.start_time.as_deref())
            .opt("end_time", req.end_time.as_deref())
            .opt("conversion_status", req.conversion_status.as_ref())
            .opt("currency_from", req.currency_from.as_deref())
            .opt("currency_to", req.currency_to.as_deref())
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// POST /v1/conversion
    pub async fn create(&self, req: &CreateConversionRequest) -> Result<CreateConversionResponse> {
        self.client
            .post("/v1/conversion", req)
            .await
            .context("failed to create conversion")
    }

    /// GET /v1/conversion/{conversion_id}
    pub async fn get(&self, conversion_id: &str) -> Result<Conversion> {
        const OPERATION: &str = "failed to get conversion";
        let conversion_id = path_segment(conversion_id).context(OPERATION)?;
        let endpoint = format!("/v1/conversion/{conversion_id}");
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// Settlement dates available for a currency pair
    ///
    /// GET /v1/conversion/conversion_dates?currency_from=..&currency_to=..
    pub async fn list_conversion_dates(
        &self,
        currency_from: &str,
        currency_to: &str,
    ) -> Result<Vec<ConversionDate>> {
        let endpoint = QueryBuilder::new("/v1/conversion/conversion_dates")
            .param("currency_from", currency_from)
            .param("currency_to", currency_to)
            .build();
        self.client
            .get(&endpoint)
            .await
            .context("failed to list conversion dates")
    }

    /// Lock a rate for a short window; redeem it via `CreateConversionRequest::quote_id`
    ///
    /// POST /v1/conversion/quote
    pub async fn create_quote(&self, req: &CreateQuoteRequest) -> Result<CreateQuoteResponse> {
        self.client
            .post("/v1/conversion/quote", req)
            .await
            .context("failed to create quote")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::api_client_for;
    use crate::types::ConversionStatus;
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_quote() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/conversion/quote"))
            .and(body_json(json!({
                "currency_from": "USD",
                "currency_to": "EUR",
                "amount_from": "100.00"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "quote_id": "q_1",
                "currency_from": "USD",
                "currency_to": "EUR",
                "amount_from": "100.00",
                "amount_to": "92.10",
                "rate": "0.921",
                "expires_at": "2024-05-01T12:00:30Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let conversions = ConversionsClient::new(api_client_for(&server));
        let quote = conversions
            .create_quote(&CreateQuoteRequest {
                currency_from: "USD".to_string(),
                currency_to: "EUR".to_string(),
                amount_from: Decimal::new(10000, 2),
                settlement_date: None,
            })
            .await
            .expect("create quote");

        assert_eq!(quote.quote_id, "q_1");
        assert_eq!(quote.rate, Decimal::new(921, 3));
    }

    #[tokio::test]
    async fn test_list_conversion_dates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/conversion/conversion_dates"))
            .and(query_param("currency_from", "USD"))
            .and(query_param("currency_to", "SGD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "date": "2024-05-02", "first_cutoff": "2024-05-02T10:00:00Z", "optimized_date": true },
                { "date": "2024-05-03" }
            ])))
            .mount(&server)
            .await;

        let conversions = ConversionsClient::new(api_client_for(&server));
        let dates = conversions
            .list_conversion_dates("USD", "SGD")
            .await
            .expect("list conversion dates");

        assert_eq!(dates.len(), 2);
        assert!(dates[0].optimized_date);
        assert!(!dates[1].optimized_date);
    }

    #[tokio::test]
    async fn test_get_conversion() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/conversion/conv_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "conversion_id": "conv_1",
                "currency_from": "USD",
                "currency_to": "EUR",
                "amount_from": "100",
                "amount_to": "92.1",
                "rate": "0.921",
                "conversion_status": "completed",
                "create_time": "2024-05-01T12:00:00Z",
                "settlement_date": "2024-05-02"
            })))
            .mount(&server)
            .await;

        let conversions = ConversionsClient::new(api_client_for(&server));
        let conversion = conversions.get("conv_1").await.expect("get conversion");
        assert_eq!(conversion.conversion_status, ConversionStatus::Completed);
        assert_eq!(conversion.settlement_date.as_deref(), Some("2024-05-02"));
    }
}

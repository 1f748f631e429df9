/*
[INPUT]:  Optional currency pair filter
[OUTPUT]: Current buy/sell rates per pair
[POS]:    Banking resource - exchange rate endpoint
[UPDATE]: When the rates endpoint or pair format changes
*/

use std::sync::Arc;

use crate::http::query::QueryBuilder;
use crate::http::{ApiClient, Result, ResultExt};
use crate::types::{ListRatesRequest, ListRatesResponse};

#[derive(Debug, Clone)]
pub struct ExchangeRatesClient {
    client: Arc<ApiClient>,
}

impl ExchangeRatesClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// GET /v1/exchange/rates?currency_pairs=USD/EUR,USDEUR,...
    pub async fn list(&self, req: &ListRatesRequest) -> Result<ListRatesResponse> {
        let endpoint = QueryBuilder::new("/v1/exchange/rates")
            .opt("currency_pairs", currency_pairs_filter(&req.currency_pairs))
            .build();
        self.client
            .get(&endpoint)
            .await
            .context("failed to list exchange rates")
    }
}

/// The server matches pairs in either `USD/EUR` or `USDEUR` form, so both are sent.
///
/// Returns `None` when no pairs were given.
fn currency_pairs_filter(pairs: &[String]) -> Option<String> {
    let mut expanded: Vec<String> = Vec::with_capacity(pairs.len() * 2);
    for pair in pairs.iter().map(|pair| pair.trim()).filter(|pair| !pair.is_empty()) {
        for form in [pair.to_string(), pair.replace('/', "")] {
            if !expanded.contains(&form) {
                expanded.push(form);
            }
        }
    }

    (!expanded.is_empty()).then(|| expanded.join(","))
}

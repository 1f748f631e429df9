/*
[INPUT]:  Pagination
[OUTPUT]: Card products available to the account
[POS]:    Issuing resource - product endpoint
[UPDATE]: When the product endpoint changes
*/

use std::sync::Arc;

use crate::http::query::QueryBuilder;
use crate::http::{ApiClient, Result, ResultExt};
use crate::types::{ListProductsRequest, ListProductsResponse};

#[derive(Debug, Clone)]
pub struct ProductsClient {
    client: Arc<ApiClient>,
}

impl ProductsClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// GET /v1/issuing/products
    pub async fn list(&self, req: &ListProductsRequest) -> Result<ListProductsResponse> {
        const OPERATION: &str = "failed to list products";
        let endpoint = QueryBuilder::new("/v1/issuing/products")
            .page(&req.page)
            .context(OPERATION)?
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }
}

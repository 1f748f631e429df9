/*
[INPUT]:  Shared ApiClient
[OUTPUT]: Card issuing resource clients grouped under one handle
[POS]:    Issuing resource - aggregate of cardholders, cards, products and transactions
[UPDATE]: When issuing resources are added or removed
*/

pub mod cardholders;
pub mod cards;
pub mod products;
pub mod transactions;

use std::sync::Arc;

use crate::http::ApiClient;

pub use cardholders::CardholdersClient;
pub use cards::CardsClient;
pub use products::ProductsClient;
pub use transactions::TransactionsClient;

#[derive(Debug, Clone)]
pub struct IssuingClient {
    pub cardholders: CardholdersClient,
    pub cards: CardsClient,
    pub products: ProductsClient,
    pub transactions: TransactionsClient,
}

impl IssuingClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            cardholders: CardholdersClient::new(client.clone()),
            cards: CardsClient::new(client.clone()),
            products: ProductsClient::new(client.clone()),
            transactions: TransactionsClient::new(client),
        }
    }
}

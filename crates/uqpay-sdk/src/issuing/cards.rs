/*
[INPUT]:  Card payloads, filters, card ids and order amounts
[OUTPUT]: Issued cards, unmasked card data and card orders
[POS]:    Issuing resource - card endpoints
[UPDATE]: When card endpoints or card order semantics change
*/

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::http::query::{QueryBuilder, path_segment};
use crate::http::{ApiClient, Result, ResultExt, UqpayError};
use crate::types::{
    Card, CardOrder, CardOrderRequest, CardStatus, CreateCardRequest, CreateCardResponse,
    ListCardsRequest, ListCardsResponse, SecureCardInfo, UpdateCardStatusRequest,
    UpdateCardStatusResponse,
};

#[derive(Debug, Clone)]
pub struct CardsClient {
    client: Arc<ApiClient>,
}

impl CardsClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// POST /v1/issuing/cards
    pub async fn create(&self, req: &CreateCardRequest) -> Result<CreateCardResponse> {
        self.client
            .post("/v1/issuing/cards", req)
            .await
            .context("failed to create card")
    }

    /// GET /v1/issuing/cards
    pub async fn list(&self, req: &ListCardsRequest) -> Result<ListCardsResponse> {
        const OPERATION: &str = "failed to list cards";
        let endpoint = QueryBuilder::new("/v1/issuing/cards")
            .page(&req.page)
            .context(OPERATION)?
            .opt("card_status", req.card_status.as_ref())
            .opt("cardholder_id", req.cardholder_id.as_deref())
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// GET /v1/issuing/cards/{card_id}
    pub async fn get(&self, card_id: &str) -> Result<Card> {
        const OPERATION: &str = "failed to get card";
        let endpoint = card_path(card_id, None).context(OPERATION)?;
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// Full PAN, CVV and expiry. The result must not be logged or persisted.
    ///
    /// GET /v1/issuing/cards/{card_id}/secure
    pub async fn get_secure(&self, card_id: &str) -> Result<SecureCardInfo> {
        const OPERATION: &str = "failed to get secure card info";
        let endpoint = card_path(card_id, Some("secure")).context(OPERATION)?;
        debug!(card_id, "requesting secure card data");
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// Move funds onto the card
    ///
    /// POST /v1/issuing/cards/{card_id}/recharge
    pub async fn recharge(&self, card_id: &str, amount: Decimal) -> Result<CardOrder> {
        self.order(card_id, "recharge", amount, "failed to recharge card")
            .await
    }

    /// Move funds off the card
    ///
    /// POST /v1/issuing/cards/{card_id}/withdraw
    pub async fn withdraw(&self, card_id: &str, amount: Decimal) -> Result<CardOrder> {
        self.order(card_id, "withdraw", amount, "failed to withdraw from card")
            .await
    }

    /// Freeze, unfreeze or cancel a card
    ///
    /// POST /v1/issuing/cards/{card_id}/status
    pub async fn update_status(
        &self,
        card_id: &str,
        card_status: CardStatus,
    ) -> Result<UpdateCardStatusResponse> {
        const OPERATION: &str = "failed to update card status";
        let endpoint = card_path(card_id, Some("status")).context(OPERATION)?;
        let req = UpdateCardStatusRequest { card_status };
        self.client.post(&endpoint, &req).await.context(OPERATION)
    }

    async fn order(
        &self,
        card_id: &str,
        action: &str,
        amount: Decimal,
        operation: &str,
    ) -> Result<CardOrder> {
        if amount <= Decimal::ZERO {
            return Err(
                UqpayError::InvalidRequest(format!("{action} amount must be positive, got {amount}"))
                    .context(operation),
            );
        }

        let endpoint = card_path(card_id, Some(action)).context(operation)?;
        let req = CardOrderRequest { amount };
        self.client.post(&endpoint, &req).await.context(operation)
    }
}

fn card_path(card_id: &str, action: Option<&str>) -> Result<String> {
    let card_id = path_segment(card_id)?;
    Ok(match action {
        Some(action) => format!("/v1/issuing/cards/{card_id}/{action}"),
        None => format!("/v1/issuing/cards/{card_id}"),
    })
}

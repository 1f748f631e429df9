/*
[INPUT]:  Beneficiary payloads, filters and currency/country pairs
[OUTPUT]: Saved payout beneficiaries, available rails and validation results
[POS]:    Banking resource - beneficiary endpoints
[UPDATE]: When beneficiary endpoints or filters change
*/

use std::sync::Arc;

use crate::http::query::{QueryBuilder, path_segment};
use crate::http::{ApiClient, Result, ResultExt};
use crate::types::{
    Beneficiary, BeneficiaryCheckRequest, BeneficiaryCheckResponse, CreateBeneficiaryRequest,
    ListBeneficiariesRequest, ListBeneficiariesResponse, PaymentMethod, UpdateBeneficiaryRequest,
};

#[derive(Debug, Clone)]
pub struct BeneficiariesClient {
    client: Arc<ApiClient>,
}

impl BeneficiariesClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// GET /v1/beneficiaries
    pub async fn list(&self, req: &ListBeneficiariesRequest) -> Result<ListBeneficiariesResponse> {
        const OPERATION: &str = "failed to list beneficiaries";
        let endpoint = QueryBuilder::new("/v1/beneficiaries")
            .page(&req.page)
            .context(OPERATION)?
            .opt("currency", req.currency.as_deref())
            .opt("status", req.status.as_ref())
            .opt("entity_type", req.entity_type.as_ref())
            .opt("country", req.country.as_deref())
            .build();
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// GET /v1/beneficiaries/{beneficiary_id}
    pub async fn get(&self, beneficiary_id: &str) -> Result<Beneficiary> {
        const OPERATION: &str = "failed to get beneficiary";
        let beneficiary_id = path_segment(beneficiary_id).context(OPERATION)?;
        let endpoint = format!("/v1/beneficiaries/{beneficiary_id}");
        self.client.get(&endpoint).await.context(OPERATION)
    }

    /// POST /v1/beneficiaries/create
    pub async fn create(&self, req: &CreateBeneficiaryRequest) -> Result<Beneficiary> {
        self.client
            .post("/v1/beneficiaries/create", req)
            .await
            .context("failed to create beneficiary")
    }

    /// Partial update; unset fields are left untouched
    ///
    /// POST /v1/beneficiaries/{beneficiary_id}
    pub async fn update(
        &self,
        beneficiary_id: &str,
        req: &UpdateBeneficiaryRequest,
    ) -> Result<Beneficiary> {
        const OPERATION: &str = "failed to update beneficiary";
        let beneficiary_id = path_segment(beneficiary_id).context(OPERATION)?;
        let endpoint = format!("/v1/beneficiaries/{beneficiary_id}");
        self.client.post(&endpoint, req).await.context(OPERATION)
    }

    /// Payout rails available for a currency in a country
    ///
    /// GET /v1/beneficiaries/paymentmethods?currency={currency}&country={country}
    pub async fn list_payment_methods(
        &self,
        currency: &str,
        country: &str,
    ) -> Result<Vec<PaymentMethod>> {
        let endpoint = QueryBuilder::new("/v1/beneficiaries/paymentmethods")
            .param("currency", currency)
            .param("country", country)
            .build();
        self.client
            .get(&endpoint)
            .await
            .context("failed to list payment methods")
    }

    /// Validate beneficiary details without saving them
    ///
    /// POST /v1/beneficiaries/check
    pub async fn check(&self, req: &BeneficiaryCheckRequest) -> Result<BeneficiaryCheckResponse> {
        self.client
            .post("/v1/beneficiaries/check", req)
            .await
            .context("failed to check beneficiary")
    }
}

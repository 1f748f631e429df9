/*
[INPUT]:  Connect API schema (connected accounts)
[OUTPUT]: Typed account structs with serde support
[POS]:    Data layer - type definitions for connect endpoints
[UPDATE]: When connect API schema changes or new fields are added
*/

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{PageRequest, Paginated};
use super::enums::{AccountStatus, EntityType};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub legal_name: String,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
}

/// Outstanding onboarding requirements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRequirements {
    #[serde(default)]
    pub currently_due: Vec<String>,
    #[serde(default)]
    pub eventually_due: Vec<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    pub entity_type: EntityType,
    pub status: AccountStatus,
    #[serde(default)]
    pub payouts_enabled: bool,
    #[serde(default)]
    pub charges_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<AccountRequirements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual: Option<Individual>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    pub create_time: String,
    #[serde(default)]
    pub update_time: String,
}

impl Account {
    /// Contact details of whichever profile matches the entity type
    pub fn contact_info(&self) -> Option<&ContactInfo> {
        match self.entity_type {
            EntityType::Individual => self.individual.as_ref().map(|i| &i.contact_info),
            EntityType::Company => self.company.as_ref().map(|c| &c.contact_info),
            EntityType::Unknown(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAccountsRequest {
    pub page: PageRequest,
}

pub type ListAccountsResponse = Paginated<Account>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalDocument {
    #[serde(rename = "type")]
    pub document_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalDocumentsResponse {
    pub account_id: String,
    #[serde(default)]
    pub documents: Vec<AdditionalDocument>,
}

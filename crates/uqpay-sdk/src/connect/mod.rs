/*
[INPUT]:  Shared ApiClient
[OUTPUT]: Connected account resource clients
[POS]:    Connect resource - aggregate
[UPDATE]: When connect resources are added or removed
*/

pub mod accounts;

use std::sync::Arc;

use crate::http::ApiClient;

pub use accounts::AccountsClient;

#[derive(Debug, Clone)]
pub struct ConnectClient {
    pub accounts: AccountsClient,
}

impl ConnectClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            accounts: AccountsClient::new(client),
        }
    }
}

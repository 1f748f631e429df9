/*
[INPUT]:  Shared ApiClient
[OUTPUT]: Supporting resource clients (file storage)
[POS]:    Supporting resource - aggregate
[UPDATE]: When supporting resources are added or removed
*/

pub mod files;

use std::sync::Arc;

use crate::http::ApiClient;

pub use files::FilesClient;

#[derive(Debug, Clone)]
pub struct SupportingClient {
    pub files: FilesClient,
}

impl SupportingClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            files: FilesClient::new(client),
        }
    }
}

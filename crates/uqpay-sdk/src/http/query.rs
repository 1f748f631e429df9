/*
[INPUT]:  Endpoint path, pagination and optional filters
[OUTPUT]: Path with an escaped query string
[POS]:    HTTP layer - request path construction for resource clients
[UPDATE]: When changing query encoding or pagination rules
*/

use std::fmt::Display;

use url::form_urlencoded;

use crate::http::{Result, UqpayError};
use crate::types::PageRequest;

/// Builds `/v1/...?...` paths. Values are always form-encoded.
#[derive(Debug, Clone)]
pub(crate) struct QueryBuilder {
    path: String,
    params: Vec<(&'static str, String)>,
}

impl QueryBuilder {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Append `page_size` and `page_number` after validating their ranges
    pub(crate) fn page(mut self, page: &PageRequest) -> Result<Self> {
        page.validate()?;
        self.params.push(("page_size", page.page_size.to_string()));
        self.params.push(("page_number", page.page_number.to_string()));
        Ok(self)
    }

    pub(crate) fn param(mut self, key: &'static str, value: impl Display) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Append the parameter only when present and non-empty
    pub(crate) fn opt<V: Display>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.params.push((key, value));
            }
        }
        self
    }

    pub(crate) fn build(self) -> String {
        if self.params.is_empty() {
            return self.path;
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter().map(|(key, value)| (*key, value.as_str())))
            .finish();
        format!("{}?{}", self.path, query)
    }
}

/// Percent-encode a caller-supplied value for use as a single path segment.
///
/// Empty, `.` and `..` are rejected: URL parsing would resolve them (escaped
/// or not) onto a different endpoint.
pub(crate) fn path_segment(value: &str) -> Result<String> {
    if matches!(value, "" | "." | "..") {
        return Err(UqpayError::InvalidRequest(format!(
            "'{value}' is not a valid path identifier"
        )));
    }

    Ok(form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20"))
}

/*
[INPUT]:  File-support API schema (upload, download links)
[OUTPUT]: Typed upload payloads and file metadata structs
[POS]:    Data layer - type definitions for file endpoints
[UPDATE]: When file API schema or upload limits change
*/

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http::{Result, UqpayError};

/// 20 MB
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub const ALLOWED_UPLOAD_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "doc", "docx", "pdf"];

/// A file to send to `/v1/files/upload`
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content: Vec<u8>,
    pub notes: Option<String>,
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("size", &self.content.len())
            .field("notes", &self.notes)
            .finish()
    }
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Read a file from disk, named after its final path component.
    ///
    /// Files over [`MAX_UPLOAD_BYTES`] are rejected from their metadata, before
    /// any content is read.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                UqpayError::InvalidRequest(format!("invalid upload path: {}", path.display()))
            })?
            .to_string();

        let size = tokio::fs::metadata(path).await?.len();
        if size > MAX_UPLOAD_BYTES as u64 {
            return Err(UqpayError::InvalidRequest(format!(
                "file '{file_name}' is {size} bytes, limit is {MAX_UPLOAD_BYTES}"
            )));
        }

        let content = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, content))
    }

    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }

    /// MIME type inferred from the extension
    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }

    /// Check size and type limits before anything is sent
    pub fn validate(&self) -> Result<()> {
        if self.content.is_empty() {
            return Err(UqpayError::InvalidRequest(format!(
                "file '{}' is empty",
                self.file_name
            )));
        }
        if self.content.len() > MAX_UPLOAD_BYTES {
            return Err(UqpayError::InvalidRequest(format!(
                "file '{}' is {} bytes, limit is {MAX_UPLOAD_BYTES}",
                self.file_name,
                self.content.len()
            )));
        }
        match self.extension() {
            Some(ext) if ALLOWED_UPLOAD_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(UqpayError::InvalidRequest(format!(
                "file '{}' must be one of: {}",
                self.file_name,
                ALLOWED_UPLOAD_EXTENSIONS.join(", ")
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFileResponse {
    pub file_id: String,
    pub file_name: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub create_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLinksRequest {
    pub file_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDownloadInfo {
    pub file_id: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub size: u64,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLinksResponse {
    #[serde(default)]
    pub files: Vec<FileDownloadInfo>,
    /// Requested ids the server does not know
    #[serde(default)]
    pub absent_files: Vec<String>,
}

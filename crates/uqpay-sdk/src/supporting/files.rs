/*
[INPUT]:  Local files (name, bytes, notes) and stored file ids
[OUTPUT]: Uploaded file metadata and time-limited download URLs
[POS]:    Supporting resource - file endpoints on the files host
[UPDATE]: When file endpoints or upload limits change
*/

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::http::{ApiBase, ApiClient, Result, ResultExt};
use crate::types::{DownloadLinksRequest, DownloadLinksResponse, FileUpload, UploadFileResponse};

#[derive(Debug, Clone)]
pub struct FilesClient {
    client: Arc<ApiClient>,
}

impl FilesClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Upload a document as multipart/form-data.
    ///
    /// The file is checked against the size and type limits first; nothing is
    /// sent when it fails.
    ///
    /// POST /v1/files/upload (files host)
    pub async fn upload(&self, upload: FileUpload) -> Result<UploadFileResponse> {
        const OPERATION: &str = "failed to upload file";
        upload.validate().context(OPERATION)?;

        debug!(
            file_name = %upload.file_name,
            bytes = upload.content.len(),
            "uploading file"
        );
        let form = upload_form(upload).context(OPERATION)?;
        self.client
            .post_multipart(ApiBase::Files, "/v1/files/upload", form)
            .await
            .context(OPERATION)
    }

    /// POST /v1/files/download_links (files host)
    pub async fn get_download_links(
        &self,
        req: &DownloadLinksRequest,
    ) -> Result<DownloadLinksResponse> {
        self.client
            .post_files("/v1/files/download_links", req)
            .await
            .context("failed to get download links")
    }
}

fn upload_form(upload: FileUpload) -> Result<Form> {
    let mime_type = upload.mime_type();
    let part = Part::bytes(upload.content)
        .file_name(upload.file_name)
        .mime_str(mime_type)?;

    let mut form = Form::new().part("file", part);
    if let Some(notes) = upload.notes.filter(|notes| !notes.is_empty()) {
        form = form.text("notes", notes);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::UqpayError;
    use crate::test_support::api_client_for;
    use serde_json::json;
    use wiremock::matchers::{body_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_upload_sends_file_and_notes_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/files/upload"))
            .and(header_exists("x-client-id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "file_id": "file_1",
                "file_name": "passport.pdf",
                "file_type": "pdf",
                "size": 8,
                "notes": "kyc",
                "create_time": "2024-01-01T00:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let files = FilesClient::new(api_client_for(&server));
        let response = files
            .upload(FileUpload::new("passport.pdf", b"%PDF-1.4".to_vec()).with_notes("kyc"))
            .await
            .expect("upload file");
        assert_eq!(response.file_id, "file_1");

        let requests = server.received_requests().await.expect("recorded requests");
        let request = &requests[0];
        let content_type = request
            .headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("multipart/form-data; boundary="));

        let body = String::from_utf8_lossy(&request.body);
        assert!(body.contains(r#"name="file"; filename="passport.pdf""#));
        assert!(body.to_ascii_lowercase().contains("content-type: application/pdf"));
        assert!(body.contains("%PDF-1.4"));
        assert!(body.contains(r#"name="notes""#));
        assert!(body.contains("kyc"));
    }

    #[tokio::test]
    async fn test_upload_rejects_disallowed_type_locally() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let files = FilesClient::new(api_client_for(&server));
        let err = files
            .upload(FileUpload::new("payload.exe", vec![0u8; 4]))
            .await
            .unwrap_err();
        assert!(matches!(err.root(), UqpayError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_get_download_links() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/files/download_links"))
            .and(body_json(json!({ "file_ids": ["file_1", "file_missing"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "files": [{
                    "file_id": "file_1",
                    "file_type": "pdf",
                    "file_name": "passport.pdf",
                    "size": 8,
                    "url": "https://files.example.com/signed/file_1"
                }],
                "absent_files": ["file_missing"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let files = FilesClient::new(api_client_for(&server));
        let response = files
            .get_download_links(&DownloadLinksRequest {
                file_ids: vec!["file_1".to_string(), "file_missing".to_string()],
            })
            .await
            .expect("get download links");

        assert_eq!(response.files.len(), 1);
        assert_eq!(response.absent_files, vec!["file_missing"]);
    }
}

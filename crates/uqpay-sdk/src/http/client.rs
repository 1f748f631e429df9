/*
[INPUT]:  SDK configuration (base URLs, timeouts, credentials)
[OUTPUT]: Authenticated JSON/multipart requests and typed responses
[POS]:    HTTP layer - core client every resource client delegates to
[UPDATE]: When adding connection options or changing request/response handling
*/

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::configuration::Configuration;
use crate::http::{ApiError, RequestContext, Result, UqpayError};

const DEFAULT_CLIENT_ID_HEADER: &str = "x-client-id";
const DEFAULT_API_KEY_HEADER: &str = "x-api-key";
const IDEMPOTENCY_KEY_HEADER: &str = "x-idempotency-key";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Header carrying the client id
    pub client_id_header: String,
    /// Header carrying the API key
    pub api_key_header: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            client_id_header: DEFAULT_CLIENT_ID_HEADER.to_string(),
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
            user_agent: concat!("uqpay-sdk-rust/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Credentials attached to every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub api_key: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            api_key: api_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Which host a request goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiBase {
    Main,
    Files,
}

/// Shared HTTP client for the UQPAY API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
    files_base_url: Url,
    credentials: Credentials,
    auth_headers: HeaderMap,
    context: RequestContext,
}

impl ApiClient {
    /// Create a client from configuration, building its own connection pool
    pub fn new(configuration: Configuration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(configuration.client.timeout)
            .connect_timeout(configuration.client.connect_timeout)
            .user_agent(configuration.client.user_agent.clone())
            .build()?;

        Self::with_http_client(configuration, http_client)
    }

    /// Create a client on top of an existing `reqwest::Client`
    pub fn with_http_client(configuration: Configuration, http_client: Client) -> Result<Self> {
        configuration.validate()?;

        let auth_headers = auth_headers(&configuration)?;

        Ok(Self {
            http_client,
            base_url: Url::parse(&configuration.environment.base_url)?,
            files_base_url: Url::parse(&configuration.environment.files_base_url)?,
            credentials: configuration.credentials,
            auth_headers,
            context: RequestContext::default(),
        })
    }

    /// A clone whose requests are bounded by `context`
    pub fn with_context(&self, context: RequestContext) -> Self {
        let mut client = self.clone();
        client.context = context;
        client
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self, base: ApiBase) -> &Url {
        match base {
            ApiBase::Main => &self.base_url,
            ApiBase::Files => &self.files_base_url,
        }
    }

    /// Join `path` (which may carry a query) onto the base URL, keeping any base path prefix
    pub fn url(&self, base: ApiBase, path: &str) -> Result<Url> {
        let root = self.base_url(base).as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{root}/{path}"))?)
    }

    /// GET against the main API
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_from(ApiBase::Main, path).await
    }

    /// POST a JSON body against the main API
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post_to(ApiBase::Main, path, body).await
    }

    pub async fn get_from<T: DeserializeOwned>(&self, base: ApiBase, path: &str) -> Result<T> {
        let builder = self.request(Method::GET, base, path)?;
        self.send_json(builder).await
    }

    pub async fn post_to<B, T>(&self, base: ApiBase, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        let builder = self
            .request(Method::POST, base, path)?
            .header(IDEMPOTENCY_KEY_HEADER, Uuid::new_v4().to_string())
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        self.send_json(builder).await
    }

    /// GET against the files host
    pub async fn get_files<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_from(ApiBase::Files, path).await
    }

    /// POST a JSON body against the files host
    pub async fn post_files<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post_to(ApiBase::Files, path, body).await
    }

    /// POST a multipart/form-data body
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        base: ApiBase,
        path: &str,
        form: Form,
    ) -> Result<T> {
        let builder = self
            .request(Method::POST, base, path)?
            .header(IDEMPOTENCY_KEY_HEADER, Uuid::new_v4().to_string())
            .multipart(form);
        self.send_json(builder).await
    }

    /// Build an authenticated request builder
    pub(crate) fn request(&self, method: Method, base: ApiBase, path: &str) -> Result<RequestBuilder> {
        let url = self.url(base, path)?;
        let mut builder = self
            .http_client
            .request(method, url)
            .headers(self.auth_headers.clone())
            .header(ACCEPT, "application/json");

        if let Some(timeout) = self.context.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(builder)
    }

    /// Send the request and decode a 2xx JSON body, or map the failure
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        if self.context.is_cancelled() {
            return Err(UqpayError::Cancelled);
        }
        self.context.run(self.execute(builder)).await
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        debug!(%method, %url, "sending request");
        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%method, %url, status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            let err = ApiError::from_response(status, &body);
            warn!(
                %method,
                %url,
                status = err.status_code,
                code = %err.code,
                message = %err.message,
                "api request failed"
            );
            return Err(err.into());
        }

        decode_body(&body)
    }
}

fn auth_headers(configuration: &Configuration) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let pairs = [
        (
            configuration.client.client_id_header.as_str(),
            configuration.credentials.client_id.as_str(),
        ),
        (
            configuration.client.api_key_header.as_str(),
            configuration.credentials.api_key.as_str(),
        ),
    ];

    for (name, value) in pairs {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| UqpayError::InvalidHeader(format!("{name}: {err}")))?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|err| UqpayError::InvalidHeader(format!("{name}: {err}")))?;
        value.set_sensitive(true);
        headers.insert(name, value);
    }

    Ok(headers)
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    let payload = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(payload).map_err(|source| UqpayError::Decode {
        source,
        body: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Environment;
    use serde::Deserialize;
    use serde_json::json;
    use tokio_util::sync::CancellationToken;
    use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Ping {
        status: String,
    }

    fn client_for(server: &MockServer) -> ApiClient {
        let base = format!("{}/api", server.uri());
        ApiClient::new(Configuration::new(
            "client-123",
            "secret-key",
            Environment::custom(base.clone(), base),
        ))
        .expect("client init")
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let credentials = Credentials::new("client-123", "secret-key");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("client-123"));
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn test_url_keeps_base_prefix() {
        let client = ApiClient::new(Configuration::new(
            "id",
            "key",
            Environment::custom("https://api.example.com/api/", "https://files.example.com/api"),
        ))
        .unwrap();

        let url = client.url(ApiBase::Main, "/v1/transfer?page_size=10").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/v1/transfer?page_size=10");

        let url = client.url(ApiBase::Files, "/v1/files/upload").unwrap();
        assert_eq!(url.as_str(), "https://files.example.com/api/v1/files/upload");
    }

    #[test]
    fn test_invalid_header_name_rejected() {
        let config = Configuration::new("id", "key", Environment::sandbox()).with_client_config(
            ClientConfig {
                api_key_header: "bad header".to_string(),
                ..ClientConfig::default()
            },
        );
        assert!(matches!(
            ApiClient::new(config),
            Err(UqpayError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = Configuration::new("id", "key", Environment::custom("not a url", "also not"));
        assert!(matches!(ApiClient::new(config), Err(UqpayError::UrlParse(_))));
    }

    #[tokio::test]
    async fn test_get_sends_auth_headers_and_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/ping"))
            .and(query_param("page_size", "10"))
            .and(header("x-client-id", "client-123"))
            .and(header("x-api-key", "secret-key"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let ping: Ping = client.get("/v1/ping?page_size=10").await.expect("get failed");
        assert_eq!(ping.status, "ok");
    }

    #[tokio::test]
    async fn test_post_sends_json_and_idempotency_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/ping"))
            .and(header("x-client-id", "client-123"))
            .and(header("x-api-key", "secret-key"))
            .and(header("content-type", "application/json"))
            .and(header_exists("x-idempotency-key"))
            .and(body_json(json!({ "hello": "world" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "status": "created" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let ping: Ping = client
            .post("/v1/ping", &json!({ "hello": "world" }))
            .await
            .expect("post failed");
        assert_eq!(ping.status, "created");
    }

    #[tokio::test]
    async fn test_non_success_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "NOT_FOUND",
                "message": "resource not found",
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get::<Ping>("/v1/missing").await.unwrap_err();
        let api = err.api_error().expect("api error");
        assert_eq!(api.code, "NOT_FOUND");
        assert_eq!(api.message, "resource not found");
        assert!(err.is_not_found());
        assert!(!err.is_unauthorized());
        assert!(!err.is_bad_request());
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get::<Ping>("/v1/ping").await.unwrap_err();
        assert!(err.is_decode());
        assert!(err.api_error().is_none());
        match err {
            UqpayError::Decode { body, .. } => assert_eq!(body, "{not json"),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_success_body_decodes_as_unit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/noop"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result: Option<Ping> = client.post("/v1/noop", &json!({})).await.expect("post");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let client = ApiClient::new(Configuration::new(
            "id",
            "key",
            Environment::custom("http://127.0.0.1:1", "http://127.0.0.1:1"),
        ))
        .unwrap();

        let err = client.get::<Ping>("/v1/ping").await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.api_error().is_none());
    }

    #[tokio::test]
    async fn test_cancelled_context_aborts_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "ok" }))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let token = CancellationToken::new();
        let client = client_for(&server)
            .with_context(RequestContext::new().with_cancellation(token.clone()));

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            token.cancel();
        });

        let err = client.get::<Ping>("/v1/slow").await.unwrap_err();
        assert!(err.is_cancelled());
        canceller.await.unwrap();
    }

    #[tokio::test]
    async fn test_context_timeout_applies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "ok" }))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let client = client_for(&server)
            .with_context(RequestContext::new().with_timeout(Duration::from_millis(100)));

        let err = client.get::<Ping>("/v1/slow").await.unwrap_err();
        assert!(err.is_transport());
        match err {
            UqpayError::Http(inner) => assert!(inner.is_timeout()),
            other => panic!("expected transport timeout, got {other:?}"),
        }
    }
}

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};

use super::ApiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the service base URL, including any query string.
    pub path: String,
    /// JSON body; sent with `Content-Type: application/json` when present.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_json(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Executes a single request and hands back the raw status and body.
/// Non-2xx statuses are not errors at this layer.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug)]
pub struct TransportOptions {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub proxy: Option<String>,
    /// Extra header in `Key: Value` form added to every request.
    pub header: Option<String>,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 10,
            proxy: None,
            header: None,
        }
    }
}

pub fn parse_header_line(raw: &str) -> Result<(HeaderName, HeaderValue), ApiError> {
    let invalid = || ApiError::InvalidHeader {
        header: raw.to_string(),
    };
    let (key, value) = raw.split_once(':').ok_or_else(invalid)?;
    let key = HeaderName::from_str(key.trim()).map_err(|_| invalid())?;
    let value = HeaderValue::from_str(value.trim()).map_err(|_| invalid())?;
    Ok((key, value))
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(options: &TransportOptions) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("supplierctl/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(raw) = options.header.as_deref().filter(|h| !h.trim().is_empty()) {
            let (key, value) = parse_header_line(raw)?;
            headers.insert(key, value);
        }

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(options.timeout_seconds));
        if let Some(proxy) = options.proxy.as_deref().filter(|p| !p.trim().is_empty()) {
            let proxy_cfg =
                reqwest::Proxy::all(proxy).map_err(|source| ApiError::ProxySetup {
                    proxy: proxy.to_string(),
                    source,
                })?;
            builder = builder.proxy(proxy_cfg);
        }
        let client = builder
            .build()
            .map_err(|source| ApiError::HttpClientBuild { source })?;

        Ok(Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url_for(&request.path);
        tracing::debug!(method = %request.method, %url, "sending request");

        let mut builder = self.client.request(request.method.clone(), url.as_str());
        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let resp = builder.send().await.map_err(|e| ApiError::Transport {
            url: url.clone(),
            source: Box::new(e),
        })?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport {
            url: url.clone(),
            source: Box::new(e),
        })?;
        tracing::debug!(%status, bytes = body.len(), "received response");

        Ok(ApiResponse { status, body })
    }
}

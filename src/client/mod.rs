pub mod query;
pub mod transport;

#[cfg(test)]
pub(crate) mod scripted;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{ErrorBody, Product, SupplierPayload, SupplierRecord};

pub use query::SearchQuery;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport, TransportOptions};

pub const SUPPLIERS_PATH: &str = "/suppliers";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("HTTP {status}{}", message_suffix(.message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode request body: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid header '{header}', expected 'Key: Value'")]
    InvalidHeader { header: String },

    #[error("failed to build HTTP client: {source}")]
    HttpClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to setup proxy: {proxy}: {source}")]
    ProxySetup {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// The text shown to the user for a failed action: the server's own
    /// `message` when it sent one, otherwise a description of the failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}

pub fn item_path(id: &str) -> String {
    format!("{SUPPLIERS_PATH}/{id}")
}

pub fn search_path(query: &SearchQuery) -> String {
    format!("{SUPPLIERS_PATH}?{}", query.to_query_string())
}

/// Typed operations over the suppliers resource.
#[derive(Clone, Debug)]
pub struct SupplierClient<T> {
    transport: T,
}

impl<T: Transport> SupplierClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[tracing::instrument(skip_all)]
    pub async fn create(&self, payload: &SupplierPayload) -> Result<SupplierRecord, ApiError> {
        let body = encode(payload)?;
        let resp = self
            .send(ApiRequest::new(Method::POST, SUPPLIERS_PATH).with_json(body))
            .await?;
        decode(&resp)
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn update(
        &self,
        id: &str,
        payload: &SupplierPayload,
    ) -> Result<SupplierRecord, ApiError> {
        let body = encode(payload)?;
        let resp = self
            .send(ApiRequest::new(Method::PUT, item_path(id)).with_json(body))
            .await?;
        decode(&resp)
    }

    #[tracing::instrument(skip(self))]
    pub async fn retrieve(&self, id: &str) -> Result<SupplierRecord, ApiError> {
        let resp = self.send(ApiRequest::new(Method::GET, item_path(id))).await?;
        decode(&resp)
    }

    /// The body of a successful delete is ignored.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.send(ApiRequest::new(Method::DELETE, item_path(id)))
            .await
            .map(|_| ())
    }

    #[tracing::instrument(skip_all, fields(query = %query.to_query_string()))]
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SupplierRecord>, ApiError> {
        let resp = self
            .send(ApiRequest::new(Method::GET, search_path(query)))
            .await?;
        decode(&resp)
    }

    #[tracing::instrument(skip(self))]
    pub async fn mark_preferred(&self, id: &str) -> Result<SupplierRecord, ApiError> {
        let path = format!("{}/preferred", item_path(id));
        let resp = self.send(ApiRequest::new(Method::PUT, path)).await?;
        decode(&resp)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_products(&self, id: &str) -> Result<Vec<Product>, ApiError> {
        let path = format!("{}/products", item_path(id));
        let resp = self.send(ApiRequest::new(Method::GET, path)).await?;
        decode(&resp)
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let resp = self.transport.execute(request).await?;
        if resp.status.is_success() {
            return Ok(resp);
        }
        let message = serde_json::from_str::<ErrorBody>(&resp.body)
            .ok()
            .and_then(|b| b.message);
        Err(ApiError::Status {
            status: resp.status,
            message,
        })
    }
}

fn encode<S: serde::Serialize>(value: &S) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|source| ApiError::Encode { source })
}

fn decode<D: DeserializeOwned>(resp: &ApiResponse) -> Result<D, ApiError> {
    serde_json::from_str(&resp.body).map_err(|source| ApiError::Decode { source })
}

#[cfg(test)]
mod tests {
    use super::scripted::ScriptedTransport;
    use super::*;

    #[tokio::test]
    async fn non_success_status_carries_server_message() {
        let transport = ScriptedTransport::new();
        transport.reply(
            404,
            r#"{"status":404,"error":"Not Found","message":"Supplier with id '9' was not found."}"#,
        );
        let client = SupplierClient::new(transport);

        let err = client.retrieve("9").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Status {
                status: StatusCode::NOT_FOUND,
                ..
            }
        ));
        assert_eq!(err.user_message(), "Supplier with id '9' was not found.");
    }

    #[tokio::test]
    async fn missing_message_falls_back_to_status_line() {
        let transport = ScriptedTransport::new();
        transport.reply(500, "<html>oops</html>");
        let client = SupplierClient::new(transport);

        let err = client.retrieve("1").await.unwrap_err();
        assert_eq!(err.user_message(), "HTTP 500 Internal Server Error");
    }

    #[test]
    fn status_error_text_carries_server_message() {
        let err = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: Some("db down".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error: db down");
        assert_eq!(err.user_message(), "db down");

        let bare = ApiError::Status {
            status: StatusCode::BAD_GATEWAY,
            message: None,
        };
        assert_eq!(bare.to_string(), "HTTP 502 Bad Gateway");
    }

    #[test]
    fn transport_error_text_does_not_repeat_url() {
        let err = ApiError::Transport {
            url: "http://svc/suppliers".to_string(),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
        };
        assert_eq!(err.to_string(), "request failed: connection refused");
    }

    #[tokio::test]
    async fn delete_ignores_empty_no_content_body() {
        let transport = ScriptedTransport::new();
        transport.reply(204, "");
        let client = SupplierClient::new(transport);

        client.delete("4").await.unwrap();
        let sent = client.transport().requests();
        assert_eq!(sent[0].method, Method::DELETE);
        assert_eq!(sent[0].path, "/suppliers/4");
        assert_eq!(sent[0].body, None);
    }

    #[tokio::test]
    async fn subordinate_paths() {
        let transport = ScriptedTransport::new();
        transport.reply(200, r#"{"id":2,"name":"n","category":"c","preferred":"True"}"#);
        transport.reply(200, r#"[{"id":1,"supplier_id":2,"name":"bolt"}]"#);
        let client = SupplierClient::new(transport);

        let rec = client.mark_preferred("2").await.unwrap();
        assert!(rec.is_preferred());
        let products = client.list_products("2").await.unwrap();
        assert_eq!(products.len(), 1);

        let sent = client.transport().requests();
        assert_eq!(sent[0].method, Method::PUT);
        assert_eq!(sent[0].path, "/suppliers/2/preferred");
        assert_eq!(sent[1].path, "/suppliers/2/products");
    }

    #[tokio::test]
    async fn undecodable_success_body_is_a_decode_error() {
        let transport = ScriptedTransport::new();
        transport.reply(200, "not json");
        let client = SupplierClient::new(transport);

        assert!(matches!(
            client.retrieve("1").await,
            Err(ApiError::Decode { .. })
        ));
    }
}

//! Camada de transporte HTTP
//!
//! O cliente só conhece o trait [`HttpTransport`]. Respostas não-2xx voltam
//! como [`TransportResponse`] normais; quem traduz para
//! [`ClickUpError::ApiError`](crate::ClickUpError::ApiError) é o cliente. Falhas de
//! rede voltam como `ClickUpError::HttpError` sem tradução.

use crate::error::{ClickUpError, Result};
use crate::request::{PreparedRequest, RequestBody};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::time::Duration;

/// Resposta crua do transporte
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    /// Reason phrase canônica do status (ex: "Too Many Requests")
    pub status_text: String,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            status_text: status_text(status),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Reason phrase para um status HTTP; o próprio número quando desconhecido
pub fn status_text(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

/// Executa uma requisição já preparada
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse>;
}

/// Transporte padrão sobre `reqwest`
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http_client: HttpClient,
}

impl ReqwestTransport {
    /// Cria o transporte com timeouts explícitos
    ///
    /// # Timeouts (padrão do cliente)
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn with_timeouts(total_timeout_secs: u64, connect_timeout_secs: u64) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(total_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
            .map_err(|e| ClickUpError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    /// Reaproveita um `reqwest::Client` já configurado
    pub fn from_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse> {
        let mut builder = self
            .http_client
            .request(request.method.into(), request.url)
            .headers(request.headers);

        builder = match request.body {
            Some(RequestBody::Json(value)) => builder.body(serde_json::to_vec(&value)?),
            Some(RequestBody::Multipart(form)) => builder.multipart(form),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_u16().to_string()),
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_uses_canonical_reason() {
        assert_eq!(status_text(429), "Too Many Requests");
        assert_eq!(status_text(404), "Not Found");
        assert_eq!(status_text(599), "599");
    }

    #[test]
    fn test_transport_response_success_range() {
        assert!(TransportResponse::new(200, "{}").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(401, "").is_success());
    }

    #[test]
    fn test_transport_with_custom_timeouts() {
        assert!(ReqwestTransport::with_timeouts(60, 10).is_ok());
    }
}

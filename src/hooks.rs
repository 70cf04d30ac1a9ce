//! Interceptors: pontos de extensão antes e depois de cada requisição
//!
//! O cliente mantém uma lista ordenada de interceptors globais e cada
//! [`RequestSpec`](crate::request::RequestSpec) pode trazer os seus.
//! Os da chamada rodam primeiro, depois os globais, tanto no
//! `on_request` quanto no `on_response`.
//!
//! ```rust,no_run
//! use clickup::hooks::{on_request_fn, Interceptor};
//! use clickup::ClickUpClient;
//!
//! # fn example() -> clickup::Result<()> {
//! let client = ClickUpClient::builder()
//!     .token("pk_token")
//!     .interceptor(on_request_fn(|req| req.set_header("X-Trace-Id", "abc123")))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::request::{Method, PreparedRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Dados da requisição disponíveis depois do envio
#[derive(Debug, Clone)]
pub struct RequestInfo {
    pub method: Method,
    pub url: Url,
    pub status: u16,
}

/// Ponto de extensão do pipeline de requisições
///
/// Um erro retornado por qualquer método interrompe a chamada e é
/// repassado ao caller.
#[async_trait]
pub trait Interceptor: Send + Sync {
    /// Chamado com a requisição final, antes do rate limiter.
    /// Pode alterar headers, URL ou corpo.
    async fn on_request(&self, _request: &mut PreparedRequest) -> Result<()> {
        Ok(())
    }

    /// Recebe o corpo já parseado; o valor retornado substitui o corpo.
    async fn on_response(&self, _info: &RequestInfo, body: Value) -> Result<Value> {
        Ok(body)
    }
}

struct RequestFn<F>(F);

#[async_trait]
impl<F> Interceptor for RequestFn<F>
where
    F: Fn(&mut PreparedRequest) -> Result<()> + Send + Sync,
{
    async fn on_request(&self, request: &mut PreparedRequest) -> Result<()> {
        (self.0)(request)
    }
}

struct ResponseFn<F>(F);

#[async_trait]
impl<F> Interceptor for ResponseFn<F>
where
    F: Fn(&RequestInfo, Value) -> Result<Value> + Send + Sync,
{
    async fn on_response(&self, info: &RequestInfo, body: Value) -> Result<Value> {
        (self.0)(info, body)
    }
}

/// Interceptor síncrono de requisição a partir de uma closure
pub fn on_request_fn<F>(f: F) -> Arc<dyn Interceptor>
where
    F: Fn(&mut PreparedRequest) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(RequestFn(f))
}

/// Interceptor síncrono de resposta a partir de uma closure
pub fn on_response_fn<F>(f: F) -> Arc<dyn Interceptor>
where
    F: Fn(&RequestInfo, Value) -> Result<Value> + Send + Sync + 'static,
{
    Arc::new(ResponseFn(f))
}

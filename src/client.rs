//! Cliente HTTP para a API do ClickUp
//!
//! Todas as rotas passam por [`ClickUpClient::request`], que:
//!
//! 1. monta a URL final (base + path + query com notação `chave[]`)
//! 2. combina headers do caller, headers padrão e `Content-Type`
//! 3. injeta o token em `Authorization`, sobrescrevendo o do caller
//! 4. converte as chaves do corpo JSON para snake_case
//! 5. roda os interceptors `on_request`
//! 6. espera vaga no rate limiter e envia
//! 7. traduz respostas não-2xx para [`ClickUpError::ApiError`] ou roda os
//!    interceptors `on_response` sobre o corpo parseado
//!
//! Não há retry em nenhum ponto: uma falha volta ao caller exatamente uma vez.

use crate::config::{token_from_env, ClientConfig};
use crate::error::{ClickUpError, Result};
use crate::hooks::{Interceptor, RequestInfo};
use crate::query::{append_to_url, QueryParams};
use crate::request::{parse_header, PreparedRequest, RequestBody, RequestSpec};
use crate::scheduler::RequestScheduler;
use crate::transport::{HttpTransport, ReqwestTransport, TransportResponse};
use crate::utils::snake_case_keys;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Cliente para interagir com a API do ClickUp
///
/// Barato de clonar: todas as cópias compartilham configuração, token e
/// rate limiter.
#[derive(Clone)]
pub struct ClickUpClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    base_url: Url,
    default_headers: HeaderMap,
    token: RwLock<Option<String>>,
    scheduler: RequestScheduler,
    transport: Arc<dyn HttpTransport>,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl ClickUpClient {
    /// Cria um cliente com o token informado e os defaults
    ///
    /// - URL base: `https://api.clickup.com/api/v2/`
    /// - Rate limit: 100 requisições / 60s
    /// - Timeouts: 30s total, 5s connect
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::builder().token(api_token).build()
    }

    /// Cria um cliente a partir de `.env`, `clickup.*` e variáveis `CLICKUP_*`
    pub fn from_env() -> Result<Self> {
        Self::builder().config(ClientConfig::load()?).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Configuração usada na construção
    ///
    /// O token não fica aqui (`config().token` é sempre `None`); use
    /// [`token`](Self::token).
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Obtém a URL base da API
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn scheduler(&self) -> &RequestScheduler {
        &self.inner.scheduler
    }

    /// Token atual, se houver
    pub fn token(&self) -> Option<String> {
        self.inner
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Troca o token de acesso
    ///
    /// Vale para toda requisição ainda não enviada, inclusive as que estão
    /// esperando no rate limiter. Requisições já em voo não são alteradas.
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        *self.inner.token.write().unwrap_or_else(PoisonError::into_inner) =
            Some(token).filter(|t| !t.is_empty());
    }

    pub fn clear_token(&self) {
        *self.inner.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Resolve `path` contra a URL base e anexa a query codificada
    pub fn build_url(&self, path: &str, query: Option<&QueryParams>) -> Result<Url> {
        let mut url = self.inner.base_url.join(path)?;

        if let Some(query) = query {
            append_to_url(&mut url, query)?;
        }

        Ok(url)
    }

    /// Executa uma requisição e devolve o corpo JSON da resposta
    ///
    /// Corpo vazio vira `Value::Null`.
    pub async fn request(&self, spec: RequestSpec) -> Result<Value> {
        let parts = spec.into_parts();
        let token = self.token();

        let mut prepared = PreparedRequest {
            method: parts.method,
            url: self.build_url(&parts.path, parts.query.as_ref())?,
            headers: HeaderMap::new(),
            body: parts.body.map(normalize_body),
        };

        let multipart = prepared.body.as_ref().is_some_and(RequestBody::is_multipart);
        prepared.headers = self.build_headers(&parts.headers, multipart)?;
        apply_auth(&mut prepared.headers, token.as_deref())?;

        let interceptors: Vec<&Arc<dyn Interceptor>> = parts
            .interceptors
            .iter()
            .chain(self.inner.interceptors.iter())
            .collect();

        for interceptor in &interceptors {
            interceptor.on_request(&mut prepared).await?;
        }

        self.inner
            .scheduler
            .submit(self.dispatch(prepared, token, &interceptors))
            .await
    }

    /// Como [`request`](Self::request), desserializando a resposta em `T`
    pub async fn request_json<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        let value = self.request(spec).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn dispatch(
        &self,
        mut prepared: PreparedRequest,
        token_at_prepare: Option<String>,
        interceptors: &[&Arc<dyn Interceptor>],
    ) -> Result<Value> {
        // O token pode ter mudado enquanto a chamada esperava na fila
        let token = self.token();
        if token != token_at_prepare {
            match token.as_deref() {
                Some(_) => apply_auth(&mut prepared.headers, token.as_deref())?,
                None => {
                    prepared.headers.remove(AUTHORIZATION);
                }
            }
        }

        let method = prepared.method;
        let url = prepared.url.clone();

        tracing::debug!("{} {}", method, url);

        let response = self.inner.transport.send(prepared).await?;
        let info = RequestInfo {
            method,
            url,
            status: response.status,
        };

        if !response.is_success() {
            return Err(api_error(&info, &response));
        }

        let mut body = parse_body(&response.body)?;
        for interceptor in interceptors {
            body = interceptor.on_response(&info, body).await?;
        }

        Ok(body)
    }

    /// Headers do caller, completados pelos headers padrão (o caller vence)
    fn build_headers(&self, caller: &[(String, String)], multipart: bool) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(caller.len() + self.inner.default_headers.len() + 2);

        for (name, value) in caller {
            let (name, value) = parse_header(name, value)?;
            headers.insert(name, value);
        }

        for (name, value) in self.inner.default_headers.iter() {
            if !headers.contains_key(name) {
                headers.insert(name.clone(), value.clone());
            }
        }

        if multipart {
            // O transporte escreve o Content-Type com o boundary correto
            headers.remove(CONTENT_TYPE);
        } else if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }

        Ok(headers)
    }

    /// Acesso às rotas de autorização (`oauth/token`, `user`, `team`)
    pub fn authorization(&self) -> crate::routes::Authorization<'_> {
        crate::routes::Authorization::new(self)
    }

    pub fn team(&self) -> crate::routes::Team<'_> {
        crate::routes::Team::new(self)
    }

    pub fn space(&self) -> crate::routes::Space<'_> {
        crate::routes::Space::new(self)
    }

    pub fn folder(&self) -> crate::routes::Folder<'_> {
        crate::routes::Folder::new(self)
    }

    pub fn goal(&self) -> crate::routes::Goal<'_> {
        crate::routes::Goal::new(self)
    }

    pub fn group(&self) -> crate::routes::Group<'_> {
        crate::routes::Group::new(self)
    }

    pub fn key_result(&self) -> crate::routes::KeyResult<'_> {
        crate::routes::KeyResult::new(self)
    }

    pub fn list(&self) -> crate::routes::List<'_> {
        crate::routes::List::new(self)
    }

    pub fn task(&self) -> crate::routes::Task<'_> {
        crate::routes::Task::new(self)
    }

    pub fn checklist(&self) -> crate::routes::Checklist<'_> {
        crate::routes::Checklist::new(self)
    }

    pub fn comment(&self) -> crate::routes::Comment<'_> {
        crate::routes::Comment::new(self)
    }

    pub fn view(&self) -> crate::routes::View<'_> {
        crate::routes::View::new(self)
    }

    pub fn webhook(&self) -> crate::routes::Webhook<'_> {
        crate::routes::Webhook::new(self)
    }
}

impl std::fmt::Debug for ClickUpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickUpClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("has_token", &self.token().is_some())
            .field("scheduler", &self.inner.scheduler)
            .field("interceptors", &self.inner.interceptors.len())
            .finish()
    }
}

/// Builder do [`ClickUpClient`]
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    interceptors: Vec<Arc<dyn Interceptor>>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    /// Substitui a configuração inteira
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn rate_limit(mut self, max_requests: u32, interval: Duration) -> Self {
        self.config.rate_limit.max_requests = max_requests;
        self.config.rate_limit.interval_ms = interval.as_millis().min(u64::MAX as u128) as u64;
        self
    }

    pub fn timeouts(mut self, total_timeout_secs: u64, connect_timeout_secs: u64) -> Self {
        self.config.timeout_secs = total_timeout_secs;
        self.config.connect_timeout_secs = connect_timeout_secs;
        self
    }

    /// Header enviado em toda requisição, a menos que o caller informe o mesmo
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(name.into(), value.into());
        self
    }

    /// Adiciona um interceptor global (executado na ordem de registro)
    pub fn interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Usa um transporte próprio no lugar do `reqwest` padrão
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<ClickUpClient> {
        let mut config = self.config;
        let base_url = config.parsed_base_url()?;

        if config.rate_limit.max_requests == 0 || config.rate_limit.interval_ms == 0 {
            return Err(ClickUpError::config("rate_limit values must be at least 1"));
        }

        // O token passa a viver só no cliente (ver `token()` / `set_token()`)
        let token = config.token.take().filter(|t| !t.is_empty()).or_else(token_from_env);

        let mut default_headers = HeaderMap::with_capacity(config.default_headers.len());
        for (name, value) in &config.default_headers {
            let (name, value) = parse_header(name, value)?;
            default_headers.insert(name, value);
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::with_timeouts(
                config.timeout_secs,
                config.connect_timeout_secs,
            )?),
        };

        let scheduler = RequestScheduler::new(config.rate_limit.max_requests, config.rate_limit.interval());

        tracing::debug!(
            base_url = %base_url,
            has_token = token.is_some(),
            "ClickUp client criado"
        );

        Ok(ClickUpClient {
            inner: Arc::new(ClientInner {
                token: RwLock::new(token),
                config,
                base_url,
                default_headers,
                scheduler,
                transport,
                interceptors: self.interceptors,
            }),
        })
    }
}

fn normalize_body(body: RequestBody) -> RequestBody {
    match body {
        RequestBody::Json(value) => RequestBody::Json(snake_case_keys(value)),
        multipart => multipart,
    }
}

/// Sobrescreve `Authorization` com o token do cliente
fn apply_auth(headers: &mut HeaderMap, token: Option<&str>) -> Result<()> {
    if let Some(token) = token {
        let mut value = HeaderValue::from_str(token)
            .map_err(|_| ClickUpError::InvalidHeader("Authorization: token is not a valid header value".into()))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(())
}

fn parse_body(bytes: &[u8]) -> Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Traduz uma resposta não-2xx para `ClickUpError::ApiError`
///
/// Envelope de erro da API: `{ "err": "...", "ECODE": "..." }`.
fn api_error(info: &RequestInfo, response: &TransportResponse) -> ClickUpError {
    let payload: Option<Value> = serde_json::from_slice(&response.body).ok();

    let api_message = payload.as_ref().and_then(|json| {
        json.get("err")
            .or_else(|| json.get("error"))
            .or_else(|| json.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
    });

    let message = match api_message {
        Some(msg) => format!("{}: {}", response.status_text, msg),
        None => response.status_text.clone(),
    };

    let code = payload.as_ref().and_then(|json| {
        json.get("code")
            .or_else(|| json.get("ECODE"))
            .and_then(Value::as_str)
            .map(str::to_string)
    });

    tracing::warn!(
        status = response.status,
        code = code.as_deref().unwrap_or("-"),
        "ClickUp API error on {} {}: {}",
        info.method,
        info.url.path(),
        message
    );

    ClickUpError::ApiError {
        status: response.status,
        message,
        code,
    }
}

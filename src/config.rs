//! Configuração do cliente ClickUp
//!
//! A configuração é montada uma vez, na construção do cliente, aplicando os
//! defaults embutidos por baixo das opções do usuário (ver
//! [`merge`](crate::utils::merge)). Depois disso é imutável; só o token pode
//! ser trocado, pelo próprio cliente.
//!
//! ## Fontes (em [`ClientConfig::load`])
//!
//! 1. `.env` local (via `dotenvy`), se existir
//! 2. arquivo `clickup.{toml,yaml,json}` opcional
//! 3. variáveis `CLICKUP_*` (`CLICKUP_BASE_URL`, `CLICKUP_RATE_LIMIT__MAX_REQUESTS`, ...)
//! 4. `CLICKUP_TOKEN` como fallback do token

use crate::error::{ClickUpError, Result};
use crate::utils::merge;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api/v2/";
pub const DEFAULT_MAX_REQUESTS: u32 = 100;
pub const DEFAULT_INTERVAL_MS: u64 = 60_000;
pub const TOKEN_ENV_VAR: &str = "CLICKUP_TOKEN";

const ENV_PREFIX: &str = "CLICKUP";
const CONFIG_FILE: &str = "clickup";

/// Limite de requisições por intervalo
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub interval_ms: u64,
}

impl RateLimitConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_MAX_REQUESTS,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default)]
    pub default_headers: BTreeMap<String, String>,
    #[serde(default)]
    pub token: Option<String>,
    pub rate_limit: RateLimitConfig,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_headers: BTreeMap::new(),
            token: None,
            rate_limit: RateLimitConfig::default(),
            timeout_secs: 30,
            connect_timeout_secs: 5,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .field("has_token", &self.token.is_some())
            .field("rate_limit", &self.rate_limit)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Defaults embutidos, no formato usado pelo merge
    pub fn defaults() -> Value {
        json!({
            "base_url": DEFAULT_BASE_URL,
            "default_headers": {},
            "token": null,
            "rate_limit": {
                "max_requests": DEFAULT_MAX_REQUESTS,
                "interval_ms": DEFAULT_INTERVAL_MS
            },
            "timeout_secs": 30,
            "connect_timeout_secs": 5
        })
    }

    /// Monta a configuração a partir de opções parciais do usuário
    ///
    /// Chaves presentes em `user` sempre vencem; o que faltar vem dos
    /// defaults, inclusive dentro de objetos aninhados.
    ///
    /// ```
    /// use clickup::ClientConfig;
    /// use serde_json::json;
    ///
    /// let config = ClientConfig::from_value(json!({
    ///     "token": "pk_123",
    ///     "rate_limit": { "max_requests": 10 }
    /// })).unwrap();
    ///
    /// assert_eq!(config.rate_limit.max_requests, 10);
    /// assert_eq!(config.rate_limit.interval_ms, 60_000);
    /// ```
    pub fn from_value(user: Value) -> Result<Self> {
        let user = match user {
            Value::Null => json!({}),
            Value::Object(_) => user,
            other => {
                return Err(ClickUpError::config(format!(
                    "client options must be an object, got {}",
                    other
                )))
            }
        };

        let merged = merge(user, &[Self::defaults()]);
        let config: ClientConfig = serde_json::from_value(merged)
            .map_err(|e| ClickUpError::config(format!("invalid client options: {}", e)))?;

        config.validated()
    }

    /// Carrega de `.env`, arquivo `clickup.*` e variáveis `CLICKUP_*`
    pub fn load() -> Result<Self> {
        // .env é opcional
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let user: Value = settings.try_deserialize()?;
        let mut config = Self::from_value(user)?;
        config.token = config.token.filter(|t| !t.is_empty()).or_else(token_from_env);

        tracing::info!(
            base_url = %config.base_url,
            has_token = config.token.is_some(),
            max_requests = config.rate_limit.max_requests,
            interval_ms = config.rate_limit.interval_ms,
            "Configuração do ClickUp carregada"
        );

        Ok(config)
    }

    /// URL base já parseada, sempre terminando em `/`
    ///
    /// Sem a barra final, `Url::join` descartaria o último segmento
    /// (`.../api/v2` + `task` viraria `.../api/task`).
    pub fn parsed_base_url(&self) -> Result<Url> {
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let url = Url::parse(&base)
            .map_err(|e| ClickUpError::config(format!("invalid base_url '{}': {}", self.base_url, e)))?;

        if url.cannot_be_a_base() {
            return Err(ClickUpError::config(format!(
                "base_url '{}' cannot be used as a base",
                self.base_url
            )));
        }

        Ok(url)
    }

    fn validated(self) -> Result<Self> {
        if self.rate_limit.max_requests == 0 {
            return Err(ClickUpError::config("rate_limit.max_requests must be at least 1"));
        }
        if self.rate_limit.interval_ms == 0 {
            return Err(ClickUpError::config("rate_limit.interval_ms must be at least 1"));
        }
        self.parsed_base_url()?;
        Ok(self)
    }
}

/// Token da variável `CLICKUP_TOKEN`, ignorando valor vazio
pub fn token_from_env() -> Option<String> {
    std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty())
}

//! Tipos de erro para o crate clickup

use thiserror::Error;

/// Erros do cliente ClickUp
#[derive(Debug, Error)]
pub enum ClickUpError {
    /// A API do ClickUp rejeitou a requisição (status não-2xx)
    ///
    /// `message` segue o formato `"{status_text}: {err}"` quando a API envia
    /// o envelope `{ "err": ..., "ECODE": ... }`, ou apenas `status_text`.
    #[error("ClickUp API error (status {status}): {message}")]
    ApiError {
        status: u16,
        message: String,
        code: Option<String>,
    },

    /// Falha de transporte (conexão, timeout, TLS). Repassada sem tradução.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Erro de parsing/serialização JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Parâmetro de query com tipo não suportado (objeto, array aninhado)
    #[error("Invalid query parameter '{key}': {reason}")]
    InvalidQuery { key: String, reason: String },

    /// Nome ou valor de header inválido
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// URL base ou path que não pode ser resolvido
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Erro levantado por um interceptor
    #[error("Interceptor error: {0}")]
    HookError(String),
}

impl ClickUpError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn hook(msg: impl Into<String>) -> Self {
        Self::HookError(msg.into())
    }

    /// Status HTTP retornado pela API, se o erro veio dela
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Código de erro da API (`ECODE`), quando presente
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::ApiError { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }

    /// `true` para 429 Too Many Requests
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::ApiError { status: 429, .. })
    }
}

impl From<config::ConfigError> for ClickUpError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, ClickUpError>;

//! Cliente da API ClickUp v2
//!
//! Pipeline único de requisições para todas as rotas:
//!
//! - **Rate limit** com fila FIFO e carry-over da capacidade não usada
//!   ([`scheduler`])
//! - **Query** com arrays em notação `chave[]=valor` ([`query`])
//! - **Corpo JSON** com chaves de primeiro nível convertidas para snake_case
//!   ([`utils::case`])
//! - **Interceptors** antes e depois de cada chamada ([`hooks`])
//! - **Erros da API** traduzidos para [`ClickUpError::ApiError`] com status,
//!   mensagem e código
//!
//! # Exemplo Básico
//!
//! ```rust,no_run
//! use clickup::ClickUpClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> clickup::Result<()> {
//!     // Lê CLICKUP_TOKEN, CLICKUP_BASE_URL, ... do ambiente (ou .env)
//!     let client = ClickUpClient::from_env()?;
//!
//!     let teams = client.authorization().teams().await?;
//!     println!("{}", teams);
//!
//!     let task = client
//!         .list()
//!         .create_task("901", json!({ "name": "Nova task", "dueDate": 1700000000000u64 }), None)
//!         .await?;
//!     println!("Task criada: {}", task["id"]);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod hooks;
pub mod query;
pub mod request;
pub mod routes;
pub mod scheduler;
pub mod transport;
pub mod utils;

// Re-exports principais
pub use client::{ClickUpClient, ClientBuilder};
pub use config::{ClientConfig, RateLimitConfig};
pub use error::{ClickUpError, Result};
pub use hooks::{Interceptor, RequestInfo};
pub use query::QueryParams;
pub use request::{Method, PreparedRequest, RequestBody, RequestSpec};
pub use scheduler::RequestScheduler;
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};

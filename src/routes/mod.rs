//! Rotas da API ClickUp v2
//!
//! Cada módulo é uma fachada fina sobre [`ClickUpClient::request`]: traduz
//! uma chamada de domínio (ex: `client.task().get("abc", None)`) em um
//! [`RequestSpec`] e devolve o JSON da resposta. Nenhuma rota trata erros;
//! tudo volta do cliente como está.
//!
//! ```rust,no_run
//! use clickup::ClickUpClient;
//! use serde_json::json;
//!
//! # async fn example() -> clickup::Result<()> {
//! let client = ClickUpClient::new("pk_token")?;
//!
//! let tasks = client
//!     .list()
//!     .tasks("901", json!({ "archived": false, "statuses": ["open"] }))
//!     .await?;
//!
//! client
//!     .task()
//!     .update("abc", json!({ "dueDate": 1700000000000u64 }), None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod authorization;
mod checklist;
mod comment;
mod folder;
mod goal;
mod group;
mod key_result;
mod list;
mod space;
mod task;
mod team;
mod view;
mod webhook;

pub use authorization::Authorization;
pub use checklist::Checklist;
pub use comment::Comment;
pub use folder::Folder;
pub use goal::Goal;
pub use group::Group;
pub use key_result::KeyResult;
pub use list::List;
pub use space::Space;
pub use task::Task;
pub use team::Team;
pub use view::View;
pub use webhook::Webhook;

use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use serde_json::Value;

/// Estado comum das rotas: o cliente e o segmento fixo do recurso
#[derive(Debug, Clone, Copy)]
pub(crate) struct Route<'c> {
    client: &'c ClickUpClient,
    segment: &'static str,
}

impl<'c> Route<'c> {
    pub(crate) fn new(client: &'c ClickUpClient, segment: &'static str) -> Self {
        Self { client, segment }
    }

    /// `{segment}/{id}` seguido de `rest`, quando houver
    ///
    /// `id` é sempre codificado; ids vindos de `rest` precisam passar por
    /// [`segment`] em quem monta o `rest`.
    pub(crate) fn path(&self, id: &str, rest: &str) -> String {
        let id = segment(id);
        if rest.is_empty() {
            format!("{}/{}", self.segment, id)
        } else {
            format!("{}/{}/{}", self.segment, id, rest)
        }
    }

    pub(crate) async fn send(&self, spec: RequestSpec) -> Result<Value> {
        self.client.request(spec).await
    }
}

/// Codifica um nome livre (tag, por exemplo) para uso como segmento de path
pub(crate) fn segment(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

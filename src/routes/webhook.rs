//! Webhooks existentes
//!
//! Criação e listagem ficam em [`Team`](super::Team), já que dependem do workspace.

use super::Route;
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use serde_json::Value;

pub struct Webhook<'c> {
    route: Route<'c>,
}

impl<'c> Webhook<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, "webhook"),
        }
    }

    /// Atualiza endpoint, eventos ou status de um webhook
    pub async fn update(&self, webhook_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::put(self.route.path(webhook_id, "")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn delete(&self, webhook_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::delete(self.route.path(webhook_id, ""))).await
    }
}

//! Views (lista, board, chat, ...)
//!
//! Views de workspace são criadas e listadas por [`Team`](super::Team).

use super::Route;
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use crate::utils::merge;
use serde_json::{json, Value};

pub struct View<'c> {
    route: Route<'c>,
}

impl<'c> View<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, "view"),
        }
    }

    pub async fn get(&self, view_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::get(self.route.path(view_id, ""))).await
    }

    pub async fn update(&self, view_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::put(self.route.path(view_id, "")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn delete(&self, view_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::delete(self.route.path(view_id, ""))).await
    }

    /// Comentários de uma view do tipo chat
    pub async fn comments(&self, view_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(view_id, "comment")).query(query);
        self.route.send(spec).await
    }

    pub async fn add_comment(&self, view_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(view_id, "comment")).json_value(body);
        self.route.send(spec).await
    }

    /// Tasks visíveis na view; `page` começa em 0 quando não informado
    pub async fn tasks(&self, view_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let query = merge(query.into().unwrap_or_else(|| json!({})), &[json!({ "page": 0 })]);
        let spec = RequestSpec::get(self.route.path(view_id, "task")).query(query);
        self.route.send(spec).await
    }
}

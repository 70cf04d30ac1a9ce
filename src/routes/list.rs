//! Listas e as tasks dentro delas

use super::{segment, Route};
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use serde_json::Value;

pub struct List<'c> {
    route: Route<'c>,
}

impl<'c> List<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, "list"),
        }
    }

    pub async fn get(&self, list_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::get(self.route.path(list_id, ""))).await
    }

    pub async fn update(&self, list_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::put(self.route.path(list_id, "")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn delete(&self, list_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::delete(self.route.path(list_id, ""))).await
    }

    /// Tasks da lista (paginado via `page`)
    pub async fn tasks(&self, list_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(list_id, "task")).query(query);
        self.route.send(spec).await
    }

    /// Cria uma task na lista
    ///
    /// `query` aceita `custom_task_ids` e `team_id`.
    pub async fn create_task(&self, list_id: &str, body: Value, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(list_id, "task"))
            .query(query)
            .json_value(body);
        self.route.send(spec).await
    }

    pub async fn custom_fields(&self, list_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::get(self.route.path(list_id, "field"))).await
    }

    /// Adiciona uma task existente a mais uma lista
    pub async fn add_task(&self, list_id: &str, task_id: &str) -> Result<Value> {
        let path = self.route.path(list_id, &format!("task/{}", segment(task_id)));
        self.route.send(RequestSpec::post(path)).await
    }

    pub async fn remove_task(&self, list_id: &str, task_id: &str) -> Result<Value> {
        let path = self.route.path(list_id, &format!("task/{}", segment(task_id)));
        self.route.send(RequestSpec::delete(path)).await
    }

    pub async fn comments(&self, list_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(list_id, "comment")).query(query);
        self.route.send(spec).await
    }

    pub async fn add_comment(&self, list_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(list_id, "comment")).json_value(body);
        self.route.send(spec).await
    }
}

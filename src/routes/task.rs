//! Tasks
//!
//! A maioria dos métodos aceita `query` com `custom_task_ids` e `team_id`,
//! necessários quando `task_id` é um ID customizado.

use super::{segment, Route};
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use reqwest::multipart::Form;
use serde_json::Value;

pub struct Task<'c> {
    route: Route<'c>,
}

impl<'c> Task<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, "task"),
        }
    }

    pub async fn get(&self, task_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(task_id, "")).query(query);
        self.route.send(spec).await
    }

    pub async fn update(&self, task_id: &str, body: Value, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::put(self.route.path(task_id, ""))
            .query(query)
            .json_value(body);
        self.route.send(spec).await
    }

    pub async fn delete(&self, task_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::delete(self.route.path(task_id, "")).query(query);
        self.route.send(spec).await
    }

    /// Upload de anexo
    ///
    /// O `form` precisa ter a parte `attachment` com o arquivo. O
    /// `Content-Type` com boundary é gerado pelo transporte.
    pub async fn add_attachment(&self, task_id: &str, form: Form, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(task_id, "attachment"))
            .query(query)
            .multipart(form);
        self.route.send(spec).await
    }

    pub async fn comments(&self, task_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(task_id, "comment")).query(query);
        self.route.send(spec).await
    }

    pub async fn add_comment(&self, task_id: &str, body: Value, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(task_id, "comment"))
            .query(query)
            .json_value(body);
        self.route.send(spec).await
    }

    pub async fn create_checklist(&self, task_id: &str, body: Value, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(task_id, "checklist"))
            .query(query)
            .json_value(body);
        self.route.send(spec).await
    }

    /// Define o valor de um custom field (`body` = `{ "value": ... }`)
    pub async fn set_custom_field_value(
        &self,
        task_id: &str,
        field_id: &str,
        body: Value,
        query: impl Into<Option<Value>>,
    ) -> Result<Value> {
        let path = self.route.path(task_id, &format!("field/{}", segment(field_id)));
        self.route.send(RequestSpec::post(path).query(query).json_value(body)).await
    }

    pub async fn remove_custom_field_value(
        &self,
        task_id: &str,
        field_id: &str,
        query: impl Into<Option<Value>>,
    ) -> Result<Value> {
        let path = self.route.path(task_id, &format!("field/{}", segment(field_id)));
        self.route.send(RequestSpec::delete(path).query(query)).await
    }

    pub async fn add_tag(&self, task_id: &str, tag_name: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let path = self.route.path(task_id, &format!("tag/{}", segment(tag_name)));
        self.route.send(RequestSpec::post(path).query(query)).await
    }

    pub async fn remove_tag(&self, task_id: &str, tag_name: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let path = self.route.path(task_id, &format!("tag/{}", segment(tag_name)));
        self.route.send(RequestSpec::delete(path).query(query)).await
    }

    /// `body` = `{ "depends_on": ... }` ou `{ "dependency_of": ... }`
    pub async fn add_dependency(&self, task_id: &str, body: Value, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(task_id, "dependency"))
            .query(query)
            .json_value(body);
        self.route.send(spec).await
    }

    /// A dependência removida é identificada pela query (`depends_on` / `dependency_of`)
    pub async fn remove_dependency(&self, task_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::delete(self.route.path(task_id, "dependency")).query(query);
        self.route.send(spec).await
    }

    pub async fn time_in_status(&self, task_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(task_id, "time_in_status")).query(query);
        self.route.send(spec).await
    }

    /// Tempo em cada status para várias tasks (`task_ids` na query)
    pub async fn bulk_time_in_status(&self, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get("task/bulk_time_in_status/task_ids").query(query);
        self.route.send(spec).await
    }
}

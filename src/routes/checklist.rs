//! Checklists e seus itens

use super::{segment, Route};
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use serde_json::Value;

pub struct Checklist<'c> {
    route: Route<'c>,
}

impl<'c> Checklist<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, "checklist"),
        }
    }

    pub async fn update(&self, checklist_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::put(self.route.path(checklist_id, "")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn delete(&self, checklist_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::delete(self.route.path(checklist_id, ""))).await
    }

    pub async fn create_item(&self, checklist_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(checklist_id, "checklist_item")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn update_item(&self, checklist_id: &str, item_id: &str, body: Value) -> Result<Value> {
        let path = self.route.path(checklist_id, &format!("checklist_item/{}", segment(item_id)));
        self.route.send(RequestSpec::put(path).json_value(body)).await
    }

    pub async fn delete_item(&self, checklist_id: &str, item_id: &str) -> Result<Value> {
        let path = self.route.path(checklist_id, &format!("checklist_item/{}", segment(item_id)));
        self.route.send(RequestSpec::delete(path)).await
    }
}

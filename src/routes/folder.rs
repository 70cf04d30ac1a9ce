//! Folders

use super::Route;
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use serde_json::Value;

pub struct Folder<'c> {
    route: Route<'c>,
}

impl<'c> Folder<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, "folder"),
        }
    }

    pub async fn get(&self, folder_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::get(self.route.path(folder_id, ""))).await
    }

    pub async fn update(&self, folder_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::put(self.route.path(folder_id, "")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn delete(&self, folder_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::delete(self.route.path(folder_id, ""))).await
    }

    pub async fn lists(&self, folder_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(folder_id, "list")).query(query);
        self.route.send(spec).await
    }

    pub async fn create_list(&self, folder_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(folder_id, "list")).json_value(body);
        self.route.send(spec).await
    }
}

//! Spaces

use super::{segment, Route};
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use serde_json::Value;

pub struct Space<'c> {
    route: Route<'c>,
}

impl<'c> Space<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, "space"),
        }
    }

    pub async fn get(&self, space_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::get(self.route.path(space_id, ""))).await
    }

    pub async fn update(&self, space_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::put(self.route.path(space_id, "")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn delete(&self, space_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::delete(self.route.path(space_id, ""))).await
    }

    pub async fn folders(&self, space_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(space_id, "folder")).query(query);
        self.route.send(spec).await
    }

    pub async fn create_folder(&self, space_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(space_id, "folder")).json_value(body);
        self.route.send(spec).await
    }

    /// Listas que não estão em nenhum folder
    pub async fn folderless_lists(&self, space_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(space_id, "list")).query(query);
        self.route.send(spec).await
    }

    pub async fn create_folderless_list(&self, space_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(space_id, "list")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn tags(&self, space_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::get(self.route.path(space_id, "tag"))).await
    }

    pub async fn add_tag(&self, space_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(space_id, "tag")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn remove_tag(&self, space_id: &str, tag_name: &str) -> Result<Value> {
        let path = self.route.path(space_id, &format!("tag/{}", segment(tag_name)));
        self.route.send(RequestSpec::delete(path)).await
    }
}

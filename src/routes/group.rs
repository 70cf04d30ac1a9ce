//! Grupos de usuários (user groups) do workspace

use super::Route;
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use serde_json::Value;

pub struct Group<'c> {
    route: Route<'c>,
}

impl<'c> Group<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, "group"),
        }
    }

    /// Lista grupos; `query` aceita `team_id` e `group_ids`
    pub async fn get(&self, query: impl Into<Option<Value>>) -> Result<Value> {
        self.route.send(RequestSpec::get("group").query(query)).await
    }

    pub async fn update(&self, group_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::put(self.route.path(group_id, "")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn delete(&self, group_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::delete(self.route.path(group_id, ""))).await
    }
}

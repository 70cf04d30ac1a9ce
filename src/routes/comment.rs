use super::Route;
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use serde_json::Value;

pub struct Comment<'c> {
    route: Route<'c>,
}

impl<'c> Comment<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, "comment"),
        }
    }

    pub async fn update(&self, comment_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::put(self.route.path(comment_id, "")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn delete(&self, comment_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::delete(self.route.path(comment_id, ""))).await
    }
}

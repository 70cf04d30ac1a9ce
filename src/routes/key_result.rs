use super::Route;
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use serde_json::Value;

pub struct KeyResult<'c> {
    route: Route<'c>,
}

impl<'c> KeyResult<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, "key_result"),
        }
    }

    /// Atualiza progresso ou nota de um key result (`steps_current`, `note`)
    pub async fn update(&self, key_result_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::put(self.route.path(key_result_id, "")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn delete(&self, key_result_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::delete(self.route.path(key_result_id, ""))).await
    }
}

//! Goals e seus key results
//!
//! Criação e listagem ficam em [`Team`](super::Team).

use super::Route;
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use serde_json::Value;

pub struct Goal<'c> {
    route: Route<'c>,
}

impl<'c> Goal<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, "goal"),
        }
    }

    pub async fn get(&self, goal_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::get(self.route.path(goal_id, ""))).await
    }

    pub async fn update(&self, goal_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::put(self.route.path(goal_id, "")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn delete(&self, goal_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::delete(self.route.path(goal_id, ""))).await
    }

    /// Cria um key result (meta numérica, checkbox, tasks...) dentro do goal
    pub async fn add_key_result(&self, goal_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(goal_id, "key_result")).json_value(body);
        self.route.send(spec).await
    }
}


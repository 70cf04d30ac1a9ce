//! Workspaces (`team` na API v2)

use super::Route;
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use serde_json::Value;

pub struct Team<'c> {
    route: Route<'c>,
}

impl<'c> Team<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, "team"),
        }
    }

    /// Lista os workspaces do usuário
    pub async fn list(&self) -> Result<Value> {
        self.route.send(RequestSpec::get("team")).await
    }

    pub async fn spaces(&self, team_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(team_id, "space")).query(query);
        self.route.send(spec).await
    }

    pub async fn create_space(&self, team_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(team_id, "space")).json_value(body);
        self.route.send(spec).await
    }

    /// Busca tasks no workspace inteiro com filtros
    ///
    /// Filtros em array (`statuses`, `assignees`, `list_ids`, ...) vão como
    /// `statuses[]=a&statuses[]=b`.
    pub async fn filtered_tasks(&self, team_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(team_id, "task")).query(query);
        self.route.send(spec).await
    }

    pub async fn shared_hierarchy(&self, team_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::get(self.route.path(team_id, "shared"))).await
    }

    /// Webhooks criados pelo usuário autenticado
    pub async fn webhooks(&self, team_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::get(self.route.path(team_id, "webhook"))).await
    }

    pub async fn create_webhook(&self, team_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(team_id, "webhook")).json_value(body);
        self.route.send(spec).await
    }

    pub async fn task_templates(&self, team_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(team_id, "taskTemplate")).query(query);
        self.route.send(spec).await
    }

    pub async fn goals(&self, team_id: &str, query: impl Into<Option<Value>>) -> Result<Value> {
        let spec = RequestSpec::get(self.route.path(team_id, "goal")).query(query);
        self.route.send(spec).await
    }

    pub async fn create_goal(&self, team_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(team_id, "goal")).json_value(body);
        self.route.send(spec).await
    }

    /// Views no nível do workspace ("Everything")
    pub async fn views(&self, team_id: &str) -> Result<Value> {
        self.route.send(RequestSpec::get(self.route.path(team_id, "view"))).await
    }

    pub async fn create_view(&self, team_id: &str, body: Value) -> Result<Value> {
        let spec = RequestSpec::post(self.route.path(team_id, "view")).json_value(body);
        self.route.send(spec).await
    }
}

//! OAuth e dados do usuário autenticado

use super::Route;
use crate::client::ClickUpClient;
use crate::error::Result;
use crate::request::RequestSpec;
use serde_json::Value;

pub struct Authorization<'c> {
    route: Route<'c>,
}

impl<'c> Authorization<'c> {
    pub(crate) fn new(client: &'c ClickUpClient) -> Self {
        Self {
            route: Route::new(client, ""),
        }
    }

    /// Troca o `code` do redirect OAuth por um access token
    pub async fn create_token(&self, client_id: &str, client_secret: &str, code: &str) -> Result<Value> {
        let spec = RequestSpec::post("oauth/token")
            .param("client_id", client_id)
            .param("client_secret", client_secret)
            .param("code", code);

        self.route.send(spec).await
    }

    /// Usuário dono do token
    pub async fn user(&self) -> Result<Value> {
        self.route.send(RequestSpec::get("user")).await
    }

    /// Workspaces (teams) acessíveis pelo usuário
    pub async fn teams(&self) -> Result<Value> {
        self.route.send(RequestSpec::get("team")).await
    }
}

//! Descrição de uma requisição: o que as rotas montam e o que o cliente envia

use crate::error::{ClickUpError, Result};
use crate::hooks::Interceptor;
use crate::query::QueryParams;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Métodos HTTP usados pela API do ClickUp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Corpo da requisição
pub enum RequestBody {
    /// Objeto JSON; as chaves de primeiro nível vão para snake_case no envio
    Json(Value),
    /// Payload multipart opaco (upload de anexos). Enviado como está.
    Multipart(Form),
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RequestBody::Json(value) => Some(value),
            RequestBody::Multipart(_) => None,
        }
    }
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestBody::Json(value) => f.debug_tuple("Json").field(value).finish(),
            RequestBody::Multipart(_) => f.write_str("Multipart(..)"),
        }
    }
}

/// Requisição montada por uma rota e consumida uma única vez pelo cliente
///
/// ```
/// use clickup::request::{Method, RequestSpec};
/// use serde_json::json;
///
/// let spec = RequestSpec::get("list/123/task")
///     .param("archived", false)
///     .param("statuses", json!(["open", "done"]));
///
/// assert_eq!(spec.method(), Method::Get);
/// assert_eq!(spec.path(), "list/123/task");
/// ```
#[derive(Default)]
pub struct RequestSpec {
    method: Method,
    path: String,
    query: Option<QueryParams>,
    headers: Vec<(String, String)>,
    body: Option<RequestBody>,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> Option<&QueryParams> {
        self.query.as_ref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Define todos os parâmetros de query de uma vez
    ///
    /// Aceita `Option` para que as rotas repassem parâmetros opcionais
    /// sem `if let`. Um valor que não seja objeto JSON é ignorado.
    pub fn query(mut self, query: impl Into<Option<Value>>) -> Self {
        if let Some(Value::Object(map)) = query.into() {
            self.query = Some(map);
        }
        self
    }

    /// Adiciona um parâmetro de query
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query
            .get_or_insert_with(QueryParams::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Corpo JSON a partir de qualquer valor serializável
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    /// Corpo JSON a partir de um `Value` já pronto
    pub fn json_value(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Interceptor aplicado só a esta chamada, antes dos globais
    pub fn interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub(crate) fn into_parts(self) -> RequestParts {
        RequestParts {
            method: self.method,
            path: self.path,
            query: self.query,
            headers: self.headers,
            body: self.body,
            interceptors: self.interceptors,
        }
    }
}

impl fmt::Debug for RequestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSpec")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

pub(crate) struct RequestParts {
    pub method: Method,
    pub path: String,
    pub query: Option<QueryParams>,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    pub interceptors: Vec<Arc<dyn Interceptor>>,
}

/// Requisição final, pronta para o transporte
///
/// É o que os interceptors recebem em `on_request` e podem alterar
/// (headers, por exemplo) antes do envio.
#[derive(Debug)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

impl PreparedRequest {
    /// Valor de um header como string, se existir e for ASCII visível
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Insere ou substitui um header
    pub fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        let (name, value) = parse_header(name, value)?;
        self.headers.insert(name, value);
        Ok(())
    }
}

pub(crate) fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| ClickUpError::InvalidHeader(format!("{}: {}", name, e)))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|e| ClickUpError::InvalidHeader(format!("{}: {}", name, e)))?;
    Ok((header_name, header_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_method_is_get() {
        assert_eq!(RequestSpec::default().method(), Method::Get);
        assert_eq!(Method::default().as_str(), "GET");
    }

    #[test]
    fn test_param_builds_ordered_query() {
        let spec = RequestSpec::get("team/1/task")
            .param("page", 0)
            .param("orderBy", "created")
            .param("assignees", json!([1, 2]));

        let keys: Vec<&String> = spec.query_params().unwrap().keys().collect();
        assert_eq!(keys, vec!["page", "orderBy", "assignees"]);
    }

    #[test]
    fn test_query_ignores_none_and_non_objects() {
        let spec = RequestSpec::get("team").query(None);
        assert!(spec.query_params().is_none());

        let spec = RequestSpec::get("team").query(json!([1, 2]));
        assert!(spec.query_params().is_none());

        let spec = RequestSpec::get("team").query(json!({"archived": true}));
        assert_eq!(spec.query_params().unwrap()["archived"], json!(true));
    }

    #[test]
    fn test_json_body_from_struct() {
        #[derive(Serialize)]
        struct NewList {
            name: String,
        }

        let spec = RequestSpec::post("folder/1/list")
            .json(&NewList { name: "Backlog".into() })
            .unwrap();

        assert_eq!(spec.body().and_then(|b| b.as_json()), Some(&json!({"name": "Backlog"})));
    }

    #[test]
    fn test_multipart_body_is_flagged() {
        let form = Form::new().text("filename", "a.txt");
        let spec = RequestSpec::post("task/1/attachment").multipart(form);
        assert!(spec.body().unwrap().is_multipart());
    }

    #[test]
    fn test_parse_header_rejects_invalid_values() {
        assert!(parse_header("X-Ok", "value").is_ok());
        assert!(matches!(
            parse_header("bad header", "v"),
            Err(ClickUpError::InvalidHeader(_))
        ));
        assert!(matches!(
            parse_header("X-Bad", "line\nbreak"),
            Err(ClickUpError::InvalidHeader(_))
        ));
    }
}

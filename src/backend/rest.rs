#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;

use crate::backend::{ArcBackend, TodoBackend};
use crate::config::constants::DEFAULT_ENDPOINT;
use crate::config::user_agent;
use crate::models::{BackendError, NewTodo, Todo, TodoId};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time;

/// Client for the `/todos` REST resource.
pub struct RestBackend {
    alias: String,
    endpoint: String,
    timeout: Option<time::Duration>,
    client: reqwest::Client,
}

#[async_trait]
impl TodoBackend for RestBackend {
    fn name(&self) -> &str {
        &self.alias
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, BackendError> {
        let res = self.send(self.request(Method::GET, "/todos")).await?;
        let body = read_body(res).await?;

        // An empty collection is encoded as `null` by the service
        match serde_json::from_str::<Value>(&body)
            .map_err(|e| BackendError::Malformed(format!("parsing todo list: {e}")))?
        {
            Value::Null => Ok(vec![]),
            value @ Value::Array(_) => serde_json::from_value(value)
                .map_err(|e| BackendError::Malformed(format!("parsing todo list: {e}"))),
            other => Err(BackendError::Malformed(format!(
                "expected a list of todos, got {}",
                json_kind(&other)
            ))),
        }
    }

    async fn get_todo(&self, id: TodoId) -> Result<Todo, BackendError> {
        let res = self
            .send(self.request(Method::GET, &format!("/todos/{id}")))
            .await?;
        parse_json(res).await
    }

    async fn create_todo(&self, todo: NewTodo) -> Result<Todo, BackendError> {
        log::trace!("Sending create request: {:?}", todo);
        let req = self.request(Method::POST, "/todos").json(&todo);
        let res = self.send(req).await?;
        parse_json(res).await
    }

    async fn update_todo(&self, todo: Todo) -> Result<Todo, BackendError> {
        log::trace!("Sending update request: {:?}", todo);
        let req = self
            .request(Method::PUT, &format!("/todos/{}", todo.id))
            .json(&todo);
        let res = self.send(req).await?;
        parse_json(res).await
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), BackendError> {
        self.send(self.request(Method::DELETE, &format!("/todos/{id}")))
            .await?;
        Ok(())
    }
}

impl From<RestBackend> for ArcBackend {
    fn from(value: RestBackend) -> Self {
        Arc::new(value)
    }
}

impl RestBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .client
            .request(method, format!("{}{}", self.endpoint, path))
            .header("User-Agent", user_agent());

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        req
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, BackendError> {
        let res = req.send().await.map_err(|e| {
            log::error!("Request to {} failed: {}", self.endpoint, e);
            BackendError::Network(e.to_string())
        })?;

        log::debug!(
            "{} {} -> {}",
            self.alias,
            res.url().path(),
            res.status().as_u16()
        );

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            log::error!("Error response ({}): {}", status, body.trim());
            return Err(BackendError::Status {
                status,
                body: body.trim().to_string(),
            });
        }
        Ok(res)
    }
}

impl Default for RestBackend {
    fn default() -> Self {
        Self {
            alias: "todos".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            client: reqwest::Client::new(),
        }
    }
}

async fn read_body(res: Response) -> Result<String, BackendError> {
    res.text()
        .await
        .map_err(|e| BackendError::Network(format!("reading response body: {e}")))
}

async fn parse_json<T: DeserializeOwned>(res: Response) -> Result<T, BackendError> {
    let body = read_body(res).await?;
    serde_json::from_str(&body).map_err(|e| {
        log::error!("Unexpected response body: {}", body);
        BackendError::Malformed(e.to_string())
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

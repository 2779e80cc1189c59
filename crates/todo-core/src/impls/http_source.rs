//! HttpTaskSource - リモート API からの取得
//!
//! `GET {endpoint}` のレスポンス本文は次の形です:
//!
//! ```json
//! {"todos": [{"id": 1, "todo": "...", "completed": false, "userId": 26}],
//!  "total": 254, "skip": 0, "limit": 30}
//! ```
//!
//! `todos` 以外のフィールドは無視します（ページングは扱わない）。

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{OwnerId, SourceError, Task, TaskId};
use crate::ports::TaskSource;

/// Wire shape of one entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteTodo {
    id: i64,
    todo: String,
    completed: bool,
    user_id: i64,
}

impl From<RemoteTodo> for Task {
    fn from(remote: RemoteTodo) -> Self {
        Task::new(TaskId::new(remote.id), remote.todo, OwnerId::new(remote.user_id))
            .with_completed(remote.completed)
    }
}

#[derive(Debug, Deserialize)]
struct TodosPage {
    todos: Vec<RemoteTodo>,
}

/// Decode a response body into tasks, keeping the remote order.
pub fn decode_tasks(body: &[u8]) -> Result<Vec<Task>, SourceError> {
    let page: TodosPage = serde_json::from_slice(body)?;
    Ok(page.todos.into_iter().map(Task::from).collect())
}

pub struct HttpTaskSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTaskSource {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl TaskSource for HttpTaskSource {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, SourceError> {
        debug!(endpoint = %self.endpoint, "GET tasks");
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        decode_tasks(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

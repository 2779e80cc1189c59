//! StaticTaskSource - インメモリの取得元
//!
//! テストと `--offline` 起動用。固定の一覧、または固定のエラーを返します。

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{SourceError, Task};
use crate::ports::TaskSource;

pub struct StaticTaskSource {
    result: Result<Vec<Task>, SourceError>,
    calls: AtomicUsize,
}

impl StaticTaskSource {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            result: Ok(tasks),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: SourceError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `fetch_tasks` ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskSource for StaticTaskSource {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

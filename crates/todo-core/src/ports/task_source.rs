//! TaskSource port - タスク一覧の取得元
//!
//! 本番では HTTP（`impls::HttpTaskSource`）、テストやオフライン起動では
//! インメモリ（`impls::StaticTaskSource`）を使います。

use async_trait::async_trait;

use crate::domain::{SourceError, Task};

/// TaskSource はリモートのタスク一覧を 1 回読み出す
///
/// # 契約
/// - 成功時は取得したタスクをそのままの順序で返す
/// - 失敗は `SourceError` に分類して返す（再試行はしない）
#[async_trait]
pub trait TaskSource: Send + Sync {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, SourceError>;

    /// Short label for logs (an endpoint URL, "static", ...).
    fn describe(&self) -> String;
}

//! DataLoader - 初回表示時のリモート読み込み
//!
//! # フロー
//! 1. TaskSource::fetch_tasks() を 1 回だけ呼ぶ（ロックの外で await）
//! 2. 成功: LoadPolicy に従って一覧に反映し、Loaded を通知
//! 3. 失敗: 一覧はそのまま、tracing::error! に記録して LoadFailed を通知
//!
//! 再試行・タイムアウト・キャンセルはしません。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;
use tracing::{error, info};

use super::screen::TodoScreen;
use crate::config::LoadPolicy;
use crate::ports::TaskSource;

/// Result of one activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The remote list was applied; `count` is the resulting list length.
    Loaded { count: usize },
    /// The read failed and the collection was left alone.
    Failed { reason: String },
    /// This loader already ran; nothing was fetched.
    Skipped,
}

pub struct DataLoader {
    source: Arc<dyn TaskSource>,
    policy: LoadPolicy,
    started: AtomicBool,
}

impl DataLoader {
    pub fn new(source: Arc<dyn TaskSource>, policy: LoadPolicy) -> Self {
        Self {
            source,
            policy,
            started: AtomicBool::new(false),
        }
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    pub fn has_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    /// Fetch once and populate `screen`. Later calls return `Skipped`.
    pub async fn load(&self, screen: &TodoScreen) -> LoadOutcome {
        if self.started.swap(true, Ordering::AcqRel) {
            return LoadOutcome::Skipped;
        }

        let source = self.source.describe();
        match self.source.fetch_tasks().await {
            Ok(tasks) => {
                let fetched = tasks.len();
                let count = screen.apply_remote(tasks, self.policy).await;
                info!(%source, fetched, count, "tasks loaded");
                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                error!(%source, error = %err, "failed to load tasks");
                let reason = err.to_string();
                screen.report_load_failure(reason.clone());
                LoadOutcome::Failed { reason }
            }
        }
    }

    /// Run [`DataLoader::load`] in the background; gestures keep being served
    /// while the request is in flight.
    pub fn spawn(self: Arc<Self>, screen: TodoScreen) -> JoinHandle<LoadOutcome> {
        tokio::spawn(async move { self.load(&screen).await })
    }
}

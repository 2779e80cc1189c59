//! IdGenerator port - ローカルで作るタスクの ID 採番
//!
//! # 実装
//! - **LengthPlusOne**: 一覧の件数 + 1（既定。衝突チェックなし）
//! - **MaxPlusOne**: 既存 ID の最大値 + 1（削除が入っても衝突しない）

use std::collections::HashSet;

use crate::domain::{Task, TaskId};

/// IdGenerator は新しいタスクの ID を決める
///
/// 採番は現在の一覧だけから決まるので、状態を持たない。
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, tasks: &[Task]) -> TaskId;
}

/// `count + 1`. Collides with an existing id once tasks can be removed or
/// the remote list has gaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthPlusOne;

impl IdGenerator for LengthPlusOne {
    fn next_id(&self, tasks: &[Task]) -> TaskId {
        TaskId::new(tasks.len() as i64 + 1)
    }
}

/// Highest existing id + 1 (1 for an empty list).
///
/// When the highest id is `i64::MAX` the smallest unused positive id is
/// taken instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxPlusOne;

impl IdGenerator for MaxPlusOne {
    fn next_id(&self, tasks: &[Task]) -> TaskId {
        let max = tasks.iter().map(|t| t.id.get()).max().unwrap_or(0);
        match max.checked_add(1) {
            Some(next) => TaskId::new(next.max(1)),
            None => {
                let used: HashSet<i64> = tasks.iter().map(|t| t.id.get()).collect();
                // n 件の一覧なら 1..=n+1 のどこかは必ず空いている
                let free = (1..=i64::MAX)
                    .find(|id| !used.contains(id))
                    .unwrap_or(i64::MAX);
                TaskId::new(free)
            }
        }
    }
}

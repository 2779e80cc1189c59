//! Errors - エラー型と分類
//!
//! - `ListError`: 一覧操作の拒否（インデックス範囲外、モード違い）。
//!   状態は一切変更されないので、呼び出し側はログに残して無視できます。
//! - `SourceError`: リモート取得の失敗。Data Loader がログに記録し、再試行しません。

use thiserror::Error;

use super::Action;

/// Rejected list operation. The collection and edit session are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("index {index} is out of bounds for {len} tasks")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("no edit in progress")]
    NotEditing,

    #[error("an edit is in progress; save or cancel it first")]
    EditInProgress,

    #[error("{0} is not offered right now")]
    ActionUnavailable(Action),
}

/// Failure reading from a task source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err.to_string())
    }
}

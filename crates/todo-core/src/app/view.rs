//! View - 描画面向けのスナップショット
//!
//! 描画側は `ScreenView` を読むだけで、状態を直接触りません。

use serde::Serialize;

use crate::domain::{Action, EditState, TaskId};

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// 1-based position shown before the title.
    pub ordinal: usize,
    pub id: TaskId,
    pub title: String,
    /// Rendered struck through.
    pub completed: bool,
    /// This row is the target of the open edit.
    pub editing: bool,
}

/// Everything the screen draws: the list, the input field and its buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    pub rows: Vec<RowView>,
    pub input: String,
    pub mode: EditState,
    pub actions: Vec<Action>,
}

impl ScreenView {
    pub fn offers(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    pub fn completed_count(&self) -> usize {
        self.rows.iter().filter(|r| r.completed).count()
    }
}

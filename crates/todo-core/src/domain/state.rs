//! State - エディットセッションの状態
//!
//! 入力欄のテキスト（buffer）は「追加」と「編集」の両モードで共有されます。
//! 編集対象と dirty フラグは `Editing` のときだけ意味を持つので、
//! enum のバリアントに閉じ込めています。

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TaskId;

/// EditState はエディットセッションの状態
///
/// # 状態遷移
/// - Idle --begin(i)--> Editing { target: i, dirty: false }
/// - Editing --update(t)--> Editing { target, dirty' }
/// - Editing --commit / cancel--> Idle
/// - Idle --add--> Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum EditState {
    #[default]
    Idle,
    Editing { target: usize, dirty: bool },
}

impl EditState {
    /// Buttons the input row offers in this state.
    ///
    /// Save only appears once the buffer differs from the original title.
    pub fn offered_actions(self) -> &'static [Action] {
        match self {
            EditState::Idle => &[Action::Add],
            EditState::Editing { dirty: true, .. } => &[Action::Save, Action::Cancel],
            EditState::Editing { dirty: false, .. } => &[Action::Cancel],
        }
    }

    pub fn offers(self, action: Action) -> bool {
        self.offered_actions().contains(&action)
    }
}

/// Buttons of the input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Add,
    Save,
    Cancel,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Add => "Add",
            Action::Save => "Save",
            Action::Cancel => "Cancel",
        };
        f.write_str(label)
    }
}

/// EditSession は入力欄と編集状態をまとめて保持
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    state: EditState,
    buffer: String,
    /// Id of the task under edit; the index alone can point at another
    /// task after the list is reloaded.
    target_id: Option<TaskId>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn target_index(&self) -> Option<usize> {
        match self.state {
            EditState::Editing { target, .. } => Some(target),
            EditState::Idle => None,
        }
    }

    pub fn target_id(&self) -> Option<TaskId> {
        self.target_id
    }

    /// Always false while idle.
    pub fn is_dirty(&self) -> bool {
        matches!(self.state, EditState::Editing { dirty: true, .. })
    }

    /// Enter edit mode on `target`, seeding the buffer with its title.
    pub fn begin(&mut self, target: usize, id: TaskId, title: &str) {
        self.buffer = title.to_string();
        self.target_id = Some(id);
        self.state = EditState::Editing {
            target,
            dirty: false,
        };
    }

    /// Replace the buffer. While editing, `original` is the target's current
    /// title and decides the dirty flag (compared after trimming the buffer).
    pub fn update(&mut self, text: String, original: Option<&str>) {
        if let EditState::Editing { target, .. } = self.state {
            let dirty = original.is_none_or(|title| text.trim() != title);
            self.state = EditState::Editing { target, dirty };
        }
        self.buffer = text;
    }

    /// Recompute the dirty flag against a (possibly reloaded) title.
    pub fn refresh_dirty(&mut self, original: &str) {
        if let EditState::Editing { target, .. } = self.state {
            let dirty = self.buffer.trim() != original;
            self.state = EditState::Editing { target, dirty };
        }
    }

    /// Back to an empty idle session.
    pub fn reset(&mut self) {
        self.state = EditState::Idle;
        self.buffer.clear();
        self.target_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle_and_empty() {
        let session = EditSession::new();
        assert_eq!(session.state(), EditState::Idle);
        assert!(!session.is_active());
        assert_eq!(session.target_index(), None);
        assert!(!session.is_dirty());
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn begin_seeds_buffer_and_target() {
        let mut session = EditSession::new();
        session.begin(2, TaskId::new(7), "buy milk");
        assert!(session.is_active());
        assert_eq!(session.target_index(), Some(2));
        assert_eq!(session.target_id(), Some(TaskId::new(7)));
        assert!(!session.is_dirty());
        assert_eq!(session.buffer(), "buy milk");
    }

    #[test]
    fn update_while_idle_never_marks_dirty() {
        let mut session = EditSession::new();
        session.update("walk dog".to_string(), None);
        assert_eq!(session.buffer(), "walk dog");
        assert!(!session.is_dirty());
        assert_eq!(session.state(), EditState::Idle);
    }

    #[test]
    fn update_compares_trimmed_buffer() {
        let mut session = EditSession::new();
        session.begin(0, TaskId::new(1), "buy milk");

        session.update("  buy milk ".to_string(), Some("buy milk"));
        assert!(!session.is_dirty());

        session.update("buy oat milk".to_string(), Some("buy milk"));
        assert!(session.is_dirty());
        assert_eq!(session.buffer(), "buy oat milk");
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = EditSession::new();
        session.begin(1, TaskId::new(1), "x");
        session.update("y".to_string(), Some("x"));
        session.reset();
        assert_eq!(session, EditSession::new());
    }

    #[test]
    fn refresh_dirty_uses_new_title() {
        let mut session = EditSession::new();
        session.begin(0, TaskId::new(1), "buy milk");
        session.update("buy bread".to_string(), Some("buy milk"));
        assert!(session.is_dirty());

        session.refresh_dirty("buy bread");
        assert!(!session.is_dirty());
        assert_eq!(session.buffer(), "buy bread");

        session.reset();
        session.refresh_dirty("anything");
        assert_eq!(session.state(), EditState::Idle);
    }

    #[test]
    fn offered_actions_follow_state() {
        assert_eq!(EditState::Idle.offered_actions(), &[Action::Add]);
        assert_eq!(
            EditState::Editing { target: 0, dirty: false }.offered_actions(),
            &[Action::Cancel]
        );
        assert_eq!(
            EditState::Editing { target: 0, dirty: true }.offered_actions(),
            &[Action::Save, Action::Cancel]
        );
        assert!(!EditState::Idle.offers(Action::Save));
    }
}

//! ListState - 一覧とエディットセッションの正本
//!
//! 同期的なプレーンな状態オブジェクトです。共有や通知は `TodoScreen` が担当し、
//! ここでは名前付き操作と不変条件だけを扱います。
//!
//! # 不変条件
//! - 拒否された操作（`Err`）は一覧もセッションも変更しない
//! - `Editing { target, .. }` の target は常に一覧の範囲内
//! - 新しいタスクは先頭に追加される

use crate::config::{AppConfig, LoadPolicy, TitlePolicy};
use crate::domain::{EditSession, EditState, ListError, OwnerId, Task, TaskId};
use crate::ports::{IdGenerator, LengthPlusOne};

use super::view::{RowView, ScreenView};

pub struct ListState {
    tasks: Vec<Task>,
    session: EditSession,
    owner_id: OwnerId,
    title_policy: TitlePolicy,
    ids: Box<dyn IdGenerator>,
    /// Tasks added locally and not yet covered by a remote load. They sit at
    /// the front of `tasks` because adds prepend and nothing removes.
    local_added: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(
            OwnerId::new(1),
            TitlePolicy::default(),
            Box::new(LengthPlusOne),
        )
    }
}

impl std::fmt::Debug for ListState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListState")
            .field("tasks", &self.tasks)
            .field("session", &self.session)
            .field("owner_id", &self.owner_id)
            .field("title_policy", &self.title_policy)
            .field("local_added", &self.local_added)
            .finish_non_exhaustive()
    }
}

impl ListState {
    pub fn new(owner_id: OwnerId, title_policy: TitlePolicy, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            tasks: Vec::new(),
            session: EditSession::new(),
            owner_id,
            title_policy,
            ids,
            local_added: 0,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.owner_id,
            config.title_policy,
            config.id_policy.generator(),
        )
    }

    /// Seed the collection (tests, fixtures).
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(ListError::IndexOutOfBounds {
                index,
                len: self.tasks.len(),
            })
        }
    }

    /// Toggle(index): flip `completed` on one task. Returns the new value.
    pub fn toggle(&mut self, index: usize) -> Result<bool, ListError> {
        self.check_index(index)?;
        Ok(self.tasks[index].toggle())
    }

    /// BeginEdit(index): load the title into the buffer and enter edit mode.
    /// Starting a new edit while one is open retargets it.
    pub fn begin_edit(&mut self, index: usize) -> Result<(), ListError> {
        self.check_index(index)?;
        let task = &self.tasks[index];
        self.session.begin(index, task.id, &task.title);
        Ok(())
    }

    /// UpdateBuffer(text): returns the dirty flag afterwards.
    pub fn update_buffer(&mut self, text: impl Into<String>) -> bool {
        let original = self
            .session
            .target_index()
            .and_then(|i| self.tasks.get(i))
            .map(|t| t.title.as_str());
        self.session.update(text.into(), original);
        self.session.is_dirty()
    }

    /// Add(): prepend a task built from the trimmed buffer.
    ///
    /// `Ok(None)` when the buffer is empty or whitespace-only; nothing changes
    /// in that case, the buffer included.
    pub fn add(&mut self) -> Result<Option<TaskId>, ListError> {
        if self.session.is_active() {
            return Err(ListError::EditInProgress);
        }
        let title = self.session.buffer().trim();
        if title.is_empty() {
            return Ok(None);
        }

        let id = self.ids.next_id(&self.tasks);
        let task = Task::new(id, title, self.owner_id);
        self.tasks.insert(0, task);
        self.local_added += 1;
        self.session.reset();
        Ok(Some(id))
    }

    /// CommitEdit(): write the buffer into the edited task. Returns its index.
    pub fn commit_edit(&mut self) -> Result<usize, ListError> {
        let EditState::Editing { target, .. } = self.session.state() else {
            return Err(ListError::NotEditing);
        };
        self.check_index(target)?;

        self.tasks[target].title = self.title_policy.apply(self.session.buffer());
        self.session.reset();
        Ok(target)
    }

    /// CancelEdit(): leave edit mode, discarding the buffer.
    pub fn cancel_edit(&mut self) -> Result<(), ListError> {
        if !self.session.is_active() {
            return Err(ListError::NotEditing);
        }
        self.session.reset();
        Ok(())
    }

    /// Apply a freshly fetched remote list. Returns the resulting length.
    ///
    /// An open edit survives only while its row still holds the same task:
    /// a locally added row under `KeepLocal`, or a row with the same id.
    /// Otherwise the edit is cancelled. A surviving edit gets its dirty flag
    /// recomputed against the reloaded title.
    pub fn apply_remote(&mut self, remote: Vec<Task>, policy: LoadPolicy) -> usize {
        let target_was_local = self
            .session
            .target_index()
            .is_some_and(|target| target < self.local_added);

        match policy {
            LoadPolicy::Replace => {
                self.tasks = remote;
            }
            LoadPolicy::KeepLocal => {
                let keep = self.local_added.min(self.tasks.len());
                self.tasks.truncate(keep);
                self.tasks.extend(remote);
            }
        }
        self.local_added = 0;

        if let Some(target) = self.session.target_index() {
            let same_task = match self.tasks.get(target) {
                Some(_) if target_was_local => policy == LoadPolicy::KeepLocal,
                Some(task) => Some(task.id) == self.session.target_id(),
                None => false,
            };
            match self.tasks.get(target) {
                Some(task) if same_task => self.session.refresh_dirty(&task.title),
                _ => {
                    tracing::warn!(
                        index = target,
                        len = self.tasks.len(),
                        "edit target replaced by load; cancelling edit"
                    );
                    self.session.reset();
                }
            }
        }
        self.tasks.len()
    }

    /// Read-only snapshot for the rendering surface.
    pub fn view(&self) -> ScreenView {
        let rows = self
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| RowView {
                ordinal: index + 1,
                id: task.id,
                title: task.title.clone(),
                completed: task.completed,
                editing: self.session.target_index() == Some(index),
            })
            .collect();

        let state = self.session.state();
        ScreenView {
            rows,
            input: self.session.buffer().to_string(),
            mode: state,
            actions: state.offered_actions().to_vec(),
        }
    }
}

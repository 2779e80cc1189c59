//! TodoScreen - 共有ハンドル
//!
//! `ListState` を `Arc<Mutex<..>>` で包み、Data Loader のタスクと
//! ジェスチャー処理の両方から使えるようにします。
//!
//! # ルール
//! - ロック中に await しない（ネットワーク待ちは Loader 側でロックの外）
//! - 状態変更が成功したらロックを外してから `EventSink` に通知する

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::gesture::Gesture;
use super::list_state::ListState;
use super::view::ScreenView;
use crate::config::LoadPolicy;
use crate::domain::{Action, EditSession, ListError, ListEvent, Task, TaskId};
use crate::ports::{EventSink, NoopEventSink};

#[derive(Clone)]
pub struct TodoScreen {
    state: Arc<Mutex<ListState>>,
    sink: Arc<dyn EventSink>,
}

impl TodoScreen {
    pub fn new(state: ListState, sink: Arc<dyn EventSink>) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            sink,
        }
    }

    /// A screen that notifies nobody.
    pub fn detached(state: ListState) -> Self {
        Self::new(state, Arc::new(NoopEventSink))
    }

    fn emit(&self, event: ListEvent) {
        self.sink.emit(&event);
    }

    pub async fn view(&self) -> ScreenView {
        self.state.lock().await.view()
    }

    pub async fn tasks(&self) -> Vec<Task> {
        self.state.lock().await.tasks().to_vec()
    }

    pub async fn session(&self) -> EditSession {
        self.state.lock().await.session().clone()
    }

    pub async fn toggle(&self, index: usize) -> Result<bool, ListError> {
        let completed = self.state.lock().await.toggle(index)?;
        self.emit(ListEvent::Toggled { index, completed });
        Ok(completed)
    }

    pub async fn begin_edit(&self, index: usize) -> Result<(), ListError> {
        self.state.lock().await.begin_edit(index)?;
        self.emit(ListEvent::EditStarted { index });
        Ok(())
    }

    pub async fn update_buffer(&self, text: impl Into<String>) -> bool {
        let dirty = self.state.lock().await.update_buffer(text);
        self.emit(ListEvent::BufferChanged { dirty });
        dirty
    }

    pub async fn add(&self) -> Result<Option<TaskId>, ListError> {
        let added = self.state.lock().await.add()?;
        if let Some(id) = added {
            self.emit(ListEvent::Added { id });
        }
        Ok(added)
    }

    pub async fn commit_edit(&self) -> Result<usize, ListError> {
        let index = self.state.lock().await.commit_edit()?;
        self.emit(ListEvent::EditCommitted { index });
        Ok(index)
    }

    pub async fn cancel_edit(&self) -> Result<(), ListError> {
        self.state.lock().await.cancel_edit()?;
        self.emit(ListEvent::EditCancelled);
        Ok(())
    }

    /// Used by the Data Loader once the remote list arrived.
    pub async fn apply_remote(&self, remote: Vec<Task>, policy: LoadPolicy) -> usize {
        let count = self.state.lock().await.apply_remote(remote, policy);
        self.emit(ListEvent::Loaded { count });
        count
    }

    pub(crate) fn report_load_failure(&self, reason: String) {
        self.emit(ListEvent::LoadFailed { reason });
    }

    /// Route one gesture to its operation.
    ///
    /// A button that is not on screen right now (Save while the buffer is
    /// clean, Add while editing, ...) is rejected with `ActionUnavailable`.
    /// Rejected gestures change nothing and are only logged.
    pub async fn handle(&self, gesture: Gesture) -> Result<(), ListError> {
        debug!(?gesture, "gesture");
        let result = match gesture {
            Gesture::Tap(index) => self.toggle(index).await.map(|_| ()),
            Gesture::LongPress(index) => self.begin_edit(index).await,
            Gesture::TextChange(text) => {
                self.update_buffer(text).await;
                Ok(())
            }
            Gesture::Press(action) => self.press(action).await,
        };
        if let Err(err) = &result {
            warn!(error = %err, "gesture rejected");
        }
        result
    }

    async fn press(&self, action: Action) -> Result<(), ListError> {
        let offered = self.state.lock().await.session().state().offers(action);
        if !offered {
            return Err(ListError::ActionUnavailable(action));
        }
        match action {
            Action::Add => self.add().await.map(|_| ()),
            Action::Save => self.commit_edit().await.map(|_| ()),
            Action::Cancel => self.cancel_edit().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EditState, OwnerId};
    use crate::impls::RecordingSink;

    fn task(id: i64, title: &str) -> Task {
        Task::new(TaskId::new(id), title, OwnerId::new(1))
    }

    fn screen() -> (TodoScreen, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let state = ListState::default().with_tasks(vec![task(1, "buy milk"), task(2, "walk dog")]);
        (TodoScreen::new(state, sink.clone()), sink)
    }

    #[tokio::test]
    async fn tap_toggles_and_notifies() {
        let (screen, sink) = screen();

        screen.handle(Gesture::Tap(1)).await.unwrap();

        assert!(screen.tasks().await[1].completed);
        assert_eq!(
            sink.events(),
            vec![ListEvent::Toggled {
                index: 1,
                completed: true
            }]
        );
    }

    #[tokio::test]
    async fn long_press_edit_save_flow() {
        let (screen, sink) = screen();

        screen.handle(Gesture::LongPress(0)).await.unwrap();
        screen
            .handle(Gesture::TextChange("buy oat milk ".into()))
            .await
            .unwrap();
        assert!(screen.view().await.offers(Action::Save));
        screen.handle(Gesture::Press(Action::Save)).await.unwrap();

        assert_eq!(screen.tasks().await[0].title, "buy oat milk ");
        assert_eq!(screen.session().await.state(), EditState::Idle);
        assert_eq!(
            sink.events(),
            vec![
                ListEvent::EditStarted { index: 0 },
                ListEvent::BufferChanged { dirty: true },
                ListEvent::EditCommitted { index: 0 },
            ]
        );
    }

    #[tokio::test]
    async fn save_is_unavailable_while_clean() {
        let (screen, sink) = screen();
        screen.handle(Gesture::LongPress(0)).await.unwrap();
        sink.clear();

        let result = screen.handle(Gesture::Press(Action::Save)).await;

        assert_eq!(result, Err(ListError::ActionUnavailable(Action::Save)));
        assert!(screen.session().await.is_active());
        assert!(sink.events().is_empty());
    }

    #[tokio::test]
    async fn add_is_unavailable_while_editing() {
        let (screen, _sink) = screen();
        screen.handle(Gesture::LongPress(1)).await.unwrap();

        let result = screen.handle(Gesture::Press(Action::Add)).await;

        assert_eq!(result, Err(ListError::ActionUnavailable(Action::Add)));
        assert_eq!(screen.tasks().await.len(), 2);
    }

    #[tokio::test]
    async fn cancel_restores_idle() {
        let (screen, _sink) = screen();
        let before = screen.tasks().await;

        screen.handle(Gesture::LongPress(1)).await.unwrap();
        screen.handle(Gesture::TextChange("x".into())).await.unwrap();
        screen.handle(Gesture::Press(Action::Cancel)).await.unwrap();

        assert_eq!(screen.tasks().await, before);
        assert_eq!(screen.session().await, EditSession::new());
    }

    #[tokio::test]
    async fn add_via_button() {
        let (screen, sink) = screen();

        screen
            .handle(Gesture::TextChange("  call mum ".into()))
            .await
            .unwrap();
        screen.handle(Gesture::Press(Action::Add)).await.unwrap();

        let tasks = screen.tasks().await;
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].title, "call mum");
        assert_eq!(tasks[0].id, TaskId::new(3));
        assert_eq!(
            sink.events().last(),
            Some(&ListEvent::Added { id: TaskId::new(3) })
        );
    }

    #[tokio::test]
    async fn blank_add_emits_nothing() {
        let (screen, sink) = screen();
        screen.handle(Gesture::Press(Action::Add)).await.unwrap();
        assert!(sink.events().is_empty());
        assert_eq!(screen.tasks().await.len(), 2);
    }

    #[tokio::test]
    async fn out_of_bounds_gestures_are_rejected_safely() {
        let (screen, sink) = screen();
        let before = screen.tasks().await;

        assert!(screen.handle(Gesture::Tap(9)).await.is_err());
        assert!(screen.handle(Gesture::LongPress(9)).await.is_err());

        assert_eq!(screen.tasks().await, before);
        assert!(!screen.session().await.is_active());
        assert!(sink.events().is_empty());
    }
}

//! Events - ドメインイベント
//!
//! 状態が変わるたびに `EventSink` へ送られます。描画側はこれを
//! 再描画のトリガーとして使い、状態そのものは `ScreenView` で読み直します。

use serde::Serialize;

use super::TaskId;

/// ListEvent は一覧で発生したイベント
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ListEvent {
    /// The remote list was applied.
    Loaded { count: usize },
    /// The remote read failed; the collection was left as it was.
    LoadFailed { reason: String },
    Toggled { index: usize, completed: bool },
    Added { id: TaskId },
    EditStarted { index: usize },
    BufferChanged { dirty: bool },
    EditCommitted { index: usize },
    EditCancelled,
}

impl ListEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ListEvent::Loaded { .. } => "loaded",
            ListEvent::LoadFailed { .. } => "load_failed",
            ListEvent::Toggled { .. } => "toggled",
            ListEvent::Added { .. } => "added",
            ListEvent::EditStarted { .. } => "edit_started",
            ListEvent::BufferChanged { .. } => "buffer_changed",
            ListEvent::EditCommitted { .. } => "edit_committed",
            ListEvent::EditCancelled => "edit_cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_tag() {
        let json = serde_json::to_value(ListEvent::Toggled {
            index: 3,
            completed: true,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"event": "toggled", "index": 3, "completed": true})
        );
    }

    #[test]
    fn name_matches_serialized_tag() {
        let event = ListEvent::Added { id: TaskId::new(2) };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], event.name());
        assert_eq!(json["id"], 2);
    }
}

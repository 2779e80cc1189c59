//! EventSink port - イベント通知の抽象化
//!
//! 描画側への再描画トリガー。`emit` は状態のロックを外した後に呼ばれ、
//! ブロックしてはいけません。
//!
//! # 実装
//! - NoopEventSink: 何もしない
//! - `impls::TracingSink` / `impls::ChannelSink` / `impls::RecordingSink`

use crate::domain::ListEvent;

/// EventSink は ListEvent を受け取る
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &ListEvent);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: &ListEvent) {}
}

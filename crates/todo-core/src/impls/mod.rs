//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **HttpTaskSource**: リモート API（reqwest）
//! - **StaticTaskSource**: 固定の一覧 / 固定のエラー（テスト・オフライン用）
//! - **TracingSink / ChannelSink / RecordingSink**: EventSink

pub mod http_source;
pub mod sinks;
pub mod static_source;

pub use self::http_source::{HttpTaskSource, decode_tasks};
pub use self::sinks::{ChannelSink, RecordingSink, TracingSink};
pub use self::static_source::StaticTaskSource;

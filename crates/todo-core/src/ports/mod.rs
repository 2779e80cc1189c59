//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 外部（リモート API、描画面）とのやり取りはすべてここの trait を通します。

pub mod event_sink;
pub mod id_generator;
pub mod task_source;

pub use self::event_sink::{EventSink, NoopEventSink};
pub use self::id_generator::{IdGenerator, LengthPlusOne, MaxPlusOne};
pub use self::task_source::TaskSource;

//! todo-core
//!
//! Core building blocks for the single-screen to-do list.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（Task, ids, EditSession, errors, events）
//! - **ports**: 抽象化レイヤー（TaskSource, IdGenerator, EventSink）
//! - **impls**: 実装（HttpTaskSource, StaticTaskSource, 各種 EventSink）
//! - **app**: アプリケーションロジック（ListState, TodoScreen, DataLoader, AppBuilder）
//! - **config**: 設定（環境変数 + builder）
//! - **observability**: tracing の初期化

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod observability;
pub mod ports;

pub use app::{App, AppBuilder, Gesture, ListState, LoadOutcome, ScreenView, TodoScreen};
pub use config::AppConfig;
pub use domain::{Action, ListError, ListEvent, SourceError, Task, TaskId};

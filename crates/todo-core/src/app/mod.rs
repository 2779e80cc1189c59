//! App - アプリケーション層
//!
//! ports を組み合わせて画面のロジックを実装します。
//!
//! # 主要コンポーネント
//! - **ListState**: 一覧とエディットセッション（同期・プレーン）
//! - **TodoScreen**: 共有ハンドル + ジェスチャー処理 + イベント通知
//! - **DataLoader**: 初回 1 回だけのリモート読み込み
//! - **AppBuilder**: 設定・取得元・通知先のワイヤリング
//! - **ScreenView**: 描画面向けスナップショット

pub mod builder;
pub mod gesture;
pub mod list_state;
pub mod loader;
pub mod screen;
pub mod view;

pub use self::builder::{App, AppBuilder, BuildError};
pub use self::gesture::Gesture;
pub use self::list_state::ListState;
pub use self::loader::{DataLoader, LoadOutcome};
pub use self::screen::TodoScreen;
pub use self::view::{RowView, ScreenView};

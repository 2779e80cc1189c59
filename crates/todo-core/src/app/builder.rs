//! AppBuilder - 画面の構築とワイヤリング
//!
//! # Fail-fast 設計
//! - TaskSource が未設定なら build() が BuildError を返す
//! - HTTP クライアントの初期化失敗も build() 時点で表面化させる

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::list_state::ListState;
use super::loader::{DataLoader, LoadOutcome};
use super::screen::TodoScreen;
use crate::config::AppConfig;
use crate::domain::SourceError;
use crate::impls::{HttpTaskSource, TracingSink};
use crate::ports::{EventSink, TaskSource};

/// BuildError は画面構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no task source configured; call .source(..) or .http_source()")]
    MissingTaskSource,

    #[error("could not create HTTP task source: {0}")]
    HttpSource(#[from] SourceError),
}

/// AppBuilder は TodoScreen と DataLoader を組み立てる
///
/// # 使用例
/// ```ignore
/// let app = AppBuilder::new(AppConfig::from_env()?)
///     .http_source()?
///     .sink(Arc::new(TracingSink))
///     .build()?;
/// let load = app.start();
/// ```
pub struct AppBuilder {
    config: AppConfig,
    source: Option<Arc<dyn TaskSource>>,
    sink: Option<Arc<dyn EventSink>>,
}

impl AppBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            source: None,
            sink: None,
        }
    }

    pub fn source(mut self, source: Arc<dyn TaskSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Use the configured endpoint over HTTP.
    pub fn http_source(self) -> Result<Self, BuildError> {
        let source = HttpTaskSource::new(self.config.endpoint.clone())?;
        Ok(self.source(Arc::new(source)))
    }

    /// Where list events go. Defaults to [`TracingSink`].
    pub fn sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> Result<App, BuildError> {
        let source = self.source.ok_or(BuildError::MissingTaskSource)?;
        let sink = self.sink.unwrap_or_else(|| Arc::new(TracingSink));

        let screen = TodoScreen::new(ListState::from_config(&self.config), sink);
        let loader = Arc::new(DataLoader::new(source, self.config.load_policy));

        Ok(App {
            config: self.config,
            screen,
            loader,
        })
    }
}

/// App は 1 画面分のランタイム
pub struct App {
    pub config: AppConfig,
    pub screen: TodoScreen,
    pub loader: Arc<DataLoader>,
}

impl App {
    /// Activate the screen: kick off the one-time background load.
    pub fn start(&self) -> JoinHandle<LoadOutcome> {
        Arc::clone(&self.loader).spawn(self.screen.clone())
    }
}

//! # Spylog インフラ層
//!
//! ドメイン層が要求する協調者（接続状態、デバッグ情報、ログバックエンド）の
//! 具体的な実装を提供する。
//!
//! ## 責務
//!
//! - **接続状態の追跡**: 接続番号の採番と直近のオートコミット設定の保持
//! - **デバッグヘッダ**: スレッド名と tracing のスパン情報
//! - **ログ出力**: 分類済みメッセージを tracing 経由で出力
//! - **設定**: 環境変数からの読み込み
//!
//! ## 依存関係
//!
//! ```text
//! apps → infra → domain
//!          ↘
//!            shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`config`] - 環境変数からの設定読み込み
//! - [`connection`] - [`ConnectionState`](spylog_domain::connection::ConnectionState) の実装
//! - [`debug_context`] - [`DebugContext`](spylog_domain::debug_context::DebugContext) の実装
//! - [`error`] - インフラ層エラー定義
//! - [`logger`] - 分類とログ出力をつなぐアダプタ
//!
//! ## 使用例
//!
//! ```rust
//! use spylog_infra::{SpyConfig, SpyConnection, TransactionLogger};
//!
//! let logger = TransactionLogger::new(SpyConfig::default());
//! let connection = SpyConnection::open();
//!
//! logger.log_call(&connection, "setAutoCommit(false)", "");
//! let message = logger.log_call(&connection, "close()", "");
//! assert!(message.is_some());
//! ```

pub mod config;
pub mod connection;
pub mod debug_context;
pub mod error;
pub mod logger;

pub use config::SpyConfig;
pub use connection::SpyConnection;
pub use debug_context::ThreadDebugContext;
pub use error::ConfigError;
pub use logger::TransactionLogger;

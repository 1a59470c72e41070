//! # Spylog ドメイン層
//!
//! データベース接続に対して傍受された呼び出しを分類し、1行のログメッセージに
//! 変換するための中核ロジックを定義する。
//!
//! ## 設計方針
//!
//! - **純粋関数**: 分類・正規化・描画はすべて入力のみに依存する
//! - **閉じた分類**: 操作種別は列挙型で表現し、網羅性をコンパイラに検査させる
//! - **協調者はトレイトで受け取る**: 接続状態やデバッグ情報は
//!   [`connection::ConnectionState`] / [`debug_context::DebugContext`] として注入する
//!
//! ## 依存関係の方向
//!
//! ```text
//! apps → infra → domain
//!          ↘
//!            shared
//! ```
//!
//! ドメイン層はネットワークや DB への I/O を一切行わない。
//!
//! ## モジュール構成
//!
//! - [`connection`] - 接続状態の問い合わせインターフェース
//! - [`debug_context`] - デバッグヘッダの取得インターフェース
//! - [`error`] - ログ対象外と判定された理由
//! - [`message`] - 遅延構築されるログメッセージの共通基盤
//! - [`signature`] - `name(arg)` 形式の呼び出しシグネチャ
//! - [`transaction`] - トランザクション制御呼び出しの分類と描画
//!
//! ## 使用例
//!
//! ```rust
//! use spylog_domain::{
//!     connection::FixedConnectionState,
//!     debug_context::NoDebugContext,
//!     message::SqlMessage,
//!     transaction::TransactionMessage,
//! };
//!
//! let connection = FixedConnectionState::new(3, false);
//! let message =
//!     TransactionMessage::apply(&connection, "commit()", "", false, &NoDebugContext).unwrap();
//!
//! assert_eq!(message.formatted_message(), "3. Transaction committed.");
//! ```

pub mod connection;
pub mod debug_context;
pub mod error;
pub mod message;
pub mod signature;
pub mod transaction;

pub use error::NotLoggable;

//! # インフラ層エラー定義
//!
//! 設定の読み込みで発生するエラーを表現する。
//! 分類処理そのものはエラーを返さない（ログ対象外は
//! [`NotLoggable`](spylog_domain::NotLoggable) で表現する）。

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 真偽値として解釈できない値
    ///
    /// 受け付けるのは `true` / `false` / `1` / `0`。
    #[error("{key} は true / false / 1 / 0 のいずれかである必要があります: {value:?}")]
    InvalidBool {
        /// 環境変数名
        key:   &'static str,
        /// 設定されていた値
        value: String,
    },
}

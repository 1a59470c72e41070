//! # ログ対象外の判定理由
//!
//! 分類処理で「ログに出さない」と判断した理由を表現する。
//!
//! ## 設計方針
//!
//! - **エラーではなく結果**: 呼び出し元に例外として伝播させるものではなく、
//!   「出力するものがない」という正当な分類結果
//! - **thiserror 活用**: トレースログに理由を出せるよう `Display` を自動生成
//! - **理由の区別**: 不正な形式、未知のメソッド、ポリシーによる抑制を区別し、
//!   調査時にどの段階で落とされたかを追えるようにする

use thiserror::Error;

/// 呼び出しがログ対象外と判定された理由
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotLoggable {
    /// シグネチャが `name(arg)` 形式になっていない
    ///
    /// `(` を含まない、または `)` で終わらない文字列。
    #[error("不正なシグネチャ: {0}")]
    MalformedSignature(String),

    /// 分類表に存在しないメソッド名
    #[error("分類対象外のメソッド: {0}")]
    UnknownMethod(String),

    /// 分類はできたが、接続状態に基づいて出力を抑制した
    ///
    /// 例: オートコミット有効な接続の `close()`。
    #[error("出力を抑制しました: {0}")]
    Suppressed(&'static str),
}

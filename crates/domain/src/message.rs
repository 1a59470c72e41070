//! # ログメッセージの共通基盤
//!
//! 分類済みイベントからログ本文を組み立てる型の共通インターフェース。
//!
//! ## 一度だけ構築する
//!
//! 本文はログバックエンドが最初に要求したときに構築し、以降はキャッシュを返す。
//! 2回目以降の取得で描画処理が再実行されることはなく、同じ文字列が返る。
//!
//! ```text
//! formatted_message() ──(初回)──→ build_message() ──→ OnceLock に保存
//!                     ──(2回目以降)──────────────────→ 保存済みの &str
//! ```

use std::sync::OnceLock;

/// デバッグヘッダと本文の区切り
pub const NL: &str = "\n";

/// 遅延構築されるログメッセージ
pub trait SqlMessage {
    /// 本文を組み立てる
    ///
    /// [`formatted_message`](SqlMessage::formatted_message) から最大1回だけ呼ばれる。
    fn build_message(&self) -> String;

    /// 構築済み本文の保存先
    fn message_cell(&self) -> &OnceLock<String>;

    /// デバッグヘッダを付与するかどうか
    fn is_debug_enabled(&self) -> bool;

    /// 描画済みの本文を返す
    fn formatted_message(&self) -> &str {
        self.message_cell().get_or_init(|| self.build_message())
    }
}

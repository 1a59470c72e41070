//! # SQL イベントログの構造化ヘルパー
//!
//! `jq` で効率的に調査できるよう、ログフィールドの命名規約とヘルパーマクロを提供する。
//!
//! ## SQL イベント
//!
//! [`log_sql_event!`] マクロで出力する。`event.kind = "sql_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "sql_event")'` でフィルタできる。
//!
//! ## フィールド命名規約
//!
//! ドット記法（`sql.category`、`connection.number`）を使用。tracing の
//! `$($field:ident).+` パターンでサポートされ、JSON 出力でフラットなキーになる。

/// SQL イベントを構造化ログとして出力する。
///
/// `event.kind = "sql_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `sql.category`: 呼び出しカテゴリ（[`sql::category`] の定数を使用）
/// - `sql.operation`: 分類後の操作名
/// - `connection.number`: 接続番号
#[macro_export]
macro_rules! log_sql_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "sql_event",
            $($args)*
        )
    };
}

/// SQL イベントフィールドの定数
pub mod sql {
    /// 呼び出しカテゴリ
    pub mod category {
        pub const TRANSACTION: &str = "transaction";
    }
}

/// ログ対象外となった呼び出しのフィールド定数
pub mod skipped {
    /// 理由の種別
    pub mod reason {
        pub const MALFORMED_SIGNATURE: &str = "malformed_signature";
        pub const UNKNOWN_METHOD: &str = "unknown_method";
        pub const SUPPRESSED: &str = "suppressed";
    }
}

//! # DebugContext（デバッグヘッダ提供者）
//!
//! デバッグ出力が有効なとき、ログメッセージの先頭に付与する呼び出し元情報を
//! 取得するための抽象化。取得方法（スレッド名、スパン情報など）は実装側の責務。

/// デバッグヘッダを提供するトレイト
pub trait DebugContext: Send + Sync {
    fn current_debug_header(&self) -> String;
}

/// 空のヘッダを返す実装
///
/// デバッグ出力を使わない呼び出し元向け。
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDebugContext;

impl DebugContext for NoDebugContext {
    fn current_debug_header(&self) -> String {
        String::new()
    }
}

/// 固定のヘッダを返すテスト用実装
#[derive(Debug, Clone)]
pub struct FixedDebugContext {
    header: String,
}

impl FixedDebugContext {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }
}

impl DebugContext for FixedDebugContext {
    fn current_debug_header(&self) -> String {
        self.header.clone()
    }
}

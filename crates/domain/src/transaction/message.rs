//! # トランザクションメッセージ
//!
//! 分類済みのトランザクション制御イベントと、その描画規則。
//!
//! 出力形式は `<接続番号>. Transaction <本文>`。デバッグ出力が有効な場合は
//! 先頭にデバッグヘッダと改行を付与する。

use std::{fmt, sync::OnceLock};

use super::{Operation, normalize::normalize, reclassify::reclassify};
use crate::{
    NotLoggable,
    connection::ConnectionState,
    debug_context::DebugContext,
    message::{NL, SqlMessage},
    signature::CallSignature,
};

/// トランザクション制御イベントのログメッセージ
///
/// 分類の結果として1呼び出しにつき1つ生成される。本文は
/// [`formatted_message`](SqlMessage::formatted_message) の初回呼び出しで描画され、
/// 以降は同じ文字列を返す。
#[derive(Debug, Clone)]
pub struct TransactionMessage {
    connection_number: u64,
    operation:         Operation,
    parameter:         String,
    result:            String,
    debug_header:      Option<String>,
    message:           OnceLock<String>,
}

impl TransactionMessage {
    /// 分類済みの値からメッセージを組み立てる
    ///
    /// `debug_header` が `Some` の場合、デバッグ出力が有効なメッセージになる。
    pub fn new(
        connection_number: u64,
        operation: Operation,
        parameter: impl Into<String>,
        result: impl Into<String>,
        debug_header: Option<String>,
    ) -> Self {
        Self {
            connection_number,
            operation,
            parameter: parameter.into(),
            result: result.into(),
            debug_header,
            message: OnceLock::new(),
        }
    }

    /// 傍受した呼び出しを分類する
    ///
    /// 1. `name(arg)` を分解する
    /// 2. メソッド名から操作種別を引く
    /// 3. 引数の有無と接続状態で再分類する
    /// 4. 最終的な操作種別に応じて引数を正規化する
    /// 5. デバッグ出力が有効な場合のみデバッグヘッダを取得する
    ///
    /// ログ対象外の場合はその理由を [`NotLoggable`] で返す。
    pub fn classify<C, D>(
        connection: &C,
        method: &str,
        result: &str,
        debug_enabled: bool,
        debug_context: &D,
    ) -> Result<Self, NotLoggable>
    where
        C: ConnectionState + ?Sized,
        D: DebugContext + ?Sized,
    {
        let signature = CallSignature::parse(method)?;
        let matched = Operation::lookup(signature.name())
            .ok_or_else(|| NotLoggable::UnknownMethod(signature.name().to_string()))?;
        let operation = reclassify(matched, signature.argument(), connection)
            .ok_or(NotLoggable::Suppressed(matched.as_str()))?;
        let parameter = normalize(operation, signature.argument());
        let debug_header = debug_enabled.then(|| debug_context.current_debug_header());

        Ok(Self::new(
            connection.connection_number(),
            operation,
            parameter,
            result,
            debug_header,
        ))
    }

    /// 傍受した呼び出しを分類し、ログ対象外なら `None` を返す
    pub fn apply<C, D>(
        connection: &C,
        method: &str,
        result: &str,
        debug_enabled: bool,
        debug_context: &D,
    ) -> Option<Self>
    where
        C: ConnectionState + ?Sized,
        D: DebugContext + ?Sized,
    {
        Self::classify(connection, method, result, debug_enabled, debug_context).ok()
    }

    pub fn connection_number(&self) -> u64 {
        self.connection_number
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// 正規化済みの引数
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn debug_header(&self) -> Option<&str> {
        self.debug_header.as_deref()
    }

    /// 操作種別ごとの本文
    ///
    /// ワイルドカードを置かないこと。操作種別を追加したら描画規則がないとコンパイルが通らない。
    fn tail(&self) -> String {
        let parameter = &self.parameter;
        let result = &self.result;
        match self.operation {
            Operation::SetTransactionIsolation => {
                format!("set transaction isolation to {parameter}.")
            }
            Operation::SetAutoCommit => format!("set auto commit to {parameter}."),
            Operation::SetSavepoint if parameter.is_empty() => format!("set save point {result}."),
            Operation::SetSavepoint => format!("set save point {result} {parameter}."),
            Operation::RollbackSavepoint => format!("rollbacked save point {parameter}."),
            Operation::ReleaseSavepoint => format!("released save point {parameter}."),
            Operation::Commit => "committed.".to_string(),
            Operation::Rollback => "rollbacked.".to_string(),
            Operation::ConnectionClosed => "aborted (connection closed).".to_string(),
        }
    }
}

impl SqlMessage for TransactionMessage {
    fn build_message(&self) -> String {
        let header = match &self.debug_header {
            Some(header) => format!("{header}{NL}"),
            None => String::new(),
        };
        format!(
            "{header}{}. Transaction {}",
            self.connection_number,
            self.tail()
        )
    }

    fn message_cell(&self) -> &OnceLock<String> {
        &self.message
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug_header.is_some()
    }
}

impl fmt::Display for TransactionMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formatted_message())
    }
}

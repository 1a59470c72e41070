//! # トランザクションログ出力
//!
//! 傍受した呼び出しを分類し、ログ対象であれば描画済みの本文を tracing に出力する。
//!
//! ## 出力するログ
//!
//! | 分類結果 | レベル | 内容 |
//! |---------|-------|------|
//! | ログ対象 | INFO | 描画済み本文 + `sql.category` / `sql.operation` / `connection.number` |
//! | ログ対象外 | TRACE | 理由（`skipped.reason`）と元のシグネチャ |
//!
//! ## 接続状態の更新
//!
//! `setAutoCommit(true|false)` を出力した後、接続にその値を記録する。
//! 以降の `close()` はこの値で抑制するかどうかが決まる。

use spylog_domain::{
    NotLoggable,
    connection::ConnectionState,
    debug_context::DebugContext,
    message::SqlMessage,
    transaction::{Operation, TransactionMessage},
};
use spylog_shared::{
    event_log::{skipped::reason, sql::category},
    log_sql_event,
};

use crate::{config::SpyConfig, connection::SpyConnection, debug_context::ThreadDebugContext};

/// トランザクション制御呼び出しのロガー
#[derive(Debug, Clone)]
pub struct TransactionLogger<D = ThreadDebugContext> {
    config:        SpyConfig,
    debug_context: D,
}

impl TransactionLogger {
    /// スレッド・スパン情報をデバッグヘッダに使うロガーを作成する
    pub fn new(config: SpyConfig) -> Self {
        Self::with_debug_context(config, ThreadDebugContext)
    }
}

impl<D: DebugContext> TransactionLogger<D> {
    /// デバッグヘッダの取得方法を指定してロガーを作成する
    pub fn with_debug_context(config: SpyConfig, debug_context: D) -> Self {
        Self {
            config,
            debug_context,
        }
    }

    pub fn config(&self) -> &SpyConfig {
        &self.config
    }

    /// 傍受した呼び出しを分類して出力する
    ///
    /// ログ対象であれば出力したメッセージを返す。
    pub fn log_call(
        &self,
        connection: &SpyConnection,
        method: &str,
        result: &str,
    ) -> Option<TransactionMessage> {
        let message = match TransactionMessage::classify(
            connection,
            method,
            result,
            self.config.debug_enabled,
            &self.debug_context,
        ) {
            Ok(message) => message,
            Err(not_loggable) => {
                tracing::trace!(
                    skipped.reason = reason_of(&not_loggable),
                    connection.number = connection.connection_number(),
                    method,
                    "ログ対象外: {not_loggable}"
                );
                return None;
            }
        };

        log_sql_event!(
            sql.category = category::TRANSACTION,
            sql.operation = message.operation().as_str(),
            connection.number = message.connection_number(),
            "{}",
            message.formatted_message()
        );

        if message.operation() == Operation::SetAutoCommit {
            match message.parameter().parse::<bool>() {
                Ok(enabled) => connection.record_auto_commit(enabled),
                Err(_) => tracing::warn!(
                    connection.number = message.connection_number(),
                    parameter = message.parameter(),
                    "オートコミットの値を解釈できないため接続状態を更新しません"
                ),
            }
        }

        Some(message)
    }
}

fn reason_of(not_loggable: &NotLoggable) -> &'static str {
    match not_loggable {
        NotLoggable::MalformedSignature(_) => reason::MALFORMED_SIGNATURE,
        NotLoggable::UnknownMethod(_) => reason::UNKNOWN_METHOD,
        NotLoggable::Suppressed(_) => reason::SUPPRESSED,
    }
}

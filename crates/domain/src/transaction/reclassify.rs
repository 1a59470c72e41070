//! # 操作の再分類
//!
//! メソッド名による初回の分類を、引数の有無や接続状態に基づいて補正する。
//!
//! - 引数付きの `rollback` はセーブポイントまでのロールバックとみなす。
//!   引数が実在するセーブポイント名かどうかは検証しない
//! - `close` はオートコミット有効な接続では意味のあるトランザクションイベントではないため
//!   出力を抑制する。無効な接続では暗黙のアボートとして出力する

use super::Operation;
use crate::connection::ConnectionState;

/// 再分類を行う
///
/// 出力を抑制すべき場合は `None` を返す。結果は常に [`Operation`] のいずれか。
pub fn reclassify(
    operation: Operation,
    raw_parameter: &str,
    connection: &(impl ConnectionState + ?Sized),
) -> Option<Operation> {
    match operation {
        Operation::Rollback if !raw_parameter.is_empty() => Some(Operation::RollbackSavepoint),
        Operation::ConnectionClosed if connection.last_auto_commit() => None,
        Operation::SetTransactionIsolation
        | Operation::SetAutoCommit
        | Operation::SetSavepoint
        | Operation::RollbackSavepoint
        | Operation::ReleaseSavepoint
        | Operation::Commit
        | Operation::Rollback
        | Operation::ConnectionClosed => Some(operation),
    }
}

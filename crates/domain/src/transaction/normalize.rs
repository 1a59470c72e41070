//! # 引数の正規化
//!
//! 操作種別ごとに、生の引数文字列を表示用の値に変換する。
//! 変換規則を持つのは分離レベルの変更のみで、その他の操作はそのまま通す。

use super::{Operation, isolation::isolation_label};

/// 表示用の引数に変換する
pub fn normalize(operation: Operation, raw_parameter: &str) -> String {
    match operation {
        Operation::SetTransactionIsolation => isolation_label(raw_parameter),
        Operation::SetAutoCommit
        | Operation::SetSavepoint
        | Operation::RollbackSavepoint
        | Operation::ReleaseSavepoint
        | Operation::Commit
        | Operation::Rollback
        | Operation::ConnectionClosed => raw_parameter.to_string(),
    }
}

//! # トランザクション操作の分類表
//!
//! 傍受したメソッド名を、閉じた操作種別 [`Operation`] に対応付ける。
//!
//! 対応表はプロセス内で最初に参照されたときに一度だけ構築し、以降は読み取り専用。
//! 公開するのは共有参照のみで、挿入・削除の経路は存在しない。

use std::{collections::HashMap, sync::LazyLock};

use maplit::hashmap;
use strum::IntoStaticStr;

/// トランザクション制御の操作種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    /// 分離レベルの変更
    SetTransactionIsolation,
    /// オートコミットの切り替え
    SetAutoCommit,
    /// セーブポイントの作成
    SetSavepoint,
    /// セーブポイントまでのロールバック
    ///
    /// 対応するメソッド名はなく、引数付きの `rollback` から再分類される。
    RollbackSavepoint,
    /// セーブポイントの解放
    ReleaseSavepoint,
    /// コミット
    Commit,
    /// トランザクション全体のロールバック
    Rollback,
    /// 接続のクローズ（暗黙のアボート）
    ConnectionClosed,
}

static OPERATIONS: LazyLock<HashMap<&'static str, Operation>> = LazyLock::new(|| {
    hashmap! {
        "setTransactionIsolation" => Operation::SetTransactionIsolation,
        "setAutoCommit" => Operation::SetAutoCommit,
        "setSavepoint" => Operation::SetSavepoint,
        "releaseSavepoint" => Operation::ReleaseSavepoint,
        "commit" => Operation::Commit,
        "rollback" => Operation::Rollback,
        "close" => Operation::ConnectionClosed,
    }
});

impl Operation {
    /// メソッド名から操作種別を引く
    ///
    /// 大文字小文字は区別する。対応表にない名前は `None`
    /// （トランザクション制御の呼び出しではない）。
    pub fn lookup(method_name: &str) -> Option<Self> {
        OPERATIONS.get(method_name).copied()
    }

    /// ログフィールド用の名前
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

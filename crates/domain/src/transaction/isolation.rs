//! # 分離レベルの正規化
//!
//! `setTransactionIsolation` の引数は分離レベルの数値コードを文字列化したもの。
//! これを人間が読めるラベルに変換する。
//!
//! | コード | ラベル |
//! |-------|--------|
//! | `0` | `none` |
//! | `1` | `read_uncommitted` |
//! | `2` | `read_committed` |
//! | `4` | `repeatable_read` |
//! | `8` | `serializable` |
//!
//! 表にないコードは失敗させず `unknown (<コード>)` として出力し、生の値を残す。
//! コードは文字列のまま照合するため、`"08"` や `" 8"` は未知のコードとして扱う。

use std::{collections::HashMap, sync::LazyLock};

use maplit::hashmap;
use strum::IntoStaticStr;

/// トランザクション分離レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum IsolationLevel {
    None,
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

static ISOLATIONS: LazyLock<HashMap<&'static str, IsolationLevel>> = LazyLock::new(|| {
    hashmap! {
        "0" => IsolationLevel::None,
        "1" => IsolationLevel::ReadUncommitted,
        "2" => IsolationLevel::ReadCommitted,
        "4" => IsolationLevel::RepeatableRead,
        "8" => IsolationLevel::Serializable,
    }
});

impl IsolationLevel {
    /// 文字列化されたコードから分離レベルを引く
    pub fn from_code(code: &str) -> Option<Self> {
        ISOLATIONS.get(code).copied()
    }

    /// 表示用ラベル
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// 分離レベルのコードを表示用ラベルに変換する
pub fn isolation_label(code: &str) -> String {
    match IsolationLevel::from_code(code) {
        Some(level) => level.label().to_string(),
        None => format!("unknown ({code})"),
    }
}

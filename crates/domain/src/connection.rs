//! # ConnectionState（接続状態プロバイダ）
//!
//! 分類処理が参照する接続の事実（接続番号・直近のオートコミット設定）を
//! 抽象化し、テストで任意の状態を注入可能にする。
//!
//! 実装は I/O を伴わず、キャッシュ済みの値を即座に返すこと。

/// 接続の状態を提供するトレイト
pub trait ConnectionState: Send + Sync {
    /// ログの接頭辞に使う接続番号
    fn connection_number(&self) -> u64;

    /// 直近に観測したオートコミット設定
    fn last_auto_commit(&self) -> bool;
}

/// 固定の状態を返すテスト用実装
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedConnectionState {
    connection_number: u64,
    last_auto_commit:  bool,
}

impl FixedConnectionState {
    pub const fn new(connection_number: u64, last_auto_commit: bool) -> Self {
        Self {
            connection_number,
            last_auto_commit,
        }
    }
}

impl ConnectionState for FixedConnectionState {
    fn connection_number(&self) -> u64 {
        self.connection_number
    }

    fn last_auto_commit(&self) -> bool {
        self.last_auto_commit
    }
}

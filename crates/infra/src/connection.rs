//! # 傍受対象の接続
//!
//! 傍受層が接続ごとに1つ保持し、分類処理に接続番号と直近のオートコミット設定を提供する。
//!
//! - 接続番号はプロセス内で 1 から順に採番する
//! - オートコミットは接続を開いた時点で有効（JDBC の既定値と同じ）
//! - 値はアトミックに保持し、問い合わせで I/O やロックは発生しない

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use spylog_domain::connection::ConnectionState;

static NEXT_CONNECTION_NUMBER: AtomicU64 = AtomicU64::new(1);

/// 傍受対象の接続の状態
#[derive(Debug)]
pub struct SpyConnection {
    connection_number: u64,
    last_auto_commit:  AtomicBool,
}

impl SpyConnection {
    /// 新しい接続番号を採番して接続を登録する
    pub fn open() -> Self {
        let connection_number = NEXT_CONNECTION_NUMBER.fetch_add(1, Ordering::Relaxed);
        Self::with_number(connection_number)
    }

    /// 接続番号を指定して登録する
    ///
    /// 傍受層が独自の番号体系を持つ場合に使う。
    pub fn with_number(connection_number: u64) -> Self {
        Self {
            connection_number,
            last_auto_commit: AtomicBool::new(true),
        }
    }

    /// `setAutoCommit` で設定された値を記録する
    pub fn record_auto_commit(&self, enabled: bool) {
        self.last_auto_commit.store(enabled, Ordering::Relaxed);
    }
}

impl ConnectionState for SpyConnection {
    fn connection_number(&self) -> u64 {
        self.connection_number
    }

    fn last_auto_commit(&self) -> bool {
        self.last_auto_commit.load(Ordering::Relaxed)
    }
}

//! # Spylog Replay
//!
//! 傍受層が記録した呼び出しを標準入力から読み込み、トランザクションログとして出力する。
//!
//! ## 入力形式
//!
//! 1行に1呼び出し、タブ区切り:
//!
//! ```text
//! <接続キー>\t<シグネチャ>\t<戻り値>
//! 1	setAutoCommit(false)
//! 1	setSavepoint(SP1)	SP1
//! 1	rollback(SP1)
//! 1	close()
//! ```
//!
//! 接続キーごとに接続状態を保持する。数値のキーは未使用ならそのまま接続番号として使い、
//! それ以外のキーには未使用の番号を割り当てる。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `SPYLOG_DEBUG` | No | デバッグヘッダを付与する（デフォルト: `false`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,spylog=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p spylog-replay < calls.tsv
//! ```

mod replay;

use std::io::{self, BufRead};

use anyhow::Context as _;
use replay::Replayer;
use spylog_infra::{SpyConfig, TransactionLogger};
use spylog_shared::observability::{TracingConfig, init_tracing};

fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // 設定読み込み
    let config = SpyConfig::from_env().context("設定の読み込みに失敗しました")?;

    // トレーシング初期化
    let tracing_config = TracingConfig::new(env!("CARGO_PKG_NAME"), config.log_format);
    init_tracing(&tracing_config);
    let _tracing_guard = tracing_config.app_span().entered();

    tracing::info!(debug_enabled = config.debug_enabled, "リプレイを開始します");

    let mut replayer = Replayer::new(TransactionLogger::new(config));
    for line in io::stdin().lock().lines() {
        let line = line.context("標準入力の読み込みに失敗しました")?;
        replayer.replay_line(&line);
    }

    tracing::info!(
        lines = replayer.lines_read(),
        logged = replayer.logged(),
        connections = replayer.connection_count(),
        "リプレイを終了しました"
    );
    Ok(())
}

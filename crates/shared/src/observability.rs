//! # Observability 基盤
//!
//! トレーシング初期化とログ出力形式の設定を提供する。
//! 描画済みの SQL イベントはこの subscriber を経由してログバックエンドに届く。
//!
//! 出力形式の読み込み元（環境変数など）は呼び出し側の設定層が決める。
//! このモジュールは文字列のパースと subscriber の組み立てのみを担う。

/// 既定のフィルタ指定（`RUST_LOG` 未設定時）
pub const DEFAULT_DIRECTIVES: &str = "info,spylog=debug";

/// ログ出力形式
///
/// 値が不正な場合は [`Pretty`](LogFormat::Pretty) にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON 形式（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

impl LogFormat {
    /// 文字列からログ形式をパースする
    ///
    /// 不正な値の場合は [`Pretty`](LogFormat::Pretty) にフォールバックし、
    /// stderr に警告を出力する。subscriber 初期化前に呼ばれるため tracing は使えない。
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            other => {
                eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// サービス名（ルートスパン `app` の `service` フィールドに出力）
    pub service_name:       String,
    /// ログ出力形式
    pub log_format:         LogFormat,
    /// `RUST_LOG` 未設定時のフィルタ指定
    pub default_directives: String,
}

impl TracingConfig {
    /// 新しい設定を作成する
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
            default_directives: DEFAULT_DIRECTIVES.to_string(),
        }
    }

    /// `RUST_LOG` 未設定時のフィルタ指定を差し替える
    pub fn with_default_directives(mut self, directives: impl Into<String>) -> Self {
        self.default_directives = directives.into();
        self
    }

    /// サービス名を `service` フィールドに持つルートスパン
    ///
    /// 呼び出し元で `entered()` し、プロセス終了まで保持する。
    /// JSON モードでは `span.service` として各イベントに含まれる。
    pub fn app_span(&self) -> tracing::Span {
        tracing::info_span!("app", service = %self.service_name)
    }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` 環境変数でログレベルを制御可能。
/// 未設定の場合は [`TracingConfig::default_directives`] を使う。
///
/// JSON モードでは以下のフィールドがトップレベルに出力される:
/// - `timestamp`, `level`, `target`, `message`
/// - `log_sql_event!` で付与した `sql.*` / `connection.*` フィールド
///
/// `ErrorLayer` を登録するため、デバッグヘッダの SpanTrace にスパン情報が含まれる。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.default_directives));

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}

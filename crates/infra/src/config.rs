//! # Spylog 設定
//!
//! 環境変数からログ出力の設定を読み込む。
//!
//! | 環境変数 | 既定値 | 用途 |
//! |---------|-------|------|
//! | `SPYLOG_DEBUG` | `false` | メッセージ先頭にデバッグヘッダを付与する |
//! | `LOG_FORMAT` | `pretty` | ログ出力形式（`json` / `pretty`） |

use std::env;

use spylog_shared::observability::LogFormat;

use crate::error::ConfigError;

const DEBUG_KEY: &str = "SPYLOG_DEBUG";
const LOG_FORMAT_KEY: &str = "LOG_FORMAT";

/// ログ出力の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpyConfig {
    /// デバッグヘッダを付与するか
    pub debug_enabled: bool,
    /// ログ出力形式
    pub log_format:    LogFormat,
}

impl SpyConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストではプロセスの環境変数を書き換えずに済むよう、こちらを使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let debug_enabled = match lookup(DEBUG_KEY) {
            Some(value) => parse_bool(DEBUG_KEY, &value)?,
            None => false,
        };
        let log_format = lookup(LOG_FORMAT_KEY)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();

        Ok(Self {
            debug_enabled,
            log_format,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

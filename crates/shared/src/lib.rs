//! # Spylog 共有ユーティリティ
//!
//! このクレートは、Spylog の各クレートで使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（infra, apps）から依存される
//! - 分類ロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える

pub mod event_log;
pub mod observability;

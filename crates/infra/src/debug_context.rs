//! # スレッド・スパン情報によるデバッグヘッダ
//!
//! 呼び出し元を特定するため、現在のスレッド名と tracing のスパン経路
//! （[`SpanTrace`]）をデバッグヘッダにする。
//!
//! スパン経路を得るには subscriber に `tracing_error::ErrorLayer` が登録されている必要がある。
//! 未登録、またはスパン外で呼ばれた場合はスレッド名のみになる。
//!
//! ```text
//! [worker-3]
//!    0: app::repository::save
//!              at src/repository.rs:42
//! ```

use spylog_domain::debug_context::DebugContext;
use tracing_error::{SpanTrace, SpanTraceStatus};

/// スレッド名とスパン経路を返す [`DebugContext`] 実装
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDebugContext;

impl DebugContext for ThreadDebugContext {
    fn current_debug_header(&self) -> String {
        let thread = std::thread::current();
        let thread_name = thread.name().unwrap_or("unnamed");

        let span_trace = SpanTrace::capture();
        if span_trace.status() == SpanTraceStatus::CAPTURED {
            format!("[{thread_name}]\n{span_trace}")
        } else {
            format!("[{thread_name}]")
        }
    }
}

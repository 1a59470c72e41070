//! # 記録済み呼び出しのリプレイ
//!
//! タブ区切りの1行を呼び出し記述に分解し、接続キーごとの [`SpyConnection`] に対して
//! [`TransactionLogger`] を通す。
//!
//! ## 接続番号の割り当て
//!
//! 接続番号は [`Replayer`] が割り当て、キー間で重複しない。
//!
//! - 数値のキーは、その値が未使用ならそのまま接続番号にする
//! - 数値でないキー、または使用済みの値を持つキーには、未使用の最小の番号を割り当てる
//!   （後者は WARN を出力する）

use std::collections::{HashMap, HashSet};

use spylog_domain::{debug_context::DebugContext, transaction::TransactionMessage};
use spylog_infra::{SpyConnection, ThreadDebugContext, TransactionLogger};

/// 1行分の呼び出し記述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallRecord<'a> {
    pub connection_key: &'a str,
    pub signature:      &'a str,
    pub result:         &'a str,
}

impl<'a> CallRecord<'a> {
    /// `<接続キー>\t<シグネチャ>[\t<戻り値>]` を分解する
    ///
    /// フィールドが2つに満たない行は `None`。
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line.splitn(3, '\t');
        let connection_key = fields.next().filter(|key| !key.is_empty())?;
        let signature = fields.next()?;
        let result = fields.next().unwrap_or("");

        Some(Self {
            connection_key,
            signature,
            result,
        })
    }
}

/// 接続キーごとの状態を保持して呼び出しをリプレイする
pub struct Replayer<D = ThreadDebugContext> {
    logger:      TransactionLogger<D>,
    connections: HashMap<String, SpyConnection>,
    used:        HashSet<u64>,
    next_free:   u64,
    lines_read:  usize,
    logged:      usize,
}

impl<D: DebugContext> Replayer<D> {
    pub fn new(logger: TransactionLogger<D>) -> Self {
        Self {
            logger,
            connections: HashMap::new(),
            used: HashSet::new(),
            next_free: 1,
            lines_read: 0,
            logged: 0,
        }
    }

    /// 1行をリプレイし、出力したメッセージを返す
    pub fn replay_line(&mut self, line: &str) -> Option<TransactionMessage> {
        self.lines_read += 1;
        if line.trim().is_empty() {
            return None;
        }

        let Some(record) = CallRecord::parse(line) else {
            tracing::warn!(line_number = self.lines_read, line, "形式が不正な行をスキップします");
            return None;
        };

        if !self.connections.contains_key(record.connection_key) {
            let number = self.assign_number(record.connection_key);
            self.connections.insert(
                record.connection_key.to_string(),
                SpyConnection::with_number(number),
            );
        }
        let connection = &self.connections[record.connection_key];
        let message = self
            .logger
            .log_call(connection, record.signature, record.result)?;

        self.logged += 1;
        Some(message)
    }

    /// 新しい接続キーに接続番号を割り当てる
    fn assign_number(&mut self, key: &str) -> u64 {
        match key.parse::<u64>() {
            Ok(requested) if self.used.insert(requested) => requested,
            Ok(requested) => {
                let assigned = self.allocate();
                tracing::warn!(
                    key,
                    requested,
                    assigned,
                    "接続番号が使用済みのため別の番号を割り当てます"
                );
                assigned
            }
            Err(_) => self.allocate(),
        }
    }

    fn allocate(&mut self) -> u64 {
        while self.used.contains(&self.next_free) {
            self.next_free += 1;
        }
        self.used.insert(self.next_free);
        self.next_free
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn logged(&self) -> usize {
        self.logged
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use spylog_domain::{debug_context::FixedDebugContext, message::SqlMessage};
    use spylog_infra::SpyConfig;
    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    /// キャプチャしたログイベント
    struct CapturedEvent {
        level:   tracing::Level,
        message: String,
        fields:  Vec<(String, String)>,
    }

    impl CapturedEvent {
        fn field(&self, name: &str) -> Option<&str> {
            self.fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        }
    }

    /// テスト用にログイベントをキャプチャする Layer
    struct CaptureLayer {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.events.lock().unwrap().push(CapturedEvent {
                level:   *event.metadata().level(),
                message: visitor.message.unwrap_or_default(),
                fields:  visitor.fields,
            });
        }
    }

    #[derive(Default)]
    struct FieldVisitor {
        message: Option<String>,
        fields:  Vec<(String, String)>,
    }

    impl tracing::field::Visit for FieldVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            self.record_str(field, &format!("{value:?}"));
        }

        fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
            self.record_str(field, &value.to_string());
        }

        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            if field.name() == "message" {
                self.message = Some(value.to_string());
            } else {
                self.fields
                    .push((field.name().to_string(), value.to_string()));
            }
        }
    }

    /// テスト用にキャプチャ subscriber をセットアップする
    ///
    /// 返り値の `DefaultGuard` はスコープに保持すること（ドロップでリセット）。
    fn setup_capture() -> (
        tracing::subscriber::DefaultGuard,
        Arc<Mutex<Vec<CapturedEvent>>>,
    ) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(CaptureLayer {
            events: events.clone(),
        });
        (tracing::subscriber::set_default(subscriber), events)
    }

    fn replayer() -> Replayer<FixedDebugContext> {
        Replayer::new(TransactionLogger::with_debug_context(
            SpyConfig::default(),
            FixedDebugContext::new("[replay]"),
        ))
    }

    #[rstest]
    #[case("1\tcommit()", "1", "commit()", "")]
    #[case("1\tsetSavepoint(SP1)\tSP1", "1", "setSavepoint(SP1)", "SP1")]
    #[case("a\tf(x)\ty\tz", "a", "f(x)", "y\tz")]
    fn test_parse_タブ区切りを分解する(
        #[case] line: &str,
        #[case] key: &str,
        #[case] signature: &str,
        #[case] result: &str,
    ) {
        assert_eq!(
            CallRecord::parse(line),
            Some(CallRecord {
                connection_key: key,
                signature,
                result,
            })
        );
    }

    #[rstest]
    #[case("commit()")]
    #[case("\tcommit()")]
    fn test_parse_フィールド不足はnone(#[case] line: &str) {
        assert_eq!(CallRecord::parse(line), None);
    }

    #[test]
    fn test_数値の接続キーは接続番号として使う() {
        let mut replayer = replayer();

        let message = replayer.replay_line("42\tcommit()").unwrap();

        assert_eq!(message.connection_number(), 42);
        assert_eq!(message.formatted_message(), "42. Transaction committed.");
    }

    #[rstest]
    #[case(["primary", "1"])]
    #[case(["1", "primary"])]
    #[case(["primary", "secondary"])]
    #[case(["1", "01"])]
    fn test_異なる接続キーには異なる接続番号を割り当てる(#[case] keys: [&str; 2]) {
        let mut replayer = replayer();

        let numbers: Vec<u64> = keys
            .iter()
            .map(|key| {
                replayer
                    .replay_line(&format!("{key}\tcommit()"))
                    .unwrap()
                    .connection_number()
            })
            .collect();

        assert_ne!(numbers[0], numbers[1]);
    }

    #[test]
    fn test_同じ接続キーは同じ接続番号を使い続ける() {
        let mut replayer = replayer();

        let first = replayer.replay_line("primary\tcommit()").unwrap();
        let second = replayer.replay_line("primary\trollback()").unwrap();

        assert_eq!(first.connection_number(), 1);
        assert_eq!(second.connection_number(), 1);
    }

    #[test]
    fn test_使用済みの数値キーには別の番号を割り当ててwarnを出力する() {
        let (_guard, events) = setup_capture();
        let mut replayer = replayer();

        replayer.replay_line("primary\tcommit()");
        let message = replayer.replay_line("1\tcommit()").unwrap();

        assert_eq!(message.formatted_message(), "2. Transaction committed.");
        let captured = events.lock().unwrap();
        let warning = captured
            .iter()
            .find(|e| e.level == tracing::Level::WARN)
            .expect("WARN が出力されること");
        assert_eq!(warning.field("requested"), Some("1"));
        assert_eq!(warning.field("assigned"), Some("2"));
    }

    #[rstest]
    #[case("broken")]
    #[case("\tcommit()")]
    fn test_フィールド不足の行はwarnを出力してスキップする(#[case] line: &str) {
        let (_guard, events) = setup_capture();
        let mut replayer = replayer();

        let message = replayer.replay_line(line);

        assert!(message.is_none());
        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].level, tracing::Level::WARN);
        assert_eq!(captured[0].message, "形式が不正な行をスキップします");
        assert_eq!(captured[0].field("line"), Some(line));
        assert_eq!(captured[0].field("line_number"), Some("1"));
    }

    #[test]
    fn test_接続キーごとにオートコミット状態を保持する() {
        let mut replayer = replayer();

        replayer.replay_line("1\tsetAutoCommit(false)");
        let closed_manual = replayer.replay_line("1\tclose()");
        let closed_auto = replayer.replay_line("2\tclose()");

        assert_eq!(
            closed_manual.map(|m| m.formatted_message().to_string()),
            Some("1. Transaction aborted (connection closed).".to_string())
        );
        assert!(closed_auto.is_none());
        assert_eq!(replayer.connection_count(), 2);
    }

    #[test]
    fn test_件数を数える() {
        let mut replayer = replayer();

        for line in ["1\tcommit()", "", "broken", "1\tgetMetaData()", "1\trollback()"] {
            replayer.replay_line(line);
        }

        assert_eq!(replayer.lines_read(), 5);
        assert_eq!(replayer.logged(), 2);
    }
}

//! # トランザクション制御呼び出し
//!
//! 接続に対するトランザクション制御（コミット、ロールバック、セーブポイント、
//! 分離レベル、オートコミット、クローズ）の呼び出しを分類し、ログメッセージを描画する。
//!
//! ## 処理の流れ
//!
//! ```text
//! "rollback(MARK1)"
//!   → CallSignature::parse     名前 "rollback" / 引数 "MARK1"
//!   → Operation::lookup        Rollback
//!   → reclassify               RollbackSavepoint（引数あり）
//!   → normalize                "MARK1"
//!   → TransactionMessage       "3. Transaction rollbacked save point MARK1."
//! ```
//!
//! 再分類は正規化より前に行う。正規化の規則は最終的な操作種別で決まり、
//! 再分類は生の引数の有無を判定材料にするため。
//!
//! ## モジュール構成
//!
//! - [`operation`] - 操作種別とメソッド名の対応表
//! - [`isolation`] - 分離レベルのコードとラベル
//! - [`normalize`] - 操作種別ごとの引数の正規化
//! - [`reclassify`] - 引数・接続状態による再分類
//! - [`message`] - 分類の入口と描画

pub mod isolation;
pub mod message;
pub mod normalize;
pub mod operation;
pub mod reclassify;

pub use isolation::IsolationLevel;
pub use message::TransactionMessage;
pub use operation::Operation;

//! # 呼び出しシグネチャ
//!
//! 傍受層が渡す `name(arg)` 形式の文字列を、メソッド名と引数部分に分解する。
//! 引数部分は括弧の内側をそのまま保持し、解釈は分類側に任せる。

use derive_more::Display;

use crate::NotLoggable;

/// 分解済みの呼び出しシグネチャ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{name}({argument})")]
pub struct CallSignature<'a> {
    name:     &'a str,
    argument: &'a str,
}

impl<'a> CallSignature<'a> {
    /// `name(arg)` を分解する
    ///
    /// 最初の `(` より前をメソッド名、末尾の `)` までを引数とする。
    /// `(` を含まない、または `)` で終わらない場合は
    /// [`NotLoggable::MalformedSignature`] を返す。
    pub fn parse(signature: &'a str) -> Result<Self, NotLoggable> {
        let malformed = || NotLoggable::MalformedSignature(signature.to_string());

        let body = signature.strip_suffix(')').ok_or_else(malformed)?;
        let (name, argument) = body.split_once('(').ok_or_else(malformed)?;

        Ok(Self { name, argument })
    }

    /// メソッド名
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// 括弧の内側（空文字列の場合あり）
    pub fn argument(&self) -> &'a str {
        self.argument
    }
}

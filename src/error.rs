use std::fmt;

use crate::record::ResponseRecord;

/// レスポンスパースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 先頭行が `HTTP/<version> <code> <text>` の形になっていない
    MalformedStatusLine { line: String },
    /// 入力サイズ超過
    InputTooLarge { size: usize, limit: usize },
    /// ヘッダー数超過
    TooManyHeaders { count: usize, limit: usize },
    /// 行が長すぎる
    LineTooLong { size: usize, limit: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedStatusLine { line } => {
                write!(f, "malformed status line: {:?}", line)
            }
            Error::InputTooLarge { size, limit } => {
                write!(f, "input too large: {} > {}", size, limit)
            }
            Error::TooManyHeaders { count, limit } => {
                write!(f, "too many headers: {} > {}", count, limit)
            }
            Error::LineTooLong { size, limit } => {
                write!(f, "line too long: {} > {}", size, limit)
            }
        }
    }
}

impl std::error::Error for Error {}

/// パース失敗
///
/// エラーと、失敗した時点までに埋められたレコードの両方を保持する。
/// 部分的なデータを使うかどうかは呼び出し側が判断する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    error: Error,
    record: ResponseRecord,
}

impl ParseFailure {
    pub(crate) fn new(error: Error, record: ResponseRecord) -> Self {
        Self { error, record }
    }

    /// 失敗の原因
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// 失敗時点までのレコード
    pub fn record(&self) -> &ResponseRecord {
        &self.record
    }

    /// 部分的なレコードを取り出す
    pub fn into_record(self) -> ResponseRecord {
        self.record
    }

    /// エラーとレコードに分解
    pub fn into_parts(self) -> (Error, ResponseRecord) {
        (self.error, self.record)
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse failed: {}", self.error)
    }
}

impl std::error::Error for ParseFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<ParseFailure> for Error {
    fn from(failure: ParseFailure) -> Self {
        failure.error
    }
}

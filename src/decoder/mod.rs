//! レスポンスパーサーモジュール
//!
//! メモリ上にすべて揃った入力を 1 回だけ走査し、
//! ステータス行、ヘッダーブロック、残りの行の順に認識する。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http11_capture::parse;
//!
//! let record = parse(b"HTTP/1.1 200 OK\nConnection: close\n\nhello\n").unwrap();
//! assert_eq!(record.status_code, 200);
//! assert_eq!(record.header_value("Connection"), Some("close"));
//! assert_eq!(record.unparsed, vec![&b""[..], b"hello"]);
//! ```
//!
//! ### 失敗時の部分的なレコード
//!
//! ```rust
//! use shiguredo_http11_capture::{Error, parse};
//!
//! let failure = parse(b"garbage\n").unwrap_err();
//! assert!(matches!(failure.error(), Error::MalformedStatusLine { .. }));
//! assert!(!failure.record().has_status_line());
//! ```

mod header;
mod line;
mod lines;
mod status_line;

pub use header::{parse_header_line, parse_headers};
pub use lines::{parse_lines, parse_raw_line};
pub use status_line::{StatusLine, parse_status_line};

use crate::error::{Error, ParseFailure};
use crate::limits::ParseLimits;
use crate::log::{debug, warning};
use crate::record::ResponseRecord;

use header::scan_headers;
use line::next_line;
use lines::scan_lines;

/// HTTP レスポンスパーサー
///
/// 状態を持たないため、1 つのパーサーを複数のパースで使い回せる。
/// レコードはパースごとに別のものを使うこと。
#[derive(Debug, Clone, Default)]
pub struct ResponseParser {
    limits: ParseLimits,
}

impl ResponseParser {
    /// デフォルトの制限でパーサーを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 制限付きでパーサーを作成
    pub fn with_limits(limits: ParseLimits) -> Self {
        Self { limits }
    }

    /// 制限設定を取得
    pub fn limits(&self) -> &ParseLimits {
        &self.limits
    }

    /// 入力をパースして新しいレコードを返す
    ///
    /// 失敗した場合もそれまでに埋められたレコードを [`ParseFailure`] で返す。
    pub fn parse(&self, input: &[u8]) -> Result<ResponseRecord, ParseFailure> {
        let mut record = ResponseRecord::new();
        match self.parse_into(&mut record, input) {
            Ok(()) => Ok(record),
            Err(e) => Err(ParseFailure::new(e, record)),
        }
    }

    /// 入力をパースして呼び出し側のレコードに書き込む
    ///
    /// 各段階は成功した分だけ `record` に反映される。
    /// 最初のエラーでただちに中断し、残りの段階は実行しない。
    /// ヘッダーブロック以降の行はバイト列のまま保持する。
    pub fn parse_into(&self, record: &mut ResponseRecord, input: &[u8]) -> Result<(), Error> {
        if input.len() > self.limits.max_input_size {
            warning!(
                "input too large: {} > {}",
                input.len(),
                self.limits.max_input_size
            );
            return Err(Error::InputTooLarge {
                size: input.len(),
                limit: self.limits.max_input_size,
            });
        }

        let mut pos = self.recognize_status_line(record, input)?;
        pos += self.recognize_headers(record, &input[pos..])?;
        self.capture_lines(record, &input[pos..])
    }

    fn recognize_status_line(
        &self,
        record: &mut ResponseRecord,
        input: &[u8],
    ) -> Result<usize, Error> {
        if let Some(line) = next_line(input) {
            self.check_line(line.content.len())?;
        }
        let (consumed, status) = match parse_status_line(input) {
            Ok(v) => v,
            Err(e) => {
                warning!("{}", e);
                return Err(e);
            }
        };
        debug!(
            "status line: {} {} {:?}",
            status.version, status.status_code, status.status_string
        );
        record.set_status_line(&status.version, status.status_code, &status.status_string);
        Ok(consumed)
    }

    fn recognize_headers(
        &self,
        record: &mut ResponseRecord,
        input: &[u8],
    ) -> Result<usize, Error> {
        let mut count = 0;
        let consumed = scan_headers(input, |len, name, value| {
            self.check_line(len)?;
            count += 1;
            if count > self.limits.max_headers_count {
                warning!(
                    "too many headers: {} > {}",
                    count,
                    self.limits.max_headers_count
                );
                return Err(Error::TooManyHeaders {
                    count,
                    limit: self.limits.max_headers_count,
                });
            }
            record.add_header(name, value);
            Ok::<(), Error>(())
        })?;
        debug!("headers: {} lines, {} keys", count, record.headers.len());
        Ok(consumed)
    }

    fn capture_lines(&self, record: &mut ResponseRecord, input: &[u8]) -> Result<(), Error> {
        scan_lines(input, |content| {
            self.check_line(content.len())?;
            record.push_line(content);
            Ok::<(), Error>(())
        })?;
        debug!("unparsed: {} lines", record.unparsed.len());
        Ok(())
    }

    fn check_line(&self, size: usize) -> Result<(), Error> {
        if size > self.limits.max_line_size {
            warning!("line too long: {} > {}", size, self.limits.max_line_size);
            return Err(Error::LineTooLong {
                size,
                limit: self.limits.max_line_size,
            });
        }
        Ok(())
    }
}

/// 入力をパース (制限なし)
pub fn parse(input: &[u8]) -> Result<ResponseRecord, ParseFailure> {
    ResponseParser::with_limits(ParseLimits::unlimited()).parse(input)
}

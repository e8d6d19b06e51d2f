//! # shiguredo_http11_capture
//!
//! キャプチャした HTTP/1.x レスポンスのテキストをパースし、
//! 構造化したレコードとの間で相互変換するライブラリ (Sans I/O)
//!
//! ## 特徴
//!
//! - **Sans I/O**: メモリ上のバイト列だけを扱い、I/O を持たない
//! - **往復変換**: パースしてからエンコードすると元のバイト列に戻る (バイナリの本文も含む)
//! - **寛容**: ヘッダーの意味は検証せず、ヘッダーブロック以降の行はそのまま残す
//!
//! ## 使い方
//!
//! ### パース
//!
//! ```rust
//! use shiguredo_http11_capture::parse;
//!
//! let input = b"HTTP/1.1 200 OK\nContent-Type: text/plain\n\nHello\n";
//! let record = parse(input).unwrap();
//! assert_eq!(record.protocol_version, "HTTP/1.1");
//! assert_eq!(record.header_value("Content-Type"), Some("text/plain"));
//! assert_eq!(record.unparsed_str(1), Some("Hello"));
//!
//! // エンコードすると元に戻る (末尾の改行は付かない)
//! let mut encoded = record.encode();
//! encoded.push(b'\n');
//! assert_eq!(encoded, input);
//! ```
//!
//! ### モックレスポンスの作成
//!
//! ```rust
//! use shiguredo_http11_capture::ResponseRecord;
//!
//! let record = ResponseRecord::new()
//!     .status_line("HTTP/1.1", 404, "Not Found")
//!     .header("Connection", "close")
//!     .line("");
//! assert_eq!(record.to_http(), "HTTP/1.1 404 Not Found\nConnection: close\n");
//! ```

mod decoder;
mod encoder;
mod error;
mod limits;
mod log;
mod record;

pub use decoder::{
    ResponseParser, StatusLine, parse, parse_header_line, parse_headers, parse_lines,
    parse_raw_line, parse_status_line,
};
pub use encoder::encode_record;
pub use error::{Error, ParseFailure};
pub use limits::ParseLimits;
pub use record::ResponseRecord;

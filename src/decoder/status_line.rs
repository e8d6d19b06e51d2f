//! ステータス行の認識

use crate::error::Error;

use super::line::next_line;

/// パース済みステータス行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// HTTP バージョン ("HTTP/" を含む)
    pub version: String,
    /// ステータスコード
    pub status_code: i64,
    /// ステータスコード以降の文字列 (トリムしない)
    pub status_string: String,
}

/// ステータス行をパース
///
/// `HTTP/<version> <code> <text>` の形の先頭行を認識し、
/// 消費したバイト数 (改行を含む) と結果を返す。
///
/// - version は空白以外の 1 文字以上
/// - version と code、code と text の間はちょうど 1 つの空白
/// - code は符号付きの 10 進整数 (i64 の範囲)
/// - text は行末までそのまま (空白や `\r` も含む)
/// - code の直後で行が終わっている場合、text は空文字列
/// - 行が UTF-8 として不正な場合は不正なステータス行として扱う
pub fn parse_status_line(input: &[u8]) -> Result<(usize, StatusLine), Error> {
    let Some(line) = next_line(input) else {
        return Err(malformed(b""));
    };
    let content = line.as_str().ok_or_else(|| malformed(line.content))?;

    let rest = content
        .strip_prefix("HTTP")
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or_else(|| malformed(line.content))?;

    // "1.1 200 OK"
    let (version, rest) = rest
        .split_once(' ')
        .ok_or_else(|| malformed(line.content))?;
    if version.is_empty() {
        return Err(malformed(line.content));
    }

    // "200 OK"
    let (code, status_string) = rest.split_once(' ').unwrap_or((rest, ""));
    let digits = code.strip_prefix(['+', '-']).unwrap_or(code);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(line.content));
    }
    let status_code = code
        .parse::<i64>()
        .map_err(|_| malformed(line.content))?;

    Ok((
        line.consumed(),
        StatusLine {
            version: format!("HTTP/{}", version),
            status_code,
            status_string: status_string.to_string(),
        },
    ))
}

fn malformed(line: &[u8]) -> Error {
    Error::MalformedStatusLine {
        line: String::from_utf8_lossy(line).into_owned(),
    }
}

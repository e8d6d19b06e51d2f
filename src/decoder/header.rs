//! ヘッダーブロックの認識

use std::convert::Infallible;

use super::line::next_line;

/// ヘッダー行を 1 行パース
///
/// `<name>:<value>\n` の形の行を認識し、消費したバイト数 (改行を含む) と
/// 名前と値を返す。形が合わなければ `None` を返し、何も消費しない。
///
/// - name は最初の `:` より前のすべて (空でもよい、トリムしない)
/// - value は `:` 直後の空白とタブを読み飛ばした残り (空でもよい)
/// - 改行で終わっていない行はヘッダー行として扱わない
/// - UTF-8 として不正な行はヘッダー行として扱わない
pub fn parse_header_line(input: &[u8]) -> Option<(usize, (&str, &str))> {
    let line = next_line(input)?;
    if !line.terminated {
        return None;
    }
    let (name, value) = line.as_str()?.split_once(':')?;
    let value = value.trim_start_matches([' ', '\t']);
    Some((line.consumed(), (name, value)))
}

/// ヘッダーブロックをパース
///
/// ヘッダー行として認識できる限り読み進め、消費したバイト数と
/// 出現順のヘッダーリストを返す。最初に認識できなかった行は消費しない。
/// ヘッダーが 1 つもなくても成功として扱う。
pub fn parse_headers(input: &[u8]) -> (usize, Vec<(String, String)>) {
    let mut headers = Vec::new();
    let consumed = scan_headers(input, |_, name, value| {
        headers.push((name.to_string(), value.to_string()));
        Ok::<(), Infallible>(())
    });
    match consumed {
        Ok(consumed) => (consumed, headers),
        Err(never) => match never {},
    }
}

/// ヘッダーブロックを走査し、認識した行ごとに `visit` を呼ぶ
///
/// `visit` には改行を除いた行の長さ、名前、値を渡す。
/// `visit` がエラーを返した行は消費せずに中断する。
pub(crate) fn scan_headers<E>(
    input: &[u8],
    mut visit: impl FnMut(usize, &str, &str) -> Result<(), E>,
) -> Result<usize, E> {
    let mut pos = 0;
    while let Some((consumed, (name, value))) = parse_header_line(&input[pos..]) {
        visit(consumed - 1, name, value)?;
        pos += consumed;
    }
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_header() {
        let (consumed, (name, value)) =
            parse_header_line(b"Content-Type: application/json\n").unwrap();
        assert_eq!(consumed, 31);
        assert_eq!(name, "Content-Type");
        assert_eq!(value, "application/json");
    }

    #[test]
    fn value_keeps_inner_colons_and_trailing_cr() {
        let (_, (name, value)) =
            parse_header_line(b"Date: Mon, 23 May 2005 22:38:34 GMT\r\n").unwrap();
        assert_eq!(name, "Date");
        assert_eq!(value, "Mon, 23 May 2005 22:38:34 GMT\r");
    }

    #[test]
    fn name_is_not_trimmed() {
        let (_, (name, value)) = parse_header_line(b" X-Pad :\tv\n").unwrap();
        assert_eq!(name, " X-Pad ");
        assert_eq!(value, "v");
    }

    #[test]
    fn empty_name_and_value() {
        let (consumed, (name, value)) = parse_header_line(b":\n").unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(name, "");
        assert_eq!(value, "");

        let (_, (name, value)) = parse_header_line(b":authority: example.com\n").unwrap();
        assert_eq!(name, "");
        assert_eq!(value, "authority: example.com");
    }

    #[test]
    fn rejects_non_header_lines() {
        assert_eq!(parse_header_line(b""), None);
        assert_eq!(parse_header_line(b"\n"), None);
        assert_eq!(parse_header_line(b"<html></html>\n"), None);
        // 改行で終わらない
        assert_eq!(parse_header_line(b"Connection: close"), None);
        // UTF-8 として不正
        assert_eq!(parse_header_line(b"X-Bin: \xff\n"), None);
    }

    #[test]
    fn block_stops_at_blank_line() {
        let input = b"Content-Type: application/json\nDate: Mon, 23 May 2005 22:38:34 GMT\n\nbody: x\n";
        let (consumed, headers) = parse_headers(input);
        assert_eq!(&input[consumed..], b"\nbody: x\n");
        assert_eq!(
            headers,
            vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                (
                    "Date".to_string(),
                    "Mon, 23 May 2005 22:38:34 GMT".to_string()
                ),
            ]
        );
    }

    #[test]
    fn block_keeps_duplicates() {
        let (_, headers) = parse_headers(b"A: 1\nA: 2\n");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].1, "1");
        assert_eq!(headers[1].1, "2");
    }

    #[test]
    fn empty_block() {
        assert_eq!(parse_headers(b""), (0, Vec::new()));
        assert_eq!(parse_headers(b"\n<html>\n"), (0, Vec::new()));
    }

    #[test]
    fn scan_stops_before_rejected_line() {
        let input = b"A: 1\nBB: 2\nC: 3\n";
        let mut seen = Vec::new();
        let result = scan_headers(input, |len, name, _| {
            if seen.len() == 1 {
                return Err(len);
            }
            seen.push(name.to_string());
            Ok(())
        });
        assert_eq!(result, Err(5));
        assert_eq!(seen, vec!["A"]);
    }
}

use std::fmt;

use crate::record::ResponseRecord;

/// レコードをバイト列にエンコード
///
/// ステータス行、ヘッダー行、未解析行の順に並べ、`\n` で連結する。
/// 末尾に改行は付けない。ヘッダー行の値は描画時点のマップの値を使うため、
/// 重複したヘッダーはすべて最後の値で描画される。
/// 未解析行はバイト列をそのまま出力する。
pub fn encode_record(record: &ResponseRecord) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut first = true;
    let mut begin_line = |buf: &mut Vec<u8>| {
        if !first {
            buf.push(b'\n');
        }
        first = false;
    };

    // Status line: VERSION SP STATUS-CODE SP STATUS-STRING
    if record.has_status_line() {
        begin_line(&mut buf);
        buf.extend_from_slice(record.protocol_version.as_bytes());
        buf.push(b' ');
        buf.extend_from_slice(record.status_code.to_string().as_bytes());
        buf.push(b' ');
        buf.extend_from_slice(record.status_string.as_bytes());
    }

    // Headers
    for key in &record.ordered_header_keys {
        let value = record.headers.get(key).map_or("", String::as_str);
        begin_line(&mut buf);
        buf.extend_from_slice(key.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(value.as_bytes());
    }

    // Unparsed lines
    for line in &record.unparsed {
        begin_line(&mut buf);
        buf.extend_from_slice(line);
    }

    buf
}

impl ResponseRecord {
    /// レコードをバイト列にエンコード
    ///
    /// 入力のバイト列を往復変換するにはこちらを使う。
    pub fn encode(&self) -> Vec<u8> {
        encode_record(self)
    }

    /// レコードを HTTP テキストに変換
    ///
    /// UTF-8 として不正な未解析行は U+FFFD に置き換える。
    pub fn to_http(&self) -> String {
        match String::from_utf8(encode_record(self)) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl fmt::Display for ResponseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_http())
    }
}

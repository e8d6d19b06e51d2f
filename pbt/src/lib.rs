//! PBT テスト共通ユーティリティ

use proptest::prelude::*;

// ========================================
// ステータス行
// ========================================

/// HTTP バージョン ("HTTP/" を含む)
pub fn http_version() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("HTTP/1.0".to_string()),
        Just("HTTP/1.1".to_string()),
        Just("HTTP/2".to_string()),
        "[0-9]\\.[0-9]".prop_map(|v| format!("HTTP/{}", v)),
    ]
}

/// ステータスコード (先頭ゼロなし)
///
/// 通常の範囲に加えて、範囲外や負の整数も生成する。
pub fn status_code() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => 100i64..=599,
        1 => any::<i64>(),
    ]
}

/// ステータス文字列 (改行以外の任意の文字、空白も含む)
pub fn status_string() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("OK".to_string()),
        Just("Not Found".to_string()),
        Just(String::new()),
        "[^\n]{0,32}".prop_map(|s| s),
    ]
}

// ========================================
// ヘッダー
// ========================================

/// ヘッダー名 (`:` と改行を含まない)
pub fn header_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Content-Type".to_string()),
        Just("Set-Cookie".to_string()),
        Just("Connection".to_string()),
        "[A-Za-z][A-Za-z0-9-]{0,31}".prop_map(|s| s),
    ]
}

/// 往復変換できるヘッダー値 (先頭が空白やタブでない、改行を含まない)
pub fn header_value() -> impl Strategy<Value = String> {
    "([^ \t\n][^\n]{0,63})?".prop_map(|s| s)
}

/// 名前が重複しないヘッダーリスト
pub fn unique_headers() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::btree_map(header_name(), header_value(), 0..8)
        .prop_map(|map| map.into_iter().collect())
}

// ========================================
// ボディ
// ========================================

/// 改行を含まない行
pub fn body_line() -> impl Strategy<Value = String> {
    "[^\n]{0,64}".prop_map(|s| s)
}

/// ボディの行リスト
pub fn body_lines() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(body_line(), 0..8)
}

/// 改行を含まない任意のバイト列 (UTF-8 として不正でもよい)
pub fn binary_line() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>().prop_filter("newline", |b| *b != b'\n'), 0..64)
}

/// バイナリを含むボディの行リスト
pub fn binary_lines() -> impl Strategy<Value = Vec<Vec<u8>>> {
    proptest::collection::vec(binary_line(), 0..8)
}

/// ステータス行、ヘッダー、空行、ボディの順で組み立てたレスポンス (末尾改行あり)
pub fn render_response(
    version: &str,
    status_code: i64,
    status_string: &str,
    headers: &[(String, String)],
    body: &[String],
) -> String {
    let mut text = format!("{} {} {}\n", version, status_code, status_string);
    for (name, value) in headers {
        text.push_str(&format!("{}: {}\n", name, value));
    }
    text.push('\n');
    for line in body {
        text.push_str(line);
        text.push('\n');
    }
    text
}

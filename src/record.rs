use std::collections::HashMap;

/// パース済み HTTP レスポンス
///
/// ヘッダーは出現順のキー列と、キーから値へのマップの 2 つで保持する。
/// 同じキーが複数回現れた場合、キー列には出現ごとに 1 エントリ残り、
/// マップには最後に現れた値だけが残る。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseRecord {
    /// HTTP バージョン (HTTP/1.1 等)
    ///
    /// 空文字列の場合、ステータス行はパースされていない。
    pub protocol_version: String,
    /// ステータスコード (200, 404, etc.)
    ///
    /// 整数であれば範囲は検証しない。
    pub status_code: i64,
    /// ステータスコードの後ろに続く文字列 (前後の空白もそのまま保持)
    pub status_string: String,
    /// ヘッダー名 (出現順、重複あり)
    pub ordered_header_keys: Vec<String>,
    /// ヘッダー (後勝ち、大文字小文字を区別する)
    pub headers: HashMap<String, String>,
    /// ヘッダーブロック以降の行 (改行を除いたバイト列をそのまま)
    pub unparsed: Vec<Vec<u8>>,
}

impl ResponseRecord {
    /// 空のレコードを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// ステータス行を設定 (ビルダーパターン)
    pub fn status_line(mut self, version: &str, status_code: i64, status_string: &str) -> Self {
        self.set_status_line(version, status_code, status_string);
        self
    }

    /// ヘッダーを追加 (ビルダーパターン)
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// 未解析行を追加 (ビルダーパターン)
    pub fn line(mut self, line: impl AsRef<[u8]>) -> Self {
        self.push_line(line);
        self
    }

    /// ステータス行を設定
    pub fn set_status_line(&mut self, version: &str, status_code: i64, status_string: &str) {
        self.protocol_version = version.to_string();
        self.status_code = status_code;
        self.status_string = status_string.to_string();
    }

    /// ヘッダーを追加
    ///
    /// キー列には常に追記し、マップの値は上書きする。
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.ordered_header_keys.push(name.to_string());
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// 未解析行を追加
    pub fn push_line(&mut self, line: impl AsRef<[u8]>) {
        self.unparsed.push(line.as_ref().to_vec());
    }

    /// 未解析行を UTF-8 として取得
    ///
    /// 範囲外、または UTF-8 として不正な場合は `None`。
    pub fn unparsed_str(&self, index: usize) -> Option<&str> {
        self.unparsed
            .get(index)
            .and_then(|line| std::str::from_utf8(line).ok())
    }

    /// ヘッダーの現在の値を取得 (大文字小文字を区別する)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// ヘッダーが存在するか確認
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// 指定した名前のヘッダーが何行現れたか
    pub fn header_count(&self, name: &str) -> usize {
        self.ordered_header_keys
            .iter()
            .filter(|key| key.as_str() == name)
            .count()
    }

    /// ステータス行がパース済みか確認
    pub fn has_status_line(&self) -> bool {
        !self.protocol_version.is_empty()
    }

    /// レコードを空に戻す
    pub fn reset(&mut self) {
        self.protocol_version.clear();
        self.status_code = 0;
        self.status_string.clear();
        self.ordered_header_keys.clear();
        self.headers.clear();
        self.unparsed.clear();
    }

    /// ステータスコードが情報レスポンス (1xx) か確認
    pub fn is_informational(&self) -> bool {
        (100..200).contains(&self.status_code)
    }

    /// ステータスコードが成功 (2xx) か確認
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// ステータスコードがリダイレクト (3xx) か確認
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status_code)
    }

    /// ステータスコードがクライアントエラー (4xx) か確認
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// ステータスコードがサーバーエラー (5xx) か確認
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}

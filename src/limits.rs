/// パーサーの制限設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLimits {
    /// 最大入力サイズ (デフォルト: 10MB)
    pub max_input_size: usize,
    /// 最大ヘッダー数 (デフォルト: 100)
    ///
    /// 重複したヘッダー名も 1 行ごとに数える。
    pub max_headers_count: usize,
    /// 最大行長 (デフォルト: 64KB)
    ///
    /// ステータス行、ヘッダー行、未解析行のすべてに適用される。
    /// 改行文字は含まない。
    pub max_line_size: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_input_size: 10 * 1024 * 1024, // 10MB
            max_headers_count: 100,
            max_line_size: 64 * 1024, // 64KB
        }
    }
}

impl ParseLimits {
    /// 制限なしの設定を作成
    pub fn unlimited() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_headers_count: usize::MAX,
            max_line_size: usize::MAX,
        }
    }
}

//! 行単位のカーソル

/// 入力の先頭から切り出した 1 行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    /// 改行を除いた内容
    pub content: &'a [u8],
    /// `\n` で終わっているか
    pub terminated: bool,
}

impl<'a> Line<'a> {
    /// 改行を含めた消費バイト数
    pub fn consumed(&self) -> usize {
        self.content.len() + usize::from(self.terminated)
    }

    /// 内容を UTF-8 として取得
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.content).ok()
    }
}

/// 入力の先頭 1 行を取り出す
///
/// 入力が空なら `None`。`\r` は内容の一部として扱う。
pub(crate) fn next_line(input: &[u8]) -> Option<Line<'_>> {
    if input.is_empty() {
        return None;
    }
    let line = match input.iter().position(|&b| b == b'\n') {
        Some(pos) => Line {
            content: &input[..pos],
            terminated: true,
        },
        None => Line {
            content: input,
            terminated: false,
        },
    };
    Some(line)
}

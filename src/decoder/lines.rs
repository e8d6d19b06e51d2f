//! 未解析行の取り込み

use std::convert::Infallible;

use super::line::next_line;

/// 行を 1 行そのまま取り込む
///
/// 消費したバイト数 (改行を含む) と、改行を除いた内容を返す。
/// 内容はバイト列のまま扱い、UTF-8 として不正でも変換しない。
/// 入力が空なら `None`。最後の行が改行で終わっていない場合もその内容を返す。
pub fn parse_raw_line(input: &[u8]) -> Option<(usize, &[u8])> {
    next_line(input).map(|line| (line.consumed(), line.content))
}

/// 残りの行をすべて取り込む
///
/// 空行も空のバイト列として順番通りに残す。常に入力全体を消費する。
pub fn parse_lines(input: &[u8]) -> (usize, Vec<Vec<u8>>) {
    let mut lines = Vec::new();
    let consumed = scan_lines(input, |content| {
        lines.push(content.to_vec());
        Ok::<(), Infallible>(())
    });
    match consumed {
        Ok(consumed) => (consumed, lines),
        Err(never) => match never {},
    }
}

/// 残りの行を走査し、1 行ごとに `visit` を呼ぶ
///
/// `visit` がエラーを返した行は消費せずに中断する。
pub(crate) fn scan_lines<E>(
    input: &[u8],
    mut visit: impl FnMut(&[u8]) -> Result<(), E>,
) -> Result<usize, E> {
    let mut pos = 0;
    while let Some((consumed, content)) = parse_raw_line(&input[pos..]) {
        visit(content)?;
        pos += consumed;
    }
    Ok(pos)
}

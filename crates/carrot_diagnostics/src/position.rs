//! Position - 源码位置信息
//!
//! Carrot 的诊断以 (行, 列) 报告位置，两者均从 1 开始；
//! 列号按字符计数，而不是字节。

use std::fmt;

/// 源码中的一个位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// 行索引：记录每一行的起始字节偏移，
/// 用于在字节偏移与 [`Position`] 之间换算。
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_starts }
    }

    /// 字节偏移 -> 位置
    pub fn position(&self, source: &str, offset: usize) -> Position {
        let offset = offset.min(source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let column = source
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - line_start);
        Position::new(line + 1, column + 1)
    }

    /// 位置 -> 字节偏移（越界时截断到源码末尾）
    pub fn offset(&self, source: &str, position: Position) -> usize {
        let Some(&line_start) = self.line_starts.get(position.line.saturating_sub(1)) else {
            return source.len();
        };
        source[line_start..]
            .char_indices()
            .nth(position.column.saturating_sub(1))
            .map(|(i, _)| line_start + i)
            .unwrap_or(source.len())
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

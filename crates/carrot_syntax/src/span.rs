//! 源码区间
//!
//! 解析器直接以 (行, 列) 区间作为 chumsky 的 Span，
//! AST 节点因此可以直接拿到 [`Position`]，无需再回查字节偏移。

use carrot_diagnostics::Position;
use std::fmt;
use std::ops::Range;

/// 源码中的一段区间 [start, end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SrcSpan {
    pub start: Position,
    pub end: Position,
}

impl SrcSpan {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl chumsky::Span for SrcSpan {
    type Context = ();
    type Offset = Position;

    fn new(_context: Self::Context, range: Range<Self::Offset>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }

    fn context(&self) -> Self::Context {}

    fn start(&self) -> Self::Offset {
        self.start
    }

    fn end(&self) -> Self::Offset {
        self.end
    }
}

impl fmt::Display for SrcSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

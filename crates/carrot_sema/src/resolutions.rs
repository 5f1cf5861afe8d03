//! Resolutions - 名称解析结果旁表
//!
//! AST 保持不可变；每个标识符出现处解析到的符号按其源码位置记录在这里。

use crate::symbol::Symbol;
use carrot_diagnostics::Position;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Resolutions {
    map: HashMap<Position, Symbol>,
}

impl Resolutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pos: Position, symbol: Symbol) {
        self.map.insert(pos, symbol);
    }

    pub fn get(&self, pos: Position) -> Option<&Symbol> {
        self.map.get(&pos)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// 按位置顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Symbol)> {
        let mut entries: Vec<_> = self.map.iter().map(|(pos, sym)| (*pos, sym)).collect();
        entries.sort_by_key(|(pos, _)| *pos);
        entries.into_iter()
    }
}

use super::{MissingArgument, ScopeError};
use crate::symbol::Symbol;
use std::collections::HashMap;
use std::fmt;

/// 作用域栈 - 管理嵌套作用域
///
/// `frames` 的最后一个元素是最内层帧。
#[derive(Debug)]
pub struct ScopeStack {
    frames: Vec<HashMap<String, Symbol>>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// 创建新的作用域栈，恰好含一个帧
    pub fn new() -> Self {
        Self {
            frames: vec![HashMap::new()],
        }
    }

    /// 当前帧数
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn innermost(&self) -> Result<&HashMap<String, Symbol>, ScopeError> {
        self.frames.last().ok_or(ScopeError::EmptySymTable)
    }

    /// 在最内层帧登记符号
    ///
    /// 检查顺序：空栈、两者皆缺、缺名字、缺符号、重复。失败时不修改任何状态。
    pub fn add_decl(&mut self, name: Option<&str>, symbol: Option<Symbol>) -> Result<(), ScopeError> {
        let frame = self.frames.last_mut().ok_or(ScopeError::EmptySymTable)?;

        let (name, symbol) = match (name, symbol) {
            (None, None) => return Err(MissingArgument::Both.into()),
            (None, Some(_)) => return Err(MissingArgument::Name.into()),
            (Some(_), None) => return Err(MissingArgument::Symbol.into()),
            (Some(name), Some(symbol)) => (name, symbol),
        };

        if frame.contains_key(name) {
            return Err(ScopeError::DuplicateSymbol {
                name: name.to_string(),
            });
        }

        frame.insert(name.to_string(), symbol);
        Ok(())
    }

    /// 登记符号（名字与符号都存在时的便捷形式）
    pub fn declare(&mut self, name: &str, symbol: Symbol) -> Result<(), ScopeError> {
        self.add_decl(Some(name), Some(symbol))
    }

    /// 进入新作用域
    pub fn add_scope(&mut self) {
        self.frames.push(HashMap::new());
        tracing::trace!(depth = self.frames.len(), "scope pushed");
    }

    /// 退出最内层作用域
    pub fn remove_scope(&mut self) -> Result<(), ScopeError> {
        self.frames.pop().ok_or(ScopeError::EmptySymTable)?;
        tracing::trace!(depth = self.frames.len(), "scope popped");
        Ok(())
    }

    /// 仅在最内层帧查找
    pub fn lookup_local(&self, name: &str) -> Result<Option<&Symbol>, ScopeError> {
        Ok(self.innermost()?.get(name))
    }

    /// 最内层帧中符号的可变引用
    pub fn lookup_local_mut(&mut self, name: &str) -> Result<Option<&mut Symbol>, ScopeError> {
        let frame = self.frames.last_mut().ok_or(ScopeError::EmptySymTable)?;
        Ok(frame.get_mut(name))
    }

    /// 由内向外查找，第一个命中者胜出
    pub fn lookup_global(&self, name: &str) -> Result<Option<&Symbol>, ScopeError> {
        if self.frames.is_empty() {
            return Err(ScopeError::EmptySymTable);
        }
        Ok(self.frames.iter().rev().find_map(|frame| frame.get(name)))
    }

    /// 调试输出：由内向外打印所有帧
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

/// 每帧一行，名字按字典序：`{x=int, y=bool}`
impl fmt::Display for ScopeStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Sym Table ===")?;
        for frame in self.frames.iter().rev() {
            let mut entries: Vec<_> = frame.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let entries: Vec<String> = entries
                .into_iter()
                .map(|(name, symbol)| format!("{}={}", name, symbol))
                .collect();
            writeln!(f, "{{{}}}", entries.join(", "))?;
        }
        Ok(())
    }
}

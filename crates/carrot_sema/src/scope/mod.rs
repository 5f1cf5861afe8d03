//! Scope Management
//!
//! 作用域管理：栈式的名字 -> 符号帧，最内层优先查找。
//! 违反作用域栈约定的操作以 [`ScopeError`] 报告。

pub mod stack;
pub use stack::ScopeStack;

use thiserror::Error;

/// 作用域栈约定违例
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// 对没有任何帧的栈执行了除 add_scope 以外的操作
    #[error("symbol table has no scopes")]
    EmptySymTable,

    #[error("wrong argument: {0}")]
    WrongArgument(#[from] MissingArgument),

    /// 最内层帧中已有同名符号
    #[error("'{name}' is already declared in the innermost scope")]
    DuplicateSymbol { name: String },
}

/// `add_decl` 缺少的参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingArgument {
    #[error("id name and symbol are both absent")]
    Both,

    #[error("id name is absent")]
    Name,

    #[error("symbol is absent")]
    Symbol,
}

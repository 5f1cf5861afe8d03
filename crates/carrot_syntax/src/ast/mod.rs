pub mod decl;
pub mod expr;
pub mod stmt;
pub mod types;

// 重新导出核心类型，方便外部直接使用 carrot_syntax::ast::Expr 等
pub use decl::{Block, Decl, FnDecl, FormalDecl, StructDecl, VarDecl};
pub use expr::{BinaryOp, CallExpr, Expr, ExprKind, UnaryOp};
pub use stmt::Stmt;
pub use types::TypeSpec;

use carrot_diagnostics::Position;
use std::fmt;

// 整个程序：顶层声明序列
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub decls: Vec<Decl>,
}

/// 标识符的一次出现
///
/// 位置是它的身份：语义分析的解析结果以位置为键记录在旁表中。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
    pub pos: Position,
}

impl Ident {
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

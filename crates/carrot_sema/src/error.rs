//! Semantic Analysis Error Types
//!
//! 名称分析报告的诊断。全部为致命级别，但不会中断分析。

use carrot_diagnostics::{Diagnostic, Position};
use thiserror::Error;

/// 语义分析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// 同一作用域内重复声明
    #[error("multiply declared identifier")]
    MultiplyDeclared { name: String, pos: Position },

    /// 任何外层作用域都找不到
    #[error("undeclared identifier")]
    Undeclared { name: String, pos: Position },

    #[error("dot-access of non-struct type")]
    DotAccessOfNonStruct { pos: Position },

    #[error("invalid struct field name")]
    InvalidStructField { name: String, pos: Position },

    /// 变量、字段或形参被声明为 void
    #[error("non-function declared void")]
    NonFunctionVoid { name: String, pos: Position },

    /// 结构体类型名不是已声明的结构体
    #[error("invalid name of struct type")]
    InvalidStructTypeName { name: String, pos: Position },
}

impl SemanticError {
    /// 获取错误发生的位置
    pub fn pos(&self) -> Position {
        match self {
            Self::MultiplyDeclared { pos, .. }
            | Self::Undeclared { pos, .. }
            | Self::DotAccessOfNonStruct { pos }
            | Self::InvalidStructField { pos, .. }
            | Self::NonFunctionVoid { pos, .. }
            | Self::InvalidStructTypeName { pos, .. } => *pos,
        }
    }

    /// 涉及的名字（如果有）
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::MultiplyDeclared { name, .. }
            | Self::Undeclared { name, .. }
            | Self::InvalidStructField { name, .. }
            | Self::NonFunctionVoid { name, .. }
            | Self::InvalidStructTypeName { name, .. } => Some(name),
            Self::DotAccessOfNonStruct { .. } => None,
        }
    }

    /// 转换为诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::fatal(self.to_string()).at(self.pos());
        match self {
            Self::MultiplyDeclared { name, .. } => {
                diagnostic.with_note(format!("'{}' is already declared in this scope", name))
            }
            Self::Undeclared { name, .. } => diagnostic.with_note(format!(
                "'{}' is not declared in any enclosing scope",
                name
            )),
            Self::DotAccessOfNonStruct { .. } => diagnostic,
            Self::InvalidStructField { name, .. } => {
                diagnostic.with_note(format!("the struct has no field named '{}'", name))
            }
            Self::NonFunctionVoid { name, .. } => {
                diagnostic.with_note(format!("'{}' cannot have type void", name))
            }
            Self::InvalidStructTypeName { name, .. } => {
                diagnostic.with_note(format!("'{}' does not name a struct type", name))
            }
        }
    }
}

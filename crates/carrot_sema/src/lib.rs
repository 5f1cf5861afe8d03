//! Carrot Semantic Analysis
//!
//! 名称分析：作用域栈形式的符号表，加上一次遍历 AST 的分析 Pass。
//!
//! - 声明处登记符号，重复声明、void 变量、非法结构体类型名报告诊断
//! - 使用处沿作用域链解析名字，成员访问在结构体自己的字段表中解析
//! - 解析结果记录在以标识符位置为键的 [`Resolutions`] 旁表中

pub mod analyzer;
pub mod error;
pub mod resolutions;
pub mod scope;
pub mod symbol;
pub mod types;

// 重新导出核心类型
pub use analyzer::Analyzer;
pub use error::SemanticError;
pub use resolutions::Resolutions;
pub use scope::{MissingArgument, ScopeError, ScopeStack};
pub use symbol::{
    Category, FunctionSymbol, ParameterSymbol, StructDeclSymbol, StructVarSymbol, Symbol,
    VariableSymbol,
};
pub use types::Type;

use carrot_diagnostics::DiagnosticSink;
use carrot_syntax::ast::Program;

/// 语义分析结果
#[derive(Debug)]
pub struct Analysis {
    /// 全局作用域（分析结束后只剩这一帧）
    pub scopes: ScopeStack,
    pub resolutions: Resolutions,
    /// 按遍历顺序排列的语义错误
    pub errors: Vec<SemanticError>,
}

impl Analysis {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 把语义错误按顺序写入诊断收集器
    pub fn report(&self, sink: &mut DiagnosticSink) {
        sink.extend(self.errors.iter().map(SemanticError::to_diagnostic));
    }
}

/// 分析整个程序
///
/// # Errors
///
/// 只有作用域栈约定违例会返回 `Err`；语义错误收集在 [`Analysis::errors`] 中。
pub fn analyze(program: &Program) -> Result<Analysis, ScopeError> {
    let mut analyzer = Analyzer::new();
    analyzer.analyze_program(program)?;

    let (scopes, resolutions, errors) = analyzer.into_parts();
    Ok(Analysis {
        scopes,
        resolutions,
        errors,
    })
}

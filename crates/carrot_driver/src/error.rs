//! Compilation Errors
//!
//! 驱动层的错误类型。语义错误不在这里：它们作为诊断随 [`crate::CheckOutput`] 返回。

use carrot_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
use carrot_sema::ScopeError;
use thiserror::Error;

/// 编译错误
#[derive(Debug, Error)]
pub enum CompileError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 语法错误，连同此前的词法诊断一起返回
    #[error("{} syntax error(s)", count_errors(.0))]
    Syntax(Vec<Diagnostic>),

    /// 作用域栈约定违例（内部错误）
    #[error("symbol table error: {0}")]
    SymbolTable(#[from] ScopeError),
}

impl CompileError {
    /// 转换为诊断列表并收集到 DiagnosticSink
    pub fn collect_to_sink(&self, sink: &mut DiagnosticSink) {
        match self {
            CompileError::Io(err) => sink.add(Diagnostic::fatal(format!("IO error: {}", err))),
            CompileError::Syntax(diagnostics) => sink.extend(diagnostics.iter().cloned()),
            CompileError::SymbolTable(err) => {
                sink.add(Diagnostic::fatal(format!("internal error: {}", err)))
            }
        }
    }

    /// 使用统一诊断系统输出错误；`source` 为 (文件名, 源码)
    pub fn emit(&self, emitter: &Emitter, source: Option<(&str, &str)>) {
        let mut sink = DiagnosticSink::new();
        self.collect_to_sink(&mut sink);

        match source {
            Some((name, text)) => {
                for diagnostic in sink.diagnostics() {
                    emitter.emit_with_source(diagnostic, name, text);
                }
            }
            None => emitter.emit_all(sink.diagnostics()),
        }
    }
}

fn count_errors(diagnostics: &[Diagnostic]) -> usize {
    diagnostics.iter().filter(|d| d.level.is_error()).count()
}

/// 编译结果类型
pub type CompileResult<T> = Result<T, CompileError>;

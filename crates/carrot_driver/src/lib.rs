//! Carrot Compiler Driver
//!
//! 串联各阶段：词法 -> 语法 -> 名称分析。
//! 词法与语义诊断都收集进同一个 [`DiagnosticSink`]，按报告顺序排列。

pub mod error;

pub use error::{CompileError, CompileResult};

use carrot_diagnostics::DiagnosticSink;
use carrot_sema::{analyze, Analysis};
use carrot_syntax::ast::Program;
use carrot_syntax::{parse, syntax_diagnostic, Lexer};
use std::path::Path;
use tracing::info;

/// 检查结果
#[derive(Debug)]
pub struct CheckOutput {
    pub program: Program,
    /// 全局作用域与解析结果
    pub analysis: Analysis,
    /// 词法警告/错误与语义错误
    pub diagnostics: DiagnosticSink,
}

impl CheckOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// 解析源代码；语法错误连同已有的词法诊断一起返回
fn parse_source(source: &str, sink: &mut DiagnosticSink) -> CompileResult<Program> {
    // 词法分析
    let lexer = Lexer::new(source);
    let eoi = lexer.eoi();
    let tokens = lexer.tokenize(sink);
    info!(tokens = tokens.len(), diagnostics = sink.len(), "lexing finished");

    // 语法分析
    match parse(tokens, eoi) {
        Ok(program) => {
            info!(decls = program.decls.len(), "parsing finished");
            Ok(program)
        }
        Err(errors) => {
            info!(errors = errors.len(), "parsing failed");
            let mut diagnostics = std::mem::take(sink).into_diagnostics();
            diagnostics.extend(errors.iter().map(syntax_diagnostic));
            Err(CompileError::Syntax(diagnostics))
        }
    }
}

/// 检查 Carrot 源代码
///
/// # Example
/// ```
/// use carrot_driver::check;
///
/// let output = check("int x; void main() { x = 1; }").unwrap();
/// assert!(!output.has_errors());
/// ```
pub fn check(source: &str) -> CompileResult<CheckOutput> {
    let mut diagnostics = DiagnosticSink::new();

    // 1. 词法 + 语法分析
    let program = parse_source(source, &mut diagnostics)?;

    // 2. 名称分析
    let analysis = analyze(&program)?;
    analysis.report(&mut diagnostics);
    info!(
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        "name analysis finished"
    );

    Ok(CheckOutput {
        program,
        analysis,
        diagnostics,
    })
}

/// 从文件检查
pub fn check_file(path: impl AsRef<Path>) -> CompileResult<CheckOutput> {
    let source = std::fs::read_to_string(path)?;
    check(&source)
}

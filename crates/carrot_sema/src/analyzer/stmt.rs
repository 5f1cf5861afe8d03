use super::Analyzer;
use crate::scope::ScopeError;
use carrot_syntax::ast::Stmt;

pub fn analyze_stmt(analyzer: &mut Analyzer, stmt: &Stmt) -> Result<(), ScopeError> {
    match stmt {
        Stmt::Assign(expr)
        | Stmt::PreInc(expr)
        | Stmt::PreDec(expr)
        | Stmt::PostInc(expr)
        | Stmt::PostDec(expr)
        | Stmt::Read(expr)
        | Stmt::Write(expr)
        | Stmt::Call(expr) => {
            analyzer.analyze_expr(expr)?;
        }
        Stmt::If { cond, body } => {
            analyzer.analyze_expr(cond)?;
            analyzer.in_scope(|analyzer| analyzer.analyze_block(body))?;
        }
        Stmt::IfElse {
            cond,
            then_block,
            else_block,
        } => {
            analyzer.analyze_expr(cond)?;
            // 两个分支各自独立的作用域
            analyzer.in_scope(|analyzer| analyzer.analyze_block(then_block))?;
            analyzer.in_scope(|analyzer| analyzer.analyze_block(else_block))?;
        }
        Stmt::While { cond, body } | Stmt::Repeat { cond, body } => {
            analyzer.analyze_expr(cond)?;
            analyzer.in_scope(|analyzer| analyzer.analyze_block(body))?;
        }
        Stmt::Return(value) => {
            if let Some(expr) = value {
                analyzer.analyze_expr(expr)?;
            }
        }
    }
    Ok(())
}

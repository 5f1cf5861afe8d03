use super::Analyzer;
use crate::error::SemanticError;
use crate::scope::ScopeError;
use crate::symbol::Symbol;
use carrot_syntax::ast::{Expr, ExprKind, Ident};

pub fn analyze_expr(analyzer: &mut Analyzer, expr: &Expr) -> Result<Symbol, ScopeError> {
    match &expr.kind {
        ExprKind::IntLit(_) | ExprKind::StrLit(_) | ExprKind::True | ExprKind::False => {
            Ok(Symbol::Undefined)
        }
        ExprKind::Id(id) => resolve_ident(analyzer, id),
        ExprKind::DotAccess { base, field } => analyze_dot_access(analyzer, base, field),
        ExprKind::Assign { lhs, rhs } => {
            // 先右后左，结果为左侧的符号
            analyzer.analyze_expr(rhs)?;
            analyzer.analyze_expr(lhs)
        }
        ExprKind::Call(call) => {
            for arg in &call.args {
                analyzer.analyze_expr(arg)?;
            }
            resolve_ident(analyzer, &call.callee)
        }
        ExprKind::Unary { operand, .. } => analyzer.analyze_expr(operand),
        ExprKind::Binary { lhs, rhs, .. } => {
            // 先分析第二个操作数，结果为第一个操作数的符号
            analyzer.analyze_expr(rhs)?;
            analyzer.analyze_expr(lhs)
        }
    }
}

/// 沿作用域链解析标识符
fn resolve_ident(analyzer: &mut Analyzer, id: &Ident) -> Result<Symbol, ScopeError> {
    let symbol = match analyzer.scopes.lookup_global(&id.name)? {
        Some(symbol) => symbol.clone(),
        None => {
            analyzer.report(SemanticError::Undeclared {
                name: id.name.clone(),
                pos: id.pos,
            });
            Symbol::Undefined
        }
    };
    analyzer.resolutions.record(id.pos, symbol.clone());
    Ok(symbol)
}

/// 成员访问：基表达式必须是结构体类型，字段在该结构体自己的字段表中查找
fn analyze_dot_access(
    analyzer: &mut Analyzer,
    base: &Expr,
    field: &Ident,
) -> Result<Symbol, ScopeError> {
    let base_symbol = analyzer.analyze_expr(base)?;

    if base_symbol.struct_name().is_none() {
        analyzer.report(SemanticError::DotAccessOfNonStruct { pos: base.pos });
        return Ok(Symbol::Undefined);
    }

    // 字段表在基符号声明时已绑定，使用处的同名遮蔽不影响成员访问
    let resolved = match base_symbol.fields() {
        Some(fields) => fields.lookup_global(&field.name)?.cloned(),
        None => None,
    };

    let symbol = match resolved {
        Some(symbol) => symbol,
        None => {
            analyzer.report(SemanticError::InvalidStructField {
                name: field.name.clone(),
                pos: field.pos,
            });
            Symbol::Undefined
        }
    };
    analyzer.resolutions.record(field.pos, symbol.clone());
    Ok(symbol)
}

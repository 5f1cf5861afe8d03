//! Parser Module
//!
//! 基于 chumsky 的递归下降解析器。Span 使用 [`SrcSpan`]，
//! 因此 AST 中的位置直接是 (行, 列)。

pub mod decl;
pub mod expr;
pub mod helpers;
pub mod stmt;

use crate::ast::Program;
use crate::lexer::{SpannedToken, Token};
use crate::span::SrcSpan;
use carrot_diagnostics::Diagnostic;
use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use chumsky::Stream;

pub type ParserError = Simple<Token, SrcSpan>;

/// 主入口：解析整个程序
pub fn program_parser() -> impl Parser<Token, Program, Error = ParserError> {
    decl::decl_parser()
        .repeated()
        .map(|decls| Program { decls })
        .then_ignore(end())
}

/// 解析 Token 序列
pub fn parse(tokens: Vec<SpannedToken>, eoi: SrcSpan) -> Result<Program, Vec<ParserError>> {
    let stream = Stream::from_iter(eoi, tokens.into_iter().map(|t| (t.token, t.span)));
    program_parser().parse(stream)
}

/// 语法错误 -> 诊断
pub fn syntax_diagnostic(error: &ParserError) -> Diagnostic {
    let found = match error.found() {
        Some(token) => format!("`{}`", token),
        None => "end of input".to_string(),
    };

    let mut expected: Vec<String> = error
        .expected()
        .map(|token| match token {
            Some(token) => format!("`{}`", token),
            None => "end of input".to_string(),
        })
        .collect();
    expected.sort();
    expected.dedup();

    let mut diagnostic = Diagnostic::fatal("syntax error").at(error.span().start);

    diagnostic = match error.reason() {
        SimpleReason::Unclosed { delimiter, .. } => {
            diagnostic.with_note(format!("unclosed delimiter `{}`", delimiter))
        }
        SimpleReason::Custom(message) => diagnostic.with_note(message.clone()),
        SimpleReason::Unexpected => diagnostic.with_note(format!("unexpected {}", found)),
    };

    if !expected.is_empty() {
        diagnostic = diagnostic.with_note(format!("expected one of {}", expected.join(", ")));
    }
    diagnostic
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::lexer::Lexer;
    use carrot_diagnostics::Position;

    fn parse_source(source: &str) -> Result<Program, Vec<ParserError>> {
        let (tokens, eoi, sink) = Lexer::tokenize_collect(source);
        assert!(sink.is_empty(), "lexer diagnostics: {:?}", sink.messages());
        parse(tokens, eoi)
    }

    #[test]
    fn test_parse_globals_and_function() {
        let program = parse_source(
            r#"
            int g;
            bool flag;
            int main(int a, bool b) {
                int x;
                x = a + 1;
                return x;
            }
            "#,
        )
        .unwrap();

        assert_eq!(program.decls.len(), 3);
        match &program.decls[2] {
            Decl::Function(func) => {
                assert_eq!(func.name.name, "main");
                assert_eq!(func.return_type, TypeSpec::Int);
                assert_eq!(func.formals.len(), 2);
                assert_eq!(func.formals[1].ty, TypeSpec::Bool);
                assert_eq!(func.body.decls.len(), 1);
                assert_eq!(func.body.stmts.len(), 2);
            }
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_struct_and_dot_access() {
        let program = parse_source(
            r#"
            struct Pt { int x; int y; };
            Pt p;
            void f() { p.x = 3; }
            "#,
        )
        .unwrap();

        match &program.decls[0] {
            Decl::Struct(decl) => {
                assert_eq!(decl.name.name, "Pt");
                assert_eq!(decl.fields.len(), 2);
            }
            other => panic!("expected struct, got {:?}", other),
        }

        match &program.decls[1] {
            Decl::Var(var) => {
                assert!(var.ty.is_struct());
                assert_eq!(var.ty.struct_name().unwrap().name, "Pt");
                assert_eq!(var.name.pos, Position::new(3, 16));
            }
            other => panic!("expected var, got {:?}", other),
        }

        let Decl::Function(func) = &program.decls[2] else {
            panic!("expected function");
        };
        let Stmt::Assign(assign) = &func.body.stmts[0] else {
            panic!("expected assignment");
        };
        let ExprKind::Assign { lhs, .. } = &assign.kind else {
            panic!("expected assign expression");
        };
        match &lhs.kind {
            ExprKind::DotAccess { base, field } => {
                assert_eq!(field.name, "x");
                assert!(matches!(&base.kind, ExprKind::Id(id) if id.name == "p"));
                assert_eq!(lhs.pos, base.pos);
            }
            other => panic!("expected dot access, got {:?}", other),
        }
    }

    #[test]
    fn test_struct_keyword_type() {
        let program = parse_source("struct Pt { int x; } struct Pt q;").unwrap();
        assert_eq!(program.decls.len(), 2);
        assert!(matches!(&program.decls[1], Decl::Var(v) if v.ty.is_struct()));
    }

    #[test]
    fn test_precedence() {
        let program = parse_source("void f() { x = 1 + 2 * 3 < 4 && !b; }").unwrap();
        let Decl::Function(func) = &program.decls[0] else {
            panic!("expected function");
        };
        let Stmt::Assign(assign) = &func.body.stmts[0] else {
            panic!("expected assignment");
        };
        let ExprKind::Assign { rhs, .. } = &assign.kind else {
            panic!("expected assign expression");
        };
        // (((1 + (2 * 3)) < 4) && (!b))
        let ExprKind::Binary { op, lhs, rhs } = &rhs.kind else {
            panic!("expected binary");
        };
        assert_eq!(*op, BinaryOp::And);
        assert!(matches!(&rhs.kind, ExprKind::Unary { op: UnaryOp::Not, .. }));
        let ExprKind::Binary { op, lhs, .. } = &lhs.kind else {
            panic!("expected comparison");
        };
        assert_eq!(*op, BinaryOp::Lt);
        assert!(matches!(&lhs.kind, ExprKind::Binary { op: BinaryOp::Add, .. }));
    }

    #[test]
    fn test_statements() {
        let program = parse_source(
            r#"
            void f() {
                cin >> x;
                cout << "hi";
                x++;
                --x;
                g(x, 1);
                if (x) { int y; y = 1; } else { x = 2; }
                while (true) { }
                repeat (x) { x--; }
                return;
            }
            "#,
        )
        .unwrap();
        let Decl::Function(func) = &program.decls[0] else {
            panic!("expected function");
        };
        let stmts = &func.body.stmts;
        assert_eq!(stmts.len(), 9);
        assert!(matches!(stmts[0], Stmt::Read(_)));
        assert!(matches!(stmts[1], Stmt::Write(_)));
        assert!(matches!(stmts[2], Stmt::PostInc(_)));
        assert!(matches!(stmts[3], Stmt::PreDec(_)));
        assert!(matches!(stmts[4], Stmt::Call(_)));
        match &stmts[5] {
            Stmt::IfElse {
                then_block,
                else_block,
                ..
            } => {
                assert_eq!(then_block.decls.len(), 1);
                assert_eq!(else_block.stmts.len(), 1);
            }
            other => panic!("expected if-else, got {:?}", other),
        }
        assert!(matches!(stmts[6], Stmt::While { .. }));
        assert!(matches!(stmts[7], Stmt::Repeat { .. }));
        assert!(matches!(stmts[8], Stmt::Return(None)));
    }

    #[test]
    fn test_syntax_error() {
        let errors = parse_source("int main( { }").unwrap_err();
        assert!(!errors.is_empty());
        let diagnostic = syntax_diagnostic(&errors[0]);
        assert_eq!(diagnostic.message, "syntax error");
        assert!(diagnostic.position.is_some());
    }
}

//! Expression Parser
//!
//! 表达式解析：字面量、位置(loc)、调用、一元/二元运算、赋值

use super::helpers::ident_parser;
use super::ParserError;
use crate::ast::*;
use crate::lexer::Token;
use crate::span::SrcSpan;
use chumsky::prelude::*;
use chumsky::BoxedParser;

/// 解析可赋值位置: x 或 x.a.b
pub fn loc_parser() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    ident_parser()
        .map(|id| {
            let pos = id.pos;
            Expr::new(ExprKind::Id(id), pos)
        })
        .then(just(Token::Dot).ignore_then(ident_parser()).repeated())
        .foldl(|base, field| {
            let pos = base.pos;
            Expr::new(
                ExprKind::DotAccess {
                    base: Box::new(base),
                    field,
                },
                pos,
            )
        })
}

/// 解析函数调用: f(a, b)
pub fn call_parser<'a>(
    expr: impl Parser<Token, Expr, Error = ParserError> + Clone + 'a,
) -> impl Parser<Token, Expr, Error = ParserError> + Clone + 'a {
    ident_parser()
        .then(
            expr.separated_by(just(Token::Comma))
                .delimited_by(just(Token::LParen), just(Token::RParen)),
        )
        .map(|(callee, args)| {
            let pos = callee.pos;
            Expr::new(ExprKind::Call(CallExpr { callee, args }), pos)
        })
}

/// 左结合的一层二元运算
fn binary_level<'a>(
    operand: impl Parser<Token, Expr, Error = ParserError> + Clone + 'a,
    op: impl Parser<Token, BinaryOp, Error = ParserError> + Clone + 'a,
) -> BoxedParser<'a, Token, Expr, ParserError> {
    operand
        .clone()
        .then(op.then(operand).repeated())
        .foldl(|lhs, (op, rhs)| {
            let pos = lhs.pos;
            Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                pos,
            )
        })
        .boxed()
}

/// 解析表达式 (公共接口)
pub fn expr_parser() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    recursive(|expr| {
        let literal = select! {
            Token::IntLit(value) => ExprKind::IntLit(value),
            Token::StrLit(raw) => ExprKind::StrLit(raw),
            Token::True => ExprKind::True,
            Token::False => ExprKind::False,
        }
        .map_with_span(|kind, span: SrcSpan| Expr::new(kind, span.start));

        let paren = expr
            .clone()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        // 调用必须先于 loc 尝试，否则 f(x) 会被解析成 f
        let atom = choice((call_parser(expr.clone()), literal, loc_parser(), paren));

        // 一元运算的位置取操作数的位置
        let unary = just(Token::Minus)
            .to(UnaryOp::Neg)
            .or(just(Token::Not).to(UnaryOp::Not))
            .repeated()
            .then(atom)
            .foldr(|op, operand| {
                let pos = operand.pos;
                Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    pos,
                )
            })
            .boxed();

        let product = binary_level(
            unary,
            just(Token::Star)
                .to(BinaryOp::Mul)
                .or(just(Token::Slash).to(BinaryOp::Div)),
        );

        let sum = binary_level(
            product,
            just(Token::Plus)
                .to(BinaryOp::Add)
                .or(just(Token::Minus).to(BinaryOp::Sub)),
        );

        let relation = binary_level(
            sum,
            choice((
                just(Token::EqEq).to(BinaryOp::Eq),
                just(Token::NotEq).to(BinaryOp::Neq),
                just(Token::Leq).to(BinaryOp::Leq),
                just(Token::Geq).to(BinaryOp::Geq),
                just(Token::Lt).to(BinaryOp::Lt),
                just(Token::Gt).to(BinaryOp::Gt),
            )),
        );

        let logical_and = binary_level(relation, just(Token::And).to(BinaryOp::And));
        let logical_or = binary_level(logical_and, just(Token::Or).to(BinaryOp::Or));

        // 赋值: 右结合
        let assign = loc_parser()
            .then_ignore(just(Token::Assign))
            .then(expr)
            .map(|(lhs, rhs)| {
                let pos = lhs.pos;
                Expr::new(
                    ExprKind::Assign {
                        lhs: Box::new(lhs),
                        rhs: Box::new(rhs),
                    },
                    pos,
                )
            });

        assign.or(logical_or)
    })
}

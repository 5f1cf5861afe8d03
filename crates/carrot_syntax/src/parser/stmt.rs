//! Statement Parser
//!
//! 语句与块解析。块内先是变量声明，再是语句。

use super::expr::{call_parser, expr_parser, loc_parser};
use super::helpers::var_decl_parser;
use super::ParserError;
use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;

/// 解析块: { varDecl* stmt* }
pub fn block_parser() -> impl Parser<Token, Block, Error = ParserError> + Clone {
    recursive(|block| {
        var_decl_parser()
            .repeated()
            .then(stmt_parser(block).repeated())
            .delimited_by(just(Token::LBrace), just(Token::RBrace))
            .map(|(decls, stmts)| Block { decls, stmts })
    })
}

/// 解析语句；`block` 用于 if/while/repeat 的语句体
pub fn stmt_parser<'a>(
    block: impl Parser<Token, Block, Error = ParserError> + Clone + 'a,
) -> impl Parser<Token, Stmt, Error = ParserError> + Clone + 'a {
    // 赋值语句: loc = exp;
    let assign = loc_parser()
        .then_ignore(just(Token::Assign))
        .then(expr_parser())
        .then_ignore(just(Token::Semicolon))
        .map(|(lhs, rhs)| {
            let pos = lhs.pos;
            Stmt::Assign(Expr::new(
                ExprKind::Assign {
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                pos,
            ))
        });

    // 自增自减
    let post_inc = loc_parser()
        .then_ignore(just(Token::PlusPlus))
        .then_ignore(just(Token::Semicolon))
        .map(Stmt::PostInc);
    let post_dec = loc_parser()
        .then_ignore(just(Token::MinusMinus))
        .then_ignore(just(Token::Semicolon))
        .map(Stmt::PostDec);
    let pre_inc = just(Token::PlusPlus)
        .ignore_then(loc_parser())
        .then_ignore(just(Token::Semicolon))
        .map(Stmt::PreInc);
    let pre_dec = just(Token::MinusMinus)
        .ignore_then(loc_parser())
        .then_ignore(just(Token::Semicolon))
        .map(Stmt::PreDec);

    // 输入输出
    let read = just(Token::Cin)
        .ignore_then(just(Token::Read))
        .ignore_then(loc_parser())
        .then_ignore(just(Token::Semicolon))
        .map(Stmt::Read);
    let write = just(Token::Cout)
        .ignore_then(just(Token::Write))
        .ignore_then(expr_parser())
        .then_ignore(just(Token::Semicolon))
        .map(Stmt::Write);

    let cond = expr_parser().delimited_by(just(Token::LParen), just(Token::RParen));

    // If / If-Else
    let if_stmt = just(Token::If)
        .ignore_then(cond.clone())
        .then(block.clone())
        .then(just(Token::Else).ignore_then(block.clone()).or_not())
        .map(|((cond, then_block), else_block)| match else_block {
            Some(else_block) => Stmt::IfElse {
                cond,
                then_block,
                else_block,
            },
            None => Stmt::If {
                cond,
                body: then_block,
            },
        });

    // While / Repeat
    let while_stmt = just(Token::While)
        .ignore_then(cond.clone())
        .then(block.clone())
        .map(|(cond, body)| Stmt::While { cond, body });
    let repeat_stmt = just(Token::Repeat)
        .ignore_then(cond)
        .then(block)
        .map(|(cond, body)| Stmt::Repeat { cond, body });

    // 调用语句
    let call = call_parser(expr_parser())
        .then_ignore(just(Token::Semicolon))
        .map(Stmt::Call);

    // Return
    let ret = just(Token::Return)
        .ignore_then(expr_parser().or_not())
        .then_ignore(just(Token::Semicolon))
        .map(Stmt::Return);

    choice((
        assign,
        post_inc,
        post_dec,
        pre_inc,
        pre_dec,
        read,
        write,
        if_stmt,
        while_stmt,
        repeat_stmt,
        call,
        ret,
    ))
}

//! Declaration Parser
//!
//! 声明解析：结构体、函数、变量

use super::helpers::{formal_parser, ident_parser, type_parser, var_decl_parser};
use super::stmt::block_parser;
use super::ParserError;
use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;

/// 解析顶层声明
pub fn decl_parser() -> impl Parser<Token, Decl, Error = ParserError> + Clone {
    // 结构体声明: struct Point { int x; int y; };
    let struct_decl = just(Token::Struct)
        .ignore_then(ident_parser())
        .then(
            var_decl_parser()
                .repeated()
                .delimited_by(just(Token::LBrace), just(Token::RBrace)),
        )
        .then_ignore(just(Token::Semicolon).or_not())
        .map(|(name, fields)| Decl::Struct(StructDecl { name, fields }));

    // 函数声明: int add(int a, int b) { ... }
    let fn_decl = type_parser()
        .then(ident_parser())
        .then(
            formal_parser()
                .separated_by(just(Token::Comma))
                .delimited_by(just(Token::LParen), just(Token::RParen)),
        )
        .then(block_parser())
        .map(|(((return_type, name), formals), body)| {
            Decl::Function(FnDecl {
                return_type,
                name,
                formals,
                body,
            })
        });

    let var_decl = var_decl_parser().map(Decl::Var);

    choice((struct_decl, fn_decl, var_decl))
}

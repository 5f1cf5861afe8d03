//! Parser Helper Functions
//!
//! 辅助解析函数：标识符、类型、变量声明、形参

use super::ParserError;
use crate::ast::{FormalDecl, Ident, TypeSpec, VarDecl};
use crate::lexer::Token;
use crate::span::SrcSpan;
use chumsky::prelude::*;

/// 解析标识符
pub fn ident_parser() -> impl Parser<Token, Ident, Error = ParserError> + Clone {
    select! { Token::Id(name) => name }
        .map_with_span(|name, span: SrcSpan| Ident::new(name, span.start))
}

/// 解析类型: int | bool | void | [struct] Name
pub fn type_parser() -> impl Parser<Token, TypeSpec, Error = ParserError> + Clone {
    let basic = select! {
        Token::Int => TypeSpec::Int,
        Token::Bool => TypeSpec::Bool,
        Token::Void => TypeSpec::Void,
    };

    let struct_type = just(Token::Struct)
        .or_not()
        .ignore_then(ident_parser())
        .map(TypeSpec::Struct);

    basic.or(struct_type)
}

/// 解析变量声明: type name ;
pub fn var_decl_parser() -> impl Parser<Token, VarDecl, Error = ParserError> + Clone {
    type_parser()
        .then(ident_parser())
        .then_ignore(just(Token::Semicolon))
        .map(|(ty, name)| VarDecl { ty, name })
}

/// 解析形参: type name
pub fn formal_parser() -> impl Parser<Token, FormalDecl, Error = ParserError> + Clone {
    type_parser()
        .then(ident_parser())
        .map(|(ty, name)| FormalDecl { ty, name })
}

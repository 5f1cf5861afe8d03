//! Carrot Syntax
//!
//! Carrot 语言前端：Token 定义与词法分析、AST、解析器。

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod span;

pub use lexer::{LexError, Lexer, SpannedToken, Token};
pub use parser::{parse, syntax_diagnostic, ParserError};
pub use span::SrcSpan;

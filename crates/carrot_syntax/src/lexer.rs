//! Carrot 词法分析
//!
//! Token 定义由 logos 生成状态机；[`Lexer`] 在其上补充位置换算与错误报告。
//! 词法错误不会中断扫描：出错的片段被丢弃，并向诊断收集器报告一条致命错误。

use crate::span::SrcSpan;
use carrot_diagnostics::{Diagnostic, DiagnosticSink, LineIndex};
use logos::Logos;
use std::fmt;
use thiserror::Error;

/// 词法错误
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub enum LexError {
    #[default]
    #[error("illegal character ignored")]
    IllegalCharacter,

    #[error("string literal with bad escaped character ignored")]
    BadEscape,

    #[error("unterminated string literal ignored")]
    UnterminatedString,

    #[error("unterminated string literal with bad escaped character ignored")]
    UnterminatedBadEscape,
}

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // --- 关键字 ---
    #[token("bool")]
    Bool,
    #[token("int")]
    Int,
    #[token("void")]
    Void,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("struct")]
    Struct,
    #[token("cin")]
    Cin,
    #[token("cout")]
    Cout,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("repeat")]
    Repeat,
    #[token("return")]
    Return,

    // --- 符号 ---
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("<<")]
    Write,
    #[token(">>")]
    Read,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("!")]
    Not,
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    Leq,
    #[token(">=")]
    Geq,
    #[token("=")]
    Assign,

    // --- 字面量与标识符 ---
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Id(String),

    /// 超出 32 位的整数截断为 i32::MAX，由 [`Lexer`] 报告警告
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i32>().unwrap_or(i32::MAX))]
    IntLit(i32),

    /// 保留原始文本（包括两侧引号与转义序列）
    #[regex(r#""([^"\\\n]|\\.)*"?"#, |lex| string_literal(lex.slice()))]
    StrLit(String),

    #[regex(r"(//|#)[^\n]*", logos::skip)]
    Comment,
}

/// 校验字符串字面量：是否闭合、转义是否合法
fn string_literal(raw: &str) -> Result<String, LexError> {
    let mut chars = raw.chars().skip(1);
    let mut bad_escape = false;
    let mut terminated = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if !matches!(chars.next(), Some('n' | 't' | '\'' | '"' | '\\')) {
                    bad_escape = true;
                }
            }
            '"' => {
                terminated = true;
                break;
            }
            _ => {}
        }
    }

    match (terminated, bad_escape) {
        (true, false) => Ok(raw.to_string()),
        (true, true) => Err(LexError::BadEscape),
        (false, false) => Err(LexError::UnterminatedString),
        (false, true) => Err(LexError::UnterminatedBadEscape),
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Token::Bool => "bool",
            Token::Int => "int",
            Token::Void => "void",
            Token::True => "true",
            Token::False => "false",
            Token::Struct => "struct",
            Token::Cin => "cin",
            Token::Cout => "cout",
            Token::If => "if",
            Token::Else => "else",
            Token::While => "while",
            Token::Repeat => "repeat",
            Token::Return => "return",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Semicolon => ";",
            Token::Comma => ",",
            Token::Dot => ".",
            Token::Write => "<<",
            Token::Read => ">>",
            Token::PlusPlus => "++",
            Token::MinusMinus => "--",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Not => "!",
            Token::And => "&&",
            Token::Or => "||",
            Token::EqEq => "==",
            Token::NotEq => "!=",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Leq => "<=",
            Token::Geq => ">=",
            Token::Assign => "=",
            Token::Id(name) => return write!(f, "{}", name),
            Token::IntLit(value) => return write!(f, "{}", value),
            Token::StrLit(raw) => return write!(f, "{}", raw),
            Token::Comment => "comment",
        };
        write!(f, "{}", text)
    }
}

/// 带位置的 Token
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: SrcSpan,
}

/// 词法分析器
///
/// 行号信息保存在自身的 [`LineIndex`] 中，不依赖任何全局状态。
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, Token>,
    lines: LineIndex,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            lines: LineIndex::new(source),
        }
    }

    fn span_of(&self, range: std::ops::Range<usize>) -> SrcSpan {
        SrcSpan::new(
            self.lines.position(self.source, range.start),
            self.lines.position(self.source, range.end),
        )
    }

    /// 输入结束处的区间
    pub fn eoi(&self) -> SrcSpan {
        let end = self.lines.position(self.source, self.source.len());
        SrcSpan::new(end, end)
    }

    /// 扫描全部 Token；词法错误与警告写入 `sink`
    pub fn tokenize(mut self, sink: &mut DiagnosticSink) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();

        while let Some(result) = self.inner.next() {
            let span = self.span_of(self.inner.span());
            let slice = self.inner.slice();

            match result {
                Ok(token) => {
                    if let Token::IntLit(i32::MAX) = token {
                        if slice.parse::<i32>().is_err() {
                            sink.add(
                                Diagnostic::warning("integer literal too large; using max value")
                                    .at(span.start),
                            );
                        }
                    }
                    tokens.push(SpannedToken { token, span });
                }
                Err(LexError::IllegalCharacter) => {
                    sink.add(
                        Diagnostic::fatal(format!("{}: {}", LexError::IllegalCharacter, slice))
                            .at(span.start),
                    );
                }
                Err(err) => {
                    sink.add(Diagnostic::fatal(err.to_string()).at(span.start));
                }
            }
        }

        tracing::debug!(count = tokens.len(), "tokenized");
        tokens
    }

    /// 自带诊断收集器的便捷入口
    pub fn tokenize_collect(source: &'src str) -> (Vec<SpannedToken>, SrcSpan, DiagnosticSink) {
        let lexer = Self::new(source);
        let eoi = lexer.eoi();
        let mut sink = DiagnosticSink::new();
        let tokens = lexer.tokenize(&mut sink);
        (tokens, eoi, sink)
    }
}

//! Diagnostic - 诊断信息

use crate::level::DiagnosticLevel;
use crate::position::Position;
use std::fmt;

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 主要消息
    pub message: String,
    /// 源码位置（可选）
    pub position: Option<Position>,
    /// 补充注释
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// 创建新的诊断
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            position: None,
            notes: Vec::new(),
        }
    }

    /// 创建致命错误诊断
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Fatal, message)
    }

    /// 创建警告诊断
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    /// 设置位置信息
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// 添加注释
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// `line:column: level: message`，与传统编译器的单行格式一致
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(position) = &self.position {
            write!(f, "{}: ", position)?;
        }
        write!(f, "{}: {}", self.level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::fatal("multiply declared identifier")
            .at(Position::new(2, 9))
            .with_note("'x' was first declared here");

        assert_eq!(diag.level, DiagnosticLevel::Fatal);
        assert_eq!(diag.message, "multiply declared identifier");
        assert_eq!(diag.position, Some(Position::new(2, 9)));
        assert_eq!(diag.notes, vec!["'x' was first declared here".to_string()]);
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::warning("integer literal too large; using max value")
            .at(Position::new(1, 9));
        assert_eq!(
            diag.to_string(),
            "1:9: warning: integer literal too large; using max value"
        );

        let no_pos = Diagnostic::fatal("syntax error");
        assert_eq!(no_pos.to_string(), "error: syntax error");
    }
}

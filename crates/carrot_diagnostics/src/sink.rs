//! DiagnosticSink - 诊断收集器
//!
//! 只追加：诊断按报告顺序保存，收集器本身从不重排或删除。

use crate::diagnostic::Diagnostic;
use crate::level::DiagnosticLevel;

/// 诊断收集器
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticSink {
    /// 创建新的诊断收集器
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加诊断
    pub fn add(&mut self, diagnostic: Diagnostic) {
        if diagnostic.level.is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// 批量添加
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.add(diagnostic);
        }
    }

    /// 是否有错误
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// 获取所有诊断
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// 获取错误数量
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// 获取警告数量
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.level, DiagnosticLevel::Warning))
            .count()
    }

    /// 按顺序列出所有诊断消息（测试中常用）
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_creation() {
        let sink = DiagnosticSink::new();
        assert!(!sink.has_errors());
        assert_eq!(sink.len(), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_add_diagnostic() {
        let mut sink = DiagnosticSink::new();

        sink.add(Diagnostic::warning("warning 1"));
        assert!(!sink.has_errors());
        assert_eq!(sink.warning_count(), 1);

        sink.add(Diagnostic::fatal("error 1"));
        assert!(sink.has_errors());
        assert_eq!(sink.error_count(), 1);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_order_is_preserved() {
        let mut sink = DiagnosticSink::new();
        sink.extend([
            Diagnostic::fatal("e1"),
            Diagnostic::warning("w1"),
            Diagnostic::fatal("e2"),
        ]);

        assert_eq!(sink.messages(), vec!["e1", "w1", "e2"]);
        assert_eq!(sink.error_count(), 2);
        assert_eq!(sink.warning_count(), 1);
    }
}

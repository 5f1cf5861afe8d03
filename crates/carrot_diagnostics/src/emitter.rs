//! Emitter - 诊断输出器
//!
//! 负责将诊断信息格式化输出。没有源码时输出单行格式，
//! 有源码时交给 ariadne 渲染带源码片段的报告。

use crate::diagnostic::Diagnostic;
use crate::level::DiagnosticLevel;
use crate::position::LineIndex;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use colored::*;
use std::io::{self, Write};

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// 创建新的输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 输出单个诊断到 stderr
    pub fn emit(&self, diagnostic: &Diagnostic) {
        let _ = self.write(diagnostic, &mut io::stderr().lock());
    }

    /// 输出所有诊断到 stderr
    pub fn emit_all(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// 写入单个诊断（单行格式 + 注释）
    pub fn write<W: Write>(&self, diagnostic: &Diagnostic, out: &mut W) -> io::Result<()> {
        if self.use_colors {
            self.write_colored(diagnostic, out)
        } else {
            self.write_plain(diagnostic, out)
        }
    }

    fn write_colored<W: Write>(&self, diagnostic: &Diagnostic, out: &mut W) -> io::Result<()> {
        if let Some(position) = &diagnostic.position {
            write!(out, "{} ", format!("{}:", position).bold())?;
        }
        writeln!(
            out,
            "{}: {}",
            diagnostic.level.colored_name(),
            diagnostic.message.bold()
        )?;

        for note in &diagnostic.notes {
            writeln!(
                out,
                "  {} {}",
                "=".blue().bold(),
                format!("note: {}", note).bright_black()
            )?;
        }
        Ok(())
    }

    fn write_plain<W: Write>(&self, diagnostic: &Diagnostic, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", diagnostic)?;
        for note in &diagnostic.notes {
            writeln!(out, "  = note: {}", note)?;
        }
        Ok(())
    }

    /// 带源码片段输出（ariadne）
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source_name: &str, source: &str) {
        let _ = self.write_with_source(diagnostic, source_name, source, &mut io::stderr().lock());
    }

    /// 带源码片段写入；没有位置信息的诊断退化为单行格式
    pub fn write_with_source<W: Write>(
        &self,
        diagnostic: &Diagnostic,
        source_name: &str,
        source: &str,
        out: &mut W,
    ) -> io::Result<()> {
        let Some(position) = diagnostic.position else {
            return self.write(diagnostic, out);
        };

        // ariadne 的 span 按字符计数
        let byte_offset = LineIndex::new(source).offset(source, position);
        let offset = source[..byte_offset].chars().count();
        let end = if byte_offset < source.len() {
            offset + 1
        } else {
            offset
        };

        let (kind, color) = match diagnostic.level {
            DiagnosticLevel::Fatal => (ReportKind::Error, Color::Red),
            DiagnosticLevel::Warning => (ReportKind::Warning, Color::Yellow),
        };

        let mut report = Report::build(kind, source_name, offset)
            .with_config(Config::default().with_color(self.use_colors))
            .with_message(&diagnostic.message)
            .with_label(
                Label::new((source_name, offset..end))
                    .with_message(&diagnostic.message)
                    .with_color(color),
            );
        if !diagnostic.notes.is_empty() {
            report = report.with_note(diagnostic.notes.join("\n"));
        }

        report
            .finish()
            .write((source_name, Source::from(source.to_string())), out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn render_plain(diagnostic: &Diagnostic) -> String {
        let mut buf = Vec::new();
        Emitter::without_colors()
            .write(diagnostic, &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_emitter_creation() {
        assert!(Emitter::new().use_colors);
        assert!(!Emitter::without_colors().use_colors);
    }

    #[test]
    fn test_plain_output() {
        let diag = Diagnostic::fatal("undeclared identifier")
            .at(Position::new(3, 7))
            .with_note("'y' is not declared");

        assert_eq!(
            render_plain(&diag),
            "3:7: error: undeclared identifier\n  = note: 'y' is not declared\n"
        );
    }

    #[test]
    fn test_source_output_mentions_message() {
        let source = "int main() {\n    y = 1;\n}\n";
        let diag = Diagnostic::fatal("undeclared identifier").at(Position::new(2, 5));

        let mut buf = Vec::new();
        Emitter::without_colors()
            .write_with_source(&diag, "main.carrot", source, &mut buf)
            .unwrap();
        let rendered = String::from_utf8(buf).unwrap();

        assert!(rendered.contains("undeclared identifier"));
        assert!(rendered.contains("main.carrot"));
    }

    #[test]
    fn test_source_output_after_multibyte_text() {
        let source = "// éééééééééé\nint a;\ny = 1;\n";
        let diag = Diagnostic::fatal("undeclared identifier").at(Position::new(3, 1));

        let mut buf = Vec::new();
        Emitter::without_colors()
            .write_with_source(&diag, "main.carrot", source, &mut buf)
            .unwrap();
        let rendered = String::from_utf8(buf).unwrap();

        assert!(rendered.contains("main.carrot:3:1"), "{}", rendered);
        assert!(rendered.contains("y = 1;"), "{}", rendered);
    }

    #[test]
    fn test_source_output_without_position_falls_back() {
        let diag = Diagnostic::fatal("syntax error");
        let mut buf = Vec::new();
        Emitter::without_colors()
            .write_with_source(&diag, "main.carrot", "", &mut buf)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "error: syntax error\n");
    }
}

//! Carrot Diagnostics
//!
//! 统一的诊断系统，词法、语法、语义三个阶段都通过它报告问题。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Fatal/Warning）
//! - [`DiagnosticSink`] - 诊断收集器（只追加）
//! - [`Emitter`] - 诊断输出器
//! - [`Position`] / [`LineIndex`] - 源码位置（行号、列号均从 1 开始）
//!
//! # 示例
//!
//! ```rust
//! use carrot_diagnostics::{Diagnostic, DiagnosticSink, Emitter, Position};
//!
//! let mut sink = DiagnosticSink::new();
//!
//! sink.add(
//!     Diagnostic::fatal("undeclared identifier")
//!         .at(Position::new(3, 5))
//!         .with_note("'y' is not declared in any enclosing scope"),
//! );
//!
//! if sink.has_errors() {
//!     let emitter = Emitter::without_colors();
//!     emitter.emit_all(sink.diagnostics());
//! }
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod position;
pub mod sink;

// 重新导出核心类型
pub use diagnostic::Diagnostic;
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use position::{LineIndex, Position};
pub use sink::DiagnosticSink;

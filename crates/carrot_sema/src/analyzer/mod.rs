//! Name Analyzer
//!
//! 深度优先遍历 AST：进出函数体与各类块时压栈/出栈，
//! 声明处登记符号，使用处沿作用域链解析名字。
//! 语义错误只记录不中断；作用域栈约定违例（重复声明除外）以 `Err` 中止。

use crate::error::SemanticError;
use crate::resolutions::Resolutions;
use crate::scope::{ScopeError, ScopeStack};
use crate::symbol::{StructDeclSymbol, Symbol};
use carrot_syntax::ast::{Block, Decl, Expr, Program, Stmt, VarDecl};

pub mod decl;
pub mod expr;
pub mod stmt;

/// 名称分析器
pub struct Analyzer {
    pub(crate) scopes: ScopeStack,
    pub(crate) errors: Vec<SemanticError>,
    pub(crate) resolutions: Resolutions,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            scopes: ScopeStack::new(),
            errors: Vec::new(),
            resolutions: Resolutions::new(),
        }
    }

    /// 分析整个程序
    pub fn analyze_program(&mut self, program: &Program) -> Result<(), ScopeError> {
        tracing::debug!(decls = program.decls.len(), "name analysis started");
        for decl in &program.decls {
            self.analyze_decl(decl)?;
        }
        tracing::debug!(errors = self.errors.len(), "name analysis finished");
        Ok(())
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    pub fn errors(&self) -> &[SemanticError] {
        &self.errors
    }

    pub fn resolutions(&self) -> &Resolutions {
        &self.resolutions
    }

    pub fn into_parts(self) -> (ScopeStack, Resolutions, Vec<SemanticError>) {
        (self.scopes, self.resolutions, self.errors)
    }

    // --- Delegation ---

    pub(crate) fn analyze_decl(&mut self, decl: &Decl) -> Result<(), ScopeError> {
        decl::analyze_decl(self, decl)
    }

    pub(crate) fn analyze_var_decl(&mut self, decl: &VarDecl) -> Result<(), ScopeError> {
        decl::analyze_var_decl(self, decl, None)
    }

    pub(crate) fn analyze_stmt(&mut self, stmt: &Stmt) -> Result<(), ScopeError> {
        stmt::analyze_stmt(self, stmt)
    }

    /// 分析表达式，返回它解析到的符号（失败时为 Undefined）
    pub fn analyze_expr(&mut self, expr: &Expr) -> Result<Symbol, ScopeError> {
        expr::analyze_expr(self, expr)
    }

    /// 块体：先声明后语句，不改变作用域
    pub(crate) fn analyze_block(&mut self, block: &Block) -> Result<(), ScopeError> {
        for decl in &block.decls {
            self.analyze_var_decl(decl)?;
        }
        for stmt in &block.stmts {
            self.analyze_stmt(stmt)?;
        }
        Ok(())
    }

    /// 压入一个新作用域执行 `f`，结束后无论结果如何都弹出
    pub(crate) fn in_scope<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ScopeError>,
    ) -> Result<T, ScopeError> {
        self.scopes.add_scope();
        let result = f(self);
        let popped = self.scopes.remove_scope();
        let value = result?;
        popped?;
        Ok(value)
    }

    pub(crate) fn report(&mut self, error: SemanticError) {
        tracing::debug!(%error, pos = %error.pos(), "semantic error");
        self.errors.push(error);
    }

    /// 沿作用域链查找结构体定义
    pub(crate) fn lookup_struct(&self, name: &str) -> Result<Option<&StructDeclSymbol>, ScopeError> {
        Ok(self
            .scopes
            .lookup_global(name)?
            .and_then(Symbol::as_struct_decl))
    }
}

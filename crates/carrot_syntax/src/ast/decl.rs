use crate::ast::stmt::Stmt;
use crate::ast::types::TypeSpec;
use crate::ast::Ident;

// 声明：顶层、函数体内、结构体内都可能出现
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    // 变量声明: int x;
    Var(VarDecl),
    // 函数定义: int add(int a, int b) { ... }
    Function(FnDecl),
    // 结构体定义: struct Point { int x; int y; };
    Struct(StructDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: TypeSpec,
    pub name: Ident,
}

// 形参: int a
#[derive(Debug, Clone, PartialEq)]
pub struct FormalDecl {
    pub ty: TypeSpec,
    pub name: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub return_type: TypeSpec,
    pub name: Ident,
    pub formals: Vec<FormalDecl>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: Ident,
    pub fields: Vec<VarDecl>,
}

// 块：先声明，后语句
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub decls: Vec<VarDecl>,
    pub stmts: Vec<Stmt>,
}

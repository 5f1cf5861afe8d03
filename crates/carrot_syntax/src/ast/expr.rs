use crate::ast::Ident;
use carrot_diagnostics::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    /// 表达式的报告位置：二元、赋值、点访问取左侧操作数的位置
    pub pos: Position,
}

impl Expr {
    pub fn new(kind: ExprKind, pos: Position) -> Self {
        Self { kind, pos }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // 字面量: 1, "hello", true, false
    IntLit(i32),
    StrLit(String),
    True,
    False,

    // 标识符: x
    Id(Ident),

    // 成员访问: p.x, a.b.c
    DotAccess {
        base: Box<Expr>,
        field: Ident,
    },

    // 赋值表达式: x = y = 1
    Assign {
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    // 函数调用: f(1, 2)
    Call(CallExpr),

    // 一元操作: -a, !b
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    // 二元操作: a + b, a == b
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Ident,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg, // -
    Not, // !
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    And, // &&
    Or,  // ||
    Eq,  // ==
    Neq, // !=
    Lt,  // <
    Gt,  // >
    Leq, // <=
    Geq, // >=
}

use crate::ast::decl::Block;
use crate::ast::expr::Expr;

// 语句：出现在函数体与各类块内部
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    // 赋值: x = 1; (内部是一个 Assign 表达式)
    Assign(Expr),

    // 自增自减: ++x; x++; --x; x--;
    PreInc(Expr),
    PreDec(Expr),
    PostInc(Expr),
    PostDec(Expr),

    // 输入输出: cin >> x; cout << e;
    Read(Expr),
    Write(Expr),

    // 控制流: if (e) { ... } [else { ... }]
    If {
        cond: Expr,
        body: Block,
    },
    IfElse {
        cond: Expr,
        then_block: Block,
        else_block: Block,
    },

    // 循环: while (e) { ... } / repeat (e) { ... }
    While {
        cond: Expr,
        body: Block,
    },
    Repeat {
        cond: Expr,
        body: Block,
    },

    // 调用语句: f(x);
    Call(Expr),

    // 返回: return; / return e;
    Return(Option<Expr>),
}

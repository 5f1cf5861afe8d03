//! Symbol Definitions
//!
//! 符号是 {类型描述, 类别} 的带标签值。类别集合是封闭的，
//! 每个变体对应一种语义实体。

use crate::scope::ScopeStack;
use crate::types::Type;
use std::fmt;
use std::rc::Rc;

/// 符号类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 普通变量（非结构体类型）
    Normal,
    Function,
    /// 形参
    Formal,
    /// 结构体实例变量
    StructVar,
    /// 结构体类型定义
    StructDecl,
    /// 解析失败的占位符
    Undefined,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Normal => "normal",
            Category::Function => "function",
            Category::Formal => "formal",
            Category::StructVar => "struct variable",
            Category::StructDecl => "struct declaration",
            Category::Undefined => "undefined",
        };
        write!(f, "{}", name)
    }
}

/// 符号 - 程序中所有命名实体的统一表示
#[derive(Debug, Clone)]
pub enum Symbol {
    Variable(VariableSymbol),
    Function(FunctionSymbol),
    Parameter(ParameterSymbol),
    StructVar(StructVarSymbol),
    StructDecl(StructDeclSymbol),
    /// 从不由成功的查找产生，只用于顶替失败的解析
    Undefined,
}

impl Symbol {
    pub fn category(&self) -> Category {
        match self {
            Symbol::Variable(_) => Category::Normal,
            Symbol::Function(_) => Category::Function,
            Symbol::Parameter(_) => Category::Formal,
            Symbol::StructVar(_) => Category::StructVar,
            Symbol::StructDecl(_) => Category::StructDecl,
            Symbol::Undefined => Category::Undefined,
        }
    }

    /// 类型描述；函数取其返回类型
    pub fn ty(&self) -> Type {
        match self {
            Symbol::Variable(v) => v.ty.clone(),
            Symbol::Function(f) => f.return_type.clone(),
            Symbol::Parameter(p) => p.ty.clone(),
            Symbol::StructVar(s) => Type::Struct(s.struct_name.clone()),
            Symbol::StructDecl(_) => Type::StructDef,
            Symbol::Undefined => Type::Error,
        }
    }

    /// 结构体类型的符号（结构体变量或结构体类型的形参）返回其结构体名
    pub fn struct_name(&self) -> Option<&str> {
        match self {
            Symbol::StructVar(s) => Some(&s.struct_name),
            Symbol::Parameter(p) => p.ty.struct_name(),
            Symbol::Variable(v) => v.ty.struct_name(),
            _ => None,
        }
    }

    /// 结构体类型符号在声明时绑定的字段表
    pub fn fields(&self) -> Option<&ScopeStack> {
        match self {
            Symbol::StructVar(s) => s.fields.as_deref(),
            Symbol::Parameter(p) => p.fields.as_deref(),
            Symbol::Variable(v) => v.fields.as_deref(),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Symbol::Undefined)
    }

    pub fn as_function(&self) -> Option<&FunctionSymbol> {
        match self {
            Symbol::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_struct_decl(&self) -> Option<&StructDeclSymbol> {
        match self {
            Symbol::StructDecl(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Function(func) => write!(f, "{}", func),
            Symbol::Undefined => Ok(()),
            other => write!(f, "{}", other.ty()),
        }
    }
}

/// 变量符号：`int x;`
#[derive(Debug, Clone)]
pub struct VariableSymbol {
    pub ty: Type,
    fields: Option<Rc<ScopeStack>>,
}

impl VariableSymbol {
    pub fn new(ty: Type) -> Self {
        Self { ty, fields: None }
    }

    pub fn with_fields(mut self, fields: Option<Rc<ScopeStack>>) -> Self {
        self.fields = fields;
        self
    }
}

/// 函数符号：返回类型 + 按声明顺序排列的形参符号
#[derive(Debug, Clone)]
pub struct FunctionSymbol {
    pub return_type: Type,
    pub formals: Vec<Symbol>,
}

impl FunctionSymbol {
    pub fn new(return_type: Type, formals: Vec<Symbol>) -> Self {
        Self {
            return_type,
            formals,
        }
    }

    /// 获取参数数量
    pub fn arity(&self) -> usize {
        self.formals.len()
    }
}

/// `int,bool->void`
impl fmt::Display for FunctionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formals: Vec<String> = self.formals.iter().map(|s| s.ty().to_string()).collect();
        write!(f, "{}->{}", formals.join(","), self.return_type)
    }
}

/// 形参符号；结构体类型的形参同样带有字段表
#[derive(Debug, Clone)]
pub struct ParameterSymbol {
    pub ty: Type,
    fields: Option<Rc<ScopeStack>>,
}

impl ParameterSymbol {
    pub fn new(ty: Type) -> Self {
        Self { ty, fields: None }
    }

    pub fn with_fields(mut self, fields: Option<Rc<ScopeStack>>) -> Self {
        self.fields = fields;
        self
    }
}

/// 结构体实例变量：`Pt p;`
///
/// 字段表在声明处从结构体定义取得，之后的成员访问不再按名字查找结构体。
#[derive(Debug, Clone)]
pub struct StructVarSymbol {
    pub struct_name: String,
    fields: Option<Rc<ScopeStack>>,
}

impl StructVarSymbol {
    pub fn new(struct_name: impl Into<String>) -> Self {
        Self {
            struct_name: struct_name.into(),
            fields: None,
        }
    }

    pub fn with_fields(mut self, fields: Option<Rc<ScopeStack>>) -> Self {
        self.fields = fields;
        self
    }
}

/// 结构体定义
///
/// 拥有一个独立的字段作用域栈，它从不链接进外层作用域链。
/// 字段表构建完成后只读。
#[derive(Debug, Clone, Default)]
pub struct StructDeclSymbol {
    fields: Option<Rc<ScopeStack>>,
}

impl StructDeclSymbol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> Option<&ScopeStack> {
        self.fields.as_deref()
    }

    pub fn set_fields(&mut self, fields: ScopeStack) {
        self.fields = Some(Rc::new(fields));
    }

    /// 共享字段表的句柄，供该结构体类型的变量与形参持有
    pub fn field_table(&self) -> Option<Rc<ScopeStack>> {
        self.fields.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            Symbol::Variable(VariableSymbol::new(Type::Int)).category(),
            Category::Normal
        );
        assert_eq!(
            Symbol::Parameter(ParameterSymbol::new(Type::Bool)).category(),
            Category::Formal
        );
        assert_eq!(
            Symbol::StructVar(StructVarSymbol::new("Pt")).category(),
            Category::StructVar
        );
        assert_eq!(
            Symbol::StructDecl(StructDeclSymbol::new()).category(),
            Category::StructDecl
        );
        assert_eq!(Symbol::Undefined.category(), Category::Undefined);
    }

    #[test]
    fn test_function_display() {
        let func = FunctionSymbol::new(
            Type::Void,
            vec![
                Symbol::Parameter(ParameterSymbol::new(Type::Int)),
                Symbol::Parameter(ParameterSymbol::new(Type::Bool)),
            ],
        );
        assert_eq!(func.to_string(), "int,bool->void");
        assert_eq!(func.arity(), 2);

        let no_formals = Symbol::Function(FunctionSymbol::new(Type::Int, vec![]));
        assert_eq!(no_formals.to_string(), "->int");
        assert_eq!(no_formals.ty(), Type::Int);
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::Undefined.to_string(), "");
        assert_eq!(Symbol::StructVar(StructVarSymbol::new("Pt")).to_string(), "Pt");
        assert_eq!(Symbol::StructDecl(StructDeclSymbol::new()).to_string(), "struct");
        assert_eq!(
            Symbol::Variable(VariableSymbol::new(Type::Int)).to_string(),
            "int"
        );
    }

    #[test]
    fn test_struct_name() {
        assert_eq!(
            Symbol::StructVar(StructVarSymbol::new("Pt")).struct_name(),
            Some("Pt")
        );
        assert_eq!(
            Symbol::Parameter(ParameterSymbol::new(Type::Struct("Pt".into()))).struct_name(),
            Some("Pt")
        );
        assert_eq!(
            Symbol::Variable(VariableSymbol::new(Type::Int)).struct_name(),
            None
        );
        assert_eq!(Symbol::StructDecl(StructDeclSymbol::new()).struct_name(), None);
        assert_eq!(Symbol::Undefined.struct_name(), None);
    }

    #[test]
    fn test_struct_fields_get_set() {
        let mut decl = StructDeclSymbol::new();
        assert!(decl.fields().is_none());

        let mut fields = ScopeStack::new();
        fields
            .declare("x", Symbol::Variable(VariableSymbol::new(Type::Int)))
            .unwrap();
        decl.set_fields(fields);

        let x = decl.fields().unwrap().lookup_global("x").unwrap().unwrap();
        assert_eq!(x.ty(), Type::Int);

        // 结构体变量持有同一张字段表
        let p = Symbol::StructVar(StructVarSymbol::new("Pt").with_fields(decl.field_table()));
        assert!(p.fields().unwrap().lookup_global("x").unwrap().is_some());
        assert!(Symbol::StructVar(StructVarSymbol::new("Pt")).fields().is_none());
        assert!(Symbol::Undefined.fields().is_none());
    }
}

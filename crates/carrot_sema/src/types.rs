//! Type Model
//!
//! 封闭的结构类型集合。没有隐式转换：相等即变体相同，
//! 结构体类型还要比较绑定的名字。

use carrot_syntax::ast::TypeSpec;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    // 错误占位符
    Error,
    Int,
    Bool,
    Void,
    // 字符串字面量的类型
    String,
    Function,
    // 结构体实例类型，绑定结构体名
    Struct(String),
    // 结构体定义本身
    StructDef,
}

impl Type {
    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Type::Int)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Type::Bool)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Type::String)
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function)
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Type::Struct(_))
    }

    pub fn is_struct_def(&self) -> bool {
        matches!(self, Type::StructDef)
    }

    /// 结构体实例类型绑定的名字
    pub fn struct_name(&self) -> Option<&str> {
        match self {
            Type::Struct(name) => Some(name),
            _ => None,
        }
    }
}

impl From<&TypeSpec> for Type {
    fn from(spec: &TypeSpec) -> Self {
        match spec {
            TypeSpec::Int => Type::Int,
            TypeSpec::Bool => Type::Bool,
            TypeSpec::Void => Type::Void,
            TypeSpec::Struct(name) => Type::Struct(name.name.clone()),
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Error => write!(f, "error"),
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "bool"),
            Type::Void => write!(f, "void"),
            Type::String => write!(f, "String"),
            Type::Function => write!(f, "function"),
            Type::Struct(name) => write!(f, "{}", name),
            Type::StructDef => write!(f, "struct"),
        }
    }
}

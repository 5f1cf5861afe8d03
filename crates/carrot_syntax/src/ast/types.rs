use crate::ast::Ident;
use std::fmt::{self, Display};

// 源码中写出的类型
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSpec {
    Int,
    Bool,
    Void,
    // 结构体类型: Point 或 struct Point
    Struct(Ident),
}

impl TypeSpec {
    pub fn is_void(&self) -> bool {
        matches!(self, TypeSpec::Void)
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, TypeSpec::Struct(_))
    }

    /// 结构体类型的名字
    pub fn struct_name(&self) -> Option<&Ident> {
        match self {
            TypeSpec::Struct(name) => Some(name),
            _ => None,
        }
    }
}

impl Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Int => write!(f, "int"),
            TypeSpec::Bool => write!(f, "bool"),
            TypeSpec::Void => write!(f, "void"),
            TypeSpec::Struct(name) => write!(f, "{}", name),
        }
    }
}

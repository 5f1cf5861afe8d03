use super::Analyzer;
use crate::error::SemanticError;
use crate::resolutions::Resolutions;
use crate::scope::{ScopeError, ScopeStack};
use crate::symbol::{
    FunctionSymbol, ParameterSymbol, StructDeclSymbol, StructVarSymbol, Symbol, VariableSymbol,
};
use crate::types::Type;
use carrot_syntax::ast::{Decl, FnDecl, FormalDecl, Ident, StructDecl, TypeSpec, VarDecl};

pub fn analyze_decl(analyzer: &mut Analyzer, decl: &Decl) -> Result<(), ScopeError> {
    match decl {
        Decl::Var(var) => analyze_var_decl(analyzer, var, None),
        Decl::Function(func) => analyze_fn_decl(analyzer, func),
        Decl::Struct(decl) => analyze_struct_decl(analyzer, decl),
    }
}

/// 在 `table` 中登记符号；重复声明转为诊断，其余违例向上传播
fn bind(
    table: &mut ScopeStack,
    errors: &mut Vec<SemanticError>,
    resolutions: &mut Resolutions,
    name: &Ident,
    symbol: Symbol,
) -> Result<bool, ScopeError> {
    match table.declare(&name.name, symbol.clone()) {
        Ok(()) => {
            tracing::debug!(name = %name.name, category = %symbol.category(), "declared");
            resolutions.record(name.pos, symbol);
            Ok(true)
        }
        Err(ScopeError::DuplicateSymbol { .. }) => {
            errors.push(SemanticError::MultiplyDeclared {
                name: name.name.clone(),
                pos: name.pos,
            });
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

/// 结构体类型名必须沿作用域链解析到一个结构体定义；成功时返回该定义
fn check_struct_type(
    analyzer: &mut Analyzer,
    struct_name: &Ident,
) -> Result<Option<StructDeclSymbol>, ScopeError> {
    let found = analyzer.lookup_struct(&struct_name.name)?.cloned();

    match &found {
        Some(decl) => {
            analyzer
                .resolutions
                .record(struct_name.pos, Symbol::StructDecl(decl.clone()));
        }
        None => {
            analyzer.report(SemanticError::InvalidStructTypeName {
                name: struct_name.name.clone(),
                pos: struct_name.pos,
            });
        }
    }
    Ok(found)
}

/// 变量（或结构体字段）声明
///
/// `fields` 为 `Some` 时登记到结构体自己的字段表，结构体类型名仍在外层作用域链中解析。
pub fn analyze_var_decl(
    analyzer: &mut Analyzer,
    decl: &VarDecl,
    mut fields: Option<&mut ScopeStack>,
) -> Result<(), ScopeError> {
    let name = &decl.name;

    if decl.ty.is_void() {
        analyzer.report(SemanticError::NonFunctionVoid {
            name: name.name.clone(),
            pos: name.pos,
        });
        return Ok(());
    }

    // 与同一作用域中的形参同名时，不再重复声明
    let table: &ScopeStack = fields.as_deref().unwrap_or(&analyzer.scopes);
    if let Some(Symbol::Parameter(_)) = table.lookup_local(&name.name)? {
        tracing::debug!(name = %name.name, "declaration shadowed by formal, skipped");
        return Ok(());
    }

    let symbol = match &decl.ty {
        TypeSpec::Struct(struct_name) => {
            let Some(struct_decl) = check_struct_type(analyzer, struct_name)? else {
                return Ok(());
            };
            Symbol::StructVar(
                StructVarSymbol::new(struct_name.name.clone())
                    .with_fields(struct_decl.field_table()),
            )
        }
        ty => Symbol::Variable(VariableSymbol::new(Type::from(ty))),
    };

    let Analyzer {
        scopes,
        errors,
        resolutions,
    } = analyzer;
    let table = match fields.as_deref_mut() {
        Some(fields) => fields,
        None => scopes,
    };
    bind(table, errors, resolutions, name, symbol)?;
    Ok(())
}

/// 函数声明：先在外层登记，再进入自己的作用域分析形参与函数体
///
/// 签名按源码中的形参列表构造，登记失败的形参（void、重复、无效结构体名）仍占一位。
fn analyze_fn_decl(analyzer: &mut Analyzer, decl: &FnDecl) -> Result<(), ScopeError> {
    let formals = decl
        .formals
        .iter()
        .map(|formal| Symbol::Parameter(ParameterSymbol::new(Type::from(&formal.ty))))
        .collect();
    let symbol = Symbol::Function(FunctionSymbol::new(Type::from(&decl.return_type), formals));

    let Analyzer {
        scopes,
        errors,
        resolutions,
    } = &mut *analyzer;
    bind(scopes, errors, resolutions, &decl.name, symbol)?;

    analyzer.in_scope(|analyzer| {
        for formal in &decl.formals {
            analyze_formal(analyzer, formal)?;
        }
        analyzer.analyze_block(&decl.body)
    })
}

/// 形参声明
fn analyze_formal(analyzer: &mut Analyzer, formal: &FormalDecl) -> Result<(), ScopeError> {
    let name = &formal.name;

    if formal.ty.is_void() {
        analyzer.report(SemanticError::NonFunctionVoid {
            name: name.name.clone(),
            pos: name.pos,
        });
        return Ok(());
    }

    let mut parameter = ParameterSymbol::new(Type::from(&formal.ty));
    if let Some(struct_name) = formal.ty.struct_name() {
        let Some(struct_decl) = check_struct_type(analyzer, struct_name)? else {
            return Ok(());
        };
        parameter = parameter.with_fields(struct_decl.field_table());
    }

    let symbol = Symbol::Parameter(parameter);
    let Analyzer {
        scopes,
        errors,
        resolutions,
    } = analyzer;
    bind(scopes, errors, resolutions, name, symbol)?;
    Ok(())
}

/// 结构体声明：登记成功后才构建并挂上独立的字段表
fn analyze_struct_decl(analyzer: &mut Analyzer, decl: &StructDecl) -> Result<(), ScopeError> {
    let name = &decl.name;

    match analyzer
        .scopes
        .declare(&name.name, Symbol::StructDecl(StructDeclSymbol::new()))
    {
        Ok(()) => {}
        Err(ScopeError::DuplicateSymbol { .. }) => {
            analyzer.report(SemanticError::MultiplyDeclared {
                name: name.name.clone(),
                pos: name.pos,
            });
            return Ok(());
        }
        Err(err) => return Err(err),
    }

    let mut fields = ScopeStack::new();
    for field in &decl.fields {
        analyze_var_decl(analyzer, field, Some(&mut fields))?;
    }

    if let Some(Symbol::StructDecl(symbol)) = analyzer.scopes.lookup_local_mut(&name.name)? {
        symbol.set_fields(fields);
        let symbol = Symbol::StructDecl(symbol.clone());
        analyzer.resolutions.record(name.pos, symbol);
    }
    tracing::debug!(name = %name.name, fields = decl.fields.len(), "struct declared");
    Ok(())
}

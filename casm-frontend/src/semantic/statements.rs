//! Statement and block type checking
//!
//! Each block is checked in its own fork of the enclosing scope. Its
//! declarators are collected in declaration order so code generation can
//! hoist them into one `var` declaration.

use crate::ast::{Block, Declaration, Expression, Statement, StatementKind};
use crate::semantic::errors::TranslateError;
use crate::semantic::expressions::{expect_type, type_expression};
use crate::semantic::scope::Scope;
use crate::typed_ast::{TypedBlock, TypedDeclarator, TypedExpr, TypedStmt};
use casm_common::{types::specifiers_to_string, Type};
use log::trace;

/// Inclusive lower bound for a declarator's constant initializer
pub const INITIALIZER_MIN: i64 = -0x8000_0000;
/// Exclusive upper bound for a declarator's constant initializer
pub const INITIALIZER_LIMIT: i64 = 0x1_0000_0000;

/// Type check a block in a fork of `parent`
pub fn type_block(block: &Block, parent: &Scope) -> Result<TypedBlock, TranslateError> {
    let mut scope = parent.fork();
    type_block_in(block, &mut scope)
}

/// Type check a block directly in `scope`, without forking.
///
/// A function body shares the frame its parameters live in.
pub fn type_block_in(block: &Block, scope: &mut Scope) -> Result<TypedBlock, TranslateError> {
    let mut declarators = Vec::new();
    for decl in &block.declarations {
        declarators.extend(type_declaration(decl, scope)?);
    }

    let statements = block
        .statements
        .iter()
        .map(|stmt| type_statement(stmt, scope))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TypedBlock { declarators, statements })
}

/// Register every declarator of a declaration and check its initializer
pub fn type_declaration(decl: &Declaration, scope: &mut Scope) -> Result<Vec<TypedDeclarator>, TranslateError> {
    let decl_type = match Type::from_specifiers(&decl.specifiers) {
        Some(Type::Int) => Type::Int,
        _ => {
            return Err(TranslateError::unsupported(
                format!("variable type '{}'", specifiers_to_string(&decl.specifiers)),
                decl.span.start.clone(),
            ))
        }
    };

    let mut declarators = Vec::with_capacity(decl.declarators.len());
    for declarator in &decl.declarators {
        let emitted_name = scope.declare(&declarator.name, decl_type.clone(), declarator.span.start.clone())?;

        let initializer = match &declarator.initializer {
            None => TypedExpr::IntLiteral { value: 0, expr_type: Type::Int },
            Some(init) => {
                let typed = type_expression(init, scope)?;
                check_initializer(&typed, init, &decl_type)?;
                typed
            }
        };

        trace!("declared '{}' as '{emitted_name}' at scope depth {}", declarator.name, scope.depth());
        declarators.push(TypedDeclarator {
            name: emitted_name,
            decl_type: decl_type.clone(),
            initializer,
        });
    }

    Ok(declarators)
}

fn check_initializer(init: &TypedExpr, source: &Expression, decl_type: &Type) -> Result<(), TranslateError> {
    let location = &source.span.start;
    let value = match init.constant_value() {
        Some(value) => value,
        None => return Err(TranslateError::mismatch("constant", source.describe(), location.clone())),
    };

    expect_type(decl_type, init.get_type(), location)?;

    if !(INITIALIZER_MIN..INITIALIZER_LIMIT).contains(&value) {
        return Err(TranslateError::mismatch(
            format!("{decl_type} in [{INITIALIZER_MIN}, {INITIALIZER_LIMIT})"),
            value,
            location.clone(),
        ));
    }

    Ok(())
}

/// Type check a single statement
pub fn type_statement(stmt: &Statement, scope: &Scope) -> Result<TypedStmt, TranslateError> {
    let location = &stmt.span.start;

    match &stmt.kind {
        StatementKind::Expression(expr) => Ok(TypedStmt::Expression(type_expression(expr, scope)?)),

        StatementKind::Return(value) => {
            let return_type = scope
                .return_type()
                .ok_or_else(|| TranslateError::unsupported("return outside of a function", location.clone()))?;

            match value {
                Some(expr) => {
                    let typed = type_expression(expr, scope)?;
                    expect_type(return_type, typed.get_type(), &expr.span.start)?;
                    Ok(TypedStmt::Return(typed))
                }
                None => Err(TranslateError::mismatch(return_type, Type::Void, location.clone())),
            }
        }

        StatementKind::Compound(block) => Ok(TypedStmt::Compound(type_block(block, scope)?)),
    }
}

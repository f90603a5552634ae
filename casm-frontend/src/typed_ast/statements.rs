//! Typed statements

use super::expressions::TypedExpr;
use casm_common::Type;

/// Typed statement - produced by semantic analysis
#[derive(Debug, Clone, PartialEq)]
pub enum TypedStmt {
    /// Expression statement
    Expression(TypedExpr),

    /// Return statement
    Return(TypedExpr),

    /// Nested compound statement
    Compound(TypedBlock),
}

/// A checked block. Declarators are hoisted ahead of the statements.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedBlock {
    pub declarators: Vec<TypedDeclarator>,
    pub statements: Vec<TypedStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedDeclarator {
    pub name: String,
    pub decl_type: Type,
    pub initializer: TypedExpr, // zero when the source had none
}

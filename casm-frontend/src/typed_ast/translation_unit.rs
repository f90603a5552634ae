//! Typed translation unit and top-level definitions
//!
//! This module defines the top-level structure of a typed program.

use super::statements::TypedBlock;
use casm_common::Type;

/// Typed function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct TypedParameter {
    pub name: String,
    pub param_type: Type,
    pub intended_type: Option<Type>,
}

/// Typed function definition
#[derive(Debug, Clone, PartialEq)]
pub struct TypedFunction {
    pub name: String,
    pub return_type: Type,
    pub parameters: Vec<TypedParameter>,
    pub body: TypedBlock,
}

/// Typed translation unit (entire module), functions in source order
#[derive(Debug, Clone, PartialEq)]
pub struct TypedTranslationUnit {
    pub functions: Vec<TypedFunction>,
}

impl TypedTranslationUnit {
    /// Names for the export table
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.iter().map(|f| f.name.as_str())
    }
}

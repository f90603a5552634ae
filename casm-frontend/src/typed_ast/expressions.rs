//! Typed expressions

use casm_common::Type;

/// Typed expression - produced by semantic analysis
#[derive(Debug, Clone, PartialEq)]
pub enum TypedExpr {
    /// Integer literal
    IntLiteral {
        value: i64,
        expr_type: Type,
    },

    /// Variable reference
    Variable {
        name: String,
        expr_type: Type,
    },

    /// Integer addition (both operands same type)
    Add {
        left: Box<TypedExpr>,
        right: Box<TypedExpr>,
        expr_type: Type,
    },

    /// Plain assignment
    Assignment {
        lhs: Box<TypedExpr>,
        rhs: Box<TypedExpr>,
        expr_type: Type,
    },

    /// Function call
    Call {
        function: Box<TypedExpr>,
        arguments: Vec<TypedExpr>,
        expr_type: Type,
    },
}

impl TypedExpr {
    /// Get the type of this expression
    pub fn get_type(&self) -> &Type {
        match self {
            TypedExpr::IntLiteral { expr_type, .. }
            | TypedExpr::Variable { expr_type, .. }
            | TypedExpr::Add { expr_type, .. }
            | TypedExpr::Assignment { expr_type, .. }
            | TypedExpr::Call { expr_type, .. } => expr_type,
        }
    }

    /// Only literals are constant; no folding happens
    pub fn is_constant(&self) -> bool {
        matches!(self, TypedExpr::IntLiteral { .. })
    }

    pub fn constant_value(&self) -> Option<i64> {
        match self {
            TypedExpr::IntLiteral { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Check if this expression can appear on the left of `=`
    pub fn is_assignable(&self) -> bool {
        matches!(self, TypedExpr::Variable { .. })
    }
}

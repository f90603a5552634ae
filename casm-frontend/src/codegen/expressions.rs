//! Expression emission

use crate::estree::factory::{assignment, binary, call, int_literal, variable};
use crate::estree::{BinaryOperator, Expression};
use crate::typed_ast::TypedExpr;

/// Emit the ESTree form of a typed expression
pub fn emit_expression(expr: &TypedExpr) -> Expression {
    match expr {
        TypedExpr::IntLiteral { value, .. } => int_literal(*value),
        TypedExpr::Variable { name, .. } => variable(name),
        TypedExpr::Add { left, right, .. } => {
            binary(BinaryOperator::Add, emit_expression(left), emit_expression(right))
        }
        TypedExpr::Assignment { lhs, rhs, .. } => assignment(emit_expression(lhs), emit_expression(rhs)),
        TypedExpr::Call { function, arguments, .. } => {
            call(emit_expression(function), arguments.iter().map(emit_expression).collect())
        }
    }
}

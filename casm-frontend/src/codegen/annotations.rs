//! asm.js type annotations
//!
//! asm.js infers types from syntax: `x|0` is signed, a small integer literal
//! is fixnum. These helpers decide where a coercion is needed and build it.

use crate::estree::factory::{assignment, binary, expression_statement, int_literal, variable};
use crate::estree::{BinaryOperator, Expression, Statement};
use crate::typed_ast::TypedExpr;
use casm_common::Type;
use log::trace;

pub const SIGNED_MIN: i64 = i32::MIN as i64;
pub const SIGNED_MAX: i64 = i32::MAX as i64;

/// `(expr)|0`
pub fn coerce_signed(expr: Expression) -> Expression {
    binary(BinaryOperator::BitOr, expr, int_literal(0))
}

/// Wrap `expr` so it validates as the given intended type
pub fn coerce(expr: Expression, intended: Option<&Type>) -> Expression {
    match intended {
        Some(Type::Signed) => coerce_signed(expr),
        _ => expr,
    }
}

/// `name = name|0;`
pub fn parameter_annotation(name: &str, intended: Option<&Type>) -> Statement {
    expression_statement(assignment(variable(name), coerce(variable(name), intended)))
}

/// Annotate the argument of a `return` in a function returning `return_type`.
///
/// A literal already in the signed range validates as is.
pub fn annotate_return(typed: &TypedExpr, emitted: Expression, return_type: &Type) -> Expression {
    if let Some(value) = typed.constant_value() {
        if (SIGNED_MIN..=SIGNED_MAX).contains(&value) {
            trace!("return literal {} left unannotated", value);
            return emitted;
        }
    }
    coerce(emitted, return_type.intended().as_ref())
}

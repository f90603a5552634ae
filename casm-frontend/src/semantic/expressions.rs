//! Expression type checking
//!
//! Turns an AST expression into a `TypedExpr`. No implicit conversions
//! happen here; every check is structural type equality and coercions are
//! left to code generation.

use crate::ast::{AssignOp, BinaryOp, Expression, ExpressionKind};
use crate::semantic::errors::TranslateError;
use crate::semantic::scope::Scope;
use crate::typed_ast::TypedExpr;
use casm_common::{SourceLocation, Type};

/// Type check an expression in the given scope
pub fn type_expression(expr: &Expression, scope: &Scope) -> Result<TypedExpr, TranslateError> {
    let location = &expr.span.start;

    match &expr.kind {
        ExpressionKind::Constant(text) => Ok(TypedExpr::IntLiteral {
            value: parse_int_literal(text, location)?,
            expr_type: Type::Int,
        }),

        ExpressionKind::Identifier(name) => {
            let binding = scope.resolve(name, location)?;
            Ok(TypedExpr::Variable {
                name: binding.emitted_name.clone(),
                expr_type: binding.declared_type.clone(),
            })
        }

        ExpressionKind::Binary { op, left, right } => {
            if *op != BinaryOp::Add {
                return Err(TranslateError::unsupported(
                    format!("binary operator '{op}'"),
                    location.clone(),
                ));
            }

            let left = type_expression(left, scope)?;
            let right = type_expression(right, scope)?;
            expect_type(left.get_type(), right.get_type(), location)?;

            Ok(TypedExpr::Add {
                expr_type: left.get_type().clone(),
                left: Box::new(left),
                right: Box::new(right),
            })
        }

        ExpressionKind::Assignment { op, target, value } => {
            let lhs = type_expression(target, scope)?;
            if !lhs.is_assignable() {
                return Err(TranslateError::InvalidAssignmentTarget {
                    location: target.span.start.clone(),
                });
            }

            if *op != AssignOp::Assign {
                return Err(TranslateError::unsupported(
                    format!("assignment operator '{op}'"),
                    location.clone(),
                ));
            }

            let rhs = type_expression(value, scope)?;
            expect_type(lhs.get_type(), rhs.get_type(), &value.span.start)?;

            Ok(TypedExpr::Assignment {
                expr_type: lhs.get_type().clone(),
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            })
        }

        ExpressionKind::Call { function, arguments } => type_call(function, arguments, scope, location),
    }
}

fn type_call(
    function: &Expression,
    arguments: &[Expression],
    scope: &Scope,
    location: &SourceLocation,
) -> Result<TypedExpr, TranslateError> {
    let callee = type_expression(function, scope)?;
    let (return_type, parameters) = match callee.get_type().signature() {
        Some((ret, params)) => (ret.clone(), params.to_vec()),
        None => {
            return Err(TranslateError::mismatch(
                "function",
                callee.get_type(),
                function.span.start.clone(),
            ))
        }
    };

    if parameters.len() != arguments.len() {
        return Err(TranslateError::mismatch(
            plural(parameters.len(), "argument"),
            plural(arguments.len(), "argument"),
            location.clone(),
        ));
    }

    let mut typed_args = Vec::with_capacity(arguments.len());
    for (arg, param_type) in arguments.iter().zip(&parameters) {
        let typed = type_expression(arg, scope)?;
        expect_type(param_type, typed.get_type(), &arg.span.start)?;
        typed_args.push(typed);
    }

    Ok(TypedExpr::Call {
        function: Box::new(callee),
        arguments: typed_args,
        expr_type: return_type,
    })
}

/// Parse the text of an integer constant.
///
/// Only a non-empty run of ASCII decimal digits is accepted; signs, hex and
/// suffixes are not part of the dialect.
pub fn parse_int_literal(text: &str, location: &SourceLocation) -> Result<i64, TranslateError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TranslateError::unsupported(
            format!("integer literal '{text}'"),
            location.clone(),
        ));
    }

    text.parse::<i64>().map_err(|_| {
        TranslateError::unsupported(format!("integer literal '{text}' out of range"), location.clone())
    })
}

/// Fail with `TypeMismatch` unless `found` structurally equals `expected`
pub(crate) fn expect_type(expected: &Type, found: &Type, location: &SourceLocation) -> Result<(), TranslateError> {
    if Type::equal(expected, found) {
        Ok(())
    } else {
        Err(TranslateError::mismatch(expected, found, location.clone()))
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

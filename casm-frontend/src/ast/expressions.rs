//! Expression AST nodes
//!
//! This module defines expression nodes in the abstract syntax tree.

use super::ops::{AssignOp, BinaryOp};
use casm_common::SourceSpan;

/// AST Expression nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    /// Numeric constant, kept as the source text
    Constant(String),

    /// Identifier reference
    Identifier(String),

    /// Binary operation
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Assignment, plain or compound
    Assignment {
        op: AssignOp,
        target: Box<Expression>,
        value: Box<Expression>,
    },

    /// Function call
    Call {
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    pub fn new(kind: ExpressionKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }

    /// Short name of the node kind, used in diagnostics
    pub fn describe(&self) -> &'static str {
        match &self.kind {
            ExpressionKind::Constant(_) => "constant",
            ExpressionKind::Identifier(_) => "identifier",
            ExpressionKind::Binary { .. } => "binary expression",
            ExpressionKind::Assignment { .. } => "assignment",
            ExpressionKind::Call { .. } => "function call",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_creation() {
        let expr = Expression::new(
            ExpressionKind::Binary {
                op: BinaryOp::Add,
                left: Box::new(Expression::new(ExpressionKind::Identifier("a".to_string()), SourceSpan::dummy())),
                right: Box::new(Expression::new(ExpressionKind::Constant("1".to_string()), SourceSpan::dummy())),
            },
            SourceSpan::dummy(),
        );

        assert_eq!(expr.describe(), "binary expression");
        match expr.kind {
            ExpressionKind::Binary { op, right, .. } => {
                assert_eq!(op, BinaryOp::Add);
                assert_eq!(right.kind, ExpressionKind::Constant("1".to_string()));
            }
            _ => panic!("Expected Binary"),
        }
    }
}

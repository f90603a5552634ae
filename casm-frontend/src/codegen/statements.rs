//! Statement and block emission
//!
//! asm.js only allows `var` at the top of a function, so the declarators of
//! every block in a body are hoisted into one leading declaration. Names
//! are already unique per function, and initializers are constants, so
//! hoisting does not change what any block observes.

use super::annotations::annotate_return;
use super::expressions::emit_expression;
use crate::estree::factory::{block, declarator, expression_statement, return_statement, var_declaration};
use crate::estree::{Statement, VariableDeclarator};
use crate::typed_ast::{TypedBlock, TypedStmt};
use casm_common::Type;

/// One `var` for the declarators of `typed` and all its nested blocks, in
/// source order
pub fn emit_locals(typed: &TypedBlock) -> Option<Statement> {
    let mut declarators = Vec::new();
    collect_declarators(typed, &mut declarators);

    if declarators.is_empty() {
        None
    } else {
        Some(var_declaration(declarators))
    }
}

fn collect_declarators(typed: &TypedBlock, out: &mut Vec<VariableDeclarator>) {
    out.extend(
        typed
            .declarators
            .iter()
            .map(|decl| declarator(&decl.name, emit_expression(&decl.initializer))),
    );

    for stmt in &typed.statements {
        if let TypedStmt::Compound(inner) = stmt {
            collect_declarators(inner, out);
        }
    }
}

/// Statements of a block; its declarators are emitted by `emit_locals`
pub fn emit_block_body(typed: &TypedBlock, return_type: &Type) -> Vec<Statement> {
    typed.statements.iter().map(|stmt| emit_statement(stmt, return_type)).collect()
}

pub fn emit_statement(stmt: &TypedStmt, return_type: &Type) -> Statement {
    match stmt {
        TypedStmt::Expression(expr) => expression_statement(emit_expression(expr)),
        TypedStmt::Return(expr) => return_statement(annotate_return(expr, emit_expression(expr), return_type)),
        TypedStmt::Compound(inner) => Statement::from(block(emit_block_body(inner, return_type))),
    }
}

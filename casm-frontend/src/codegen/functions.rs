//! Function emission

use super::annotations::parameter_annotation;
use super::statements::{emit_block_body, emit_locals};
use crate::estree::factory::{function_declaration, identifier};
use crate::estree::Statement;
use crate::typed_ast::TypedFunction;
use log::trace;

/// `function f(a, b) { a = a|0; b = b|0; var ...; ... }`
pub fn emit_function(func: &TypedFunction) -> Statement {
    let params = func.parameters.iter().map(|p| identifier(&p.name)).collect();

    let mut body: Vec<Statement> = func
        .parameters
        .iter()
        .map(|p| parameter_annotation(&p.name, p.intended_type.as_ref()))
        .collect();
    body.extend(emit_locals(&func.body));
    body.extend(emit_block_body(&func.body, &func.return_type));

    trace!("emitted function '{}' with {} statement(s)", func.name, body.len());
    function_declaration(&func.name, params, body)
}

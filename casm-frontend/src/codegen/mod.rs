//! Code generation from the typed AST to ESTree
//!
//! Emission cannot fail: every check already happened in semantic analysis.
//! This pass only decides where asm.js annotations go.

pub mod annotations;
pub mod expressions;
pub mod functions;
pub mod statements;

use crate::estree::factory::{
    expression_statement, function_declaration, init_property, object, program, return_statement,
    string_literal, variable,
};
use crate::estree::{Program, Statement};
use crate::options::TranslateOptions;
use crate::typed_ast::TypedTranslationUnit;
use log::debug;

pub struct CodeGenerator<'a> {
    options: &'a TranslateOptions,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(options: &'a TranslateOptions) -> Self {
        Self { options }
    }

    /// Wrap every function in the asm.js module function
    pub fn generate(&self, unit: &TypedTranslationUnit) -> Program {
        let mut body: Vec<Statement> = Vec::with_capacity(unit.functions.len() + 2);
        body.push(expression_statement(string_literal(&self.options.directive)));
        body.extend(unit.functions.iter().map(functions::emit_function));
        body.push(return_statement(object(
            unit.function_names()
                .map(|name| init_property(name, variable(name)))
                .collect(),
        )));

        debug!(
            "generated module '{}' exporting {} function(s)",
            self.options.module_name,
            unit.functions.len()
        );
        program(vec![function_declaration(&self.options.module_name, vec![], body)])
    }
}

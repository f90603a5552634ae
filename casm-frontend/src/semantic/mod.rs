//! Semantic analysis
//!
//! Resolves names and checks types over the input AST, producing the typed
//! tree that code generation consumes.

pub mod errors;
pub mod expressions;
pub mod functions;
pub mod scope;
pub mod statements;

use crate::ast::{TopLevelItem, TranslationUnit};
use crate::typed_ast::TypedTranslationUnit;
use log::debug;

pub use errors::{ErrorKind, TranslateError};
pub use scope::{Binding, Scope};

/// Semantic analyzer context
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    module_scope: Scope,
}

impl SemanticAnalyzer {
    /// Create a new semantic analyzer
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze a translation unit
    pub fn analyze(&mut self, ast: &TranslationUnit) -> Result<TypedTranslationUnit, TranslateError> {
        // First pass: register every function so bodies can call forward
        let mut signatures = Vec::with_capacity(ast.items.len());
        for item in &ast.items {
            let func = match item {
                TopLevelItem::Function(func) => func,
                TopLevelItem::Declaration(_) => {
                    return Err(TranslateError::unsupported(
                        "top-level declaration",
                        item.span().start.clone(),
                    ))
                }
            };

            let signature = functions::resolve_signature(func)?;
            self.module_scope
                .declare(&func.name, signature.function_type(), func.span.start.clone())?;
            signatures.push((func, signature));
        }

        // Second pass: check bodies in source order
        let functions = signatures
            .iter()
            .map(|(func, signature)| functions::type_function(func, signature, &self.module_scope))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("analyzed {} function(s)", functions.len());
        Ok(TypedTranslationUnit { functions })
    }

    /// The module scope after `analyze`, holding every function
    pub fn module_scope(&self) -> &Scope {
        &self.module_scope
    }
}

//! casm - Translation Core
//!
//! This crate translates a restricted C subset into an asm.js module:
//! - Adapters: lower the two JSON grammars into the AST
//! - AST: abstract syntax tree definitions
//! - Semantic analysis: scope resolution and type checking into a typed AST
//! - Codegen: emits the ESTree tree with asm.js annotations

pub mod adapters;
pub mod ast;
pub mod codegen;
pub mod estree;
pub mod options;
pub mod semantic;
pub mod typed_ast;

pub use adapters::Grammar;
pub use ast::{
    Block, Declaration, Expression, ExpressionKind, FunctionDefinition, Statement, StatementKind,
    TopLevelItem, TranslationUnit,
};
pub use codegen::CodeGenerator;
pub use estree::Program;
pub use options::TranslateOptions;
pub use semantic::{ErrorKind, SemanticAnalyzer, TranslateError};
pub use typed_ast::TypedTranslationUnit;

use casm_common::CompilerError;
use log::debug;

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Parse JSON text in the given grammar into an AST
    pub fn parse_json(text: &str, grammar: Grammar) -> Result<TranslationUnit, CompilerError> {
        let root: serde_json::Value = serde_json::from_str(text).map_err(|e| CompilerError::InputError {
            message: format!("invalid JSON: {e}"),
        })?;

        let grammar = grammar.detect(&root);
        debug!("lowering input with the {grammar} grammar");
        Ok(adapters::lower(&root, grammar)?)
    }

    /// Type check a module
    pub fn analyze(ast: &TranslationUnit) -> Result<TypedTranslationUnit, TranslateError> {
        SemanticAnalyzer::new().analyze(ast)
    }

    /// Translate a module into an asm.js program
    pub fn translate(ast: &TranslationUnit, options: &TranslateOptions) -> Result<Program, TranslateError> {
        let typed = Self::analyze(ast)?;
        Ok(CodeGenerator::new(options).generate(&typed))
    }

    /// Parse and translate JSON text
    pub fn translate_json(text: &str, grammar: Grammar, options: &TranslateOptions) -> Result<Program, CompilerError> {
        let ast = Self::parse_json(text, grammar)?;
        Ok(Self::translate(&ast, options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_json_empty_module() {
        let program = Frontend::translate_json("[]", Grammar::Auto, &TranslateOptions::default()).unwrap();
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn test_invalid_json() {
        let err = Frontend::parse_json("{not json", Grammar::Auto).unwrap_err();
        assert!(matches!(err, CompilerError::InputError { .. }));
    }

    #[test]
    fn test_translate_error_converted() {
        let text = r#"[{"type": "Declaration", "params": [["int"], []]}]"#;
        let err = Frontend::translate_json(text, Grammar::Tagged, &TranslateOptions::default()).unwrap_err();
        match err {
            CompilerError::SemanticError { message, .. } => assert!(message.contains("top-level declaration")),
            other => panic!("Expected SemanticError, got {:?}", other),
        }
    }
}

//! Statement AST nodes
//!
//! This module defines statements, blocks, declarations and function
//! definitions. Type specifiers are kept as written; the type registry
//! resolves them during semantic analysis.

use super::expressions::Expression;
use casm_common::{SourceSpan, TypeSpecifier};

/// AST Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    /// Expression statement
    Expression(Expression),

    /// Return statement
    Return(Option<Expression>),

    /// Nested compound statement
    Compound(Block),
}

/// A compound statement: declarations first, then statements
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub declarations: Vec<Declaration>,
    pub statements: Vec<Statement>,
    pub span: SourceSpan,
}

/// `int a, b = 1;`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub specifiers: Vec<TypeSpecifier>,
    pub declarators: Vec<InitDeclarator>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InitDeclarator {
    pub name: String,
    pub initializer: Option<Expression>,
    pub span: SourceSpan,
}

/// Function definition
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: String,
    pub return_specifiers: Vec<TypeSpecifier>,
    pub parameters: Vec<Parameter>,
    pub body: Block,
    pub span: SourceSpan,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Option<String>, // `(void)` has no name
    pub specifiers: Vec<TypeSpecifier>,
    pub span: SourceSpan,
}

/// Top-level compilation unit
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationUnit {
    pub items: Vec<TopLevelItem>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TopLevelItem {
    /// Function definition
    Function(FunctionDefinition),

    /// Global variable declaration
    Declaration(Declaration),
}

impl Statement {
    pub fn new(kind: StatementKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }
}

impl Block {
    pub fn empty(span: SourceSpan) -> Self {
        Self {
            declarations: Vec::new(),
            statements: Vec::new(),
            span,
        }
    }
}

impl TopLevelItem {
    pub fn span(&self) -> &SourceSpan {
        match self {
            TopLevelItem::Function(func) => &func.span,
            TopLevelItem::Declaration(decl) => &decl.span,
        }
    }
}

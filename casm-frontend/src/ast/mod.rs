//! Abstract Syntax Tree definitions for the restricted C subset
//!
//! This is the canonical input tree. Both front-end grammars lower into it
//! (see `adapters`), and the semantic pass only ever sees this shape. Every
//! node kind is a case of a closed enum, so an unhandled kind is a compile
//! error rather than a runtime surprise.

pub mod ops;
pub mod expressions;
pub mod statements;

// Re-export commonly used types at module level
pub use ops::{AssignOp, BinaryOp};
pub use expressions::{Expression, ExpressionKind};
pub use statements::{
    Block, Declaration, FunctionDefinition, InitDeclarator, Parameter,
    Statement, StatementKind, TopLevelItem, TranslationUnit,
};

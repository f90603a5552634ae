//! Typed AST representation
//!
//! This module defines the typed tree produced by semantic analysis and
//! consumed by code generation. It is plain data: every node already knows
//! its type, and nothing in it can fail to emit.

mod expressions;
mod statements;
mod translation_unit;

// Re-export main types
pub use expressions::TypedExpr;
pub use statements::{TypedBlock, TypedDeclarator, TypedStmt};
pub use translation_unit::{TypedFunction, TypedParameter, TypedTranslationUnit};

//! ESTree output tree
//!
//! The translator's output: a JavaScript syntax tree in ESTree form that
//! serializes straight to ESTree JSON.

pub mod factory;
pub mod nodes;

pub use nodes::*;

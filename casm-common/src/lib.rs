//! casm - Common Types and Utilities
//! 
//! This crate contains the type registry, source locations, and error
//! definitions shared by the translation core and the driver.

pub mod error;
pub mod types;
pub mod source_loc;

pub use error::{CompilerError, Diagnostic, ErrorReporter};
pub use types::{Type, TypeSpecifier};
pub use source_loc::{SourceLocation, SourceSpan};

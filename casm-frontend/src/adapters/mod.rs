//! Front-end grammar adapters
//!
//! Two JSON encodings of the same C subset exist. Each adapter lowers its
//! encoding into the canonical `ast::TranslationUnit`, so everything after
//! this point is shared.

pub mod declarative;
pub mod tagged;

use crate::ast::TranslationUnit;
use crate::semantic::errors::TranslateError;
use casm_common::{SourceLocation, SourceSpan};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Which JSON encoding an input tree uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grammar {
    /// `{"type": ..., "params": [...]}` nodes, array root
    Tagged,
    /// `declarationType` / `statementType` / `expressionType` objects
    Declarative,
    /// Pick by the shape of the root
    #[default]
    Auto,
}

impl Grammar {
    /// Resolve `Auto` against a root value
    pub fn detect(self, root: &Value) -> Grammar {
        match self {
            Grammar::Auto if root.is_array() => Grammar::Tagged,
            Grammar::Auto => Grammar::Declarative,
            explicit => explicit,
        }
    }
}

impl FromStr for Grammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tagged" => Ok(Grammar::Tagged),
            "declarative" => Ok(Grammar::Declarative),
            "auto" => Ok(Grammar::Auto),
            other => Err(format!("unknown grammar '{other}'")),
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Grammar::Tagged => "tagged",
            Grammar::Declarative => "declarative",
            Grammar::Auto => "auto",
        };
        write!(f, "{}", name)
    }
}

/// Lower a JSON tree in the given grammar to the canonical AST
pub fn lower(root: &Value, grammar: Grammar) -> Result<TranslationUnit, TranslateError> {
    match grammar.detect(root) {
        Grammar::Tagged => tagged::lower_module(root),
        _ => declarative::lower_module(root),
    }
}

/// Optional `loc` object carried by nodes of either grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub(crate) struct Loc {
    pub line: u32,
    pub column: u32,
}

impl Loc {
    pub(crate) fn span(loc: Option<Loc>) -> SourceSpan {
        match loc {
            Some(Loc { line, column }) => SourceSpan::from_location(SourceLocation::new_simple(line, column)),
            None => SourceSpan::dummy(),
        }
    }
}

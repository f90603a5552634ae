//! Type registry
//!
//! This module defines the type descriptors understood by the translator:
//! the primitive types `int`, `signed` and `void`, plus function types.
//! All comparisons go through structural equality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// C `int` as declared in the source
    Int,

    /// asm.js `signed`: the 32-bit signed domain an `int` is annotated into
    Signed,

    /// C `void`
    Void,

    /// Function type
    Function {
        return_type: Box<Type>,
        parameters: Vec<Type>,
    },
}

impl Type {
    /// Function type constructor: `func(returnType, paramTypes)`
    pub fn func(return_type: Type, parameters: Vec<Type>) -> Self {
        Type::Function {
            return_type: Box::new(return_type),
            parameters,
        }
    }

    /// The sole equality predicate used for type checks.
    ///
    /// Tags and all recursive components must match; identity never matters.
    pub fn equal(a: &Type, b: &Type) -> bool {
        match (a, b) {
            (Type::Int, Type::Int) | (Type::Signed, Type::Signed) | (Type::Void, Type::Void) => true,
            (
                Type::Function { return_type: ret_a, parameters: params_a },
                Type::Function { return_type: ret_b, parameters: params_b },
            ) => {
                Type::equal(ret_a, ret_b)
                    && params_a.len() == params_b.len()
                    && params_a.iter().zip(params_b).all(|(a, b)| Type::equal(a, b))
            }
            _ => false,
        }
    }

    pub fn structurally_equals(&self, other: &Type) -> bool {
        Type::equal(self, other)
    }

    /// Check if this type lives in the integer domain (`int` or `signed`)
    pub fn is_integer(&self) -> bool {
        matches!(self, Type::Int | Type::Signed)
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function { .. })
    }

    /// Return type and parameter list of a function type
    pub fn signature(&self) -> Option<(&Type, &[Type])> {
        match self {
            Type::Function { return_type, parameters } => Some((return_type, parameters)),
            _ => None,
        }
    }

    /// The asm.js annotation kind a declared type is coerced into.
    ///
    /// Every `int` is intended as `signed`; other types have no annotation.
    pub fn intended(&self) -> Option<Type> {
        match self {
            Type::Int | Type::Signed => Some(Type::Signed),
            _ => None,
        }
    }

    /// Look up the type named by a list of declaration specifiers.
    ///
    /// Returns `None` for combinations the registry does not know.
    pub fn from_specifiers(specifiers: &[TypeSpecifier]) -> Option<Type> {
        use TypeSpecifier::*;

        match specifiers {
            [Int] | [Signed] | [Signed, Int] | [Int, Signed] => Some(Type::Int),
            [Void] => Some(Type::Void),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Signed => write!(f, "signed"),
            Type::Void => write!(f, "void"),
            Type::Function { return_type, parameters } => {
                write!(f, "{return_type} (")?;
                for (i, param) in parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A single C type specifier keyword as it appears in a declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeSpecifier {
    Void,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Signed,
    Unsigned,
    /// Anything else (typedef names, struct tags, qualifiers)
    Named(String),
}

impl TypeSpecifier {
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "void" => TypeSpecifier::Void,
            "char" => TypeSpecifier::Char,
            "short" => TypeSpecifier::Short,
            "int" => TypeSpecifier::Int,
            "long" => TypeSpecifier::Long,
            "float" => TypeSpecifier::Float,
            "double" => TypeSpecifier::Double,
            "signed" => TypeSpecifier::Signed,
            "unsigned" => TypeSpecifier::Unsigned,
            other => TypeSpecifier::Named(other.to_string()),
        }
    }
}

impl fmt::Display for TypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            TypeSpecifier::Void => "void",
            TypeSpecifier::Char => "char",
            TypeSpecifier::Short => "short",
            TypeSpecifier::Int => "int",
            TypeSpecifier::Long => "long",
            TypeSpecifier::Float => "float",
            TypeSpecifier::Double => "double",
            TypeSpecifier::Signed => "signed",
            TypeSpecifier::Unsigned => "unsigned",
            TypeSpecifier::Named(name) => name,
        };
        write!(f, "{keyword}")
    }
}

/// Render a specifier list the way it was written (`unsigned int`)
pub fn specifiers_to_string(specifiers: &[TypeSpecifier]) -> String {
    specifiers
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

//! Function signature resolution and body checking

use crate::ast::{FunctionDefinition, Parameter};
use crate::semantic::errors::TranslateError;
use crate::semantic::scope::Scope;
use crate::semantic::statements::type_block_in;
use crate::typed_ast::{TypedFunction, TypedParameter};
use casm_common::{types::specifiers_to_string, SourceLocation, Type};
use log::debug;

/// Resolved return and parameter types of a function definition
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    pub return_type: Type,
    pub parameters: Vec<SignatureParameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignatureParameter {
    pub name: String,
    pub param_type: Type,
    pub location: SourceLocation,
}

impl FunctionSignature {
    /// `func(returnType, paramTypes)`
    pub fn function_type(&self) -> Type {
        Type::func(
            self.return_type.clone(),
            self.parameters.iter().map(|p| p.param_type.clone()).collect(),
        )
    }
}

/// Resolve the signature of a function definition without looking at its body
pub fn resolve_signature(func: &FunctionDefinition) -> Result<FunctionSignature, TranslateError> {
    let return_type = match Type::from_specifiers(&func.return_specifiers) {
        Some(ty) if ty.is_integer() => ty,
        _ => {
            return Err(TranslateError::unsupported(
                format!(
                    "return type '{}' of function '{}'",
                    specifiers_to_string(&func.return_specifiers),
                    func.name
                ),
                func.span.start.clone(),
            ))
        }
    };

    let parameters = if is_void_parameter_list(&func.parameters) {
        Vec::new()
    } else {
        func.parameters
            .iter()
            .map(resolve_parameter)
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(FunctionSignature { return_type, parameters })
}

/// `f(void)`: one unnamed parameter of type void
fn is_void_parameter_list(parameters: &[Parameter]) -> bool {
    match parameters {
        [param] => param.name.is_none() && Type::from_specifiers(&param.specifiers) == Some(Type::Void),
        _ => false,
    }
}

fn resolve_parameter(param: &Parameter) -> Result<SignatureParameter, TranslateError> {
    let name = param
        .name
        .clone()
        .ok_or_else(|| TranslateError::unsupported("unnamed parameter", param.span.start.clone()))?;

    match Type::from_specifiers(&param.specifiers) {
        Some(Type::Int) => Ok(SignatureParameter {
            name,
            param_type: Type::Int,
            location: param.span.start.clone(),
        }),
        _ => Err(TranslateError::unsupported(
            format!("parameter type '{}' of '{name}'", specifiers_to_string(&param.specifiers)),
            param.span.start.clone(),
        )),
    }
}

/// Check a function body against its resolved signature
pub fn type_function(
    func: &FunctionDefinition,
    signature: &FunctionSignature,
    module_scope: &Scope,
) -> Result<TypedFunction, TranslateError> {
    debug!("checking function '{}': {}", func.name, signature.function_type());

    let mut scope = module_scope.for_function(signature.return_type.clone());
    let mut parameters = Vec::with_capacity(signature.parameters.len());
    for param in &signature.parameters {
        let emitted_name = scope.declare(&param.name, param.param_type.clone(), param.location.clone())?;
        parameters.push(TypedParameter {
            name: emitted_name,
            param_type: param.param_type.clone(),
            intended_type: param.param_type.intended(),
        });
    }

    let body = type_block_in(&func.body, &mut scope)?;

    Ok(TypedFunction {
        name: func.name.clone(),
        return_type: signature.return_type.clone(),
        parameters,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Block, Declaration, InitDeclarator};
    use crate::semantic::errors::ErrorKind;
    use casm_common::{SourceSpan, TypeSpecifier};

    fn at(line: u32, column: u32) -> SourceSpan {
        SourceSpan::from_location(SourceLocation::new_simple(line, column))
    }

    fn param(name: Option<&str>, specifiers: Vec<TypeSpecifier>) -> Parameter {
        Parameter {
            name: name.map(str::to_string),
            specifiers,
            span: SourceSpan::dummy(),
        }
    }

    fn function(return_specifiers: Vec<TypeSpecifier>, parameters: Vec<Parameter>) -> FunctionDefinition {
        FunctionDefinition {
            name: "f".to_string(),
            return_specifiers,
            parameters,
            body: Block::empty(SourceSpan::dummy()),
            span: SourceSpan::dummy(),
        }
    }

    #[test]
    fn test_signature() {
        let func = function(
            vec![TypeSpecifier::Int],
            vec![param(Some("a"), vec![TypeSpecifier::Int]), param(Some("b"), vec![TypeSpecifier::Signed])],
        );
        let sig = resolve_signature(&func).unwrap();
        assert_eq!(sig.function_type(), Type::func(Type::Int, vec![Type::Int, Type::Int]));
    }

    #[test]
    fn test_void_parameter_list() {
        let func = function(vec![TypeSpecifier::Int], vec![param(None, vec![TypeSpecifier::Void])]);
        let sig = resolve_signature(&func).unwrap();
        assert!(sig.parameters.is_empty());
    }

    #[test]
    fn test_named_void_parameter_rejected() {
        let func = function(vec![TypeSpecifier::Int], vec![param(Some("v"), vec![TypeSpecifier::Void])]);
        let err = resolve_signature(&func).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedConstruct);
    }

    #[test]
    fn test_unnamed_int_parameter_rejected() {
        let func = function(vec![TypeSpecifier::Int], vec![param(None, vec![TypeSpecifier::Int])]);
        let err = resolve_signature(&func).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedConstruct);
    }

    #[test]
    fn test_void_return_rejected() {
        let func = function(vec![TypeSpecifier::Void], vec![]);
        let err = resolve_signature(&func).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedConstruct);
    }

    #[test]
    fn test_parameters_in_scope() {
        let func = function(vec![TypeSpecifier::Int], vec![param(Some("a"), vec![TypeSpecifier::Int])]);
        let sig = resolve_signature(&func).unwrap();
        let typed = type_function(&func, &sig, &Scope::new()).unwrap();

        assert_eq!(typed.parameters.len(), 1);
        assert_eq!(typed.parameters[0].intended_type, Some(Type::Signed));
        assert_eq!(typed.return_type, Type::Int);
    }

    #[test]
    fn test_parameter_locations_kept() {
        let mut a = param(Some("a"), vec![TypeSpecifier::Int]);
        a.span = at(1, 11);
        let mut b = param(Some("b"), vec![TypeSpecifier::Int]);
        b.span = at(1, 18);

        let sig = resolve_signature(&function(vec![TypeSpecifier::Int], vec![a, b])).unwrap();
        assert_eq!(sig.parameters[0].location.column, 11);
        assert_eq!(sig.parameters[1].location.column, 18);
    }

    #[test]
    fn test_duplicate_parameter_rejected() {
        let mut first = param(Some("a"), vec![TypeSpecifier::Int]);
        first.span = at(1, 11);
        let mut second = param(Some("a"), vec![TypeSpecifier::Int]);
        second.span = at(1, 18);

        let func = function(vec![TypeSpecifier::Int], vec![first, second]);
        let sig = resolve_signature(&func).unwrap();
        match type_function(&func, &sig, &Scope::new()).unwrap_err() {
            TranslateError::RedefinedSymbol { original_location, location, .. } => {
                assert_eq!(original_location.column, 11);
                assert_eq!(location.column, 18);
            }
            other => panic!("Expected RedefinedSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_body_redeclaring_parameter_rejected() {
        let mut func = function(vec![TypeSpecifier::Int], vec![param(Some("a"), vec![TypeSpecifier::Int])]);
        func.body.declarations.push(Declaration {
            specifiers: vec![TypeSpecifier::Int],
            declarators: vec![InitDeclarator {
                name: "a".to_string(),
                initializer: None,
                span: SourceSpan::dummy(),
            }],
            span: SourceSpan::dummy(),
        });

        let sig = resolve_signature(&func).unwrap();
        let err = type_function(&func, &sig, &Scope::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RedefinedSymbol);
    }
}

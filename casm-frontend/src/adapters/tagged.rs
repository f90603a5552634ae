//! Tagged grammar
//!
//! Every node is `{"type": tag, "params": [...]}` with positional children,
//! for example `{"type": "Add", "params": [left, right]}`. The module root is
//! an array of top-level nodes.

use super::Loc;
use crate::ast::*;
use crate::semantic::errors::TranslateError;
use casm_common::{SourceLocation, SourceSpan, TypeSpecifier};
use serde::Deserialize;
use serde_json::Value;

/// A decoded `{type, params}` node
struct Node<'a> {
    tag: &'a str,
    params: &'a [Value],
    span: SourceSpan,
}

impl<'a> Node<'a> {
    fn parse(value: &'a Value) -> Result<Self, TranslateError> {
        let span = span_of(value);
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| TranslateError::unsupported("node without a type tag", span.start.clone()))?;

        let params: &'a [Value] = match value.get("params") {
            Some(Value::Array(params)) => params.as_slice(),
            None => &[],
            Some(_) => {
                return Err(TranslateError::unsupported(
                    format!("malformed '{tag}' node"),
                    span.start.clone(),
                ))
            }
        };

        Ok(Node { tag, params, span })
    }

    /// Parse and check the tag in one go
    fn expect(value: &'a Value, tag: &str) -> Result<Self, TranslateError> {
        let node = Node::parse(value)?;
        if node.tag != tag {
            return Err(TranslateError::unsupported(
                format!("node '{}' where '{tag}' was expected", node.tag),
                node.location(),
            ));
        }
        Ok(node)
    }

    fn location(&self) -> SourceLocation {
        self.span.start.clone()
    }

    fn unsupported(&self) -> TranslateError {
        TranslateError::unsupported(format!("node '{}'", self.tag), self.location())
    }

    fn malformed(&self) -> TranslateError {
        TranslateError::unsupported(format!("malformed '{}' node", self.tag), self.location())
    }

    fn param(&self, index: usize) -> Result<&'a Value, TranslateError> {
        self.params.get(index).ok_or_else(|| self.malformed())
    }

    fn list(&self, index: usize) -> Result<&'a [Value], TranslateError> {
        match self.param(index)? {
            Value::Array(items) => Ok(items.as_slice()),
            _ => Err(self.malformed()),
        }
    }

    fn string(&self, index: usize) -> Result<&'a str, TranslateError> {
        self.param(index)?.as_str().ok_or_else(|| self.malformed())
    }
}

fn span_of(value: &Value) -> SourceSpan {
    let loc = value.get("loc").and_then(|loc| Loc::deserialize(loc).ok());
    Loc::span(loc)
}

/// Lower a tagged-grammar module to the canonical AST
pub fn lower_module(root: &Value) -> Result<TranslationUnit, TranslateError> {
    let items = root
        .as_array()
        .ok_or_else(|| TranslateError::unsupported("module root that is not an array", SourceLocation::dummy()))?;

    Ok(TranslationUnit {
        items: items.iter().map(lower_top_level).collect::<Result<_, _>>()?,
        span: span_of(root),
    })
}

fn lower_top_level(value: &Value) -> Result<TopLevelItem, TranslateError> {
    let node = Node::parse(value)?;
    match node.tag {
        "FunctionDefinition" => Ok(TopLevelItem::Function(lower_function(&node)?)),
        "Declaration" => Ok(TopLevelItem::Declaration(lower_declaration(&node)?)),
        _ => Err(node.unsupported()),
    }
}

/// `FunctionDefinition [specifiers, FunctionDeclarator [Identifier, params], declarations, Block]`
fn lower_function(node: &Node) -> Result<FunctionDefinition, TranslateError> {
    let return_specifiers = lower_specifiers(node, node.param(0)?)?;

    let declarator = Node::expect(node.param(1)?, "FunctionDeclarator")?;
    let name = lower_identifier(declarator.param(0)?)?;
    let parameters = declarator
        .list(1)?
        .iter()
        .map(lower_parameter)
        .collect::<Result<Vec<_>, _>>()?;

    if !node.list(2)?.is_empty() {
        return Err(TranslateError::unsupported(
            "old-style parameter declarations",
            node.location(),
        ));
    }

    let body = lower_block(&Node::expect(node.param(3)?, "Block")?)?;

    Ok(FunctionDefinition {
        name,
        return_specifiers,
        parameters,
        body,
        span: node.span.clone(),
    })
}

fn lower_parameter(value: &Value) -> Result<Parameter, TranslateError> {
    let node = Node::parse(value)?;
    let name = match node.tag {
        "ParameterDeclaration" => Some(lower_identifier(node.param(1)?)?),
        "TypeOnlyParameterDeclaration" => None,
        _ => return Err(node.unsupported()),
    };

    Ok(Parameter {
        name,
        specifiers: lower_specifiers(&node, node.param(0)?)?,
        span: node.span.clone(),
    })
}

/// Specifiers are either keyword strings or `TypeSpecifier [keyword]` nodes
fn lower_specifiers(owner: &Node, value: &Value) -> Result<Vec<TypeSpecifier>, TranslateError> {
    let items = value.as_array().ok_or_else(|| owner.malformed())?;
    items
        .iter()
        .map(|item| match item {
            Value::String(keyword) => Ok(TypeSpecifier::from_keyword(keyword)),
            _ => {
                let node = Node::expect(item, "TypeSpecifier")?;
                Ok(TypeSpecifier::from_keyword(node.string(0)?))
            }
        })
        .collect()
}

fn lower_identifier(value: &Value) -> Result<String, TranslateError> {
    let node = Node::expect(value, "Identifier")?;
    Ok(node.string(0)?.to_string())
}

/// `Block [declarations, statements]`
fn lower_block(node: &Node) -> Result<Block, TranslateError> {
    let declarations = node
        .list(0)?
        .iter()
        .map(|decl| lower_declaration(&Node::expect(decl, "Declaration")?))
        .collect::<Result<Vec<_>, _>>()?;

    let statements = node
        .list(1)?
        .iter()
        .map(lower_statement)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Block {
        declarations,
        statements,
        span: node.span.clone(),
    })
}

/// `Declaration [specifiers, [InitDeclarator [Identifier, init | null]]]`
fn lower_declaration(node: &Node) -> Result<Declaration, TranslateError> {
    let specifiers = lower_specifiers(node, node.param(0)?)?;

    let mut declarators = Vec::new();
    for value in node.list(1)? {
        let init_declarator = Node::expect(value, "InitDeclarator")?;
        let name = lower_identifier(init_declarator.param(0)?)?;
        let initializer = match init_declarator.params.get(1) {
            None | Some(Value::Null) => None,
            Some(init) => Some(lower_expression(init)?),
        };
        declarators.push(InitDeclarator {
            name,
            initializer,
            span: init_declarator.span.clone(),
        });
    }

    Ok(Declaration {
        specifiers,
        declarators,
        span: node.span.clone(),
    })
}

fn lower_statement(value: &Value) -> Result<Statement, TranslateError> {
    let node = Node::parse(value)?;
    let kind = match node.tag {
        "ExpressionStatement" => StatementKind::Expression(lower_expression(node.param(0)?)?),
        "Return" => match node.params.first() {
            None | Some(Value::Null) => StatementKind::Return(None),
            Some(expr) => StatementKind::Return(Some(lower_expression(expr)?)),
        },
        "Block" => StatementKind::Compound(lower_block(&node)?),
        _ => return Err(node.unsupported()),
    };

    Ok(Statement::new(kind, node.span.clone()))
}

fn lower_expression(value: &Value) -> Result<Expression, TranslateError> {
    let node = Node::parse(value)?;
    let kind = match node.tag {
        "Add" => ExpressionKind::Binary {
            op: BinaryOp::Add,
            left: Box::new(lower_expression(node.param(0)?)?),
            right: Box::new(lower_expression(node.param(1)?)?),
        },
        "Assign" => {
            let symbol = node.string(1)?;
            let op = AssignOp::from_symbol(symbol).ok_or_else(|| {
                TranslateError::unsupported(format!("assignment operator '{symbol}'"), node.location())
            })?;
            ExpressionKind::Assignment {
                op,
                target: Box::new(lower_expression(node.param(0)?)?),
                value: Box::new(lower_expression(node.param(2)?)?),
            }
        }
        "Const" => match node.param(0)? {
            Value::String(text) => ExpressionKind::Constant(text.clone()),
            Value::Number(number) => ExpressionKind::Constant(number.to_string()),
            _ => return Err(node.malformed()),
        },
        "FunctionCall" => ExpressionKind::Call {
            function: Box::new(lower_expression(node.param(0)?)?),
            arguments: node
                .list(1)?
                .iter()
                .map(lower_expression)
                .collect::<Result<Vec<_>, _>>()?,
        },
        "Var" => ExpressionKind::Identifier(node.string(0)?.to_string()),
        _ => return Err(node.unsupported()),
    };

    Ok(Expression::new(kind, node.span.clone()))
}

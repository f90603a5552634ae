//! Declarative grammar
//!
//! Nodes are objects discriminated by `declarationType`, `statementType` or
//! `expressionType`, with named children. Declarations leading a statement
//! list become the block's declarations. A declaration that follows a
//! statement opens a nested block holding the rest of the list, so it is
//! only visible from where it appears.

use super::Loc;
use crate::ast::*;
use crate::semantic::errors::TranslateError;
use casm_common::{SourceLocation, SourceSpan, TypeSpecifier};
use serde::Deserialize;
use serde_json::Value;

/// A node this grammar understands, or any other object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Known<T> {
    Node(T),
    Other(OtherNode),
}

/// Whatever can still be read from an unrecognized or malformed node
#[derive(Debug, Deserialize)]
struct OtherNode {
    #[serde(alias = "declarationType", alias = "statementType", alias = "expressionType")]
    tag: Option<String>,
    loc: Option<Loc>,
}

impl OtherNode {
    fn into_error(self, category: &str) -> TranslateError {
        let construct = match self.tag {
            Some(tag) => format!("unsupported or malformed {category} '{tag}'"),
            None => format!("untagged {category}"),
        };
        TranslateError::unsupported(construct, Loc::span(self.loc).start)
    }
}

type Stmt = Known<StatementNode>;
type Expr = Known<ExpressionNode>;

#[derive(Debug, Deserialize)]
struct ModuleNode {
    declarations: Vec<Known<DeclarationNode>>,
    loc: Option<Loc>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "declarationType")]
enum DeclarationNode {
    FunctionDefinition(FunctionNode),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FunctionNode {
    name: String,
    return_type: TypeNode,
    #[serde(default)]
    parameters: Vec<ParameterNode>,
    body: Vec<Stmt>,
    loc: Option<Loc>,
}

#[derive(Debug, Deserialize)]
struct TypeNode {
    category: String,
}

#[derive(Debug, Deserialize)]
struct ParameterNode {
    name: Option<String>,
    #[serde(rename = "type")]
    param_type: TypeNode,
    loc: Option<Loc>,
}

#[derive(Debug, Deserialize)]
struct VariableNode {
    name: String,
}

#[derive(Debug, Deserialize)]
struct VariableDeclarationNode {
    variable: VariableNode,
    #[serde(rename = "initialValueExpression")]
    initial_value: Option<Expr>,
    loc: Option<Loc>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "statementType")]
enum StatementNode {
    BlockStatement {
        statements: Vec<Stmt>,
        loc: Option<Loc>,
    },
    DeclarationStatement {
        #[serde(rename = "type")]
        decl_type: TypeNode,
        #[serde(rename = "variableDeclarations")]
        variable_declarations: Vec<VariableDeclarationNode>,
        loc: Option<Loc>,
    },
    ExpressionStatement {
        expression: Expr,
        loc: Option<Loc>,
    },
    ReturnStatement {
        expression: Option<Expr>,
        loc: Option<Loc>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "expressionType")]
enum ExpressionNode {
    AddExpression {
        left: Box<Expr>,
        right: Box<Expr>,
        loc: Option<Loc>,
    },
    BinaryExpression {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
        loc: Option<Loc>,
    },
    AssignmentExpression {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
        loc: Option<Loc>,
    },
    ConstExpression {
        value: ConstValue,
        loc: Option<Loc>,
    },
    FunctionCallExpression {
        callee: Box<Expr>,
        #[serde(default)]
        arguments: Vec<Expr>,
        loc: Option<Loc>,
    },
    VariableExpression {
        variable: VariableNode,
        loc: Option<Loc>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConstValue {
    Text(String),
    Number(serde_json::Number),
}

/// Lower a declarative-grammar module to the canonical AST
pub fn lower_module(root: &Value) -> Result<TranslationUnit, TranslateError> {
    let module = ModuleNode::deserialize(root).map_err(|err| {
        TranslateError::unsupported(format!("malformed declarative tree: {err}"), SourceLocation::dummy())
    })?;

    let items = module
        .declarations
        .into_iter()
        .map(|decl| match decl {
            Known::Node(DeclarationNode::FunctionDefinition(func)) => lower_function(func).map(TopLevelItem::Function),
            Known::Other(other) => Err(other.into_error("declaration")),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TranslationUnit { items, span: Loc::span(module.loc) })
}

fn specifiers(node: &TypeNode) -> Vec<TypeSpecifier> {
    node.category
        .split_whitespace()
        .map(TypeSpecifier::from_keyword)
        .collect()
}

fn lower_function(func: FunctionNode) -> Result<FunctionDefinition, TranslateError> {
    let span = Loc::span(func.loc);
    let parameters = func
        .parameters
        .into_iter()
        .map(|param| Parameter {
            specifiers: specifiers(&param.param_type),
            name: param.name,
            span: Loc::span(param.loc),
        })
        .collect();

    Ok(FunctionDefinition {
        name: func.name,
        return_specifiers: specifiers(&func.return_type),
        parameters,
        body: lower_statement_list(func.body, span.clone())?,
        span,
    })
}

/// Split a statement list into a block's declarations and statements
fn lower_statement_list(nodes: Vec<Stmt>, span: SourceSpan) -> Result<Block, TranslateError> {
    let mut block = Block::empty(span);
    let mut nodes = nodes.into_iter();

    while let Some(node) = nodes.next() {
        let (decl_type, variable_declarations, loc) = match node {
            Known::Node(StatementNode::DeclarationStatement { decl_type, variable_declarations, loc }) => {
                (decl_type, variable_declarations, loc)
            }
            other => {
                block.statements.push(lower_statement(other)?);
                continue;
            }
        };

        let declaration = lower_declaration(&decl_type, variable_declarations, loc)?;
        if block.statements.is_empty() {
            block.declarations.push(declaration);
            continue;
        }

        let span = declaration.span.clone();
        let mut rest = lower_statement_list(nodes.by_ref().collect(), span.clone())?;
        rest.declarations.insert(0, declaration);
        block.statements.push(Statement::new(StatementKind::Compound(rest), span));
    }

    Ok(block)
}

fn lower_declaration(
    decl_type: &TypeNode,
    variable_declarations: Vec<VariableDeclarationNode>,
    loc: Option<Loc>,
) -> Result<Declaration, TranslateError> {
    let declarators = variable_declarations
        .into_iter()
        .map(|var| -> Result<InitDeclarator, TranslateError> {
            Ok(InitDeclarator {
                name: var.variable.name,
                initializer: var.initial_value.map(lower_expression).transpose()?,
                span: Loc::span(var.loc),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Declaration {
        specifiers: specifiers(decl_type),
        declarators,
        span: Loc::span(loc),
    })
}

fn lower_statement(node: Stmt) -> Result<Statement, TranslateError> {
    let node = match node {
        Known::Node(node) => node,
        Known::Other(other) => return Err(other.into_error("statement")),
    };

    let (kind, loc) = match node {
        StatementNode::BlockStatement { statements, loc } => {
            (StatementKind::Compound(lower_statement_list(statements, Loc::span(loc))?), loc)
        }
        StatementNode::ExpressionStatement { expression, loc } => {
            (StatementKind::Expression(lower_expression(expression)?), loc)
        }
        StatementNode::ReturnStatement { expression, loc } => {
            (StatementKind::Return(expression.map(lower_expression).transpose()?), loc)
        }
        StatementNode::DeclarationStatement { loc, .. } => {
            return Err(TranslateError::unsupported("misplaced declaration", Loc::span(loc).start))
        }
    };

    Ok(Statement::new(kind, Loc::span(loc)))
}

fn lower_operand(node: Box<Expr>) -> Result<Box<Expression>, TranslateError> {
    lower_expression(*node).map(Box::new)
}

fn lower_expression(node: Expr) -> Result<Expression, TranslateError> {
    let node = match node {
        Known::Node(node) => node,
        Known::Other(other) => return Err(other.into_error("expression")),
    };

    let (kind, loc) = match node {
        ExpressionNode::AddExpression { left, right, loc } => (
            ExpressionKind::Binary {
                op: BinaryOp::Add,
                left: lower_operand(left)?,
                right: lower_operand(right)?,
            },
            loc,
        ),
        ExpressionNode::BinaryExpression { operator, left, right, loc } => {
            let op = BinaryOp::from_symbol(&operator).ok_or_else(|| {
                TranslateError::unsupported(format!("binary operator '{operator}'"), Loc::span(loc).start)
            })?;
            (
                ExpressionKind::Binary {
                    op,
                    left: lower_operand(left)?,
                    right: lower_operand(right)?,
                },
                loc,
            )
        }
        ExpressionNode::AssignmentExpression { operator, left, right, loc } => {
            let op = AssignOp::from_symbol(&operator).ok_or_else(|| {
                TranslateError::unsupported(format!("assignment operator '{operator}'"), Loc::span(loc).start)
            })?;
            (
                ExpressionKind::Assignment {
                    op,
                    target: lower_operand(left)?,
                    value: lower_operand(right)?,
                },
                loc,
            )
        }
        ExpressionNode::ConstExpression { value, loc } => {
            let text = match value {
                ConstValue::Text(text) => text,
                ConstValue::Number(number) => number.to_string(),
            };
            (ExpressionKind::Constant(text), loc)
        }
        ExpressionNode::FunctionCallExpression { callee, arguments, loc } => (
            ExpressionKind::Call {
                function: lower_operand(callee)?,
                arguments: arguments
                    .into_iter()
                    .map(lower_expression)
                    .collect::<Result<Vec<_>, _>>()?,
            },
            loc,
        ),
        ExpressionNode::VariableExpression { variable, loc } => (ExpressionKind::Identifier(variable.name), loc),
    };

    Ok(Expression::new(kind, Loc::span(loc)))
}

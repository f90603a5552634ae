//! Output node factory
//!
//! Small constructors for every node the code generator emits. The shapes
//! live in `nodes`; these keep the call sites readable.

use super::nodes::*;

pub fn program(body: Vec<Statement>) -> Program {
    Program {
        body,
        source_type: SourceType::Script,
    }
}

pub fn function_declaration(name: &str, params: Vec<Identifier>, body: Vec<Statement>) -> Statement {
    Statement::Function(FunctionDeclaration {
        id: identifier(name),
        params,
        body: block(body),
    })
}

pub fn block(body: Vec<Statement>) -> BlockStatement {
    BlockStatement { body }
}

pub fn var_declaration(declarations: Vec<VariableDeclarator>) -> Statement {
    Statement::Variable(VariableDeclaration {
        declarations,
        kind: VariableKind::Var,
    })
}

pub fn declarator(name: &str, init: Expression) -> VariableDeclarator {
    VariableDeclarator {
        id: identifier(name),
        init,
    }
}

pub fn expression_statement(expression: Expression) -> Statement {
    Statement::Expression(ExpressionStatement { expression })
}

pub fn return_statement(argument: Expression) -> Statement {
    Statement::Return(ReturnStatement {
        argument: Some(argument),
    })
}

pub fn identifier(name: &str) -> Identifier {
    Identifier {
        name: name.to_string(),
    }
}

pub fn variable(name: &str) -> Expression {
    Expression::Identifier(identifier(name))
}

pub fn int_literal(value: i64) -> Expression {
    Expression::Literal(Literal {
        value: LiteralValue::Number(value),
    })
}

pub fn string_literal(value: &str) -> Expression {
    Expression::Literal(Literal {
        value: LiteralValue::String(value.to_string()),
    })
}

pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::Binary(BinaryExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn assignment(left: Expression, right: Expression) -> Expression {
    Expression::Assignment(AssignmentExpression {
        operator: AssignmentOperator::Assign,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::Call(CallExpression {
        callee: Box::new(callee),
        arguments,
    })
}

pub fn object(properties: Vec<Property>) -> Expression {
    Expression::Object(ObjectExpression { properties })
}

pub fn init_property(key: &str, value: Expression) -> Property {
    Property {
        key: identifier(key),
        value,
        kind: PropertyKind::Init,
    }
}

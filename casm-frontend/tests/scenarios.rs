//! End-to-end translation of small programs in the tagged grammar

use casm_frontend::estree::factory::*;
use casm_frontend::estree::{BinaryOperator, Expression, Statement};
use casm_frontend::{ErrorKind, Frontend, Grammar, TranslateOptions};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn ident(name: &str) -> Value {
    json!({"type": "Identifier", "params": [name]})
}

fn var(name: &str) -> Value {
    json!({"type": "Var", "params": [name]})
}

fn constant(text: &str) -> Value {
    json!({"type": "Const", "params": [text]})
}

fn add(left: Value, right: Value) -> Value {
    json!({"type": "Add", "params": [left, right]})
}

fn assign(left: Value, right: Value) -> Value {
    json!({"type": "Assign", "params": [left, "=", right]})
}

fn call_fn(callee: &str, args: Vec<Value>) -> Value {
    json!({"type": "FunctionCall", "params": [var(callee), args]})
}

fn ret(expr: Value) -> Value {
    json!({"type": "Return", "params": [expr]})
}

fn expr_stmt(expr: Value) -> Value {
    json!({"type": "ExpressionStatement", "params": [expr]})
}

fn int_decl(names: &[&str]) -> Value {
    let declarators: Vec<Value> = names
        .iter()
        .map(|name| json!({"type": "InitDeclarator", "params": [ident(name), null]}))
        .collect();
    json!({"type": "Declaration", "params": [["int"], declarators]})
}

fn int_decl_init(name: &str, init: Value) -> Value {
    json!({"type": "Declaration", "params": [["int"], [
        {"type": "InitDeclarator", "params": [ident(name), init]}
    ]]})
}

fn json_block(declarations: Vec<Value>, statements: Vec<Value>) -> Value {
    json!({"type": "Block", "params": [declarations, statements]})
}

fn function(name: &str, params: &[&str], body: Value) -> Value {
    let params: Vec<Value> = params
        .iter()
        .map(|p| json!({"type": "ParameterDeclaration", "params": [["int"], ident(p)]}))
        .collect();
    json!({
        "type": "FunctionDefinition",
        "params": [["int"], {"type": "FunctionDeclarator", "params": [ident(name), params]}, [], body]
    })
}

fn translate(functions: Vec<Value>) -> Result<casm_frontend::Program, casm_frontend::TranslateError> {
    let ast = Frontend::parse_json(&Value::Array(functions).to_string(), Grammar::Tagged)
        .expect("input lowers");
    Frontend::translate(&ast, &TranslateOptions::default())
}

fn coerce(expr: Expression) -> Expression {
    binary(BinaryOperator::BitOr, expr, int_literal(0))
}

fn param_annotation(name: &str) -> Statement {
    expression_statement(assignment(variable(name), coerce(variable(name))))
}

/// The whole module for the given functions, exported in order
fn module(functions: Vec<(&str, Statement)>) -> casm_frontend::Program {
    let mut body = vec![expression_statement(string_literal("use asm"))];
    let mut exports = Vec::new();
    for (name, func) in functions {
        body.push(func);
        exports.push(init_property(name, variable(name)));
    }
    body.push(return_statement(object(exports)));
    program(vec![function_declaration("Module", vec![], body)])
}

#[test]
fn test_add_parameters_coerced() {
    let prog = translate(vec![function(
        "add",
        &["a", "b"],
        json_block(vec![], vec![ret(add(var("a"), var("b")))]),
    )])
    .unwrap();

    let expected = function_declaration(
        "add",
        vec![identifier("a"), identifier("b")],
        vec![
            param_annotation("a"),
            param_annotation("b"),
            return_statement(coerce(binary(BinaryOperator::Add, variable("a"), variable("b")))),
        ],
    );
    assert_eq!(prog, module(vec![("add", expected)]));
}

#[test]
fn test_literal_return_not_coerced() {
    let prog = translate(vec![function("five", &[], json_block(vec![], vec![ret(constant("5"))]))]).unwrap();

    let expected = function_declaration("five", vec![], vec![return_statement(int_literal(5))]);
    assert_eq!(prog, module(vec![("five", expected)]));
}

#[test]
fn test_literal_outside_signed_range_coerced() {
    let prog = translate(vec![function("big", &[], json_block(vec![], vec![ret(constant("3000000000"))]))]).unwrap();

    let expected = function_declaration("big", vec![], vec![return_statement(coerce(int_literal(3_000_000_000)))]);
    assert_eq!(prog, module(vec![("big", expected)]));
}

#[test]
fn test_uninitialized_local_gets_zero() {
    let prog = translate(vec![function(
        "f",
        &[],
        json_block(
            vec![int_decl(&["x"])],
            vec![expr_stmt(assign(var("x"), constant("1"))), ret(var("x"))],
        ),
    )])
    .unwrap();

    let expected = function_declaration(
        "f",
        vec![],
        vec![
            var_declaration(vec![declarator("x", int_literal(0))]),
            expression_statement(assignment(variable("x"), int_literal(1))),
            return_statement(coerce(variable("x"))),
        ],
    );
    assert_eq!(prog, module(vec![("f", expected)]));
}

#[test]
fn test_undeclared_assignment_fails() {
    let err = translate(vec![function(
        "f",
        &[],
        json_block(vec![], vec![expr_stmt(assign(var("x"), constant("1"))), ret(constant("0"))]),
    )])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
}

#[test]
fn test_call_arity_mismatch_fails() {
    let err = translate(vec![
        function("add", &["a", "b"], json_block(vec![], vec![ret(add(var("a"), var("b")))])),
        function("g", &[], json_block(vec![], vec![ret(call_fn("add", vec![constant("1")]))])),
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_forward_call() {
    let prog = translate(vec![
        function("first", &[], json_block(vec![], vec![ret(call_fn("second", vec![constant("2")]))])),
        function("second", &["n"], json_block(vec![], vec![ret(var("n"))])),
    ])
    .unwrap();

    let first = function_declaration(
        "first",
        vec![],
        vec![return_statement(coerce(call(variable("second"), vec![int_literal(2)])))],
    );
    let second = function_declaration(
        "second",
        vec![identifier("n")],
        vec![param_annotation("n"), return_statement(coerce(variable("n")))],
    );
    assert_eq!(prog, module(vec![("first", first), ("second", second)]));
}

#[test]
fn test_recursive_call() {
    let prog = translate(vec![function(
        "loop",
        &["n"],
        json_block(vec![], vec![ret(call_fn("loop", vec![var("n")]))]),
    )]);
    assert!(prog.is_ok());
}

#[test]
fn test_duplicate_function_fails() {
    let err = translate(vec![
        function("f", &[], json_block(vec![], vec![ret(constant("1"))])),
        function("f", &[], json_block(vec![], vec![ret(constant("2"))])),
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RedefinedSymbol);
}

#[test]
fn test_nested_block() {
    let prog = translate(vec![function(
        "f",
        &["a"],
        json_block(
            vec![int_decl(&["x"])],
            vec![
                json_block(vec![int_decl(&["y"])], vec![expr_stmt(assign(var("y"), var("a")))]),
                ret(var("x")),
            ],
        ),
    )])
    .unwrap();

    let expected = function_declaration(
        "f",
        vec![identifier("a")],
        vec![
            param_annotation("a"),
            var_declaration(vec![declarator("x", int_literal(0)), declarator("y", int_literal(0))]),
            Statement::from(block(vec![expression_statement(assignment(variable("y"), variable("a")))])),
            return_statement(coerce(variable("x"))),
        ],
    );
    assert_eq!(prog, module(vec![("f", expected)]));
}

#[test]
fn test_nested_declaration_not_visible_after_block() {
    let err = translate(vec![function(
        "f",
        &[],
        json_block(vec![], vec![json_block(vec![int_decl(&["y"])], vec![]), ret(var("y"))]),
    )])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
}

#[test]
fn test_shadowing_local_keeps_outer_value() {
    let prog = translate(vec![function(
        "f",
        &[],
        json_block(
            vec![int_decl_init("x", constant("5"))],
            vec![
                json_block(vec![int_decl(&["x"])], vec![expr_stmt(assign(var("x"), constant("7")))]),
                ret(var("x")),
            ],
        ),
    )])
    .unwrap();

    let expected = function_declaration(
        "f",
        vec![],
        vec![
            var_declaration(vec![declarator("x", int_literal(5)), declarator("x$1", int_literal(0))]),
            Statement::from(block(vec![expression_statement(assignment(variable("x$1"), int_literal(7)))])),
            return_statement(coerce(variable("x"))),
        ],
    );
    assert_eq!(prog, module(vec![("f", expected)]));
}

#[test]
fn test_sibling_blocks_get_distinct_names() {
    let prog = translate(vec![function(
        "f",
        &[],
        json_block(
            vec![],
            vec![
                json_block(vec![int_decl_init("t", constant("1"))], vec![]),
                json_block(vec![int_decl_init("t", constant("2"))], vec![]),
                ret(constant("0")),
            ],
        ),
    )])
    .unwrap();

    let expected = function_declaration(
        "f",
        vec![],
        vec![
            var_declaration(vec![declarator("t", int_literal(1)), declarator("t$1", int_literal(2))]),
            Statement::from(block(vec![])),
            Statement::from(block(vec![])),
            return_statement(int_literal(0)),
        ],
    );
    assert_eq!(prog, module(vec![("f", expected)]));
}

#[test]
fn test_local_hiding_function_does_not_break_later_call() {
    let prog = translate(vec![
        function("g", &[], json_block(vec![], vec![ret(constant("1"))])),
        function(
            "f",
            &[],
            json_block(vec![], vec![json_block(vec![int_decl(&["g"])], vec![]), ret(call_fn("g", vec![]))]),
        ),
    ])
    .unwrap();

    let g = function_declaration("g", vec![], vec![return_statement(int_literal(1))]);
    let f = function_declaration(
        "f",
        vec![],
        vec![
            var_declaration(vec![declarator("g$1", int_literal(0))]),
            Statement::from(block(vec![])),
            return_statement(coerce(call(variable("g"), vec![]))),
        ],
    );
    assert_eq!(prog, module(vec![("g", g), ("f", f)]));
}

#[test]
fn test_body_redeclaring_parameter_fails() {
    let err = translate(vec![function("f", &["a"], json_block(vec![int_decl(&["a"])], vec![ret(var("a"))]))])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RedefinedSymbol);
}

#[test]
fn test_redeclaration_in_same_block_fails() {
    let err = translate(vec![function(
        "f",
        &[],
        json_block(vec![int_decl(&["x"]), int_decl(&["x"])], vec![ret(constant("0"))]),
    )])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RedefinedSymbol);
}

#[test]
fn test_assignment_to_call_fails() {
    let err = translate(vec![function(
        "f",
        &[],
        json_block(vec![], vec![expr_stmt(assign(call_fn("f", vec![]), constant("1"))), ret(constant("0"))]),
    )])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAssignmentTarget);
}

#[test]
fn test_compound_assignment_fails() {
    let compound = json!({"type": "Assign", "params": [var("a"), "+=", constant("1")]});
    let err = translate(vec![function("f", &["a"], json_block(vec![], vec![expr_stmt(compound), ret(var("a"))]))])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedConstruct);
}

#[test]
fn test_non_constant_initializer_fails() {
    let decl = int_decl_init("x", var("a"));
    let err = translate(vec![function("f", &["a"], json_block(vec![decl], vec![ret(var("x"))]))]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_void_parameter_list() {
    let func = json!({
        "type": "FunctionDefinition",
        "params": [
            ["int"],
            {"type": "FunctionDeclarator", "params": [ident("zero"), [
                {"type": "TypeOnlyParameterDeclaration", "params": [["void"]]}
            ]]},
            [],
            json_block(vec![], vec![ret(constant("0"))])
        ]
    });
    let prog = translate(vec![func]).unwrap();

    let expected = function_declaration("zero", vec![], vec![return_statement(int_literal(0))]);
    assert_eq!(prog, module(vec![("zero", expected)]));
}

#[test]
fn test_error_location_reported() {
    let mut func = function("f", &[], json_block(vec![], vec![ret(var("missing"))]));
    func["params"][3]["params"][1][0]["params"][0]["loc"] = json!({"line": 7, "column": 12});

    let err = translate(vec![func]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
    assert_eq!(err.location().line, 7);
    assert_eq!(err.location().column, 12);
}

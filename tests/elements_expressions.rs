//! Tests for expression parsing through the public API
//!
//! Each test parses one expression and verifies its shape with the fluent assertions from
//! `txt2tex::txt2tex::testing`.

use txt2tex::parse_source;
use txt2tex::txt2tex::ast::{ArrowKind, BinaryOperator, QuantifierKind, UnaryOperator};
use txt2tex::txt2tex::testing::assert_ast;

#[test]
fn test_logic_precedence() {
    let ast = parse_source("p => q lor r land s").unwrap();
    assert_ast(&ast).single().item(0, |item| {
        item.assert_expr()
            .binary(BinaryOperator::Implies)
            .left(|left| left.identifier("p"))
            .right(|right| {
                right
                    .binary(BinaryOperator::Or)
                    .left(|left| left.identifier("q"))
                    .right(|right| right.binary(BinaryOperator::And))
            })
    });
}

#[test]
fn test_explicit_parentheses_are_recorded() {
    let ast = parse_source("(p lor q) land r").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .binary(BinaryOperator::And)
            .explicit_parens(false)
            .left(|left| left.binary(BinaryOperator::Or).explicit_parens(true))
    });
}

#[test]
fn test_redundant_parentheses_are_recorded_too() {
    let ast = parse_source("(p land q) lor r").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .left(|left| left.binary(BinaryOperator::And).explicit_parens(true))
    });
}

#[test]
fn test_comparison_inside_logic() {
    let ast = parse_source("x elem S land #S > 0").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .binary(BinaryOperator::And)
            .left(|left| left.binary(BinaryOperator::Elem))
            .right(|right| {
                right
                    .binary(BinaryOperator::GreaterThan)
                    .left(|left| left.unary(UnaryOperator::Cardinality))
                    .right(|right| right.number("0"))
            })
    });
}

#[test]
fn test_set_operators_bind_tighter_than_membership() {
    let ast = parse_source("x in A union B").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .binary(BinaryOperator::Elem)
            .right(|right| right.binary(BinaryOperator::Union))
    });
}

#[test]
fn test_quantifier_with_domain() {
    let ast = parse_source("forall x : N | x >= 0").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .quantifier(QuantifierKind::Forall, &["x"])
            .domain(|domain| domain.identifier("N"))
            .body(|body| body.binary(BinaryOperator::GreaterEq))
    });
}

#[test]
fn test_unicode_spelling_gives_the_same_tree() {
    let ascii = parse_source("forall x : N | x elem S land x > 0").unwrap();
    let unicode = parse_source("∀ x : N | x ∈ S ∧ x > 0").unwrap();
    assert_eq!(
        txt2tex::txt2tex::formats::serialize_ast(&ascii),
        txt2tex::txt2tex::formats::serialize_ast(&unicode)
    );
}

#[test]
fn test_exists_unique() {
    let ast = parse_source("exists1 y : N | y = 0").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .quantifier(QuantifierKind::Exists1, &["y"])
            .body(|body| body.binary(BinaryOperator::Equals))
    });
}

#[test]
fn test_lambda_body() {
    let ast = parse_source("lambda n : N . n + 1").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .node("Lambda")
            .domain(|domain| domain.identifier("N"))
            .body(|body| body.binary(BinaryOperator::Plus))
    });
}

#[test]
fn test_function_types() {
    let ast = parse_source("X -> Y +-> Z").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .function_type(ArrowKind::TotalFunction)
            .left(|left| left.identifier("X"))
            .right(|right| right.function_type(ArrowKind::PartialFunction))
    });
}

#[test]
fn test_relation_and_maplet() {
    let ast = parse_source("a |-> b elem X <-> Y").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .binary(BinaryOperator::Elem)
            .left(|left| left.binary(BinaryOperator::Maplet))
            .right(|right| right.binary(BinaryOperator::Relation))
    });
}

#[test]
fn test_power_set_prefix() {
    let ast = parse_source("S elem P X").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr().right(|right| {
            right
                .unary(UnaryOperator::PowerSet)
                .operand(|operand| operand.identifier("X"))
        })
    });
}

#[test]
fn test_prefix_relation_functions() {
    let ast = parse_source("dom R union ran R").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .binary(BinaryOperator::Union)
            .left(|left| left.unary(UnaryOperator::Dom))
            .right(|right| right.unary(UnaryOperator::Ran))
    });
}

#[test]
fn test_postfix_closures_and_inverse() {
    let ast = parse_source("R+ = R~").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .left(|left| left.unary(UnaryOperator::TransitiveClosure))
            .right(|right| right.unary(UnaryOperator::Inverse))
    });
}

#[test]
fn test_application_by_call_and_juxtaposition() {
    let ast = parse_source("f(a, b)").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .function(|function| function.identifier("f"))
            .element_count(2)
            .element(1, |arg| arg.identifier("b"))
    });

    let ast = parse_source("f x").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .function(|function| function.identifier("f"))
            .element(0, |arg| arg.identifier("x"))
    });
}

#[test]
fn test_application_to_sequence_literal() {
    let ast = parse_source("x = rev <1, 2>").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .binary(BinaryOperator::Equals)
            .right(|right| {
                right
                    .function(|function| function.identifier("rev"))
                    .element(0, |arg| arg.node("SequenceLiteral").element_count(2))
            })
    });

    let ast = parse_source("head <a> = a").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .binary(BinaryOperator::Equals)
            .left(|left| left.node("FunctionApp"))
    });
}

#[test]
fn test_spaced_set_difference() {
    let ast = parse_source("(A \\ B) union C").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .binary(BinaryOperator::Union)
            .left(|left| left.binary(BinaryOperator::Setminus).explicit_parens(true))
    });
}

#[test]
fn test_comprehension_over_tuple_pattern() {
    let ast = parse_source("{ (a, b) : T | a = b }").unwrap();
    assert_ast(&ast).item(0, |item| item.assert_expr().node("SetComprehension"));
}

#[test]
fn test_literals() {
    let ast = parse_source("{1, 2, 3}").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .node("SetLiteral")
            .element_count(3)
            .element(0, |e| e.number("1"))
    });

    let ast = parse_source("<a, b>").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr().node("SequenceLiteral").element_count(2)
    });

    let ast = parse_source("[[a, a]]").unwrap();
    assert_ast(&ast).item(0, |item| item.assert_expr().node("BagLiteral").element_count(2));

    let ast = parse_source("{}").unwrap();
    assert_ast(&ast).item(0, |item| item.assert_expr().node("SetLiteral").element_count(0));
}

#[test]
fn test_tuple_and_projection() {
    let ast = parse_source("(a, b)").unwrap();
    assert_ast(&ast).item(0, |item| item.assert_expr().node("Tuple").element_count(2));

    let ast = parse_source("p.1").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .node("TupleProjection")
            .operand(|base| base.identifier("p"))
    });
}

#[test]
fn test_sequence_concatenation_and_exponent() {
    let ast = parse_source("s ^ t").unwrap();
    assert_ast(&ast).item(0, |item| item.assert_expr().binary(BinaryOperator::Concat));

    let ast = parse_source("x^2 + 1").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .binary(BinaryOperator::Plus)
            .left(|left| left.node("Superscript").operand(|base| base.identifier("x")))
    });
}

#[test]
fn test_range() {
    let ast = parse_source("1..n").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .node("Range")
            .left(|start| start.number("1"))
            .right(|end| end.identifier("n"))
    });
}

#[test]
fn test_generic_instantiation() {
    let ast = parse_source("seq[N]").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_expr()
            .node("GenericInstantiation")
            .element_count(1)
            .element(0, |param| param.identifier("N"))
    });
}

#[test]
fn test_conditional() {
    let ast = parse_source("if x > 0 then x else -x").unwrap();
    assert_ast(&ast).item(0, |item| item.assert_expr().node("Conditional"));
}

#[test]
fn test_long_expression_wraps_inside_parentheses() {
    let ast = parse_source("(p land\n q land\n r)").unwrap();
    assert_ast(&ast)
        .single()
        .item(0, |item| item.assert_expr().binary(BinaryOperator::And));
}

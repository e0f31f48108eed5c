//! Tests for derivation blocks: EQUIV/ARGUE chains, PROOF trees and INFRULE rules

use txt2tex::parse_source;
use txt2tex::txt2tex::ast::{BinaryOperator, ChainKind, Item};
use txt2tex::txt2tex::testing::assert_ast;

#[test]
fn test_equiv_chain_steps() {
    let source = "EQUIV:\nlnot (p land q)\n<=> lnot p lor lnot q [De Morgan]";
    let ast = parse_source(source).unwrap();
    match &ast.items()[0] {
        Item::EquivChain(chain) => {
            assert_eq!(chain.kind, ChainKind::Equiv);
            assert_eq!(chain.steps.len(), 2);
            assert!(chain.steps[0].relation.is_none());
            assert_eq!(chain.steps[1].relation, Some(BinaryOperator::Iff));
            assert_eq!(chain.steps[1].justification.as_deref(), Some("De Morgan"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_argue_chain_with_implication() {
    let source = "ARGUE:\np land q\n=> p [land elim]";
    let ast = parse_source(source).unwrap();
    match &ast.items()[0] {
        Item::EquivChain(chain) => {
            assert_eq!(chain.kind, ChainKind::Argue);
            assert_eq!(chain.steps[1].relation, Some(BinaryOperator::Implies));
            assert_eq!(chain.steps[1].justification.as_deref(), Some("∧ elim"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_equiv_chain_ends_at_blank_line() {
    let source = "EQUIV:\np\n<=> p lor p [idempotence]\n\nq";
    let ast = parse_source(source).unwrap();
    assert_ast(&ast)
        .document()
        .item_count(2)
        .item(0, |item| item.node("EquivChain"))
        .item(1, |item| item.assert_expr().identifier("q"));
}

#[test]
fn test_proof_tree_nesting() {
    let source = "PROOF:\np land q => q land p [=> intro]\n  q land p [and intro]\n    q [land elim]\n      p land q [1]\n    p [land elim]\n      p land q [1]";
    let ast = parse_source(source).unwrap();
    assert_ast(&ast).single().item(0, |item| {
        item.assert_proof().root_count(1).root(0, |root| {
            root.justification("⇒ intro")
                .expression(|e| e.binary(BinaryOperator::Implies))
                .child_count(1)
                .child(0, |step| {
                    step.justification("and intro")
                        .child_count(2)
                        .child(0, |left| {
                            left.justification("∧ elim")
                                .child(0, |assumption| assumption.label(1))
                        })
                        .child(1, |right| right.expression(|e| e.identifier("p")))
                })
        })
    });
}

#[test]
fn test_proof_siblings_cases_and_ellipsis() {
    let source = "PROOF:\nr [or elim]\n  p lor q [1]\n  :: case p:\n    ...\n  case q:\n    r [from 2]";
    let ast = parse_source(source).unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_proof().root(0, |root| {
            root.expression(|e| e.identifier("r"))
                .child_count(3)
                .child(0, |premise| premise.label(1).sibling(false))
                .case(1, "p", 1)
                .case(2, "q", 1)
        })
    });
}

#[test]
fn test_proof_label_before_expression() {
    let source = "PROOF:\nq [=> elim]\n  [1] p\n  :: p => q [2]";
    let ast = parse_source(source).unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_proof().root(0, |root| {
            root.child(0, |first| first.label(1).sibling(false))
                .child(1, |second| {
                    second
                        .label(2)
                        .sibling(true)
                        .expression(|e| e.binary(BinaryOperator::Implies))
                })
        })
    });
}

#[test]
fn test_elided_step() {
    let ast = parse_source("PROOF:\nq [lemma]\n  ...").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_proof()
            .root(0, |root| root.child(0, |step| step.elided()))
    });
}

#[test]
fn test_several_root_steps() {
    let ast = parse_source("PROOF:\np [premise]\nq [premise]").unwrap();
    assert_ast(&ast)
        .item(0, |item| item.assert_proof().root_count(2));
}

#[test]
fn test_inference_rule() {
    let source = "INFRULE:\np => q\np\n---\nq [modus ponens]";
    let ast = parse_source(source).unwrap();
    match &ast.items()[0] {
        Item::InfruleBlock(rule) => {
            assert_eq!(rule.premises.len(), 2);
            assert!(rule.premises[0].label.is_none());
            assert_eq!(rule.conclusion.label.as_deref(), Some("modus ponens"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

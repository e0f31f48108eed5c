//! Tests for Z paragraphs: given types, free types, abbreviations and boxes

use txt2tex::parse_source;
use txt2tex::txt2tex::ast::{ArrowKind, BinaryOperator, Item};
use txt2tex::txt2tex::testing::assert_ast;

#[test]
fn test_given_types() {
    let ast = parse_source("given Person, Course").unwrap();
    assert_ast(&ast)
        .single()
        .item(0, |item| item.given(&["Person", "Course"]));

    let ast = parse_source("[NAME, DATE]").unwrap();
    assert_ast(&ast).item(0, |item| item.given(&["NAME", "DATE"]));
}

#[test]
fn test_free_type_constants() {
    let ast = parse_source("Colour ::= red | green | blue").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_free_type()
            .name("Colour")
            .branch_count(3)
            .constant(0, "red")
            .constant(2, "blue")
    });
}

#[test]
fn test_recursive_free_type() {
    let ast = parse_source("Tree ::= leaf⟨N⟩ | branch⟨Tree × Tree⟩").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_free_type()
            .name("Tree")
            .constructor(0, "leaf", |param| param.identifier("N"))
            .constructor(1, "branch", |param| param.binary(BinaryOperator::Cross))
    });
}

#[test]
fn test_free_type_continued_on_next_lines() {
    let ast = parse_source("Status ::= active\n  | suspended\n  | closed").unwrap();
    assert_ast(&ast)
        .single()
        .item(0, |item| item.assert_free_type().branch_count(3));
}

#[test]
fn test_abbreviations() {
    let ast = parse_source("Pairs == N cross N").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.abbreviation("Pairs", |e| e.binary(BinaryOperator::Cross))
    });

    let ast = parse_source("R+ == R o9 R").unwrap();
    assert_ast(&ast).item(0, |item| {
        item.abbreviation("R+", |e| e.binary(BinaryOperator::Compose))
    });
}

#[test]
fn test_generic_abbreviation() {
    let ast = parse_source("[X] Pair == X cross X").unwrap();
    match &ast.items()[0] {
        Item::Abbreviation(abbrev) => {
            assert_eq!(abbrev.name, "Pair");
            assert_eq!(abbrev.generics, vec!["X"]);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_axdef() {
    let source = "axdef\n  capacity : N\n  limit : N\nwhere\n  limit <= capacity\nend";
    let ast = parse_source(source).unwrap();
    match &ast.items()[0] {
        Item::AxDef(axdef) => {
            assert!(axdef.generics.is_empty());
            assert_eq!(axdef.declarations.len(), 2);
            assert_eq!(axdef.declarations[1].variables, vec!["limit"]);
            assert_eq!(axdef.predicates.len(), 1);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_axdef_without_where() {
    let ast = parse_source("axdef\n  f : N -> N\nend").unwrap();
    match &ast.items()[0] {
        Item::AxDef(axdef) => {
            assert!(axdef.predicates.is_empty());
            assert!(matches!(
                axdef.declarations[0].type_expr,
                txt2tex::Expr::FunctionType {
                    arrow: ArrowKind::TotalFunction,
                    ..
                }
            ));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_schema() {
    let source = "schema Library\n  books : P Book\n  loans : Book +-> Person\nwhere\n  dom loans subset books\nend";
    let ast = parse_source(source).unwrap();
    match &ast.items()[0] {
        Item::Schema(schema) => {
            assert_eq!(schema.name.as_deref(), Some("Library"));
            assert_eq!(schema.declarations.len(), 2);
            assert_eq!(schema.predicates.len(), 1);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_anonymous_generic_schema() {
    let ast = parse_source("schema [X]\n  items : seq X\nend").unwrap();
    match &ast.items()[0] {
        Item::Schema(schema) => {
            assert!(schema.name.is_none());
            assert_eq!(schema.generics, vec!["X"]);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_gendef() {
    let source = "gendef [X]\n  empty : P X\nwhere\n  empty = {}\nend";
    let ast = parse_source(source).unwrap();
    match &ast.items()[0] {
        Item::GenDef(gendef) => {
            assert_eq!(gendef.generics, vec!["X"]);
            assert_eq!(gendef.declarations[0].variables, vec!["empty"]);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_zed_block() {
    let source = "zed\n  given Room\n  Door ::= open | shut\n  Rooms == P Room\nend";
    let ast = parse_source(source).unwrap();
    assert_ast(&ast).single().item(0, |item| {
        item.assert_zed()
            .item_count(3)
            .item(0, |item| item.given(&["Room"]))
            .item(1, |item| item.assert_free_type().name("Door"))
            .item(2, |item| item.node("Abbreviation"))
    });
}

#[test]
fn test_syntax_block() {
    let source = "syntax\n  Expr ::= num⟨N⟩\n       | plus⟨Expr × Expr⟩\nend";
    let ast = parse_source(source).unwrap();
    match &ast.items()[0] {
        Item::Syntax(syntax) => {
            assert_eq!(syntax.definitions.len(), 1);
            assert_eq!(syntax.definitions[0].name, "Expr");
            assert_eq!(syntax.definitions[0].branches.len(), 2);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_truth_table() {
    let source = "TRUTH TABLE:\np | q | p => q\nT | T | T\nT | F | F\nF | T | T\nF | F | T";
    let ast = parse_source(source).unwrap();
    assert_ast(&ast).item(0, |item| {
        item.assert_truth_table()
            .headers(&["p", "q", "p => q"])
            .row_count(4)
            .row(1, &["T", "F", "F"])
    });
}

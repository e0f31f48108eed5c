//! Tests for document structure: sections, solutions, parts and prose blocks

use txt2tex::parse_source;
use txt2tex::txt2tex::ast::{Ast, BinaryOperator};
use txt2tex::txt2tex::testing::{assert_ast, TextMatch};

#[test]
fn test_single_expression_is_not_wrapped() {
    let ast = parse_source("p land q").unwrap();
    assert!(matches!(ast, Ast::Single(_)));
    assert_ast(&ast).single().item_count(1);
}

#[test]
fn test_empty_input_is_an_empty_document() {
    let ast = parse_source("").unwrap();
    assert_ast(&ast).document().item_count(0);

    let ast = parse_source("\n\n   \n").unwrap();
    assert_ast(&ast).document().item_count(0);
}

#[test]
fn test_one_item_per_line() {
    let ast = parse_source("p\nq land r\n\ns").unwrap();
    assert_ast(&ast)
        .document()
        .item_count(3)
        .item(1, |item| item.assert_expr().binary(BinaryOperator::And))
        .item(2, |item| item.assert_expr().identifier("s"));
}

#[test]
fn test_sections_collect_following_items() {
    let source = "=== Propositional logic ===\np\nq\n=== Sets ===\nx elem S";
    let ast = parse_source(source).unwrap();
    assert_ast(&ast)
        .document()
        .item_count(2)
        .item(0, |item| {
            item.assert_section()
                .title("Propositional logic")
                .item_count(2)
        })
        .item(1, |item| {
            item.assert_section()
                .title(TextMatch::StartsWith("Set".to_string()))
                .item_count(1)
        });
}

#[test]
fn test_solution_parts() {
    let source = "** Solution 3 **\n(a) p lor q\n(b)\nq\nTEXT: By cases.\n(c) r";
    let ast = parse_source(source).unwrap();
    assert_ast(&ast).single().item(0, |item| {
        item.assert_solution()
            .title("Solution 3")
            .item_count(3)
            .item(0, |part| part.assert_part().title("a").item_count(1))
            .item(1, |part| {
                part.assert_part()
                    .title("b")
                    .item_count(2)
                    .item(1, |item| item.paragraph("By cases."))
            })
            .item(2, |part| part.assert_part().title("c"))
    });
}

#[test]
fn test_section_marker_closes_solution_and_part() {
    let source = "=== One ===\n** Solution 1 **\n(a) p\n=== Two ===\nq";
    let ast = parse_source(source).unwrap();
    assert_ast(&ast)
        .item_count(2)
        .item(0, |item| {
            item.assert_section().item_count(1).item(0, |solution| {
                solution
                    .assert_solution()
                    .item(0, |part| part.assert_part().item_count(1))
            })
        })
        .item(1, |item| item.assert_section().title("Two").item_count(1));
}

#[test]
fn test_prose_blocks_keep_raw_text() {
    let source = "TEXT: Let x elem S => true.\nPURETEXT: 50% of cases\nLATEX: \\newpage";
    let ast = parse_source(source).unwrap();
    assert_ast(&ast)
        .item_count(3)
        .item(0, |item| item.paragraph("Let x elem S => true."))
        .item(1, |item| item.pure_paragraph("50% of cases"))
        .item(2, |item| item.latex("\\newpage"));
}

#[test]
fn test_text_spans_following_lines() {
    let source = "TEXT: first line\nsecond line\n\np";
    let ast = parse_source(source).unwrap();
    assert_ast(&ast)
        .item_count(2)
        .item(0, |item| {
            item.paragraph(TextMatch::Contains("second line".to_string()))
        });
}

#[test]
fn test_markers() {
    let ast = parse_source("CONTENTS:\nPAGEBREAK:").unwrap();
    assert_ast(&ast)
        .item_count(2)
        .item(0, |item| item.node("Contents"))
        .item(1, |item| item.node("PageBreak"));
}

#[test]
fn test_locations_are_recorded() {
    let ast = parse_source("p\n\n  abc land d").unwrap();
    let item = &ast.items()[1];
    assert_eq!(item.location().line, 3);
    // BinaryOp sits at its operator
    assert_eq!(item.location().column, 7);
}

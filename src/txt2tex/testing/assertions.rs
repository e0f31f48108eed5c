//! Fluent assertion API for parse results

use super::matchers::TextMatch;
use crate::txt2tex::ast::{
    ArrowKind, Ast, BinaryOperator, Expr, FreeType, Item, ProofChild, ProofNode, ProofTree,
    QuantifierKind, TruthTable, UnaryOperator,
};

// ============================================================================
// Entry Points
// ============================================================================

/// Create an assertion builder for a parse result
pub fn assert_ast(ast: &Ast) -> AstAssertion<'_> {
    AstAssertion { ast }
}

/// Create an assertion builder for a bare expression
pub fn assert_expr(expr: &Expr) -> ExprAssertion<'_> {
    ExprAssertion {
        expr,
        context: "expr".to_string(),
    }
}

fn summarize_items(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| item.node_name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_item_count(items: &[Item], expected: usize, context: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: Expected {} items, found {} items: [{}]",
        context,
        expected,
        items.len(),
        summarize_items(items)
    );
}

fn nth_item<'a>(items: &'a [Item], index: usize, context: &str) -> &'a Item {
    assert!(
        index < items.len(),
        "{}: Item index {} out of bounds ({} items)",
        context,
        index,
        items.len()
    );
    &items[index]
}

// ============================================================================
// Ast Assertions
// ============================================================================

pub struct AstAssertion<'a> {
    ast: &'a Ast,
}

impl<'a> AstAssertion<'a> {
    /// Assert the input held exactly one item and was not wrapped in a document
    pub fn single(self) -> Self {
        assert!(
            !self.ast.is_document(),
            "Expected a single item, found a document with {} items: [{}]",
            self.ast.items().len(),
            summarize_items(self.ast.items())
        );
        self
    }

    pub fn document(self) -> Self {
        assert!(
            self.ast.is_document(),
            "Expected a document, found a single {}",
            summarize_items(self.ast.items())
        );
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        check_item_count(self.ast.items(), expected, "document");
        self
    }

    /// Assert on a specific item by index
    pub fn item<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>) -> R,
    {
        let item = nth_item(self.ast.items(), index, "document");
        assertion(ItemAssertion {
            item,
            context: format!("items[{}]", index),
        });
        self
    }
}

// ============================================================================
// Item Assertions
// ============================================================================

pub struct ItemAssertion<'a> {
    item: &'a Item,
    context: String,
}

impl<'a> ItemAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.item.node_name()
        )
    }

    pub fn node(self, expected: &str) -> Self {
        assert_eq!(
            self.item.node_name(),
            expected,
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.item.node_name()
        );
        self
    }

    pub fn assert_expr(self) -> ExprAssertion<'a> {
        match self.item {
            Item::Expr(expr) => ExprAssertion {
                expr,
                context: self.context,
            },
            _ => self.mismatch("expression"),
        }
    }

    pub fn assert_section(self) -> ContainerAssertion<'a> {
        match self.item {
            Item::Section(s) => ContainerAssertion {
                title: &s.title,
                items: &s.items,
                context: self.context,
            },
            _ => self.mismatch("Section"),
        }
    }

    pub fn assert_solution(self) -> ContainerAssertion<'a> {
        match self.item {
            Item::Solution(s) => ContainerAssertion {
                title: &s.title,
                items: &s.items,
                context: self.context,
            },
            _ => self.mismatch("Solution"),
        }
    }

    /// The part's title is its letter
    pub fn assert_part(self) -> ContainerAssertion<'a> {
        match self.item {
            Item::Part(p) => ContainerAssertion {
                title: &p.label,
                items: &p.items,
                context: self.context,
            },
            _ => self.mismatch("Part"),
        }
    }

    pub fn assert_zed(self) -> ContainerAssertion<'a> {
        match self.item {
            Item::Zed(z) => ContainerAssertion {
                title: "",
                items: &z.items,
                context: self.context,
            },
            _ => self.mismatch("Zed"),
        }
    }

    /// Assert the item is a TEXT: paragraph with matching text
    pub fn paragraph(self, expected: impl Into<TextMatch>) -> Self {
        match self.item {
            Item::Paragraph(p) => expected.into().assert(&p.text, &self.context),
            _ => self.mismatch("Paragraph"),
        }
        self
    }

    pub fn pure_paragraph(self, expected: impl Into<TextMatch>) -> Self {
        match self.item {
            Item::PureParagraph(p) => expected.into().assert(&p.text, &self.context),
            _ => self.mismatch("PureParagraph"),
        }
        self
    }

    pub fn latex(self, expected: impl Into<TextMatch>) -> Self {
        match self.item {
            Item::LatexBlock(block) => expected.into().assert(&block.latex, &self.context),
            _ => self.mismatch("LatexBlock"),
        }
        self
    }

    pub fn given(self, expected: &[&str]) -> Self {
        match self.item {
            Item::GivenType(given) => assert_eq!(
                given.names, expected,
                "{}: given type names differ",
                self.context
            ),
            _ => self.mismatch("GivenType"),
        }
        self
    }

    /// Assert the item is an abbreviation `name == ...` and check its expression
    pub fn abbreviation<F, R>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>) -> R,
    {
        match self.item {
            Item::Abbreviation(abbrev) => {
                assert_eq!(abbrev.name, name, "{}: abbreviation name", self.context);
                assertion(ExprAssertion {
                    expr: &abbrev.expression,
                    context: format!("{}.expression", self.context),
                });
            }
            _ => self.mismatch("Abbreviation"),
        }
        self
    }

    pub fn assert_free_type(self) -> FreeTypeAssertion<'a> {
        match self.item {
            Item::FreeType(free) => FreeTypeAssertion {
                free,
                context: self.context,
            },
            _ => self.mismatch("FreeType"),
        }
    }

    pub fn assert_truth_table(self) -> TruthTableAssertion<'a> {
        match self.item {
            Item::TruthTable(table) => TruthTableAssertion {
                table,
                context: self.context,
            },
            _ => self.mismatch("TruthTable"),
        }
    }

    pub fn assert_proof(self) -> ProofAssertion<'a> {
        match self.item {
            Item::ProofTree(tree) => ProofAssertion {
                tree,
                context: self.context,
            },
            _ => self.mismatch("ProofTree"),
        }
    }
}

// ============================================================================
// Container Assertions (sections, solutions, parts, zed)
// ============================================================================

pub struct ContainerAssertion<'a> {
    title: &'a str,
    items: &'a [Item],
    context: String,
}

impl<'a> ContainerAssertion<'a> {
    pub fn title(self, expected: impl Into<TextMatch>) -> Self {
        expected
            .into()
            .assert(self.title, &format!("{}.title", self.context));
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        check_item_count(self.items, expected, &self.context);
        self
    }

    pub fn item<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>) -> R,
    {
        let item = nth_item(self.items, index, &self.context);
        assertion(ItemAssertion {
            item,
            context: format!("{}.items[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Expression Assertions
// ============================================================================

pub struct ExprAssertion<'a> {
    expr: &'a Expr,
    context: String,
}

impl<'a> ExprAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {:?}",
            self.context, expected, self.expr
        )
    }

    fn nested<F, R>(&self, expr: &'a Expr, field: &str, assertion: F)
    where
        F: FnOnce(ExprAssertion<'a>) -> R,
    {
        assertion(ExprAssertion {
            expr,
            context: format!("{}.{}", self.context, field),
        });
    }

    pub fn node(self, expected: &str) -> Self {
        assert_eq!(
            self.expr.node_name(),
            expected,
            "{}: Expected {}, found {:?}",
            self.context,
            expected,
            self.expr
        );
        self
    }

    pub fn identifier(self, expected: &str) -> Self {
        match self.expr {
            Expr::Identifier { name, .. } => {
                assert_eq!(name, expected, "{}: identifier name", self.context)
            }
            _ => self.mismatch(&format!("Identifier({})", expected)),
        }
        self
    }

    pub fn number(self, expected: &str) -> Self {
        match self.expr {
            Expr::Number { value, .. } => {
                assert_eq!(value, expected, "{}: number value", self.context)
            }
            _ => self.mismatch(&format!("Number({})", expected)),
        }
        self
    }

    /// Assert a binary operation with operator `expected`
    pub fn binary(self, expected: BinaryOperator) -> Self {
        match self.expr {
            Expr::BinaryOp { op, .. } => {
                assert_eq!(*op, expected, "{}: binary operator", self.context)
            }
            _ => self.mismatch(&format!("BinaryOp({:?})", expected)),
        }
        self
    }

    pub fn explicit_parens(self, expected: bool) -> Self {
        match self.expr {
            Expr::BinaryOp {
                explicit_parens, ..
            } => assert_eq!(
                *explicit_parens, expected,
                "{}: explicit_parens",
                self.context
            ),
            _ => self.mismatch("BinaryOp"),
        }
        self
    }

    pub fn unary(self, expected: UnaryOperator) -> Self {
        match self.expr {
            Expr::UnaryOp { op, .. } => {
                assert_eq!(*op, expected, "{}: unary operator", self.context)
            }
            _ => self.mismatch(&format!("UnaryOp({:?})", expected)),
        }
        self
    }

    pub fn function_type(self, expected: ArrowKind) -> Self {
        match self.expr {
            Expr::FunctionType { arrow, .. } => {
                assert_eq!(*arrow, expected, "{}: arrow", self.context)
            }
            _ => self.mismatch(&format!("FunctionType({:?})", expected)),
        }
        self
    }

    /// Assert a quantifier of `kind` binding exactly `variables`
    pub fn quantifier(self, kind: QuantifierKind, variables: &[&str]) -> Self {
        match self.expr {
            Expr::Quantifier {
                kind: actual,
                variables: actual_vars,
                ..
            } => {
                assert_eq!(*actual, kind, "{}: quantifier kind", self.context);
                assert_eq!(actual_vars, variables, "{}: bound variables", self.context);
            }
            _ => self.mismatch(&format!("Quantifier({:?})", kind)),
        }
        self
    }

    /// Left operand of a binary operation, domain of a function type, start of a range
    pub fn left<F, R>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>) -> R,
    {
        match self.expr {
            Expr::BinaryOp { left, .. } => self.nested(left, "left", assertion),
            Expr::FunctionType { domain, .. } => self.nested(domain, "left", assertion),
            Expr::Range { start, .. } => self.nested(start, "left", assertion),
            _ => self.mismatch("a binary form"),
        }
        self
    }

    pub fn right<F, R>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>) -> R,
    {
        match self.expr {
            Expr::BinaryOp { right, .. } => self.nested(right, "right", assertion),
            Expr::FunctionType { range, .. } => self.nested(range, "right", assertion),
            Expr::Range { end, .. } => self.nested(end, "right", assertion),
            _ => self.mismatch("a binary form"),
        }
        self
    }

    /// Operand of a unary operation, base of a projection or superscript
    pub fn operand<F, R>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>) -> R,
    {
        match self.expr {
            Expr::UnaryOp { operand, .. } => self.nested(operand, "operand", assertion),
            Expr::TupleProjection { base, .. }
            | Expr::Superscript { base, .. }
            | Expr::GenericInstantiation { base, .. } => self.nested(base, "base", assertion),
            _ => self.mismatch("a unary form"),
        }
        self
    }

    /// Body of a quantifier or lambda
    pub fn body<F, R>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>) -> R,
    {
        match self.expr {
            Expr::Quantifier { body, .. } | Expr::Lambda { body, .. } => {
                self.nested(body, "body", assertion)
            }
            _ => self.mismatch("Quantifier or Lambda"),
        }
        self
    }

    pub fn domain<F, R>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>) -> R,
    {
        match self.expr {
            Expr::Quantifier {
                domain: Some(domain),
                ..
            }
            | Expr::Lambda {
                domain: Some(domain),
                ..
            } => self.nested(domain, "domain", assertion),
            _ => self.mismatch("a binder with a domain"),
        }
        self
    }

    /// The applied function of `f(x)` or `f x`
    pub fn function<F, R>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>) -> R,
    {
        match self.expr {
            Expr::FunctionApp { function, .. } => self.nested(function, "function", assertion),
            _ => self.mismatch("FunctionApp"),
        }
        self
    }

    /// Number of arguments, elements, or generic parameters
    pub fn element_count(self, expected: usize) -> Self {
        let actual = self.elements().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} elements, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn element<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>) -> R,
    {
        let elements = self.elements();
        assert!(
            index < elements.len(),
            "{}: Element index {} out of bounds ({} elements)",
            self.context,
            index,
            elements.len()
        );
        self.nested(&elements[index], &format!("elements[{}]", index), assertion);
        self
    }

    fn elements(&self) -> &'a [Expr] {
        match self.expr {
            Expr::SetLiteral { elements, .. }
            | Expr::SequenceLiteral { elements, .. }
            | Expr::BagLiteral { elements, .. }
            | Expr::Tuple { elements, .. } => elements,
            Expr::FunctionApp { args, .. } => args,
            Expr::GenericInstantiation { parameters, .. } => parameters,
            _ => self.mismatch("a literal, application or instantiation"),
        }
    }
}

// ============================================================================
// Free Type Assertions
// ============================================================================

pub struct FreeTypeAssertion<'a> {
    free: &'a FreeType,
    context: String,
}

impl<'a> FreeTypeAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.free.name, expected, "{}: free type name", self.context);
        self
    }

    pub fn branch_count(self, expected: usize) -> Self {
        assert_eq!(
            self.free.branches.len(),
            expected,
            "{}: Expected {} branches",
            self.context,
            expected
        );
        self
    }

    /// Assert branch `index` is a constant constructor called `name`
    pub fn constant(self, index: usize, name: &str) -> Self {
        let branch = &self.free.branches[index];
        assert_eq!(branch.name, name, "{}.branches[{}]", self.context, index);
        assert!(
            branch.parameter.is_none(),
            "{}.branches[{}]: Expected no parameter",
            self.context,
            index
        );
        self
    }

    /// Assert branch `index` is constructor `name` and check its parameter
    pub fn constructor<F, R>(self, index: usize, name: &str, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>) -> R,
    {
        let branch = &self.free.branches[index];
        let context = format!("{}.branches[{}]", self.context, index);
        assert_eq!(branch.name, name, "{}", context);
        match &branch.parameter {
            Some(parameter) => {
                assertion(ExprAssertion {
                    expr: parameter,
                    context: format!("{}.parameter", context),
                });
            }
            None => panic!("{}: Expected a parameter", context),
        }
        self
    }
}

// ============================================================================
// Truth Table Assertions
// ============================================================================

pub struct TruthTableAssertion<'a> {
    table: &'a TruthTable,
    context: String,
}

impl TruthTableAssertion<'_> {
    pub fn headers(self, expected: &[&str]) -> Self {
        assert_eq!(self.table.headers, expected, "{}: headers", self.context);
        self
    }

    pub fn row_count(self, expected: usize) -> Self {
        assert_eq!(self.table.rows.len(), expected, "{}: rows", self.context);
        self
    }

    pub fn row(self, index: usize, expected: &[&str]) -> Self {
        assert_eq!(
            self.table.rows[index], expected,
            "{}.rows[{}]",
            self.context, index
        );
        self
    }
}

// ============================================================================
// Proof Assertions
// ============================================================================

pub struct ProofAssertion<'a> {
    tree: &'a ProofTree,
    context: String,
}

impl<'a> ProofAssertion<'a> {
    pub fn root_count(self, expected: usize) -> Self {
        assert_eq!(
            self.tree.nodes.len(),
            expected,
            "{}: Expected {} root steps",
            self.context,
            expected
        );
        self
    }

    pub fn root<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ProofNodeAssertion<'a>) -> R,
    {
        assertion(ProofNodeAssertion {
            node: &self.tree.nodes[index],
            context: format!("{}.nodes[{}]", self.context, index),
        });
        self
    }
}

pub struct ProofNodeAssertion<'a> {
    node: &'a ProofNode,
    context: String,
}

impl<'a> ProofNodeAssertion<'a> {
    pub fn expression<F, R>(self, assertion: F) -> Self
    where
        F: FnOnce(ExprAssertion<'a>) -> R,
    {
        match &self.node.expression {
            Some(expr) => {
                assertion(ExprAssertion {
                    expr,
                    context: format!("{}.expression", self.context),
                });
            }
            None => panic!("{}: Expected an expression, found '...'", self.context),
        }
        self
    }

    pub fn elided(self) -> Self {
        assert!(
            self.node.expression.is_none(),
            "{}: Expected '...'",
            self.context
        );
        self
    }

    pub fn justification(self, expected: impl Into<TextMatch>) -> Self {
        match &self.node.justification {
            Some(text) => expected
                .into()
                .assert(text, &format!("{}.justification", self.context)),
            None => panic!("{}: Expected a justification", self.context),
        }
        self
    }

    pub fn label(self, expected: u32) -> Self {
        assert_eq!(self.node.label, Some(expected), "{}: label", self.context);
        self
    }

    pub fn sibling(self, expected: bool) -> Self {
        assert_eq!(
            self.node.is_sibling, expected,
            "{}: is_sibling",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children.len(),
            expected,
            "{}: Expected {} children",
            self.context,
            expected
        );
        self
    }

    /// Assert child `index` is a proof step and check it
    pub fn child<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ProofNodeAssertion<'a>) -> R,
    {
        let context = format!("{}.children[{}]", self.context, index);
        match &self.node.children[index] {
            ProofChild::Node(node) => {
                assertion(ProofNodeAssertion { node, context });
            }
            ProofChild::Case(case) => {
                panic!("{}: Expected a proof step, found case '{}'", context, case.case_name)
            }
        }
        self
    }

    /// Assert child `index` is `case <name>:` with `step_count` steps
    pub fn case(self, index: usize, name: &str, step_count: usize) -> Self {
        let context = format!("{}.children[{}]", self.context, index);
        match &self.node.children[index] {
            ProofChild::Case(case) => {
                assert_eq!(case.case_name, name, "{}: case name", context);
                assert_eq!(case.steps.len(), step_count, "{}: case steps", context);
            }
            ProofChild::Node(_) => panic!("{}: Expected a case analysis", context),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txt2tex::parse_source;

    #[test]
    fn test_fluent_chain() {
        let ast = parse_source("=== A ===\n(p land q) lor r").unwrap();
        assert_ast(&ast).single().item(0, |item| {
            item.assert_section().title("A").item(0, |item| {
                item.assert_expr()
                    .binary(BinaryOperator::Or)
                    .explicit_parens(false)
                    .left(|left| left.binary(BinaryOperator::And).explicit_parens(true))
                    .right(|right| right.identifier("r"))
            })
        });
    }

    #[test]
    #[should_panic(expected = "items[1]: Expected Section, found Identifier")]
    fn test_mismatch_reports_context() {
        let ast = parse_source("p\nq").unwrap();
        assert_ast(&ast).item(1, |item| item.assert_section());
    }
}

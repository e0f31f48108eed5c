//! Uniform snapshot of AST nodes
//!
//! Each node becomes a node type name, a short label for the data that is not itself a
//! node (names, operator symbols, titles), and the child nodes in source order. Optional
//! children that could be confused with each other are wrapped in a named node
//! (`Domain`, `Predicate`, `Image`, `Where`).

use crate::txt2tex::ast::{
    Binding, Declaration, EquivStep, Expr, FreeType, InfruleLine, Item, ProofChild, ProofNode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub node_type: String,
    pub label: String,
    pub children: Vec<Snapshot>,
}

impl Snapshot {
    fn new(node_type: &str, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.to_string(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    fn with_children(mut self, children: Vec<Snapshot>) -> Self {
        self.children = children;
        self
    }

    fn child(mut self, child: Snapshot) -> Self {
        self.children.push(child);
        self
    }

    fn optional(mut self, node_type: &str, expr: Option<&Expr>) -> Self {
        if let Some(expr) = expr {
            self.children
                .push(Snapshot::new(node_type, "").child(snapshot_expr(expr)));
        }
        self
    }
}

pub fn snapshot_item(item: &Item) -> Snapshot {
    match item {
        Item::Expr(expr) => snapshot_expr(expr),
        Item::Section(section) => {
            Snapshot::new("Section", &section.title).with_children(snapshot_items(&section.items))
        }
        Item::Solution(solution) => Snapshot::new("Solution", &solution.title)
            .with_children(snapshot_items(&solution.items)),
        Item::Part(part) => {
            Snapshot::new("Part", &part.label).with_children(snapshot_items(&part.items))
        }
        Item::GivenType(given) => Snapshot::new("GivenType", given.names.join(", ")),
        Item::FreeType(free) => snapshot_free_type(free),
        Item::Abbreviation(abbrev) => {
            Snapshot::new("Abbreviation", with_generics(&abbrev.name, &abbrev.generics))
                .child(snapshot_expr(&abbrev.expression))
        }
        Item::AxDef(axdef) => Snapshot::new("AxDef", with_generics("", &axdef.generics))
            .with_children(snapshot_box(&axdef.declarations, &axdef.predicates)),
        Item::Schema(schema) => {
            let name = schema.name.as_deref().unwrap_or("");
            Snapshot::new("Schema", with_generics(name, &schema.generics))
                .with_children(snapshot_box(&schema.declarations, &schema.predicates))
        }
        Item::GenDef(gendef) => Snapshot::new("GenDef", with_generics("", &gendef.generics))
            .with_children(snapshot_box(&gendef.declarations, &gendef.predicates)),
        Item::Zed(zed) => Snapshot::new("Zed", "").with_children(snapshot_items(&zed.items)),
        Item::Syntax(syntax) => Snapshot::new("Syntax", "")
            .with_children(syntax.definitions.iter().map(snapshot_free_type).collect()),
        Item::TruthTable(table) => Snapshot::new("TruthTable", table.headers.join(" | "))
            .with_children(
                table
                    .rows
                    .iter()
                    .map(|row| Snapshot::new("Row", row.join(" | ")))
                    .collect(),
            ),
        Item::EquivChain(chain) => Snapshot::new("EquivChain", format!("{:?}", chain.kind))
            .with_children(chain.steps.iter().map(snapshot_step).collect()),
        Item::ProofTree(tree) => Snapshot::new("ProofTree", "")
            .with_children(tree.nodes.iter().map(snapshot_proof_node).collect()),
        Item::InfruleBlock(rule) => {
            let mut children: Vec<_> = rule
                .premises
                .iter()
                .map(|line| snapshot_infrule_line("Premise", line))
                .collect();
            children.push(snapshot_infrule_line("Conclusion", &rule.conclusion));
            Snapshot::new("InfruleBlock", "").with_children(children)
        }
        Item::Paragraph(p) => Snapshot::new("Paragraph", &p.text),
        Item::PureParagraph(p) => Snapshot::new("PureParagraph", &p.text),
        Item::LatexBlock(block) => Snapshot::new("LatexBlock", &block.latex),
        Item::PageBreak(_) => Snapshot::new("PageBreak", ""),
        Item::Contents(_) => Snapshot::new("Contents", ""),
    }
}

fn snapshot_items(items: &[Item]) -> Vec<Snapshot> {
    items.iter().map(snapshot_item).collect()
}

pub fn snapshot_expr(expr: &Expr) -> Snapshot {
    let node = expr.node_name();
    match expr {
        Expr::Identifier { name, .. } => Snapshot::new(node, name),
        Expr::Number { value, .. } => Snapshot::new(node, value),
        Expr::BinaryOp {
            op,
            left,
            right,
            explicit_parens,
            ..
        } => {
            let label = if *explicit_parens {
                format!("({})", op.symbol())
            } else {
                op.symbol().to_string()
            };
            Snapshot::new(node, label)
                .child(snapshot_expr(left))
                .child(snapshot_expr(right))
        }
        Expr::UnaryOp { op, operand, .. } => {
            Snapshot::new(node, op.symbol()).child(snapshot_expr(operand))
        }
        Expr::Quantifier {
            kind,
            variables,
            tuple_pattern,
            domain,
            body,
            expression,
            ..
        } => Snapshot::new(
            node,
            format!("{} {}", kind.keyword(), bound(variables, *tuple_pattern)),
        )
        .optional("Domain", domain.as_deref())
        .child(snapshot_expr(body))
        .optional("Image", expression.as_deref()),
        Expr::Lambda {
            variables,
            tuple_pattern,
            domain,
            body,
            ..
        } => Snapshot::new(node, bound(variables, *tuple_pattern))
            .optional("Domain", domain.as_deref())
            .child(snapshot_expr(body)),
        Expr::SetLiteral { elements, .. }
        | Expr::SequenceLiteral { elements, .. }
        | Expr::BagLiteral { elements, .. }
        | Expr::Tuple { elements, .. } => {
            Snapshot::new(node, "").with_children(elements.iter().map(snapshot_expr).collect())
        }
        Expr::SetComprehension {
            bindings,
            predicate,
            expression,
            ..
        } => Snapshot::new(node, "")
            .with_children(bindings.iter().map(snapshot_binding).collect())
            .optional("Predicate", predicate.as_deref())
            .optional("Image", expression.as_deref()),
        Expr::TupleProjection { base, field, .. } => {
            Snapshot::new(node, field).child(snapshot_expr(base))
        }
        Expr::FunctionApp { function, args, .. } => Snapshot::new(node, "")
            .child(snapshot_expr(function))
            .with_appended(args.iter().map(snapshot_expr)),
        Expr::FunctionType {
            arrow,
            domain,
            range,
            ..
        } => Snapshot::new(node, arrow.symbol())
            .child(snapshot_expr(domain))
            .child(snapshot_expr(range)),
        Expr::RelationalImage { relation, set, .. } => Snapshot::new(node, "")
            .child(snapshot_expr(relation))
            .child(snapshot_expr(set)),
        Expr::GenericInstantiation {
            base, parameters, ..
        } => Snapshot::new(node, "")
            .child(snapshot_expr(base))
            .with_appended(parameters.iter().map(snapshot_expr)),
        Expr::Range { start, end, .. } => Snapshot::new(node, "..")
            .child(snapshot_expr(start))
            .child(snapshot_expr(end)),
        Expr::Conditional {
            condition,
            then_branch,
            else_branch,
            ..
        } => Snapshot::new(node, "")
            .child(snapshot_expr(condition))
            .child(snapshot_expr(then_branch))
            .child(snapshot_expr(else_branch)),
        Expr::Superscript { base, exponent, .. } => Snapshot::new(node, "^")
            .child(snapshot_expr(base))
            .child(snapshot_expr(exponent)),
    }
}

impl Snapshot {
    fn with_appended(mut self, children: impl Iterator<Item = Snapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

fn bound(variables: &[String], tuple_pattern: bool) -> String {
    if tuple_pattern {
        format!("({})", variables.join(", "))
    } else {
        variables.join(", ")
    }
}

fn with_generics(name: &str, generics: &[String]) -> String {
    if generics.is_empty() {
        name.to_string()
    } else if name.is_empty() {
        format!("[{}]", generics.join(", "))
    } else {
        format!("{}[{}]", name, generics.join(", "))
    }
}

fn snapshot_binding(binding: &Binding) -> Snapshot {
    Snapshot::new("Binding", binding.variables.join(", "))
        .with_appended(binding.domain.iter().map(snapshot_expr))
}

fn snapshot_free_type(free: &FreeType) -> Snapshot {
    Snapshot::new("FreeType", &free.name).with_children(
        free.branches
            .iter()
            .map(|branch| {
                Snapshot::new("FreeBranch", &branch.name)
                    .with_appended(branch.parameter.iter().map(snapshot_expr))
            })
            .collect(),
    )
}

fn snapshot_box(declarations: &[Declaration], predicates: &[Expr]) -> Vec<Snapshot> {
    let mut children: Vec<_> = declarations
        .iter()
        .map(|decl| {
            Snapshot::new("Declaration", decl.variables.join(", "))
                .child(snapshot_expr(&decl.type_expr))
        })
        .collect();
    if !predicates.is_empty() {
        children.push(
            Snapshot::new("Where", "").with_children(predicates.iter().map(snapshot_expr).collect()),
        );
    }
    children
}

fn snapshot_step(step: &EquivStep) -> Snapshot {
    let mut label = step
        .relation
        .map(|op| op.symbol().to_string())
        .unwrap_or_default();
    if let Some(justification) = &step.justification {
        if !label.is_empty() {
            label.push(' ');
        }
        label.push_str(&format!("[{}]", justification));
    }
    Snapshot::new("EquivStep", label).child(snapshot_expr(&step.expression))
}

fn snapshot_proof_node(node: &ProofNode) -> Snapshot {
    let mut parts = Vec::new();
    if node.is_sibling {
        parts.push("::".to_string());
    }
    if let Some(label) = node.label {
        parts.push(format!("[{}]", label));
    }
    if let Some(justification) = &node.justification {
        parts.push(format!("[{}]", justification));
    }
    let snapshot = match &node.expression {
        Some(expr) => Snapshot::new("ProofNode", parts.join(" ")).child(snapshot_expr(expr)),
        None => Snapshot::new("ProofNode", parts.join(" ")).child(Snapshot::new("Ellipsis", "")),
    };
    snapshot.with_appended(node.children.iter().map(snapshot_proof_child))
}

fn snapshot_proof_child(child: &ProofChild) -> Snapshot {
    match child {
        ProofChild::Node(node) => snapshot_proof_node(node),
        ProofChild::Case(case) => Snapshot::new("CaseAnalysis", &case.case_name)
            .with_children(case.steps.iter().map(snapshot_proof_child).collect()),
    }
}

fn snapshot_infrule_line(node_type: &str, line: &InfruleLine) -> Snapshot {
    Snapshot::new(node_type, line.label.as_deref().unwrap_or(""))
        .child(snapshot_expr(&line.expression))
}

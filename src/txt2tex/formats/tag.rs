//! XML-like AST tag serialization
//!
//! ## Format
//!
//! - Node type → tag name (kebab-case)
//! - Label → text content
//! - Children → nested tags (no wrapper)
//!
//! A document is wrapped in `<document>`; a single item is serialized bare, mirroring the
//! shape [Ast] itself has.
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <section>Introduction
//!     <binary-op>∧
//!       <identifier>p</identifier>
//!       <identifier>q</identifier>
//!     </binary-op>
//!   </section>
//! </document>
//! ```

use super::snapshot::{snapshot_item, Snapshot};
use crate::txt2tex::ast::Ast;

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new(indent_level: usize) -> Self {
        Self {
            output: String::new(),
            indent_level,
        }
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&"  ".repeat(self.indent_level));
        self.output.push_str(s);
    }

    fn serialize_snapshot(&mut self, snapshot: &Snapshot) {
        let tag = to_tag_name(&snapshot.node_type);

        self.push_indent(&format!("<{}>", tag));
        self.output.push_str(&escape_xml(&snapshot.label));

        if snapshot.children.is_empty() {
            self.output.push_str(&format!("</{}>\n", tag));
        } else {
            self.output.push('\n');
            self.indent_level += 1;
            for child in &snapshot.children {
                self.serialize_snapshot(child);
            }
            self.indent_level -= 1;
            self.push_indent(&format!("</{}>\n", tag));
        }
    }
}

/// "BinaryOp" → "binary-op"
fn to_tag_name(node_type: &str) -> String {
    let mut tag = String::new();
    for (i, c) in node_type.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            tag.push('-');
        }
        tag.extend(c.to_lowercase());
    }
    tag
}

/// Serialize a parse result to the tag format
pub fn serialize_ast(ast: &Ast) -> String {
    match ast {
        Ast::Single(item) => {
            let mut serializer = TagSerializer::new(0);
            serializer.serialize_snapshot(&snapshot_item(item));
            serializer.output.trim_end().to_string()
        }
        Ast::Document(doc) => {
            let mut serializer = TagSerializer::new(1);
            for item in &doc.items {
                serializer.serialize_snapshot(&snapshot_item(item));
            }
            format!("<document>\n{}</document>", serializer.output)
        }
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

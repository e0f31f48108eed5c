//! Output formats for syntax trees
//!
//! The AST is first flattened into a uniform [snapshot](snapshot::Snapshot) tree (node type,
//! one-line label, children), which the text formats render. JSON and YAML go through serde
//! on the AST types directly and live in the CLI.

pub mod snapshot;
pub mod tag;

pub use snapshot::{snapshot_item, Snapshot};
pub use tag::serialize_ast;

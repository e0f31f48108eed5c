//! Z paragraphs
//!
//! Declaration blocks keep their declarations and predicates in source order.

use super::document::Item;
use super::expressions::Expr;
use super::Location;
use serde::Serialize;

/// `given A, B` or `[A, B]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GivenType {
    pub names: Vec<String>,
    pub location: Location,
}

/// `Tree ::= leaf | node<Tree cross Tree>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeType {
    pub name: String,
    pub branches: Vec<FreeBranch>,
    pub location: Location,
}

/// A constructor of a free type; `parameter` is the type inside the angle brackets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeBranch {
    pub name: String,
    pub parameter: Option<Expr>,
    pub location: Location,
}

/// `[X] Name == Expression`; the name may end in `+`, `*` or `~`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Abbreviation {
    pub name: String,
    pub generics: Vec<String>,
    pub expression: Expr,
    pub location: Location,
}

/// `x, y : T`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub variables: Vec<String>,
    pub type_expr: Expr,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxDef {
    pub generics: Vec<String>,
    pub declarations: Vec<Declaration>,
    pub predicates: Vec<Expr>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub name: Option<String>,
    pub generics: Vec<String>,
    pub declarations: Vec<Declaration>,
    pub predicates: Vec<Expr>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenDef {
    pub generics: Vec<String>,
    pub declarations: Vec<Declaration>,
    pub predicates: Vec<Expr>,
    pub location: Location,
}

/// `zed` ... `end`: given types, free types, abbreviations and predicates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zed {
    pub items: Vec<Item>,
    pub location: Location,
}

/// `syntax` ... `end`: free type definitions laid out over several lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Syntax {
    pub definitions: Vec<FreeType>,
    pub location: Location,
}

//! Token stream transformations
//!
//! Each transformation is a pure function over a located token stream. They run in this
//! order after base tokenization:
//!
//!     1. compound_identifiers - `R+ ==`, `R* ==`, `R~ ==` name an abbreviation
//!     2. part_labels          - `(a)` at the start of a line
//!     3. concatenation        - `^` is CAT after whitespace and CARET otherwise
//!     4. sequence_brackets    - ASCII `<`/`>` as angle brackets, `]]` outside bags
//!
//! Order matters: sequence bracket detection looks at the previous token's kind, so it
//! needs CAT/CARET and part labels already settled.

pub mod compound_identifiers;
pub mod concatenation;
pub mod part_labels;
pub mod sequence_brackets;

pub use compound_identifiers::CompoundIdentifiers;
pub use concatenation::Concatenation;
pub use part_labels::PartLabels;
pub use sequence_brackets::SequenceBrackets;

use super::error::LexerError;
use super::position::SourceLocation;
use super::LocatedTokens;

/// A transformation that processes a located token stream
///
/// Names are lowercase with underscores. Transformations may reject input (the `>^<`
/// guard does), in which case the whole tokenize call fails.
pub trait Transformation {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn transform(
        &self,
        location: &SourceLocation,
        tokens: LocatedTokens,
    ) -> Result<LocatedTokens, LexerError>;
}

/// The transformations applied by [tokenize](super::tokenize), in order
pub fn pipeline() -> Vec<Box<dyn Transformation>> {
    vec![
        Box::new(CompoundIdentifiers),
        Box::new(PartLabels),
        Box::new(Concatenation),
        Box::new(SequenceBrackets),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_order() {
        let names: Vec<String> = pipeline().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "compound_identifiers",
                "part_labels",
                "concatenation",
                "sequence_brackets"
            ]
        );
    }

    #[test]
    fn test_every_transformation_is_described() {
        for transformation in pipeline() {
            assert!(!transformation.description().is_empty());
        }
    }
}

use crate::qom::{Column, Constraint, Ordering, Source};

/// Complete query.
///
/// The 4-tuple a JCR-SQL2 statement parses into.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Node sources (selectors and joins)
    pub source: Source,

    /// Optional WHERE constraint
    pub constraint: Option<Constraint>,

    /// ORDER BY entries, in declaration order
    pub orderings: Vec<Ordering>,

    /// SELECT columns; empty means `SELECT *` (all columns)
    pub columns: Vec<Column>,
}

use crate::qom::{DynamicOperand, Operator, StaticOperand};

/// WHERE-clause constraint tree.
///
/// Binary connectives parse right-associatively: `a AND b AND c` nests
/// as `And(a, And(b, c))`. `x IS NULL` is encoded as
/// `Not(PropertyExistence)`; bare `PropertyExistence` is `IS NOT NULL`.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Both constraints hold
    And(Box<Constraint>, Box<Constraint>),

    /// Either constraint holds
    Or(Box<Constraint>, Box<Constraint>),

    /// The constraint does not hold
    Not(Box<Constraint>),

    /// Dynamic operand compared against a static operand
    ///
    /// # Example
    /// ```text
    /// a.[jcr:title] = 'x'
    /// ```
    Comparison {
        operand1: DynamicOperand,
        operator: Operator,
        operand2: StaticOperand,
    },

    /// The property exists on the node (`IS NOT NULL`)
    PropertyExistence {
        selector: Option<String>,
        property: String,
    },

    /// Full-text search over one property or all properties
    ///
    /// A `None` property means all properties (`CONTAINS(*, …)` or
    /// `CONTAINS(sel.*, …)`).
    FullTextSearch {
        selector: Option<String>,
        property: Option<String>,
        expression: StaticOperand,
    },

    /// The selector's node is the node at the path
    SameNode {
        selector: Option<String>,
        path: String,
    },

    /// The selector's node is a direct child of the node at the path
    ChildNode {
        selector: Option<String>,
        path: String,
    },

    /// The selector's node is anywhere below the node at the path
    DescendantNode {
        selector: Option<String>,
        path: String,
    },
}

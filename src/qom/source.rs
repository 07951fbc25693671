/// Node source of a query: a selector or a join over two sources.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// Single node-type selector
    Selector(Selector),

    /// Join of two sources
    Join(Join),
}

/// A named binding of a node type, akin to a SQL table alias.
///
/// # Example
/// ```text
/// [nt:unstructured] AS a
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    /// Node type to select, without brackets (`nt:unstructured`)
    pub node_type: String,

    /// Selector name; defaults to the node type when absent
    pub selector_name: Option<String>,
}

/// Join of two sources under a condition.
///
/// Chained joins associate left: `a JOIN b ... JOIN c ...` nests
/// `(a JOIN b)` as the left side of the join with `c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub left: Box<Source>,
    pub right: Box<Source>,
    pub join_type: JoinType,
    pub condition: JoinCondition,
}

/// Join type. A bare `JOIN` means [`JoinType::Inner`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoinType {
    Inner,
    LeftOuter,
    RightOuter,
}

/// The ON condition of a join.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinCondition {
    /// Property equality between the two sides
    ///
    /// # Example
    /// ```text
    /// ON a.ref = b.[jcr:uuid]
    /// ```
    EquiJoin {
        selector1: String,
        property1: String,
        selector2: String,
        property2: String,
    },

    /// Both selectors bind the same node, optionally relative to a path
    ///
    /// # Example
    /// ```text
    /// ON ISSAMENODE(a, b)
    /// ```
    SameNode {
        selector1: String,
        selector2: String,
        path: Option<String>,
    },

    /// The child selector's node is a direct child of the parent's
    ///
    /// # Example
    /// ```text
    /// ON ISCHILDNODE(child, parent)
    /// ```
    ChildNode {
        child_selector: String,
        parent_selector: String,
    },

    /// The descendant selector's node is anywhere below the ancestor's
    ///
    /// # Example
    /// ```text
    /// ON ISDESCENDANTNODE(file, folder)
    /// ```
    DescendantNode {
        descendant_selector: String,
        ancestor_selector: String,
    },
}

use crate::value::Value;

/// Operand evaluated per node, the left side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicOperand {
    /// Value of a property
    PropertyValue(PropertyValue),

    /// Length of a property value, in bytes or characters
    ///
    /// # Example
    /// ```text
    /// LENGTH(a.data)
    /// ```
    Length(PropertyValue),

    /// Full name of the node (`NAME()` / `NAME(sel)`)
    NodeName { selector: Option<String> },

    /// Local (namespace-free) name of the node
    NodeLocalName { selector: Option<String> },

    /// Full-text search score of the node (`SCORE()`)
    FullTextSearchScore { selector: Option<String> },

    /// Lower-cased inner operand (`LOWER(…)`)
    LowerCase(Box<DynamicOperand>),

    /// Upper-cased inner operand (`UPPER(…)`)
    UpperCase(Box<DynamicOperand>),
}

/// A property reference, optionally qualified by a selector name.
///
/// # Examples
/// ```text
/// title
/// a.[jcr:title]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue {
    pub selector: Option<String>,
    pub property: String,
}

/// Operand fixed for the whole query, the right side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum StaticOperand {
    /// Literal value, untyped or CAST
    Literal(Value),

    /// Named placeholder bound at execution time (`$name`)
    BindVariable(String),
}

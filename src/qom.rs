//! # Query Object Model
//!
//! This module defines the Query Object Model (QOM), the typed abstract
//! syntax tree a JCR-SQL2 query parses into and regenerates from.
//!
//! ## Architecture Overview
//!
//! The QOM module is organized into focused submodules:
//!
//! - **[query]** - The top-level query 4-tuple
//! - **[source]** - Selectors, joins, and join conditions
//! - **[constraint]** - The WHERE-clause constraint tree
//! - **[operand]** - Dynamic and static operands
//! - **[operator]** - Comparison operators and their textual forms
//! - **[ordering]** - ORDER BY entries
//! - **[column]** - SELECT-clause columns
//!
//! ## Core Concepts
//!
//! A query is a 4-tuple of source, optional constraint, orderings, and
//! columns:
//!
//! ```text
//! SELECT columns FROM source WHERE constraint ORDER BY orderings
//! ```
//!
//! The **source** binds node types to selector names, possibly through
//! joins. The **constraint** is a tree of logical connectives over
//! comparisons, property existence checks, full-text searches, and
//! location tests. Comparisons pair a **dynamic operand** (evaluated
//! per node) with a **static operand** (a literal or bind variable) —
//! never the reverse.
//!
//! ## Examples
//!
//! ```text
//! SELECT * FROM [nt:unstructured] AS a WHERE a.[jcr:title] = 'x'
//! ```
//!
//! parses into a selector over `nt:unstructured` named `a`, constrained
//! by a comparison of the dynamic property value `a.jcr:title` against
//! the literal string `x`.
pub mod column;
pub mod constraint;
pub mod operand;
pub mod operator;
pub mod ordering;
pub mod query;
pub mod source;

pub use column::Column;
pub use constraint::Constraint;
pub use operand::{DynamicOperand, PropertyValue, StaticOperand};
pub use operator::Operator;
pub use ordering::{Order, Ordering};
pub use query::Query;
pub use source::{Join, JoinCondition, JoinType, Selector, Source};

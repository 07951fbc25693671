pub mod cli;
pub mod factory;
pub mod generator;
pub mod parser;
pub mod qom;
pub mod quoting;
pub mod scanner;
pub mod value;

pub use factory::QomFactory;
pub use generator::{generate, GenerateError, Sql2Generator};
pub use parser::{ParseError, Sql2Parser};
pub use qom::{
    Column, Constraint, DynamicOperand, Join, JoinCondition, JoinType, Operator, Order, Ordering,
    PropertyValue, Query, Selector, Source, StaticOperand,
};
pub use scanner::{Scanner, SyntaxError};
pub use value::Value;

/// Parse a JCR-SQL2 query into its Query Object Model.
///
/// Fails with [`ParseError::InvalidQuery`] when the source has no FROM
/// clause and with [`ParseError::Syntax`] on any syntax error.
///
/// # Examples
///
/// ```
/// use jql2::parse;
///
/// let query = parse("SELECT * FROM [nt:base] WHERE title IS NOT NULL").unwrap();
/// assert!(query.constraint.is_some());
/// ```
pub fn parse(sql2: &str) -> Result<Query, ParseError> {
    Sql2Parser::new(sql2, &QomFactory).parse()
}

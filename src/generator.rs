//! JCR-SQL2 text from a QOM tree.
//!
//! The generator walks the tree and emits canonical JCR-SQL2 text,
//! applying the bracket-quoting rules that keep namespaced names and
//! repository paths lexable. Output is canonical: comparison operators
//! carry no surrounding spaces, logical connectives are always
//! parenthesized, and `Not(PropertyExistence)` renders in its original
//! `… IS NULL` form, so generated text re-parses to the same tree.

use crate::qom::{
    Column, Constraint, DynamicOperand, JoinCondition, JoinType, Operator, Order, Ordering,
    PropertyValue, Query, Selector, Source, StaticOperand,
};
use crate::quoting::{bracket_if_namespaced, ensure_brackets, format_path};
use crate::value::Value;

/// Error raised on a structurally impossible rendering.
///
/// Well-formed trees always generate; this only fires on contract
/// violations such as a column with neither selector nor property.
#[derive(Debug, Clone)]
pub struct GenerateError {
    pub message: String,
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cannot generate query: {}", self.message)
    }
}

impl std::error::Error for GenerateError {}

/// QOM → JCR-SQL2 pretty-printer.
///
/// Stateless apart from the string it builds; safe to reuse across
/// queries.
pub struct Sql2Generator;

impl Sql2Generator {
    pub fn new() -> Self {
        Sql2Generator
    }

    pub fn generate(&self, query: &Query) -> Result<String, GenerateError> {
        let mut sql2 = String::from("SELECT ");
        sql2.push_str(&self.columns(&query.columns)?);
        sql2.push_str(" FROM ");
        sql2.push_str(&self.source(&query.source));
        if let Some(constraint) = &query.constraint {
            sql2.push_str(" WHERE ");
            sql2.push_str(&self.constraint(constraint));
        }
        if !query.orderings.is_empty() {
            sql2.push_str(" ORDER BY ");
            let orderings: Vec<String> = query
                .orderings
                .iter()
                .map(|o| self.ordering(o))
                .collect();
            sql2.push_str(&orderings.join(", "));
        }
        Ok(sql2)
    }

    fn source(&self, source: &Source) -> String {
        match source {
            Source::Selector(selector) => self.selector(selector),
            Source::Join(join) => {
                let keyword = match join.join_type {
                    // A bare JOIN is an inner join per the grammar.
                    JoinType::Inner => "JOIN",
                    JoinType::LeftOuter => "LEFT OUTER JOIN",
                    JoinType::RightOuter => "RIGHT OUTER JOIN",
                };
                format!(
                    "{} {} {} ON {}",
                    self.source(&join.left),
                    keyword,
                    self.source(&join.right),
                    self.join_condition(&join.condition)
                )
            }
        }
    }

    fn selector(&self, selector: &Selector) -> String {
        match &selector.selector_name {
            Some(name) => format!("{} AS {}", ensure_brackets(&selector.node_type), name),
            None => ensure_brackets(&selector.node_type),
        }
    }

    fn join_condition(&self, condition: &JoinCondition) -> String {
        match condition {
            JoinCondition::EquiJoin {
                selector1,
                property1,
                selector2,
                property2,
            } => format!(
                "{}={}",
                self.qualified(selector1, property1),
                self.qualified(selector2, property2)
            ),
            JoinCondition::SameNode {
                selector1,
                selector2,
                path,
            } => match path {
                Some(path) => format!(
                    "ISSAMENODE({}, {}, {})",
                    selector1,
                    selector2,
                    format_path(path)
                ),
                None => format!("ISSAMENODE({}, {})", selector1, selector2),
            },
            JoinCondition::ChildNode {
                child_selector,
                parent_selector,
            } => format!("ISCHILDNODE({}, {})", child_selector, parent_selector),
            JoinCondition::DescendantNode {
                descendant_selector,
                ancestor_selector,
            } => format!(
                "ISDESCENDANTNODE({}, {})",
                descendant_selector, ancestor_selector
            ),
        }
    }

    fn constraint(&self, constraint: &Constraint) -> String {
        match constraint {
            Constraint::And(left, right) => {
                format!("({} AND {})", self.constraint(left), self.constraint(right))
            }
            Constraint::Or(left, right) => {
                format!("({} OR {})", self.constraint(left), self.constraint(right))
            }
            // IS NULL parses to Not(PropertyExistence); regenerate the
            // original form rather than a NOT (…) wrapper.
            Constraint::Not(inner) => match inner.as_ref() {
                Constraint::PropertyExistence { selector, property } => {
                    format!("{} IS NULL", self.property(selector, property))
                }
                other => format!("(NOT {})", self.constraint(other)),
            },
            Constraint::Comparison {
                operand1,
                operator,
                operand2,
            } => {
                let left = self.dynamic_operand(operand1);
                let right = self.static_operand(operand2);
                // Keyword operators need the spaces; symbols do not.
                match operator {
                    Operator::Like => format!("{} LIKE {}", left, right),
                    symbol => format!("{}{}{}", left, symbol.as_sql2(), right),
                }
            }
            Constraint::PropertyExistence { selector, property } => {
                format!("{} IS NOT NULL", self.property(selector, property))
            }
            Constraint::FullTextSearch {
                selector,
                property,
                expression,
            } => {
                let target = match (selector, property) {
                    (Some(sel), Some(prop)) => self.qualified(sel, prop),
                    (Some(sel), None) => format!("{}.*", bracket_if_namespaced(sel)),
                    (None, Some(prop)) => bracket_if_namespaced(prop),
                    (None, None) => "*".to_string(),
                };
                format!(
                    "CONTAINS({}, {})",
                    target,
                    self.static_operand(expression)
                )
            }
            Constraint::SameNode { selector, path } => {
                self.location("ISSAMENODE", selector, path)
            }
            Constraint::ChildNode { selector, path } => {
                self.location("ISCHILDNODE", selector, path)
            }
            Constraint::DescendantNode { selector, path } => {
                self.location("ISDESCENDANTNODE", selector, path)
            }
        }
    }

    fn location(&self, keyword: &str, selector: &Option<String>, path: &str) -> String {
        match selector {
            Some(selector) => format!("{}({}, {})", keyword, selector, format_path(path)),
            None => format!("{}({})", keyword, format_path(path)),
        }
    }

    fn dynamic_operand(&self, operand: &DynamicOperand) -> String {
        match operand {
            DynamicOperand::PropertyValue(pv) => self.property_value(pv),
            DynamicOperand::Length(pv) => format!("LENGTH({})", self.property_value(pv)),
            DynamicOperand::NodeName { selector } => {
                format!("NAME({})", selector.as_deref().unwrap_or(""))
            }
            DynamicOperand::NodeLocalName { selector } => {
                format!("LOCALNAME({})", selector.as_deref().unwrap_or(""))
            }
            DynamicOperand::FullTextSearchScore { selector } => {
                format!("SCORE({})", selector.as_deref().unwrap_or(""))
            }
            DynamicOperand::LowerCase(inner) => {
                format!("LOWER({})", self.dynamic_operand(inner))
            }
            DynamicOperand::UpperCase(inner) => {
                format!("UPPER({})", self.dynamic_operand(inner))
            }
        }
    }

    fn static_operand(&self, operand: &StaticOperand) -> String {
        match operand {
            StaticOperand::BindVariable(name) => format!("${}", name),
            StaticOperand::Literal(value) => self.literal(value),
        }
    }

    fn literal(&self, value: &Value) -> String {
        match value {
            Value::String(s) => format!("'{}'", s),
            Value::Long(n) => n.to_string(),
            // Debug formatting keeps the decimal point, so the value
            // re-parses as a double.
            Value::Double(n) => format!("{:?}", n),
            Value::Boolean(b) => b.to_string(),
            Value::Decimal(d) => format!("CAST('{}' AS DECIMAL)", d),
            Value::Date(s) => format!("CAST('{}' AS DATE)", s),
        }
    }

    fn ordering(&self, ordering: &Ordering) -> String {
        let direction = match ordering.order {
            Order::Ascending => "ASC",
            Order::Descending => "DESC",
        };
        format!("{} {}", self.dynamic_operand(&ordering.operand), direction)
    }

    fn columns(&self, columns: &[Column]) -> Result<String, GenerateError> {
        if columns.is_empty() {
            return Ok("*".to_string());
        }
        let mut rendered = Vec::with_capacity(columns.len());
        for column in columns {
            rendered.push(self.column(column)?);
        }
        Ok(rendered.join(", "))
    }

    fn column(&self, column: &Column) -> Result<String, GenerateError> {
        let base = match (&column.selector, &column.property) {
            (Some(selector), None) => format!("{}.*", bracket_if_namespaced(selector)),
            (selector, Some(property)) => self.property(selector, property),
            (None, None) => {
                return Err(GenerateError {
                    message: "column has neither a selector nor a property".to_string(),
                })
            }
        };
        Ok(match &column.column_name {
            Some(name) => format!("{} AS {}", base, name),
            None => base,
        })
    }

    fn property_value(&self, pv: &PropertyValue) -> String {
        self.property(&pv.selector, &pv.property)
    }

    /// `sel.prop` with either component bracketed iff it contains the
    /// namespace delimiter; a bare property when the selector is unset.
    fn property(&self, selector: &Option<String>, property: &str) -> String {
        match selector {
            Some(selector) => self.qualified(selector, property),
            None => bracket_if_namespaced(property),
        }
    }

    fn qualified(&self, selector: &str, property: &str) -> String {
        format!(
            "{}.{}",
            bracket_if_namespaced(selector),
            bracket_if_namespaced(property)
        )
    }
}

impl Default for Sql2Generator {
    fn default() -> Self {
        Sql2Generator::new()
    }
}

/// Generate canonical JCR-SQL2 text for a query.
///
/// Succeeds for every well-formed QOM tree.
///
/// # Examples
///
/// ```
/// use jql2::{generate, parse};
///
/// let query = parse("select * from [nt:base] where x = 1").unwrap();
/// assert_eq!(generate(&query).unwrap(), "SELECT * FROM [nt:base] WHERE x=1");
/// ```
pub fn generate(query: &Query) -> Result<String, GenerateError> {
    Sql2Generator::new().generate(query)
}

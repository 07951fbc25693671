/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    /// Equal (`=`)
    EqualTo,
    /// Not equal (`<>`)
    NotEqualTo,
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessThanOrEqualTo,
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterThanOrEqualTo,
    /// Pattern match (`LIKE`)
    Like,
}

impl Operator {
    /// Map an operator token to its constant. Case-insensitive for
    /// the keyword operator `LIKE`.
    pub fn from_token(token: &str) -> Option<Operator> {
        match token {
            "=" => Some(Operator::EqualTo),
            "<>" => Some(Operator::NotEqualTo),
            "<" => Some(Operator::LessThan),
            "<=" => Some(Operator::LessThanOrEqualTo),
            ">" => Some(Operator::GreaterThan),
            ">=" => Some(Operator::GreaterThanOrEqualTo),
            _ if token.eq_ignore_ascii_case("LIKE") => Some(Operator::Like),
            _ => None,
        }
    }

    /// The textual form emitted by the generator.
    pub fn as_sql2(&self) -> &'static str {
        match self {
            Operator::EqualTo => "=",
            Operator::NotEqualTo => "<>",
            Operator::LessThan => "<",
            Operator::LessThanOrEqualTo => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqualTo => ">=",
            Operator::Like => "LIKE",
        }
    }
}

use std::str::FromStr;

use rust_decimal::Decimal;

/// A literal value carried by a static operand.
///
/// JCR-SQL2 literals are either untyped tokens (`42`, `'text'`, `true`)
/// or explicitly typed through `CAST('…' AS TYPE)`. This type keeps the
/// distinction so that a query regenerates in the same form it was
/// written in.
///
/// # Examples
///
/// ```
/// use jql2::Value;
///
/// assert_eq!(Value::infer("42"), Value::Long(42));
/// assert_eq!(Value::infer("2.5"), Value::Double(2.5));
/// assert_eq!(Value::infer("TRUE"), Value::Boolean(true));
/// assert_eq!(Value::infer("foo"), Value::String("foo".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 string, the default literal type
    String(String),

    /// 64-bit integer (preserved separately from doubles)
    Long(i64),

    /// Double-precision float
    Double(f64),

    /// Exact decimal, only produced by `CAST(… AS DECIMAL)`
    Decimal(Decimal),

    /// Boolean (`true`/`false`)
    Boolean(bool),

    /// ISO-8601 date text, only produced by `CAST(… AS DATE)`.
    /// The value is kept verbatim; the core does not interpret it.
    Date(String),
}

impl Value {
    /// Infer the type of an untyped literal token.
    ///
    /// Pure integers become [`Value::Long`], numbers with a fraction
    /// part become [`Value::Double`], `TRUE`/`FALSE` (any case) become
    /// [`Value::Boolean`], everything else stays a string.
    pub fn infer(token: &str) -> Value {
        if let Ok(n) = token.parse::<i64>() {
            return Value::Long(n);
        }
        if token.contains('.') {
            if let Ok(n) = token.parse::<f64>() {
                return Value::Double(n);
            }
        }
        if token.eq_ignore_ascii_case("true") {
            return Value::Boolean(true);
        }
        if token.eq_ignore_ascii_case("false") {
            return Value::Boolean(false);
        }
        Value::String(token.to_string())
    }

    /// Convert a `CAST('value' AS type)` payload.
    ///
    /// Returns `None` when the type name is unknown or the value does
    /// not parse as an instance of the named type.
    pub fn cast(value: &str, type_name: &str) -> Option<Value> {
        match type_name.to_ascii_uppercase().as_str() {
            "STRING" => Some(Value::String(value.to_string())),
            "LONG" => value.parse::<i64>().ok().map(Value::Long),
            "DOUBLE" => value.parse::<f64>().ok().map(Value::Double),
            "DECIMAL" => Decimal::from_str(value).ok().map(Value::Decimal),
            "BOOLEAN" => match value.to_ascii_lowercase().as_str() {
                "true" => Some(Value::Boolean(true)),
                "false" => Some(Value::Boolean(false)),
                _ => None,
            },
            "DATE" => Some(Value::Date(value.to_string())),
            _ => None,
        }
    }

    /// The JCR type name used when the value requires a CAST form.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "STRING",
            Value::Long(_) => "LONG",
            Value::Double(_) => "DOUBLE",
            Value::Decimal(_) => "DECIMAL",
            Value::Boolean(_) => "BOOLEAN",
            Value::Date(_) => "DATE",
        }
    }
}

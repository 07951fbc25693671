use crate::{
    factory::QomFactory,
    qom::{
        Column, Constraint, DynamicOperand, JoinCondition, JoinType, Operator, Ordering,
        PropertyValue, Query, Source, StaticOperand,
    },
    quoting::{strip_brackets, strip_path},
    scanner::{Scanner, SyntaxError},
    value::Value,
};

/// Errors that can occur while parsing a JCR-SQL2 query
#[derive(Debug, Clone)]
pub enum ParseError {
    /// A token did not match what the grammar expects
    Syntax(SyntaxError),
    /// The input parsed but does not form a valid query
    InvalidQuery { reason: String, query: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Syntax(e) => write!(f, "{}", e),
            ParseError::InvalidQuery { reason, query } => {
                write!(f, "Invalid query, {}: {}", reason, query)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<SyntaxError> for ParseError {
    fn from(e: SyntaxError) -> Self {
        ParseError::Syntax(e)
    }
}

/// Recursive-descent parser for JCR-SQL2.
///
/// A parser binds to one source string and one factory and is consumed
/// by [`parse`](Sql2Parser::parse); tokens are read strictly left to
/// right and never rewound. At most three tokens of lookahead are used.
///
/// # Examples
///
/// ```
/// use jql2::{QomFactory, Sql2Parser};
///
/// let factory = QomFactory;
/// let query = Sql2Parser::new("SELECT * FROM [nt:base]", &factory)
///     .parse()
///     .unwrap();
/// assert!(query.constraint.is_none());
/// ```
pub struct Sql2Parser<'a> {
    scanner: Scanner,
    factory: &'a QomFactory,
}

impl<'a> Sql2Parser<'a> {
    pub fn new(sql2: &str, factory: &'a QomFactory) -> Self {
        Sql2Parser {
            scanner: Scanner::new(sql2),
            factory,
        }
    }

    /// Parse the bound source string into a [`Query`].
    ///
    /// The four clauses may appear in any order, each at most once.
    /// Parsing stops at the first unrecognized top-level keyword; the
    /// accumulated state must contain a source or the query is invalid.
    pub fn parse(mut self) -> Result<Query, ParseError> {
        let mut source = None;
        let mut constraint = None;
        let mut orderings = Vec::new();
        let mut columns = Vec::new();
        let mut seen_select = false;
        let mut seen_order = false;

        loop {
            let token = self.scanner.lookup(0);
            if token.is_empty() {
                break;
            }
            match token.to_ascii_uppercase().as_str() {
                "SELECT" => {
                    if seen_select {
                        return Err(self.syntax("at most one SELECT clause", token));
                    }
                    seen_select = true;
                    self.scanner.fetch();
                    columns = self.parse_columns()?;
                }
                "FROM" => {
                    if source.is_some() {
                        return Err(self.syntax("at most one FROM clause", token));
                    }
                    self.scanner.fetch();
                    source = Some(self.parse_source()?);
                }
                "WHERE" => {
                    if constraint.is_some() {
                        return Err(self.syntax("at most one WHERE clause", token));
                    }
                    self.scanner.fetch();
                    constraint = Some(self.parse_constraint()?);
                }
                "ORDER" => {
                    if seen_order {
                        return Err(self.syntax("at most one ORDER BY clause", token));
                    }
                    seen_order = true;
                    self.scanner.fetch();
                    self.scanner.expect("BY")?;
                    orderings = self.parse_orderings()?;
                }
                _ => break,
            }
        }

        let source = source.ok_or_else(|| ParseError::InvalidQuery {
            reason: "the source could not be determined (no FROM clause)".to_string(),
            query: self.scanner.source().to_string(),
        })?;

        Ok(self
            .factory
            .create_query(source, constraint, orderings, columns))
    }

    // ------------------------------------------------------------------
    // Source
    // ------------------------------------------------------------------

    /// `FROM` clause: a selector, optionally joined further.
    /// Chained joins associate left.
    fn parse_source(&mut self) -> Result<Source, ParseError> {
        let mut left = self.parse_selector()?;
        while matches!(
            self.scanner.lookup(0).to_ascii_uppercase().as_str(),
            "JOIN" | "INNER" | "LEFT" | "RIGHT"
        ) {
            let join_type = self.parse_join_type()?;
            let right = self.parse_selector()?;
            let condition = self.parse_join_condition()?;
            left = self.factory.join(left, right, join_type, condition);
        }
        Ok(left)
    }

    fn parse_selector(&mut self) -> Result<Source, ParseError> {
        let node_type = self.fetch_name("a node type name")?;
        let selector_name = if Scanner::token_is(&self.scanner.lookup(0), "AS") {
            self.scanner.fetch();
            Some(self.fetch_name("a selector name")?)
        } else {
            None
        };
        Ok(self.factory.selector(node_type, selector_name))
    }

    /// Bare `JOIN` defaults to an inner join.
    fn parse_join_type(&mut self) -> Result<JoinType, ParseError> {
        let token = self.scanner.fetch();
        match token.to_ascii_uppercase().as_str() {
            "JOIN" => Ok(JoinType::Inner),
            "INNER" => {
                self.scanner.expect("JOIN")?;
                Ok(JoinType::Inner)
            }
            "LEFT" => {
                self.scanner.expect_all(&["OUTER", "JOIN"])?;
                Ok(JoinType::LeftOuter)
            }
            "RIGHT" => {
                self.scanner.expect_all(&["OUTER", "JOIN"])?;
                Ok(JoinType::RightOuter)
            }
            _ => Err(self.syntax("JOIN, INNER, LEFT or RIGHT", token)),
        }
    }

    fn parse_join_condition(&mut self) -> Result<JoinCondition, ParseError> {
        self.scanner.expect("ON")?;
        let token = self.scanner.lookup(0);
        if Scanner::token_is(&token, "ISSAMENODE") {
            self.parse_same_node_join_condition()
        } else if Scanner::token_is(&token, "ISCHILDNODE") {
            self.parse_child_node_join_condition()
        } else if Scanner::token_is(&token, "ISDESCENDANTNODE") {
            self.parse_descendant_node_join_condition()
        } else {
            self.parse_equi_join_condition()
        }
    }

    /// `sel1.prop1 = sel2.prop2`; both sides must be selector-qualified.
    fn parse_equi_join_condition(&mut self) -> Result<JoinCondition, ParseError> {
        let (selector1, property1) = self.parse_identifier()?;
        self.scanner.expect("=")?;
        let (selector2, property2) = self.parse_identifier()?;

        let selector1 = selector1
            .ok_or_else(|| self.syntax("a selector-qualified property", property1.clone()))?;
        let selector2 = selector2
            .ok_or_else(|| self.syntax("a selector-qualified property", property2.clone()))?;

        Ok(self
            .factory
            .equi_join_condition(selector1, property1, selector2, property2))
    }

    fn parse_same_node_join_condition(&mut self) -> Result<JoinCondition, ParseError> {
        self.scanner.expect_all(&["ISSAMENODE", "("])?;
        let selector1 = self.fetch_name("a selector name")?;
        self.scanner.expect(",")?;
        let selector2 = self.fetch_name("a selector name")?;
        let path = if self.scanner.lookup(0) == "," {
            self.scanner.fetch();
            Some(self.parse_path()?)
        } else {
            None
        };
        self.scanner.expect(")")?;
        Ok(self
            .factory
            .same_node_join_condition(selector1, selector2, path))
    }

    fn parse_child_node_join_condition(&mut self) -> Result<JoinCondition, ParseError> {
        self.scanner.expect_all(&["ISCHILDNODE", "("])?;
        let child = self.fetch_name("a selector name")?;
        self.scanner.expect(",")?;
        let parent = self.fetch_name("a selector name")?;
        self.scanner.expect(")")?;
        Ok(self.factory.child_node_join_condition(child, parent))
    }

    fn parse_descendant_node_join_condition(&mut self) -> Result<JoinCondition, ParseError> {
        self.scanner.expect_all(&["ISDESCENDANTNODE", "("])?;
        let descendant = self.fetch_name("a selector name")?;
        self.scanner.expect(",")?;
        let ancestor = self.fetch_name("a selector name")?;
        self.scanner.expect(")")?;
        Ok(self
            .factory
            .descendant_node_join_condition(descendant, ancestor))
    }

    // ------------------------------------------------------------------
    // Constraint
    // ------------------------------------------------------------------

    /// Binary connectives are right-associative: `a AND b AND c`
    /// parses as `And(a, And(b, c))`.
    fn parse_constraint(&mut self) -> Result<Constraint, ParseError> {
        let left = self.parse_primary_constraint()?;
        let token = self.scanner.lookup(0);
        if Scanner::token_is(&token, "AND") {
            self.scanner.fetch();
            let right = self.parse_constraint()?;
            Ok(self.factory.and_constraint(left, right))
        } else if Scanner::token_is(&token, "OR") {
            self.scanner.fetch();
            let right = self.parse_constraint()?;
            Ok(self.factory.or_constraint(left, right))
        } else {
            Ok(left)
        }
    }

    fn parse_primary_constraint(&mut self) -> Result<Constraint, ParseError> {
        let token = self.scanner.lookup(0);
        if token.is_empty() {
            return Err(self.syntax("a constraint", token));
        }
        match token.to_ascii_uppercase().as_str() {
            "NOT" => {
                self.scanner.fetch();
                let constraint = self.parse_constraint()?;
                Ok(self.factory.not_constraint(constraint))
            }
            "(" => {
                self.scanner.fetch();
                let constraint = self.parse_constraint()?;
                self.scanner.expect(")")?;
                Ok(constraint)
            }
            // Keyword dispatch requires the argument list; without it
            // the word is an ordinary property name.
            "CONTAINS" if self.scanner.lookup(1) == "(" => self.parse_full_text_search(),
            "ISSAMENODE" if self.scanner.lookup(1) == "(" => self.parse_same_node(),
            "ISCHILDNODE" if self.scanner.lookup(1) == "(" => self.parse_child_node(),
            "ISDESCENDANTNODE" if self.scanner.lookup(1) == "(" => self.parse_descendant_node(),
            _ => {
                // Property existence has IS one token ahead, or three
                // ahead after `sel . prop`; everything else here is a
                // comparison.
                if Scanner::token_is(&self.scanner.lookup(1), "IS")
                    || (self.scanner.lookup(1) == "."
                        && Scanner::token_is(&self.scanner.lookup(3), "IS"))
                {
                    self.parse_property_existence()
                } else {
                    self.parse_comparison()
                }
            }
        }
    }

    /// `IS NOT NULL` is a bare existence check; `IS NULL` wraps it in
    /// a negation.
    fn parse_property_existence(&mut self) -> Result<Constraint, ParseError> {
        let (selector, property) = self.parse_identifier()?;
        self.scanner.expect("IS")?;
        if Scanner::token_is(&self.scanner.lookup(0), "NOT") {
            self.scanner.expect_all(&["NOT", "NULL"])?;
            Ok(self.factory.property_existence(property, selector))
        } else {
            self.scanner.expect("NULL")?;
            let existence = self.factory.property_existence(property, selector);
            Ok(self.factory.not_constraint(existence))
        }
    }

    fn parse_comparison(&mut self) -> Result<Constraint, ParseError> {
        let operand1 = self.parse_dynamic_operand()?;
        let operator = self.parse_operator()?;
        let operand2 = self.parse_static_operand()?;
        Ok(self.factory.comparison(operand1, operator, operand2))
    }

    fn parse_operator(&mut self) -> Result<Operator, ParseError> {
        let token = self.scanner.fetch();
        Operator::from_token(&token).ok_or_else(|| self.syntax("a comparison operator", token))
    }

    /// `CONTAINS(identifier, expr)`; a `*` property part means all
    /// properties and maps to a null property name.
    fn parse_full_text_search(&mut self) -> Result<Constraint, ParseError> {
        self.scanner.expect_all(&["CONTAINS", "("])?;
        let (selector, property) = self.parse_identifier()?;
        let property = if property == "*" { None } else { Some(property) };
        self.scanner.expect(",")?;
        let expression = self.parse_static_operand()?;
        self.scanner.expect(")")?;
        Ok(self.factory.full_text_search(property, expression, selector))
    }

    fn parse_same_node(&mut self) -> Result<Constraint, ParseError> {
        self.scanner.expect_all(&["ISSAMENODE", "("])?;
        let (selector, path) = self.parse_location_arguments()?;
        Ok(self.factory.same_node(path, selector))
    }

    fn parse_child_node(&mut self) -> Result<Constraint, ParseError> {
        self.scanner.expect_all(&["ISCHILDNODE", "("])?;
        let (selector, path) = self.parse_location_arguments()?;
        Ok(self.factory.child_node(path, selector))
    }

    fn parse_descendant_node(&mut self) -> Result<Constraint, ParseError> {
        self.scanner.expect_all(&["ISDESCENDANTNODE", "("])?;
        let (selector, path) = self.parse_location_arguments()?;
        Ok(self.factory.descendant_node(path, selector))
    }

    /// `([sel ,] path)` after a location keyword. A comma one token
    /// ahead means the first argument is a selector name.
    fn parse_location_arguments(&mut self) -> Result<(Option<String>, String), ParseError> {
        let selector = if self.scanner.lookup(1) == "," {
            let name = self.fetch_name("a selector name")?;
            self.scanner.expect(",")?;
            Some(name)
        } else {
            None
        };
        let path = self.parse_path()?;
        self.scanner.expect(")")?;
        Ok((selector, path))
    }

    // ------------------------------------------------------------------
    // Operands
    // ------------------------------------------------------------------

    fn parse_dynamic_operand(&mut self) -> Result<DynamicOperand, ParseError> {
        let token = self.scanner.lookup(0);
        if token.is_empty()
            || Operator::from_token(&token).is_some()
            || matches!(token.as_str(), "(" | ")" | "," | "." | "*" | "$")
        {
            return Err(self.syntax("a dynamic operand", token));
        }
        // A function keyword only counts as one when its argument
        // list follows; `score` alone is a property named score.
        let has_arguments = self.scanner.lookup(1) == "(";
        match token.to_ascii_uppercase().as_str() {
            "LENGTH" if has_arguments => {
                self.scanner.fetch();
                self.scanner.expect("(")?;
                let property_value = self.parse_property_value()?;
                self.scanner.expect(")")?;
                Ok(self.factory.length(property_value))
            }
            "NAME" if has_arguments => {
                self.scanner.fetch();
                let selector = self.parse_selector_argument()?;
                Ok(self.factory.node_name(selector))
            }
            "LOCALNAME" if has_arguments => {
                self.scanner.fetch();
                let selector = self.parse_selector_argument()?;
                Ok(self.factory.node_local_name(selector))
            }
            "SCORE" if has_arguments => {
                self.scanner.fetch();
                let selector = self.parse_selector_argument()?;
                Ok(self.factory.full_text_search_score(selector))
            }
            "LOWER" if has_arguments => {
                self.scanner.fetch();
                self.scanner.expect("(")?;
                let operand = self.parse_dynamic_operand()?;
                self.scanner.expect(")")?;
                Ok(self.factory.lower_case(operand))
            }
            "UPPER" if has_arguments => {
                self.scanner.fetch();
                self.scanner.expect("(")?;
                let operand = self.parse_dynamic_operand()?;
                self.scanner.expect(")")?;
                Ok(self.factory.upper_case(operand))
            }
            _ => {
                let property_value = self.parse_property_value()?;
                Ok(DynamicOperand::PropertyValue(property_value))
            }
        }
    }

    fn parse_property_value(&mut self) -> Result<PropertyValue, ParseError> {
        let (selector, property) = self.parse_identifier()?;
        Ok(self.factory.property_value(property, selector))
    }

    /// `([sel])` — an empty argument list denotes the default selector.
    fn parse_selector_argument(&mut self) -> Result<Option<String>, ParseError> {
        self.scanner.expect("(")?;
        if self.scanner.lookup(0) == ")" {
            self.scanner.fetch();
            Ok(None)
        } else {
            let name = self.fetch_name("a selector name")?;
            self.scanner.expect(")")?;
            Ok(Some(name))
        }
    }

    fn parse_static_operand(&mut self) -> Result<StaticOperand, ParseError> {
        let token = self.scanner.lookup(0);
        if token == "$" {
            self.scanner.fetch();
            let name = self.scanner.fetch();
            if name.is_empty() || !is_word(&name) {
                return Err(self.syntax("a bind variable name", name));
            }
            Ok(self.factory.bind_variable(name))
        } else if Scanner::token_is(&token, "CAST") && self.scanner.lookup(1) == "(" {
            self.parse_cast_literal()
        } else {
            let value = self.parse_literal()?;
            Ok(self.factory.literal(value))
        }
    }

    /// `CAST('value' AS TYPE)` with TYPE one of the JCR property types.
    fn parse_cast_literal(&mut self) -> Result<StaticOperand, ParseError> {
        self.scanner.expect_all(&["CAST", "("])?;
        let token = self.scanner.fetch();
        if token.is_empty() {
            return Err(self.syntax("a literal", token));
        }
        let text = if token.starts_with('\'') || token.starts_with('"') {
            self.reassemble_quoted(token)?
        } else {
            token
        };
        self.scanner.expect("AS")?;
        let type_name = self.scanner.fetch();
        let value = Value::cast(&text, &type_name).ok_or_else(|| {
            self.syntax(
                format!("a literal castable to {}", type_name.to_ascii_uppercase()),
                text,
            )
        })?;
        self.scanner.expect(")")?;
        Ok(self.factory.literal(value))
    }

    /// Quoted tokens yield string values; bare tokens infer their type.
    fn parse_literal(&mut self) -> Result<Value, ParseError> {
        let token = self.scanner.fetch();
        if token.is_empty() {
            return Err(self.syntax("a literal", token));
        }
        if token.starts_with('\'') || token.starts_with('"') {
            let text = self.reassemble_quoted(token)?;
            Ok(Value::String(text))
        } else {
            // The scanner splits a decimal number at the dot; stitch
            // the fraction part back on.
            if token.parse::<i64>().is_ok()
                && self.scanner.lookup(0) == "."
                && is_digits(&self.scanner.lookup(1))
            {
                self.scanner.fetch();
                let fraction = self.scanner.fetch();
                return Ok(Value::infer(&format!("{}.{}", token, fraction)));
            }
            Ok(Value::infer(&token))
        }
    }

    /// Concatenate tokens until the accumulator closes with the opening
    /// quote, then strip the outer quotes. The scanner lexes quoted
    /// strings whole, so this only loops on an unterminated quote,
    /// which it reports.
    fn reassemble_quoted(&mut self, first: String) -> Result<String, ParseError> {
        let quote = first.chars().next().unwrap_or('\'');
        let mut text = first;
        while !(text.len() >= 2 && text.ends_with(quote)) {
            let next = self.scanner.fetch();
            if next.is_empty() {
                return Err(self.syntax("a closing quote", text));
            }
            text.push_str(&next);
        }
        Ok(text[1..text.len() - 1].to_string())
    }

    /// Paths are parsed like literals; bracket quoting is stripped to
    /// the canonical path value.
    fn parse_path(&mut self) -> Result<String, ParseError> {
        let token = self.scanner.fetch();
        if token.is_empty() {
            return Err(self.syntax("a path", token));
        }
        if token.starts_with('\'') || token.starts_with('"') {
            self.reassemble_quoted(token)
        } else {
            Ok(strip_path(&token).to_string())
        }
    }

    // ------------------------------------------------------------------
    // Orderings and columns
    // ------------------------------------------------------------------

    fn parse_orderings(&mut self) -> Result<Vec<Ordering>, ParseError> {
        let mut orderings = vec![self.parse_ordering()?];
        while self.scanner.lookup(0) == "," {
            self.scanner.fetch();
            orderings.push(self.parse_ordering()?);
        }
        Ok(orderings)
    }

    /// Direction defaults to ascending; anything other than ASC/DESC
    /// is left in place to terminate the clause.
    fn parse_ordering(&mut self) -> Result<Ordering, ParseError> {
        let operand = self.parse_dynamic_operand()?;
        let token = self.scanner.lookup(0);
        if Scanner::token_is(&token, "DESC") {
            self.scanner.fetch();
            Ok(self.factory.descending(operand))
        } else {
            if Scanner::token_is(&token, "ASC") {
                self.scanner.fetch();
            }
            Ok(self.factory.ascending(operand))
        }
    }

    /// `*` yields an empty column list, which stands for all columns.
    fn parse_columns(&mut self) -> Result<Vec<Column>, ParseError> {
        if self.scanner.lookup(0) == "*" {
            self.scanner.fetch();
            return Ok(Vec::new());
        }
        let mut columns = vec![self.parse_column()?];
        while self.scanner.lookup(0) == "," {
            self.scanner.fetch();
            columns.push(self.parse_column()?);
        }
        Ok(columns)
    }

    fn parse_column(&mut self) -> Result<Column, ParseError> {
        let (selector, property) = self.parse_identifier()?;
        let (selector, property) = if property == "*" {
            // `sel.*` selects all columns of one selector; a bare `*`
            // is only valid as the whole column list.
            if selector.is_none() {
                return Err(self.syntax("a selector-qualified wildcard", "*"));
            }
            (selector, None)
        } else {
            (selector, Some(property))
        };
        let column_name = if Scanner::token_is(&self.scanner.lookup(0), "AS") {
            self.scanner.fetch();
            Some(self.fetch_name("a column name")?)
        } else {
            None
        };
        Ok(self.factory.column(property, column_name, selector))
    }

    // ------------------------------------------------------------------
    // Shared identifier handling
    // ------------------------------------------------------------------

    /// One bracket-stripped token, or `sel.prop` when a dot follows.
    /// Returns `(selector, property)` with the selector unset for the
    /// single-token form.
    fn parse_identifier(&mut self) -> Result<(Option<String>, String), ParseError> {
        let first = self.fetch_name("an identifier")?;
        if self.scanner.lookup(0) == "." {
            self.scanner.fetch();
            let property = self.fetch_name("a property name")?;
            Ok((Some(first), property))
        } else {
            Ok((None, first))
        }
    }

    /// Fetch one token and strip bracket quoting.
    fn fetch_name(&mut self, expected: &str) -> Result<String, ParseError> {
        let token = self.scanner.fetch();
        if token.is_empty() {
            return Err(self.syntax(expected, token));
        }
        Ok(strip_brackets(&token).to_string())
    }

    fn syntax(&self, expected: impl Into<String>, found: impl Into<String>) -> ParseError {
        ParseError::Syntax(SyntaxError::new(expected, found, self.scanner.source()))
    }
}

fn is_word(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | ':' | '-'))
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// SELECT-clause column.
///
/// A `None` property with a selector present denotes `sel.*` (all
/// columns of that selector). A column never has both fields absent.
///
/// # Examples
/// ```text
/// a.[jcr:title] AS t
/// b.*
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub selector: Option<String>,
    pub property: Option<String>,
    pub column_name: Option<String>,
}

use crate::qom::{
    Column, Constraint, DynamicOperand, Join, JoinCondition, JoinType, Operator, Order, Ordering,
    PropertyValue, Query, Selector, Source, StaticOperand,
};
use crate::value::Value;

/// Constructs QOM nodes on behalf of the parser.
///
/// The parser never builds nodes directly; it goes through this
/// factory, which keeps node construction in one place and gives
/// embedders a single seam to intercept. The factory is stateless and
/// freely shareable across parses.
#[derive(Debug, Clone, Copy, Default)]
pub struct QomFactory;

impl QomFactory {
    pub fn selector(&self, node_type: String, selector_name: Option<String>) -> Source {
        Source::Selector(Selector {
            node_type,
            selector_name,
        })
    }

    pub fn join(
        &self,
        left: Source,
        right: Source,
        join_type: JoinType,
        condition: JoinCondition,
    ) -> Source {
        Source::Join(Join {
            left: Box::new(left),
            right: Box::new(right),
            join_type,
            condition,
        })
    }

    pub fn equi_join_condition(
        &self,
        selector1: String,
        property1: String,
        selector2: String,
        property2: String,
    ) -> JoinCondition {
        JoinCondition::EquiJoin {
            selector1,
            property1,
            selector2,
            property2,
        }
    }

    pub fn same_node_join_condition(
        &self,
        selector1: String,
        selector2: String,
        path: Option<String>,
    ) -> JoinCondition {
        JoinCondition::SameNode {
            selector1,
            selector2,
            path,
        }
    }

    pub fn child_node_join_condition(
        &self,
        child_selector: String,
        parent_selector: String,
    ) -> JoinCondition {
        JoinCondition::ChildNode {
            child_selector,
            parent_selector,
        }
    }

    pub fn descendant_node_join_condition(
        &self,
        descendant_selector: String,
        ancestor_selector: String,
    ) -> JoinCondition {
        JoinCondition::DescendantNode {
            descendant_selector,
            ancestor_selector,
        }
    }

    pub fn property_value(&self, property: String, selector: Option<String>) -> PropertyValue {
        PropertyValue { selector, property }
    }

    pub fn literal(&self, value: Value) -> StaticOperand {
        StaticOperand::Literal(value)
    }

    pub fn bind_variable(&self, name: String) -> StaticOperand {
        StaticOperand::BindVariable(name)
    }

    pub fn length(&self, property_value: PropertyValue) -> DynamicOperand {
        DynamicOperand::Length(property_value)
    }

    pub fn node_name(&self, selector: Option<String>) -> DynamicOperand {
        DynamicOperand::NodeName { selector }
    }

    pub fn node_local_name(&self, selector: Option<String>) -> DynamicOperand {
        DynamicOperand::NodeLocalName { selector }
    }

    pub fn full_text_search_score(&self, selector: Option<String>) -> DynamicOperand {
        DynamicOperand::FullTextSearchScore { selector }
    }

    pub fn lower_case(&self, operand: DynamicOperand) -> DynamicOperand {
        DynamicOperand::LowerCase(Box::new(operand))
    }

    pub fn upper_case(&self, operand: DynamicOperand) -> DynamicOperand {
        DynamicOperand::UpperCase(Box::new(operand))
    }

    pub fn comparison(
        &self,
        operand1: DynamicOperand,
        operator: Operator,
        operand2: StaticOperand,
    ) -> Constraint {
        Constraint::Comparison {
            operand1,
            operator,
            operand2,
        }
    }

    pub fn property_existence(&self, property: String, selector: Option<String>) -> Constraint {
        Constraint::PropertyExistence { selector, property }
    }

    pub fn full_text_search(
        &self,
        property: Option<String>,
        expression: StaticOperand,
        selector: Option<String>,
    ) -> Constraint {
        Constraint::FullTextSearch {
            selector,
            property,
            expression,
        }
    }

    pub fn same_node(&self, path: String, selector: Option<String>) -> Constraint {
        Constraint::SameNode { selector, path }
    }

    pub fn child_node(&self, path: String, selector: Option<String>) -> Constraint {
        Constraint::ChildNode { selector, path }
    }

    pub fn descendant_node(&self, path: String, selector: Option<String>) -> Constraint {
        Constraint::DescendantNode { selector, path }
    }

    pub fn and_constraint(&self, constraint1: Constraint, constraint2: Constraint) -> Constraint {
        Constraint::And(Box::new(constraint1), Box::new(constraint2))
    }

    pub fn or_constraint(&self, constraint1: Constraint, constraint2: Constraint) -> Constraint {
        Constraint::Or(Box::new(constraint1), Box::new(constraint2))
    }

    pub fn not_constraint(&self, constraint: Constraint) -> Constraint {
        Constraint::Not(Box::new(constraint))
    }

    pub fn ascending(&self, operand: DynamicOperand) -> Ordering {
        Ordering {
            operand,
            order: Order::Ascending,
        }
    }

    pub fn descending(&self, operand: DynamicOperand) -> Ordering {
        Ordering {
            operand,
            order: Order::Descending,
        }
    }

    pub fn column(
        &self,
        property: Option<String>,
        column_name: Option<String>,
        selector: Option<String>,
    ) -> Column {
        Column {
            selector,
            property,
            column_name,
        }
    }

    pub fn create_query(
        &self,
        source: Source,
        constraint: Option<Constraint>,
        orderings: Vec<Ordering>,
        columns: Vec<Column>,
    ) -> Query {
        Query {
            source,
            constraint,
            orderings,
            columns,
        }
    }
}

//! QOM -> JSON conversion utilities

use serde_json::{json, Value as Json};

use crate::qom::{
    Column, Constraint, DynamicOperand, JoinCondition, JoinType, Order, Ordering, Query, Source,
    StaticOperand,
};
use crate::value::Value;

/// Convert a parsed query to a JSON view of its QOM tree.
pub fn query_to_json(query: &Query) -> Json {
    json!({
        "source": source_to_json(&query.source),
        "constraint": query.constraint.as_ref().map(constraint_to_json),
        "orderings": query.orderings.iter().map(ordering_to_json).collect::<Vec<_>>(),
        "columns": query.columns.iter().map(column_to_json).collect::<Vec<_>>(),
    })
}

fn source_to_json(source: &Source) -> Json {
    match source {
        Source::Selector(selector) => json!({
            "type": "selector",
            "nodeType": selector.node_type,
            "selectorName": selector.selector_name,
        }),
        Source::Join(join) => json!({
            "type": "join",
            "joinType": match join.join_type {
                JoinType::Inner => "inner",
                JoinType::LeftOuter => "leftOuter",
                JoinType::RightOuter => "rightOuter",
            },
            "left": source_to_json(&join.left),
            "right": source_to_json(&join.right),
            "condition": join_condition_to_json(&join.condition),
        }),
    }
}

fn join_condition_to_json(condition: &JoinCondition) -> Json {
    match condition {
        JoinCondition::EquiJoin {
            selector1,
            property1,
            selector2,
            property2,
        } => json!({
            "type": "equiJoin",
            "selector1": selector1,
            "property1": property1,
            "selector2": selector2,
            "property2": property2,
        }),
        JoinCondition::SameNode {
            selector1,
            selector2,
            path,
        } => json!({
            "type": "sameNode",
            "selector1": selector1,
            "selector2": selector2,
            "path": path,
        }),
        JoinCondition::ChildNode {
            child_selector,
            parent_selector,
        } => json!({
            "type": "childNode",
            "childSelector": child_selector,
            "parentSelector": parent_selector,
        }),
        JoinCondition::DescendantNode {
            descendant_selector,
            ancestor_selector,
        } => json!({
            "type": "descendantNode",
            "descendantSelector": descendant_selector,
            "ancestorSelector": ancestor_selector,
        }),
    }
}

fn constraint_to_json(constraint: &Constraint) -> Json {
    match constraint {
        Constraint::And(left, right) => json!({
            "type": "and",
            "left": constraint_to_json(left),
            "right": constraint_to_json(right),
        }),
        Constraint::Or(left, right) => json!({
            "type": "or",
            "left": constraint_to_json(left),
            "right": constraint_to_json(right),
        }),
        Constraint::Not(inner) => json!({
            "type": "not",
            "constraint": constraint_to_json(inner),
        }),
        Constraint::Comparison {
            operand1,
            operator,
            operand2,
        } => json!({
            "type": "comparison",
            "operand1": dynamic_operand_to_json(operand1),
            "operator": operator.as_sql2(),
            "operand2": static_operand_to_json(operand2),
        }),
        Constraint::PropertyExistence { selector, property } => json!({
            "type": "propertyExistence",
            "selector": selector,
            "property": property,
        }),
        Constraint::FullTextSearch {
            selector,
            property,
            expression,
        } => json!({
            "type": "fullTextSearch",
            "selector": selector,
            "property": property,
            "expression": static_operand_to_json(expression),
        }),
        Constraint::SameNode { selector, path } => json!({
            "type": "sameNode",
            "selector": selector,
            "path": path,
        }),
        Constraint::ChildNode { selector, path } => json!({
            "type": "childNode",
            "selector": selector,
            "path": path,
        }),
        Constraint::DescendantNode { selector, path } => json!({
            "type": "descendantNode",
            "selector": selector,
            "path": path,
        }),
    }
}

fn dynamic_operand_to_json(operand: &DynamicOperand) -> Json {
    match operand {
        DynamicOperand::PropertyValue(pv) => json!({
            "type": "propertyValue",
            "selector": pv.selector,
            "property": pv.property,
        }),
        DynamicOperand::Length(pv) => json!({
            "type": "length",
            "selector": pv.selector,
            "property": pv.property,
        }),
        DynamicOperand::NodeName { selector } => json!({
            "type": "nodeName",
            "selector": selector,
        }),
        DynamicOperand::NodeLocalName { selector } => json!({
            "type": "nodeLocalName",
            "selector": selector,
        }),
        DynamicOperand::FullTextSearchScore { selector } => json!({
            "type": "score",
            "selector": selector,
        }),
        DynamicOperand::LowerCase(inner) => json!({
            "type": "lowerCase",
            "operand": dynamic_operand_to_json(inner),
        }),
        DynamicOperand::UpperCase(inner) => json!({
            "type": "upperCase",
            "operand": dynamic_operand_to_json(inner),
        }),
    }
}

fn static_operand_to_json(operand: &StaticOperand) -> Json {
    match operand {
        StaticOperand::BindVariable(name) => json!({
            "type": "bindVariable",
            "name": name,
        }),
        StaticOperand::Literal(value) => {
            let rendered = match value {
                Value::String(s) => json!(s),
                Value::Long(n) => json!(n),
                Value::Double(n) => json!(n),
                Value::Boolean(b) => json!(b),
                Value::Decimal(d) => json!(d.to_string()),
                Value::Date(s) => json!(s),
            };
            json!({
                "type": "literal",
                "valueType": value.type_name(),
                "value": rendered,
            })
        }
    }
}

fn ordering_to_json(ordering: &Ordering) -> Json {
    json!({
        "operand": dynamic_operand_to_json(&ordering.operand),
        "order": match ordering.order {
            Order::Ascending => "ascending",
            Order::Descending => "descending",
        },
    })
}

fn column_to_json(column: &Column) -> Json {
    json!({
        "selector": column.selector,
        "property": column.property,
        "columnName": column.column_name,
    })
}

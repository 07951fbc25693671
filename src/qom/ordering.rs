use crate::qom::DynamicOperand;

/// ORDER BY entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Ordering {
    pub operand: DynamicOperand,
    pub order: Order,
}

/// Sort direction. Defaults to ascending when the query omits it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Order {
    Ascending,
    Descending,
}

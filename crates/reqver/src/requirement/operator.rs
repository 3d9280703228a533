//! Operator and combinator types for requirements

use std::fmt;

/// Comparison operators for requirement clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (==)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Pessimistic (~>)
    Pessimistic,
}

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::Pessimistic => "~>",
        }
    }

    /// Whether the operand of this operator may omit its patch segment
    pub fn accepts_partial_operand(&self) -> bool {
        matches!(self, Operator::Pessimistic)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean connective between two clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
        }
    }

    /// Fold `next` into the running result
    pub(crate) fn apply(&self, acc: bool, next: bool) -> bool {
        match self {
            Combinator::And => acc && next,
            Combinator::Or => acc || next,
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::cmp::Ordering;
use std::fmt;

use super::item::Item;

/// Comparison operators supported in rule conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    /// Apply the operator to two integers.
    #[must_use]
    pub fn apply(self, lhs: i64, rhs: i64) -> bool {
        let ord = lhs.cmp(&rhs);
        match self {
            CompareOp::Eq => ord == Ordering::Equal,
            CompareOp::Neq => ord != Ordering::Equal,
            CompareOp::Gt => ord == Ordering::Greater,
            CompareOp::Gte => ord != Ordering::Less,
            CompareOp::Lt => ord == Ordering::Less,
            CompareOp::Lte => ord != Ordering::Greater,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "=="),
            CompareOp::Neq => write!(f, "!="),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::Gte => write!(f, ">="),
            CompareOp::Lt => write!(f, "<"),
            CompareOp::Lte => write!(f, "<="),
        }
    }
}

/// The item fields a condition can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Freshness,
    Value,
}

impl Field {
    /// Read this field from an item.
    #[must_use]
    pub fn read(self, item: &Item) -> i64 {
        match self {
            Field::Freshness => item.freshness,
            Field::Value => item.value,
        }
    }

    #[must_use]
    pub fn eq(self, operand: i64) -> Condition {
        self.compare(CompareOp::Eq, operand)
    }

    #[must_use]
    pub fn neq(self, operand: i64) -> Condition {
        self.compare(CompareOp::Neq, operand)
    }

    #[must_use]
    pub fn gt(self, operand: i64) -> Condition {
        self.compare(CompareOp::Gt, operand)
    }

    #[must_use]
    pub fn gte(self, operand: i64) -> Condition {
        self.compare(CompareOp::Gte, operand)
    }

    #[must_use]
    pub fn lt(self, operand: i64) -> Condition {
        self.compare(CompareOp::Lt, operand)
    }

    #[must_use]
    pub fn lte(self, operand: i64) -> Condition {
        self.compare(CompareOp::Lte, operand)
    }

    fn compare(self, op: CompareOp, operand: i64) -> Condition {
        Condition::Compare {
            field: self,
            op,
            operand,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Freshness => write!(f, "freshness"),
            Field::Value => write!(f, "value"),
        }
    }
}

/// A compiled rule condition.
///
/// Conditions come from strings of the form `"<field> <op> <integer>"` or the
/// literal `"true"`. Anything else compiles to [`Condition::Malformed`], which
/// never matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    Always,
    Compare {
        field: Field,
        op: CompareOp,
        operand: i64,
    },
    Malformed(String),
}

impl Condition {
    /// Parse a condition string, falling back to [`Condition::Malformed`]
    /// when it does not fit the grammar.
    ///
    /// Use [`parse_condition`](crate::parse::parse_condition) to get the
    /// parse error instead.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        crate::parse::parse_condition(input)
            .unwrap_or_else(|_| Condition::Malformed(input.to_owned()))
    }

    /// Evaluate against an item. Malformed conditions are always `false`.
    #[must_use]
    pub fn evaluate(&self, item: &Item) -> bool {
        match self {
            Condition::Always => true,
            Condition::Compare { field, op, operand } => op.apply(field.read(item), *operand),
            Condition::Malformed(_) => false,
        }
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Condition::Malformed(_))
    }
}

impl From<&str> for Condition {
    fn from(input: &str) -> Self {
        Condition::parse(input)
    }
}

impl From<String> for Condition {
    fn from(input: String) -> Self {
        Condition::parse(&input)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => write!(f, "true"),
            Condition::Compare { field, op, operand } => write!(f, "{field} {op} {operand}"),
            Condition::Malformed(raw) => write!(f, "{raw}"),
        }
    }
}

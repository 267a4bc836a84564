use std::fmt::{self, Display};

/// 比较运算符
#[derive(Debug, PartialEq, Eq)]
pub enum ComparisonOperator {
    GreaterOrEqual,
}
impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator_name = match self {
            ComparisonOperator::GreaterOrEqual => "≥",
        };
        write!(f, "{operator_name}")
    }
}

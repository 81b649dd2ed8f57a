//! The comparator core: a single pure dispatch over the six operators.

use std::cmp::Ordering;

use tracing::instrument;

use crate::models::{Operator, Version};

/// A fully validated comparison, ready to evaluate. Built once per run
/// by the CLI pipeline and consumed once.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub left: Version,
    pub right: Version,
    pub op: Operator,
}

impl Comparison {
    pub fn evaluate(&self) -> bool {
        compare(&self.left, &self.right, self.op)
    }
}

/// Both operands are already well-formed, so this is total: the match is
/// exhaustive and extending `Operator` without a corresponding arm is a
/// compile error rather than a silent false.
///
/// Precedence ordering per SemVer: build metadata does not participate,
/// so 1.0.0+a and 1.0.0+b compare equal.
#[instrument(ret)]
pub fn compare(left: &Version, right: &Version, op: Operator) -> bool {
    let ordering = left.cmp_precedence(right);

    match op {
        Operator::Equal => ordering == Ordering::Equal,
        Operator::NotEqual => ordering != Ordering::Equal,
        Operator::GreaterThan => ordering == Ordering::Greater,
        Operator::LessThan => ordering == Ordering::Less,
        Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        Operator::LessThanOrEqual => ordering != Ordering::Greater,
    }
}

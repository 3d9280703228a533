//! Clause evaluation against a single version

use std::cmp::Ordering;

use crate::comparator::Precedence;
use crate::requirement::{Clause, Operator, PessimisticBounds};
use crate::version::{PreId, Version};

/// Options for matching a version against a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// When `false`, `>`, `>=` and `~>` reject pre-release versions unless the
    /// operand itself names a pre-release.
    pub allow_pre: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions { allow_pre: true }
    }
}

impl MatchOptions {
    /// Options that exclude pre-releases from `>`, `>=` and `~>`
    pub fn exclude_pre() -> Self {
        MatchOptions { allow_pre: false }
    }
}

/// A version paired with the caller's pre-release policy, built per match
#[derive(Debug, Clone, Copy)]
pub(crate) struct Matchable<'a> {
    precedence: Precedence<'a>,
    pre: &'a [PreId],
    allow_pre: bool,
}

impl<'a> Matchable<'a> {
    pub(crate) fn new(version: &'a Version, allow_pre: bool) -> Self {
        Matchable {
            precedence: version.precedence(),
            pre: version.pre(),
            allow_pre,
        }
    }

    fn admits_pre(&self, req_pre: &[PreId]) -> bool {
        self.allow_pre || !req_pre.is_empty() || self.pre.is_empty()
    }
}

pub(crate) fn matches_clause(clause: &Clause, version: &Matchable<'_>) -> bool {
    let operand = clause.operand();
    // Only `~>` operands may lack a patch, and that arm never reads it.
    let ordering = || {
        version.precedence.cmp(&Precedence::new(
            operand.major(),
            operand.minor(),
            operand.patch().unwrap_or_default(),
            operand.pre(),
        ))
    };

    match clause.operator() {
        Operator::Equal => ordering() == Ordering::Equal,
        Operator::NotEqual => ordering() != Ordering::Equal,
        Operator::LessThan => ordering() == Ordering::Less,
        Operator::LessThanOrEqual => ordering() != Ordering::Greater,
        Operator::GreaterThan => {
            ordering() == Ordering::Greater && version.admits_pre(operand.pre())
        }
        Operator::GreaterThanOrEqual => {
            ordering() != Ordering::Less && version.admits_pre(operand.pre())
        }
        Operator::Pessimistic => {
            PessimisticBounds::new(operand).contains(version.precedence)
                && version.admits_pre(operand.pre())
        }
    }
}

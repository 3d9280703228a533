//! Range covered by a pessimistic (`~>`) clause

use crate::comparator::Precedence;
use crate::version::PreId;

use super::Operand;

// The exclusive upper bound sits below every pre-release of the next boundary.
static UPPER_PRE: [PreId; 1] = [PreId::Numeric(0)];

/// Half-open range `[lower, upper)` of a `~>` operand.
///
/// * `~> M.m`   covers `M.m.0-pre` up to `(M+1).0.0-0`
/// * `~> M.m.p` covers `M.m.p-pre` up to `M.(m+1).0-0`
///
/// `upper` is `None` when the boundary component would overflow, leaving the
/// range open ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PessimisticBounds<'a> {
    lower: Precedence<'a>,
    upper: Option<Precedence<'static>>,
}

impl<'a> PessimisticBounds<'a> {
    pub(crate) fn new(operand: &'a Operand) -> Self {
        let major = operand.major();
        let minor = operand.minor();
        match operand.patch() {
            None => PessimisticBounds {
                lower: Precedence::new(major, minor, 0, operand.pre()),
                upper: major
                    .checked_add(1)
                    .map(|next| Precedence::new(next, 0, 0, &UPPER_PRE)),
            },
            Some(patch) => PessimisticBounds {
                lower: Precedence::new(major, minor, patch, operand.pre()),
                upper: minor
                    .checked_add(1)
                    .map(|next| Precedence::new(major, next, 0, &UPPER_PRE)),
            },
        }
    }

    pub(crate) fn contains(&self, version: Precedence<'_>) -> bool {
        version >= self.lower && self.upper.map_or(true, |upper| version < upper)
    }
}

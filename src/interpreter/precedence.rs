use crate::interpreter::token::Operator;

/// Ranks operators for the infix-to-postfix conversion.
///
/// Higher ranks bind tighter. The table is read-only once built and is
/// handed to the [`Evaluator`](crate::interpreter::evaluator::core::Evaluator)
/// at construction time.
///
/// The default table ranks `/` above `*`. A division to the right of a
/// multiplication is reduced first, so `3 * 5 / 2` is `3 * (5 / 2) = 6`
/// rather than `7`. Use [`PrecedenceTable::STANDARD`] for conventional
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecedenceTable {
    additive: u8,
    multiply: u8,
    divide:   u8,
}

impl PrecedenceTable {
    /// `+ - : 0`, `* : 1`, `/ : 2`.
    pub const DEFAULT: Self = Self { additive: 0,
                                     multiply: 1,
                                     divide:   2, };
    /// `+ - : 0`, `* / : 1`.
    pub const STANDARD: Self = Self { additive: 0,
                                      multiply: 1,
                                      divide:   1, };

    /// Builds a table from explicit ranks.
    #[must_use]
    pub const fn new(additive: u8, multiply: u8, divide: u8) -> Self {
        Self { additive,
               multiply,
               divide }
    }

    /// Returns the rank of `op`.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{precedence::PrecedenceTable, token::Operator};
    ///
    /// let table = PrecedenceTable::DEFAULT;
    /// assert!(table.rank(Operator::Div) > table.rank(Operator::Mul));
    /// assert_eq!(table.rank(Operator::Add), table.rank(Operator::Sub));
    /// ```
    #[must_use]
    pub const fn rank(&self, op: Operator) -> u8 {
        match op {
            Operator::Add | Operator::Sub => self.additive,
            Operator::Mul => self.multiply,
            Operator::Div => self.divide,
        }
    }

    /// `true` if `next` ranks strictly above `current`.
    #[must_use]
    pub const fn binds_tighter(&self, next: Operator, current: Operator) -> bool {
        self.rank(next) > self.rank(current)
    }

    /// `true` if `next` ranks strictly below `current`.
    #[must_use]
    pub const fn binds_looser(&self, next: Operator, current: Operator) -> bool {
        self.rank(next) < self.rank(current)
    }
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

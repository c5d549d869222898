//! Breakeven analysis over the buying and renting cost series

use serde::{Deserialize, Serialize};
use std::fmt;

use super::series::MonthlySeries;

/// Outcome of the breakeven scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Breakeven {
    /// First month (1-indexed) where cumulative buying cost drops below
    /// cumulative renting cost
    Month(u32),

    /// Renting stays cheaper for the entire horizon; a valid outcome, not
    /// an error
    Never,
}

impl Breakeven {
    /// Breakeven month index, if one exists
    pub fn month(&self) -> Option<u32> {
        match self {
            Breakeven::Month(m) => Some(*m),
            Breakeven::Never => None,
        }
    }

    /// Breakeven expressed as whole (years, months), if one exists
    pub fn years_and_months(&self) -> Option<(u32, u32)> {
        self.month().map(|m| (m / 12, m % 12))
    }
}

impl fmt::Display for Breakeven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breakeven::Month(m) => write!(
                f,
                "Buying becomes cheaper than renting after {} years and {} months",
                m / 12,
                m % 12
            ),
            Breakeven::Never => write!(f, "Renting remains cheaper throughout the analyzed period"),
        }
    }
}

/// Scan month indices in increasing order for the first month where
/// buying's cumulative cost is strictly below renting's
///
/// Equality does not count as breakeven. Linear in the number of months.
pub fn find_breakeven(buying: &MonthlySeries, renting: &MonthlySeries) -> Breakeven {
    for (buy, rent) in buying.rows.iter().zip(renting.rows.iter()) {
        if buy.cumulative_cost - rent.cumulative_cost < 0.0 {
            return Breakeven::Month(buy.month);
        }
    }
    Breakeven::Never
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Chips amounts.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

/// A non negative chips amount.
///
/// Subtraction saturates at zero, a stack can never go negative.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Chips {
    fn from(val: u32) -> Self {
        Chips(val)
    }
}

impl From<Chips> for u32 {
    fn from(val: Chips) -> Self {
        val.0
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0 + rhs.0)
    }
}

impl ops::AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl ops::Sub for Chips {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl ops::Mul<u32> for Chips {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl ops::Div<u32> for Chips {
    type Output = Self;

    fn div(self, rhs: u32) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 1_000_000 {
            write!(
                f,
                "{},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "{},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "{}", amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_formatting() {
        assert_eq!(Chips::new(0).to_string(), "0");
        assert_eq!(Chips::new(123).to_string(), "123");
        assert_eq!(Chips::new(1_000).to_string(), "1,000");
        assert_eq!(Chips::new(12_345).to_string(), "12,345");
        assert_eq!(Chips::new(1_234_567).to_string(), "1,234,567");
    }

    #[test]
    fn chips_subtraction_saturates() {
        let mut stack = Chips::new(10);
        stack -= Chips::new(25);
        assert_eq!(stack, Chips::ZERO);
        assert_eq!(Chips::new(10) - Chips::new(25), Chips::ZERO);
    }

    #[test]
    fn chips_arithmetic() {
        assert_eq!(Chips::new(100) + Chips::new(50), Chips::new(150));
        assert_eq!(Chips::new(100) * 3, Chips::new(300));
        assert_eq!(Chips::new(301) / 2, Chips::new(150));
    }
}

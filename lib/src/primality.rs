use clap::ValueEnum;
use serde::Serialize;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Trial division by every `i` in `2..n`.
///
/// This is the baseline: O(n) per candidate, no early exit at the square root.
/// 0 and 1 are not prime.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    is_prime_reference(n)
}

/// Same scan as [`is_prime`], without the `n < 2` guard.
///
/// The divisor loop never runs for 0 and 1, so both report `true`.
pub fn is_prime_reference(n: u32) -> bool {
    let mut i = 2;
    while i < n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// Trial division stopping once `i * i > n`.
pub fn is_prime_sqrt(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    // `i <= n / i` rather than `i * i <= n`: the square overflows near u32::MAX.
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// Which divisor range the primality test scans.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    ValueEnum,
    Display,
    IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Divisors `2..n`.
    #[default]
    TrialDivision,
    /// Divisors up to `sqrt(n)`.
    #[serde(rename = "sqrt")]
    #[strum(serialize = "sqrt")]
    #[value(name = "sqrt")]
    SquareRoot,
}

/// How 0 and 1 are classified.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    ValueEnum,
    Display,
    IntoStaticStr,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Classification {
    #[default]
    Mathematical,
    /// 0 and 1 report prime, as the unguarded divisor loop does.
    Reference,
}

/// A primality test selected by strategy and classification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrimalityTest {
    pub strategy: Strategy,
    pub classification: Classification,
}

impl PrimalityTest {
    pub fn new(strategy: Strategy, classification: Classification) -> Self {
        Self {
            strategy,
            classification,
        }
    }

    #[inline]
    pub fn test(&self, n: u32) -> bool {
        if n < 2 {
            return self.classification == Classification::Reference;
        }
        match self.strategy {
            Strategy::TrialDivision => is_prime_reference(n),
            Strategy::SquareRoot => is_prime_sqrt(n),
        }
    }
}

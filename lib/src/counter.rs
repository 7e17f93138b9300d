use std::slice;

use crate::primality::PrimalityTest;

/// Primes found below a bound, in ascending order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PrimeList {
    bound: u32,
    primes: Vec<u32>,
}

impl PrimeList {
    /// The exclusive bound the list was produced for.
    pub fn bound(&self) -> u32 {
        self.bound
    }

    pub fn count(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.primes
    }

    pub fn iter(&self) -> slice::Iter<'_, u32> {
        self.primes.iter()
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.primes
    }
}

impl<'a> IntoIterator for &'a PrimeList {
    type Item = &'a u32;
    type IntoIter = slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Scans `2..bound` with a fixed primality test.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimeCounter {
    test: PrimalityTest,
}

impl PrimeCounter {
    pub fn new(test: PrimalityTest) -> Self {
        Self { test }
    }

    pub fn test(&self) -> PrimalityTest {
        self.test
    }

    /// Collects every candidate in `2..bound` the test accepts.
    ///
    /// The scan starts at 2 whatever the classification, so bounds 0, 1 and 2
    /// always give an empty list.
    #[tracing::instrument(
        skip(self),
        name = "count_primes_below",
        fields(strategy = %self.test.strategy, classification = %self.test.classification)
    )]
    pub fn count_below(&self, bound: u32) -> PrimeList {
        let mut primes = Vec::new();
        for i in 2..bound {
            if self.test.test(i) {
                primes.push(i);
            }
        }
        tracing::debug!(count = primes.len(), "scan finished");

        PrimeList { bound, primes }
    }
}

/// Primes strictly below `bound`, using the baseline O(n) trial division.
pub fn count_primes_below(bound: u32) -> PrimeList {
    PrimeCounter::default().count_below(bound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primality::{is_prime_sqrt, Classification, Strategy};
    use strum::IntoEnumIterator;

    fn counters() -> Vec<PrimeCounter> {
        let mut counters = vec![];
        for strategy in Strategy::iter() {
            for classification in Classification::iter() {
                counters.push(PrimeCounter::new(PrimalityTest::new(
                    strategy,
                    classification,
                )));
            }
        }
        counters
    }

    #[test]
    fn test_bound_ten() {
        let primes = count_primes_below(10);
        assert_eq!(primes.as_slice(), &[2, 3, 5, 7]);
        assert_eq!(primes.count(), 4);
        assert_eq!(primes.bound(), 10);
    }

    #[test]
    fn test_reference_table() {
        for (bound, expected) in [(10, 4), (100, 25), (1000, 168), (10_000, 1229)] {
            for counter in counters() {
                assert_eq!(
                    counter.count_below(bound).count(),
                    expected,
                    "bound = {bound}, test = {:?}",
                    counter.test()
                );
            }
        }
    }

    #[test]
    fn test_tiny_bounds_are_empty() {
        for counter in counters() {
            for bound in 0..=2 {
                assert!(counter.count_below(bound).is_empty());
            }
        }
        assert_eq!(count_primes_below(3).as_slice(), &[2]);
    }

    #[test]
    fn test_strictly_increasing_and_below_bound() {
        let primes = count_primes_below(2000);
        assert!(primes.as_slice().windows(2).all(|w| w[0] < w[1]));
        assert!(primes.iter().all(|&p| p < 2000));
        assert_eq!(primes.as_slice().last(), Some(&1999));
    }

    #[test]
    fn test_every_element_is_prime_and_increasing() {
        for bound in [3, 4, 30, 541, 7919, 7920] {
            for counter in counters() {
                let primes = counter.count_below(bound);
                let mut previous = None;
                for &p in &primes {
                    assert!(is_prime_sqrt(p), "{p} is not prime, test = {:?}", counter.test());
                    assert!(p < bound, "{p} >= {bound}");
                    assert!(previous < Some(p), "{previous:?} before {p}");
                    previous = Some(p);
                }
            }
        }
        // 7919 is the 1000th prime; the bound itself is excluded.
        assert_eq!(count_primes_below(7919).count(), 999);
        assert_eq!(count_primes_below(7920).as_slice().last(), Some(&7919));
    }

    #[test]
    fn test_bound_is_exclusive() {
        assert_eq!(count_primes_below(7).into_vec(), vec![2, 3, 5]);
        assert_eq!(count_primes_below(8).into_vec(), vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_idempotent() {
        for counter in counters() {
            assert_eq!(counter.count_below(500), counter.count_below(500));
        }
    }

    #[test]
    fn test_one_million() {
        let counter = PrimeCounter::new(PrimalityTest::new(
            Strategy::SquareRoot,
            Classification::Mathematical,
        ));
        assert_eq!(counter.count_below(1_000_000).count(), 78_498);
    }

    #[test]
    #[ignore = "O(n^2) baseline; takes minutes without optimizations"]
    fn test_one_million_baseline() {
        assert_eq!(count_primes_below(1_000_000).count(), 78_498);
    }
}

use std::fmt;

use serde::Serialize;

use crate::{
    counter::PrimeList,
    primality::{Classification, PrimalityTest, Strategy},
};

/// The one line reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub bound: u32,
    pub count: usize,
    pub strategy: Strategy,
    pub classification: Classification,
}

impl Summary {
    pub fn new(primes: &PrimeList, test: PrimalityTest) -> Self {
        Self {
            bound: primes.bound(),
            count: primes.count(),
            strategy: test.strategy,
            classification: test.classification,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "There are {} primes below {}", self.count, self.bound)
    }
}

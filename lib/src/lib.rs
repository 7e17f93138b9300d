//! Counting primes below a bound by trial division.
//!
//! The default path is deliberately the naive O(n) divisor scan, kept as a
//! baseline for timing and callgrind runs. [`Strategy::SquareRoot`] is the
//! separate variant to compare it against.

mod bound;
mod counter;
mod primality;
mod summary;

pub use bound::{parse_bound, BoundError, DEFAULT_BOUND};
pub use counter::{count_primes_below, PrimeCounter, PrimeList};
pub use primality::{
    is_prime, is_prime_reference, is_prime_sqrt, Classification, PrimalityTest, Strategy,
};
pub use strum::IntoEnumIterator;
pub use summary::Summary;

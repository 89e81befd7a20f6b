pub mod binomial;
pub mod power;
pub mod primes;
pub mod subsets;
pub mod tuples;

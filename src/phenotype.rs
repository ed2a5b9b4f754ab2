//! # Phenotype Trait
//!
//! The `Phenotype` trait defines the variation operators a breeding strategy
//! needs from an individual: a two-parent crossover producing two offspring
//! and an in-place mutation. Both take the caller's random number generator so
//! that runs stay reproducible.
//!
//! ## Example
//!
//! ```rust
//! use airland::phenotype::Phenotype;
//! use airland::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Pair(i32, i32);
//!
//! impl Phenotype for Pair {
//!     fn crossover(&self, other: &Self, _rng: &mut RandomNumberGenerator) -> (Self, Self) {
//!         (Pair(self.0, other.1), Pair(other.0, self.1))
//!     }
//!
//!     fn mutate(&mut self, _rng: &mut RandomNumberGenerator) {
//!         self.0 += 1;
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for types that represent individuals in an evolutionary algorithm.
///
/// `PartialEq` is required because convergence is detected by structural
/// equality of the whole population.
pub trait Phenotype: Clone + Debug + PartialEq + Send + Sync {
    /// Recombines `self` (first parent) with `other` (second parent).
    ///
    /// Returns `(offspring1, offspring2)`, where the first offspring starts
    /// as a copy of `self` and the second as a copy of `other`.
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self);

    /// Applies a random mutation in place.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator);
}

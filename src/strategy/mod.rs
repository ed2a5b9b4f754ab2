//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies that turn
//! one scored generation into the next.
pub mod family;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::challenge::Challenge, evolution::options::EvolutionOptions,
    phenotype::Phenotype, rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Implementations receive the complete fitness and weight vectors of the
/// current generation (index-aligned with `population`) and return a new
/// population of the same size.
pub trait BreedStrategy<Pheno: Phenotype>
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds the next generation.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The population is empty
    /// - The fitness or weight vector does not match the population
    /// - No individual carries a positive selection weight
    fn breed(
        &self,
        population: &[Pheno],
        fitness: &[f64],
        weights: &[f64],
        challenge: &dyn Challenge<Pheno>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>>;
}

pub use family::FamilyCompetitionStrategy;

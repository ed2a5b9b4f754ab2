//! # FamilyCompetitionStrategy
//!
//! Each generation starts with `num_elites` weighted draws (with replacement)
//! copied straight from the current population. The rest is filled pairing by
//! pairing: two weighted parents are crossed over, one of the two offspring
//! is mutated with probability `mutation_probability`, and the two lowest
//! scores of the family {parent1, parent2, offspring1, offspring2} move on.
//! Ties keep that order. The last pairing is truncated when the population
//! size is odd, so the size never changes.

use super::BreedStrategy;
use crate::{
    error::{GeneticError, Result},
    evolution::{challenge::Challenge, options::EvolutionOptions},
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
    selection::WeightedSampler,
};

#[derive(Debug, Clone, Default)]
pub struct FamilyCompetitionStrategy;

impl FamilyCompetitionStrategy {
    pub fn new() -> Self {
        Self
    }
}

enum Member<P> {
    Parent(usize),
    Offspring(P),
}

impl<Pheno> BreedStrategy<Pheno> for FamilyCompetitionStrategy
where
    Pheno: Phenotype,
{
    fn breed(
        &self,
        population: &[Pheno],
        fitness: &[f64],
        weights: &[f64],
        challenge: &dyn Challenge<Pheno>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if fitness.len() != population.len() {
            return Err(GeneticError::Breeding(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                population.len()
            )));
        }
        let sampler = WeightedSampler::for_population(population, weights)?;

        let size = population.len();
        let mut next: Vec<Pheno> = Vec::with_capacity(size);

        for _ in 0..options.get_num_elites().min(size) {
            next.push(population[sampler.sample(rng)].clone());
        }

        while next.len() < size {
            let first = sampler.sample(rng);
            let second = sampler.sample(rng);

            let (mut offspring1, mut offspring2) =
                population[first].crossover(&population[second], rng);
            if rng.gen_bool(options.get_mutation_probability()) {
                if rng.gen_bool(0.5) {
                    offspring1.mutate(rng);
                } else {
                    offspring2.mutate(rng);
                }
            }

            let score1 = challenge.score(&offspring1);
            let score2 = challenge.score(&offspring2);
            let mut family = vec![
                (fitness[first], Member::Parent(first)),
                (fitness[second], Member::Parent(second)),
                (score1, Member::Offspring(offspring1)),
                (score2, Member::Offspring(offspring2)),
            ];
            family.sort_by(|a, b| a.0.total_cmp(&b.0));

            for (_, member) in family.into_iter().take(2) {
                if next.len() == size {
                    break;
                }
                next.push(match member {
                    Member::Parent(index) => population[index].clone(),
                    Member::Offspring(child) => child,
                });
            }
        }

        Ok(next)
    }
}

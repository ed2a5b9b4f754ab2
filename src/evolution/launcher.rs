use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use rayon::prelude::*;
use tracing::{debug, info};

use super::{
    challenge::Challenge,
    options::{EvolutionOptions, LogLevel},
    penalty::PenaltyChallenge,
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    phenotype::Phenotype,
    population::PopulationInitializer,
    problem::LandingProblem,
    rng::RandomNumberGenerator,
    schedule::Schedule,
    selection::{selection_strategy::best_index, InverseFitnessSelection, SelectionStrategy},
    strategy::{BreedStrategy, FamilyCompetitionStrategy},
};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionState {
    Initializing,
    Evolving,
    /// Every individual in the population is identical.
    Converged,
    /// The generation cap was reached first.
    Capped,
    /// The wall-clock limit expired at a generation boundary.
    TimedOut,
}

impl EvolutionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EvolutionState::Converged | EvolutionState::Capped | EvolutionState::TimedOut
        )
    }
}

/// Represents the result of an evolution: the best phenotype found and how the run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<Pheno: Phenotype> {
    /// The best phenotype seen during the run.
    pub pheno: Pheno,
    /// Its penalty (lower is better).
    pub score: f64,
    /// Generations bred before termination.
    pub generations: usize,
    pub elapsed: Duration,
    /// The terminal state.
    pub termination: EvolutionState,
}

/// `true` when every individual equals the first. Trivially true for zero or one individual.
pub fn has_converged<P: PartialEq>(population: &[P]) -> bool {
    population.windows(2).all(|pair| pair[0] == pair[1])
}

/// Drives the generational loop for a landing problem.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy, Chall, Select>
where
    Strategy: BreedStrategy<Schedule>,
    Chall: Challenge<Schedule>,
    Select: SelectionStrategy,
{
    problem: Arc<LandingProblem>,
    strategy: Strategy,
    challenge: Chall,
    selection: Select,
}

impl EvolutionLauncher<FamilyCompetitionStrategy, PenaltyChallenge, InverseFitnessSelection> {
    /// Family competition breeding, landing penalty fitness, inverse-fitness selection.
    pub fn for_problem(problem: Arc<LandingProblem>) -> Self {
        let challenge = PenaltyChallenge::new(Arc::clone(&problem));
        Self::new(
            problem,
            FamilyCompetitionStrategy::new(),
            challenge,
            InverseFitnessSelection::new(),
        )
    }
}

impl<Strategy, Chall, Select> EvolutionLauncher<Strategy, Chall, Select>
where
    Strategy: BreedStrategy<Schedule>,
    Chall: Challenge<Schedule>,
    Select: SelectionStrategy,
{
    pub fn new(
        problem: Arc<LandingProblem>,
        strategy: Strategy,
        challenge: Chall,
        selection: Select,
    ) -> Self {
        Self {
            problem,
            strategy,
            challenge,
            selection,
        }
    }

    pub fn problem(&self) -> &LandingProblem {
        &self.problem
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Scores every individual; parallel once the population reaches the threshold.
    pub fn evaluate(&self, population: &[Schedule], options: &EvolutionOptions) -> Vec<f64> {
        if population.len() >= options.get_parallel_threshold() {
            population
                .par_iter()
                .map(|schedule| self.challenge.score(schedule))
                .collect()
        } else {
            population
                .iter()
                .map(|schedule| self.challenge.score(schedule))
                .collect()
        }
    }

    /// Runs the genetic algorithm until convergence, the generation cap or the time limit.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid
    /// - The initial population cannot be built
    /// - A generation has no individual with positive selection weight
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<Schedule>> {
        options.validate()?;
        let start = Instant::now();
        let log_level = *options.get_log_level();

        let mut state = EvolutionState::Initializing;
        debug!(?state, aircraft = self.problem.len(), "starting evolution");

        let mut population = PopulationInitializer::new(&self.problem, options)
            .generate(options.get_population_size(), rng)?;
        let mut fitness = self.evaluate(&population, options);
        let mut weights = self.selection.weights(&fitness);

        let mut best = self.fittest(&population, &fitness, &weights)?;
        let mut generation = 0usize;
        state = EvolutionState::Evolving;

        while state == EvolutionState::Evolving {
            if has_converged(&population) {
                state = EvolutionState::Converged;
                break;
            }
            if generation >= options.get_num_generations() {
                state = EvolutionState::Capped;
                break;
            }
            if options
                .get_time_limit()
                .is_some_and(|limit| start.elapsed() >= limit)
            {
                state = EvolutionState::TimedOut;
                break;
            }

            population = self
                .strategy
                .breed(&population, &fitness, &weights, &self.challenge, options, rng)
                .map_err(|e| {
                    GeneticError::Breeding(format!(
                        "Failed to breed generation {}: {}",
                        generation, e
                    ))
                })?;
            fitness = self.evaluate(&population, options);
            weights = self.selection.weights(&fitness);

            let candidate = self.fittest(&population, &fitness, &weights)?;
            if candidate.1 < best.1 {
                best = candidate;
            }
            generation += 1;

            match log_level {
                LogLevel::Minimal => info!(generation, best = best.1, "generation bred"),
                LogLevel::Verbose => {
                    let feasible = fitness.iter().filter(|f| f.is_finite()).count();
                    let worst = fitness
                        .iter()
                        .copied()
                        .filter(|f| f.is_finite())
                        .fold(f64::NEG_INFINITY, f64::max);
                    debug!(
                        generation,
                        best = best.1,
                        worst,
                        feasible,
                        population = population.len(),
                        "generation bred"
                    );
                }
                LogLevel::None => {}
            }
        }

        let elapsed = start.elapsed();
        if log_level != LogLevel::None {
            info!(
                ?state,
                generation,
                penalty = best.1,
                elapsed_ms = elapsed.as_millis() as u64,
                "evolution finished"
            );
        }

        Ok(EvolutionResult {
            pheno: best.0,
            score: best.1,
            generations: generation,
            elapsed,
            termination: state,
        })
    }

    /// The individual with the largest selection weight, with its penalty.
    fn fittest(
        &self,
        population: &[Schedule],
        fitness: &[f64],
        weights: &[f64],
    ) -> Result<(Schedule, f64)> {
        let index = best_index(weights).ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        Ok((population[index].clone(), fitness[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::tests::{plane, two_planes};

    #[test]
    fn test_has_converged() {
        assert!(has_converged::<i32>(&[]));
        assert!(has_converged(&[1]));
        assert!(has_converged(&[2, 2, 2]));
        assert!(!has_converged(&[2, 2, 3]));
    }

    #[test]
    fn test_state_terminality() {
        assert!(!EvolutionState::Initializing.is_terminal());
        assert!(!EvolutionState::Evolving.is_terminal());
        assert!(EvolutionState::Converged.is_terminal());
        assert!(EvolutionState::Capped.is_terminal());
        assert!(EvolutionState::TimedOut.is_terminal());
    }

    #[test]
    fn test_single_individual_converges_immediately() {
        let launcher = EvolutionLauncher::for_problem(Arc::new(two_planes()));
        let options = EvolutionOptions::new(50, LogLevel::None, 1);
        let result = launcher
            .evolve(&options, &mut RandomNumberGenerator::from_seed(4))
            .unwrap();
        assert_eq!(result.termination, EvolutionState::Converged);
        assert_eq!(result.generations, 0);
    }

    #[test]
    fn test_generation_cap() {
        let problem = LandingProblem::new(
            (0..6)
                .map(|id| {
                    let seps = (0..6).map(|o| if o == id { 0 } else { 4 }).collect();
                    plane(id, (0, 50, 400), seps)
                })
                .collect(),
        )
        .unwrap();
        let launcher = EvolutionLauncher::for_problem(Arc::new(problem));
        let options = EvolutionOptions::new(3, LogLevel::Minimal, 30);

        let result = launcher
            .evolve(&options, &mut RandomNumberGenerator::from_seed(8))
            .unwrap();
        assert_eq!(result.termination, EvolutionState::Capped);
        assert_eq!(result.generations, 3);
        assert!(result.score.is_finite());
    }

    #[test]
    fn test_zero_time_limit_stops_before_breeding() {
        let launcher = EvolutionLauncher::for_problem(Arc::new(two_planes()));
        let options = EvolutionOptions::builder()
            .population_size(20)
            .time_limit(Duration::ZERO)
            .build();
        let result = launcher
            .evolve(&options, &mut RandomNumberGenerator::from_seed(2))
            .unwrap();
        assert!(matches!(
            result.termination,
            EvolutionState::TimedOut | EvolutionState::Converged
        ));
        assert_eq!(result.generations, 0);
    }

    #[test]
    fn test_invalid_options() {
        let launcher = EvolutionLauncher::for_problem(Arc::new(two_planes()));
        let options = EvolutionOptions::new(100, LogLevel::None, 0);
        match launcher.evolve(&options, &mut RandomNumberGenerator::from_seed(0)) {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Population size cannot be zero"))
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_parallel_matches_sequential() {
        let launcher = EvolutionLauncher::for_problem(Arc::new(two_planes()));
        let sequential = EvolutionOptions::default();
        let parallel = EvolutionOptions::builder().parallel_threshold(1).build();
        let population = PopulationInitializer::new(launcher.problem(), &sequential)
            .generate(25, &mut RandomNumberGenerator::from_seed(6))
            .unwrap();

        assert_eq!(
            launcher.evaluate(&population, &sequential),
            launcher.evaluate(&population, &parallel)
        );
    }
}

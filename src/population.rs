//! # Population Initializer
//!
//! Builds the initial population out of feasible schedules. Each candidate
//! draws a landing time uniformly inside every aircraft's window, orders the
//! aircraft by that time and makes one forward pass pushing each landing back
//! until it clears the separation behind its predecessor. A candidate that
//! gets pushed past any latest time is discarded whole.
//!
//! Two budgets bound the search: `max_seed_attempts` for the first feasible
//! individual (`GeneticError::PopulationGeneration`) and `max_total_attempts`
//! for the whole population (`GeneticError::MaxAttemptsReached`).

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    gene::encode,
    problem::LandingProblem,
    rng::RandomNumberGenerator,
    schedule::Schedule,
};

#[derive(Debug, Clone)]
pub struct PopulationInitializer<'a> {
    problem: &'a LandingProblem,
    max_seed_attempts: usize,
    max_total_attempts: usize,
    parallel_threshold: usize,
}

impl<'a> PopulationInitializer<'a> {
    /// Uses the attempt budgets and parallel threshold carried by `options`.
    pub fn new(problem: &'a LandingProblem, options: &EvolutionOptions) -> Self {
        Self {
            problem,
            max_seed_attempts: options.get_max_seed_attempts(),
            max_total_attempts: options.get_max_total_attempts(),
            parallel_threshold: options.get_parallel_threshold(),
        }
    }

    /// Draws one candidate and adjusts it; `None` if it cannot be made feasible.
    pub fn candidate(&self, rng: &mut RandomNumberGenerator) -> Option<Schedule> {
        let mut draws: Vec<(usize, i64)> = self
            .problem
            .aircraft()
            .iter()
            .map(|plane| {
                let time = if plane.has_fixed_time() {
                    plane.target_time
                } else {
                    rng.gen_range(plane.earliest_time..=plane.latest_time)
                };
                (plane.id, time)
            })
            .collect();

        // Stable, so equal times keep id order.
        draws.sort_by_key(|&(_, time)| time);
        self.adjust(&draws)
    }

    /// Single forward pass over `draws` (already in landing order).
    pub fn adjust(&self, draws: &[(usize, i64)]) -> Option<Schedule> {
        let mut sequence = Vec::with_capacity(draws.len());
        let mut previous: Option<(usize, i64)> = None;

        for &(id, drawn) in draws {
            let plane = self.problem.plane(id);
            let time = match previous {
                Some((prev_id, prev_time)) => {
                    drawn.max(prev_time + self.problem.separation(prev_id, id))
                }
                None => drawn,
            };

            if time > plane.latest_time {
                return None;
            }

            sequence.push((id, encode(plane, time)));
            previous = Some((id, time));
        }

        Schedule::new(sequence).ok()
    }

    /// Generates `size` feasible schedules.
    ///
    /// Large batches are generated with rayon, one derived random stream per
    /// candidate, so the result depends only on `rng`'s state.
    ///
    /// # Errors
    ///
    /// - `GeneticError::PopulationGeneration` if no candidate succeeded within
    ///   the seed attempt bound.
    /// - `GeneticError::MaxAttemptsReached` if the total budget ran out first.
    pub fn generate(&self, size: usize, rng: &mut RandomNumberGenerator) -> Result<Vec<Schedule>> {
        let mut population: Vec<Schedule> = Vec::with_capacity(size);
        let mut attempts = 0usize;

        while population.len() < size {
            if population.is_empty() && attempts >= self.max_seed_attempts {
                warn!(attempts, "no feasible individual found");
                return Err(GeneticError::PopulationGeneration { attempts });
            }
            if attempts >= self.max_total_attempts {
                warn!(attempts, built = population.len(), size, "initialization budget exhausted");
                return Err(GeneticError::MaxAttemptsReached(format!(
                    "built {} of {} individuals in {} attempts",
                    population.len(),
                    size,
                    attempts
                )));
            }

            let mut batch = (size - population.len()).min(self.max_total_attempts - attempts);
            if population.is_empty() {
                batch = batch.min(self.max_seed_attempts - attempts);
            }
            attempts += batch;

            if batch >= self.parallel_threshold {
                let streams = rng.spawn(batch);
                let found: Vec<Schedule> = streams
                    .into_par_iter()
                    .filter_map(|mut stream| self.candidate(&mut stream))
                    .collect();
                population.extend(found);
            } else {
                for _ in 0..batch {
                    if let Some(schedule) = self.candidate(rng) {
                        population.push(schedule);
                    }
                }
            }
        }

        debug!(size, attempts, "initial population built");
        Ok(population)
    }
}

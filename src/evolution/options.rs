//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration consumed by the
//! [`EvolutionLauncher`](super::EvolutionLauncher): generation cap, population
//! size, elite count, mutation probability, logging level, parallelism
//! threshold, initialization attempt budgets and an optional wall-clock limit.
//!
//! ## Example
//!
//! ```rust
//! use airland::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, LogLevel::Minimal, 50);
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_num_elites(), 10);
//! ```

use std::time::Duration;

use crate::error::{GeneticError, Result};

/// How much the launcher reports through `tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// A `debug` event per generation with the population's fitness spread.
    Verbose,
    /// An `info` event per generation and at termination.
    Minimal,
    None,
}

#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    num_elites: usize,
    mutation_probability: f64,
    /// Minimum number of items to process in parallel
    parallel_threshold: usize,
    max_seed_attempts: usize,
    max_total_attempts: Option<usize>,
    time_limit: Option<Duration>,
}

const DEFAULT_NUM_GENERATIONS: usize = 1000;
const DEFAULT_POPULATION_SIZE: usize = 100;
const DEFAULT_NUM_ELITES: usize = 10;
const DEFAULT_MUTATION_PROBABILITY: f64 = 0.1;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;
const DEFAULT_MAX_SEED_ATTEMPTS: usize = 10_000;
const DEFAULT_ATTEMPTS_PER_INDIVIDUAL: usize = 10_000;

impl EvolutionOptions {
    pub fn new(num_generations: usize, log_level: LogLevel, population_size: usize) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            ..Self::default()
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    /// Individuals drawn straight into the next generation, capped by the population size.
    pub fn get_num_elites(&self) -> usize {
        self.num_elites.min(self.population_size)
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Returns the minimum number of items to process in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Attempts allowed before the first feasible individual must have been found.
    pub fn get_max_seed_attempts(&self) -> usize {
        self.max_seed_attempts
    }

    /// Attempts allowed for the whole initial population.
    pub fn get_max_total_attempts(&self) -> usize {
        self.max_total_attempts.unwrap_or_else(|| {
            self.population_size
                .saturating_mul(DEFAULT_ATTEMPTS_PER_INDIVIDUAL)
                .max(self.max_seed_attempts)
        })
    }

    pub fn get_time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Checks the options before a run.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` for a zero population size, a
    /// zero generation cap or a mutation probability outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must lie in [0, 1], got {}",
                self.mutation_probability
            )));
        }
        if self.max_seed_attempts == 0 {
            return Err(GeneticError::Configuration(
                "Seed attempt bound cannot be zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use airland::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .log_level(LogLevel::Minimal)
    ///     .population_size(50)
    ///     .mutation_probability(0.2)
    ///     .build();
    /// assert_eq!(options.get_population_size(), 50);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: DEFAULT_NUM_GENERATIONS,
            log_level: LogLevel::None,
            population_size: DEFAULT_POPULATION_SIZE,
            num_elites: DEFAULT_NUM_ELITES,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            max_seed_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
            max_total_attempts: None,
            time_limit: None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    num_elites: Option<usize>,
    mutation_probability: Option<f64>,
    parallel_threshold: Option<usize>,
    max_seed_attempts: Option<usize>,
    max_total_attempts: Option<usize>,
    time_limit: Option<Duration>,
}

impl EvolutionOptionsBuilder {
    /// Sets the generation cap.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the number of weighted draws carried over unchanged each generation.
    pub fn num_elites(mut self, value: usize) -> Self {
        self.num_elites = Some(value);
        self
    }

    /// Sets the per-pairing probability of mutating one offspring.
    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn max_seed_attempts(mut self, value: usize) -> Self {
        self.max_seed_attempts = Some(value);
        self
    }

    pub fn max_total_attempts(mut self, value: usize) -> Self {
        self.max_total_attempts = Some(value);
        self
    }

    /// Stops the run at the first generation boundary after `value` has elapsed.
    pub fn time_limit(mut self, value: Duration) -> Self {
        self.time_limit = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            num_elites: self.num_elites.unwrap_or(defaults.num_elites),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            max_seed_attempts: self.max_seed_attempts.unwrap_or(defaults.max_seed_attempts),
            max_total_attempts: self.max_total_attempts,
            time_limit: self.time_limit,
        }
    }
}

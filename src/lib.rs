//! Single-runway aircraft landing scheduling with a genetic algorithm.
//!
//! ```rust
//! use std::sync::Arc;
//! use airland::{
//!     evolution::{EvolutionLauncher, EvolutionOptions},
//!     problem::LandingProblem,
//!     rng::RandomNumberGenerator,
//! };
//!
//! let text = "2\n0 0 5 10 1 1\n0 5\n0 0 5 10 1 1\n5 0\n";
//! let problem = Arc::new(LandingProblem::parse(text)?);
//! let launcher = EvolutionLauncher::for_problem(Arc::clone(&problem));
//! let options = EvolutionOptions::builder()
//!     .num_generations(50)
//!     .population_size(20)
//!     .build();
//!
//! let result = launcher.evolve(&options, &mut RandomNumberGenerator::from_seed(1))?;
//! assert!(result.score.is_finite());
//! # Ok::<(), airland::GeneticError>(())
//! ```
pub mod error;
pub mod evolution;
pub mod gene;
pub mod instance;
pub mod phenotype;
pub mod population;
pub mod problem;
pub mod rng;
pub mod schedule;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};

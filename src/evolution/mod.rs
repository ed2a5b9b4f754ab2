pub mod challenge;
pub mod launcher;
pub mod options;
pub mod penalty;

pub use challenge::Challenge;
pub use launcher::{has_converged, EvolutionLauncher, EvolutionResult, EvolutionState};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use penalty::PenaltyChallenge;

pub mod inverse;
pub mod sampler;
pub mod selection_strategy;

pub use inverse::InverseFitnessSelection;
pub use sampler::WeightedSampler;
pub use selection_strategy::SelectionStrategy;

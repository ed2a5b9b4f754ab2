use std::fmt::Debug;

/// Trait for selection strategies in genetic algorithms.
///
/// A strategy turns a generation's complete fitness vector into sampling
/// weights: index-aligned with the population, non-negative, and higher
/// means more likely to be drawn by a [`WeightedSampler`](super::WeightedSampler).
///
/// # Examples
///
/// ```
/// use airland::selection::{InverseFitnessSelection, SelectionStrategy, WeightedSampler};
/// use airland::rng::RandomNumberGenerator;
///
/// let fitness = vec![4.0, f64::INFINITY, 2.0];
/// let weights = InverseFitnessSelection::new().weights(&fitness);
/// assert_eq!(weights, vec![1.5, 0.0, 3.0]);
///
/// let sampler = WeightedSampler::new(&weights).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// assert!((0..100).all(|_| sampler.sample(&mut rng) != 1));
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Converts fitness scores (lower is better) into sampling weights.
    fn weights(&self, fitness: &[f64]) -> Vec<f64>;
}

/// Index of the first maximal weight, or `None` for an empty slice.
pub fn best_index(weights: &[f64]) -> Option<usize> {
    weights
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, &weight)| match best {
            Some((_, best_weight)) if weight <= best_weight => best,
            _ => Some((index, weight)),
        })
        .map(|(index, _)| index)
}

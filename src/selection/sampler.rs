//! Weighted sampling with replacement.
//!
//! Finite weights are sampled proportionally through `rand`'s `WeightedIndex`.
//! An infinite weight (a zero-penalty individual under inverse-fitness
//! weighting) outweighs every finite one, so when any are present the sampler
//! draws uniformly among them only.

use rand::distributions::{Distribution, WeightedIndex};
use tracing::warn;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

#[derive(Debug, Clone)]
enum Draw {
    Dominant(Vec<usize>),
    Proportional(WeightedIndex<f64>),
}

/// A reusable sampler over one generation's weight vector.
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    draw: Draw,
}

impl WeightedSampler {
    /// Builds a sampler over `weights`.
    ///
    /// # Errors
    ///
    /// - `GeneticError::EmptyPopulation` for an empty slice.
    /// - `GeneticError::Selection` for a negative or NaN weight, or when every
    ///   weight is zero.
    pub fn new(weights: &[f64]) -> Result<Self> {
        if weights.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if let Some(bad) = weights.iter().find(|w| w.is_nan() || **w < 0.0) {
            warn!(weight = *bad, "invalid selection weight");
            return Err(GeneticError::Selection(format!(
                "selection weights must be non-negative, found {}",
                bad
            )));
        }

        let dominant: Vec<usize> = weights
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_infinite())
            .map(|(index, _)| index)
            .collect();
        if !dominant.is_empty() {
            return Ok(Self {
                draw: Draw::Dominant(dominant),
            });
        }

        let index = WeightedIndex::new(weights).map_err(|e| {
            warn!(population = weights.len(), "no individual carries positive selection weight");
            GeneticError::Selection(format!(
                "no individual carries positive selection weight ({})",
                e
            ))
        })?;
        Ok(Self {
            draw: Draw::Proportional(index),
        })
    }

    /// Like [`WeightedSampler::new`], also checking that `weights` matches `population`.
    pub fn for_population<P>(population: &[P], weights: &[f64]) -> Result<Self> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if weights.len() != population.len() {
            return Err(GeneticError::Selection(format!(
                "Weight vector length ({}) doesn't match population length ({})",
                weights.len(),
                population.len()
            )));
        }
        Self::new(weights)
    }

    /// Draws one index.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> usize {
        match &self.draw {
            Draw::Dominant(indices) => indices[rng.gen_index(indices.len())],
            Draw::Proportional(index) => index.sample(&mut rng.rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_weight_is_never_drawn() {
        let sampler = WeightedSampler::new(&[1.0, 0.0, 3.0]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        for _ in 0..1000 {
            assert_ne!(sampler.sample(&mut rng), 1);
        }
    }

    #[test]
    fn test_draws_follow_weights() {
        let sampler = WeightedSampler::new(&[1.0, 9.0]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let heavy = (0..10_000).filter(|_| sampler.sample(&mut rng) == 1).count();
        assert!(heavy > 8_500 && heavy < 9_500, "heavy drawn {} times", heavy);
    }

    #[test]
    fn test_infinite_weights_dominate() {
        let sampler = WeightedSampler::new(&[5.0, f64::INFINITY, 1e12, f64::INFINITY]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut seen = [0usize; 4];
        for _ in 0..1000 {
            seen[sampler.sample(&mut rng)] += 1;
        }
        assert_eq!(seen[0] + seen[2], 0);
        assert!(seen[1] > 0 && seen[3] > 0);
    }

    #[test]
    fn test_all_zero_weights_is_an_error() {
        assert!(matches!(
            WeightedSampler::new(&[0.0, 0.0]),
            Err(GeneticError::Selection(_))
        ));
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_all_zero_weights_logs_a_warning() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result =
            tracing::subscriber::with_default(subscriber, || WeightedSampler::new(&[0.0, 0.0, 0.0]));
        assert!(result.is_err());

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "got: {}", output);
        assert!(output.contains("no individual carries positive selection weight"));
        assert!(output.contains("population=3"));
    }

    #[test]
    fn test_negative_weight_is_an_error() {
        assert!(WeightedSampler::new(&[1.0, -1.0]).is_err());
    }

    #[test]
    fn test_empty_and_mismatched() {
        assert!(matches!(
            WeightedSampler::new(&[]),
            Err(GeneticError::EmptyPopulation)
        ));
        assert!(WeightedSampler::for_population(&[1, 2, 3], &[1.0]).is_err());
    }
}

use super::selection_strategy::SelectionStrategy;

/// Inverse-proportional weighting for minimisation.
///
/// Let `S` be the sum of all finite, non-negative fitness values. An
/// individual with fitness `f` gets weight `S / f`; infeasible (infinite),
/// negative and NaN scores get `0`. A fitness of exactly `0` cannot be beaten
/// and gets `f64::INFINITY`, which [`WeightedSampler`](super::WeightedSampler)
/// treats as dominating every finite weight.
///
/// # Examples
///
/// ```
/// use airland::selection::{InverseFitnessSelection, SelectionStrategy};
///
/// let selection = InverseFitnessSelection::new();
/// let weights = selection.weights(&[2.0, 8.0, f64::INFINITY]);
/// assert_eq!(weights, vec![5.0, 1.25, 0.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InverseFitnessSelection;

impl InverseFitnessSelection {
    pub fn new() -> Self {
        Self
    }
}

fn counts(score: f64) -> bool {
    score.is_finite() && score >= 0.0
}

impl SelectionStrategy for InverseFitnessSelection {
    fn weights(&self, fitness: &[f64]) -> Vec<f64> {
        let total: f64 = fitness.iter().copied().filter(|&f| counts(f)).sum();

        fitness
            .iter()
            .map(|&f| {
                if !counts(f) {
                    0.0
                } else if f == 0.0 {
                    f64::INFINITY
                } else {
                    total / f
                }
            })
            .collect()
    }
}

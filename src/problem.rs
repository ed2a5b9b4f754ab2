//! # Problem Model
//!
//! Immutable aircraft records and the separation matrix. A `LandingProblem` is
//! built once (by hand or through [`crate::instance`]) and then shared
//! read-only by the initializer, the fitness evaluator and the driver.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeneticError, Result};

/// A single aircraft waiting to land.
///
/// `separations[j]` is the minimum gap required when this aircraft lands
/// immediately before aircraft `j`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aircraft {
    pub id: usize,
    pub appearance_time: i64,
    pub earliest_time: i64,
    pub target_time: i64,
    pub latest_time: i64,
    pub early_penalty: f64,
    pub late_penalty: f64,
    pub separations: Vec<i64>,
}

impl Aircraft {
    /// Penalty for landing at `time`; linear in the distance to the target.
    pub fn penalty_at(&self, time: i64) -> f64 {
        if time < self.target_time {
            self.early_penalty * (self.target_time - time) as f64
        } else {
            self.late_penalty * (time - self.target_time) as f64
        }
    }

    /// Whether the landing window is a single point.
    pub fn has_fixed_time(&self) -> bool {
        self.earliest_time == self.latest_time
    }
}

/// The full single-runway landing problem.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLandingProblem"))]
pub struct LandingProblem {
    aircraft: Vec<Aircraft>,
}

/// Deserialized form, checked by [`LandingProblem::new`] before use.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawLandingProblem {
    aircraft: Vec<Aircraft>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLandingProblem> for LandingProblem {
    type Error = GeneticError;

    fn try_from(raw: RawLandingProblem) -> Result<Self> {
        Self::new(raw.aircraft)
    }
}

impl LandingProblem {
    /// Builds a problem from aircraft records.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidInstance` when ids are not `0..n` in
    /// order, a window is inverted, a penalty is negative or not finite, or a
    /// separation row does not have one entry per aircraft.
    pub fn new(aircraft: Vec<Aircraft>) -> Result<Self> {
        if aircraft.is_empty() {
            return Err(GeneticError::InvalidInstance(
                "a problem needs at least one aircraft".to_string(),
            ));
        }

        let count = aircraft.len();
        for (index, plane) in aircraft.iter().enumerate() {
            if plane.id != index {
                return Err(GeneticError::InvalidInstance(format!(
                    "aircraft at position {} has id {}",
                    index, plane.id
                )));
            }
            if !(plane.earliest_time <= plane.target_time
                && plane.target_time <= plane.latest_time)
            {
                return Err(GeneticError::InvalidInstance(format!(
                    "aircraft {}: window [{}, {}, {}] is not ordered",
                    plane.id, plane.earliest_time, plane.target_time, plane.latest_time
                )));
            }
            let valid_penalty = |p: f64| p.is_finite() && p >= 0.0;
            if !valid_penalty(plane.early_penalty) || !valid_penalty(plane.late_penalty) {
                return Err(GeneticError::InvalidInstance(format!(
                    "aircraft {}: penalties must be finite and non-negative",
                    plane.id
                )));
            }
            if plane.separations.len() != count {
                return Err(GeneticError::InvalidInstance(format!(
                    "aircraft {}: expected {} separations, found {}",
                    plane.id,
                    count,
                    plane.separations.len()
                )));
            }
        }

        Ok(Self { aircraft })
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    /// Returns the aircraft with the given id.
    ///
    /// Panics if `id` is out of range; ids are dense so callers iterate `0..len()`.
    pub fn plane(&self, id: usize) -> &Aircraft {
        &self.aircraft[id]
    }

    /// Minimum gap when `leader` lands immediately before `follower`.
    pub fn separation(&self, leader: usize, follower: usize) -> i64 {
        self.aircraft[leader].separations[follower]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn plane(id: usize, window: (i64, i64, i64), separations: Vec<i64>) -> Aircraft {
        Aircraft {
            id,
            appearance_time: window.0,
            earliest_time: window.0,
            target_time: window.1,
            latest_time: window.2,
            early_penalty: 1.0,
            late_penalty: 1.0,
            separations,
        }
    }

    /// Two aircraft with windows `[0, 5, 10]` and a mutual separation of 5.
    pub(crate) fn two_planes() -> LandingProblem {
        LandingProblem::new(vec![
            plane(0, (0, 5, 10), vec![0, 5]),
            plane(1, (0, 5, 10), vec![5, 0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_penalty_at() {
        let mut a = plane(0, (0, 5, 10), vec![0]);
        a.early_penalty = 2.0;
        a.late_penalty = 3.0;
        assert_eq!(a.penalty_at(5), 0.0);
        assert_eq!(a.penalty_at(3), 4.0);
        assert_eq!(a.penalty_at(7), 6.0);
    }

    #[test]
    fn test_separation_lookup_is_directional() {
        let problem = LandingProblem::new(vec![
            plane(0, (0, 5, 10), vec![0, 3]),
            plane(1, (0, 5, 10), vec![8, 0]),
        ])
        .unwrap();
        assert_eq!(problem.separation(0, 1), 3);
        assert_eq!(problem.separation(1, 0), 8);
    }

    #[test]
    fn test_rejects_inverted_window() {
        let result = LandingProblem::new(vec![plane(0, (5, 2, 10), vec![0])]);
        assert!(matches!(result, Err(GeneticError::InvalidInstance(_))));
    }

    #[test]
    fn test_rejects_ragged_separations() {
        let result = LandingProblem::new(vec![
            plane(0, (0, 5, 10), vec![0, 5]),
            plane(1, (0, 5, 10), vec![5]),
        ]);
        assert!(matches!(result, Err(GeneticError::InvalidInstance(_))));
    }

    #[test]
    fn test_rejects_negative_penalty() {
        let mut a = plane(0, (0, 5, 10), vec![0]);
        a.late_penalty = -1.0;
        assert!(LandingProblem::new(vec![a]).is_err());
    }

    #[test]
    fn test_rejects_sparse_ids() {
        let result = LandingProblem::new(vec![plane(1, (0, 5, 10), vec![0])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(LandingProblem::new(Vec::new()).is_err());
    }
}

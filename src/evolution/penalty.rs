//! # Landing Penalty
//!
//! The fitness evaluator for landing schedules. Walks the sequence in order,
//! returns `f64::INFINITY` as soon as two consecutive landings are closer than
//! their separation, and otherwise sums the per-aircraft earliness/lateness
//! penalties.

use std::sync::Arc;

use super::challenge::Challenge;
use crate::{gene::decode, problem::LandingProblem, schedule::Schedule};

#[derive(Debug, Clone)]
pub struct PenaltyChallenge {
    problem: Arc<LandingProblem>,
}

impl PenaltyChallenge {
    pub fn new(problem: Arc<LandingProblem>) -> Self {
        Self { problem }
    }

    pub fn problem(&self) -> &LandingProblem {
        &self.problem
    }

    /// Whether every consecutive pair respects its separation.
    pub fn is_feasible(&self, schedule: &Schedule) -> bool {
        self.score(schedule).is_finite()
    }
}

impl Challenge<Schedule> for PenaltyChallenge {
    fn score(&self, schedule: &Schedule) -> f64 {
        let mut penalty = 0.0;
        let mut previous: Option<(usize, i64)> = None;

        for (id, gene) in schedule.sequence() {
            let plane = self.problem.plane(*id);
            let time = decode(plane, gene);

            if let Some((prev_id, prev_time)) = previous {
                if time < prev_time + self.problem.separation(prev_id, *id) {
                    return f64::INFINITY;
                }
            }

            penalty += plane.penalty_at(time);
            previous = Some((*id, time));
        }

        penalty
    }
}

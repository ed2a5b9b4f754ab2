//! # Schedule
//!
//! A `Schedule` is one individual: an ordered list of `(aircraft id, gene)`
//! pairs whose order is the landing sequence, plus an id to position lookup.
//! Schedules built by the population initializer satisfy every separation
//! constraint; crossover and mutation do not repair anything, so later
//! schedules may be infeasible and are scored accordingly.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{GeneticError, Result},
    gene::{decode, encode, Gene},
    phenotype::Phenotype,
    problem::LandingProblem,
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSchedule"))]
pub struct Schedule {
    sequence: Vec<(usize, Gene)>,
    positions: Vec<usize>,
}

/// Only the sequence is read back; positions are rebuilt by [`Schedule::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSchedule {
    sequence: Vec<(usize, Gene)>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSchedule> for Schedule {
    type Error = GeneticError;

    fn try_from(raw: RawSchedule) -> Result<Self> {
        Self::new(raw.sequence)
    }
}

impl Schedule {
    /// Builds a schedule from an ordered list of genes.
    ///
    /// # Errors
    ///
    /// The ids must be a permutation of `0..sequence.len()`.
    pub fn new(sequence: Vec<(usize, Gene)>) -> Result<Self> {
        let mut positions = vec![usize::MAX; sequence.len()];
        for (index, &(id, _)) in sequence.iter().enumerate() {
            match positions.get_mut(id) {
                Some(slot) if *slot == usize::MAX => *slot = index,
                Some(_) => {
                    return Err(GeneticError::Other(format!(
                        "aircraft {} appears twice in the landing sequence",
                        id
                    )))
                }
                None => {
                    return Err(GeneticError::Other(format!(
                        "aircraft id {} out of range for a sequence of {}",
                        id,
                        sequence.len()
                    )))
                }
            }
        }
        Ok(Self {
            sequence,
            positions,
        })
    }

    /// Encodes ordered `(id, time)` pairs into a schedule.
    ///
    /// # Errors
    ///
    /// Fails if the ids do not cover the problem exactly once or a time
    /// precedes its aircraft's earliest time.
    pub fn from_times(problem: &LandingProblem, times: &[(usize, i64)]) -> Result<Self> {
        if times.len() != problem.len() {
            return Err(GeneticError::Other(format!(
                "expected {} landing times, got {}",
                problem.len(),
                times.len()
            )));
        }
        let sequence = times
            .iter()
            .map(|&(id, time)| -> Result<(usize, Gene)> {
                let plane = problem.aircraft().get(id).ok_or_else(|| {
                    GeneticError::Other(format!("unknown aircraft id {}", id))
                })?;
                if time < plane.earliest_time {
                    return Err(GeneticError::Other(format!(
                        "aircraft {} cannot land at {} before its earliest time {}",
                        id, time, plane.earliest_time
                    )));
                }
                Ok((id, encode(plane, time)))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(sequence)
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The landing sequence.
    pub fn sequence(&self) -> &[(usize, Gene)] {
        &self.sequence
    }

    /// Position of aircraft `id` in the landing sequence.
    pub fn position(&self, id: usize) -> usize {
        self.positions[id]
    }

    pub fn gene(&self, id: usize) -> &Gene {
        &self.sequence[self.positions[id]].1
    }

    fn gene_mut(&mut self, id: usize) -> &mut Gene {
        &mut self.sequence[self.positions[id]].1
    }

    /// Decoded `(id, time)` pairs in landing order.
    pub fn landing_times(&self, problem: &LandingProblem) -> Vec<(usize, i64)> {
        self.sequence
            .iter()
            .map(|(id, gene)| (*id, decode(problem.plane(*id), gene)))
            .collect()
    }

    /// All genes concatenated in landing order.
    pub fn dna(&self) -> String {
        self.sequence
            .iter()
            .map(|(_, gene)| gene.to_string())
            .collect()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (id, gene)) in self.sequence.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", id, gene)?;
        }
        Ok(())
    }
}

impl Phenotype for Schedule {
    /// Splices gene suffixes for `k ∈ [1, n-1]` randomly chosen aircraft.
    ///
    /// The cut point is drawn from the first parent's gene; when the second
    /// parent's gene is shorter its suffix past the cut is empty.
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self) {
        let mut offspring1 = self.clone();
        let mut offspring2 = other.clone();

        let n = self.len();
        if n < 2 {
            return (offspring1, offspring2);
        }

        let rounds = rng.gen_range(1..n);
        for _ in 0..rounds {
            let plane = rng.gen_index(n);
            let first = self.gene(plane);
            let second = other.gene(plane);
            if first.is_empty() {
                continue;
            }
            let point = rng.gen_index(first.len());

            *offspring1.gene_mut(plane) = first.splice(second, point);
            *offspring2.gene_mut(plane) = second.splice(first, point);
        }

        (offspring1, offspring2)
    }

    /// Sets one random bit of one random gene to `1`.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
        if self.is_empty() {
            return;
        }
        let plane = rng.gen_index(self.len());
        let gene = self.gene_mut(plane);
        if gene.is_empty() {
            return;
        }
        let point = rng.gen_index(gene.len());
        gene.set_bit(point);
    }
}

use crate::phenotype::Phenotype;

/// Scores a phenotype. Lower is better; `f64::INFINITY` marks an infeasible
/// individual and is a valid score, not an error.
pub trait Challenge<Pheno: Phenotype>: Send + Sync {
    fn score(&self, phenotype: &Pheno) -> f64;
}

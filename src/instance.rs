//! # Instance Loader
//!
//! Reads problem files in the OR-Library `airland` layout:
//!
//! ```text
//! <count> [<freeze time> ...]
//! <appearance> <earliest> <target> <latest> <early penalty> <late penalty>
//! <separation to 0> <separation to 1> ... <separation to count-1>
//! ... one property block and one separation row per aircraft ...
//! ```
//!
//! Only the first token of the header line is used. After the header, values
//! are read as a flat whitespace-separated stream, so rows may wrap.

use std::{fs, path::Path, str::FromStr};

use tracing::debug;

use crate::{
    error::{GeneticError, Result},
    problem::{Aircraft, LandingProblem},
};

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next<T: FromStr>(&mut self, what: impl Fn() -> String) -> Result<T> {
        let token = self.inner.next().ok_or_else(|| {
            GeneticError::InvalidInstance(format!("unexpected end of input reading {}", what()))
        })?;
        token.parse::<T>().map_err(|_| {
            GeneticError::InvalidInstance(format!("cannot parse '{}' as {}", token, what()))
        })
    }
}

impl LandingProblem {
    /// Parses a problem from text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use airland::problem::LandingProblem;
    ///
    /// let text = "2 10\n\
    ///             0 0 5 10 1.0 1.0\n0 5\n\
    ///             0 0 5 10 1.0 1.0\n5 0\n";
    /// let problem = LandingProblem::parse(text).unwrap();
    /// assert_eq!(problem.len(), 2);
    /// assert_eq!(problem.separation(1, 0), 5);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().skip_while(|line| line.trim().is_empty());
        let header = lines
            .next()
            .ok_or_else(|| GeneticError::InvalidInstance("empty instance".to_string()))?;
        let count: usize = Tokens {
            inner: header.split_whitespace(),
        }
        .next(|| "aircraft count".to_string())?;

        let rest: Vec<&str> = lines.collect();
        let body = rest.join("\n");
        let mut tokens = Tokens {
            inner: body.split_whitespace(),
        };

        let mut aircraft = Vec::with_capacity(count);
        for id in 0..count {
            let field = |name: &str| {
                let name = name.to_string();
                move || format!("{} of aircraft {}", name, id)
            };
            let appearance_time = tokens.next(field("appearance time"))?;
            let earliest_time = tokens.next(field("earliest time"))?;
            let target_time = tokens.next(field("target time"))?;
            let latest_time = tokens.next(field("latest time"))?;
            let early_penalty = tokens.next(field("early penalty"))?;
            let late_penalty = tokens.next(field("late penalty"))?;
            let separations = (0..count)
                .map(|other| tokens.next(|| format!("separation {} -> {}", id, other)))
                .collect::<Result<Vec<i64>>>()?;

            aircraft.push(Aircraft {
                id,
                appearance_time,
                earliest_time,
                target_time,
                latest_time,
                early_penalty,
                late_penalty,
                separations,
            });
        }

        if let Some(extra) = tokens.inner.next() {
            return Err(GeneticError::InvalidInstance(format!(
                "trailing data after {} aircraft: '{}'",
                count, extra
            )));
        }

        debug!(aircraft = count, "parsed landing instance");
        LandingProblem::new(aircraft)
    }

    /// Reads and parses a problem file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

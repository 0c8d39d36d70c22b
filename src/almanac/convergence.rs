//! Stopping rules and limits for the fixed-point refinement loops

use serde::Serialize;

/// Number of fractional digits compared by the default stopping rule
pub const DEFAULT_DIGITS: usize = 6;

/// Default cap on refinement iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// How successive estimates are judged to have settled
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Convergence {
    /// The estimates format identically with this many fractional digits.
    ///
    /// This compares strings, not numbers: two estimates that straddle a
    /// rounding boundary never match even when closer than the last digit,
    /// and two NaN estimates always match.
    FormattedDigits(usize),
    /// The absolute difference between estimates is at most this many days.
    Epsilon(f64),
}

impl Default for Convergence {
    fn default() -> Self {
        Convergence::FormattedDigits(DEFAULT_DIGITS)
    }
}

impl Convergence {
    /// Start tracking a refinement from its initial estimate
    pub(crate) fn tracker(self, initial: f64) -> Tracker {
        Tracker {
            rule: self,
            last: initial,
            last_text: self.render(initial),
        }
    }

    fn render(&self, value: f64) -> Option<String> {
        match self {
            Convergence::FormattedDigits(digits) => Some(format!("{:.*}", *digits, value)),
            Convergence::Epsilon(_) => None,
        }
    }
}

/// Remembers the previous estimate of a refinement loop
pub(crate) struct Tracker {
    rule: Convergence,
    last: f64,
    last_text: Option<String>,
}

impl Tracker {
    /// Record the next estimate; true when it matches the previous one
    pub(crate) fn settled(&mut self, next: f64) -> bool {
        let done = match self.rule {
            Convergence::FormattedDigits(_) => {
                let text = self.rule.render(next);
                let same = text == self.last_text;
                self.last_text = text;
                same
            }
            Convergence::Epsilon(eps) => {
                (next - self.last).abs() <= eps || (next.is_nan() && self.last.is_nan())
            }
        };
        self.last = next;
        done
    }
}

/// Limits and stopping rule shared by the event solvers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolverConfig {
    /// Corrections applied before giving up
    pub max_iterations: usize,
    /// Stopping rule
    pub convergence: Convergence,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            convergence: Convergence::default(),
        }
    }
}

impl SolverConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the stopping rule
    pub fn with_convergence(mut self, convergence: Convergence) -> Self {
        self.convergence = convergence;
        self
    }
}

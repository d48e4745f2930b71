/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every pivot step completed; `x` solves the original system.
    Solved,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Gauss–Jordan solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Solution vector, or the partially reduced right-hand side if the
    /// solver was stopped early.
    pub x: Vec<f64>,

    /// Number of pivot steps completed.
    pub steps: usize,
}

impl Solution {
    /// Returns the solution vector if the system was fully solved.
    #[must_use]
    pub fn solved(&self) -> Option<&[f64]> {
        match self.status {
            Status::Solved => Some(self.x.as_slice()),
            Status::StoppedByObserver => None,
        }
    }
}

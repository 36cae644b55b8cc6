use crate::{centroid::Centroid, color::{distance, Color}};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// Iteration cap reached.
    Iterations,
    /// Total centroid movement fell to the tolerance.
    Converged,
}

/// Stopping rule evaluated after each assignment + update pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stopping {
    pub iterations: usize,
    pub tolerance: f64,
}

impl Stopping {
    pub fn new(iterations: usize, tolerance: f64) -> Self {
        Self {
            iterations,
            tolerance,
        }
    }

    /// Sum of distances each centroid moved since `previous`.
    pub fn movement(previous: &[Color], current: &[Centroid]) -> f64 {
        previous
            .iter()
            .zip(current.iter())
            .map(|(old, new)| distance(old, &new.coord()))
            .sum()
    }

    pub fn exhausted(&self, iteration: usize) -> bool {
        iteration >= self.iterations
    }

    pub fn settled(&self, movement: f64) -> bool {
        movement <= self.tolerance
    }

    /// `None` keeps the run going. Iteration 0 means no pass has completed
    /// yet, so the run always continues.
    pub fn check(&self, movement: f64, iteration: usize) -> Option<Stop> {
        if iteration == 0 {
            None
        } else if self.settled(movement) {
            Some(Stop::Converged)
        } else if self.exhausted(iteration) {
            Some(Stop::Iterations)
        } else {
            None
        }
    }
}

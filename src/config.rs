use crate::error::{ClusterError, Result};

/* main.rs */
pub const DO_DOWNLOAD: bool = true;
pub const DO_EXPORT: bool = true;

pub const IMAGE_URLS: &[&str] = &[
    "http://res.cloudinary.com/hpcjvlhpl/image/upload/c_scale,w_200/v1528026818/pzs6xx1ruh15ddwonepl.jpg",
];
pub const RAW_PATH: &str = "raw_images";
pub const CSV_PATH: &str = "data";

pub const CLUSTERS: usize = 3;
pub const ITERATIONS: usize = 300;
pub const THREADS: usize = 6;

/* fetch.rs */
pub const DOWNLOADS: usize = 40;

/* stopping.rs */
pub const TOLERANCE: f64 = 2.0;

/// Parameters of one clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of centroids, `k`.
    pub clusters: usize,
    /// Iteration cap.
    pub iterations: usize,
    /// Total centroid movement at or below which the run has converged.
    pub tolerance: f64,
    /// Worker threads for the assignment pass.
    pub threads: usize,
    /// Fixes the initial centroids when set.
    pub seed: Option<u64>,
}

impl Config {
    pub fn new(clusters: usize, iterations: usize) -> Self {
        Self {
            clusters,
            iterations,
            tolerance: TOLERANCE,
            threads: 1,
            seed: None,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.clusters == 0 {
            return Err(ClusterError::InvalidConfiguration(
                "cluster count must be at least 1".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ClusterError::InvalidConfiguration(format!(
                "tolerance must be a finite non-negative number, got {}",
                self.tolerance
            )));
        }
        if self.threads == 0 {
            return Err(ClusterError::InvalidConfiguration(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(CLUSTERS, ITERATIONS).with_threads(THREADS)
    }
}

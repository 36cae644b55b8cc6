pub mod assign;
pub mod centroid;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod fetch;
pub mod grid;
pub mod stopping;

pub use centroid::Centroid;
pub use color::{distance, Color};
pub use config::Config;
pub use engine::{cluster, Clustering, Engine};
pub use error::{ClusterError, Result};
pub use grid::{Grid, Pixels};
pub use stopping::{Stop, Stopping};

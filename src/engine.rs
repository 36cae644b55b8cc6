use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    assign::assign,
    centroid::Centroid,
    color::{self, Color},
    config::Config,
    error::{ClusterError, Result},
    grid::Pixels,
    stopping::{Stop, Stopping},
};

/// Final state of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    pub centroids: Vec<Centroid>,
    pub iterations: usize,
    pub stop: Stop,
}

/// Lloyd's iteration over the colors of a pixel grid.
///
/// The engine owns its centroids and borrows the grid read-only. Each
/// [`step`](Engine::step) is one full assignment pass followed by one full
/// update pass; [`run`](Engine::run) steps until the stopping rule fires.
pub struct Engine<'a, P: Pixels + Sync + ?Sized> {
    grid: &'a P,
    centroids: Vec<Centroid>,
    stopping: Stopping,
    threads: usize,
    iteration: usize,
}

impl<'a, P: Pixels + Sync + ?Sized> Engine<'a, P> {
    /// Random initial centroids, seeded from `config.seed` or OS entropy.
    pub fn new(grid: &'a P, config: &Config) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::with_rng(grid, config, &mut rng)
    }

    /// Random initial centroids drawn from `rng`.
    ///
    /// Every channel is uniform over 0..=255 with no k-means++ spreading, so
    /// the result depends heavily on the draw.
    pub fn with_rng<R: Rng + ?Sized>(grid: &'a P, config: &Config, rng: &mut R) -> Result<Self> {
        config.validate()?;
        if grid.is_empty() {
            return Err(ClusterError::EmptyInput);
        }
        let coords = (0..config.clusters)
            .map(|_| color::random(rng))
            .collect::<Vec<_>>();
        Self::with_coords(grid, config, coords)
    }

    /// Starts from the given coordinates; `config.clusters` is ignored in
    /// favour of `coords.len()`.
    pub fn with_coords(grid: &'a P, config: &Config, coords: Vec<Color>) -> Result<Self> {
        if coords.is_empty() {
            return Err(ClusterError::InvalidConfiguration(
                "at least one initial centroid is required".to_string(),
            ));
        }
        Config {
            clusters: coords.len(),
            ..config.clone()
        }
        .validate()?;
        if grid.is_empty() {
            return Err(ClusterError::EmptyInput);
        }
        Ok(Self {
            grid,
            centroids: coords.into_iter().map(Centroid::from).collect(),
            stopping: Stopping::new(config.iterations, config.tolerance),
            threads: config.threads,
            iteration: 0,
        })
    }

    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// One assignment + update pass. Returns the total centroid movement.
    pub fn step(&mut self) -> f64 {
        let previous = self.centroids.iter().map(Centroid::coord).collect::<Vec<_>>();
        assign(self.grid, &mut self.centroids, self.threads);
        for centroid in self.centroids.iter_mut() {
            centroid.update();
        }
        self.iteration += 1;
        let movement = Stopping::movement(&previous, &self.centroids);
        log::debug!("iteration {} moved {:.3}", self.iteration, movement);
        movement
    }

    pub fn run(mut self) -> Clustering {
        let stop = loop {
            let movement = self.step();
            if let Some(stop) = self.stopping.check(movement, self.iteration) {
                break stop;
            }
        };
        log::info!(
            "{} centroids {:?} after {} iterations",
            self.centroids.len(),
            stop,
            self.iteration
        );
        Clustering {
            centroids: self.centroids,
            iterations: self.iteration,
            stop,
        }
    }
}

/// Clusters the colors of `grid` into `k` centroids.
pub fn cluster<P: Pixels + Sync + ?Sized>(
    grid: &P,
    k: usize,
    max_iter: usize,
    seed: Option<u64>,
) -> Result<Vec<Centroid>> {
    let config = Config {
        seed,
        ..Config::new(k, max_iter)
    };
    Ok(Engine::new(grid, &config)?.run().centroids)
}

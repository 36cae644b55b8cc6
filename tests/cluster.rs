use colormeans::{cluster, ClusterError, Config, Engine, Grid, Pixels, Stop};
use image::{Rgb, RgbImage};

fn pairs() -> Grid {
    Grid::from_rows(vec![
        vec![Rgb([0, 0, 0]), Rgb([0, 0, 1])],
        vec![Rgb([255, 255, 255]), Rgb([255, 255, 254])],
    ])
    .unwrap()
}

#[test]
fn four_pixels_two_clusters() {
    let grid = pairs();
    let starts = [
        [Rgb([10, 10, 10]), Rgb([240, 240, 240])],
        [Rgb([200, 180, 250]), Rgb([30, 0, 60])],
        [Rgb([0, 0, 0]), Rgb([128, 128, 128])],
    ];
    for start in starts {
        let result = Engine::with_coords(&grid, &Config::new(2, 50), start.to_vec()).unwrap().run();
        assert_eq!(result.stop, Stop::Converged);
        for centroid in result.centroids.iter() {
            assert_eq!(centroid.members().len(), 2);
            let dark = centroid.members().iter().filter(|c| c[0] == 0).count();
            if dark == 2 {
                assert_eq!(centroid.coord(), Rgb([0, 0, 0]));
            } else {
                assert_eq!(dark, 0);
                assert_eq!(centroid.coord(), Rgb([255, 255, 254]));
            }
        }
    }
}

#[test]
fn seeded_runs_account_for_every_pixel() {
    let grid = pairs();
    for seed in 0..32 {
        let centroids = cluster(&grid, 2, 50, Some(seed)).unwrap();
        assert_eq!(centroids.len(), 2);
        let total = centroids.iter().map(|c| c.members().len()).sum::<usize>();
        assert_eq!(total, grid.len(), "seed {}", seed);
        for centroid in centroids.iter() {
            if let Some(mean) = centroid.mean() {
                assert_eq!(centroid.coord(), mean, "seed {}", seed);
            }
        }
        assert_eq!(centroids, cluster(&grid, 2, 50, Some(seed)).unwrap());
    }
}

#[test]
fn single_cluster_settles_in_two_passes() {
    let image = RgbImage::from_fn(8, 5, |x, y| Rgb([(x * 30) as u8, (y * 50) as u8, ((x + y) * 10) as u8]));
    for seed in 0..16 {
        let result = Engine::new(&image, &Config::new(1, 100).with_seed(seed)).unwrap().run();
        assert!(result.iterations <= 2, "seed {} took {}", seed, result.iterations);
        assert_eq!(result.stop, Stop::Converged);
        assert_eq!(result.centroids[0].members().len(), 40);
    }
}

#[test]
fn more_clusters_than_colors() {
    let grid = Grid::new(2, 2, vec![Rgb([0, 0, 0]); 4]).unwrap();
    let engine = Engine::new(&grid, &Config::new(5, 50).with_seed(17)).unwrap();
    let initial = engine.centroids().iter().map(|c| c.coord()).collect::<Vec<_>>();

    let result = engine.run();
    assert_eq!(result.centroids.len(), 5);

    let winners = result.centroids.iter().filter(|c| !c.members().is_empty()).count();
    assert_eq!(winners, 1);
    for (centroid, coord) in result.centroids.iter().zip(initial) {
        if centroid.members().is_empty() {
            assert_eq!(centroid.coord(), coord);
        } else {
            assert_eq!(centroid.coord(), Rgb([0, 0, 0]));
            assert_eq!(centroid.members().len(), 4);
        }
    }
}

#[test]
fn zero_clusters_rejected() {
    let grid = pairs();
    assert!(matches!(
        cluster(&grid, 0, 50, None),
        Err(ClusterError::InvalidConfiguration(_))
    ));
}

#[test]
fn empty_grid_rejected() {
    let image = RgbImage::new(0, 4);
    assert_eq!(cluster(&image, 2, 50, Some(1)), Err(ClusterError::EmptyInput));
}

#[test]
fn threads_do_not_change_result() {
    let image = RgbImage::from_fn(31, 19, |x, y| Rgb([(x * 8) as u8, (y * 13) as u8, ((x * y) % 256) as u8]));
    let single = Engine::new(&image, &Config::new(4, 20).with_seed(5)).unwrap().run();
    let banded = Engine::new(&image, &Config::new(4, 20).with_seed(5).with_threads(6)).unwrap().run();
    assert_eq!(single, banded);
}

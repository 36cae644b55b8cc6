use std::{ops::Range, panic::resume_unwind};

use crate::{centroid::Centroid, color::{distance, Color}, grid::Pixels};

/// Index of the closest coordinate. Ties go to the lowest index.
pub fn nearest(color: &Color, coords: &[Color]) -> usize {
    let mut best = 0;
    let mut shortest = f64::INFINITY;
    for (i, coord) in coords.iter().enumerate() {
        let d = distance(color, coord);
        if d < shortest {
            shortest = d;
            best = i;
        }
    }
    best
}

/// Member lists for the pixels of `rows`, one list per coordinate.
fn collect<P: Pixels + ?Sized>(grid: &P, coords: &[Color], rows: Range<usize>) -> Vec<Vec<Color>> {
    let mut members = vec![Vec::new(); coords.len()];
    for y in rows {
        for x in 0..grid.width() {
            let color = grid.pixel(x, y);
            members[nearest(&color, coords)].push(color);
        }
    }
    members
}

/// Clears every centroid, then hands each pixel of `grid` to its nearest
/// centroid in row-major order.
///
/// With `threads > 1` the rows are split into contiguous bands, each band is
/// assigned on its own scoped thread against a frozen copy of the
/// coordinates, and the bands are merged top to bottom. Member lists come out
/// identical to the single-threaded pass.
pub fn assign<P: Pixels + Sync + ?Sized>(grid: &P, centroids: &mut [Centroid], threads: usize) {
    let coords = centroids.iter().map(Centroid::coord).collect::<Vec<_>>();

    for centroid in centroids.iter_mut() {
        centroid.clear();
    }

    let height = grid.height();
    let threads = threads.clamp(1, height.max(1));

    let bands = if threads == 1 {
        vec![collect(grid, &coords, 0..height)]
    } else {
        let size = height.div_ceil(threads);
        let coords = &coords;
        crossbeam::thread::scope(|s| {
            let handles = (0..height)
                .step_by(size)
                .map(|start| start..(start + size).min(height))
                .map(|rows| s.spawn(move |_| collect(grid, coords, rows)))
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|e| resume_unwind(e)))
                .collect::<Vec<_>>()
        })
        .unwrap_or_else(|e| resume_unwind(e))
    };

    for band in bands {
        for (centroid, members) in centroids.iter_mut().zip(band) {
            centroid.extend(members);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use rand::{rngs::SmallRng, SeedableRng};

    use crate::grid::Grid;

    fn noise(width: usize, height: usize, seed: u64) -> Grid {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pixels = (0..width * height)
            .map(|_| crate::color::random(&mut rng))
            .collect();
        Grid::new(width, height, pixels).unwrap()
    }

    #[test]
    fn nearest_prefers_first_on_tie() {
        let coords = [Rgb([0, 0, 10]), Rgb([0, 0, 30]), Rgb([0, 0, 10])];
        assert_eq!(nearest(&Rgb([0, 0, 20]), &coords), 0);
        assert_eq!(nearest(&Rgb([0, 0, 12]), &coords), 0);
        assert_eq!(nearest(&Rgb([0, 0, 29]), &coords), 1);
    }

    #[test]
    fn every_pixel_lands_once() {
        let grid = noise(17, 13, 3);
        let mut centroids = [Rgb([0, 0, 0]), Rgb([128, 128, 128]), Rgb([255, 0, 255])]
            .map(Centroid::from)
            .to_vec();
        assign(&grid, &mut centroids, 1);

        let total = centroids.iter().map(|c| c.members().len()).sum::<usize>();
        assert_eq!(total, grid.len());

        let coords = centroids.iter().map(Centroid::coord).collect::<Vec<_>>();
        for (i, centroid) in centroids.iter().enumerate() {
            for color in centroid.members() {
                assert_eq!(nearest(color, &coords), i);
            }
        }
    }

    #[test]
    fn assign_resets_previous_members() {
        let grid = noise(4, 4, 5);
        let mut centroids = vec![Centroid::from(Rgb([10, 10, 10]))];
        assign(&grid, &mut centroids, 1);
        assign(&grid, &mut centroids, 1);
        assert_eq!(centroids[0].members(), grid.pixels());
    }

    #[test]
    fn banded_pass_matches_sequential() {
        let grid = noise(9, 23, 11);
        let seeds = [Rgb([20, 40, 60]), Rgb([200, 10, 90]), Rgb([90, 220, 180]), Rgb([250, 250, 5])];
        let mut sequential = seeds.map(Centroid::from).to_vec();
        assign(&grid, &mut sequential, 1);

        for threads in [2, 3, 4, 8, 64] {
            let mut banded = seeds.map(Centroid::from).to_vec();
            assign(&grid, &mut banded, threads);
            assert_eq!(banded, sequential, "threads = {}", threads);
        }
    }
}

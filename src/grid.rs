use image::RgbImage;

use crate::{color::Color, error::{ClusterError, Result}};

/// A width x height source of colors, addressed by column `x` and row `y`.
pub trait Pixels {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn pixel(&self, x: usize, y: usize) -> Color;

    fn len(&self) -> usize {
        self.width() * self.height()
    }
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Colors of row `y`, left to right.
    fn row(&self, y: usize) -> Vec<Color> {
        (0..self.width()).map(|x| self.pixel(x, y)).collect()
    }
}

impl Pixels for RgbImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }
    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }
    fn pixel(&self, x: usize, y: usize) -> Color {
        *self.get_pixel(x as u32, y as u32)
    }
}

/// In-memory row-major grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Grid {
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(ClusterError::MalformedGrid {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Every row must have the width of the first one.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let actual = rows.iter().map(Vec::len).sum::<usize>();
        if rows.iter().any(|row| row.len() != width) {
            return Err(ClusterError::MalformedGrid {
                width,
                height,
                actual,
            });
        }
        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    /// A single row holding `pixels`.
    pub fn line(pixels: Vec<Color>) -> Self {
        Self {
            width: pixels.len(),
            height: 1,
            pixels,
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

impl Pixels for Grid {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }
    fn row(&self, y: usize) -> Vec<Color> {
        self.pixels[y * self.width..(y + 1) * self.width].to_vec()
    }
}

use image::Rgb;

use crate::color::Color;

/// Representative color of a cluster, plus the pixels assigned to it
/// in the current pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Centroid {
    coord: Color,
    members: Vec<Color>,
}

impl Centroid {
    pub fn coord(&self) -> Color {
        self.coord
    }
    pub fn members(&self) -> &[Color] {
        &self.members
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
    pub fn clear(&mut self) {
        self.members.clear();
    }
    pub fn absorb(&mut self, color: Color) {
        self.members.push(color);
    }
    pub fn extend(&mut self, colors: Vec<Color>) {
        self.members.extend(colors);
    }

    /// Per-channel mean of the members, truncated. `None` when unassigned.
    pub fn mean(&self) -> Option<Color> {
        if self.members.is_empty() {
            return None;
        }
        let mut sum = [0u64; 3];
        for color in self.members.iter() {
            for c in 0..3 {
                sum[c] += color[c] as u64;
            }
        }
        let n = self.members.len() as u64;
        Some(Rgb(sum.map(|s| (s / n) as u8)))
    }

    /// Moves `coord` to the mean of the members. An unassigned centroid keeps
    /// its coordinate.
    pub fn update(&mut self) {
        if let Some(mean) = self.mean() {
            self.coord = mean;
        }
    }
}

impl From<Color> for Centroid {
    fn from(coord: Color) -> Self {
        Self {
            coord,
            members: Vec::new(),
        }
    }
}

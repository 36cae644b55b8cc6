use std::{ffi::OsStr, fs, path::{Path, PathBuf}};
use anyhow::{Context, Result};
use image::Rgb;

use crate::grid::{Grid, Pixels};

/// `dir/<stem>.csv` for the image at `image`, so every image gets its own file.
pub fn csv_path(dir: &Path, image: &Path) -> PathBuf {
    let mut name = image.file_stem().unwrap_or_else(|| OsStr::new("pixels")).to_os_string();
    name.push(".csv");
    dir.join(name)
}

/// Writes one headerless `r,g,b` line per pixel, row-major.
pub fn write_pixels<P: Pixels + ?Sized>(grid: &P, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("cannot create {}", parent.display()))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("cannot create {}", path.display()))?;

    for y in 0..grid.height() {
        for color in grid.row(y) {
            writer.serialize(color.0)?;
        }
    }

    writer.flush()?;
    Ok(grid.len())
}

/// Reads a file written by [`write_pixels`] back as a single-row grid.
pub fn read_pixels(path: &Path) -> Result<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("cannot open {}", path.display()))?;

    let mut pixels = Vec::new();
    for (line, record) in reader.deserialize::<[u8; 3]>().enumerate() {
        let channels = record.with_context(|| format!("{}: bad pixel on line {}", path.display(), line + 1))?;
        pixels.push(Rgb(channels));
    }

    Ok(Grid::line(pixels))
}

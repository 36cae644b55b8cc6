use std::{path::Path, time::SystemTime};
use anyhow::Result;

use colormeans::{config::*, export, fetch, Config, Engine, Pixels};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let csv_dir = Path::new(CSV_PATH);

    if DO_DOWNLOAD {
        let time = SystemTime::now();
        let (paths, new) = fetch::download_images(IMAGE_URLS, RAW_PATH).await?;
        log::info!("{} images downloaded ({} total) in {:.3?}", new, paths.len(), time.elapsed()?);

        for path in paths.iter() {
            let time = SystemTime::now();
            let image = fetch::load_image(path)?;
            log::info!("{} decoded ({}x{}) in {:.3?}", path.display(), Pixels::width(&image), Pixels::height(&image), time.elapsed()?);

            if DO_EXPORT {
                let time = SystemTime::now();
                let csv = export::csv_path(csv_dir, path);
                let count = export::write_pixels(&image, &csv)?;
                log::info!("{} pixels written to {} in {:.3?}", count, csv.display(), time.elapsed()?);
            }

            report(&image, &config)?;
        }
    } else {
        for link in IMAGE_URLS.iter() {
            let time = SystemTime::now();
            let csv = export::csv_path(csv_dir, Path::new(&fetch::file_name(link)?));
            let grid = export::read_pixels(&csv)?;
            log::info!("{} pixels read from {} in {:.3?}", grid.len(), csv.display(), time.elapsed()?);

            report(&grid, &config)?;
        }
    }

    Ok(())
}

fn report<P: Pixels + Sync>(grid: &P, config: &Config) -> Result<()> {
    let time = SystemTime::now();
    let result = Engine::new(grid, config)?.run();
    log::info!("{} clusters found in {} iterations in {:.3?}", result.centroids.len(), result.iterations, time.elapsed()?);

    for centroid in result.centroids.iter() {
        let [r, g, b] = centroid.coord().0;
        println!("{} {} {} ({} pixels)", r, g, b, centroid.members().len());
    }

    Ok(())
}

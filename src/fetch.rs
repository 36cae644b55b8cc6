use std::{fs, path::{Path, PathBuf}, sync::atomic::{AtomicUsize, Ordering}};
use anyhow::{anyhow, Context, Result};
use futures::StreamExt;
use image::RgbImage;

use crate::config::DOWNLOADS;

/// File name an image is cached under: the last segment of its URL path.
pub fn file_name(link: &str) -> Result<String> {
    let url = url::Url::parse(link).with_context(|| format!("bad url {}", link))?;
    url.path_segments()
        .and_then(|segments| segments.last())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("url {} has no file name", link))
}

/// Downloads every link into `dst`, skipping files already cached there.
/// Returns the local paths in link order and the number of new downloads.
pub async fn download_images(links: &[&str], dst: &str) -> Result<(Vec<PathBuf>, usize)> {
    let client = reqwest::Client::new();
    let new = AtomicUsize::new(0);

    fs::create_dir_all(dst).with_context(|| format!("cannot create {}", dst))?;

    let paths = futures::stream::iter(links)
        .map(|&link| {
            let client = &client;
            let new = &new;
            async move {
                let path = Path::new(dst).join(file_name(link)?);

                if !path.exists() {
                    let resp = client.get(link).send().await?.error_for_status()?;
                    let bytes = resp.bytes().await?;
                    fs::write(&path, &bytes).with_context(|| format!("cannot write {}", path.display()))?;
                    new.fetch_add(1, Ordering::SeqCst);
                }

                Ok::<_, anyhow::Error>(path)
            }
        })
        .buffered(DOWNLOADS)
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<Vec<_>>>()?;

    Ok((paths, new.load(Ordering::SeqCst)))
}

/// Decodes an image file to 8-bit RGB, dropping any alpha channel.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).with_context(|| format!("cannot decode {}", path.display()))?;
    Ok(image.into_rgb8())
}

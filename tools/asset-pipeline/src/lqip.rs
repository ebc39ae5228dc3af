//! `lqip`: tiny blurred WebP placeholders shown while full images load.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::imaging::{self, Output};

pub const LQIP_WIDTH: u32 = 16;
const BLUR_SIGMA: f32 = 1.0;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub failed: usize,
    pub skipped_avif: usize,
}

pub fn run(images: &Path, out: &Path) -> Result<Summary> {
    fs::create_dir_all(out).with_context(|| format!("create {}", out.display()))?;
    let mut summary = Summary {
        skipped_avif: imaging::files_in(images, |n| imaging::has_extension(n, &["avif"])).len(),
        ..Summary::default()
    };
    if summary.skipped_avif > 0 {
        info!(count = summary.skipped_avif, "skipping AVIF sources");
    }

    for input in imaging::files_in(images, |n| imaging::has_extension(n, &["jpg", "jpeg", "png"])) {
        let name = imaging::file_name(&input);
        let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
        let output = out.join(format!("{stem}.webp"));
        match placeholder(&input, &output) {
            Ok(()) => {
                info!(out = %output.display(), "wrote placeholder");
                summary.written += 1;
            }
            Err(err) => {
                warn!(file = %input.display(), error = %err, "placeholder failed");
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}

fn placeholder(input: &Path, output: &Path) -> Result<()> {
    let img = imaging::load(input)?;
    let tiny = img.resize(LQIP_WIDTH, u32::MAX, FilterType::Triangle).blur(BLUR_SIGMA);
    imaging::write_atomic(&tiny, output, Output::WebP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::test_support::png;

    #[test]
    fn writes_sixteen_pixel_placeholders() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let images = dir.path().join("images");
        let out = dir.path().join("lqip");
        fs::create_dir_all(&images)?;
        png(&images, "S_1.png", 320, 160);

        let summary = run(&images, &out)?;
        assert_eq!(summary.written, 1);
        assert_eq!(image::image_dimensions(out.join("S_1.webp"))?, (16, 8));
        Ok(())
    }

    #[test]
    fn broken_files_do_not_stop_the_run() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let images = dir.path().join("images");
        let out = dir.path().join("lqip");
        fs::create_dir_all(&images)?;
        fs::write(images.join("broken.jpg"), b"not a jpeg")?;
        fs::write(images.join("OP2.avif"), b"skipped")?;
        png(&images, "ok.png", 64, 64);

        let summary = run(&images, &out)?;
        assert_eq!(
            summary,
            Summary { written: 1, failed: 1, skipped_avif: 1 }
        );
        assert!(out.join("ok.webp").exists());
        Ok(())
    }
}

//! `optimize`: shrink oversized source images in place.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::imaging::{self, Output};

pub const PRINT_COUNT: u32 = 32;
pub const PRINT_MAX_WIDTH: u32 = 1600;
pub const PRODUCT_MAX_WIDTH: u32 = 1200;
pub const HERO_MAX_WIDTH: u32 = 1920;
pub const HERO_JPEG_QUALITY: u8 = 80;
pub const TOUCH_ICON_SIZE: u32 = 180;

const PRODUCT_PREFIXES: &[&str] = &["Bedroom", "Tv", "S", "Table", "C", "Dining", "CH"];

/// Legacy photo names and the catalog file they become.
const JPEG_RENAMES: &[(&str, &str)] = &[
    ("Sofa 7.jpeg", "S_7.webp"),
    ("Sofa 8.jpeg", "S_8.webp"),
    ("Sofa 9.jpeg", "S_9.webp"),
    ("Wall 1.jpeg", "Wall1.webp"),
    ("Wall 2.jpeg", "Wall2.webp"),
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub prints: usize,
    pub prints_missing: usize,
    pub prints_archived: usize,
    pub products: usize,
    pub renamed_jpegs: usize,
    pub hero: bool,
    pub touch_icon: bool,
    pub skipped_avif: usize,
}

/// Run every optimisation step against `images` and `public`.
pub fn run(images: &Path, public: &Path) -> Result<Summary> {
    if !images.is_dir() {
        anyhow::bail!("images directory {} does not exist", images.display());
    }
    let mut summary = Summary::default();
    optimize_prints(images, &mut summary)?;
    optimize_products(images, &mut summary)?;
    convert_jpegs(images, &mut summary)?;
    summary.skipped_avif = count_avif(images) + count_avif(&public.join("ops"));
    if summary.skipped_avif > 0 {
        info!(count = summary.skipped_avif, "skipping AVIF assets");
    }
    summary.hero = optimize_hero(&public.join("images").join("hero-poster.jpg"))?;
    summary.touch_icon = ensure_touch_icon(&public.join("images"))?;
    Ok(summary)
}

/// `12PR.png` style names.
pub fn is_print_png(name: &str) -> bool {
    name.to_ascii_lowercase()
        .strip_suffix("pr.png")
        .is_some_and(|stem| !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_digit()))
}

/// `Bedroom_3.png`, `S_12.5.png`, `ch_1.png` style names.
pub fn is_product_png(name: &str) -> bool {
    let Some((prefix, rest)) = name.split_once('_') else {
        return false;
    };
    if !PRODUCT_PREFIXES.iter().any(|p| p.eq_ignore_ascii_case(prefix)) {
        return false;
    }
    let Some((number, ext)) = rest.rsplit_once('.') else {
        return false;
    };
    if !ext.eq_ignore_ascii_case("png") {
        return false;
    }
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match number.split_once('.') {
        Some((whole, frac)) => digits(whole) && digits(frac),
        None => digits(number),
    }
}

fn with_extension(dir: &Path, name: &str, ext: &str) -> PathBuf {
    let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    dir.join(format!("{stem}.{ext}"))
}

fn to_webp(input: &Path, output: &Path, max_width: u32) -> Result<()> {
    let img = imaging::fit_width(imaging::load(input)?, max_width);
    imaging::write_atomic(&img, output, Output::WebP)
}

fn optimize_prints(images: &Path, summary: &mut Summary) -> Result<()> {
    let originals = images.join("originals").join("prints");
    fs::create_dir_all(&originals)
        .with_context(|| format!("create {}", originals.display()))?;

    for n in 1..=PRINT_COUNT {
        let name = format!("{n}PR.png");
        let input = [images.join(&name), originals.join(&name)]
            .into_iter()
            .find(|p| p.exists());
        let Some(input) = input else {
            warn!(file = %name, "print source missing");
            summary.prints_missing += 1;
            continue;
        };
        let output = images.join(format!("{n}PR.webp"));
        info!(from = %imaging::file_name(&input), to = %imaging::file_name(&output), "print");
        to_webp(&input, &output, PRINT_MAX_WIDTH)?;
        summary.prints += 1;
    }

    for leftover in imaging::files_in(images, is_print_png) {
        let target = originals.join(imaging::file_name(&leftover));
        if !target.exists() {
            fs::rename(&leftover, &target)
                .with_context(|| format!("archive {}", leftover.display()))?;
            summary.prints_archived += 1;
        }
    }
    Ok(())
}

fn optimize_products(images: &Path, summary: &mut Summary) -> Result<()> {
    for input in imaging::files_in(images, is_product_png) {
        let output = with_extension(images, imaging::file_name(&input), "webp");
        info!(from = %imaging::file_name(&input), to = %imaging::file_name(&output), "product");
        to_webp(&input, &output, PRODUCT_MAX_WIDTH)?;
        fs::remove_file(&input).with_context(|| format!("remove {}", input.display()))?;
        summary.products += 1;
    }
    Ok(())
}

fn convert_jpegs(images: &Path, summary: &mut Summary) -> Result<()> {
    for (from, to) in JPEG_RENAMES {
        let input = images.join(from);
        if !input.exists() {
            continue;
        }
        info!(from, to, "jpeg to webp");
        to_webp(&input, &images.join(to), PRODUCT_MAX_WIDTH)?;
        fs::remove_file(&input).with_context(|| format!("remove {}", input.display()))?;
        summary.renamed_jpegs += 1;
    }
    Ok(())
}

fn count_avif(dir: &Path) -> usize {
    imaging::files_in(dir, |n| imaging::has_extension(n, &["avif"])).len()
}

fn optimize_hero(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    info!(file = %path.display(), "hero poster");
    let img = imaging::fit_width(imaging::load(path)?, HERO_MAX_WIDTH);
    imaging::write_atomic(&img, path, Output::Jpeg { quality: HERO_JPEG_QUALITY })?;
    Ok(true)
}

fn ensure_touch_icon(public_images: &Path) -> Result<bool> {
    let out = public_images.join("apple-touch-icon.png");
    if out.exists() {
        return Ok(false);
    }
    let logo = public_images.join("instyle-logo.png");
    if !logo.exists() {
        warn!(logo = %logo.display(), "no logo to build apple-touch-icon.png from");
        return Ok(false);
    }
    info!(out = %out.display(), "generating touch icon");
    let icon = imaging::contain_square(&imaging::load(&logo)?, TOUCH_ICON_SIZE);
    imaging::write_atomic(&icon, &out, Output::Png)?;
    Ok(true)
}

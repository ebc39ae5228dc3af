//! Decode, resize and atomically write images.

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader, Rgba, RgbaImage};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    WebP,
    Png,
    Jpeg { quality: u8 },
}

/// Decode `path` and apply its EXIF orientation.
pub fn load(path: &Path) -> Result<DynamicImage> {
    let mut decoder = ImageReader::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .with_guessed_format()?
        .into_decoder()
        .with_context(|| format!("decode {}", path.display()))?;
    let orientation = decoder.orientation()?;
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Scale down to `max_width`, keeping the aspect ratio. Never enlarges.
pub fn fit_width(img: DynamicImage, max_width: u32) -> DynamicImage {
    if img.width() <= max_width {
        return img;
    }
    img.resize(max_width, u32::MAX, FilterType::Lanczos3)
}

/// Fit inside a `size`×`size` transparent square, centered.
pub fn contain_square(img: &DynamicImage, size: u32) -> DynamicImage {
    let fitted = img.resize(size, size, FilterType::Lanczos3).to_rgba8();
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 0]));
    let x = i64::from((size - fitted.width()) / 2);
    let y = i64::from((size - fitted.height()) / 2);
    imageops::overlay(&mut canvas, &fitted, x, y);
    DynamicImage::ImageRgba8(canvas)
}

fn tmp_path(out: &Path) -> PathBuf {
    let mut name = out.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn encode(img: &DynamicImage, path: &Path, format: Output) -> Result<()> {
    let mut writer =
        BufWriter::new(File::create(path).with_context(|| format!("create {}", path.display()))?);
    match format {
        Output::WebP => {
            DynamicImage::ImageRgba8(img.to_rgba8()).write_to(&mut writer, ImageFormat::WebP)?
        }
        Output::Png => img.write_with_encoder(PngEncoder::new_with_quality(
            &mut writer,
            CompressionType::Best,
            PngFilter::Adaptive,
        ))?,
        Output::Jpeg { quality } => {
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))?
        }
    }
    writer.flush()?;
    Ok(())
}

/// Encode into `<out>.tmp`, then rename over `out`. A failed write removes
/// the temporary file and leaves `out` untouched.
pub fn write_atomic(img: &DynamicImage, out: &Path, format: Output) -> Result<()> {
    let tmp = tmp_path(out);
    let written = encode(img, &tmp, format).and_then(|()| {
        fs::rename(&tmp, out)
            .with_context(|| format!("rename {} -> {}", tmp.display(), out.display()))
    });
    if let Err(err) = written {
        if tmp.exists() {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                tracing::warn!(tmp = %tmp.display(), error = %cleanup, "temporary file left behind");
            }
        }
        return Err(err);
    }
    tracing::debug!(out = %out.display(), "wrote image");
    Ok(())
}

/// Regular files directly inside `dir` whose name satisfies `keep`,
/// sorted by name. A missing directory yields nothing.
pub fn files_in(dir: &Path, keep: impl Fn(&str) -> bool) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_str().is_some_and(&keep))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

pub fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

pub fn has_extension(name: &str, extensions: &[&str]) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Write a solid-colour PNG fixture.
    pub(crate) fn png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([180, 120, 60, 255]))
            .save(&path)
            .unwrap();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::png;
    use super::*;

    #[test]
    fn fit_width_never_enlarges() {
        let small = DynamicImage::new_rgba8(300, 200);
        assert_eq!(fit_width(small, 1200).width(), 300);

        let big = DynamicImage::new_rgba8(2400, 1200);
        let fitted = fit_width(big, 1200);
        assert_eq!((fitted.width(), fitted.height()), (1200, 600));
    }

    #[test]
    fn contain_square_centers_on_transparency() {
        let wide = DynamicImage::ImageRgba8(RgbaImage::from_pixel(400, 200, Rgba([0, 0, 0, 255])));
        let icon = contain_square(&wide, 180).to_rgba8();
        assert_eq!(icon.dimensions(), (180, 180));
        assert_eq!(icon.get_pixel(0, 0)[3], 0);
        assert_eq!(icon.get_pixel(90, 90)[3], 255);
    }

    #[test]
    fn write_atomic_leaves_no_tmp_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let src = png(dir.path(), "a.png", 40, 30);
        let out = dir.path().join("a.webp");
        write_atomic(&load(&src)?, &out, Output::WebP)?;

        assert!(out.exists());
        assert!(!tmp_path(&out).exists());
        assert_eq!(image::image_dimensions(&out)?, (40, 30));
        Ok(())
    }

    #[test]
    fn failed_encode_removes_tmp_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("wide.jpg");
        // JPEG caps each side at 65535 pixels.
        let wide = DynamicImage::new_rgb8(70_000, 1);

        assert!(write_atomic(&wide, &out, Output::Jpeg { quality: 80 }).is_err());
        assert!(!tmp_path(&out).exists());
        assert!(!out.exists());
        Ok(())
    }

    #[test]
    fn files_in_filters_and_sorts() -> Result<()> {
        let dir = tempfile::tempdir()?;
        png(dir.path(), "b.png", 2, 2);
        png(dir.path(), "a.PNG", 2, 2);
        fs::write(dir.path().join("notes.txt"), "x")?;
        fs::create_dir(dir.path().join("nested.png"))?;

        let names: Vec<String> = files_in(dir.path(), |n| has_extension(n, &["png"]))
            .iter()
            .map(|p| file_name(p).to_owned())
            .collect();
        assert_eq!(names, vec!["a.PNG", "b.png"]);
        assert!(files_in(&dir.path().join("missing"), |_| true).is_empty());
        Ok(())
    }
}

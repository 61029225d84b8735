//! PNG export of the rendered card
//!
//! Export runs off the update loop on an owned [`ExportJob`], so it can never
//! mutate the card. Every failure (font, render, encode, write) comes back as
//! an error for the caller to surface; nothing here panics.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fontdue::{Font, FontSettings};

use crate::model::{CardSnapshot, Mode};
use crate::theme::Theme;
use crate::view::{render_to_buffer, CardLayout, GlyphCache, TextPainter};

/// Fonts tried in order when no font is configured
pub const FALLBACK_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Everything needed to produce one image, detached from the live model
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub snapshot: CardSnapshot,
    pub theme: Theme,
    /// Explicit font; `None` searches [`FALLBACK_FONTS`]
    pub font_path: Option<PathBuf>,
    pub scale: f32,
    pub path: PathBuf,
}

/// Load the configured font, or the first fallback font that exists
pub fn load_font(configured: Option<&Path>) -> Result<Font> {
    let path = match configured {
        Some(path) => path.to_path_buf(),
        None => FALLBACK_FONTS
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
            .context("no font found; set font_path in config.yaml or pass --font")?,
    };

    let bytes =
        std::fs::read(&path).with_context(|| format!("reading font {}", path.display()))?;
    let font = Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow::anyhow!("parsing font {}: {}", path.display(), e))?;
    tracing::debug!("Loaded export font from {}", path.display());
    Ok(font)
}

/// Render a snapshot to an RGBA image
pub fn render_image(
    snapshot: &CardSnapshot,
    theme: &Theme,
    font: &Font,
    scale: f32,
) -> Result<image::RgbaImage> {
    let with_banner = snapshot.mode == Mode::Play && snapshot.status.banner().is_some();
    let layout = CardLayout::compute(scale, with_banner);

    let mut glyph_cache = GlyphCache::new();
    let mut painter = TextPainter::new(font, &mut glyph_cache);
    let buffer = render_to_buffer(Some(&mut painter), snapshot, theme, &layout);

    argb_to_image(&buffer, layout.width, layout.height)
}

/// Convert an ARGB (0xAARRGGBB) buffer into an RGBA image
pub fn argb_to_image(buffer: &[u32], width: u32, height: u32) -> Result<image::RgbaImage> {
    let mut rgba = Vec::with_capacity(buffer.len() * 4);
    for &pixel in buffer {
        rgba.push(((pixel >> 16) & 0xFF) as u8);
        rgba.push(((pixel >> 8) & 0xFF) as u8);
        rgba.push((pixel & 0xFF) as u8);
        rgba.push(((pixel >> 24) & 0xFF) as u8);
    }

    image::ImageBuffer::from_raw(width, height, rgba).context("failed to create image buffer")
}

/// Render and write the job's PNG, returning the written path
pub fn export_png(job: &ExportJob) -> Result<PathBuf> {
    let font = load_font(job.font_path.as_deref())?;
    let img = render_image(&job.snapshot, &job.theme, &font, job.scale)?;

    if let Some(parent) = job.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    img.save_with_format(&job.path, image::ImageFormat::Png)
        .with_context(|| format!("saving PNG to {}", job.path.display()))?;

    tracing::info!(
        path = %job.path.display(),
        width = img.width(),
        height = img.height(),
        "Exported card image"
    );
    Ok(job.path.clone())
}

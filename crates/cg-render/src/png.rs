use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cg_core::color::Color;
use image::{ImageFormat, RgbaImage};
use rayon::prelude::*;

use crate::layout::GridLayout;

/// Remplit une image RGBA avec les couleurs, ligne par ligne.
///
/// Le pixel `(x, y)` reçoit `colors[x + y * width]`. Les cellules sans
/// couleur restent noires transparentes ; les couleurs en trop sont ignorées.
/// Parallélisé par ligne.
///
/// # Example
/// ```
/// use cg_core::color::Color;
/// use cg_render::{layout::GridLayout, png::render};
/// let colors = vec![Color::new(255, 0, 0); 4];
/// let img = render(&colors, GridLayout::for_count(4));
/// assert_eq!(img.dimensions(), (2, 2));
/// assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
/// ```
#[must_use]
pub fn render(colors: &[Color], layout: GridLayout) -> RgbaImage {
    let mut img = RgbaImage::new(layout.width, layout.height);
    if layout.cells() == 0 {
        return img;
    }
    if colors.len() > layout.cells() {
        log::warn!(
            "{} couleurs pour {} cellules : {} ignorées",
            colors.len(),
            layout.cells(),
            colors.len() - layout.cells()
        );
    }

    let width = layout.width as usize;
    let stride = width * 4;
    img.par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let start = y * width;
            let end = (start + width).min(colors.len());
            if start >= end {
                return;
            }
            for (px, color) in row.chunks_exact_mut(4).zip(&colors[start..end]) {
                px.copy_from_slice(&color.to_rgba());
            }
        });
    img
}

/// Chemin de sortie `{dir}/{name}_{levels}.png`.
///
/// # Example
/// ```
/// use std::path::Path;
/// use cg_render::png::output_path;
/// let p = output_path(Path::new("/tmp"), "linear", 64);
/// assert_eq!(p, Path::new("/tmp/linear_64.png"));
/// ```
#[must_use]
pub fn output_path(dir: &Path, name: &str, levels: u16) -> PathBuf {
    dir.join(format!("{name}_{levels}.png"))
}

/// Écrit l'image en PNG, en créant le dossier parent si besoin.
///
/// # Errors
/// Returns an error if the directory cannot be created or encoding fails.
pub fn write_png(path: &Path, img: &RgbaImage) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Impossible de créer {}", parent.display()))?;
    }
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    log::info!(
        "Image {}x{} écrite : {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}

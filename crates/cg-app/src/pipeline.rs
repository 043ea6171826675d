use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use cg_cluster::{ClusterConfig, CountCheck, cluster_colors};
use cg_core::collection::ColorCollection;
use cg_core::color::Color;
use cg_core::config::{GeneratorConfig, Strategy};
use cg_core::depth::BitDepth;
use cg_core::traits::ColorSpace;
use cg_render::{GridLayout, output_path, render, write_png};

/// Nom de fichier d'une stratégie : `distance_{seuil}` pour le mode
/// clusterisé, le nom du générateur sinon.
#[must_use]
pub fn image_name(strategy: Strategy, config: &GeneratorConfig) -> String {
    match strategy {
        Strategy::Distance => format!("distance_{}", config.distance.trunc() as i64),
        other => other.to_string(),
    }
}

/// Génère, arrange et écrit l'image d'une stratégie.
///
/// Les messages destinés à l'utilisateur (annonce, progression) vont sur
/// `out` ; le reste passe par `log`.
///
/// # Errors
/// Returns an error on invalid depth, invalid clustering configuration,
/// or if the PNG cannot be written.
///
/// # Example
/// ```no_run
/// use cg_app::pipeline::run_strategy;
/// use cg_core::config::{GeneratorConfig, Strategy};
/// let path = run_strategy(Strategy::Linear, &GeneratorConfig::default(), &mut std::io::stdout()).unwrap();
/// ```
pub fn run_strategy(strategy: Strategy, config: &GeneratorConfig, out: &mut impl Write) -> Result<PathBuf> {
    let depth = BitDepth::new(config.depth_bits)?;
    let layout = GridLayout::for_count(depth.color_count());

    let detail = match strategy {
        Strategy::Sorted => " (stable sort, additive method)",
        Strategy::Distance => " (this may take a while)",
        _ => "",
    };
    writeln!(
        out,
        "Generating {}x{} {strategy} image{detail}...",
        layout.width, layout.height
    )?;

    let mut source = cg_source::create_color_space(strategy, config.seed);
    let generated = source.generate(depth);

    let colors = if strategy == Strategy::Distance {
        cluster_ordering(generated, config, out)?
    } else {
        generated
    };

    let path = output_path(&config.output_dir, &image_name(strategy, config), depth.levels());
    writeln!(out, "Writing {}", path.display())?;
    write_png(&path, &render(&colors, layout))?;
    Ok(path)
}

/// Clusterise la collection et rend l'ordre aplati des couleurs.
///
/// Un écart de comptage est signalé mais n'empêche pas l'écriture.
fn cluster_ordering(colors: Vec<Color>, config: &GeneratorConfig, out: &mut impl Write) -> Result<Vec<Color>> {
    let collection = Arc::new(ColorCollection::new(colors));
    let mut last_percent = None;

    let outcome = cluster_colors(&collection, &ClusterConfig::from(config), |p| {
        let percent = p.percent().floor() as u32;
        if last_percent != Some(percent) {
            last_percent = Some(percent);
            // Affichage best-effort : une erreur de terminal n'arrête pas le run
            let _ = write!(
                out,
                "Processed colors: {} of {} ({:3.2}%)\r",
                p.processed,
                p.total,
                p.percent()
            );
            let _ = out.flush();
        }
    })?;
    writeln!(out)?;

    if let CountCheck::Mismatch { got, expected } = outcome.check() {
        log::warn!("Comptage incohérent après clustering : {got} != {expected}");
    }
    Ok(outcome.colors(&collection))
}

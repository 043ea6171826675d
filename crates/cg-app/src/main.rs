use std::io;

use anyhow::Result;
use cg_app::{cli, menu, pipeline};
use cg_core::config::GeneratorConfig;
use clap::Parser;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    // 3. Charger la config puis appliquer les overrides CLI
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    menu::print_stat(&mut out, &config)?;

    // 4. One-shot ou menu interactif
    if let Some(strategy) = cli.strategy {
        let path = pipeline::run_strategy(strategy, &config, &mut out)?;
        log::info!("Terminé : {}", path.display());
        return Ok(());
    }

    menu::run_menu(io::stdin().lock(), &mut out, &config)
}

/// Config fichier si présente, défauts sinon.
fn resolve_config(cli: &cli::Cli) -> Result<GeneratorConfig> {
    if cli.config.exists() {
        cg_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(GeneratorConfig::default())
    }
}

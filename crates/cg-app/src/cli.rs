use std::path::PathBuf;

use cg_core::config::{ClaimMode, GeneratorConfig, Strategy};
use clap::Parser;

/// chromagrid: every color of an RGB bit depth, in one image.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Dossier où les images sont écrites. Défaut : dossier courant.
    #[arg(short = 'f', long)]
    pub output_dir: Option<PathBuf>,

    /// Seuil de distance du mode clusterisé. Grand = rapide mais bruité.
    #[arg(short, long)]
    pub distance: Option<f64>,

    /// Bits par canal (1 à 8).
    #[arg(short = 'c', long)]
    pub depth: Option<u8>,

    /// Nombre de clusterers concurrents. Défaut : 2 × cœurs.
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Partage de la collection entre workers : shared, partitioned.
    #[arg(long)]
    pub claim_mode: Option<ClaimMode>,

    /// Graine RNG des stratégies aléatoires.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Génère une seule image puis quitte : linear, shuffled, random, sorted, distance.
    /// Sans cette option, le menu interactif démarre.
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Applique les options passées en ligne de commande par-dessus la config.
    pub fn apply_overrides(&self, config: &mut GeneratorConfig) {
        if let Some(ref dir) = self.output_dir {
            config.output_dir.clone_from(dir);
        }
        if let Some(v) = self.distance {
            config.distance = v;
        }
        if let Some(v) = self.depth {
            config.depth_bits = v;
        }
        if let Some(v) = self.workers {
            config.workers = v;
        }
        if let Some(v) = self.claim_mode {
            config.claim_mode = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from(["chromagrid", "-f", "out", "-d", "40", "-c", "4", "-w", "3"])
            .unwrap();
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.depth, Some(4));
        assert_eq!(cli.workers, Some(3));
        assert!(cli.strategy.is_none());
    }

    #[test]
    fn parses_strategy_and_mode() {
        let cli = Cli::try_parse_from([
            "chromagrid",
            "--strategy",
            "distance",
            "--claim-mode",
            "partitioned",
        ])
        .unwrap();
        assert_eq!(cli.strategy, Some(Strategy::Distance));
        assert_eq!(cli.claim_mode, Some(ClaimMode::Partitioned));
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["chromagrid", "-s", "spiral"]).is_err());
    }

    #[test]
    fn overrides_only_given_values() {
        let cli = Cli::try_parse_from(["chromagrid", "-d", "12.5"]).unwrap();
        let mut config = GeneratorConfig::default();
        let before = config.clone();
        cli.apply_overrides(&mut config);
        assert!((config.distance - 12.5).abs() < f64::EPSILON);
        assert_eq!(config.depth_bits, before.depth_bits);
        assert_eq!(config.workers, before.workers);
    }
}

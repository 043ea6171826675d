use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::depth::MAX_BITS;
use crate::error::CoreError;

/// Seuil de distance par défaut. Grand = rapide mais bruité.
pub const DEFAULT_DISTANCE: f64 = 125.0;

/// Profondeur par défaut : 6 bits, soit une image 512×512.
pub const DEFAULT_DEPTH_BITS: u8 = 6;

/// Configuration complète d'une génération.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use cg_core::config::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert_eq!(config.depth_bits, 6);
/// assert!(config.workers >= 2);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GeneratorConfig {
    /// Dossier où les PNG sont écrits.
    pub output_dir: PathBuf,
    /// Seuil de distance euclidienne RGB du mode clusterisé.
    pub distance: f64,
    /// Bits par canal [1, 8].
    pub depth_bits: u8,
    /// Nombre de clusterers concurrents.
    pub workers: usize,
    /// Politique de réclamation entre workers.
    pub claim_mode: ClaimMode,
    /// Graine RNG pour les stratégies aléatoires. `None` = entropie système.
    pub seed: Option<u64>,
}

/// Politique de partage de la collection entre clusterers.
///
/// # Example
/// ```
/// use cg_core::config::ClaimMode;
/// assert_eq!(ClaimMode::default(), ClaimMode::Shared);
/// assert_eq!("partitioned".parse::<ClaimMode>().unwrap(), ClaimMode::Partitioned);
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClaimMode {
    /// Tous les workers scannent toute la collection et se volent le
    /// travail. Appartenance non déterministe dès deux workers.
    #[default]
    Shared,
    /// Chaque worker reçoit une plage d'index disjointe avant le
    /// clustering. Partition déterministe pour un nombre de workers fixé.
    Partitioned,
}

impl FromStr for ClaimMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shared" => Ok(Self::Shared),
            "partitioned" => Ok(Self::Partitioned),
            _ => Err(CoreError::Config(format!("mode de réclamation inconnu '{s}'"))),
        }
    }
}

/// Stratégie d'arrangement des couleurs dans la grille.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Boucles imbriquées r, g, b.
    Linear,
    /// Boucles imbriquées sur des permutations aléatoires (crée des bandes).
    Shuffled,
    /// Mélange complet (bruit).
    Random,
    /// Tri stable par luminosité additive.
    Sorted,
    /// Clusters de similarité, calculés en parallèle.
    Distance,
}

impl Strategy {
    pub const ALL: [Self; 5] = [
        Self::Linear,
        Self::Shuffled,
        Self::Random,
        Self::Sorted,
        Self::Distance,
    ];

    /// Libellé du menu interactif.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear colors",
            Self::Shuffled => "Shuffled colors (random by channel, creates bands)",
            Self::Random => "Random colors (creates noise)",
            Self::Sorted => "Simple sorted colors",
            Self::Distance => "Distance sorted colors",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Linear => "linear",
            Self::Shuffled => "shuffled",
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Distance => "distance",
        };
        f.write_str(s)
    }
}

impl FromStr for Strategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownStrategy { name: s.to_string() })
    }
}

/// 2 × le parallélisme disponible, comme le pool historique.
#[must_use]
pub fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get) * 2
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            distance: DEFAULT_DISTANCE,
            depth_bits: DEFAULT_DEPTH_BITS,
            workers: default_workers(),
            claim_mode: ClaimMode::Shared,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Clamp numeric fields to their valid ranges.
    /// Called after TOML deserialization. The distance is left untouched:
    /// a negative threshold is a configuration error, reported at fan-out.
    pub fn clamp_all(&mut self) {
        self.depth_bits = self.depth_bits.clamp(1, MAX_BITS);
        self.workers = self.workers.max(1);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    generator: Option<GeneratorSection>,
    cluster: Option<ClusterSection>,
}

#[derive(Deserialize)]
struct GeneratorSection {
    output_dir: Option<PathBuf>,
    depth_bits: Option<u8>,
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct ClusterSection {
    distance: Option<f64>,
    workers: Option<usize>,
    claim_mode: Option<ClaimMode>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use cg_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))
}

/// Parse un contenu TOML déjà chargé.
///
/// # Errors
/// Returns an error if the TOML is malformed.
pub fn parse_config(content: &str) -> Result<GeneratorConfig> {
    let file: ConfigFile = toml::from_str(content)?;
    let mut config = GeneratorConfig::default();

    if let Some(g) = file.generator {
        if let Some(v) = g.output_dir {
            config.output_dir = v;
        }
        if let Some(v) = g.depth_bits {
            config.depth_bits = v;
        }
        if g.seed.is_some() {
            config.seed = g.seed;
        }
    }

    if let Some(c) = file.cluster {
        if let Some(v) = c.distance {
            config.distance = v;
        }
        if let Some(v) = c.workers {
            config.workers = v;
        }
        if let Some(v) = c.claim_mode {
            config.claim_mode = v;
        }
    }

    config.clamp_all();
    log::debug!("Config chargée : {config:?}");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = parse_config("[cluster]\ndistance = 40.0\n").unwrap();
        assert!((config.distance - 40.0).abs() < f64::EPSILON);
        assert_eq!(config.depth_bits, DEFAULT_DEPTH_BITS);
        assert_eq!(config.claim_mode, ClaimMode::Shared);
    }

    #[test]
    fn clamps_out_of_range_values() {
        let config =
            parse_config("[generator]\ndepth_bits = 12\n[cluster]\nworkers = 0\n").unwrap();
        assert_eq!(config.depth_bits, MAX_BITS);
        assert_eq!(config.workers, 1);
    }

    #[test]
    fn reads_claim_mode_and_seed() {
        let config = parse_config(
            "[generator]\nseed = 42\n[cluster]\nclaim_mode = \"partitioned\"\n",
        )
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.claim_mode, ClaimMode::Partitioned);
    }

    #[test]
    fn shipped_default_matches_defaults() {
        let config = parse_config(include_str!("../../../config/default.toml")).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_config("[cluster\n").is_err());
    }

    #[test]
    fn load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\noutput_dir = \"out\"\ndepth_bits = 4").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.depth_bits, 4);
    }

    #[test]
    fn strategy_names_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
        assert!("bogus".parse::<Strategy>().is_err());
    }
}

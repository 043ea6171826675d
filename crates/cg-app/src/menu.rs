use std::io::{BufRead, Write};

use anyhow::Result;
use cg_core::config::{GeneratorConfig, Strategy};

use crate::pipeline::run_strategy;

/// Affiche le résumé de la configuration active.
///
/// # Errors
/// Returns an error if `out` cannot be written.
pub fn print_stat(out: &mut impl Write, config: &GeneratorConfig) -> std::io::Result<()> {
    writeln!(out, "Using {} workers ({:?})", config.workers, config.claim_mode)?;
    writeln!(out, "Writing image to {}", config.output_dir.display())
}

/// Affiche les choix du menu.
///
/// # Errors
/// Returns an error if `out` cannot be written.
pub fn print_menu(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "Please choose from the following options (press 'q' to quit):"
    )?;
    for (i, strategy) in Strategy::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, strategy.label())?;
    }
    writeln!(out)
}

/// Traduit une saisie du menu en stratégie (`"1"` → `Linear`, …).
#[must_use]
pub fn parse_choice(choice: &str) -> Option<Strategy> {
    let n: usize = choice.parse().ok()?;
    n.checked_sub(1).and_then(|i| Strategy::ALL.get(i).copied())
}

/// Boucle interactive : une ligne par choix jusqu'à `q` ou EOF.
///
/// Un échec de génération est journalisé et la boucle continue.
///
/// # Errors
/// Returns an error only if reading input or writing output fails.
pub fn run_menu(mut input: impl BufRead, out: &mut impl Write, config: &GeneratorConfig) -> Result<()> {
    let mut line = String::new();
    loop {
        print_menu(out)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("Fin de l'entrée standard, sortie du menu.");
            return Ok(());
        }
        let choice = line.trim();

        if choice == "q" {
            writeln!(out, "Exiting.")?;
            return Ok(());
        }
        match parse_choice(choice) {
            Some(strategy) => {
                if let Err(e) = run_strategy(strategy, config, out) {
                    log::error!("Échec de la stratégie {strategy} : {e:#}");
                }
            }
            None => writeln!(out, "'{choice}' is not a valid choice, please try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn choices_map_to_strategies() {
        assert_eq!(parse_choice("1"), Some(Strategy::Linear));
        assert_eq!(parse_choice("5"), Some(Strategy::Distance));
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("6"), None);
        assert_eq!(parse_choice("x"), None);
    }

    #[test]
    fn menu_runs_choices_until_quit() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            output_dir: dir.path().to_path_buf(),
            depth_bits: 2,
            workers: 2,
            ..GeneratorConfig::default()
        };
        let mut out = Vec::new();
        run_menu(Cursor::new("1\nnope\n4\nq\n5\n"), &mut out, &config).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("'nope' is not a valid choice, please try again."));
        assert!(text.ends_with("Exiting.\n"));
        assert!(dir.path().join("linear_4.png").exists());
        assert!(dir.path().join("sorted_4.png").exists());
        // Rien après 'q'
        assert!(!dir.path().join("distance_125_4.png").exists());
    }

    #[test]
    fn eof_leaves_the_menu() {
        let mut out = Vec::new();
        run_menu(Cursor::new(""), &mut out, &GeneratorConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. Linear colors"));
        assert!(text.contains("5. Distance sorted colors"));
    }
}

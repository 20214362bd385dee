//! src/app/config.rs
//!
//! Configuration de lancement (ligne de commande).
//! Le niveau de journal se règle à part via RUST_LOG (env_logger).

use thiserror::Error;

/// Niveau de journal par défaut si RUST_LOG est absent.
pub const NIVEAU_LOG_DEFAUT: &str = "warn";

pub const USAGE: &str = "\
Usage: calculatrice_pile [--gui]

  (sans argument)  session console : une expression par ligne, -1 pour quitter
  --gui            fenêtre (binaire compilé avec la feature `gui`)
  -h, --help       cette aide

Journal : RUST_LOG=debug calculatrice_pile";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Console,
    Fenetre,
    Aide,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurConfig {
    #[error("argument inconnu: {0}")]
    ArgumentInconnu(String),

    #[error("--gui indisponible : binaire compilé sans la feature `gui`")]
    FenetreIndisponible,
}

impl Config {
    /// Lit les arguments (sans le nom du programme).
    pub fn depuis_args<I>(args: I) -> Result<Self, ErreurConfig>
    where
        I: IntoIterator<Item = String>,
    {
        let mut mode = Mode::Console;
        for arg in args {
            match arg.as_str() {
                "--gui" => {
                    if !cfg!(feature = "gui") {
                        return Err(ErreurConfig::FenetreIndisponible);
                    }
                    mode = Mode::Fenetre;
                }
                "-h" | "--help" => return Ok(Self { mode: Mode::Aide }),
                _ => return Err(ErreurConfig::ArgumentInconnu(arg)),
            }
        }
        Ok(Self { mode })
    }
}

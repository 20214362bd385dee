// src/main.rs
//
// Calculatrice à piles: point d’entrée
// -------------------------------------
// - Console (défaut) : boucle de lecture, une expression par ligne, -1 pour quitter
// - Fenêtre (--gui)  : eframe::run_native, binaire compilé avec la feature `gui`
// - Journal          : env_logger, niveau via RUST_LOG (défaut : warn)

use std::process::ExitCode;

mod app;
mod noyau;

use app::config::{Config, Mode, NIVEAU_LOG_DEFAUT, USAGE};
use app::ErreurApp;

/// Titre de la fenêtre.
#[cfg(feature = "gui")]
const TITRE_APP: &str = "Calculatrice à piles";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(NIVEAU_LOG_DEFAUT))
        .init();

    match executer() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn executer() -> Result<(), ErreurApp> {
    let config = Config::depuis_args(std::env::args().skip(1))?;
    log::debug!("configuration: {config:?}");

    match config.mode {
        Mode::Aide => println!("{USAGE}"),
        Mode::Console => {
            app::console::lancer()?;
        }
        Mode::Fenetre => lancer_fenetre()?,
    }
    Ok(())
}

/* ------------------------ Fenêtre (feature gui) ------------------------ */

#[cfg(feature = "gui")]
fn lancer_fenetre() -> Result<(), ErreurApp> {
    use eframe::egui;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([380.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<app::AppCalc>::default())),
    )?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn lancer_fenetre() -> Result<(), ErreurApp> {
    Err(app::config::ErreurConfig::FenetreIndisponible.into())
}

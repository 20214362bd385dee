// src/app.rs
//
// Calculatrice à piles: module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (config + console, et etat/vue pour la fenêtre)
// - Erreur applicative unique pour main.rs
// - Fournir l’impl eframe::App (feature `gui`)

pub mod config;
pub mod console;

#[cfg(feature = "gui")]
pub mod etat;
#[cfg(feature = "gui")]
pub mod vue;

#[cfg(feature = "gui")]
pub use etat::AppCalc;

use thiserror::Error;

use config::ErreurConfig;

/// Tout ce qui peut arrêter le programme (jamais une expression fautive).
#[derive(Debug, Error)]
pub enum ErreurApp {
    #[error(transparent)]
    Config(#[from] ErreurConfig),

    #[error("entrée/sortie: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "gui")]
    #[error("fenêtre: {0}")]
    Fenetre(#[from] eframe::Error),
}

#[cfg(feature = "gui")]
impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        use eframe::egui;

        // ESC = effacer seulement l’entrée (comme bouton "C").
        // Enter est géré dans vue.rs, au niveau du champ.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

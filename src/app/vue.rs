// src/app/vue.rs
//
// Vue (UI egui): fenêtre native
// ------------------------------
// - Enter évalue (quand le champ vient d’être validé)
// - Pavé : chiffres, opérateurs, deux familles de crochets, fonctions de la table
// - Même contrat que la console : validation, puis évaluation

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{calculer, fonctions::noms_fonctions, format_resultat};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice à piles");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (3+4)*2, 2^3^2, log10(100)")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter sur un champ une ligne : le champ perd le focus dans la même frame.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for symbole in ["(", ")", "{", "}", "+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, symbole, symbole);
            }

            ui.separator();

            for nom in noms_fonctions() {
                self.bouton_insert(ui, nom, &format!("{nom}("));
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_piles")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"], ["0", ".", " "]] {
                    for touche in rangee {
                        if touche == " " {
                            ui.label("");
                        } else {
                            self.bouton_insert(ui, touche, touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        if !self.resultat.is_empty() {
            ui.monospace(self.resultat.as_str());
        }
        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                for ligne in self.historique.iter().rev() {
                    ui.monospace(format!("{}  →  {}", ligne.entree, ligne.reponse));
                }
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /// Validation puis évaluation, réponse déposée dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match calculer(&self.entree) {
            Ok(valeur) => self.set_resultat(format!("Result: {}", format_resultat(valeur))),
            Err(rejet) => self.set_erreur(format!("Error: {rejet}")),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
}

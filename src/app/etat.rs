//! src/app/etat.rs
//!
//! État UI de la fenêtre (sans vue, sans noyau).
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Historique borné.

/// Garde-fou : nombre de lignes conservées dans l’historique.
const HISTORIQUE_MAX: usize = 100;

/// Une ligne traitée : l’entrée telle que tapée + la réponse affichée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ligne {
    pub entree: String,
    pub reponse: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // "Result: …" du dernier succès
    pub erreur: String,   // "Error: …" du dernier échec

    pub historique: Vec<Ligne>,

    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            historique: Vec::new(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// On CONSERVE le dernier résultat : une faute n’efface pas l’écran.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        let reponse = self.erreur.clone();
        self.archiver(reponse);
    }

    pub fn set_resultat(&mut self, msg: impl Into<String>) {
        self.erreur.clear();
        self.resultat = msg.into();
        let reponse = self.resultat.clone();
        self.archiver(reponse);
    }

    fn archiver(&mut self, reponse: String) {
        self.historique.push(Ligne {
            entree: self.entree.clone(),
            reponse,
        });
        if self.historique.len() > HISTORIQUE_MAX {
            let trop = self.historique.len() - HISTORIQUE_MAX;
            self.historique.drain(..trop);
        }
        self.focus_entree = true;
    }
}

// src/noyau/validation.rs
//
// Pré-passe structurelle : une seule lecture gauche -> droite, sans effet de bord.
// Règles :
// - crochets appariés par famille (pile d’ouvrantes)
// - jamais deux opérateurs collés, y compris un '-' qui serait unaire ("3+-4" refusé)
// Rien d’autre : nombres mal formés, lettres, entrée vide passent ici.

use log::debug;

use super::jetons::{est_fermante, est_operateur, est_ouvrante, ouvrante_attendue};

/// `true` si le texte passe la pré-passe.
pub fn validate(texte: &str) -> bool {
    let chars: Vec<char> = texte.chars().collect();
    let mut pile: Vec<char> = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        if est_ouvrante(c) {
            pile.push(c);
        } else if est_fermante(c) {
            if pile.last().copied() != ouvrante_attendue(c) {
                debug!("validation: '{c}' sans ouvrante correspondante (position {i})");
                return false;
            }
            pile.pop();
        }

        if est_operateur(c) && chars.get(i + 1).is_some_and(|&s| est_operateur(s)) {
            debug!("validation: opérateurs collés en position {i}");
            return false;
        }
    }

    if !pile.is_empty() {
        debug!("validation: {} ouvrante(s) non fermée(s)", pile.len());
        return false;
    }
    true
}

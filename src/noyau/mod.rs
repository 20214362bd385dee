//! Noyau du calcul (sans UI)
//!
//! Organisation interne :
//! - erreur.rs     : ErreurCalcul (évaluation) + Rejet (validation ou évaluation)
//! - jetons.rs     : classes de caractères, priorités, application d’un opérateur
//! - fonctions.rs  : table fixe sin/cos/tan/cot/ln/log10
//! - validation.rs : pré-passe structurelle (crochets + opérateurs collés)
//! - eval.rs       : moteur à deux piles, récursif pour les arguments de fonction
//! - format.rs     : affichage “%g” du résultat

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod validation;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalcul, Rejet};
pub use eval::evaluate;
pub use format::format_resultat;
pub use validation::validate;

/// Contrat complet pour un appelant : validation, puis évaluation si elle passe.
pub fn calculer(texte: &str) -> Result<f64, Rejet> {
    if !validate(texte) {
        return Err(Rejet::Structure);
    }
    Ok(evaluate(texte)?)
}

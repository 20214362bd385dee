// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// - ErreurCalcul : échec pendant l’évaluation (message précis, texte affiché tel quel)
// - Rejet        : réponse combinée validation + évaluation (voir noyau::calculer)

use thiserror::Error;

/// Diagnostic fixe du validateur (il ne distingue pas parenthèses / opérateurs).
pub const MESSAGE_REJET: &str =
    "Invalid expression (mismatched parentheses or invalid operator placement)";

/// Échec d’évaluation. Le texte `Display` est le message montré à l’utilisateur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("Division by zero")]
    DivisionParZero,

    /// Fermante sans ouvrante correspondante au sommet de la pile.
    #[error("Mismatched brackets")]
    CrochetsDesequilibres,

    /// Ouvrante restée sur la pile à la vidange finale.
    #[error("Mismatched parentheses")]
    ParenthesesNonFermees,

    #[error("Invalid function syntax")]
    SyntaxeFonction,

    #[error("Unknown function")]
    FonctionInconnue,

    /// Pile de valeurs != 1 à la fin, ou opérandes manquants pour un opérateur.
    #[error("Invalid expression")]
    ExpressionInvalide,

    /// Symbole sans règle d’application (branche défensive).
    #[error("Invalid operator")]
    OperateurInvalide,
}

/// Les deux niveaux d’échec vus par un appelant (console, fenêtre).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejet {
    #[error("{}", MESSAGE_REJET)]
    Structure,

    #[error(transparent)]
    Calcul(#[from] ErreurCalcul),
}

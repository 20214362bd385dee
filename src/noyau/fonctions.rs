// src/noyau/fonctions.rs
//
// Table fixe des fonctions unaires. Nom exact, sensible à la casse.

type Fonction = fn(f64) -> f64;

fn cot(x: f64) -> f64 {
    1.0 / x.tan()
}

static TABLE: [(&str, Fonction); 6] = [
    ("sin", f64::sin),
    ("cos", f64::cos),
    ("tan", f64::tan),
    ("cot", cot),
    ("ln", f64::ln),
    ("log10", f64::log10),
];

/// Cherche `nom` dans la table.
pub fn fonction(nom: &str) -> Option<Fonction> {
    TABLE.iter().find(|(n, _)| *n == nom).map(|&(_, f)| f)
}

/// Noms reconnus, dans l’ordre de la table (boutons de la fenêtre).
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub fn noms_fonctions() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|&(n, _)| n)
}

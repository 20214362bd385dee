// src/noyau/jetons.rs
//
// Classes de caractères + lecture des lexèmes multi-caractères.
// Le moteur (eval.rs) lit le texte “à la volée” : pas de Vec<Tok> intermédiaire,
// seulement des fonctions qui consomment à partir d’un curseur et rendent la suite.

use log::trace;

use super::erreur::ErreurCalcul;

/// Paires de crochets reconnues : (ouvrante, fermante).
const FAMILLES: [(char, char); 2] = [('(', ')'), ('{', '}')];

pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

pub fn est_ouvrante(c: char) -> bool {
    FAMILLES.iter().any(|&(o, _)| o == c)
}

pub fn est_fermante(c: char) -> bool {
    FAMILLES.iter().any(|&(_, f)| f == c)
}

/// Ouvrante attendue pour une fermante donnée (`)` -> `(`, `}` -> `{`).
pub fn ouvrante_attendue(fermante: char) -> Option<char> {
    FAMILLES
        .iter()
        .find(|&&(_, f)| f == fermante)
        .map(|&(o, _)| o)
}

/// Rang de priorité. Les marqueurs de crochets valent 0 : ils bloquent la dépile.
pub fn precedence(op: char) -> u8 {
    match op {
        '^' => 4,
        '*' | '/' => 3,
        '+' | '-' => 2,
        _ => 0,
    }
}

/// Applique `a op b`.
///
/// `^` délègue à `powf` sans cas particulier : base négative + exposant
/// fractionnaire donne NaN, propagé tel quel.
pub fn appliquer(a: f64, op: char, b: f64) -> Result<f64, ErreurCalcul> {
    trace!("appliquer {a} {op} {b}");
    match op {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            Ok(a / b)
        }
        '^' => Ok(a.powf(b)),
        _ => Err(ErreurCalcul::OperateurInvalide),
    }
}

/// Lit un littéral numérique (chiffres ASCII + '.') à partir de `i`.
/// Retourne (valeur, indice du premier caractère non consommé).
///
/// Décimal “plus long préfixe valide” : "1.2.3" -> 1.2 ; "." seul -> 0.
pub fn lire_nombre(chars: &[char], i: usize) -> (f64, usize) {
    let mut fin = i;
    while fin < chars.len() && (chars[fin].is_ascii_digit() || chars[fin] == '.') {
        fin += 1;
    }

    // préfixe : tout jusqu’au second '.' (exclu)
    let mut prefixe = String::with_capacity(fin - i);
    let mut point_vu = false;
    for &c in &chars[i..fin] {
        if c == '.' {
            if point_vu {
                break;
            }
            point_vu = true;
        }
        prefixe.push(c);
    }

    let valeur = prefixe.parse::<f64>().unwrap_or(0.0);
    (valeur, fin)
}

/// Lit un nom de fonction : lettre ASCII puis lettres/chiffres ("log10").
pub fn lire_nom(chars: &[char], i: usize) -> (String, usize) {
    let mut fin = i;
    while fin < chars.len() && chars[fin].is_ascii_alphanumeric() {
        fin += 1;
    }
    (chars[i..fin].iter().collect(), fin)
}

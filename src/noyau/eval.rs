//! Noyau: évaluation à deux piles (valeurs / opérateurs)
//!
//! Lecture gauche -> droite avec un curseur qui peut sauter plusieurs caractères
//! (nombres, noms de fonctions). Les arguments de fonction sont évalués par un
//! appel récursif sur la sous-chaîne : aucun état partagé entre deux appels.
//!
//! Limite connue : l’argument d’une fonction s’arrête à la PREMIÈRE ')'
//! rencontrée, sans tenir compte de l’imbrication. "sin(2*(1+1))" évalue donc
//! "2*(1+1" et échoue sur une parenthèse non fermée.

use log::{debug, trace};

use super::erreur::ErreurCalcul;
use super::fonctions::fonction;
use super::jetons::{
    appliquer, est_fermante, est_operateur, est_ouvrante, lire_nom, lire_nombre,
    ouvrante_attendue, precedence,
};

/// État local d’une évaluation.
#[derive(Default, Debug)]
struct Piles {
    valeurs: Vec<f64>,
    operateurs: Vec<char>,
}

impl Piles {
    /// Dépile b puis a, empile `a op b`.
    fn reduire(&mut self, op: char) -> Result<(), ErreurCalcul> {
        let b = self.valeurs.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
        let a = self.valeurs.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
        self.valeurs.push(appliquer(a, op, b)?);
        Ok(())
    }

    /// Fermante : réduit jusqu’au marqueur, qui doit être l’ouvrante attendue.
    fn fermer(&mut self, fermante: char) -> Result<(), ErreurCalcul> {
        while let Some(&top) = self.operateurs.last() {
            if est_ouvrante(top) {
                break;
            }
            self.operateurs.pop();
            self.reduire(top)?;
        }

        match self.operateurs.last() {
            Some(&top) if Some(top) == ouvrante_attendue(fermante) => {
                self.operateurs.pop();
                Ok(())
            }
            _ => Err(ErreurCalcul::CrochetsDesequilibres),
        }
    }

    /// Opérateur : réduit tant que le sommet a une priorité >= (associativité gauche,
    /// `^` compris), puis empile.
    fn pousser_operateur(&mut self, op: char) -> Result<(), ErreurCalcul> {
        while let Some(&top) = self.operateurs.last() {
            if precedence(top) < precedence(op) {
                break;
            }
            self.operateurs.pop();
            self.reduire(top)?;
        }
        self.operateurs.push(op);
        Ok(())
    }

    /// Fin de texte : vide la pile d’opérateurs puis exige une seule valeur.
    fn vider(mut self) -> Result<f64, ErreurCalcul> {
        while let Some(op) = self.operateurs.pop() {
            if est_ouvrante(op) {
                return Err(ErreurCalcul::ParenthesesNonFermees);
            }
            self.reduire(op)?;
        }

        match self.valeurs.as_slice() {
            [v] => Ok(*v),
            _ => Err(ErreurCalcul::ExpressionInvalide),
        }
    }
}

/// Évalue une ligne et retourne sa valeur.
///
/// Ne revalide pas le texte : appeler [`super::validate`] d’abord pour le
/// contrat complet.
pub fn evaluate(texte: &str) -> Result<f64, ErreurCalcul> {
    debug!("évaluation de {texte:?}");
    let chars: Vec<char> = texte.chars().collect();
    evaluer_chars(&chars)
}

fn evaluer_chars(chars: &[char]) -> Result<f64, ErreurCalcul> {
    let mut piles = Piles::default();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (valeur, suite) = lire_nombre(chars, i);
            piles.valeurs.push(valeur);
            i = suite;
            continue;
        }

        if est_ouvrante(c) {
            piles.operateurs.push(c);
            i += 1;
            continue;
        }

        if est_fermante(c) {
            piles.fermer(c)?;
            i += 1;
            continue;
        }

        if est_operateur(c) {
            // moins unaire : début de texte, après une ouvrante ou après un opérateur
            // (voisin brut) => on injecte 0 : "-x" devient "0 - x"
            let unaire = c == '-'
                && (i == 0 || est_ouvrante(chars[i - 1]) || est_operateur(chars[i - 1]));
            if unaire {
                piles.valeurs.push(0.0);
            }
            piles.pousser_operateur(c)?;
            i += 1;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let (valeur, suite) = appel_fonction(chars, i)?;
            piles.valeurs.push(valeur);
            i = suite;
            continue;
        }

        // caractère sans règle : ignoré
        trace!("caractère ignoré: {c:?}");
        i += 1;
    }

    piles.vider()
}

/// Lit `nom(argument)` à partir de `i`, évalue l’argument puis applique la fonction.
/// Retourne (résultat, indice après la ')').
fn appel_fonction(chars: &[char], i: usize) -> Result<(f64, usize), ErreurCalcul> {
    let (nom, apres_nom) = lire_nom(chars, i);

    if chars.get(apres_nom) != Some(&'(') {
        return Err(ErreurCalcul::SyntaxeFonction);
    }

    // argument : jusqu’à la première ')' (non imbriqué) ou la fin du texte
    let debut = apres_nom + 1;
    let fin = chars[debut..]
        .iter()
        .position(|&c| c == ')')
        .map_or(chars.len(), |p| debut + p);

    let argument = evaluer_chars(&chars[debut..fin])?;
    let f = fonction(&nom).ok_or(ErreurCalcul::FonctionInconnue)?;
    let resultat = f(argument);
    debug!("{nom}({argument}) = {resultat}");

    Ok((resultat, (fin + 1).min(chars.len())))
}

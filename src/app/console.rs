//! src/app/console.rs
//!
//! Boucle de lecture console : une ligne = un calcul.
//!
//! Contrat :
//! - invite sur la sortie standard, ligne exactement "-1" => au revoir + fin
//! - rejet de la pré-passe => diagnostic fixe sur la sortie d’erreur, pas d’évaluation
//! - succès => "Result: …" ; échec d’évaluation => "Error: …" ; la boucle continue
//! - fin d’entrée (EOF) => fin silencieuse

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::noyau::{calculer, format_resultat};

pub const INVITE: &str = "\nEnter a mathematical expression (or enter -1 to exit): ";
pub const SENTINELLE: &str = "-1";
pub const ADIEU: &str = "Exiting the calculator. Goodbye!";

/// Bilan d’une session (utile aux tests et au journal).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub resultats: usize,
    pub erreurs: usize,
}

/// Exécute une session complète sur des flux quelconques.
pub fn executer_session<R, W, E>(
    entree: R,
    sortie: &mut W,
    erreurs: &mut E,
) -> io::Result<Bilan>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    info!("session console ouverte");
    let mut bilan = Bilan::default();
    let mut lignes = entree.lines();

    loop {
        write!(sortie, "{INVITE}")?;
        sortie.flush()?;

        let Some(ligne) = lignes.next() else {
            debug!("fin d’entrée");
            break;
        };
        let ligne = ligne?;

        if ligne == SENTINELLE {
            writeln!(sortie, "{ADIEU}")?;
            break;
        }

        match calculer(&ligne) {
            Ok(valeur) => {
                writeln!(sortie, "Result: {}", format_resultat(valeur))?;
                bilan.resultats += 1;
            }
            Err(rejet) => {
                writeln!(erreurs, "Error: {rejet}")?;
                bilan.erreurs += 1;
            }
        }
    }

    info!(
        "session console fermée ({} résultat(s), {} erreur(s))",
        bilan.resultats, bilan.erreurs
    );
    Ok(bilan)
}

/// Session sur stdin / stdout / stderr.
pub fn lancer() -> io::Result<Bilan> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    executer_session(stdin.lock(), &mut stdout, &mut stderr)
}

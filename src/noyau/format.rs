// src/noyau/format.rs
//
// Affichage d’un résultat : notation “%g” à 6 chiffres significatifs,
// comme un flux de sortie C par défaut (64, 0.333333, 1e+20, 1.5e-07).

/// Chiffres significatifs affichés.
const CHIFFRES: usize = 6;

/// Formate `v` pour la ligne "Result: …".
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // L’exposant se lit APRÈS arrondi à CHIFFRES chiffres (9.999995 -> 10).
    let sci = format!("{:.*e}", CHIFFRES - 1, v);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exposant < -4 || exposant >= CHIFFRES as i32 {
        let signe = if exposant < 0 { '-' } else { '+' };
        return format!(
            "{}e{signe}{:02}",
            sans_zeros_finaux(mantisse),
            exposant.unsigned_abs()
        );
    }

    let decimales = (CHIFFRES as i32 - 1 - exposant) as usize;
    sans_zeros_finaux(&format!("{v:.decimales$}")).to_string()
}

/// "2.500" -> "2.5" ; "64.000" -> "64" ; "120" reste "120".
fn sans_zeros_finaux(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

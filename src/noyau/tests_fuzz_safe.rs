//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler validate/evaluate sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : aucune entrée ne fait paniquer le noyau

use std::time::{Duration, Instant};

use super::{calculer, evaluate, validate, ErreurCalcul, Rejet};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

const ALPHABET: &[char] = &[
    '0', '1', '2', '7', '.', '+', '-', '*', '/', '^', '(', ')', '{', '}', ' ', 's', 'i', 'n',
    'l', 'o', 'g', '%',
];

/// Soupe de caractères : la plupart des sorties sont invalides, c’est voulu.
fn gen_soupe(rng: &mut Rng) -> String {
    let len = rng.pick(24) as usize;
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(5) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        3 => format!("{}", rng.pick(1000)),
        _ => format!("sin({})", rng.pick(4)),
    }
}

/// Expressions bien formées : toujours acceptées par la pré-passe.
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }
    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    match rng.pick(7) {
        0 => format!("({a}+{b})"),
        1 => format!("({a}-{b})"),
        2 => format!("{{{a}*{b}}}"),
        3 => format!("({a}/{b})"),
        4 => format!("{a} ^ {b}"),
        5 => format!("{a}*{b}"),
        _ => gen_nombre(rng),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_soupe_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut vus_valides = 0usize;
    let mut vus_rejetes = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let expr = gen_soupe(&mut rng);

        // le moteur seul ne doit jamais paniquer, même hors pré-passe
        let _ = evaluate(&expr);

        match calculer(&expr) {
            Err(Rejet::Structure) => {
                assert!(!validate(&expr));
                vus_rejetes += 1;
            }
            _ => {
                assert!(validate(&expr));
                vus_valides += 1;
            }
        }
    }

    assert!(vus_valides > 0, "aucune soupe valide: fuzz trop “sauvage”");
    assert!(vus_rejetes > 0, "aucun rejet: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_ok = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        assert!(validate(&expr), "expr bien formée refusée: {expr:?}");

        match evaluate(&expr) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                // seule erreur attendue sur une expression bien formée
                assert_eq!(e, ErreurCalcul::DivisionParZero, "expr={expr:?}");
            }
        }
    }

    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes expressions => mêmes sorties
    let mut r1 = Rng::new(42);
    let mut r2 = Rng::new(42);

    for _ in 0..200 {
        let e1 = gen_soupe(&mut r1);
        let e2 = gen_soupe(&mut r2);
        assert_eq!(e1, e2);

        let a = calculer(&e1);
        let b = calculer(&e2);
        match (&a, &b) {
            // NaN != NaN : on compare les bits
            (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits(), "expr={e1:?}"),
            _ => assert_eq!(a, b, "expr={e1:?}"),
        }
    }
}

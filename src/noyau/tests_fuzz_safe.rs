//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la saisie live sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariants clés :
//!   - toute saisie acceptée laisse un texte lui-même acceptable (idempotence)
//!   - une saisie refusée ne touche pas au champ
//!   - rien ne panique, quelle que soit la frappe

use std::time::{Duration, Instant};

use super::champ::ChampMontant;
use super::eval::evaluer_saisie;
use super::locale::Locale;
use super::montant::EtatMontant;
use super::validation::valider_partiel;

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

/* ------------------------ Génération de frappes ------------------------ */

/// Alphabet volontairement plus large que l’accepté (alias, modificateurs, intrus).
const ALPHABET: &[char] = &[
    '0', '1', '2', '5', '9', '0', '3', '.', ',', '+', '-', '−', '‐', '*', '×', '/', '÷', '±',
    '=', 'a', ' ', '(',
];

fn gen_frappe(rng: &mut Rng) -> char {
    ALPHABET[rng.pick(ALPHABET.len() as u32) as usize]
}

fn gen_chaine(rng: &mut Rng, max_len: u32) -> String {
    let n = rng.pick(max_len + 1);
    (0..n).map(|_| gen_frappe(rng)).collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_idempotence_normalisation() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_rejet = 0usize;

    for locale in [Locale::point(), Locale::virgule()] {
        for _ in 0..600 {
            budget(t0, max);

            let s = gen_chaine(&mut rng, 8);
            match evaluer_saisie(&s, &locale, &EtatMontant::Vide) {
                Ok(ev) => {
                    assert!(
                        valider_partiel(&ev.texte, &locale).is_ok(),
                        "texte normalisé refusé: saisie={s:?} texte={:?}",
                        ev.texte
                    );
                    // et la ré-évaluation du texte est stable
                    let again = evaluer_saisie(&ev.texte, &locale, &ev.etat)
                        .unwrap_or_else(|e| panic!("saisie={s:?} texte={:?} err={e}", ev.texte));
                    assert_eq!(again.texte, ev.texte, "saisie={s:?}");
                    seen_ok += 1;
                }
                Err(_) => seen_rejet += 1,
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_rejet > 50, "trop peu de rejets: {seen_rejet}");
}

#[test]
fn fuzz_safe_frappe_par_frappe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let mut champ = ChampMontant::new(Locale::point());
        for _ in 0..12 {
            let avant = (champ.texte().to_string(), champ.etat().clone());

            let accepte = if rng.pick(6) == 0 {
                champ.effacer()
            } else {
                champ.saisir(gen_frappe(&mut rng))
            };

            if !accepte {
                assert_eq!(
                    (champ.texte().to_string(), champ.etat().clone()),
                    avant,
                    "une frappe refusée a modifié le champ"
                );
            }
            assert!(valider_partiel(champ.texte(), champ.locale()).is_ok());
        }
    }
}

#[test]
fn fuzz_safe_longue_saisie() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    // 400 termes "+1.5" : reste linéaire
    let mut s = String::from("1.5");
    for _ in 0..400 {
        s.push_str("+1.5");
    }
    let ev = evaluer_saisie(&s, &Locale::point(), &EtatMontant::Vide)
        .unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(
        super::format::formater(&ev.etat.valeur(), &Locale::point()),
        "601.5"
    );
}

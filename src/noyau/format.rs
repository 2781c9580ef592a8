// src/noyau/format.rs
//
// Frontière valeur <-> texte hors édition active :
// - formater : valeur validée -> texte (sans groupement, séparateur de la locale)
// - analyser : texte validé -> valeur (ou “pas de valeur”)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreurs::ErreurAnalyse;
use super::eval::normaliser;
use super::glyphes::{classer, est_symbole, Glyphe, Operateur};
use super::locale::Locale;
use super::montant::EtatMontant;
use super::rpn::evaluer;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// |r| * 10^digits arrondi au plus proche (moitié -> loin de zéro).
fn abs_scaled_arrondi(r: &BigRational, digits: u32) -> BigInt {
    let deux = BigInt::from(2);
    let n = r.numer().abs() * pow10(digits);
    let d = r.denom();
    (n * &deux + d) / (d * &deux)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal, zéros finaux retirés.
fn scaled_to_decimal(scaled: &BigInt, digits: u32, separateur: char) -> String {
    let scale = pow10(digits);
    let int_part = scaled / &scale;
    let frac_part = scaled % &scale;

    if frac_part.is_zero() {
        return format!("{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits as usize {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{int_part}{separateur}{frac}")
}

/// Valeur -> texte. Zéro -> "" (le champ affiche alors son invite).
pub fn formater(valeur: &BigRational, locale: &Locale) -> String {
    if valeur.is_zero() {
        return String::new();
    }

    let scaled = abs_scaled_arrondi(valeur, locale.decimales_max);
    // arrondi à 0 : "" comme le zéro vrai, jamais la sentinelle "0"
    if scaled.is_zero() {
        return String::new();
    }
    let txt = scaled_to_decimal(&scaled, locale.decimales_max, locale.separateur_decimal);

    if valeur.is_negative() {
        format!("-{txt}")
    } else {
        txt
    }
}

/// État du champ -> texte. Un moins en attente reste visible.
pub fn formater_etat(etat: &EtatMontant, locale: &Locale) -> String {
    match etat {
        EtatMontant::Vide => String::new(),
        EtatMontant::MoinsEnAttente => "-".to_string(),
        EtatMontant::Defini(v) => formater(v, locale),
    }
}

/// Texte -> valeur.
///
/// - `Ok(Some(0))` pour "" (zéro vrai)
/// - `Ok(None)` pour "0" (sentinelle “pas de valeur”) ou si l’évaluateur échoue
/// - `Err` pour une chaîne syntaxiquement irrecevable
pub fn analyser(s: &str, locale: &Locale) -> Result<Option<BigRational>, ErreurAnalyse> {
    let chars: Vec<char> = s.chars().collect();

    if chars.is_empty() {
        return Ok(Some(BigRational::zero()));
    }
    if s == "0" {
        return Ok(None);
    }

    if let [c] = chars.as_slice() {
        match Operateur::depuis_char(*c) {
            Some(Operateur::Moins) | None => {}
            Some(_) => return Err(ErreurAnalyse::OperateurSeul(*c)),
        }
    }

    if let [.., d, '0'] = chars.as_slice() {
        if Operateur::depuis_char(*d) == Some(Operateur::Division) {
            return Err(ErreurAnalyse::DivisionParZero);
        }
    }

    let mut separateurs = 0usize;
    let mut precedent: Option<(char, Option<Glyphe>)> = None;
    for &c in &chars {
        let g = classer(c, locale);
        match g {
            Some(Glyphe::Separateur) => separateurs += 1,
            Some(Glyphe::Chiffre) | Some(Glyphe::Operateur(_)) => {}
            Some(Glyphe::Modificateur(_)) | None => {
                return Err(ErreurAnalyse::CaractereInterdit(c))
            }
        }
        if separateurs > 1 {
            return Err(ErreurAnalyse::SeparateursMultiples);
        }
        if let Some((p, gp)) = precedent {
            if est_symbole(gp) && est_symbole(g) {
                return Err(ErreurAnalyse::SymbolesAdjacents(p, c));
            }
        }
        precedent = Some((c, g));
    }

    match evaluer(&normaliser(s, locale)) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            tracing::debug!(texte = s, erreur = %e, "analyse sans valeur");
            Ok(None)
        }
    }
}

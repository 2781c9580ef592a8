// src/noyau/validation.rs
//
// Validation d’une saisie PARTIELLE (état intermédiaire acceptable du champ).
//
// Principe:
// - on re-scanne toute la chaîne à chaque frappe (balayage linéaire, chaînes courtes)
// - règles évaluées dans l’ordre, la première qui conclut gagne
// - les modificateurs (±, =) doivent être retirés AVANT d’arriver ici

use super::erreurs::Rejet;
use super::glyphes::{classer, est_symbole, Glyphe, Operateur};
use super::locale::Locale;

/// États acceptés par le validateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Partiel {
    /// "" : valeur 0
    Vide,
    /// "0" exactement : pas encore de valeur tapée
    SansValeur,
    /// "-", "+-", "-+" : un signe, pas encore de chiffre
    SigneSeul,
    /// chiffres / opérateurs / séparateurs sans motif interdit
    Expression,
}

fn operateur(c: char) -> Option<Operateur> {
    Operateur::depuis_char(c)
}

/// "+-" ou "-+" (tout alias de moins).
fn est_combo_signe(chars: &[char]) -> bool {
    match chars {
        [a, b] => matches!(
            (operateur(*a), operateur(*b)),
            (Some(Operateur::Plus), Some(Operateur::Moins))
                | (Some(Operateur::Moins), Some(Operateur::Plus))
        ),
        _ => false,
    }
}

/// Valide une chaîne candidate (contenu du champ après l’édition envisagée).
pub fn valider_partiel(s: &str, locale: &Locale) -> Result<Partiel, Rejet> {
    let chars: Vec<char> = s.chars().collect();

    // 1) vide
    if chars.is_empty() {
        return Ok(Partiel::Vide);
    }

    // 2) "0" seul
    if s == "0" {
        return Ok(Partiel::SansValeur);
    }

    // 2b) signe de tête composé
    if est_combo_signe(&chars) {
        return Ok(Partiel::SigneSeul);
    }

    // 3) opérateur seul : seul le moins passe
    if let [c] = chars.as_slice() {
        match operateur(*c) {
            Some(Operateur::Moins) => return Ok(Partiel::SigneSeul),
            Some(_) => return Err(Rejet::OperateurSeul),
            None => {}
        }
    }

    // 4) "…/0" en fin de chaîne
    if let [.., d, '0'] = chars.as_slice() {
        if operateur(*d) == Some(Operateur::Division) {
            return Err(Rejet::DivisionParZero);
        }
    }

    // 5) alphabet : chiffres + séparateur + opérateurs (pas de modificateurs)
    let mut precedent: Option<(char, Option<Glyphe>)> = None;
    for &c in &chars {
        let g = classer(c, locale);
        match g {
            Some(Glyphe::Chiffre) | Some(Glyphe::Separateur) | Some(Glyphe::Operateur(_)) => {}
            Some(Glyphe::Modificateur(_)) | None => return Err(Rejet::CaractereInterdit(c)),
        }

        // 6) jamais deux symboles (opérateur / séparateur) côte à côte
        if let Some((p, gp)) = precedent {
            if est_symbole(gp) && est_symbole(g) {
                return Err(Rejet::SymbolesAdjacents(p, c));
            }
        }
        precedent = Some((c, g));
    }

    // 7) ok
    Ok(Partiel::Expression)
}

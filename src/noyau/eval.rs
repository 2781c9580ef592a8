//! Noyau : évaluation d’une saisie (pipeline réel)
//!
//! retrait des modificateurs -> validation partielle -> raccourcis de signe
//!        -> normalisation -> RPN exacte -> application des modificateurs
//!
//! Rien ici ne remonte d’erreur d’évaluation : un échec de l’évaluateur
//! retombe sur le zéro signé de la valeur précédente (± et = s’y appliquent).

use num_traits::Zero;

use super::erreurs::Rejet;
use super::format::formater_etat;
use super::glyphes::{Modificateur, Operateur};
use super::locale::Locale;
use super::montant::EtatMontant;
use super::rpn::evaluer;
use super::validation::{valider_partiel, Partiel};

/// Résultat d’une saisie acceptée.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Texte à laisser dans le champ (re-validable tel quel).
    pub texte: String,
    pub etat: EtatMontant,
}

impl Evaluation {
    /// Texte affiché hors édition : "" dès que la valeur est nulle sans signe en attente.
    pub fn affichage(&self) -> &str {
        if self.etat.est_zero() {
            ""
        } else {
            &self.texte
        }
    }
}

/// Alias d’opérateurs -> ASCII ; le séparateur de la locale est conservé.
pub fn canoniser_glyphes(s: &str) -> String {
    s.chars()
        .map(|c| Operateur::depuis_char(c).map_or(c, Operateur::canonique))
        .collect()
}

/// Forme comprise par l’évaluateur : séparateur -> '.', alias -> ASCII.
pub fn normaliser(s: &str, locale: &Locale) -> String {
    s.chars()
        .map(|c| {
            if locale.est_separateur(c) {
                '.'
            } else {
                Operateur::depuis_char(c).map_or(c, Operateur::canonique)
            }
        })
        .collect()
}

/// Modificateurs retirés d’une saisie.
#[derive(Default, Debug)]
struct Modificateurs {
    negations: usize,
    egal: bool,
}

fn retirer_modificateurs(s: &str) -> (String, Modificateurs) {
    let mut m = Modificateurs::default();
    let reste: String = s
        .chars()
        .filter(|&c| match Modificateur::depuis_char(c) {
            Some(Modificateur::Negation) => {
                m.negations += 1;
                false
            }
            Some(Modificateur::Egal) => {
                m.egal = true;
                false
            }
            None => true,
        })
        .collect();
    (reste, m)
}

/// "-0", "-0.", "-0.00" : moins suivi d’un littéral nul (le signe attend sa magnitude).
/// Un zéro calculé ("-5+5", "-2*0") n’en est pas un.
fn moins_litteral_nul(texte: &str, locale: &Locale) -> bool {
    let mut chars = texte.chars();
    if chars.next() != Some('-') {
        return false;
    }
    let reste = chars.as_str();
    !reste.is_empty() && reste.chars().all(|c| c == '0' || locale.est_separateur(c))
}

/// Évalue une saisie candidate (contenu du champ après l’édition).
///
/// - `Err(Rejet)` : la saisie n’est pas un état intermédiaire acceptable
/// - `Ok(Evaluation)` : texte normalisé + nouvel état du montant
pub fn evaluer_saisie(
    candidat: &str,
    locale: &Locale,
    precedent: &EtatMontant,
) -> Result<Evaluation, Rejet> {
    // 1) modificateurs
    let (reste, modifs) = retirer_modificateurs(candidat);

    // 2) validation partielle
    let partiel = valider_partiel(&reste, locale)?;

    // 3) raccourcis (l’évaluateur ne sait pas représenter “un signe sans opérande”)
    let base = match partiel {
        Partiel::Vide => Evaluation::default(),
        Partiel::SansValeur => Evaluation {
            texte: "0".to_string(),
            etat: EtatMontant::Vide,
        },
        Partiel::SigneSeul => {
            // "-" / "+-" => moins en attente ; "-+" => le plus l’emporte, champ vidé
            let dernier = reste.chars().last().and_then(Operateur::depuis_char);
            if dernier == Some(Operateur::Moins) {
                Evaluation {
                    texte: "-".to_string(),
                    etat: EtatMontant::MoinsEnAttente,
                }
            } else {
                Evaluation::default()
            }
        }
        Partiel::Expression => {
            let texte = canoniser_glyphes(&reste);
            let etat = match evaluer(&normaliser(&reste, locale)) {
                Ok(v) if v.is_zero() && moins_litteral_nul(&texte, locale) => {
                    EtatMontant::MoinsEnAttente
                }
                Ok(v) => EtatMontant::Defini(v),
                Err(e) => {
                    tracing::debug!(
                        saisie = candidat,
                        erreur = %e,
                        "évaluation impossible, zéro signé conservé"
                    );
                    EtatMontant::zero_signe(precedent.signe())
                }
            };
            Evaluation { texte, etat }
        }
    };

    // 4) modificateurs : ± inverse (parité), = réduit ; le texte devient la valeur
    let etat = if modifs.negations % 2 == 1 {
        base.etat.negation()
    } else {
        base.etat
    };
    let texte = if modifs.negations > 0 || modifs.egal {
        formater_etat(&etat, locale)
    } else {
        base.texte
    };

    Ok(Evaluation { texte, etat })
}

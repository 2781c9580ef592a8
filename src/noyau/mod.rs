//! Noyau de saisie de montant
//!
//! Organisation interne :
//! - glyphes.rs    : classes de caractères + table d’alias des opérateurs
//! - locale.rs     : séparateur décimal + précision d’affichage
//! - validation.rs : validation d’une saisie PARTIELLE (re-scan complet)
//! - jetons.rs     : tokenisation (décimaux exacts)
//! - rpn.rs        : shunting-yard + évaluation exacte
//! - montant.rs    : état du champ (vide / signe en attente / défini)
//! - eval.rs       : pipeline de saisie (modificateurs, raccourcis, repli)
//! - format.rs     : frontière valeur <-> texte hors édition
//! - champ.rs      : contrôleur du champ (retour silencieux)

pub mod champ;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod glyphes;
pub mod jetons;
pub mod locale;
pub mod montant;
pub mod rpn;
pub mod validation;

#[cfg(test)]
mod tests_saisie;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use champ::ChampMontant;
pub use locale::Locale;
pub use montant::EtatMontant;

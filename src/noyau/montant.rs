//! État du champ montant.
//!
//! Pas de “zéro signé” : un moins tapé sans chiffre est un état à part entière
//! (`MoinsEnAttente`), et la sentinelle "0" n’est plus une valeur.

use num_rational::BigRational;
use num_traits::{Signed, Zero};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Signe {
    #[default]
    Positif,
    Negatif,
}

impl Signe {
    pub fn inverse(self) -> Self {
        match self {
            Signe::Positif => Signe::Negatif,
            Signe::Negatif => Signe::Positif,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum EtatMontant {
    /// Zéro “vrai” : champ vide ou jamais touché.
    #[default]
    Vide,
    /// Moins tapé, magnitude pas encore tapée (un plus seul ne s’affiche pas : `Vide`).
    MoinsEnAttente,
    /// Valeur exacte (peut valoir 0 : "5-5").
    Defini(BigRational),
}

impl EtatMontant {
    /// Zéro qui garde un signe : `Negatif` -> moins en attente, `Positif` -> Vide.
    pub fn zero_signe(signe: Signe) -> Self {
        match signe {
            Signe::Negatif => EtatMontant::MoinsEnAttente,
            Signe::Positif => EtatMontant::Vide,
        }
    }

    /// Valeur liée au formulaire (0 tant que rien n’est défini).
    pub fn valeur(&self) -> BigRational {
        match self {
            EtatMontant::Defini(v) => v.clone(),
            _ => BigRational::zero(),
        }
    }

    pub fn signe(&self) -> Signe {
        match self {
            EtatMontant::Vide => Signe::Positif,
            EtatMontant::MoinsEnAttente => Signe::Negatif,
            EtatMontant::Defini(v) if v.is_negative() => Signe::Negatif,
            EtatMontant::Defini(_) => Signe::Positif,
        }
    }

    /// Zéro sans signe en attente.
    pub fn est_zero(&self) -> bool {
        match self {
            EtatMontant::Vide => true,
            EtatMontant::MoinsEnAttente => false,
            EtatMontant::Defini(v) => v.is_zero(),
        }
    }

    /// Touche ± : une magnitude nulle garde le signe inversé en attente.
    pub fn negation(&self) -> Self {
        match self {
            EtatMontant::Defini(v) if !v.is_zero() => EtatMontant::Defini(-v),
            autre => EtatMontant::zero_signe(autre.signe().inverse()),
        }
    }
}

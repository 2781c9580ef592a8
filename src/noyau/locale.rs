// src/noyau/locale.rs
//
// Locale de saisie : séparateur décimal + précision d’affichage.
// Fournie de l’extérieur (config / CLI), jamais devinée ici.

use serde::Deserialize;

/// Nombre max de décimales affichées par défaut (le calcul, lui, reste exact).
pub const DECIMALES_DEFAUT: u32 = 10;

/// Borne haute acceptée en configuration (10^n est recalculé à chaque frappe).
pub const DECIMALES_LIMITE: u32 = 28;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Locale {
    /// Seul séparateur décimal reconnu (`.` ou `,` en pratique).
    pub separateur_decimal: char,
    /// Décimales max produites par le formateur.
    pub decimales_max: u32,
}

impl Locale {
    pub fn point() -> Self {
        Self {
            separateur_decimal: '.',
            decimales_max: DECIMALES_DEFAUT,
        }
    }

    pub fn virgule() -> Self {
        Self {
            separateur_decimal: ',',
            ..Self::point()
        }
    }

    pub fn est_separateur(&self, c: char) -> bool {
        c == self.separateur_decimal
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::point()
    }
}

// src/noyau/glyphes.rs
//
// Classification d’un caractère saisi.
//
// Règles:
// - un opérateur = un ensemble d’alias (claviers / autocorrection remplacent
//   le trait d’union par le vrai signe moins, etc.)
// - la table d’alias est la SEULE source de vérité : pas de comparaisons éparpillées
// - séparateur décimal : fourni par la locale

use super::locale::Locale;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modificateur {
    /// `±` : inverse le signe du résultat
    Negation,
    /// `=` : réduit l’expression à sa valeur
    Egal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyphe {
    Chiffre,
    Separateur,
    Operateur(Operateur),
    Modificateur(Modificateur),
}

/// Table d’alias : opérateur sémantique -> points de code acceptés.
pub const ALIAS_OPERATEURS: [(Operateur, &[char]); 4] = [
    (Operateur::Plus, &['+']),
    (Operateur::Moins, &['-', '\u{2212}', '\u{2010}']),
    (Operateur::Fois, &['*', '\u{00D7}', '\u{00B7}']),
    (Operateur::Division, &['/', '\u{00F7}', '\u{2215}']),
];

pub const ALIAS_MODIFICATEURS: [(Modificateur, &[char]); 2] = [
    (Modificateur::Negation, &['\u{00B1}']),
    (Modificateur::Egal, &['=']),
];

impl Operateur {
    /// Glyphe ASCII compris par l’évaluateur.
    pub fn canonique(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Division => '/',
        }
    }

    pub fn depuis_char(c: char) -> Option<Self> {
        ALIAS_OPERATEURS
            .iter()
            .find(|(_, alias)| alias.contains(&c))
            .map(|(op, _)| *op)
    }
}

impl Modificateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        ALIAS_MODIFICATEURS
            .iter()
            .find(|(_, alias)| alias.contains(&c))
            .map(|(m, _)| *m)
    }
}

/// Classe un caractère. `None` = hors de toute classe reconnue.
pub fn classer(c: char, locale: &Locale) -> Option<Glyphe> {
    if c.is_ascii_digit() {
        return Some(Glyphe::Chiffre);
    }
    if locale.est_separateur(c) {
        return Some(Glyphe::Separateur);
    }
    if let Some(op) = Operateur::depuis_char(c) {
        return Some(Glyphe::Operateur(op));
    }
    Modificateur::depuis_char(c).map(Glyphe::Modificateur)
}

/// Opérateur ou séparateur : la classe qui ne peut pas se répéter.
pub fn est_symbole(g: Option<Glyphe>) -> bool {
    matches!(g, Some(Glyphe::Operateur(_)) | Some(Glyphe::Separateur))
}

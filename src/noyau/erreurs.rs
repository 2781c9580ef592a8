// src/noyau/erreurs.rs
//
// Erreurs du noyau. Aucune ne traverse ChampMontant : la saisie live les avale.

use thiserror::Error;

/// Raison d’un refus de saisie partielle (jamais affichée à l’utilisateur).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejet {
    #[error("opérateur seul (seul le moins peut ouvrir une saisie)")]
    OperateurSeul,

    #[error("division par zéro littérale en fin de saisie")]
    DivisionParZero,

    #[error("caractère interdit: {0:?}")]
    CaractereInterdit(char),

    #[error("symboles adjacents: {0:?} puis {1:?}")]
    SymbolesAdjacents(char, char),
}

/// Échec de l’évaluateur infixe (tokenize / RPN / arithmétique).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("entrée vide")]
    Vide,

    #[error("caractère inattendu: {0:?}")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("parenthèses non équilibrées")]
    Parentheses,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("division par zéro")]
    DivisionParZero,
}

/// Échec du formateur en lecture (chaîne validée -> valeur).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurAnalyse {
    #[error("opérateur seul: {0:?}")]
    OperateurSeul(char),

    #[error("division par zéro littérale")]
    DivisionParZero,

    #[error("caractère interdit: {0:?}")]
    CaractereInterdit(char),

    #[error("plusieurs séparateurs décimaux")]
    SeparateursMultiples,

    #[error("symboles adjacents: {0:?} puis {1:?}")]
    SymbolesAdjacents(char, char),
}

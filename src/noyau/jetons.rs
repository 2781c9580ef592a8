// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreurs::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,
    /// moins unaire (produit par la RPN seulement)
    Neg,

    LPar,
    RPar,
}

/// Décimal littéral exact : "12.50" -> 25/2 (jamais de flottant).
fn decimal_exact(entier: &str, fraction: &str) -> Result<BigRational, ErreurEval> {
    let invalide = || ErreurEval::NombreInvalide(format!("{entier}.{fraction}"));
    if entier.is_empty() && fraction.is_empty() {
        return Err(invalide());
    }

    let chiffres = format!("{entier}{fraction}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
    let d = BigInt::from(10).pow(fraction.len() as u32);
    Ok(BigRational::new(n, d))
}

/// Tokenize une chaîne canonique (ASCII) en jetons.
/// Supporte:
/// - décimaux `12`, `12.5`, `12.`, `.5`
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces ignorés
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let op = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            _ => None,
        };
        if let Some(t) = op {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre décimal
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let entier: String = chars[start..i].iter().collect();

            let mut fraction = String::new();
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                let start_f = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                fraction = chars[start_f..i].iter().collect();
            }

            out.push(Tok::Num(decimal_exact(&entier, &fraction)?));
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (traces) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(r) => format_rat(r),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis l’évaluer sur des rationnels (aucun flottant)
//
// Règles:
// - Moins unaire : si '-' arrive quand on n’attend PAS une valeur, il devient Tok::Neg
//   (préfixe, priorité au-dessus de * /) : "2*(-3)" => "2 3 neg *"
// - Plus unaire : ignoré
// - * ou / sans valeur à gauche : expression invalide

use num_rational::BigRational;
use num_traits::Zero;

use super::erreurs::ErreurEval;
use super::jetons::{format_tokens, tokenize, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, LPar, Minus, Num(3), RPar]
///   rpn:    [Num(2), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                // dépile jusqu’à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        fermee = true;
                        break;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(ErreurEval::Parentheses);
                }
                prev_was_value = true;
            }

            Tok::Minus | Tok::Plus if !prev_was_value => {
                // signe unaire (préfixe) : pas de dépilement
                if matches!(tok, Tok::Minus) {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurEval::ExpressionInvalide);
                }
                // tous binaires, associatifs à gauche
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => ops.push(tok),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::Parentheses);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur des rationnels exacts.
pub fn eval_rpn(rpn: &[Tok]) -> Result<BigRational, ErreurEval> {
    let mut st: Vec<BigRational> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(r) => st.push(r),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => {
                        if b.is_zero() {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::Parentheses),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}

/// Pipeline complet : texte canonique -> jetons -> RPN -> valeur.
pub fn evaluer(s: &str) -> Result<BigRational, ErreurEval> {
    let jetons = tokenize(s)?;
    if jetons.is_empty() {
        return Err(ErreurEval::Vide);
    }

    let rpn = to_rpn(&jetons)?;
    tracing::trace!(rpn = %format_tokens(&rpn), "expression en RPN");

    eval_rpn(&rpn)
}

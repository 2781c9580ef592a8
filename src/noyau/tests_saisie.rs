//! Tests de saisie (campagne) : propriétés observables du champ montant.
//!
//! Chaque test rejoue ce qu’un utilisateur fait au clavier, frappe par frappe,
//! et compare avec la validation “d’un bloc” de la même chaîne.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::champ::ChampMontant;
use super::eval::evaluer_saisie;
use super::format::{analyser, formater};
use super::locale::Locale;
use super::montant::EtatMontant;

fn rat(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn taper(locale: Locale, s: &str) -> ChampMontant {
    let mut ch = ChampMontant::new(locale);
    for c in s.chars() {
        ch.saisir(c);
    }
    ch
}

fn d_un_bloc(locale: &Locale, s: &str) -> EtatMontant {
    evaluer_saisie(s, locale, &EtatMontant::Vide)
        .unwrap_or_else(|e| panic!("{s:?} rejeté: {e}"))
        .etat
}

/* ------------------------ Frappe vs bloc ------------------------ */

#[test]
fn moins_cinq_frappe_par_frappe() {
    let l = Locale::point();
    let ch = taper(l.clone(), "-5");
    assert_eq!(ch.etat(), &d_un_bloc(&l, "-5"));
    assert_eq!(ch.valeur(), rat(-5, 1));
}

#[test]
fn moins_efface_puis_retape() {
    // "-" puis retour arrière : zéro vrai ; "-" retapé puis "5" : -5
    let mut ch = ChampMontant::new(Locale::point());
    assert!(ch.saisir('-'));
    assert_eq!(ch.etat(), &EtatMontant::MoinsEnAttente);
    assert!(ch.effacer());
    assert_eq!(ch.etat(), &EtatMontant::Vide);
    assert!(ch.saisir('-'));
    assert!(ch.saisir('5'));
    assert_eq!(ch.valeur(), rat(-5, 1));
}

#[test]
fn plus_puis_moins() {
    // "+" seul est refusé (retour silencieux), le "-" suivant ouvre un négatif :
    // même état que "+-" validé d’un bloc.
    let l = Locale::point();
    let mut ch = ChampMontant::new(l.clone());
    assert!(!ch.saisir('+'));
    assert!(ch.saisir('-'));
    assert_eq!(ch.etat(), &d_un_bloc(&l, "+-"));
    assert_eq!(ch.etat(), &EtatMontant::MoinsEnAttente);
}

#[test]
fn moins_plus_retombe_a_zero_vrai() {
    let l = Locale::point();
    let ch = taper(l.clone(), "-+");
    assert_eq!(ch.texte(), "");
    assert_eq!(ch.etat(), &d_un_bloc(&l, "-+"));
    assert_eq!(ch.etat(), &EtatMontant::Vide);
}

#[test]
fn expression_complete_frappe_par_frappe() {
    let l = Locale::point();
    for s in ["12.5*2", "100-0.01", "7/2+1", "3×4÷6"] {
        let ch = taper(l.clone(), s);
        assert_eq!(ch.etat(), &d_un_bloc(&l, s), "s={s:?}");
    }
}

#[test]
fn zero_calcule_apres_moins_frappe_par_frappe() {
    // "-5+5" vaut 0 : ni moins en attente, ni "-" laissé à la validation
    let l = Locale::point();
    let mut ch = taper(l.clone(), "-5+5");
    assert_eq!(ch.etat(), &d_un_bloc(&l, "-5+5"));
    assert_eq!(ch.etat(), &EtatMontant::Defini(rat(0, 1)));
    assert_eq!(ch.affichage(), "");

    ch.valider();
    assert_eq!(ch.texte(), "");
    assert!(ch.saisir('3'));
    assert_eq!(ch.valeur(), rat(3, 1));
}

#[test]
fn moins_zero_litteral_frappe_par_frappe() {
    let l = Locale::point();
    let mut ch = taper(l, "-0.00");
    assert_eq!(ch.etat(), &EtatMontant::MoinsEnAttente);
    assert!(ch.saisir('5'));
    assert_eq!(ch.valeur(), rat(-5, 1000));
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn dix_sur_zero_et_dix_sur_cinq() {
    let l = Locale::point();
    assert!(evaluer_saisie("10/0", &l, &EtatMontant::Vide).is_err());
    assert_eq!(d_un_bloc(&l, "10/5"), EtatMontant::Defini(rat(2, 1)));
}

/* ------------------------ Symboles adjacents ------------------------ */

#[test]
fn symboles_adjacents_toujours_refuses() {
    let l = Locale::point();
    for s in ["3+*2", "3.+2", "+*", "1-/", "2**", "9÷×1"] {
        assert!(evaluer_saisie(s, &l, &EtatMontant::Vide).is_err(), "s={s:?}");
    }
    let v = Locale::virgule();
    assert!(evaluer_saisie("3,.2", &v, &EtatMontant::Vide).is_err());
    assert!(evaluer_saisie("3,.2", &l, &EtatMontant::Vide).is_err());
}

/* ------------------------ Locale ------------------------ */

#[test]
fn locale_echange() {
    let v = Locale::virgule();
    assert_eq!(d_un_bloc(&v, "3,5"), EtatMontant::Defini(rat(7, 2)));
    // en locale point, "3,5" n’a pas d’autre interprétation : refusé
    assert!(evaluer_saisie("3,5", &Locale::point(), &EtatMontant::Vide).is_err());
}

/* ------------------------ Formateur ------------------------ */

#[test]
fn formater_analyser_aller_retour() {
    let l = Locale::point();
    let v = analyser("12.50", &l).unwrap().unwrap();
    assert_eq!(formater(&v, &l), "12.5");

    // "" <-> zéro vrai
    assert_eq!(analyser("", &l), Ok(Some(BigRational::zero())));
    assert_eq!(formater(&BigRational::zero(), &l), "");
}

#[test]
fn sentinelle_distincte_du_zero() {
    let l = Locale::point();
    let vide = analyser("", &l).unwrap();
    let zero = analyser("0", &l).unwrap();
    assert!(vide.is_some());
    assert!(zero.is_none());
}

#[test]
fn texte_valide_reste_valide_apres_validation() {
    let l = Locale::virgule();
    let mut ch = taper(l.clone(), "1,25×4");
    ch.valider();
    assert_eq!(ch.texte(), "5");
    let mut ch = taper(l, "1÷8");
    ch.valider();
    assert_eq!(ch.texte(), "0,125");
    // le texte formaté se ré-analyse vers la même valeur
    assert_eq!(analyser(ch.texte(), ch.locale()), Ok(Some(rat(1, 8))));
}

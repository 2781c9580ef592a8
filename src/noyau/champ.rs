// src/noyau/champ.rs
//
// Champ montant : texte du champ + état lié au formulaire.
//
// Contrats :
// - une édition refusée ne change RIEN (retour silencieux au dernier texte accepté)
// - aucune erreur ne sort d’ici
// - une instance par contrôle de formulaire, pas de partage

use num_rational::BigRational;
use num_traits::Zero;

use super::eval::{evaluer_saisie, Evaluation};
use super::format::{formater, formater_etat};
use super::locale::Locale;
use super::montant::EtatMontant;

#[derive(Clone, Debug, Default)]
pub struct ChampMontant {
    /// Dernière saisie acceptée (texte + état).
    courant: Evaluation,
    locale: Locale,
}

impl ChampMontant {
    pub fn new(locale: Locale) -> Self {
        Self {
            courant: Evaluation::default(),
            locale,
        }
    }

    pub fn texte(&self) -> &str {
        &self.courant.texte
    }

    pub fn etat(&self) -> &EtatMontant {
        &self.courant.etat
    }

    /// Texte hors édition ("" pour une valeur nulle, l’invite reste visible).
    pub fn affichage(&self) -> &str {
        self.courant.affichage()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Valeur liée au formulaire.
    pub fn valeur(&self) -> BigRational {
        self.courant.etat.valeur()
    }

    /// Propose un nouveau contenu complet. `false` = édition refusée, rien n’a bougé.
    pub fn editer(&mut self, candidat: &str) -> bool {
        if candidat == self.courant.texte {
            return true;
        }

        match evaluer_saisie(candidat, &self.locale, &self.courant.etat) {
            Ok(ev) => {
                self.courant = ev;
                true
            }
            Err(rejet) => {
                tracing::debug!(
                    candidat,
                    conserve = %self.courant.texte,
                    raison = %rejet,
                    "saisie refusée"
                );
                false
            }
        }
    }

    /// Frappe d’un caractère en fin de champ.
    pub fn saisir(&mut self, c: char) -> bool {
        let mut candidat = self.courant.texte.clone();
        candidat.push(c);
        self.editer(&candidat)
    }

    /// Retour arrière d’un caractère.
    pub fn effacer(&mut self) -> bool {
        let mut candidat = self.courant.texte.clone();
        if candidat.pop().is_none() {
            return false;
        }
        self.editer(&candidat)
    }

    /// Touche C : retour au zéro vrai.
    pub fn vider(&mut self) {
        self.courant = Evaluation::default();
    }

    /// Fin d’édition : le texte devient la valeur formatée.
    pub fn valider(&mut self) -> &EtatMontant {
        self.courant.texte = formater_etat(&self.courant.etat, &self.locale);
        &self.courant.etat
    }

    /// Charge une valeur déjà validée (venue du formulaire). Zéro -> zéro vrai.
    pub fn charger(&mut self, valeur: &BigRational) {
        let etat = if valeur.is_zero() {
            EtatMontant::Vide
        } else {
            EtatMontant::Defini(valeur.clone())
        };
        self.courant = Evaluation {
            texte: formater(valeur, &self.locale),
            etat,
        };
    }

    /// Changement de locale : le texte est reformaté depuis la valeur.
    pub fn changer_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.courant.texte = formater_etat(&self.courant.etat, &self.locale);
    }
}

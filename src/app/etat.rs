//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le champ montant + le tampon du TextEdit, et offrir les actions
//! des boutons (frappe, DEL, C, validation) sans logique d’affichage.
//!
//! Contrats :
//! - Toute la logique de saisie vit dans noyau::ChampMontant.
//! - Le tampon du TextEdit est toujours ramené au texte du champ (retour silencieux).

use num_rational::BigRational;

use crate::noyau::format::{analyser, formater};
use crate::noyau::{ChampMontant, EtatMontant, Locale};

#[derive(Clone, Debug)]
pub struct AppMontant {
    // --- saisie ---
    pub champ: ChampMontant,
    /// Tampon édité par egui ; resynchronisé après chaque frappe.
    pub tampon: String,

    // --- sorties ---
    /// Dernière valeur validée (Enter / "="), formatée.
    pub derniere_validation: String,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppMontant {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl AppMontant {
    pub fn new(locale: Locale) -> Self {
        Self {
            champ: ChampMontant::new(locale),
            tampon: String::new(),
            derniere_validation: String::new(),
            focus_entree: true,
        }
    }

    /* ------------------------ Actions (état seulement) ------------------------ */

    /// Après une édition egui : le champ accepte ou non, le tampon suit le champ.
    pub fn appliquer_tampon(&mut self) {
        let candidat = std::mem::take(&mut self.tampon);
        self.champ.editer(&candidat);
        self.resynchroniser();
    }

    /// Bouton du pavé.
    pub fn touche(&mut self, c: char) {
        self.champ.saisir(c);
        self.resynchroniser();
        self.focus_entree = true;
    }

    /// DEL
    pub fn retour_arriere(&mut self) {
        self.champ.effacer();
        self.resynchroniser();
        self.focus_entree = true;
    }

    /// C
    pub fn vider(&mut self) {
        self.champ.vider();
        self.resynchroniser();
        self.focus_entree = true;
    }

    /// Enter : fin d’édition.
    ///
    /// Le texte validé repasse par `analyser` ; la valeur obtenue est celle liée
    /// au formulaire, et le champ est rechargé depuis elle (valeur = ce qui est affiché).
    pub fn valider(&mut self) {
        self.champ.valider();
        let locale = self.champ.locale().clone();
        match analyser(self.champ.texte(), &locale) {
            Ok(Some(v)) => {
                self.champ.charger(&v);
                self.derniere_validation = valeur_lisible(&v, &locale);
            }
            // "-" : moins en attente, aucune valeur définie
            Ok(None) => self.derniere_validation = "−0".to_string(),
            Err(e) => {
                tracing::warn!(texte = self.champ.texte(), erreur = %e, "texte validé illisible");
            }
        }
        self.resynchroniser();
        self.focus_entree = true;
    }

    pub fn changer_locale(&mut self, locale: Locale) {
        self.champ.changer_locale(locale);
        self.resynchroniser();
    }

    /// Libellé court de l’état (panneau d’info).
    pub fn libelle_etat(&self) -> String {
        match self.champ.etat() {
            EtatMontant::Vide => "vide".to_string(),
            EtatMontant::MoinsEnAttente => "moins en attente".to_string(),
            EtatMontant::Defini(_) => format!(
                "défini : {}",
                valeur_lisible(&self.champ.valeur(), self.champ.locale())
            ),
        }
    }

    fn resynchroniser(&mut self) {
        self.tampon = self.champ.texte().to_string();
    }
}

/// Valeur formatée pour le panneau d’info : le zéro s’y lit "0".
fn valeur_lisible(v: &BigRational, locale: &Locale) -> String {
    let txt = formater(v, locale);
    if txt.is_empty() {
        "0".to_string()
    } else {
        txt
    }
}

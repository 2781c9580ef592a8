// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Un seul champ montant, validé à chaque frappe
// - Clavier : Enter valide (quand le champ est focus)
// - Tactile : pavé avec opérateurs, ± et =, focus redonné après clic
//
// Note :
// - Une frappe refusée ne montre rien : le tampon revient simplement au dernier texte accepté.

use eframe::egui;

use super::etat::AppMontant;
use crate::noyau::Locale;

impl AppMontant {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Montant");
        ui.add_space(6.0);

        self.ui_entree(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_infos(ui);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.tampon)
                .desired_width(ui.available_width())
                .hint_text("0")
                .id_source("montant_edit")
                .code_editor(),
        );

        if resp.changed() {
            self.appliquer_tampon();
        }

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter valide (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.valider();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Séparateur :");
            let mut sep = self.champ.locale().separateur_decimal;
            ui.radio_value(&mut sep, '.', "point");
            ui.radio_value(&mut sep, ',', "virgule");
            if sep != self.champ.locale().separateur_decimal {
                let base = if sep == ',' {
                    Locale::virgule()
                } else {
                    Locale::point()
                };
                let locale = Locale {
                    decimales_max: self.champ.locale().decimales_max,
                    ..base
                };
                self.changer_locale(locale);
                self.focus_entree = true;
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let sep = self.champ.locale().separateur_decimal;

        egui::Grid::new("pave_montant")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_touche(ui, '7');
                self.bouton_touche(ui, '8');
                self.bouton_touche(ui, '9');
                self.bouton_touche(ui, '÷');
                ui.end_row();

                self.bouton_touche(ui, '4');
                self.bouton_touche(ui, '5');
                self.bouton_touche(ui, '6');
                self.bouton_touche(ui, '×');
                ui.end_row();

                self.bouton_touche(ui, '1');
                self.bouton_touche(ui, '2');
                self.bouton_touche(ui, '3');
                self.bouton_touche(ui, '−');
                ui.end_row();

                self.bouton_touche(ui, '0');
                self.bouton_touche(ui, sep);
                self.bouton_touche(ui, '±');
                self.bouton_touche(ui, '+');
                ui.end_row();

                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                self.bouton_action(ui, "C", "Remet le montant à zéro", Action::Vider);
                self.bouton_touche(ui, '=');
                self.bouton_action(ui, "OK", "Valide le montant", Action::Valider);
                ui.end_row();
            });
    }

    fn ui_infos(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("État : {}", self.libelle_etat()));
        ui.label(format!("Affichage : {:?}", self.champ.affichage()));
        if !self.derniere_validation.is_empty() {
            ui.label("Dernière validation :");
            ui.monospace(self.derniere_validation.as_str());
        }
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, c: char) {
        let resp = ui.add_sized([46.0, 32.0], egui::Button::new(c.to_string()));
        if resp.clicked() {
            self.touche(c);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([46.0, 32.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Backspace => self.retour_arriere(),
                Action::Vider => self.vider(),
                Action::Valider => self.valider(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Backspace,
    Vider,
    Valider,
}

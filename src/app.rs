// src/app.rs
//
// Saisie de montant : module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppMontant (pour main.rs: use crate::app::AppMontant;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

pub use etat::AppMontant;

use eframe::egui;

impl eframe::App for AppMontant {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = touche C (montant remis à zéro)
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.vider();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

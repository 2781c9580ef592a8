// src/main.rs
//
// Saisie de montant : point d’entrée NATIF + WEB (WASM)
// -----------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : CLI + journal + eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod config;
mod noyau;

use app::AppMontant;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Saisie de montant";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use crate::config::ConfigSaisie;

    #[derive(Parser, Debug)]
    #[command(version, about = "Champ de saisie de montant (expressions décimales)")]
    pub struct Args {
        /// Fichier de configuration TOML
        #[arg(long, default_value = "saisie_montant.toml")]
        pub config: PathBuf,

        /// Force le séparateur décimal ('.' ou ',')
        #[arg(long)]
        pub separateur: Option<char>,
    }

    pub fn init_journal() {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filtre).init();
    }

    /// Config fichier, puis surcharge CLI.
    pub fn config(args: &Args) -> anyhow::Result<ConfigSaisie> {
        let mut config = ConfigSaisie::charger(&args.config)?;
        if let Some(sep) = args.separateur {
            config.locale.separateur_decimal = sep;
            config.verifier()?;
        }
        Ok(config)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    natif::init_journal();
    let args = natif::Args::parse();
    let config = natif::config(&args)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([360.0, 480.0])
            .with_min_inner_size([300.0, 420.0]),
        ..Default::default()
    };

    let locale = config.locale;
    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppMontant::new(locale)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppMontant, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppMontant>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}

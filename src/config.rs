//! Configuration de la saisie (fichier TOML optionnel).
//!
//! ```toml
//! [locale]
//! separateur_decimal = ","
//! decimales_max = 2
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::locale::DECIMALES_LIMITE;
use crate::noyau::Locale;

#[derive(Error, Debug)]
pub enum ErreurConfig {
    #[error("lecture de {chemin}: {source}")]
    Lecture {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML invalide: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("séparateur décimal non supporté: {0:?} (attendu '.' ou ',')")]
    Separateur(char),

    #[error("decimales_max trop grand: {0} (max {max})", max = DECIMALES_LIMITE)]
    Decimales(u32),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigSaisie {
    pub locale: Locale,
}

impl ConfigSaisie {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        let config: Self = toml::from_str(texte)?;
        config.verifier()?;
        Ok(config)
    }

    /// Fichier absent => valeurs par défaut.
    pub fn charger(chemin: &Path) -> Result<Self, ErreurConfig> {
        if !chemin.exists() {
            tracing::info!(chemin = %chemin.display(), "pas de configuration, défauts utilisés");
            return Ok(Self::default());
        }

        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.display().to_string(),
            source,
        })?;
        let config = Self::depuis_toml(&texte)?;
        tracing::info!(
            chemin = %chemin.display(),
            separateur = %config.locale.separateur_decimal,
            "configuration chargée"
        );
        Ok(config)
    }

    /// Le séparateur ne doit pas entrer en collision avec un chiffre ou un opérateur ;
    /// la précision reste bornée.
    pub fn verifier(&self) -> Result<(), ErreurConfig> {
        match self.locale.separateur_decimal {
            '.' | ',' => {}
            autre => return Err(ErreurConfig::Separateur(autre)),
        }
        if self.locale.decimales_max > DECIMALES_LIMITE {
            return Err(ErreurConfig::Decimales(self.locale.decimales_max));
        }
        Ok(())
    }
}

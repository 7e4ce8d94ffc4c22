//! src/reglages.rs
//!
//! Réglages d’affichage (facultatifs).
//!
//! Source (natif seulement) :
//! - chemin dans la variable `CALCULATRICE_REGLAGES`, sinon `calculatrice.toml`
//! - fichier absent => valeurs par défaut (pas une erreur)
//!
//! Web : valeurs par défaut.

use serde::Deserialize;
use thiserror::Error;

/// Variable d’environnement : chemin du fichier de réglages.
pub const VAR_REGLAGES: &str = "CALCULATRICE_REGLAGES";

/// Fichier cherché dans le répertoire courant.
pub const FICHIER_REGLAGES: &str = "calculatrice.toml";

const ZOOM_MIN: f32 = 0.5;
const ZOOM_MAX: f32 = 3.0;

/// Garde-fou fenêtre (natif).
const TAILLE_MIN: [f32; 2] = [280.0, 420.0];

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture impossible de {chemin}: {source}")]
    Lecture {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("réglages invalides: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Sombre,
    Clair,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    pub theme: Theme,
    pub zoom: f32,
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            theme: Theme::Sombre,
            zoom: 1.0,
            largeur: 340.0,
            hauteur: 520.0,
        }
    }
}

impl Reglages {
    /// Parse un texte TOML puis borne les valeurs.
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        let r: Reglages = toml::from_str(texte)?;
        Ok(r.borne())
    }

    /// Taille initiale de la fenêtre (bornée par le minimum).
    pub fn taille_fenetre(&self) -> [f32; 2] {
        [self.largeur, self.hauteur]
    }

    pub fn taille_min(&self) -> [f32; 2] {
        TAILLE_MIN
    }

    fn borne(mut self) -> Self {
        self.zoom = if self.zoom.is_finite() {
            self.zoom.clamp(ZOOM_MIN, ZOOM_MAX)
        } else {
            1.0
        };
        self.largeur = borne_dim(self.largeur, TAILLE_MIN[0]);
        self.hauteur = borne_dim(self.hauteur, TAILLE_MIN[1]);
        self
    }
}

fn borne_dim(v: f32, min: f32) -> f32 {
    if v.is_finite() {
        v.max(min)
    } else {
        min
    }
}

/* ------------------------ Chargement (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
impl Reglages {
    /// Charge depuis un fichier. `Ok(None)` si le fichier n’existe pas.
    pub fn charger(chemin: &std::path::Path) -> Result<Option<Self>, ErreurReglages> {
        match std::fs::read_to_string(chemin) {
            Ok(texte) => Self::depuis_toml(&texte).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ErreurReglages::Lecture {
                chemin: chemin.display().to_string(),
                source,
            }),
        }
    }

    /// Démarrage : ne bloque jamais (erreur => log + défauts).
    pub fn charger_ou_defaut() -> Self {
        let chemin = std::env::var_os(VAR_REGLAGES)
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from(FICHIER_REGLAGES));

        match Self::charger(&chemin) {
            Ok(Some(r)) => {
                log::info!("réglages chargés depuis {}", chemin.display());
                r
            }
            Ok(None) => {
                log::debug!("pas de {} : réglages par défaut", chemin.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{e} ; réglages par défaut");
                Self::default()
            }
        }
    }
}

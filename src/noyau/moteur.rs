//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice (sans vue).
//!
//! État :
//! - `entree`          : nombre en cours de saisie (texte, jamais vide, "0" par défaut)
//! - `attente`         : Libre, ou Operation { accumulateur, operateur }
//! - `nouvelle_saisie` : le prochain chiffre remplace l’entrée au lieu de s’y ajouter
//!
//! Contrats :
//! - Toutes les transitions sont totales (aucune erreur).
//! - Un opérateur sans accumulateur est impossible (type `Attente`).
//! - `entree` reste lisible comme nombre (éventuellement partiel : "5.").

use log::trace;

use super::format::{format_nombre, lire_nombre};
use super::operateur::Operateur;
use super::touche::Touche;

/// Valeur affichée au démarrage / après C.
pub const ENTREE_DEFAUT: &str = "0";

/// Opération en attente de son opérande droit.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Attente {
    #[default]
    Libre,
    Operation {
        accumulateur: String,
        operateur: Operateur,
    },
}

#[derive(Clone, Debug)]
pub struct Moteur {
    entree: String,
    attente: Attente,
    nouvelle_saisie: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            entree: ENTREE_DEFAUT.to_string(),
            attente: Attente::Libre,
            nouvelle_saisie: false,
        }
    }
}

impl Moteur {
    /* ------------------------ Lecture (pour la vue) ------------------------ */

    pub fn entree(&self) -> &str {
        &self.entree
    }

    pub fn accumulateur(&self) -> Option<&str> {
        match &self.attente {
            Attente::Operation { accumulateur, .. } => Some(accumulateur),
            Attente::Libre => None,
        }
    }

    pub fn operateur(&self) -> Option<Operateur> {
        match &self.attente {
            Attente::Operation { operateur, .. } => Some(*operateur),
            Attente::Libre => None,
        }
    }

    pub fn nouvelle_saisie(&self) -> bool {
        self.nouvelle_saisie
    }

    /// Ligne haute de l’écran : "12 +" si une opération attend, "" sinon.
    pub fn resume_attente(&self) -> String {
        match (self.accumulateur(), self.operateur()) {
            (Some(a), Some(op)) => format!("{a} {}", op.symbole()),
            _ => String::new(),
        }
    }

    /* ------------------------ Transitions ------------------------ */

    /// Point d’entrée unique : une touche => une transition.
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Virgule => self.virgule(),
            Touche::Operateur(op) => self.operateur_suivant(op),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer(),
            Touche::Supprimer => self.supprimer(),
            Touche::Pourcent => self.pourcent(),
            Touche::Signe => self.changer_signe(),
        }
        trace!(
            "touche={touche:?} entree={:?} attente={:?} nouvelle_saisie={}",
            self.entree,
            self.attente,
            self.nouvelle_saisie
        );
    }

    pub fn chiffre(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };

        if self.nouvelle_saisie {
            self.entree = c.to_string();
            self.nouvelle_saisie = false;
        } else if self.entree == ENTREE_DEFAUT || !self.saisie_extensible() {
            self.entree = c.to_string();
        } else {
            self.entree.push(c);
        }
    }

    pub fn virgule(&mut self) {
        if self.nouvelle_saisie {
            self.entree = "0.".to_string();
            self.nouvelle_saisie = false;
        } else if self.saisie_extensible() && !self.entree.contains(['.', 'e']) {
            // forme exposant ("1e21") : pas de virgule possible
            self.entree.push('.');
        }
    }

    /// Opérateur : enchaîne le calcul en attente si un opérande a été tapé depuis.
    pub fn operateur_suivant(&mut self, op: Operateur) {
        let accumulateur = match std::mem::take(&mut self.attente) {
            Attente::Operation {
                accumulateur,
                operateur,
            } if !self.nouvelle_saisie => {
                let r = calculer(operateur, &accumulateur, &self.entree);
                self.entree = r.clone();
                r
            }
            Attente::Operation { .. } | Attente::Libre => self.entree.clone(),
        };

        self.attente = Attente::Operation {
            accumulateur,
            operateur: op,
        };
        self.nouvelle_saisie = true;
    }

    /// = : sans opération en attente, ne fait rien.
    pub fn egal(&mut self) {
        if let Attente::Operation {
            accumulateur,
            operateur,
        } = std::mem::take(&mut self.attente)
        {
            self.entree = calculer(operateur, &accumulateur, &self.entree);
            self.nouvelle_saisie = true;
        }
    }

    /// C : tout remettre à zéro.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /// DEL : rien à effacer juste après un opérateur ou "=".
    pub fn supprimer(&mut self) {
        if self.nouvelle_saisie {
            return;
        }
        if self.entree.chars().count() <= 1 || !self.saisie_extensible() {
            self.entree = ENTREE_DEFAUT.to_string();
            return;
        }

        self.entree.pop();
        // "1e2" => "1e" puis "1" ; "-5" => "-" puis "0"
        let garde = self.entree.trim_end_matches(['e', '-', '+']).len();
        self.entree.truncate(garde);
        if self.entree.is_empty() {
            self.entree = ENTREE_DEFAUT.to_string();
        }
    }

    /// % : entrée / 100 (n’agit pas sur l’opération en attente).
    pub fn pourcent(&mut self) {
        self.entree = format_nombre(lire_nombre(&self.entree) / 100.0);
    }

    /// ± : entrée × -1 (n’agit pas sur l’opération en attente).
    pub fn changer_signe(&mut self) {
        self.entree = format_nombre(lire_nombre(&self.entree) * -1.0);
    }

    /// "inf" / "NaN" ne se complètent pas au clavier.
    fn saisie_extensible(&self) -> bool {
        self.entree.parse::<f64>().is_ok_and(f64::is_finite)
    }
}

fn calculer(op: Operateur, a: &str, b: &str) -> String {
    format_nombre(op.appliquer(lire_nombre(a), lire_nombre(b)))
}

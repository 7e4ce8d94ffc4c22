//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le moteur et router chaque touche vers UNE transition.
//!
//! Contrats :
//! - Aucune arithmétique ici (tout passe par le moteur).
//! - L’affichage est une projection du moteur : pas d’état dupliqué.

use log::debug;

use crate::noyau::{Moteur, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub moteur: Moteur,
}

impl AppCalc {
    /// Une touche (pavé ou clavier) => une transition du moteur.
    pub fn appuyer(&mut self, touche: Touche) {
        if touche == Touche::Effacer {
            debug!("remise à zéro");
        }
        self.moteur.appuyer(touche);
    }

    /// Plusieurs touches reçues dans la même frame : traitées dans l’ordre.
    pub fn appuyer_tout(&mut self, touches: impl IntoIterator<Item = Touche>) {
        for t in touches {
            self.appuyer(t);
        }
    }
}

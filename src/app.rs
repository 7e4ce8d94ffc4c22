// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier physique = même événements que le pavé
//
// Important:
// - Un événement clavier => une touche => une transition du moteur.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches: Vec<Touche> =
            ctx.input(|i| i.events.iter().filter_map(touche_depuis_evenement).collect());
        self.appuyer_tout(touches);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Événement egui -> touche.
///
/// - texte tapé : chiffres, opérateurs, '.', ',', '%', '='
/// - Entrée = "=", Retour arrière = DEL, Échap = C
fn touche_depuis_evenement(ev: &egui::Event) -> Option<Touche> {
    match ev {
        egui::Event::Text(t) => {
            let mut chars = t.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Touche::depuis_caractere(c),
                _ => None,
            }
        }
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => Some(Touche::Egal),
            egui::Key::Backspace => Some(Touche::Supprimer),
            egui::Key::Escape => Some(Touche::Effacer),
            _ => None,
        },
        _ => None,
    }
}

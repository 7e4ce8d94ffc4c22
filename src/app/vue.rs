// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : ligne d’attente ("12 +") + entrée en gros, alignées à droite
// - Pavé  : grille 4 colonnes (noyau::touche::PAVE)
// - L’opérateur en attente est surligné
//
// La vue ne modifie l’état qu’à travers AppCalc::appuyer.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::touche::{Touche, PAVE};

const TAILLE_ENTREE: f32 = 34.0;
const TAILLE_ATTENTE: f32 = 16.0;
const TAILLE_TOUCHE: [f32; 2] = [68.0, 52.0];
const ESPACEMENT: f32 = 6.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        self.ui_ecran(ui);

        ui.add_space(10.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        // largeur du pavé => écran aligné dessus
        let largeur = 4.0 * TAILLE_TOUCHE[0] + 3.0 * ESPACEMENT;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_width(largeur);
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne vide gardée pour que l’écran ne saute pas
                    let attente = self.moteur.resume_attente();
                    let attente = if attente.is_empty() {
                        " ".to_string()
                    } else {
                        attente
                    };
                    ui.label(
                        egui::RichText::new(attente)
                            .monospace()
                            .size(TAILLE_ATTENTE)
                            .weak(),
                    );
                    // saisie en cours en gras ; résultat / opérande figé en normal
                    let mut entree = egui::RichText::new(self.moteur.entree())
                        .monospace()
                        .size(TAILLE_ENTREE);
                    if !self.moteur.nouvelle_saisie() {
                        entree = entree.strong();
                    }
                    ui.add(egui::Label::new(entree).truncate());
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([ESPACEMENT, ESPACEMENT])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton_touche(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let texte = egui::RichText::new(touche.libelle()).size(22.0);

        let mut bouton = egui::Button::new(texte);
        match touche {
            Touche::Operateur(op) => {
                bouton = bouton.selected(self.moteur.operateur() == Some(op));
            }
            Touche::Egal => {
                bouton = bouton.fill(ui.visuals().selection.bg_fill);
            }
            _ => {}
        }

        let resp = ui.add_sized(TAILLE_TOUCHE, bouton).on_hover_text(touche.aide());
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}

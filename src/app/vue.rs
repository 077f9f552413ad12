// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Afficheur : lecture seule, aligné à droite, gras, monospace ; rouge si erreur
// - Pavé 6×6 : chaque bouton actif envoie son étiquette comme identifiant de touche
// - MC / MR et cases vides : présents mais inactifs (pas de mémoire)

use eframe::egui;

use super::etat::AppCalc;

/// Disposition du pavé ("" = case vide).
const PAVE: [[&str; 6]; 6] = [
    ["MC", "MR", "C", "CE", "<-", "+/-"],
    ["7", "8", "9", "/", "sin", "cos"],
    ["4", "5", "6", "*", "tan", "sqrt"],
    ["1", "2", "3", "-", "x^2", "x^y"],
    ["0", ".", "=", "+", "log", "ln"],
    ["1/x", "%", "π", "e", "", ""],
];

/// Boutons visibles mais sans effet.
const INACTIFS: [&str; 2] = ["MC", "MR"];

fn bouton_actif(etiquette: &str) -> bool {
    !etiquette.is_empty() && !INACTIFS.contains(&etiquette)
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(4.0, 4.0);

        self.ui_afficheur(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_afficheur(&self, ui: &mut egui::Ui) {
        let couleur = if self.moteur.en_erreur() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        let texte = egui::RichText::new(&self.affichage)
            .monospace()
            .strong()
            .size(self.config.taille_police_affichage)
            .color(couleur);

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(texte);
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // 6 colonnes qui se partagent la largeur
        let espace = ui.spacing().item_spacing.x;
        let largeur = ((ui.available_width() - 5.0 * espace) / 6.0).max(40.0);
        let taille = egui::vec2(largeur, 36.0);

        egui::Grid::new("pave_calculatrice")
            .num_columns(6)
            .spacing([espace, espace])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for etiquette in rangee {
                        self.bouton(ui, etiquette, taille);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, etiquette: &str, taille: egui::Vec2) {
        let texte = egui::RichText::new(etiquette).size(self.config.taille_police_boutons);
        let resp = ui.add_enabled(
            bouton_actif(etiquette),
            egui::Button::new(texte).min_size(taille),
        );

        if resp.clicked() {
            self.executer(etiquette);
        }
    }
}

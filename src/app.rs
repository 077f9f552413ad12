// src/app.rs
//
// Calculatrice de bureau — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier en identifiants de touches (même chemin que les boutons)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Caractère tapé -> identifiant de touche.
fn touche_texte(c: char) -> Option<&'static str> {
    if let Some(d) = c.to_digit(10) {
        return Some(CHIFFRES[d as usize]);
    }
    match c {
        // ',' : pavé numérique en disposition française
        '.' | ',' => Some("."),
        '+' => Some("+"),
        '-' => Some("-"),
        '*' => Some("*"),
        '/' => Some("/"),
        '%' => Some("%"),
        '^' => Some("x^y"),
        '=' => Some("="),
        _ => None,
    }
}

/// Touche spéciale -> identifiant de touche.
fn touche_speciale(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::Enter => Some("="),
        egui::Key::Backspace => Some("<-"),
        egui::Key::Escape => Some("C"),
        egui::Key::Delete => Some("CE"),
        _ => None,
    }
}

fn touches_clavier(ctx: &egui::Context) -> Vec<&'static str> {
    ctx.input(|i| {
        i.events
            .iter()
            .flat_map(|ev| -> Vec<&'static str> {
                match ev {
                    egui::Event::Text(t) => t.chars().filter_map(touche_texte).collect(),
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => touche_speciale(*key).into_iter().collect(),
                    _ => Vec::new(),
                }
            })
            .collect()
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier : mêmes identifiants que les boutons, dans l’ordre de frappe.
        for id in touches_clavier(ctx) {
            self.executer(id);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

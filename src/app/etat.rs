//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur (pas de singleton global), recevoir les touches
//! (boutons ou clavier) sous forme d’identifiants, et tenir à jour le texte
//! de l’afficheur après chaque touche.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `noyau::Moteur::traiter`.
//! - Touche inconnue : ignorée par le moteur, afficheur inchangé.
//! - Faute d’appel : journalisée, jamais propagée à l’écran.

use tracing::warn;

use crate::config::ConfigCalc;
use crate::noyau::Moteur;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- noyau ---
    pub moteur: Moteur,

    // --- sortie (afficheur) ---
    pub affichage: String,

    // --- paramètres ---
    pub config: ConfigCalc,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(ConfigCalc::default())
    }
}

impl AppCalc {
    pub fn new(config: ConfigCalc) -> Self {
        let moteur = Moteur::new();
        let affichage = moteur.affichage().to_string();
        Self {
            moteur,
            affichage,
            config,
        }
    }

    /// Une touche = un identifiant (étiquette du bouton, ou traduction clavier).
    pub fn executer(&mut self, id: &str) {
        match self.moteur.traiter(id) {
            Ok(texte) => {
                self.affichage.clear();
                self.affichage.push_str(texte);
            }
            Err(faute) => warn!(%faute, id, "touche refusée"),
        }
    }
}

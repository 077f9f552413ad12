// src/config.rs
//
// Configuration utilisateur (fichier géré par confy en natif)
// ----------------------------------------------------------
// - Chargée une fois au démarrage (natif) ; le web garde les valeurs par défaut
// - Version vérifiée, tailles bornées avant usage (fichier édité à la main)

use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
const NOM_CONFIG: &str = "calculatrice-bureau";

/// Format courant du fichier ; un autre numéro => valeurs par défaut.
const VERSION_CONFIG: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConfigCalc {
    pub version: u32,
    pub largeur_fenetre: f32,
    pub hauteur_fenetre: f32,
    pub taille_police_affichage: f32,
    pub taille_police_boutons: f32,
    /// Filtre tracing (ex: "info", "calculatrice_bureau=debug"). RUST_LOG prime.
    pub niveau_journal: String,
}

impl Default for ConfigCalc {
    fn default() -> Self {
        Self {
            version: VERSION_CONFIG,
            largeur_fenetre: 420.0,
            hauteur_fenetre: 360.0,
            taille_police_affichage: 24.0,
            taille_police_boutons: 16.0,
            niveau_journal: "info".to_string(),
        }
    }
}

impl ConfigCalc {
    /// Fichier d’un autre format : on repart des défauts ; sinon on borne.
    pub fn normalisee(self) -> Self {
        if self.version != VERSION_CONFIG {
            tracing::warn!(
                version = self.version,
                attendue = VERSION_CONFIG,
                "version de configuration inconnue, valeurs par défaut"
            );
            return Self::default();
        }
        self.bornee()
    }

    /// Garde-fou : bornes raisonnables (anti fenêtre minuscule / police géante).
    fn bornee(mut self) -> Self {
        self.largeur_fenetre = self.largeur_fenetre.clamp(320.0, 4096.0);
        self.hauteur_fenetre = self.hauteur_fenetre.clamp(280.0, 4096.0);
        self.taille_police_affichage = self.taille_police_affichage.clamp(10.0, 96.0);
        self.taille_police_boutons = self.taille_police_boutons.clamp(8.0, 48.0);
        self
    }
}

/// Natif : fichier confy (créé avec les défauts s’il n’existe pas).
/// L’appelant décide quoi faire d’un échec (journal pas encore installé ici).
#[cfg(not(target_arch = "wasm32"))]
pub fn charger() -> Result<ConfigCalc, confy::ConfyError> {
    confy::load::<ConfigCalc>(NOM_CONFIG, None).map(ConfigCalc::normalisee)
}

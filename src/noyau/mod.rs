//! Noyau de la calculatrice de bureau
//!
//! Organisation interne :
//! - commande.rs   : vocabulaire fermé des touches (identifiant -> Commande)
//! - erreur.rs     : Faute (appelant) / ErreurCalcul (verrouillée)
//! - format.rs     : affichage 12 décimales + lecture stricte
//! - operateurs.rs : opérateurs binaires / unaires (f64, trig en degrés)
//! - moteur.rs     : machine à états (saisie, accumulateur, erreur)

pub mod commande;
pub mod erreur;
pub mod format;
pub mod moteur;
pub mod operateurs;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use moteur::Moteur;

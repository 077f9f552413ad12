// src/noyau/erreur.rs
//
// Deux niveaux d’erreurs
// ----------------------
// - Faute        : précondition violée par le code appelant (glue UI). Remontée.
// - ErreurCalcul : erreur “calculatrice” (÷0, domaine, non fini, saisie illisible).
//                  Jamais remontée : le moteur la convertit en état Erreur verrouillé.

use thiserror::Error;

use super::operateurs::OpUnaire;

/// Faute de programmation côté appelant (InvalidArgument).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Faute {
    #[error("argument invalide : {attendu} attendu, reçu {recu:?}")]
    ArgumentInvalide { attendu: &'static str, recu: char },
}

/// Cause d’une erreur de calcul (journalisée, puis verrouillée dans le moteur).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("{0:?} : argument hors domaine")]
    HorsDomaine(OpUnaire),

    #[error("résultat non fini")]
    ResultatNonFini,

    #[error("saisie illisible : {0:?}")]
    SaisieInvalide(String),
}
